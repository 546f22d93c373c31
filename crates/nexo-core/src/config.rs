//! Engine configuration
//!
//! The trust-zone band and tier multipliers are injected into the engine as
//! an immutable config value rather than read from hidden globals, so tests
//! and deployments can vary them without touching engine internals.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Start from compiled-in defaults (80%–100% band, 1.0/1.4/2.0 multipliers)
//! 2. Overlay any fields present in an optional TOML override file

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Tier;

/// Tunable thresholds and multipliers for the budget engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Floor of the trust zone as a fraction of the total budget
    pub trust_zone_min: f64,
    /// Ceiling of the trust zone as a fraction of the total budget
    pub trust_zone_max: f64,
    /// Overflow below this fraction of the budget is advisory-only
    /// ("slightly over") rather than critical
    pub slight_overflow_ratio: f64,
    /// Relative price of an item at each quality tier
    pub standard_multiplier: f64,
    pub comfort_multiplier: f64,
    pub premium_multiplier: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trust_zone_min: 0.80,        // spend at least 80% of the budget
            trust_zone_max: 1.00,        // never plan past the ceiling
            slight_overflow_ratio: 0.10, // <10% over reads as a near miss
            standard_multiplier: 1.0,
            comfort_multiplier: 1.4,
            premium_multiplier: 2.0,
        }
    }
}

impl EngineConfig {
    /// Cost multiplier for a tier
    pub fn multiplier(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Standard => self.standard_multiplier,
            Tier::Comfort => self.comfort_multiplier,
            Tier::Premium => self.premium_multiplier,
        }
    }

    /// Check internal consistency of the thresholds.
    ///
    /// The band must be a proper non-negative interval and multipliers must
    /// be positive and strictly ascending, otherwise the optimizer's deltas
    /// lose their sign guarantees.
    pub fn validate(&self) -> Result<()> {
        if self.trust_zone_min < 0.0 || self.trust_zone_min >= self.trust_zone_max {
            return Err(Error::Config(format!(
                "trust zone [{}, {}] is not a valid band",
                self.trust_zone_min, self.trust_zone_max
            )));
        }
        if self.slight_overflow_ratio < 0.0 {
            return Err(Error::Config(format!(
                "slight_overflow_ratio must be non-negative, got {}",
                self.slight_overflow_ratio
            )));
        }
        if self.standard_multiplier <= 0.0
            || self.standard_multiplier >= self.comfort_multiplier
            || self.comfort_multiplier >= self.premium_multiplier
        {
            return Err(Error::Config(format!(
                "tier multipliers must be positive and ascending, got {}/{}/{}",
                self.standard_multiplier, self.comfort_multiplier, self.premium_multiplier
            )));
        }
        Ok(())
    }

    /// Parse a TOML override; absent fields keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML override file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
