//! Domain models for Nexo

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// Supported plan currencies
///
/// The engine never converts between currencies; the tag travels with the
/// plan and is echoed into advisory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Brl,
    Usd,
    Eur,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brl => "BRL",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BRL" => Ok(Self::Brl),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Itinerary item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flight,
    Hotel,
    Activity,
    Food,
    Transport,
    Shopping,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Hotel => "hotel",
            Self::Activity => "activity",
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
        }
    }

    /// Whether the optimizer may change this item's tier.
    ///
    /// Only lodging and activities come in quality tiers; everything else
    /// is fixed-cost.
    pub fn is_adjustable(&self) -> bool {
        matches!(self, Self::Hotel | Self::Activity)
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flight" => Ok(Self::Flight),
            "hotel" => Ok(Self::Hotel),
            "activity" => Ok(Self::Activity),
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "shopping" => Ok(Self::Shopping),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Quality tier of a hotel or activity item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Standard,
    Comfort,
    Premium,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Comfort => "comfort",
            Self::Premium => "premium",
        }
    }

    /// The next tier up, or `None` at the top
    pub fn next(&self) -> Option<Tier> {
        match self {
            Self::Standard => Some(Self::Comfort),
            Self::Comfort => Some(Self::Premium),
            Self::Premium => None,
        }
    }

    /// The next tier down, or `None` at the bottom
    pub fn previous(&self) -> Option<Tier> {
        match self {
            Self::Premium => Some(Self::Comfort),
            Self::Comfort => Some(Self::Standard),
            Self::Standard => None,
        }
    }

    /// Tier assumed for an item that carries no explicit tier.
    ///
    /// The upgrade pass assumes `standard`, the downgrade pass assumes
    /// `comfort`. The asymmetry is inherited from the original pricing
    /// logic and kept for compatibility (see DESIGN.md).
    pub fn default_for(action: OptimizationAction) -> Tier {
        match action {
            OptimizationAction::Upgrade => Self::Standard,
            OptimizationAction::Downgrade => Self::Comfort,
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "comfort" => Ok(Self::Comfort),
            "premium" => Ok(Self::Premium),
            _ => Err(format!("Unknown tier: {}", s)),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a tier adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationAction {
    Upgrade,
    Downgrade,
}

impl OptimizationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upgrade => "upgrade",
            Self::Downgrade => "downgrade",
        }
    }
}

impl std::str::FromStr for OptimizationAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upgrade" => Ok(Self::Upgrade),
            "downgrade" => Ok(Self::Downgrade),
            _ => Err(format!("Unknown optimization action: {}", s)),
        }
    }
}

impl std::fmt::Display for OptimizationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final classification of a budget evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetStatus {
    /// Spending sits inside the trust zone
    Ideal,
    /// Spending is below the trust zone floor
    Suboptimal,
    /// Spending exceeds the budget ceiling
    Overflow,
    /// Correction was attempted but the plan could not be brought fully
    /// into the trust zone; the deviation is explained, not blocked
    Justified,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ideal => "IDEAL",
            Self::Suboptimal => "SUBOPTIMAL",
            Self::Overflow => "OVERFLOW",
            Self::Justified => "JUSTIFIED",
        }
    }
}

impl std::str::FromStr for BudgetStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IDEAL" => Ok(Self::Ideal),
            "SUBOPTIMAL" => Ok(Self::Suboptimal),
            "OVERFLOW" => Ok(Self::Overflow),
            "JUSTIFIED" => Ok(Self::Justified),
            _ => Err(format!("Unknown budget status: {}", s)),
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One priced component of a trip plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryItem {
    /// Opaque identifier, unique within a plan
    pub id: String,
    /// Display label (not used by engine logic)
    pub name: String,
    pub category: Category,
    /// Current priced value in the plan's currency
    pub cost: f64,
    /// Quality tier; absent tiers get a per-pass default (see `Tier::default_for`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
}

/// A trip plan submitted for budget evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    /// Declared ceiling for the whole plan
    pub total_budget: f64,
    pub currency: Currency,
    /// Order matters only for optimizer tie-breaking between equal costs
    pub items: Vec<ItineraryItem>,
}

impl TripPlan {
    /// Boundary validation of caller-supplied values.
    ///
    /// Item costs must be finite and non-negative, and the budget finite.
    /// Unknown tier/category/currency strings never get this far; serde
    /// rejects them during deserialization.
    pub fn validate(&self) -> Result<()> {
        if !self.total_budget.is_finite() {
            return Err(Error::InvalidPlan(format!(
                "total_budget must be finite, got {}",
                self.total_budget
            )));
        }
        for item in &self.items {
            if !item.cost.is_finite() {
                return Err(Error::InvalidItem(format!(
                    "item '{}' has non-finite cost {}",
                    item.id, item.cost
                )));
            }
            if item.cost < 0.0 {
                return Err(Error::InvalidItem(format!(
                    "item '{}' has negative cost {}",
                    item.id, item.cost
                )));
            }
        }
        Ok(())
    }
}

/// The acceptable utilization band of a budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustZone {
    /// Floor of the band (`total_budget * trust_zone_min`)
    pub min: f64,
    /// Ceiling of the band (`total_budget * trust_zone_max`)
    pub max: f64,
    /// Spend the band is being compared against
    pub current: f64,
}

impl TrustZone {
    /// Build the band for a budget with the given spend
    pub fn for_spend(total_budget: f64, current: f64, config: &EngineConfig) -> Self {
        Self {
            min: total_budget * config.trust_zone_min,
            max: total_budget * config.trust_zone_max,
            current,
        }
    }
}

/// A single accepted tier change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Optimization {
    pub item_id: String,
    pub action: OptimizationAction,
    pub from: Tier,
    pub to: Tier,
    /// Signed cost change: positive for upgrades, negative for downgrades
    pub delta: f64,
}
