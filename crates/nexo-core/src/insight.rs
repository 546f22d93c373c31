//! Advisory insight generation
//!
//! Maps a final numeric budget state to exactly one canned advisory message.
//! The templates form a closed set; selection is a handful of threshold
//! comparisons, and only reason/suggestion text is ever parameterized with
//! computed numbers.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::{Currency, Optimization, OptimizationAction};

/// Severity level of an advisory insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Worth addressing before booking
    Warning,
    /// Plan materially exceeds its budget
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    /// Numeric priority for sorting (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Info => 1,
            Severity::Warning => 2,
            Severity::Critical => 3,
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The closed set of advisory templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Spend sits inside the trust zone
    PerfectBalance,
    /// Budget underused and no correction was applied
    LowUsage,
    /// Upgrades were applied but could not lift spend to the floor
    CouldNotUpgrade,
    /// Over budget by less than the slight-overflow threshold
    SlightOverflow,
    /// Over budget and downgrades could not (or did not) close the gap
    CouldNotDowngrade,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerfectBalance => "perfect_balance",
            Self::LowUsage => "low_usage",
            Self::CouldNotUpgrade => "could_not_upgrade",
            Self::SlightOverflow => "slight_overflow",
            Self::CouldNotDowngrade => "could_not_downgrade",
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A canned advisory message describing the budget outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub reason: String,
    pub suggestion: String,
    pub severity: Severity,
}

/// Numeric state the insight selection runs over
#[derive(Debug, Clone)]
pub struct InsightContext {
    /// Post-optimization usage ratio (pre-optimization when no pass ran)
    pub usage_percent: f64,
    /// Whether the optimizer accepted at least one tier change.
    ///
    /// An invoked pass whose candidate set was empty counts as not-applied;
    /// that reading is what lets a slight overflow with no eligible items
    /// surface as a near miss instead of a hard failure (see DESIGN.md).
    pub optimization_applied: bool,
    pub optimization_success: bool,
    pub action: Option<OptimizationAction>,
    /// `total_budget - used_budget` after any accepted changes
    pub savings: f64,
    pub total_budget: f64,
    pub currency: Currency,
}

/// Select the advisory message for a final budget state
pub fn generate_insight(ctx: &InsightContext, config: &EngineConfig) -> Insight {
    if ctx.usage_percent >= config.trust_zone_min && ctx.usage_percent <= config.trust_zone_max {
        return Insight {
            kind: InsightKind::PerfectBalance,
            title: "Perfect balance".to_string(),
            reason: format!(
                "Planned spending sits between {:.0}% and {:.0}% of the trip budget.",
                config.trust_zone_min * 100.0,
                config.trust_zone_max * 100.0
            ),
            suggestion: "The itinerary makes full use of the budget without exceeding it. \
                         No changes needed."
                .to_string(),
            severity: Severity::Info,
        };
    }

    if ctx.usage_percent < config.trust_zone_min {
        if ctx.optimization_applied && !ctx.optimization_success {
            return Insight {
                kind: InsightKind::CouldNotUpgrade,
                title: "Upgrades limited by season".to_string(),
                reason: "Seasonal pricing prevented further upgrades for this itinerary."
                    .to_string(),
                suggestion: "Keep the current selection; the unused amount stays available \
                             for spending during the trip."
                    .to_string(),
                severity: Severity::Info,
            };
        }
        return Insight {
            kind: InsightKind::LowUsage,
            title: "Room to upgrade".to_string(),
            reason: format!(
                "Only {:.0}% of the trip budget is allocated.",
                ctx.usage_percent * 100.0
            ),
            suggestion: format!(
                "You still have {} {:.2} available. Consider upgrading hotels or activities.",
                ctx.currency, ctx.savings
            ),
            severity: Severity::Info,
        };
    }

    // Overflow
    let overflow_amount = (ctx.usage_percent - 1.0) * ctx.total_budget;
    let overflow_percent = ((ctx.usage_percent - 1.0) * 100.0).round();

    if ctx.optimization_applied && !ctx.optimization_success {
        return could_not_downgrade(ctx.currency, overflow_amount, overflow_percent);
    }
    if overflow_amount < ctx.total_budget * config.slight_overflow_ratio {
        return Insight {
            kind: InsightKind::SlightOverflow,
            title: "Slightly over budget".to_string(),
            reason: format!(
                "The plan exceeds the budget by {} {:.2} ({:.0}%).",
                ctx.currency, overflow_amount, overflow_percent
            ),
            suggestion: "A small adjustment to one hotel or activity would bring the plan \
                         back into range."
                .to_string(),
            severity: Severity::Warning,
        };
    }
    could_not_downgrade(ctx.currency, overflow_amount, overflow_percent)
}

fn could_not_downgrade(currency: Currency, amount: f64, percent: f64) -> Insight {
    Insight {
        kind: InsightKind::CouldNotDowngrade,
        title: "Budget exceeded".to_string(),
        reason: format!(
            "The plan exceeds the budget by {} {:.2} ({:.0}%) and downgrades could not \
             close the gap.",
            currency, amount, percent
        ),
        suggestion: "Review fixed costs such as flights and transport, or raise the trip \
                     budget."
            .to_string(),
        severity: Severity::Critical,
    }
}

/// One-line audit summary of what an evaluation changed
pub fn justification(usage_percent: f64, optimizations: &[Optimization]) -> String {
    if optimizations.is_empty() {
        return format!(
            "No tier adjustments applied; budget utilization at {:.0}%.",
            usage_percent * 100.0
        );
    }
    let net: f64 = optimizations.iter().map(|opt| opt.delta).sum();
    if net >= 0.0 {
        format!(
            "Applied {} tier adjustment(s) adding {:.2} in trip value; utilization now {:.0}%.",
            optimizations.len(),
            net,
            usage_percent * 100.0
        )
    } else {
        format!(
            "Applied {} tier adjustment(s) saving {:.2}; utilization now {:.0}%.",
            optimizations.len(),
            -net,
            usage_percent * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tier;
    use std::str::FromStr;

    fn ctx(usage_percent: f64, applied: bool, success: bool) -> InsightContext {
        InsightContext {
            usage_percent,
            optimization_applied: applied,
            optimization_success: success,
            action: None,
            savings: (1.0 - usage_percent) * 10_000.0,
            total_budget: 10_000.0,
            currency: Currency::Brl,
        }
    }

    #[test]
    fn test_severity_priority() {
        assert!(Severity::Critical.priority() > Severity::Warning.priority());
        assert!(Severity::Warning.priority() > Severity::Info.priority());
        assert_eq!(Severity::from_str("critical").unwrap(), Severity::Critical);
    }

    #[test]
    fn test_ideal_band_selects_perfect_balance() {
        let config = EngineConfig::default();
        let insight = generate_insight(&ctx(0.95, false, false), &config);
        assert_eq!(insight.kind, InsightKind::PerfectBalance);
        assert_eq!(insight.severity, Severity::Info);
    }

    #[test]
    fn test_band_edges_select_perfect_balance() {
        let config = EngineConfig::default();
        assert_eq!(
            generate_insight(&ctx(0.80, false, false), &config).kind,
            InsightKind::PerfectBalance
        );
        assert_eq!(
            generate_insight(&ctx(1.00, false, false), &config).kind,
            InsightKind::PerfectBalance
        );
    }

    #[test]
    fn test_low_usage_interpolates_savings() {
        let config = EngineConfig::default();
        let insight = generate_insight(&ctx(0.60, false, false), &config);
        assert_eq!(insight.kind, InsightKind::LowUsage);
        assert_eq!(insight.severity, Severity::Info);
        assert!(insight.suggestion.contains("BRL 4000.00"));
    }

    #[test]
    fn test_failed_upgrade_framed_as_seasonal() {
        let config = EngineConfig::default();
        let insight = generate_insight(&ctx(0.70, true, false), &config);
        assert_eq!(insight.kind, InsightKind::CouldNotUpgrade);
        assert_eq!(insight.severity, Severity::Info);
        assert!(insight.reason.contains("Seasonal pricing"));
    }

    #[test]
    fn test_failed_downgrade_is_critical_with_overflow_numbers() {
        let config = EngineConfig::default();
        let insight = generate_insight(&ctx(1.30, true, false), &config);
        assert_eq!(insight.kind, InsightKind::CouldNotDowngrade);
        assert_eq!(insight.severity, Severity::Critical);
        assert!(insight.reason.contains("BRL 3000.00"));
        assert!(insight.reason.contains("30%"));
    }

    #[test]
    fn test_slight_overflow_is_a_warning() {
        let config = EngineConfig::default();
        // 5% over with nothing applied: a near miss, not a failure
        let insight = generate_insight(&ctx(1.05, false, false), &config);
        assert_eq!(insight.kind, InsightKind::SlightOverflow);
        assert_eq!(insight.severity, Severity::Warning);
    }

    #[test]
    fn test_large_overflow_without_changes_defaults_to_critical() {
        let config = EngineConfig::default();
        let insight = generate_insight(&ctx(1.30, false, false), &config);
        assert_eq!(insight.kind, InsightKind::CouldNotDowngrade);
        assert_eq!(insight.severity, Severity::Critical);
    }

    #[test]
    fn test_slight_overflow_threshold_boundary() {
        let config = EngineConfig::default();
        // Exactly 10% over is no longer "slight"
        let insight = generate_insight(&ctx(1.10, false, false), &config);
        assert_eq!(insight.kind, InsightKind::CouldNotDowngrade);
    }

    #[test]
    fn test_justification_without_changes() {
        let line = justification(0.95, &[]);
        assert!(line.contains("No tier adjustments"));
        assert!(line.contains("95%"));
    }

    #[test]
    fn test_justification_reports_added_value() {
        let opts = vec![Optimization {
            item_id: "h1".to_string(),
            action: OptimizationAction::Upgrade,
            from: Tier::Standard,
            to: Tier::Comfort,
            delta: 1_200.0,
        }];
        let line = justification(0.85, &opts);
        assert!(line.contains("1 tier adjustment"));
        assert!(line.contains("adding 1200.00"));
    }

    #[test]
    fn test_justification_reports_savings() {
        let opts = vec![Optimization {
            item_id: "h1".to_string(),
            action: OptimizationAction::Downgrade,
            from: Tier::Premium,
            to: Tier::Comfort,
            delta: -1_200.0,
        }];
        let line = justification(0.98, &opts);
        assert!(line.contains("saving 1200.00"));
    }
}
