//! Budget validation against the trust zone
//!
//! Classifies a plan's spend without mutating anything: total spend, usage
//! ratio, savings, and whether a corrective tier pass is warranted. Pure
//! functions over the plan; calling them twice yields identical results.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::{BudgetStatus, OptimizationAction, TripPlan, TrustZone};

/// Outcome of classifying a plan against the trust zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Sum of all item costs
    pub used_budget: f64,
    /// `used_budget / total_budget`, 0 for a non-positive budget
    pub usage_percent: f64,
    /// `total_budget - used_budget`; negative when over budget
    pub savings: f64,
    pub trust_zone: TrustZone,
    pub needs_optimization: bool,
    /// Direction a corrective pass should take, when one is warranted
    pub suggested_action: Option<OptimizationAction>,
}

/// Usage ratio guarded against non-positive budgets.
///
/// A zero budget must read as zero usage, never NaN or infinity.
pub fn usage_ratio(used_budget: f64, total_budget: f64) -> f64 {
    if total_budget > 0.0 {
        used_budget / total_budget
    } else {
        0.0
    }
}

/// Classify a plan against the trust zone
pub fn validate_budget(plan: &TripPlan, config: &EngineConfig) -> ValidationResult {
    let used_budget: f64 = plan.items.iter().map(|item| item.cost).sum();
    let usage_percent = usage_ratio(used_budget, plan.total_budget);
    let savings = plan.total_budget - used_budget;
    let trust_zone = TrustZone::for_spend(plan.total_budget, used_budget, config);

    let suggested_action = if usage_percent < config.trust_zone_min {
        // Plan underuses the budget; try to add value
        Some(OptimizationAction::Upgrade)
    } else if usage_percent > config.trust_zone_max {
        // Plan exceeds the budget; try to cut cost
        Some(OptimizationAction::Downgrade)
    } else {
        None
    };

    ValidationResult {
        used_budget,
        usage_percent,
        savings,
        trust_zone,
        needs_optimization: suggested_action.is_some(),
        suggested_action,
    }
}

/// Pre-optimization classification of a usage ratio
pub fn initial_status(usage_percent: f64, config: &EngineConfig) -> BudgetStatus {
    if usage_percent < config.trust_zone_min {
        BudgetStatus::Suboptimal
    } else if usage_percent > config.trust_zone_max {
        BudgetStatus::Overflow
    } else {
        BudgetStatus::Ideal
    }
}
