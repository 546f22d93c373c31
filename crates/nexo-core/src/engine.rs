//! Budget governance engine - orchestrates validation, optimization, and insight
//!
//! One synchronous pass per evaluation: classify the plan against the trust
//! zone, run a corrective tier pass when warranted, and compose the final
//! status with an advisory insight. The engine holds only its immutable
//! config; every evaluation builds fresh values and concurrent callers are
//! fully independent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::insight::{self, Insight, InsightContext};
use crate::models::{BudgetStatus, Optimization, TripPlan, TrustZone};
use crate::optimizer;
use crate::validator;

/// Composed result of one budget evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetEvaluation {
    pub status: BudgetStatus,
    /// Total spend after any accepted tier changes
    pub used_budget: f64,
    pub usage_percent: f64,
    /// `total_budget - used_budget`; negative when over budget
    pub savings: f64,
    /// Recomputed against the final `used_budget`
    pub trust_zone: TrustZone,
    pub insight: Insight,
    /// Tier changes applied, empty when none were accepted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optimizations: Vec<Optimization>,
    /// One-line audit summary for logging display
    pub justification: String,
    pub evaluated_at: DateTime<Utc>,
}

/// The budget governance engine
pub struct NexoEngine {
    config: EngineConfig,
}

impl Default for NexoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NexoEngine {
    /// Engine with the stock trust zone and tier multipliers
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Engine with custom thresholds; the config is validated up front
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate a trip plan against its budget.
    ///
    /// Fails only on malformed input (negative or non-finite costs); every
    /// structurally valid plan produces an evaluation. An optimizer pass
    /// that cannot reach the trust zone is the `JUSTIFIED` outcome, not an
    /// error.
    pub fn evaluate(&self, plan: &TripPlan) -> Result<BudgetEvaluation> {
        plan.validate()?;

        let validation = validator::validate_budget(plan, &self.config);
        let initial_status = validator::initial_status(validation.usage_percent, &self.config);
        debug!(
            status = initial_status.as_str(),
            used = validation.used_budget,
            usage = validation.usage_percent,
            "Initial budget classification"
        );

        if initial_status == BudgetStatus::Ideal {
            return Ok(self.compose(
                plan,
                BudgetStatus::Ideal,
                validation.used_budget,
                Vec::new(),
                false,
                false,
            ));
        }

        let Some(action) = validation.suggested_action else {
            // Defensive: the validator classified the plan as outside the
            // band but suggested no correction; keep its classification.
            return Ok(self.compose(
                plan,
                initial_status,
                validation.used_budget,
                Vec::new(),
                false,
                false,
            ));
        };

        let outcome = optimizer::optimize(
            &plan.items,
            plan.total_budget,
            validation.used_budget,
            action,
            &self.config,
        );
        debug!(
            action = action.as_str(),
            success = outcome.success,
            applied = outcome.optimizations.len(),
            new_total = outcome.new_total,
            "Optimization pass finished"
        );

        // A failed pass still keeps whatever changes it accepted; the plan
        // is then JUSTIFIED rather than blocked.
        let status = if outcome.success {
            BudgetStatus::Ideal
        } else {
            BudgetStatus::Justified
        };

        let optimization_applied = !outcome.optimizations.is_empty();
        Ok(self.compose(
            plan,
            status,
            outcome.new_total,
            outcome.optimizations,
            optimization_applied,
            outcome.success,
        ))
    }

    fn compose(
        &self,
        plan: &TripPlan,
        status: BudgetStatus,
        used_budget: f64,
        optimizations: Vec<Optimization>,
        optimization_applied: bool,
        optimization_success: bool,
    ) -> BudgetEvaluation {
        let usage_percent = validator::usage_ratio(used_budget, plan.total_budget);
        let savings = plan.total_budget - used_budget;
        let trust_zone = TrustZone::for_spend(plan.total_budget, used_budget, &self.config);

        let insight = insight::generate_insight(
            &InsightContext {
                usage_percent,
                optimization_applied,
                optimization_success,
                action: optimizations.first().map(|opt| opt.action),
                savings,
                total_budget: plan.total_budget,
                currency: plan.currency,
            },
            &self.config,
        );
        let justification = insight::justification(usage_percent, &optimizations);

        info!(
            status = status.as_str(),
            used = used_budget,
            usage = usage_percent,
            adjustments = optimizations.len(),
            insight = insight.kind.as_str(),
            "Budget evaluation complete"
        );

        BudgetEvaluation {
            status,
            used_budget,
            usage_percent,
            savings,
            trust_zone,
            insight,
            optimizations,
            justification,
            evaluated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::{InsightKind, Severity};
    use crate::models::{Category, Currency, ItineraryItem, Tier};

    fn item(id: &str, category: Category, cost: f64, tier: Option<Tier>) -> ItineraryItem {
        ItineraryItem {
            id: id.to_string(),
            name: id.to_string(),
            category,
            cost,
            tier,
        }
    }

    fn plan(total_budget: f64, items: Vec<ItineraryItem>) -> TripPlan {
        TripPlan {
            total_budget,
            currency: Currency::Brl,
            items,
        }
    }

    #[test]
    fn test_ideal_plan_short_circuits() {
        let engine = NexoEngine::new();
        let evaluation = engine
            .evaluate(&plan(
                10_000.0,
                vec![item("h1", Category::Hotel, 9_500.0, Some(Tier::Standard))],
            ))
            .unwrap();

        assert_eq!(evaluation.status, BudgetStatus::Ideal);
        assert_eq!(evaluation.usage_percent, 0.95);
        assert!(evaluation.optimizations.is_empty());
        assert_eq!(evaluation.insight.kind, InsightKind::PerfectBalance);
    }

    #[test]
    fn test_successful_upgrade_lands_ideal() {
        let engine = NexoEngine::new();
        let evaluation = engine
            .evaluate(&plan(
                10_000.0,
                vec![
                    item("h1", Category::Hotel, 3_000.0, Some(Tier::Standard)),
                    item("a1", Category::Activity, 2_000.0, Some(Tier::Standard)),
                    item("f1", Category::Flight, 1_000.0, None),
                ],
            ))
            .unwrap();

        assert_eq!(evaluation.status, BudgetStatus::Ideal);
        assert!(!evaluation.optimizations.is_empty());
        assert_eq!(evaluation.used_budget, 8_000.0);
        // Trust zone current tracks the adjusted spend
        assert_eq!(evaluation.trust_zone.current, 8_000.0);
        assert_eq!(evaluation.savings, 2_000.0);
    }

    #[test]
    fn test_hopeless_overflow_is_justified() {
        let engine = NexoEngine::new();
        let evaluation = engine
            .evaluate(&plan(
                10_000.0,
                vec![
                    item("f1", Category::Flight, 8_000.0, None),
                    item("t1", Category::Transport, 3_000.0, None),
                    item("m1", Category::Food, 2_000.0, None),
                ],
            ))
            .unwrap();

        assert_eq!(evaluation.status, BudgetStatus::Justified);
        assert!(evaluation.optimizations.is_empty());
        assert_eq!(evaluation.used_budget, 13_000.0);
        assert_eq!(evaluation.insight.kind, InsightKind::CouldNotDowngrade);
        assert_eq!(evaluation.insight.severity, Severity::Critical);
        assert!(evaluation.savings < 0.0);
    }

    #[test]
    fn test_partial_downgrade_keeps_accepted_changes() {
        let engine = NexoEngine::new();
        // Only 1400 of savings is reachable (comfort hotel -> standard);
        // the plan stays over budget but keeps the change.
        let evaluation = engine
            .evaluate(&plan(
                10_000.0,
                vec![
                    item("h1", Category::Hotel, 4_900.0, Some(Tier::Comfort)),
                    item("f1", Category::Flight, 8_000.0, None),
                ],
            ))
            .unwrap();

        assert_eq!(evaluation.status, BudgetStatus::Justified);
        assert_eq!(evaluation.optimizations.len(), 1);
        assert!(evaluation.used_budget < 12_900.0);
        assert!(evaluation.used_budget > 10_000.0);
        assert_eq!(evaluation.insight.kind, InsightKind::CouldNotDowngrade);
    }

    #[test]
    fn test_zero_budget_outputs_stay_finite() {
        let engine = NexoEngine::new();
        let evaluation = engine
            .evaluate(&plan(
                0.0,
                vec![item("h1", Category::Hotel, 500.0, Some(Tier::Standard))],
            ))
            .unwrap();

        assert!(evaluation.usage_percent.is_finite());
        assert_eq!(evaluation.usage_percent, 0.0);
        assert!(evaluation.savings.is_finite());
        assert!(evaluation.trust_zone.min.is_finite());
        assert!(evaluation.trust_zone.max.is_finite());
    }

    #[test]
    fn test_malformed_plan_is_rejected() {
        let engine = NexoEngine::new();
        let result = engine.evaluate(&plan(
            1_000.0,
            vec![item("h1", Category::Hotel, -10.0, None)],
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_config_is_honored() {
        let config = EngineConfig {
            trust_zone_min: 0.50,
            ..EngineConfig::default()
        };
        let engine = NexoEngine::with_config(config).unwrap();
        // 60% usage is inside the widened band; no optimizer run
        let evaluation = engine
            .evaluate(&plan(
                10_000.0,
                vec![item("h1", Category::Hotel, 6_000.0, Some(Tier::Standard))],
            ))
            .unwrap();

        assert_eq!(evaluation.status, BudgetStatus::Ideal);
        assert!(evaluation.optimizations.is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            trust_zone_min: 1.5,
            ..EngineConfig::default()
        };
        assert!(NexoEngine::with_config(config).is_err());
    }
}
