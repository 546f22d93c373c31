//! Tier optimization passes
//!
//! Attempts to move a plan's spend into the trust zone by changing the
//! quality tier of hotel and activity items. Both passes are greedy,
//! largest-cost-first, single sweeps: each candidate is visited once, the
//! outcome is reported as-is, and there is no backtracking or combinatorial
//! search. Callers get fresh optimization records and totals; the input
//! items are never mutated.
//!
//! An item's new cost is its current cost scaled by the ratio of the target
//! tier multiplier to the current one; the current cost is assumed to
//! already reflect the current tier.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{ItineraryItem, Optimization, OptimizationAction, Tier};
use crate::validator::usage_ratio;

/// Result of one optimization pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationOutcome {
    /// Whether the pass reached its target
    pub success: bool,
    /// Tier changes accepted, in application order
    pub optimizations: Vec<Optimization>,
    /// Total spend after the accepted changes
    pub new_total: f64,
    /// Usage ratio of `new_total`, 0 for a non-positive budget
    pub new_usage_percent: f64,
}

/// Dispatch to the pass matching the requested direction
pub fn optimize(
    items: &[ItineraryItem],
    total_budget: f64,
    current_total: f64,
    action: OptimizationAction,
    config: &EngineConfig,
) -> OptimizationOutcome {
    match action {
        OptimizationAction::Upgrade => try_upgrade(items, total_budget, current_total, config),
        OptimizationAction::Downgrade => try_downgrade(items, total_budget, current_total, config),
    }
}

/// Sort eligible items by current cost, most expensive first.
///
/// Bigger items produce bigger deltas per change, so the greedy pass visits
/// them first. List order breaks ties between equal costs.
fn candidates_by_cost_desc<'a>(
    items: &'a [ItineraryItem],
    excluded_tier: Tier,
) -> Vec<&'a ItineraryItem> {
    let mut candidates: Vec<&ItineraryItem> = items
        .iter()
        .filter(|item| item.category.is_adjustable() && item.tier != Some(excluded_tier))
        .collect();
    candidates.sort_by(|a, b| b.cost.partial_cmp(&a.cost).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Push spend up to the trust-zone floor without crossing the ceiling.
///
/// Accepts an upgrade only when the raised total stays at or under
/// `total_budget * trust_zone_max`; candidates whose upgrade would cross
/// the ceiling are skipped, not downsized.
pub fn try_upgrade(
    items: &[ItineraryItem],
    total_budget: f64,
    current_total: f64,
    config: &EngineConfig,
) -> OptimizationOutcome {
    let target_min = total_budget * config.trust_zone_min;
    let target_max = total_budget * config.trust_zone_max;

    let mut new_total = current_total;
    let mut optimizations = Vec::new();

    for item in candidates_by_cost_desc(items, Tier::Premium) {
        if new_total >= target_min {
            break;
        }

        let current_tier = item
            .tier
            .unwrap_or(Tier::default_for(OptimizationAction::Upgrade));
        let Some(next_tier) = current_tier.next() else {
            continue;
        };

        let delta =
            item.cost * (config.multiplier(next_tier) / config.multiplier(current_tier))
                - item.cost;

        if new_total + delta <= target_max {
            debug!(
                item = %item.id,
                from = current_tier.as_str(),
                to = next_tier.as_str(),
                delta,
                "Upgrade accepted"
            );
            optimizations.push(Optimization {
                item_id: item.id.clone(),
                action: OptimizationAction::Upgrade,
                from: current_tier,
                to: next_tier,
                delta,
            });
            new_total += delta;
        } else {
            debug!(
                item = %item.id,
                delta,
                ceiling = target_max,
                "Upgrade skipped, would cross the budget ceiling"
            );
        }
    }

    OptimizationOutcome {
        success: new_total >= target_min,
        optimizations,
        new_total,
        new_usage_percent: usage_ratio(new_total, total_budget),
    }
}

/// Pull spend down to the budget ceiling.
///
/// Downgrades are accepted unconditionally; there is no floor constraint
/// mirroring the upgrade pass's ceiling check.
pub fn try_downgrade(
    items: &[ItineraryItem],
    total_budget: f64,
    current_total: f64,
    config: &EngineConfig,
) -> OptimizationOutcome {
    let target_max = total_budget * config.trust_zone_max;

    let mut new_total = current_total;
    let mut optimizations = Vec::new();

    for item in candidates_by_cost_desc(items, Tier::Standard) {
        if new_total <= target_max {
            break;
        }

        let current_tier = item
            .tier
            .unwrap_or(Tier::default_for(OptimizationAction::Downgrade));
        let Some(previous_tier) = current_tier.previous() else {
            continue;
        };

        let saved = item.cost
            - item.cost * (config.multiplier(previous_tier) / config.multiplier(current_tier));

        debug!(
            item = %item.id,
            from = current_tier.as_str(),
            to = previous_tier.as_str(),
            saved,
            "Downgrade accepted"
        );
        optimizations.push(Optimization {
            item_id: item.id.clone(),
            action: OptimizationAction::Downgrade,
            from: current_tier,
            to: previous_tier,
            delta: -saved,
        });
        new_total -= saved;
    }

    OptimizationOutcome {
        success: new_total <= target_max,
        optimizations,
        new_total,
        new_usage_percent: usage_ratio(new_total, total_budget),
    }
}
