//! Plan evaluation command and shared utilities
//!
//! This module contains:
//! - `load_engine` - Shared utility to build the engine with optional config
//! - `cmd_evaluate` - Evaluate a plan file and print the outcome

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use nexo_core::{
    BudgetEvaluation, BudgetStatus, EngineConfig, NexoEngine, OptimizationAction, TripPlan,
};

/// Build the engine, applying a TOML config override when given
pub fn load_engine(config_path: Option<&Path>) -> Result<NexoEngine> {
    let config = match config_path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    NexoEngine::with_config(config).context("Invalid engine config")
}

pub fn cmd_evaluate(file: &Path, as_json: bool, config_path: Option<&Path>) -> Result<()> {
    let engine = load_engine(config_path)?;

    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read plan file {}", file.display()))?;
    let plan: TripPlan =
        serde_json::from_str(&content).context("Failed to parse trip plan JSON")?;
    tracing::debug!(
        file = %file.display(),
        items = plan.items.len(),
        budget = plan.total_budget,
        "Loaded trip plan"
    );

    let evaluation = engine.evaluate(&plan).context("Evaluation failed")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    print_summary(&plan, &evaluation);
    Ok(())
}

fn print_summary(plan: &TripPlan, evaluation: &BudgetEvaluation) {
    let status_glyph = match evaluation.status {
        BudgetStatus::Ideal => "✅",
        BudgetStatus::Suboptimal | BudgetStatus::Overflow => "⚠️ ",
        BudgetStatus::Justified => "📋",
    };

    println!(
        "📊 Budget evaluation — {} {:.2} total, {} items",
        plan.currency,
        plan.total_budget,
        plan.items.len()
    );
    println!("   Status: {} {}", status_glyph, evaluation.status);
    println!(
        "   Used: {} {:.2} ({:.0}%)",
        plan.currency,
        evaluation.used_budget,
        evaluation.usage_percent * 100.0
    );
    println!(
        "   Trust zone: {:.2} – {:.2}",
        evaluation.trust_zone.min, evaluation.trust_zone.max
    );
    println!("   Savings: {} {:.2}", plan.currency, evaluation.savings);

    if !evaluation.optimizations.is_empty() {
        println!("   Adjustments:");
        for opt in &evaluation.optimizations {
            let arrow = match opt.action {
                OptimizationAction::Upgrade => "↑",
                OptimizationAction::Downgrade => "↓",
            };
            println!(
                "     {} {}: {} → {} ({:+.2})",
                arrow, opt.item_id, opt.from, opt.to, opt.delta
            );
        }
    }

    println!();
    println!("💡 {}", evaluation.insight.title);
    println!("   {}", evaluation.insight.reason);
    println!("   {}", evaluation.insight.suggestion);
    println!();
    println!("   {}", evaluation.justification);
}
