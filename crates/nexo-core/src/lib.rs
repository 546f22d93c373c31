//! Nexo Core Library
//!
//! Budget governance engine for the Nexo travel planner:
//! - Trust-zone validation of trip budgets
//! - Greedy tier optimization (upgrade/downgrade of hotels and activities)
//! - Advisory insight generation
//! - Engine configuration with TOML overrides
//!
//! The engine is pure and stateless: one synchronous evaluation per call,
//! no I/O, no shared mutable state.

pub mod config;
pub mod engine;
pub mod error;
pub mod insight;
pub mod models;
pub mod optimizer;
pub mod validator;

pub use config::EngineConfig;
pub use engine::{BudgetEvaluation, NexoEngine};
pub use error::{Error, Result};
pub use insight::{Insight, InsightContext, InsightKind, Severity};
pub use models::{
    BudgetStatus, Category, Currency, ItineraryItem, Optimization, OptimizationAction, Tier,
    TripPlan, TrustZone,
};
pub use optimizer::OptimizationOutcome;
pub use validator::ValidationResult;
