//! Budget evaluation handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use nexo_core::{BudgetEvaluation, EngineConfig, Error, TripPlan};

/// POST /api/evaluate - evaluate a trip plan against its budget
///
/// Malformed plans (negative or non-finite costs) get a 400 with the
/// boundary-validation message; anything else is an internal error.
pub async fn evaluate_plan(
    State(state): State<Arc<AppState>>,
    Json(plan): Json<TripPlan>,
) -> Result<Json<BudgetEvaluation>, AppError> {
    let evaluation = state.engine.evaluate(&plan).map_err(|err| match err {
        Error::InvalidPlan(_) | Error::InvalidItem(_) => AppError::bad_request(&err.to_string()),
        other => AppError::from(other),
    })?;

    Ok(Json(evaluation))
}

/// GET /api/config - the engine thresholds this instance runs with
pub async fn get_engine_config(State(state): State<Arc<AppState>>) -> Json<EngineConfig> {
    Json(state.engine.config().clone())
}
