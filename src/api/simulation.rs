//! Simulation endpoints
//!
//! Every business failure on these routes is reported as 400, including an
//! SCPI missing from the catalog.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use serde::Serialize;

use super::AppState;
use crate::error::{ApiError, SimulatorError};
use crate::simulation::{SimulationRequest, SimulationResults};

/// Body returned by the validate-only endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Build the simulation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/simulation/calculate", post(calculate))
        .route("/simulation/validate", post(validate))
}

/// POST /simulation/calculate
async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Result<Json<SimulationResults>, ApiError> {
    let request = checked_request(payload)?;
    let results = state
        .simulator
        .calculate_simulation(&request)
        .map_err(business_failure)?;
    Ok(Json(results))
}

/// POST /simulation/validate
async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, ApiError> {
    let request = checked_request(payload)?;
    state
        .simulator
        .validate_simulation_request(&request)
        .map_err(business_failure)?;
    Ok(Json(ValidationResponse {
        status: "valid",
        message: "Parameters are valid",
    }))
}

/// Decoded body with the field-level checks applied
fn checked_request(payload: Result<Json<SimulationRequest>, JsonRejection>) -> Result<SimulationRequest, ApiError> {
    let Json(request) = payload?;
    request.check_fields().map_err(ApiError::Unprocessable)?;
    Ok(request)
}

fn business_failure(error: SimulatorError) -> ApiError {
    match error {
        SimulatorError::NotFound(reason) => ApiError::BadRequest(reason),
        other => ApiError::Simulation(other),
    }
}
