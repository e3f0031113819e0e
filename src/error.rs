//! Error types for the simulator, its configuration and the HTTP surface

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Business-rule failures raised by the catalog and the request validator
///
/// `Display` renders the reason string only, so callers can forward it
/// unchanged as the client-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulatorError {
    /// Requested SCPI has no catalog entry
    #[error("{0}")]
    NotFound(String),

    /// A business rule rejected the request
    #[error("{0}")]
    InvalidParameters(String),
}

impl SimulatorError {
    /// Short machine-readable kind used in error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            SimulatorError::NotFound(_) => "not_found",
            SimulatorError::InvalidParameters(_) => "calculation_error",
        }
    }
}

/// Failures while building settings or the instrument catalog
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid environment: {0}. Must be one of: development, staging, production")]
    InvalidEnvironment(String),

    #[error("Unknown SCPI identifier: {0}")]
    UnknownInstrument(String),

    #[error("Unknown investment type: {0}")]
    UnknownOwnershipMode(String),

    #[error("Invalid configuration for {instrument}: {reason}")]
    InvalidInstrument { instrument: String, reason: String },

    #[error("Catalog file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures surfaced by the HTTP routing layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// Field-level schema violation, independent of business rules
    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("Not Found")]
    RouteNotFound,

    #[error(transparent)]
    Simulation(#[from] SimulatorError),

    /// Anything not covered above; reported as a generic server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this failure
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Simulation(SimulatorError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Simulation(SimulatorError::InvalidParameters(_)) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the `type` field in the JSON error body
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Unprocessable(_) => "validation_error",
            ApiError::UnsupportedMediaType(_) => "unsupported_media_type",
            ApiError::RouteNotFound => "not_found",
            ApiError::Simulation(e) => e.kind(),
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::Unprocessable(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::BadRequest(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => ApiError::UnsupportedMediaType(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let body = serde_json::json!({
            "detail": self.to_string(),
            "type": self.kind(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_error_displays_reason_only() {
        let err = SimulatorError::InvalidParameters("Duration cannot exceed 12 years".to_string());
        assert_eq!(err.to_string(), "Duration cannot exceed 12 years");
        assert_eq!(err.kind(), "calculation_error");
    }

    #[test]
    fn test_api_error_status_mapping() {
        let not_found: ApiError = SimulatorError::NotFound("SCPI type comete not found".into()).into();
        let invalid: ApiError = SimulatorError::InvalidParameters("bad".into()).into();

        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.kind(), "not_found");
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unprocessable("x".into()).status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Internal("boom".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_api_error_response_body() {
        let error = ApiError::Simulation(SimulatorError::InvalidParameters(
            "Investment amount must be at least €5000".into(),
        ));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Investment amount must be at least €5000");
        assert_eq!(body["type"], "calculation_error");
    }
}
