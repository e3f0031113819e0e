//! Catalog endpoints

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use super::AppState;
use crate::catalog::{ScpiInfo, ScpiKind};
use crate::error::ApiError;

/// Build the catalog routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/scpi/list", get(list_scpis))
        .route("/scpi/{scpi_type}", get(get_scpi_info))
}

/// GET /scpi/list - configured SCPIs in catalog order
async fn list_scpis(State(state): State<AppState>) -> Json<Vec<ScpiInfo>> {
    Json(state.simulator.list_scpis())
}

/// GET /scpi/{scpi_type}
///
/// An identifier outside the declared set is a field error (422); a declared
/// but unconfigured one is not found (404).
async fn get_scpi_info(
    State(state): State<AppState>,
    Path(scpi_type): Path<String>,
) -> Result<Json<ScpiInfo>, ApiError> {
    let kind: ScpiKind = scpi_type.parse().map_err(|_| {
        ApiError::Unprocessable(format!(
            "scpi_type: Input should be 'comete' or 'activimmo', got '{}'",
            scpi_type
        ))
    })?;
    Ok(Json(state.simulator.get_scpi_info(kind)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, InstrumentConfig};
    use crate::service::ScpiSimulator;
    use crate::simulation::DurationLimits;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn router(simulator: ScpiSimulator) -> Router {
        routes().with_state(AppState::new(simulator))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn activimmo_only() -> ScpiSimulator {
        let catalog = Catalog::new(vec![InstrumentConfig::activimmo()]).unwrap();
        ScpiSimulator::new(catalog, DurationLimits::default())
    }

    #[tokio::test]
    async fn test_get_scpi_list() {
        let (status, data) = get_json(router(ScpiSimulator::reference()), "/scpi/list").await;
        assert_eq!(status, StatusCode::OK);

        let list = data.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["scpi_type"], "comete");
        for scpi in list {
            for field in ["scpi_type", "name", "price_per_share", "minimum_investment", "annual_yield", "supported_investment_types"] {
                assert!(scpi.get(field).is_some(), "missing {}", field);
            }
        }
    }

    #[tokio::test]
    async fn test_get_scpi_info() {
        let (status, data) = get_json(router(ScpiSimulator::reference()), "/scpi/comete").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["scpi_type"], "comete");
        assert_eq!(data["name"], "SCPI Comète");
        assert_eq!(data["price_per_share"], 250.0);

        let (_, data) = get_json(router(ScpiSimulator::reference()), "/scpi/activimmo").await;
        assert_eq!(data["price_per_share"], 610.0);
    }

    #[tokio::test]
    async fn test_get_scpi_info_invalid_identifier() {
        let (status, data) = get_json(router(ScpiSimulator::reference()), "/scpi/invalid").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(data["type"], "validation_error");
    }

    #[tokio::test]
    async fn test_get_scpi_info_unconfigured() {
        let (status, data) = get_json(router(activimmo_only()), "/scpi/comete").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(data["type"], "not_found");
        assert_eq!(data["detail"], "SCPI type comete not found");

        let (_, list) = get_json(router(activimmo_only()), "/scpi/list").await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }
}
