//! HTTP surface of the simulator
//!
//! Route groups:
//! - health: liveness check, served outside the API prefix
//! - scpi: catalog listing and per-SCPI characteristics
//! - simulation: calculate and validate endpoints
//!
//! The resulting [`axum::Router`] is hosted by the Lambda binary and tested
//! in-process with `tower::ServiceExt::oneshot`.

pub mod health;
pub mod scpi;
pub mod simulation;

use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::http::{header, HeaderValue, Method};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use log::{debug, warn};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Settings;
use crate::error::{ApiError, ConfigError};
use crate::service::ScpiSimulator;

/// State shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub simulator: Arc<ScpiSimulator>,
}

impl AppState {
    pub fn new(simulator: ScpiSimulator) -> Self {
        Self {
            simulator: Arc::new(simulator),
        }
    }
}

/// Build the application router from settings
pub fn app(settings: &Settings) -> Result<Router, ConfigError> {
    Ok(build_router(settings.simulator()?, &settings.api_prefix, &settings.cors_origins()))
}

/// Build the application router
///
/// Health stays at the root; the SCPI and simulation groups are nested under
/// `api_prefix`.
pub fn build_router(simulator: ScpiSimulator, api_prefix: &str, cors_origins: &[String]) -> Router {
    let state = AppState::new(simulator);

    let api_routes = Router::new().merge(scpi::routes()).merge(simulation::routes());

    let prefix = format!("/{}", api_prefix.trim_matches('/'));
    let router = Router::new().merge(health::routes());
    let router = if prefix == "/" {
        router.merge(api_routes)
    } else {
        router.nest(&prefix, api_routes)
    };

    router
        .fallback(route_not_found)
        .layer(middleware::from_fn(log_request))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// CORS policy for the configured origins
///
/// A `*` entry mirrors the request origin, since credentials are allowed.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        }))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    debug!("{} {} -> {} in {:?}", method, path, response.status().as_u16(), start.elapsed());
    response
}
