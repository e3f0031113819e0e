//! AWS Lambda handler serving the simulator API
//!
//! Hosts the simulator's axum router; `lambda_http` converts Function URL,
//! API Gateway and ALB events to HTTP requests and back.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, Error};
use log::info;

use scpi_simulator::{api, Settings};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let settings = Settings::from_env()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(settings.log_level.as_str())).init();

    info!(
        "Starting SCPI simulator ({} environment, prefix {})",
        settings.environment, settings.api_prefix
    );
    let app = api::app(&settings)?;

    run(app).await
}
