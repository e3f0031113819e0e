//! SCPI Simulator - multi-year investment projections for SCPI real-estate funds
//!
//! This library provides:
//! - A static catalog of supported SCPIs and their characteristics
//! - Business-rule validation of simulation requests
//! - Year-by-year projections with share rounding, dividend reinvestment
//!   and programmed savings
//! - Risk and disclaimer text for each simulation
//! - An axum HTTP router and a batch scenario runner

pub mod api;
pub mod catalog;
pub mod config;
pub mod disclosures;
pub mod error;
pub mod export;
pub mod scenario;
pub mod service;
pub mod simulation;

// Re-export commonly used types
pub use catalog::{Catalog, InstrumentConfig, OwnershipMode, ScpiInfo, ScpiKind};
pub use config::Settings;
pub use error::{ApiError, ConfigError, SimulatorError};
pub use scenario::ScenarioRunner;
pub use service::ScpiSimulator;
pub use simulation::{ProjectionEngine, SavingsFrequency, SimulationRequest, SimulationResults, YearlyProjection};
