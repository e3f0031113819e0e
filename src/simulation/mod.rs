//! Simulation of SCPI investments: request, validation and projection

mod state;
mod engine;
mod results;
mod validator;
pub mod request;
pub mod rounding;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, average_annual_yield};
pub use results::{SimulationResults, SimulationSummary, YearlyProjection};
pub use validator::{DurationLimits, RequestValidator};
pub use request::{SavingsFrequency, SimulationRequest, MAX_DURATION_YEARS};
pub use rounding::round_to_unit_multiple;
