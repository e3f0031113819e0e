//! Scenario runner for comparing several simulations
//!
//! Holds one simulator and evaluates many requests against it. Requests are
//! independent, so batches run in parallel.

use rayon::prelude::*;

use crate::error::SimulatorError;
use crate::service::ScpiSimulator;
use crate::simulation::{SimulationRequest, SimulationResults};

/// Pre-configured runner for batch simulations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// let results = runner.compare_reinvestment(&request, &[0.0, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    simulator: ScpiSimulator,
}

impl ScenarioRunner {
    /// Runner over the reference catalog
    pub fn new() -> Self {
        Self {
            simulator: ScpiSimulator::reference(),
        }
    }

    pub fn with_simulator(simulator: ScpiSimulator) -> Self {
        Self { simulator }
    }

    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResults, SimulatorError> {
        self.simulator.calculate_simulation(request)
    }

    /// Run independent requests; results keep the input order
    pub fn run_batch(&self, requests: &[SimulationRequest]) -> Vec<Result<SimulationResults, SimulatorError>> {
        requests
            .par_iter()
            .map(|request| self.simulator.calculate_simulation(request))
            .collect()
    }

    /// Same request under several dividend reinvestment fractions
    pub fn compare_reinvestment(
        &self,
        base: &SimulationRequest,
        rates: &[f64],
    ) -> Vec<Result<SimulationResults, SimulatorError>> {
        let requests: Vec<_> = rates
            .iter()
            .map(|&rate| base.clone().with_reinvestment(rate))
            .collect();
        self.run_batch(&requests)
    }

    pub fn simulator(&self) -> &ScpiSimulator {
        &self.simulator
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{OwnershipMode, ScpiKind};
    use crate::simulation::SavingsFrequency;

    fn base_request() -> SimulationRequest {
        SimulationRequest::new(ScpiKind::Comete, OwnershipMode::Full, 5000.0, 10)
            .with_savings(100.0, SavingsFrequency::Monthly)
    }

    #[test]
    fn test_scenario_runner_batch_keeps_order() {
        let runner = ScenarioRunner::new();
        let requests: Vec<_> = [3, 8, 15]
            .iter()
            .map(|&years| {
                let mut request = base_request();
                request.duration_years = years;
                request
            })
            .collect();

        let results = runner.run_batch(&requests);
        assert_eq!(results.len(), 3);

        let lengths: Vec<_> = results
            .iter()
            .map(|r| r.as_ref().unwrap().yearly_projections.len())
            .collect();
        assert_eq!(lengths, vec![3, 8, 15]);
    }

    #[test]
    fn test_batch_reports_failures_per_request() {
        let runner = ScenarioRunner::new();
        let requests = vec![
            base_request(),
            SimulationRequest::new(ScpiKind::Comete, OwnershipMode::Full, 1000.0, 5),
        ];

        let results = runner.run_batch(&requests);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(SimulatorError::InvalidParameters(_))));
    }

    #[test]
    fn test_compare_reinvestment() {
        let runner = ScenarioRunner::new();
        let results = runner.compare_reinvestment(&base_request(), &[0.0, 0.5, 1.0]);

        let finals: Vec<_> = results.iter().map(|r| r.as_ref().unwrap().final_shares).collect();
        assert!(finals[1] > finals[0]);
        assert!(finals[2] > finals[1]);
    }
}
