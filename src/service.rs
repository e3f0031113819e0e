//! Simulator facade: the operations exposed to the request-handling layer

use crate::catalog::{Catalog, ScpiInfo, ScpiKind};
use crate::error::SimulatorError;
use crate::simulation::{DurationLimits, ProjectionEngine, RequestValidator, SimulationRequest, SimulationResults};

/// Catalog plus duration limits; everything needed to answer a request
///
/// Stateless across calls and cheap to share between threads.
#[derive(Debug, Clone)]
pub struct ScpiSimulator {
    catalog: Catalog,
    limits: DurationLimits,
}

impl ScpiSimulator {
    pub fn new(catalog: Catalog, limits: DurationLimits) -> Self {
        Self { catalog, limits }
    }

    /// Simulator over the reference catalog and default limits
    pub fn reference() -> Self {
        Self::new(Catalog::reference(), DurationLimits::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn limits(&self) -> DurationLimits {
        self.limits
    }

    pub fn validator(&self) -> RequestValidator<'_> {
        RequestValidator::new(&self.catalog, self.limits)
    }

    pub fn validate_simulation_request(&self, request: &SimulationRequest) -> Result<(), SimulatorError> {
        self.validator().validate(request).map(|_| ())
    }

    /// Validate, then project
    pub fn calculate_simulation(&self, request: &SimulationRequest) -> Result<SimulationResults, SimulatorError> {
        let instrument = self.validator().validate(request)?;
        Ok(ProjectionEngine::new(instrument).project(request))
    }

    pub fn get_scpi_info(&self, kind: ScpiKind) -> Result<ScpiInfo, SimulatorError> {
        self.catalog.lookup(kind).map(|config| config.info())
    }

    /// Every configured SCPI, skipping declared but unconfigured identifiers
    pub fn list_scpis(&self) -> Vec<ScpiInfo> {
        self.catalog.list().into_iter().map(|config| config.info()).collect()
    }
}

impl Default for ScpiSimulator {
    fn default() -> Self {
        Self::reference()
    }
}
