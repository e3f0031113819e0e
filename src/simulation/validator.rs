//! Business-rule validation of simulation requests

use super::request::{SimulationRequest, MAX_DURATION_YEARS};
use super::rounding::round_to_unit_multiple;
use crate::catalog::{Catalog, InstrumentConfig, OwnershipMode};
use crate::error::SimulatorError;

/// Duration bounds, by ownership mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationLimits {
    pub min_years: u32,
    /// Ceiling under full ownership
    pub max_full_years: u32,
    /// Ceiling under bare ownership (dismemberment period)
    pub max_bare_years: u32,
}

impl DurationLimits {
    pub fn max_for(&self, mode: OwnershipMode) -> u32 {
        match mode {
            OwnershipMode::Full => self.max_full_years,
            OwnershipMode::Bare => self.max_bare_years,
        }
    }
}

impl Default for DurationLimits {
    fn default() -> Self {
        Self {
            min_years: 1,
            max_full_years: MAX_DURATION_YEARS,
            max_bare_years: 12,
        }
    }
}

/// Checks a request against the catalog and the duration limits
///
/// Rules are applied in a fixed order and the first violation is returned.
/// The request is never modified; rounding of the amount is left to the engine.
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator<'a> {
    catalog: &'a Catalog,
    limits: DurationLimits,
}

impl<'a> RequestValidator<'a> {
    pub fn new(catalog: &'a Catalog, limits: DurationLimits) -> Self {
        Self { catalog, limits }
    }

    /// Validate the request and return the instrument it targets
    pub fn validate(&self, request: &SimulationRequest) -> Result<&'a InstrumentConfig, SimulatorError> {
        let config = self.catalog.lookup(request.scpi_type)?;

        if !config.supports(request.investment_type) {
            return Err(SimulatorError::InvalidParameters(format!(
                "Investment type {} not supported for {}",
                request.investment_type, request.scpi_type
            )));
        }

        if request.investment_amount < config.minimum_investment {
            return Err(SimulatorError::InvalidParameters(format!(
                "Investment amount must be at least €{}",
                config.minimum_investment
            )));
        }

        // Amounts near a whole share count are accepted and rounded later
        let price = config.price_per_share;
        let rounded = round_to_unit_multiple(request.investment_amount, price);
        if (rounded - request.investment_amount).abs() > price / 2.0 {
            return Err(SimulatorError::InvalidParameters(format!(
                "Investment amount must be a multiple of €{} (share price)",
                price
            )));
        }

        if request.duration_years < self.limits.min_years {
            return Err(SimulatorError::InvalidParameters(format!(
                "Duration must be at least {} year(s)",
                self.limits.min_years
            )));
        }

        let max_duration = self.limits.max_for(request.investment_type);
        if request.duration_years > max_duration {
            return Err(SimulatorError::InvalidParameters(format!(
                "Duration cannot exceed {} years",
                max_duration
            )));
        }

        if request.investment_type == OwnershipMode::Bare && request.reinvestment_fraction() != 0.0 {
            return Err(SimulatorError::InvalidParameters(
                "Dividend reinvestment not applicable for bare ownership".to_string(),
            ));
        }

        Ok(config)
    }
}
