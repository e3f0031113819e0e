//! Year-by-year projection of an SCPI investment

use super::request::SimulationRequest;
use super::results::{SimulationResults, YearlyProjection};
use super::rounding::round_to_unit_multiple;
use super::state::ProjectionState;
use crate::catalog::{InstrumentConfig, OwnershipMode};
use crate::disclosures;

/// Projection engine for one instrument
///
/// Requests are expected to have passed [`RequestValidator`](super::RequestValidator);
/// results for unvalidated input are unspecified.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionEngine<'a> {
    instrument: &'a InstrumentConfig,
}

impl<'a> ProjectionEngine<'a> {
    pub fn new(instrument: &'a InstrumentConfig) -> Self {
        Self { instrument }
    }

    /// Run the full projection for a request
    pub fn project(&self, request: &SimulationRequest) -> SimulationResults {
        let price_per_share = self.instrument.price_per_share;

        let rounded_amount = round_to_unit_multiple(request.investment_amount, price_per_share);
        let mut state = ProjectionState::initial(rounded_amount, price_per_share);
        let initial_shares = state.shares;

        let yearly_savings = request.yearly_programmed_savings();

        let mut yearly_projections = Vec::with_capacity(request.duration_years as usize);
        for _year in 1..=request.duration_years {
            state.advance_year();
            let row = self.calculate_year(request, yearly_savings, &mut state);
            yearly_projections.push(row);
        }

        let final_capital_value = yearly_projections
            .last()
            .map(|row| row.total_capital_value)
            .unwrap_or(rounded_amount);
        let total_return = final_capital_value + state.cumulative_dividends;
        let annual_yield = average_annual_yield(total_return, state.total_invested, request.duration_years);

        let dividend_reinvestment_rate = match request.investment_type {
            OwnershipMode::Full => request.dividend_reinvestment_rate,
            OwnershipMode::Bare => None,
        };

        SimulationResults {
            scpi_type: request.scpi_type,
            investment_type: request.investment_type,
            initial_investment: rounded_amount,
            duration_years: request.duration_years,
            programmed_savings_monthly: request.programmed_savings_amount,
            dividend_reinvestment_rate,
            total_invested: state.total_invested,
            final_capital_value,
            total_dividends_received: state.cumulative_dividends,
            total_return,
            annual_yield,
            initial_shares,
            final_shares: state.shares,
            price_per_share,
            yearly_projections,
            risks: disclosures::risks(request.scpi_type, request.investment_type),
            disclaimers: disclosures::disclaimers(),
        }
    }

    /// Share value at the end of `year`
    ///
    /// Compounds from the subscription price, not from the prior year's value.
    pub fn share_value(&self, year: u32) -> f64 {
        self.instrument.price_per_share * (1.0 + self.instrument.capital_appreciation).powi(year as i32)
    }

    /// Advance holdings through one year and record the snapshot
    fn calculate_year(&self, request: &SimulationRequest, yearly_savings: f64, state: &mut ProjectionState) -> YearlyProjection {
        let share_value = self.share_value(state.year);

        let mut dividends_received = 0.0;
        let mut dividends_reinvested = 0.0;

        if request.investment_type.receives_dividends() {
            // Distribution is based on the subscription price
            dividends_received = state.shares * self.instrument.price_per_share * self.instrument.annual_yield;
            state.receive_dividends(dividends_received);

            let fraction = request.reinvestment_fraction();
            if fraction != 0.0 {
                dividends_reinvested = dividends_received * fraction;
                state.purchase(dividends_reinvested, share_value);
            }
        }

        if yearly_savings > 0.0 {
            state.purchase(yearly_savings, share_value);
        }

        YearlyProjection {
            year: state.year,
            dividends_received,
            dividends_reinvested,
            programmed_savings: yearly_savings,
            total_shares: state.shares,
            share_value,
            total_capital_value: state.shares * share_value,
            cumulative_dividends: state.cumulative_dividends,
        }
    }
}

/// Annualized growth of total return over total invested, in percent
pub fn average_annual_yield(total_return: f64, total_invested: f64, duration_years: u32) -> f64 {
    if total_invested > 0.0 && duration_years > 0 {
        ((total_return / total_invested).powf(1.0 / duration_years as f64) - 1.0) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScpiKind;
    use crate::simulation::request::SavingsFrequency;
    use approx::assert_relative_eq;

    fn full_request() -> SimulationRequest {
        SimulationRequest::new(ScpiKind::Comete, OwnershipMode::Full, 5000.0, 8)
            .with_savings(200.0, SavingsFrequency::Monthly)
            .with_reinvestment(0.5)
    }

    #[test]
    fn test_full_ownership_projection() {
        let comete = InstrumentConfig::comete();
        let result = ProjectionEngine::new(&comete).project(&full_request());

        assert_eq!(result.initial_investment, 5000.0);
        assert_eq!(result.initial_shares, 20.0);
        assert_eq!(result.yearly_projections.len(), 8);
        assert!(result.total_invested > 5000.0 + 8.0 * 12.0 * 200.0);
        assert_relative_eq!(result.yearly_projections[0].dividends_received, 225.0, epsilon = 1e-9);
        assert_relative_eq!(result.yearly_projections[0].dividends_reinvested, 112.5, epsilon = 1e-9);
        assert_eq!(result.yearly_projections[0].programmed_savings, 2400.0);
        assert!(result.annual_yield > 0.0);
        assert_relative_eq!(
            result.total_return,
            result.final_capital_value + result.total_dividends_received
        );
    }

    #[test]
    fn test_first_year_holdings() {
        let comete = InstrumentConfig::comete();
        let result = ProjectionEngine::new(&comete).project(&full_request());
        let year1 = &result.yearly_projections[0];

        let share_value = 250.0 * 1.025;
        assert_relative_eq!(year1.share_value, share_value);
        assert_relative_eq!(year1.total_shares, 20.0 + 112.5 / share_value + 2400.0 / share_value, epsilon = 1e-9);
        assert_relative_eq!(year1.total_capital_value, year1.total_shares * share_value);
    }

    #[test]
    fn test_bare_ownership_projection() {
        let activimmo = InstrumentConfig::activimmo();
        let request = SimulationRequest::new(ScpiKind::Activimmo, OwnershipMode::Bare, 6100.0, 10);
        let result = ProjectionEngine::new(&activimmo).project(&request);

        assert_eq!(result.total_dividends_received, 0.0);
        assert_eq!(result.dividend_reinvestment_rate, None);
        assert_eq!(result.final_shares, 10.0);
        assert_relative_eq!(result.final_capital_value, 10.0 * 610.0 * 1.03_f64.powi(10), epsilon = 1e-9);
        assert!(result.final_capital_value > 6100.0);

        for row in &result.yearly_projections {
            assert_eq!(row.dividends_received, 0.0);
            assert_eq!(row.dividends_reinvested, 0.0);
            assert_eq!(row.cumulative_dividends, 0.0);
        }
    }

    #[test]
    fn test_share_value_compounds_from_subscription_price() {
        let comete = InstrumentConfig::comete();
        let engine = ProjectionEngine::new(&comete);

        for year in 1..=20 {
            assert_eq!(engine.share_value(year), 250.0 * 1.025_f64.powi(year as i32));
        }
    }

    #[test]
    fn test_dividends_use_subscription_price() {
        let comete = InstrumentConfig::comete();
        let request = SimulationRequest::new(ScpiKind::Comete, OwnershipMode::Full, 5000.0, 5);
        let result = ProjectionEngine::new(&comete).project(&request);

        // No purchases after the initial subscription: same dividend every year
        for row in &result.yearly_projections {
            assert_relative_eq!(row.dividends_received, 225.0, epsilon = 1e-9);
        }
        assert_relative_eq!(result.total_dividends_received, 5.0 * 225.0, epsilon = 1e-9);
        assert_eq!(result.total_invested, 5000.0);
    }

    #[test]
    fn test_half_share_amount_rounds_to_even() {
        let comete = InstrumentConfig::comete();
        let request = SimulationRequest::new(ScpiKind::Comete, OwnershipMode::Full, 5125.0, 3);
        let result = ProjectionEngine::new(&comete).project(&request);

        assert_eq!(result.initial_investment, 5000.0);
        assert_eq!(result.initial_shares, 20.0);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let comete = InstrumentConfig::comete();
        let engine = ProjectionEngine::new(&comete);

        let a = engine.project(&full_request());
        let b = engine.project(&full_request());
        assert_eq!(a, b);
        assert_eq!(a.final_capital_value.to_bits(), b.final_capital_value.to_bits());
    }

    #[test]
    fn test_extra_year_appends_one_row() {
        let comete = InstrumentConfig::comete();
        let engine = ProjectionEngine::new(&comete);

        let mut longer = full_request();
        longer.duration_years = 9;

        let short = engine.project(&full_request());
        let long = engine.project(&longer);

        assert_eq!(long.yearly_projections.len(), short.yearly_projections.len() + 1);
        assert_eq!(&long.yearly_projections[..8], &short.yearly_projections[..]);

        let last = &long.yearly_projections[8];
        let prev = &long.yearly_projections[7];
        assert!(last.cumulative_dividends > prev.cumulative_dividends);
        assert!(last.total_capital_value > prev.total_capital_value);
    }

    #[test]
    fn test_reinvestment_increases_shares_and_invested() {
        let comete = InstrumentConfig::comete();
        let engine = ProjectionEngine::new(&comete);

        let without = engine.project(&full_request().with_reinvestment(0.0));
        let with = engine.project(&full_request().with_reinvestment(0.5));

        assert!(with.final_shares > without.final_shares);
        assert!(with.total_invested > without.total_invested);
        assert!(without.yearly_projections.iter().all(|r| r.dividends_reinvested == 0.0));
    }

    #[test]
    fn test_average_annual_yield() {
        assert_relative_eq!(average_annual_yield(12100.0, 10000.0, 2), 10.0, epsilon = 1e-9);
        assert_eq!(average_annual_yield(1000.0, 0.0, 5), 0.0);
        assert_eq!(average_annual_yield(1000.0, 1000.0, 0), 0.0);
    }
}
