//! Projection output structures

use serde::{Deserialize, Serialize};

use crate::catalog::{OwnershipMode, ScpiKind};

/// Snapshot of the investment at the end of one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    /// Year number (1-indexed)
    pub year: u32,

    /// Dividends received this year
    pub dividends_received: f64,

    /// Dividends reinvested this year
    pub dividends_reinvested: f64,

    /// Programmed savings added this year
    pub programmed_savings: f64,

    /// Shares held at end of year
    pub total_shares: f64,

    /// Value per share at end of year
    pub share_value: f64,

    /// Shares held times share value
    pub total_capital_value: f64,

    /// Dividends received through this year
    pub cumulative_dividends: f64,
}

/// Complete simulation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    // Echoed request, with the amount rounded to whole shares
    pub scpi_type: ScpiKind,
    pub investment_type: OwnershipMode,
    pub initial_investment: f64,
    pub duration_years: u32,
    pub programmed_savings_monthly: Option<f64>,
    pub dividend_reinvestment_rate: Option<f64>,

    // Aggregates
    pub total_invested: f64,
    pub final_capital_value: f64,
    pub total_dividends_received: f64,
    /// Final capital value plus dividends received
    pub total_return: f64,
    /// Average annualized yield, in percent
    pub annual_yield: f64,

    // Shares
    pub initial_shares: f64,
    pub final_shares: f64,
    pub price_per_share: f64,

    pub yearly_projections: Vec<YearlyProjection>,

    pub risks: Vec<String>,
    pub disclaimers: Vec<String>,
}

impl SimulationResults {
    /// Gain over the amounts put in (capital plus dividends minus invested)
    pub fn net_gain(&self) -> f64 {
        self.total_return - self.total_invested
    }

    /// Compact summary for console output and comparisons
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            scpi_type: self.scpi_type,
            investment_type: self.investment_type,
            duration_years: self.duration_years,
            dividend_reinvestment_rate: self.dividend_reinvestment_rate.unwrap_or(0.0),
            total_invested: self.total_invested,
            final_capital_value: self.final_capital_value,
            total_dividends_received: self.total_dividends_received,
            total_return: self.total_return,
            net_gain: self.net_gain(),
            annual_yield: self.annual_yield,
            final_shares: self.final_shares,
        }
    }
}

/// Summary statistics for a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub scpi_type: ScpiKind,
    pub investment_type: OwnershipMode,
    pub duration_years: u32,
    pub dividend_reinvestment_rate: f64,
    pub total_invested: f64,
    pub final_capital_value: f64,
    pub total_dividends_received: f64,
    pub total_return: f64,
    pub net_gain: f64,
    pub annual_yield: f64,
    pub final_shares: f64,
}
