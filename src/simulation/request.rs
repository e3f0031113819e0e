//! Simulation request and programmed savings frequency

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{OwnershipMode, ScpiKind};

/// Absolute ceiling on the simulated horizon, whatever the ownership mode
pub const MAX_DURATION_YEARS: u32 = 20;

/// Frequency of programmed savings contributions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SavingsFrequency {
    #[default]
    #[serde(rename = "mensuelle")]
    Monthly,
    #[serde(rename = "trimestrielle")]
    Quarterly,
    #[serde(rename = "semestrielle")]
    SemiAnnual,
}

impl SavingsFrequency {
    /// Contributions per year
    pub fn yearly_multiplier(&self) -> f64 {
        match self {
            SavingsFrequency::Monthly => 12.0,
            SavingsFrequency::Quarterly => 4.0,
            SavingsFrequency::SemiAnnual => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SavingsFrequency::Monthly => "mensuelle",
            SavingsFrequency::Quarterly => "trimestrielle",
            SavingsFrequency::SemiAnnual => "semestrielle",
        }
    }
}

impl fmt::Display for SavingsFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SavingsFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mensuelle" | "monthly" => Ok(SavingsFrequency::Monthly),
            "trimestrielle" | "quarterly" => Ok(SavingsFrequency::Quarterly),
            "semestrielle" | "semi-annual" | "semiannual" => Ok(SavingsFrequency::SemiAnnual),
            other => Err(format!("Unknown savings frequency: {}", other)),
        }
    }
}

/// Parameters of one simulation, as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub scpi_type: ScpiKind,

    pub investment_type: OwnershipMode,

    /// Initial investment in euros
    pub investment_amount: f64,

    pub duration_years: u32,

    /// Amount of each programmed savings contribution
    #[serde(default)]
    pub programmed_savings_amount: Option<f64>,

    /// Defaults to monthly when an amount is given without frequency
    #[serde(default)]
    pub programmed_savings_frequency: Option<SavingsFrequency>,

    /// Fraction of dividends reinvested in new shares (0-1), full ownership only
    #[serde(default)]
    pub dividend_reinvestment_rate: Option<f64>,
}

impl SimulationRequest {
    /// Request with no programmed savings and no reinvestment
    pub fn new(scpi_type: ScpiKind, investment_type: OwnershipMode, investment_amount: f64, duration_years: u32) -> Self {
        Self {
            scpi_type,
            investment_type,
            investment_amount,
            duration_years,
            programmed_savings_amount: None,
            programmed_savings_frequency: None,
            dividend_reinvestment_rate: None,
        }
    }

    pub fn with_savings(mut self, amount: f64, frequency: SavingsFrequency) -> Self {
        self.programmed_savings_amount = Some(amount);
        self.programmed_savings_frequency = Some(frequency);
        self
    }

    pub fn with_reinvestment(mut self, rate: f64) -> Self {
        self.dividend_reinvestment_rate = Some(rate);
        self
    }

    /// Programmed savings converted to a yearly contribution
    pub fn yearly_programmed_savings(&self) -> f64 {
        match self.programmed_savings_amount {
            Some(amount) if amount > 0.0 => {
                amount * self.programmed_savings_frequency.unwrap_or_default().yearly_multiplier()
            }
            _ => 0.0,
        }
    }

    /// Reinvestment fraction, treating an absent value as zero
    pub fn reinvestment_fraction(&self) -> f64 {
        self.dividend_reinvestment_rate.unwrap_or(0.0)
    }

    /// Field-level checks independent of the catalog
    ///
    /// These are the type and range constraints enforced at the request
    /// boundary, before any business rule is consulted.
    pub fn check_fields(&self) -> Result<(), String> {
        if !(self.investment_amount.is_finite() && self.investment_amount > 0.0) {
            return Err("investment_amount must be greater than 0".to_string());
        }
        if self.duration_years == 0 || self.duration_years > MAX_DURATION_YEARS {
            return Err(format!("duration_years must be between 1 and {}", MAX_DURATION_YEARS));
        }
        if let Some(amount) = self.programmed_savings_amount {
            if !(amount.is_finite() && amount >= 0.0) {
                return Err("programmed_savings_amount must be greater than or equal to 0".to_string());
            }
        }
        if let Some(rate) = self.dividend_reinvestment_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err("dividend_reinvestment_rate must be between 0 and 1".to_string());
            }
        }
        Ok(())
    }
}
