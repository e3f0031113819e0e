//! SCPI identifiers, ownership modes and per-instrument characteristics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Supported SCPI funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScpiKind {
    Comete,
    Activimmo,
}

impl ScpiKind {
    /// Every declared identifier, in listing order
    pub const ALL: [ScpiKind; 2] = [ScpiKind::Comete, ScpiKind::Activimmo];

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ScpiKind::Comete => "comete",
            ScpiKind::Activimmo => "activimmo",
        }
    }
}

impl fmt::Display for ScpiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScpiKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "comete" => Ok(ScpiKind::Comete),
            "activimmo" => Ok(ScpiKind::Activimmo),
            other => Err(ConfigError::UnknownInstrument(other.to_string())),
        }
    }
}

/// Ownership structure of the investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnershipMode {
    /// Pleine propriété: dividends and capital appreciation
    #[serde(rename = "pleine_propriete")]
    Full,
    /// Nue-propriété: capital appreciation only, no dividends during dismemberment
    #[serde(rename = "nue_propriete")]
    Bare,
}

impl OwnershipMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnershipMode::Full => "pleine_propriete",
            OwnershipMode::Bare => "nue_propriete",
        }
    }

    pub fn receives_dividends(&self) -> bool {
        matches!(self, OwnershipMode::Full)
    }
}

impl fmt::Display for OwnershipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnershipMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pleine_propriete" | "full" => Ok(OwnershipMode::Full),
            "nue_propriete" | "bare" => Ok(OwnershipMode::Bare),
            other => Err(ConfigError::UnknownOwnershipMode(other.to_string())),
        }
    }
}

/// Static characteristics of one SCPI
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentConfig {
    pub kind: ScpiKind,

    /// Display name
    pub name: String,

    /// Subscription price of one share
    pub price_per_share: f64,

    /// Minimum initial subscription
    pub minimum_investment: f64,

    /// Dividend income per unit of share price per year
    pub annual_yield: f64,

    /// Yearly share price growth
    pub capital_appreciation: f64,

    pub supported_modes: Vec<OwnershipMode>,
}

impl InstrumentConfig {
    /// Comète reference characteristics
    pub fn comete() -> Self {
        Self {
            kind: ScpiKind::Comete,
            name: "SCPI Comète".to_string(),
            price_per_share: 250.0,
            minimum_investment: 5000.0,
            annual_yield: 0.045,
            capital_appreciation: 0.025,
            supported_modes: vec![OwnershipMode::Full, OwnershipMode::Bare],
        }
    }

    /// ActivImmo reference characteristics
    pub fn activimmo() -> Self {
        Self {
            kind: ScpiKind::Activimmo,
            name: "SCPI ActivImmo".to_string(),
            price_per_share: 610.0,
            minimum_investment: 6100.0,
            annual_yield: 0.055,
            capital_appreciation: 0.03,
            supported_modes: vec![OwnershipMode::Full, OwnershipMode::Bare],
        }
    }

    /// Reference characteristics for a given identifier
    pub fn reference(kind: ScpiKind) -> Self {
        match kind {
            ScpiKind::Comete => Self::comete(),
            ScpiKind::Activimmo => Self::activimmo(),
        }
    }

    pub fn supports(&self, mode: OwnershipMode) -> bool {
        self.supported_modes.contains(&mode)
    }

    /// Check the structural constraints a configured instrument must meet
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidInstrument {
            instrument: self.kind.to_string(),
            reason: reason.to_string(),
        };

        if !(self.price_per_share.is_finite() && self.price_per_share > 0.0) {
            return Err(invalid("price per share must be positive"));
        }
        if !(self.minimum_investment >= self.price_per_share) {
            return Err(invalid("minimum investment must be at least one share"));
        }
        if !self.annual_yield.is_finite() || !self.capital_appreciation.is_finite() {
            return Err(invalid("rates must be finite"));
        }
        if self.supported_modes.is_empty() {
            return Err(invalid("at least one investment type must be supported"));
        }
        Ok(())
    }

    /// Public description served by the API
    pub fn info(&self) -> ScpiInfo {
        ScpiInfo {
            scpi_type: self.kind,
            name: self.name.clone(),
            price_per_share: self.price_per_share,
            minimum_investment: self.minimum_investment,
            annual_yield: self.annual_yield,
            capital_appreciation: self.capital_appreciation,
            supported_investment_types: self.supported_modes.clone(),
        }
    }
}

/// Information about a specific SCPI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScpiInfo {
    pub scpi_type: ScpiKind,
    pub name: String,
    pub price_per_share: f64,
    pub minimum_investment: f64,
    pub annual_yield: f64,
    pub capital_appreciation: f64,
    pub supported_investment_types: Vec<OwnershipMode>,
}
