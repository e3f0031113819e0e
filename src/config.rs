//! Application settings loaded from environment variables
//!
//! Every variable is optional. Empty values are treated as unset; values that
//! fail to parse are reported as [`ConfigError`].

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use crate::catalog::{Catalog, InstrumentConfig, ScpiKind};
use crate::error::ConfigError;
use crate::service::ScpiSimulator;
use crate::simulation::DurationLimits;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Front-end origins allowed by default in development
const DEV_CORS_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Service settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,

    /// Default `log` filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Prefix of the versioned API routes
    pub api_prefix: String,

    /// Explicitly allowed CORS origins
    pub cors_origins: Vec<String>,

    /// Load the catalog from this CSV file instead of the per-instrument values
    pub catalog_path: Option<PathBuf>,

    /// Per-instrument values; `None` leaves the instrument unconfigured
    pub instruments: Vec<(ScpiKind, Option<InstrumentConfig>)>,

    pub limits: DurationLimits,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            log_level: "info".to_string(),
            api_prefix: "/api/v1".to_string(),
            cors_origins: Vec::new(),
            catalog_path: None,
            instruments: ScpiKind::ALL
                .iter()
                .map(|&kind| (kind, Some(InstrumentConfig::reference(kind))))
                .collect(),
            limits: DurationLimits::default(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Load settings from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .collect();
        let get = |key: &str| vars.get(key).map(|v| v.trim());

        let mut settings = Self::default();

        if let Some(env) = get("SCPI_ENVIRONMENT") {
            settings.environment = env.parse()?;
        }
        if let Some(level) = get("SCPI_LOG_LEVEL") {
            settings.log_level = level.to_lowercase();
        }
        if let Some(prefix) = get("SCPI_API_PREFIX") {
            settings.api_prefix = format!("/{}", prefix.trim_matches('/'));
        }
        if let Some(origins) = get("SCPI_CORS_ORIGINS") {
            settings.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        settings.catalog_path = get("SCPI_CATALOG_PATH").map(PathBuf::from);

        for (kind, slot) in settings.instruments.iter_mut() {
            let prefix = kind.as_str().to_uppercase();
            let key = |field: &str| format!("{}_{}", prefix, field);

            if !parse_var(&vars, &key("ENABLED"), true)? {
                *slot = None;
                continue;
            }

            let mut config = InstrumentConfig::reference(*kind);
            config.price_per_share = parse_var(&vars, &key("PRICE_PER_SHARE"), config.price_per_share)?;
            config.minimum_investment = parse_var(&vars, &key("MIN_INVESTMENT"), config.minimum_investment)?;
            config.annual_yield = parse_var(&vars, &key("ANNUAL_YIELD"), config.annual_yield)?;
            config.capital_appreciation =
                parse_var(&vars, &key("CAPITAL_APPRECIATION"), config.capital_appreciation)?;
            *slot = Some(config);
        }

        let limits = &mut settings.limits;
        limits.min_years = parse_var(&vars, "MIN_INVESTMENT_DURATION", limits.min_years)?;
        limits.max_full_years = parse_var(&vars, "MAX_INVESTMENT_DURATION_FULL", limits.max_full_years)?;
        limits.max_bare_years = parse_var(&vars, "MAX_INVESTMENT_DURATION_BARE", limits.max_bare_years)?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        if limits.min_years == 0 || limits.min_years > limits.max_bare_years.min(limits.max_full_years) {
            return Err(ConfigError::InvalidValue {
                key: "MIN_INVESTMENT_DURATION".to_string(),
                value: limits.min_years.to_string(),
            });
        }
        if limits.max_full_years > crate::simulation::MAX_DURATION_YEARS {
            return Err(ConfigError::InvalidValue {
                key: "MAX_INVESTMENT_DURATION_FULL".to_string(),
                value: limits.max_full_years.to_string(),
            });
        }
        if limits.max_bare_years >= limits.max_full_years {
            return Err(ConfigError::InvalidValue {
                key: "MAX_INVESTMENT_DURATION_BARE".to_string(),
                value: limits.max_bare_years.to_string(),
            });
        }
        Ok(())
    }

    /// Allowed CORS origins
    ///
    /// Falls back to the local front-end origins in development when none
    /// are configured.
    pub fn cors_origins(&self) -> Vec<String> {
        if self.cors_origins.is_empty() && self.environment == Environment::Development {
            return DEV_CORS_ORIGINS.iter().map(|s| s.to_string()).collect();
        }
        self.cors_origins.clone()
    }

    /// Build the instrument catalog
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => {
                log::info!("Loading SCPI catalog from {}", path.display());
                Catalog::from_csv_path(path)
            }
            None => Catalog::new(self.instruments.iter().filter_map(|(_, config)| config.clone())),
        }
    }

    pub fn simulator(&self) -> Result<ScpiSimulator, ConfigError> {
        let catalog = self.catalog()?;
        log::info!("SCPI catalog ready with {} instrument(s)", catalog.len());
        Ok(ScpiSimulator::new(catalog, self.limits))
    }
}

fn parse_var<T: FromStr>(vars: &HashMap<String, String>, key: &str, default: T) -> Result<T, ConfigError> {
    match vars.get(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.clone(),
        }),
    }
}
