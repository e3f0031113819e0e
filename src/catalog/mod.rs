//! Instrument catalog: the static registry of supported SCPIs

mod instrument;
pub mod loader;

pub use instrument::{InstrumentConfig, OwnershipMode, ScpiInfo, ScpiKind};

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ConfigError, SimulatorError};

/// Immutable mapping from identifier to instrument characteristics
///
/// Built once at startup. An identifier declared in [`ScpiKind`] but absent
/// from the map is "unconfigured": lookups report it as not found and
/// listings skip it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    instruments: HashMap<ScpiKind, InstrumentConfig>,
}

impl Catalog {
    /// Build a catalog from configured instruments
    ///
    /// Each instrument is validated; a later entry for the same identifier
    /// replaces an earlier one.
    pub fn new(instruments: impl IntoIterator<Item = InstrumentConfig>) -> Result<Self, ConfigError> {
        let mut map = HashMap::new();
        for config in instruments {
            config.validate()?;
            map.insert(config.kind, config);
        }
        Ok(Self { instruments: map })
    }

    /// Catalog with the reference Comète and ActivImmo characteristics
    pub fn reference() -> Self {
        Self {
            instruments: ScpiKind::ALL
                .iter()
                .map(|&kind| (kind, InstrumentConfig::reference(kind)))
                .collect(),
        }
    }

    /// Load the catalog from a CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, ConfigError> {
        Self::new(loader::load_instruments(path)?)
    }

    pub fn lookup(&self, kind: ScpiKind) -> Result<&InstrumentConfig, SimulatorError> {
        self.instruments
            .get(&kind)
            .ok_or_else(|| SimulatorError::NotFound(format!("SCPI type {} not found", kind)))
    }

    /// Configured instruments in declaration order
    pub fn list(&self) -> Vec<&InstrumentConfig> {
        ScpiKind::ALL
            .iter()
            .filter_map(|kind| self.instruments.get(kind))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_lookup() {
        let catalog = Catalog::reference();
        let comete = catalog.lookup(ScpiKind::Comete).unwrap();
        assert_eq!(comete.name, "SCPI Comète");
        assert_eq!(comete.price_per_share, 250.0);

        let activimmo = catalog.lookup(ScpiKind::Activimmo).unwrap();
        assert_eq!(activimmo.price_per_share, 610.0);
        assert_eq!(activimmo.minimum_investment, 6100.0);
    }

    #[test]
    fn test_unconfigured_instrument_not_found() {
        let catalog = Catalog::new(vec![InstrumentConfig::activimmo()]).unwrap();

        let err = catalog.lookup(ScpiKind::Comete).unwrap_err();
        assert_eq!(err, SimulatorError::NotFound("SCPI type comete not found".to_string()));
    }

    #[test]
    fn test_list_skips_unconfigured() {
        let catalog = Catalog::new(vec![InstrumentConfig::activimmo()]).unwrap();
        let listed: Vec<_> = catalog.list().iter().map(|c| c.kind).collect();
        assert_eq!(listed, vec![ScpiKind::Activimmo]);

        let full: Vec<_> = Catalog::reference().list().iter().map(|c| c.kind).collect();
        assert_eq!(full, vec![ScpiKind::Comete, ScpiKind::Activimmo]);
    }

    #[test]
    fn test_new_rejects_invalid_instrument() {
        let mut broken = InstrumentConfig::comete();
        broken.price_per_share = 0.0;
        assert!(Catalog::new(vec![broken]).is_err());
    }
}
