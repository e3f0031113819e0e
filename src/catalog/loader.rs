//! Load instrument characteristics from a CSV file
//!
//! Expected header:
//! `identifier,name,price_per_share,minimum_investment,annual_yield,capital_appreciation,supported_modes`
//! where `supported_modes` is a `|`-separated list of investment types.

use super::{InstrumentConfig, OwnershipMode, ScpiKind};
use crate::error::ConfigError;
use csv::Reader;
use std::path::Path;

/// Default catalog file name, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "data/instruments.csv";

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    identifier: String,
    name: String,
    price_per_share: f64,
    minimum_investment: f64,
    annual_yield: f64,
    capital_appreciation: f64,
    supported_modes: String,
}

impl CsvRow {
    fn into_config(self) -> Result<InstrumentConfig, ConfigError> {
        let kind: ScpiKind = self.identifier.parse()?;

        let supported_modes = self
            .supported_modes
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<OwnershipMode>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(InstrumentConfig {
            kind,
            name: self.name,
            price_per_share: self.price_per_share,
            minimum_investment: self.minimum_investment,
            annual_yield: self.annual_yield,
            capital_appreciation: self.capital_appreciation,
            supported_modes,
        })
    }
}

/// Load instrument configs from a CSV file
pub fn load_instruments<P: AsRef<Path>>(path: P) -> Result<Vec<InstrumentConfig>, ConfigError> {
    let reader = Reader::from_path(path)?;
    read_instruments(reader)
}

/// Load instrument configs from any reader (string buffer, embedded file)
pub fn load_instruments_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<InstrumentConfig>, ConfigError> {
    read_instruments(Reader::from_reader(reader))
}

fn read_instruments<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<InstrumentConfig>, ConfigError> {
    let mut configs = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        configs.push(row.into_config()?);
    }

    Ok(configs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const CATALOG_CSV: &str = "\
identifier,name,price_per_share,minimum_investment,annual_yield,capital_appreciation,supported_modes
comete,SCPI Comète,250,5000,0.045,0.025,pleine_propriete|nue_propriete
activimmo,SCPI ActivImmo,610,6100,0.055,0.03,pleine_propriete
";

    #[test]
    fn test_load_instruments_from_reader() {
        let configs = load_instruments_from_reader(CATALOG_CSV.as_bytes()).unwrap();
        assert_eq!(configs.len(), 2);

        assert_eq!(configs[0], InstrumentConfig::comete());
        assert_eq!(configs[1].kind, ScpiKind::Activimmo);
        assert_eq!(configs[1].supported_modes, vec![OwnershipMode::Full]);
    }

    #[test]
    fn test_load_default_catalog_file() {
        let configs = load_instruments(DEFAULT_CATALOG_PATH).expect("Failed to load catalog");
        let catalog = Catalog::new(configs).unwrap();

        assert_eq!(catalog.lookup(ScpiKind::Comete).unwrap(), &InstrumentConfig::comete());
        assert_eq!(catalog.lookup(ScpiKind::Activimmo).unwrap(), &InstrumentConfig::activimmo());
    }

    #[test]
    fn test_partial_file_leaves_instrument_unconfigured() {
        let csv = "\
identifier,name,price_per_share,minimum_investment,annual_yield,capital_appreciation,supported_modes
activimmo,SCPI ActivImmo,610,6100,0.055,0.03,pleine_propriete|nue_propriete
";
        let catalog = Catalog::new(load_instruments_from_reader(csv.as_bytes()).unwrap()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.lookup(ScpiKind::Comete).is_err());
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let csv = "\
identifier,name,price_per_share,minimum_investment,annual_yield,capital_appreciation,supported_modes
epargne,SCPI Epargne,200,1000,0.04,0.01,pleine_propriete
";
        let err = load_instruments_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownInstrument(ref id) if id == "epargne"));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let csv = "\
identifier,name,price_per_share,minimum_investment,annual_yield,capital_appreciation,supported_modes
comete,SCPI Comète,250,5000,0.045,0.025,usufruit
";
        assert!(matches!(
            load_instruments_from_reader(csv.as_bytes()),
            Err(ConfigError::UnknownOwnershipMode(_))
        ));
    }
}
