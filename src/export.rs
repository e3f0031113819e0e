//! CSV export of yearly projections and export file naming

use chrono::NaiveDate;
use std::io::Write;

use crate::simulation::SimulationResults;

/// Write one CSV row per projected year
pub fn write_projections_csv<W: Write>(results: &SimulationResults, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &results.yearly_projections {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn ascii_fold(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => "O",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'Ý' | 'Ÿ' => "Y",
        'ç' => "c",
        'Ç' => "C",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ñ' => "n",
        'Ñ' => "N",
        _ => return None,
    };
    Some(folded)
}

/// Turn free text into a lowercase ASCII file name stem
///
/// `"SCPI Comète (nue-propriété)"` becomes `"scpi_comete_nue-propriete"`.
pub fn slugify_filename(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match ascii_fold(c) {
            Some(ascii) => folded.push_str(ascii),
            None => folded.push(c),
        }
    }

    let mut slug = String::with_capacity(folded.len());
    for c in folded.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() {
            slug.push('_');
        }
    }

    slug.split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// File name for an exported simulation
pub fn export_filename(results: &SimulationResults, date: NaiveDate, extension: &str) -> String {
    let stem = format!(
        "simulation {} {} {}ans {}",
        results.scpi_type,
        results.investment_type,
        results.duration_years,
        date.format("%Y-%m-%d"),
    );
    format!("{}.{}", slugify_filename(&stem), extension.trim_start_matches('.'))
}
