use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Columns the dashboard cannot work without. Any other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch dataset from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<LaunchDataset, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    log::info!(
        "Loaded {} launches from {} ({} sites, payload {}..{} kg)",
        dataset.len(),
        path.display(),
        dataset.sites().len(),
        dataset.min_payload(),
        dataset.max_payload()
    );
    Ok(dataset)
}

/// Header row followed by one launch per line. Only [`REQUIRED_COLUMNS`]
/// are read; the real dataset also carries flight number, mission outcome
/// and booster version which are dropped here.
pub fn load_reader<R: Read>(source: R) -> Result<LaunchDataset, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        records.push(row.into_record(idx + 1)?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row decoding
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl CsvRow {
    fn into_record(self, row: usize) -> Result<LaunchRecord, DataLoadError> {
        if !self.payload_mass_kg.is_finite() {
            return Err(DataLoadError::InvalidRow {
                row,
                reason: format!("payload mass {} is not finite", self.payload_mass_kg),
            });
        }
        let outcome = Outcome::from_class(self.class).ok_or_else(|| DataLoadError::InvalidRow {
            row,
            reason: format!("class must be 0 or 1, got {}", self.class),
        })?;
        Ok(LaunchRecord {
            site: self.site,
            payload_mass_kg: self.payload_mass_kg,
            outcome,
            booster_version_category: self.booster_version_category,
        })
    }
}
