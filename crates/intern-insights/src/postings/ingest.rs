use super::domain::{RawRecord, REQUIRED_COLUMNS};
use super::DatasetError;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads raw posting rows from a CSV export with Chinese column headers.
pub struct PostingLoader;

impl PostingLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawRecord>, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let missing = missing_columns(headers.iter());
        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns(missing));
        }

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<RawRecord>() {
            records.push(row?);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        debug!(records = records.len(), "loaded raw postings");
        Ok(records)
    }
}

fn missing_columns<'h>(headers: impl Iterator<Item = &'h str>) -> Vec<&'static str> {
    let present: Vec<&str> = headers
        .map(|header| header.trim_start_matches('\u{feff}').trim())
        .collect();

    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !present.contains(column))
        .collect()
}
