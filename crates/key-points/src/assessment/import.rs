//! Batch loading of assessment records from CSV or JSON exports of the form.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::record::AssessmentRecord;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read assessment export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid assessment CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid assessment JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported export format '{0}', expected .csv or .json")]
    UnsupportedFormat(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonExport {
    Many(Vec<AssessmentRecord>),
    One(AssessmentRecord),
}

/// Load records from `path`, choosing the parser by file extension.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<AssessmentRecord>, ImportError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => records_from_csv(File::open(path)?),
        "json" => records_from_json(File::open(path)?),
        _ => Err(ImportError::UnsupportedFormat(path.display().to_string())),
    }
}

/// One record per row; the header row uses the record's field names. Empty cells are absent.
pub fn records_from_csv<R: Read>(reader: R) -> Result<Vec<AssessmentRecord>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<AssessmentRecord>() {
        records.push(row?);
    }
    Ok(records)
}

/// Accepts a single record object or an array of records.
pub fn records_from_json<R: Read>(reader: R) -> Result<Vec<AssessmentRecord>, ImportError> {
    let records = match serde_json::from_reader(reader)? {
        JsonExport::Many(records) => records,
        JsonExport::One(record) => vec![record],
    };
    Ok(records)
}
