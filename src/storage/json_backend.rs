use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::ExpenseRecord;

use super::{RecordSource, Result};

/// The shipped seven-record dataset, embedded at compile time.
pub const SAMPLE_DATASET: &str = include_str!("../../data/sample_expenses.json");

/// Parses a JSON array of expense records.
pub fn parse_records(json: &str) -> Result<Vec<ExpenseRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Loads a JSON dataset from disk, returning structured errors on failure.
pub fn load_records_from_path(path: &Path) -> Result<Vec<ExpenseRecord>> {
    let data = fs::read_to_string(path)?;
    let records = parse_records(&data)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded expense dataset");
    Ok(records)
}

/// Record source backed by the bundled sample dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSample;

impl RecordSource for BundledSample {
    fn load(&self) -> Result<Vec<ExpenseRecord>> {
        parse_records(SAMPLE_DATASET)
    }

    fn describe(&self) -> String {
        "bundled sample".into()
    }
}

/// Record source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonRecordFile {
    path: PathBuf,
}

impl JsonRecordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonRecordFile {
    fn load(&self) -> Result<Vec<ExpenseRecord>> {
        load_records_from_path(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
