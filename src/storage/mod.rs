pub mod json_backend;

use crate::{domain::ExpenseRecord, errors::ExpenseError};

pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Abstraction over the places a record collection can be read from at startup.
pub trait RecordSource {
    fn load(&self) -> Result<Vec<ExpenseRecord>>;

    /// Short human-readable origin used in logs and the `config` view.
    fn describe(&self) -> String;
}

pub use json_backend::{
    load_records_from_path, parse_records, BundledSample, JsonRecordFile, SAMPLE_DATASET,
};
