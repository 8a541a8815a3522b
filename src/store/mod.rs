use std::collections::HashSet;

use crate::{
    domain::{ExpenseRecord, Identifiable},
    errors::ExpenseError,
    storage::{BundledSample, RecordSource},
};

/// Ordered, read-only collection of expense records.
///
/// Built once at startup and never mutated; lookups hand out shared references.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ExpenseRecord>,
}

impl RecordStore {
    /// Validates `records` and takes ownership, preserving insertion order.
    pub fn new(records: Vec<ExpenseRecord>) -> Result<Self, ExpenseError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id) {
                return Err(ExpenseError::DuplicateId(record.id));
            }
        }
        tracing::debug!(count = records.len(), "expense record store constructed");
        Ok(Self { records })
    }

    /// Builds a store from any record source.
    pub fn from_source(source: &dyn RecordSource) -> Result<Self, ExpenseError> {
        let records = source.load()?;
        tracing::debug!(source = %source.describe(), "loading expense records");
        Self::new(records)
    }

    /// The shipped seven-record dataset.
    pub fn sample() -> Result<Self, ExpenseError> {
        Self::from_source(&BundledSample)
    }

    pub fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn find_by_id(&self, id: u32) -> Result<&ExpenseRecord, ExpenseError> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .ok_or(ExpenseError::NotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
