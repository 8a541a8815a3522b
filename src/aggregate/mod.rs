//! Statistics and display classification derived from a record set.
//!
//! Everything here is a pure function of its inputs and is recomputed on every
//! call.

use serde::Serialize;

use crate::{domain::ExpenseRecord, errors::ExpenseError};

/// Display emphasis assigned to a record relative to the set it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Highest,
    Lowest,
    Normal,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Highest => "highest",
            Classification::Lowest => "lowest",
            Classification::Normal => "normal",
        }
    }
}

/// Largest amount in `records`.
pub fn max_expense(records: &[ExpenseRecord]) -> Result<f64, ExpenseError> {
    records
        .iter()
        .map(|record| record.amount)
        .reduce(f64::max)
        .ok_or(ExpenseError::EmptyInput("maximum"))
}

/// Smallest amount in `records`.
pub fn min_expense(records: &[ExpenseRecord]) -> Result<f64, ExpenseError> {
    records
        .iter()
        .map(|record| record.amount)
        .reduce(f64::min)
        .ok_or(ExpenseError::EmptyInput("minimum"))
}

pub fn total_expense(records: &[ExpenseRecord]) -> f64 {
    records.iter().map(|record| record.amount).sum()
}

pub fn transaction_count(records: &[ExpenseRecord]) -> usize {
    records.len()
}

/// Tags `record` against the set's extremes. The maximum is checked first, so a
/// record equal to both `max` and `min` is `Highest`.
pub fn classify(record: &ExpenseRecord, max: f64, min: f64) -> Classification {
    if record.amount == max {
        Classification::Highest
    } else if record.amount == min {
        Classification::Lowest
    } else {
        Classification::Normal
    }
}

/// Pairs every record with its classification, in the order given.
pub fn classify_all(
    records: &[ExpenseRecord],
) -> Result<Vec<(&ExpenseRecord, Classification)>, ExpenseError> {
    let max = max_expense(records)?;
    let min = min_expense(records)?;
    Ok(records
        .iter()
        .map(|record| (record, classify(record, max, min)))
        .collect())
}

/// Aggregates shown on the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl ExpenseSummary {
    pub fn from_records(records: &[ExpenseRecord]) -> Result<Self, ExpenseError> {
        Ok(Self {
            count: transaction_count(records),
            total: total_expense(records),
            highest: max_expense(records)?,
            lowest: min_expense(records)?,
        })
    }
}
