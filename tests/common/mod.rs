#![allow(dead_code)]

use chrono::NaiveDate;
use expense_core::{ExpenseRecord, RecordStore};

/// Builds records with ids 1..=n for the given amounts.
pub fn records_with_amounts(amounts: &[f64]) -> Vec<ExpenseRecord> {
    amounts
        .iter()
        .enumerate()
        .map(|(idx, amount)| {
            ExpenseRecord::new(
                idx as u32 + 1,
                *amount,
                format!("Purchase {}", idx + 1),
                "Testing",
                NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date"),
            )
        })
        .collect()
}

pub fn sample_store() -> RecordStore {
    RecordStore::sample().expect("bundled sample is valid")
}
