#![doc(test(attr(deny(warnings))))]

//! Expense Core holds a fixed list of expense records and derives the
//! statistics and highlight classification shown by its list, detail and
//! summary views.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod utils;

pub use aggregate::{
    classify, max_expense, min_expense, total_expense, transaction_count, Classification,
    ExpenseSummary,
};
pub use currency::format_currency;
pub use domain::ExpenseRecord;
pub use errors::ExpenseError;
pub use store::RecordStore;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
