mod common;

use expense_core::{
    aggregate::classify_all, classify, max_expense, min_expense, total_expense,
    transaction_count, Classification, ExpenseError, ExpenseSummary,
};

use common::{records_with_amounts, sample_store};

const FIXTURES: &[&[f64]] = &[
    &[1.0],
    &[0.0, 0.0],
    &[12.5, 3.25, 99.99, 3.25],
    &[1400.0, 24.0, 150.0],
    &[7.0, 7.0, 7.0, 7.0],
    &[0.01, 1_000_000.0, 500.5, 42.0, 0.02],
];

#[test]
fn max_bounds_every_amount_and_is_attained() {
    for amounts in FIXTURES {
        let records = records_with_amounts(amounts);
        let max = max_expense(&records).expect("non-empty");
        assert!(records.iter().all(|r| max >= r.amount));
        assert!(records.iter().any(|r| r.amount == max));
    }
}

#[test]
fn min_bounds_every_amount_and_is_attained() {
    for amounts in FIXTURES {
        let records = records_with_amounts(amounts);
        let min = min_expense(&records).expect("non-empty");
        assert!(records.iter().all(|r| min <= r.amount));
        assert!(records.iter().any(|r| r.amount == min));
    }
}

#[test]
fn total_and_count_match_the_inputs() {
    for amounts in FIXTURES {
        let records = records_with_amounts(amounts);
        let expected: f64 = amounts.iter().sum();
        assert_eq!(total_expense(&records), expected);
        assert_eq!(transaction_count(&records), amounts.len());
    }
    assert_eq!(total_expense(&[]), 0.0);
    assert_eq!(transaction_count(&[]), 0);
}

#[test]
fn empty_input_is_an_explicit_error() {
    assert!(matches!(max_expense(&[]), Err(ExpenseError::EmptyInput(_))));
    assert!(matches!(min_expense(&[]), Err(ExpenseError::EmptyInput(_))));
    assert!(matches!(classify_all(&[]), Err(ExpenseError::EmptyInput(_))));
}

#[test]
fn uniform_amounts_classify_as_highest() {
    let records = records_with_amounts(&[7.0, 7.0, 7.0, 7.0]);
    let max = max_expense(&records).unwrap();
    let min = min_expense(&records).unwrap();
    for record in &records {
        assert_eq!(classify(record, max, min), Classification::Highest);
    }
}

#[test]
fn shipped_dataset_aggregates() {
    let store = sample_store();
    let records = store.all();
    assert_eq!(max_expense(records).unwrap(), 1400.0);
    assert_eq!(min_expense(records).unwrap(), 24.0);
    assert_eq!(total_expense(records), 2057.0);
    assert_eq!(transaction_count(records), 7);

    let summary = ExpenseSummary::from_records(records).unwrap();
    assert_eq!(
        summary,
        ExpenseSummary {
            count: 7,
            total: 2057.0,
            highest: 1400.0,
            lowest: 24.0,
        }
    );
}

#[test]
fn shipped_dataset_classification() {
    let store = sample_store();
    for (record, tag) in classify_all(store.all()).unwrap() {
        let expected = match record.amount {
            a if a == 1400.0 => Classification::Highest,
            a if a == 24.0 => Classification::Lowest,
            _ => Classification::Normal,
        };
        assert_eq!(tag, expected, "record {} ({})", record.id, record.description);
    }
}
