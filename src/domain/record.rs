use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};
use crate::errors::ExpenseError;

/// A single purchase entry.
///
/// Records are plain values; the store validates them once on construction and
/// only hands out shared references afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: u32,
    #[serde(alias = "expense")]
    pub amount: f64,
    #[serde(alias = "product")]
    pub description: String,
    pub category: String,
    #[serde(alias = "expenseDate")]
    pub date: NaiveDate,
}

impl ExpenseRecord {
    pub fn new(
        id: u32,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            amount,
            description: description.into(),
            category: category.into(),
            date,
        }
    }

    /// Checks the per-record invariants: positive id, finite non-negative
    /// amount, and non-blank labels.
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if self.id == 0 {
            return Err(ExpenseError::InvalidRecord(
                "record id must be a positive integer".into(),
            ));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ExpenseError::InvalidRecord(format!(
                "record {} has amount {}; amounts must be finite and non-negative",
                self.id, self.amount
            )));
        }
        if self.description.trim().is_empty() {
            return Err(ExpenseError::InvalidRecord(format!(
                "record {} is missing a description",
                self.id
            )));
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseError::InvalidRecord(format!(
                "record {} is missing a category",
                self.id
            )));
        }
        Ok(())
    }
}

impl Identifiable for ExpenseRecord {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Displayable for ExpenseRecord {
    fn display_label(&self) -> String {
        format!("expense:{} [{}]", self.id, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(amount: f64) -> ExpenseRecord {
        ExpenseRecord::new(
            1,
            amount,
            "Hoodie",
            "Clothes",
            NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
        )
    }

    #[test]
    fn accepts_zero_amount() {
        assert!(record(0.0).validate().is_ok());
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        assert!(matches!(
            record(-1.0).validate(),
            Err(ExpenseError::InvalidRecord(_))
        ));
        assert!(matches!(
            record(f64::NAN).validate(),
            Err(ExpenseError::InvalidRecord(_))
        ));
    }

    #[test]
    fn rejects_blank_labels_and_zero_id() {
        let mut blank = record(5.0);
        blank.category = "   ".into();
        assert!(blank.validate().is_err());

        let mut zero = record(5.0);
        zero.id = 0;
        assert!(zero.validate().is_err());
    }

    #[test]
    fn display_label_names_id_and_description() {
        assert_eq!(record(5.0).display_label(), "expense:1 [Hoodie]");
    }

    #[test]
    fn deserializes_legacy_field_names() {
        let json = r#"{
            "id": 4,
            "expense": 34,
            "product": "Domino's Pizza",
            "category": "Food",
            "expenseDate": "2024-06-25"
        }"#;
        let parsed: ExpenseRecord = serde_json::from_str(json).expect("parse record");
        assert_eq!(parsed.amount, 34.0);
        assert_eq!(parsed.description, "Domino's Pizza");
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 6, 25).unwrap());
    }
}
