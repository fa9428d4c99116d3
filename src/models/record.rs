//! Record model
//!
//! One income or expense transaction. The kind is fixed at creation and the
//! on-disk field name for it is `type`, with lowercase tokens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Whether a record adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Positive amount; the sign lives in `kind`, not here
    pub amount: Money,

    /// Category name, validated against the registry at creation time
    pub category: String,

    /// Calendar date, no time component
    pub date: NaiveDate,

    /// Free-form note, may be empty
    #[serde(default)]
    pub description: String,

    /// Income or Expense, immutable after creation
    #[serde(rename = "type")]
    pub kind: RecordKind,
}

impl Record {
    /// Create a new record
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
        kind: RecordKind,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            description: description.into(),
            kind,
        }
    }

}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(
            Money::from_cents(30000),
            "Food",
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            "groceries",
            RecordKind::Expense,
        )
    }

    #[test]
    fn test_serde_field_names_and_tokens() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"type\":\"expense\""));
        assert!(json.contains("\"date\":\"2024-01-10\""));
        assert!(json.contains("\"amount\":30000"));

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_missing_description_defaults_empty() {
        let json = r#"{"amount":500,"category":"Gifts","date":"2024-02-01","type":"income"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.description, "");
        assert!(record.kind.is_income());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "2024-01-10 Expense Food 300.00");
    }
}
