//! Record display formatting
//!
//! Fixed-width register rows for terminal output.

use crate::models::Record;

/// Format a single record for display (register row)
pub fn format_record_row(record: &Record, symbol: &str) -> String {
    format!(
        "{} {:7} {:20} {:>12}  {}",
        record.date.format("%Y-%m-%d"),
        record.kind.to_string(),
        truncate(&record.category, 20),
        record.amount.format_with_symbol(symbol),
        record.description
    )
    .trim_end()
    .to_string()
}

/// Format a list of records as a register
pub fn format_record_register(records: &[Record], symbol: &str) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:7} {:20} {:>12}  {}\n",
        "Date", "Kind", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for record in records {
        output.push_str(&format_record_row(record, symbol));
        output.push('\n');
    }

    output
}

/// Truncate a string to max_len characters, adding ellipsis if needed
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecordKind};
    use chrono::NaiveDate;

    fn record() -> Record {
        Record::new(
            Money::from_cents(30000),
            "Food",
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            "groceries",
            RecordKind::Expense,
        )
    }

    #[test]
    fn test_row_contains_all_fields() {
        let row = format_record_row(&record(), "$");
        assert!(row.starts_with("2024-01-10"));
        assert!(row.contains("Expense"));
        assert!(row.contains("Food"));
        assert!(row.contains("$300.00"));
        assert!(row.ends_with("groceries"));
    }

    #[test]
    fn test_register_empty() {
        assert_eq!(format_record_register(&[], "$"), "No records found.\n");
    }

    #[test]
    fn test_register_has_header_and_rows() {
        let output = format_record_register(&[record()], "$");
        assert!(output.contains("Date"));
        assert!(output.contains("Category"));
        assert!(output.contains("2024-01-10"));
    }

    #[test]
    fn test_truncate_long_category() {
        let mut r = record();
        r.category = "A very long category name indeed".to_string();
        let row = format_record_row(&r, "$");
        assert!(row.contains('…'));
    }
}
