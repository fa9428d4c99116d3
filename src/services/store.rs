//! Record store
//!
//! The ordered in-memory collection of transactions. Append-only for the
//! process lifetime; insertion order is the display order. Validation happens
//! in the engine before anything reaches `append`.

use chrono::NaiveDate;

use crate::models::Record;

/// Append-only ordered sequence of records
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create a store hydrated from previously persisted records
    pub fn hydrate(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Add a record at the end of the sequence
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with `start <= date <= end`, inclusive both ends, in order
    pub fn filter_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| start <= r.date && r.date <= end)
            .cloned()
            .collect()
    }

    /// The date-range filter narrowed to an exact category name
    pub fn filter_by_date_range_and_category(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        category: &str,
    ) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| start <= r.date && r.date <= end && r.category == category)
            .cloned()
            .collect()
    }
}
