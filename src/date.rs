//! Date parsing
//!
//! The ledger accepts exactly one textual date form, `YYYY-MM-DD`. Parse
//! failures come back as values, never panics, so the shell can re-prompt.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};

/// The canonical date format for input and storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a calendar date
///
/// Surrounding whitespace is ignored. Anything else that does not match the
/// canonical form (including impossible dates like `2024-02-30`) is an
/// [`LedgerError::InvalidDate`].
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| LedgerError::InvalidDate {
        input: trimmed.to_string(),
    })
}
