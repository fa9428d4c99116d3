//! Display formatting for terminal output

pub mod record;
pub mod report;

pub use record::{format_record_register, format_record_row};
pub use report::{format_balance, format_expense_analysis, format_ratio};
