//! JSON file storage layer
//!
//! `file_io` holds the generic read/atomic-write helpers; `records` is the
//! persistence adapter for the record sequence.

pub mod file_io;
pub mod records;

pub use records::RecordStorage;
