//! Core data models
//!
//! The money type and the transaction record. Components that operate on
//! these (registry, store, engine) live in `services`.

pub mod money;
pub mod record;

pub use money::{Money, MoneyParseError};
pub use record::{Record, RecordKind};
