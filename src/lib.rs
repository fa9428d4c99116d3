//! tally - a terminal-based personal income and expense ledger
//!
//! This library provides the core functionality for the tally ledger: it
//! records income and expense transactions, refuses any expense that would
//! push the balance below zero, and answers period- and category-filtered
//! queries plus simple aggregate analytics.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, records)
//! - `date`: Canonical date parsing
//! - `services`: Business logic (category registry, record store, engine)
//! - `storage`: JSON file storage layer
//! - `display`: Terminal output formatting
//! - `shell`: The interactive command loop

pub mod config;
pub mod date;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
