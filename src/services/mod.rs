//! Business logic layer
//!
//! The category registry, the record store, and the ledger engine that
//! composes them with the persistence adapter.

pub mod category;
pub mod ledger;
pub mod store;

pub use category::{AddOutcome, CategoryRegistry};
pub use ledger::{
    AddReceipt, BalanceSummary, CategoryTotal, ExpenseAnalysis, FilteredView, LedgerEngine,
    RatioReport, RatioVerdict,
};
pub use store::RecordStore;
