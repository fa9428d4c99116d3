//! Category registry
//!
//! Owns the two lists of valid category names, one per record kind. Names
//! are unique within a kind, kept in insertion order for display, and checked
//! with exact case-sensitive matches. There is no removal operation and the
//! registry is not persisted; the durable knob is the seed lists in settings.

use crate::error::{LedgerError, LedgerResult};
use crate::models::RecordKind;

/// Outcome of an add-category operation
///
/// A duplicate is not an error: the caller reports it and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// The set of valid category names per record kind
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    income: Vec<String>,
    expense: Vec<String>,
}

impl CategoryRegistry {
    /// Create a registry seeded with the given defaults
    ///
    /// Seeds are trimmed and de-duplicated, preserving first occurrence.
    pub fn new<I, E>(income_defaults: I, expense_defaults: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let mut registry = Self {
            income: Vec::new(),
            expense: Vec::new(),
        };
        for name in income_defaults {
            let _ = registry.add_income_category(name.as_ref());
        }
        for name in expense_defaults {
            let _ = registry.add_expense_category(name.as_ref());
        }
        registry
    }

    /// Check membership in the income set (exact, case-sensitive)
    pub fn is_valid_income_category(&self, name: &str) -> bool {
        self.income.iter().any(|c| c == name)
    }

    /// Check membership in the expense set (exact, case-sensitive)
    pub fn is_valid_expense_category(&self, name: &str) -> bool {
        self.expense.iter().any(|c| c == name)
    }

    /// Kind-scoped membership check
    pub fn is_valid(&self, kind: RecordKind, name: &str) -> bool {
        match kind {
            RecordKind::Income => self.is_valid_income_category(name),
            RecordKind::Expense => self.is_valid_expense_category(name),
        }
    }

    /// Add a name to the income set
    pub fn add_income_category(&mut self, name: &str) -> LedgerResult<AddOutcome> {
        Self::add_to(&mut self.income, name)
    }

    /// Add a name to the expense set
    pub fn add_expense_category(&mut self, name: &str) -> LedgerResult<AddOutcome> {
        Self::add_to(&mut self.expense, name)
    }

    /// Income names in insertion order
    pub fn income_categories(&self) -> &[String] {
        &self.income
    }

    /// Expense names in insertion order
    pub fn expense_categories(&self) -> &[String] {
        &self.expense
    }

    fn add_to(set: &mut Vec<String>, name: &str) -> LedgerResult<AddOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }
        if set.iter().any(|c| c == name) {
            return Ok(AddOutcome::AlreadyExists);
        }
        set.push(name.to_string());
        Ok(AddOutcome::Added)
    }
}
