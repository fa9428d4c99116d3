//! Ledger engine
//!
//! The component that composes the category registry, the record store, and
//! the persistence adapter. All validation happens here, before anything
//! reaches the store: category membership is re-checked for the record's
//! kind, and an expense is refused outright when it would push the running
//! balance below zero. Queries are pure reads recomputed from the full store.

use std::collections::BTreeMap;

use crate::date::parse_date;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Record, RecordKind};
use crate::storage::RecordStorage;

use super::category::{AddOutcome, CategoryRegistry};
use super::store::RecordStore;

/// Result of a successful `add_record`
///
/// The in-memory append is committed even when the durable save failed; the
/// save error rides along so the shell can warn without losing the record.
#[derive(Debug)]
pub struct AddReceipt {
    pub record: Record,
    pub persistence_error: Option<LedgerError>,
}

/// Balance figures recomputed from the full record store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSummary {
    pub balance: Money,
    pub total_income: Money,
    pub total_expense: Money,
}

/// A category together with its summed expense total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Expense totals grouped by category
///
/// `breakdown` is ordered by category name ascending; `ranked` by total
/// descending with name ascending as the tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseAnalysis {
    pub breakdown: Vec<CategoryTotal>,
    pub ranked: Vec<CategoryTotal>,
}

impl ExpenseAnalysis {
    /// The highest-spending categories, at most `n` of them
    pub fn top(&self, n: usize) -> &[CategoryTotal] {
        &self.ranked[..self.ranked.len().min(n)]
    }
}

/// Records matching a period-and-category filter, plus their summed amount
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub records: Vec<Record>,
    pub total: Money,
}

/// Which side of the ledger is larger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioVerdict {
    IncomeExceedsExpense,
    ExpenseExceedsIncome,
    Equal,
}

impl std::fmt::Display for RatioVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncomeExceedsExpense => write!(f, "Income exceeds expenses"),
            Self::ExpenseExceedsIncome => write!(f, "Expenses exceed income"),
            Self::Equal => write!(f, "Income and expenses are equal"),
        }
    }
}

/// The expense-over-income ratio and its verdict
///
/// The direction is fixed: `expense_to_income` divides total expense by total
/// income. With no income and no expense the ratio is 0.0 and the verdict is
/// `Equal`; with expenses against zero income it is `+Infinity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioReport {
    pub total_income: Money,
    pub total_expense: Money,
    pub expense_to_income: f64,
    pub verdict: RatioVerdict,
}

/// The ledger engine, sole owner of the registry and the store for one run
pub struct LedgerEngine {
    registry: CategoryRegistry,
    store: RecordStore,
    storage: RecordStorage,
}

impl LedgerEngine {
    /// Create an engine over previously loaded records
    pub fn new(registry: CategoryRegistry, records: Vec<Record>, storage: RecordStorage) -> Self {
        Self {
            registry,
            store: RecordStore::hydrate(records),
            storage,
        }
    }

    // === Commands ===

    /// Validate and append one record, then persist the whole sequence
    ///
    /// Rejections (`InvalidDate`, `UnknownCategory`, `InsufficientFunds`)
    /// leave the store untouched and skip the save entirely. A save failure
    /// after the append is non-fatal and reported in the receipt.
    pub fn add_record(
        &mut self,
        amount: Money,
        category: &str,
        date_text: &str,
        description: &str,
        kind: RecordKind,
    ) -> LedgerResult<AddReceipt> {
        if !amount.is_positive() {
            return Err(LedgerError::Validation(
                "Amount must be greater than zero".into(),
            ));
        }

        let date = parse_date(date_text)?;

        if !self.registry.is_valid(kind, category) {
            return Err(LedgerError::UnknownCategory {
                kind,
                name: category.to_string(),
            });
        }

        if kind.is_expense() {
            let available = self.balance().balance;
            if available < amount {
                return Err(LedgerError::InsufficientFunds {
                    requested: amount,
                    available,
                });
            }
        }

        let record = Record::new(amount, category, date, description, kind);
        self.store.append(record.clone());

        let persistence_error = self.storage.save(self.store.all()).err();

        Ok(AddReceipt {
            record,
            persistence_error,
        })
    }

    /// Add a name to the income category set
    pub fn add_income_category(&mut self, name: &str) -> LedgerResult<AddOutcome> {
        self.registry.add_income_category(name)
    }

    /// Add a name to the expense category set
    pub fn add_expense_category(&mut self, name: &str) -> LedgerResult<AddOutcome> {
        self.registry.add_expense_category(name)
    }

    // === Queries ===

    /// Balance, total income, and total expense over all records
    pub fn balance(&self) -> BalanceSummary {
        let total_income: Money = self
            .store
            .all()
            .iter()
            .filter(|r| r.kind.is_income())
            .map(|r| r.amount)
            .sum();
        let total_expense: Money = self
            .store
            .all()
            .iter()
            .filter(|r| r.kind.is_expense())
            .map(|r| r.amount)
            .sum();

        BalanceSummary {
            balance: total_income - total_expense,
            total_income,
            total_expense,
        }
    }

    /// Records within an inclusive date range, in store order
    ///
    /// Both bounds are parsed before any filtering; either failure aborts
    /// with no output.
    pub fn view_period(&self, start_text: &str, end_text: &str) -> LedgerResult<Vec<Record>> {
        let start = parse_date(start_text)?;
        let end = parse_date(end_text)?;
        Ok(self.store.filter_by_date_range(start, end))
    }

    /// The period view narrowed to one category, with the matched sum
    pub fn view_period_by_category(
        &self,
        start_text: &str,
        end_text: &str,
        category: &str,
    ) -> LedgerResult<FilteredView> {
        let start = parse_date(start_text)?;
        let end = parse_date(end_text)?;
        let records = self
            .store
            .filter_by_date_range_and_category(start, end, category);
        let total = records.iter().map(|r| r.amount).sum();
        Ok(FilteredView { records, total })
    }

    /// Group expense records by category and rank the totals
    ///
    /// The full ranking is always returned; whether to show only the top
    /// entries is the caller's choice.
    pub fn analyze_expenses(&self) -> ExpenseAnalysis {
        let mut totals: BTreeMap<String, Money> = BTreeMap::new();
        for record in self.store.all().iter().filter(|r| r.kind.is_expense()) {
            *totals.entry(record.category.clone()).or_insert(Money::zero()) += record.amount;
        }

        let breakdown: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect();

        // Stable sort over the name-ordered breakdown keeps ties name-ascending
        let mut ranked = breakdown.clone();
        ranked.sort_by(|a, b| b.total.cmp(&a.total));

        ExpenseAnalysis { breakdown, ranked }
    }

    /// Expense-over-income ratio with an exact-comparison verdict
    pub fn expense_income_ratio(&self) -> RatioReport {
        let BalanceSummary {
            total_income,
            total_expense,
            ..
        } = self.balance();

        let expense_to_income = if total_income.is_zero() {
            if total_expense.is_zero() {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            total_expense.cents() as f64 / total_income.cents() as f64
        };

        let verdict = match total_expense.cmp(&total_income) {
            std::cmp::Ordering::Less => RatioVerdict::IncomeExceedsExpense,
            std::cmp::Ordering::Greater => RatioVerdict::ExpenseExceedsIncome,
            std::cmp::Ordering::Equal => RatioVerdict::Equal,
        };

        RatioReport {
            total_income,
            total_expense,
            expense_to_income,
            verdict,
        }
    }

    /// The raw ordered record sequence
    pub fn records(&self) -> &[Record] {
        self.store.all()
    }

    /// Income category names in insertion order
    pub fn income_categories(&self) -> &[String] {
        self.registry.income_categories()
    }

    /// Expense category names in insertion order
    pub fn expense_categories(&self) -> &[String] {
        self.registry.expense_categories()
    }

    /// Kind-scoped category membership check, for shell pre-checks
    pub fn is_valid_category(&self, kind: RecordKind, name: &str) -> bool {
        self.registry.is_valid(kind, name)
    }
}
