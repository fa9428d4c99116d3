//! Report display formatting
//!
//! Balance, expense analysis, and ratio blocks for the shell.

use crate::services::{BalanceSummary, ExpenseAnalysis, RatioReport};

/// Format the balance summary on one line
pub fn format_balance(summary: &BalanceSummary, symbol: &str) -> String {
    format!(
        "Balance: {} (Income: {}, Expenses: {})",
        summary.balance.format_with_symbol(symbol),
        summary.total_income.format_with_symbol(symbol),
        summary.total_expense.format_with_symbol(symbol)
    )
}

/// Format the expense analysis, optionally with the top-3 ranking first
pub fn format_expense_analysis(
    analysis: &ExpenseAnalysis,
    show_top: bool,
    symbol: &str,
) -> String {
    if analysis.breakdown.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();

    if show_top {
        output.push_str("Top expenses:\n");
        for (i, entry) in analysis.top(3).iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} - {}\n",
                i + 1,
                entry.category,
                entry.total.format_with_symbol(symbol)
            ));
        }
        output.push('\n');
    }

    output.push_str("Expenses by category:\n");
    for entry in &analysis.breakdown {
        output.push_str(&format!(
            "  {}: {}\n",
            entry.category,
            entry.total.format_with_symbol(symbol)
        ));
    }

    output
}

/// Format the expense/income ratio report
pub fn format_ratio(report: &RatioReport, symbol: &str) -> String {
    let ratio = if report.expense_to_income.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.2}", report.expense_to_income)
    };

    format!(
        "Income: {}, Expenses: {}, Expense/income ratio: {}\n{}",
        report.total_income.format_with_symbol(symbol),
        report.total_expense.format_with_symbol(symbol),
        ratio,
        report.verdict
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::{CategoryTotal, RatioVerdict};

    #[test]
    fn test_format_balance() {
        let summary = BalanceSummary {
            balance: Money::from_cents(70000),
            total_income: Money::from_cents(100000),
            total_expense: Money::from_cents(30000),
        };
        assert_eq!(
            format_balance(&summary, "$"),
            "Balance: $700.00 (Income: $1000.00, Expenses: $300.00)"
        );
    }

    #[test]
    fn test_format_analysis_with_top() {
        let analysis = ExpenseAnalysis {
            breakdown: vec![
                CategoryTotal {
                    category: "Food".into(),
                    total: Money::from_cents(30000),
                },
                CategoryTotal {
                    category: "Transport".into(),
                    total: Money::from_cents(5000),
                },
            ],
            ranked: vec![
                CategoryTotal {
                    category: "Food".into(),
                    total: Money::from_cents(30000),
                },
                CategoryTotal {
                    category: "Transport".into(),
                    total: Money::from_cents(5000),
                },
            ],
        };

        let output = format_expense_analysis(&analysis, true, "$");
        assert!(output.contains("Top expenses:"));
        assert!(output.contains("1. Food - $300.00"));
        assert!(output.contains("Expenses by category:"));

        let without = format_expense_analysis(&analysis, false, "$");
        assert!(!without.contains("Top expenses:"));
        assert!(without.contains("Transport: $50.00"));
    }

    #[test]
    fn test_format_analysis_empty() {
        let analysis = ExpenseAnalysis {
            breakdown: vec![],
            ranked: vec![],
        };
        assert_eq!(
            format_expense_analysis(&analysis, true, "$"),
            "No expenses recorded yet.\n"
        );
    }

    #[test]
    fn test_format_ratio_infinite() {
        let report = RatioReport {
            total_income: Money::zero(),
            total_expense: Money::from_cents(5000),
            expense_to_income: f64::INFINITY,
            verdict: RatioVerdict::ExpenseExceedsIncome,
        };
        let output = format_ratio(&report, "$");
        assert!(output.contains("ratio: inf"));
        assert!(output.contains("Expenses exceed income"));
    }

    #[test]
    fn test_format_ratio_finite() {
        let report = RatioReport {
            total_income: Money::from_cents(100000),
            total_expense: Money::from_cents(25000),
            expense_to_income: 0.25,
            verdict: RatioVerdict::IncomeExceedsExpense,
        };
        let output = format_ratio(&report, "$");
        assert!(output.contains("ratio: 0.25"));
        assert!(output.contains("Income exceeds expenses"));
    }
}
