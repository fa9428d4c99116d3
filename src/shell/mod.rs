//! Interactive shell
//!
//! The numbered-menu command loop. Each entry maps to one engine operation;
//! every failure is printed and the loop continues. End of input on stdin
//! exits the same way as the Exit entry.

use std::io::{self, Write};

use crate::config::Settings;
use crate::display::{format_balance, format_expense_analysis, format_ratio, format_record_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, RecordKind};
use crate::services::{AddOutcome, LedgerEngine};

/// Run the interactive command loop until Exit or end of input
pub fn run(engine: &mut LedgerEngine, settings: &Settings) -> LedgerResult<()> {
    println!();
    println!("tally - personal ledger");

    loop {
        print_menu();

        let choice = match prompt_string("Select an option: ") {
            Ok(choice) => choice,
            Err(_) => break,
        };

        let result = match choice.as_str() {
            "1" => add_record_flow(engine, RecordKind::Income),
            "2" => add_record_flow(engine, RecordKind::Expense),
            "3" => {
                println!("{}", format_balance(&engine.balance(), &settings.currency_symbol));
                Ok(())
            }
            "4" => view_period_flow(engine, settings),
            "5" => analyze_flow(engine, settings),
            "6" => add_category_flow(engine, RecordKind::Income),
            "7" => add_category_flow(engine, RecordKind::Expense),
            "8" => {
                show_categories(engine);
                Ok(())
            }
            "9" => filtered_view_flow(engine, settings),
            "10" => {
                println!(
                    "{}",
                    format_ratio(&engine.expense_income_ratio(), &settings.currency_symbol)
                );
                Ok(())
            }
            "11" => {
                print!(
                    "{}",
                    format_record_register(engine.records(), &settings.currency_symbol)
                );
                Ok(())
            }
            "12" => break,
            _ => {
                println!("Unrecognized option, try again.");
                Ok(())
            }
        };

        // Flows only fail on lost input; treat that as a clean exit
        if result.is_err() {
            break;
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn print_menu() {
    println!();
    println!("Menu:");
    println!("  1. Add income");
    println!("  2. Add expense");
    println!("  3. Show balance");
    println!("  4. View period");
    println!("  5. Analyze expenses");
    println!("  6. Add income category");
    println!("  7. Add expense category");
    println!("  8. Show categories");
    println!("  9. View period by category");
    println!(" 10. Expense/income ratio");
    println!(" 11. Show raw records");
    println!(" 12. Exit");
}

fn add_record_flow(engine: &mut LedgerEngine, kind: RecordKind) -> LedgerResult<()> {
    let (noun, categories) = match kind {
        RecordKind::Income => ("income", engine.income_categories()),
        RecordKind::Expense => ("expense", engine.expense_categories()),
    };

    if categories.is_empty() {
        println!("No {} categories yet. Add one first from the menu.", noun);
        return Ok(());
    }
    println!("Available {} categories: {}", noun, categories.join(", "));

    let category = prompt_string(&format!("Choose an {} category: ", noun))?;
    if !engine.is_valid_category(kind, &category) {
        println!("No such category. Add it first from the menu.");
        return Ok(());
    }

    let amount_text = prompt_string("Enter the amount: ")?;
    let amount = match Money::parse(&amount_text) {
        Ok(amount) => amount,
        Err(err) => {
            println!("{}", err);
            return Ok(());
        }
    };

    let date_text = prompt_string("Enter the date (YYYY-MM-DD): ")?;
    let description = prompt_string("Enter a description: ")?;

    match engine.add_record(amount, &category, &date_text, &description, kind) {
        Ok(receipt) => {
            println!("Record added.");
            if let Some(err) = receipt.persistence_error {
                println!("Warning: the record was kept in memory but not saved: {}", err);
            }
        }
        Err(err) => println!("{}", err),
    }

    Ok(())
}

fn view_period_flow(engine: &LedgerEngine, settings: &Settings) -> LedgerResult<()> {
    let start = prompt_string("Enter the start date (YYYY-MM-DD): ")?;
    let end = prompt_string("Enter the end date (YYYY-MM-DD): ")?;

    match engine.view_period(&start, &end) {
        Ok(records) => {
            println!("Records from {} to {}:", start.trim(), end.trim());
            print!(
                "{}",
                format_record_register(&records, &settings.currency_symbol)
            );
        }
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn filtered_view_flow(engine: &LedgerEngine, settings: &Settings) -> LedgerResult<()> {
    println!(
        "Income categories: {}",
        join_or_none(engine.income_categories())
    );
    println!(
        "Expense categories: {}",
        join_or_none(engine.expense_categories())
    );

    let start = prompt_string("Enter the start date (YYYY-MM-DD): ")?;
    let end = prompt_string("Enter the end date (YYYY-MM-DD): ")?;
    let category = prompt_string("Choose a category: ")?;

    match engine.view_period_by_category(&start, &end, &category) {
        Ok(view) => {
            println!(
                "Records from {} to {} in category '{}':",
                start.trim(),
                end.trim(),
                category
            );
            print!(
                "{}",
                format_record_register(&view.records, &settings.currency_symbol)
            );
            println!(
                "Total for '{}': {}",
                category,
                view.total.format_with_symbol(&settings.currency_symbol)
            );
        }
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn analyze_flow(engine: &LedgerEngine, settings: &Settings) -> LedgerResult<()> {
    let answer = prompt_string("Show the top 3 expense categories? (Y/N): ")?;
    let analysis = engine.analyze_expenses();
    print!(
        "{}",
        format_expense_analysis(&analysis, parse_yes(&answer), &settings.currency_symbol)
    );
    Ok(())
}

fn add_category_flow(engine: &mut LedgerEngine, kind: RecordKind) -> LedgerResult<()> {
    let noun = match kind {
        RecordKind::Income => "income",
        RecordKind::Expense => "expense",
    };
    let name = prompt_string(&format!("Enter a new {} category: ", noun))?;

    let outcome = match kind {
        RecordKind::Income => engine.add_income_category(&name),
        RecordKind::Expense => engine.add_expense_category(&name),
    };

    match outcome {
        Ok(AddOutcome::Added) => println!("Category '{}' added.", name.trim()),
        Ok(AddOutcome::AlreadyExists) => println!("Category '{}' already exists.", name.trim()),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn show_categories(engine: &LedgerEngine) {
    println!(
        "Income categories: {}",
        join_or_none(engine.income_categories())
    );
    println!(
        "Expense categories: {}",
        join_or_none(engine.expense_categories())
    );
}

fn join_or_none(categories: &[String]) -> String {
    if categories.is_empty() {
        "(none)".to_string()
    } else {
        categories.join(", ")
    }
}

/// Interpret a yes/no answer, defaulting to no
fn parse_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Prompt for a line of input
///
/// End of input is an error so callers can unwind the loop.
fn prompt_string(prompt: &str) -> LedgerResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| LedgerError::Io(e.to_string()))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| LedgerError::Io(e.to_string()))?;
    if bytes == 0 {
        return Err(LedgerError::Io("end of input".into()));
    }

    Ok(input.trim().to_string())
}
