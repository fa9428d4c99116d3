//! User settings
//!
//! Holds the currency symbol and the category seed lists. The seeds are
//! deliberate configuration rather than hardcoded literals: the registry is
//! rebuilt from them on every start, and adding a category at runtime does
//! not write back here.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// User settings for the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in formatted output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Income category seeds for the registry
    #[serde(default = "default_income_categories")]
    pub default_income_categories: Vec<String>,

    /// Expense category seeds for the registry
    #[serde(default = "default_expense_categories")]
    pub default_expense_categories: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_income_categories() -> Vec<String> {
    ["Salary", "Gifts", "Deposits"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_expense_categories() -> Vec<String> {
    ["Food", "Transport", "Entertainment"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_income_categories: default_income_categories(),
            default_expense_categories: default_expense_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults when absent
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let the caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
