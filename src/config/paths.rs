//! Path management
//!
//! XDG-compliant path resolution for the configuration and record files.
//!
//! ## Path Resolution Order
//!
//! 1. `TALLY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/tally-cli` or `~/.config/tally-cli`
//! 3. Windows: `%APPDATA%\tally-cli`

use std::path::PathBuf;

use crate::error::LedgerError;

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the data directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = if let Ok(custom) = std::env::var("TALLY_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base directory holding all ledger data
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the record store file
    pub fn records_file(&self) -> PathBuf {
        self.base_dir.join("records.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| LedgerError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("tally-cli"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LedgerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("tally-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.records_file(), temp_dir.path().join("records.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
