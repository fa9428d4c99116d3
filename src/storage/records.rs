//! Record persistence adapter
//!
//! Stores the whole record sequence as a JSON array in one file, in store
//! order. Every successful append rewrites the file; there is no incremental
//! diffing. A missing file means an empty ledger; a file that exists but
//! cannot be decoded is reported as a corrupt store and never treated as
//! fatal by callers.

use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Record;

use super::file_io::{read_json, write_json_atomic};

/// File-backed storage for the full record sequence
#[derive(Debug, Clone)]
pub struct RecordStorage {
    path: PathBuf,
}

impl RecordStorage {
    /// Create an adapter for the given record file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The record file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records
    ///
    /// A missing file yields an empty sequence. A decode failure yields
    /// [`LedgerError::CorruptStore`]; the caller decides how loudly to warn.
    pub fn load(&self) -> LedgerResult<Vec<Record>> {
        match read_json::<Vec<Record>, _>(&self.path) {
            Ok(Some(records)) => Ok(records),
            Ok(None) => Ok(Vec::new()),
            Err(err) => Err(LedgerError::CorruptStore {
                path: self.path.display().to_string(),
                detail: err.to_string(),
            }),
        }
    }

    /// Overwrite the record file with the given sequence, atomically
    pub fn save(&self, records: &[Record]) -> LedgerResult<()> {
        write_json_atomic(&self.path, &records)
    }
}
