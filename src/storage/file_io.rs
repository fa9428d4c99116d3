//! File I/O utilities with atomic writes
//!
//! Provides safe JSON file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Read JSON from a file, returning `None` if the file doesn't exist
pub fn read_json<T, P>(path: P) -> LedgerResult<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader)
        .map_err(|e| LedgerError::Json(format!("Failed to parse {}: {}", path.display(), e)))?;

    Ok(Some(value))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all, so a crash
/// mid-write cannot leave a half-serialized store behind.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> LedgerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| LedgerError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
