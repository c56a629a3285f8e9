//! Atomic file writes.
//!
//! All writes follow the same pattern:
//! 1. Write content to a temporary file in the target's directory
//! 2. Sync the file to disk
//! 3. Rename it over the target (`persist`)
//!
//! The temporary file is removed automatically if any step fails, so the
//! target is either untouched or holds the complete new content.

use crate::error::{Result, SimError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(SimError::PersistError)` - On write or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| {
            SimError::PersistError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| {
        SimError::PersistError(format!(
            "failed to create temporary file in '{}': {}",
            parent.display(),
            e
        ))
    })?;

    temp.write_all(content)
        .map_err(|e| SimError::PersistError(format!("failed to write temporary file: {}", e)))?;

    temp.as_file().sync_all().map_err(|e| {
        SimError::PersistError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    temp.persist(path).map_err(|e| {
        SimError::PersistError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e.error
        ))
    })?;

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}
