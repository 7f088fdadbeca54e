//! Atomic file replacement.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::error::{StoreError, StoreResult};

/// Replace the file at `path` with `contents` atomically.
///
/// The data is written to a temporary file in the same directory, synced,
/// and renamed over the target. If any step fails, the previous file is left
/// unchanged and the temporary file is removed. Missing parent directories
/// are created.
pub fn atomic_write(path: impl AsRef<Path>, contents: &[u8]) -> StoreResult<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|e| StoreError::io(path, e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| StoreError::io(path, e))?;
    temp.write_all(contents)
        .map_err(|e| StoreError::io(path, e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(path, e))?;
    temp.persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;

    Ok(())
}
