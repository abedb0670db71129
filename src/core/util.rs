//! Common utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::{is_permission_denied, ScanError};

/// Timestamp format used in the report header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// List the entries of a directory.
///
/// A permission error yields an empty listing so the caller treats the subtree
/// as empty; any other failure is returned.
pub fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read_dir_err = |source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if is_permission_denied(&err) => {
            debug!(path = %dir.display(), "permission denied, skipping directory");
            return Ok(Vec::new());
        }
        Err(err) => return Err(read_dir_err(err)),
    };

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(err) if is_permission_denied(&err) => {
                debug!(path = %dir.display(), "permission denied while listing");
                return Ok(Vec::new());
            }
            Err(err) => return Err(read_dir_err(err)),
        }
    }
    Ok(paths)
}

/// Directory that should be descended into (symlinked directories are not)
pub fn is_real_dir(path: &Path) -> bool {
    path.is_dir() && !path.is_symlink()
}

/// Current local time in the report's timestamp format
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Replace `path` with `content` in one step (write a sibling temp file, then rename)
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Output path has no file name: {:?}", path))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write temporary file: {:?}", tmp_path))?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        // A stray temp file would be counted by the next scan.
        let _ = fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("Failed to replace output file: {:?}", path));
    }
    Ok(())
}
