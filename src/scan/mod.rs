//! Scan module - Passes over the project tree
//!
//! Provides:
//! - counter: File/directory totals and per-extension counts
//! - tree: Depth-bounded tree rendering
//! - modules: Build-system module detection
//!
//! Every pass applies the same `PathFilter`, so an excluded path never shows up
//! in any of their results.

pub mod counter;
pub mod modules;
pub mod tree;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::{is_walk_permission_denied, ScanError};
use crate::core::policy::PathFilter;

/// All visible files under `root` at any depth, in a stable order.
///
/// Excluded directories are pruned; unreadable directories are skipped.
pub fn visible_files(root: &Path, filter: &PathFilter) -> Result<Vec<PathBuf>, ScanError> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !filter.excludes_under(root, e.path()));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if is_walk_permission_denied(&err) => {
                tracing::debug!(error = %err, "permission denied, skipping");
                continue;
            }
            Err(source) => {
                return Err(ScanError::Walk {
                    root: root.to_path_buf(),
                    source,
                })
            }
        };

        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_visible_files_prunes_excluded() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("web/node_modules/x")).unwrap();
        fs::write(root.join("src/a.kt"), "").unwrap();
        fs::write(root.join(".git/config"), "").unwrap();
        fs::write(root.join("web/node_modules/x/index.js"), "").unwrap();
        fs::write(root.join("web/app.js"), "").unwrap();

        let files: Vec<_> = visible_files(root, &PathFilter::default())
            .unwrap()
            .iter()
            .map(|p| crate::core::paths::make_relative(p, root).unwrap())
            .collect();
        assert_eq!(files, vec!["src/a.kt", "web/app.js"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_visible_files_skips_unreadable_dir() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("open")).unwrap();
        fs::create_dir_all(root.join("locked")).unwrap();
        fs::write(root.join("open/a.kt"), "").unwrap();
        fs::write(root.join("locked/b.kt"), "").unwrap();
        let locked = root.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let denied = fs::read_dir(&locked).is_err();
        let files = visible_files(root, &PathFilter::default());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if !denied {
            eprintln!("skipping: running with privileges that bypass directory permissions");
            return;
        }
        let files: Vec<_> = files
            .unwrap()
            .iter()
            .map(|p| crate::core::paths::make_relative(p, root).unwrap())
            .collect();
        assert_eq!(files, vec!["open/a.kt"]);
    }
}
