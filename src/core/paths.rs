//! Path normalization utilities
//!
//! Every path that reaches the report is relative to the scan root and uses '/'
//! as separator, so output is identical across platforms.

use std::path::{Component, Path};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Relative path used as a module key; the root itself becomes "."
pub fn module_key(path: &Path, root: &Path) -> String {
    match make_relative(path, root) {
        Some(rel) if rel.is_empty() => ".".to_string(),
        Some(rel) => rel,
        None => normalize_path(path),
    }
}

/// Names of the normal components of a path, skipping roots, prefixes and `.`/`..`
pub fn component_names(path: &Path) -> impl Iterator<Item = std::borrow::Cow<'_, str>> {
    path.components().filter_map(|c| match c {
        Component::Normal(name) => Some(name.to_string_lossy()),
        _ => None,
    })
}

/// Bare file name of a path, lossily converted
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Final suffix of a file name including the leading dot (`Main.KT` -> `.KT`)
///
/// Names without a dot, dotfiles like `.bashrc` and names ending in a dot have no suffix.
pub fn suffix(name: &str) -> Option<&str> {
    let idx = name.rfind('.')?;
    if idx == 0 || idx + 1 == name.len() {
        return None;
    }
    Some(&name[idx..])
}
