//! Scan policy - Which paths are visible, counted and shown
//!
//! All sets live in plain values that are built once and passed into every
//! pass, so tests can swap in their own rules without touching pass logic.

use std::collections::BTreeSet;
use std::path::Path;

use crate::core::paths::{component_names, suffix};

/// Default maximum depth of the rendered tree
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Files at depth below this are always shown in the tree
pub const DEFAULT_SHALLOW_LEVELS: usize = 2;

fn set_of(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Decides whether a path is visible to the scanning passes.
///
/// A path is excluded when any of its component names is hidden (starts with the
/// hidden marker and is not allowlisted) or is one of the ignored names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFilter {
    /// Leading character that marks a hidden entry
    pub hidden_marker: char,
    /// Hidden names that stay visible (CI configuration)
    pub hidden_allowlist: BTreeSet<String>,
    /// Build-artifact, dependency and IDE-state names that are always excluded
    pub ignored_names: BTreeSet<String>,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            hidden_marker: '.',
            hidden_allowlist: set_of(&[".github"]),
            ignored_names: set_of(&[
                ".git",
                ".gradle",
                ".idea",
                "build",
                "node_modules",
                ".next",
                "dist",
                "out",
                "__pycache__",
                ".vscode",
                ".DS_Store",
                "gradle",
                "wrapper",
                "libs.versions.toml",
            ]),
        }
    }
}

impl PathFilter {
    /// Whether a single component name is hidden and not allowlisted
    pub fn is_hidden(&self, name: &str) -> bool {
        name.starts_with(self.hidden_marker) && !self.hidden_allowlist.contains(name)
    }

    /// Whether a single component name is on the ignore list
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_names.contains(name)
    }

    /// Exclusion decision for a path, judged on its component names only
    pub fn excludes(&self, path: &Path) -> bool {
        let names: Vec<_> = component_names(path).collect();
        names.iter().any(|name| self.is_hidden(name))
            || names.iter().any(|name| self.is_ignored(name))
    }

    /// Exclusion decision for a path below `root`, ignoring the root's own components
    pub fn excludes_under(&self, root: &Path, path: &Path) -> bool {
        match path.strip_prefix(root) {
            Ok(rel) => self.excludes(rel),
            Err(_) => self.excludes(path),
        }
    }
}

/// Complete policy for one run: the path filter plus counting and display rules
#[derive(Debug, Clone)]
pub struct ScanPolicy {
    pub filter: PathFilter,
    /// Lower-cased extensions (with leading dot) the counter reports
    pub counted_extensions: BTreeSet<String>,
    /// File names the tree always shows
    pub important_files: BTreeSet<String>,
    /// Extensions the tree always shows (matched case-sensitively)
    pub tree_extensions: BTreeSet<String>,
    /// Files above this depth are always shown in the tree
    pub shallow_levels: usize,
    /// Maximum tree depth
    pub max_depth: usize,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            filter: PathFilter::default(),
            counted_extensions: set_of(&[
                ".kt", ".java", ".cpp", ".c", ".h", ".hpp", ".ts", ".tsx", ".js", ".jsx", ".py",
                ".xml", ".json", ".md", ".sq", ".gradle", ".cmake", ".txt", ".yml", ".yaml",
                ".sh", ".ps1", ".bat",
            ]),
            important_files: set_of(&[
                "build.gradle.kts",
                "settings.gradle.kts",
                "package.json",
                "CMakeLists.txt",
                "README.md",
                "Dockerfile",
                "docker-compose.yml",
                "tsconfig.json",
                "next.config.js",
                "gradle.properties",
                "detekt.yml",
            ]),
            tree_extensions: set_of(&[".kt", ".ts", ".tsx", ".cpp", ".h"]),
            shallow_levels: DEFAULT_SHALLOW_LEVELS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ScanPolicy {
    /// Policy with a custom tree depth
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Lower-cased suffix of `name` if the counter tracks it
    pub fn counted_extension(&self, name: &str) -> Option<String> {
        let ext = suffix(name)?.to_lowercase();
        self.counted_extensions.contains(&ext).then_some(ext)
    }

    pub fn is_shallow(&self, depth: usize) -> bool {
        depth < self.shallow_levels
    }

    pub fn is_important(&self, name: &str) -> bool {
        self.important_files.contains(name)
    }

    pub fn has_tree_extension(&self, name: &str) -> bool {
        suffix(name).is_some_and(|ext| self.tree_extensions.contains(ext))
    }

    /// Whether a visible file at `depth` gets a line in the tree
    pub fn shows_file(&self, name: &str, depth: usize) -> bool {
        self.is_shallow(depth) || self.is_important(name) || self.has_tree_extension(name)
    }
}
