//! Report data model
//!
//! Every pass produces one of these values; the renderer and the JSON output
//! only read them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate entry counts from the counter pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub files: usize,
    pub dirs: usize,
}

/// Per-extension file counts, seeded with every recognized extension at zero
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionCounts {
    counts: BTreeMap<String, usize>,
}

impl ExtensionCounts {
    /// Table with a zero entry for each recognized extension
    pub fn seeded<'a>(extensions: impl IntoIterator<Item = &'a String>) -> Self {
        Self {
            counts: extensions.into_iter().map(|ext| (ext.clone(), 0)).collect(),
        }
    }

    /// Count one file; extensions outside the seeded set are ignored
    pub fn record(&mut self, ext: &str) {
        if let Some(count) = self.counts.get_mut(ext) {
            *count += 1;
        }
    }

    #[cfg(test)]
    pub fn get(&self, ext: &str) -> Option<usize> {
        self.counts.get(ext).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Nonzero entries, highest count first, ties by extension
    pub fn nonzero_by_count(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(ext, &count)| (ext.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Build system that owns a module directory, in detection priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Gradle,
    Cmake,
    Nodejs,
}

impl ModuleKind {
    /// All kinds, highest priority first
    pub const ALL: [ModuleKind; 3] = [ModuleKind::Gradle, ModuleKind::Cmake, ModuleKind::Nodejs];

    /// File whose presence marks a module root
    pub fn marker_file(self) -> &'static str {
        match self {
            ModuleKind::Gradle => "build.gradle.kts",
            ModuleKind::Cmake => "CMakeLists.txt",
            ModuleKind::Nodejs => "package.json",
        }
    }

    /// Section heading in the report
    pub fn heading(self) -> &'static str {
        match self {
            ModuleKind::Gradle => "Gradle modules (Kotlin Multiplatform / Android)",
            ModuleKind::Cmake => "CMake modules (native C++ libraries)",
            ModuleKind::Nodejs => "Node.js modules",
        }
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModuleKind::Gradle => "gradle",
            ModuleKind::Cmake => "cmake",
            ModuleKind::Nodejs => "nodejs",
        };
        f.write_str(name)
    }
}

/// One detected module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    /// Module directory relative to root ("." for the root)
    pub path: String,
    /// Marker file relative to root
    pub build_file: String,
}

/// Modules keyed by directory; a directory holds at most one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleIndex {
    records: BTreeMap<String, ModuleRecord>,
}

impl ModuleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the directory already has a module; returns whether it was added
    pub fn insert_if_absent(&mut self, record: ModuleRecord) -> bool {
        if self.records.contains_key(&record.path) {
            return false;
        }
        self.records.insert(record.path.clone(), record);
        true
    }

    #[cfg(test)]
    pub fn get(&self, path: &str) -> Option<&ModuleRecord> {
        self.records.get(path)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of one kind, sorted by directory path
    pub fn of_kind(&self, kind: ModuleKind) -> impl Iterator<Item = &ModuleRecord> {
        self.records.values().filter(move |r| r.kind == kind)
    }
}

/// Everything a report is assembled from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectReport {
    pub generated_at: String,
    /// Depth the tree was rendered to
    pub max_depth: usize,
    pub totals: Totals,
    pub extensions: ExtensionCounts,
    pub modules: ModuleIndex,
    pub tree: Vec<String>,
}
