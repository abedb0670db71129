//! Module pass - Locate build-system module roots by their marker files

use std::path::Path;
use tracing::debug;

use crate::core::error::ScanError;
use crate::core::model::{ModuleIndex, ModuleKind, ModuleRecord};
use crate::core::paths::{file_name, make_relative, module_key, normalize_path};
use crate::core::policy::PathFilter;
use crate::scan::visible_files;

/// Find module roots below `root`.
///
/// Kinds are searched in priority order and a directory keeps the first kind
/// found for it, so a directory with both `build.gradle.kts` and `package.json`
/// is a Gradle module.
pub fn locate_modules(root: &Path, filter: &PathFilter) -> Result<ModuleIndex, ScanError> {
    let files = visible_files(root, filter)?;
    let mut index = ModuleIndex::new();

    for kind in ModuleKind::ALL {
        let marker = kind.marker_file();
        for path in files.iter().filter(|p| file_name(p) == marker) {
            let Some(dir) = path.parent() else {
                continue;
            };
            let record = ModuleRecord {
                kind,
                path: module_key(dir, root),
                build_file: make_relative(path, root).unwrap_or_else(|| normalize_path(path)),
            };
            if !index.insert_if_absent(record) {
                debug!(path = %path.display(), %kind, "directory already has a module");
            }
        }
    }

    if index.is_empty() {
        debug!(root = %root.display(), "no build modules found");
    } else {
        debug!(modules = index.len(), "located modules");
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_no_modules() {
        let temp = tempdir().unwrap();
        write(temp.path(), "src/main.kt");
        let index = locate_modules(temp.path(), &PathFilter::default()).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_each_kind_detected() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write(root, "build.gradle.kts");
        write(root, "shared/build.gradle.kts");
        write(root, "native/video/CMakeLists.txt");
        write(root, "server/web/package.json");

        let index = locate_modules(root, &PathFilter::default()).unwrap();
        assert_eq!(index.len(), 4);

        let top = index.get(".").unwrap();
        assert_eq!(top.kind, ModuleKind::Gradle);
        assert_eq!(top.build_file, "build.gradle.kts");

        let video = index.get("native/video").unwrap();
        assert_eq!(video.kind, ModuleKind::Cmake);
        assert_eq!(video.build_file, "native/video/CMakeLists.txt");

        assert_eq!(index.get("server/web").unwrap().kind, ModuleKind::Nodejs);
    }

    #[test]
    fn test_priority_gradle_over_cmake_over_node() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write(root, "both/build.gradle.kts");
        write(root, "both/package.json");
        write(root, "cpp/CMakeLists.txt");
        write(root, "cpp/package.json");

        let index = locate_modules(root, &PathFilter::default()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("both").unwrap().kind, ModuleKind::Gradle);
        assert_eq!(index.get("cpp").unwrap().kind, ModuleKind::Cmake);
        assert_eq!(index.of_kind(ModuleKind::Nodejs).count(), 0);
    }

    #[test]
    fn test_marker_name_must_match_exactly() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write(root, "a/build.gradle");
        write(root, "b/cmakelists.txt");
        write(root, "c/package.json.bak");

        let index = locate_modules(root, &PathFilter::default()).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_excluded_markers_ignored() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write(root, "web/package.json");
        write(root, "web/node_modules/left-pad/package.json");
        write(root, "gradle/wrapper/build.gradle.kts");
        write(root, ".hidden/CMakeLists.txt");

        let index = locate_modules(root, &PathFilter::default()).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.get("web").is_some());
    }
}
