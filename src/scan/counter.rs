//! Counter pass - Totals and per-extension statistics

use std::path::Path;
use tracing::debug;

use crate::core::error::ScanError;
use crate::core::model::{ExtensionCounts, Totals};
use crate::core::paths::file_name;
use crate::core::policy::{PathFilter, ScanPolicy};
use crate::core::util::{is_real_dir, list_dir};
use crate::scan::visible_files;

/// Count visible files and directories below `root` at any depth
pub fn count_entries(root: &Path, filter: &PathFilter) -> Result<Totals, ScanError> {
    let mut totals = Totals::default();
    count_dir(root, root, filter, &mut totals)?;
    debug!(files = totals.files, dirs = totals.dirs, "counted entries");
    Ok(totals)
}

fn count_dir(
    root: &Path,
    dir: &Path,
    filter: &PathFilter,
    totals: &mut Totals,
) -> Result<(), ScanError> {
    for path in list_dir(dir)? {
        if filter.excludes_under(root, &path) {
            continue;
        }
        if path.is_file() {
            totals.files += 1;
        } else if path.is_dir() {
            totals.dirs += 1;
            if is_real_dir(&path) {
                count_dir(root, &path, filter, totals)?;
            }
        }
    }
    Ok(())
}

/// Count visible files per recognized extension, at any depth
pub fn count_extensions(root: &Path, policy: &ScanPolicy) -> Result<ExtensionCounts, ScanError> {
    let mut counts = ExtensionCounts::seeded(&policy.counted_extensions);
    for path in visible_files(root, &policy.filter)? {
        if let Some(ext) = policy.counted_extension(&file_name(&path)) {
            counts.record(&ext);
        }
    }
    debug!(counted = counts.total(), "counted extensions");
    Ok(counts)
}
