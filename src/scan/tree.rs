//! Tree pass - Render the project layout as indented lines
//!
//! Output mirrors the classic `tree` look:
//!
//! ```text
//! ├── README.md
//! └── app/
//!     └── src/
//! ```

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::ScanError;
use crate::core::paths::file_name;
use crate::core::policy::ScanPolicy;
use crate::core::util::{is_real_dir, list_dir};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Render the visible tree under `root`, at most `policy.max_depth` levels deep
pub fn render_tree(root: &Path, policy: &ScanPolicy) -> Result<Vec<String>, ScanError> {
    let mut lines = Vec::new();
    render_level(root, root, policy, "", 0, &mut lines)?;
    debug!(lines = lines.len(), max_depth = policy.max_depth, "rendered tree");
    Ok(lines)
}

fn render_level(
    root: &Path,
    dir: &Path,
    policy: &ScanPolicy,
    prefix: &str,
    depth: usize,
    lines: &mut Vec<String>,
) -> Result<(), ScanError> {
    if depth >= policy.max_depth {
        return Ok(());
    }

    let mut children: Vec<PathBuf> = list_dir(dir)?
        .into_iter()
        .filter(|p| !policy.filter.excludes_under(root, p))
        .collect();
    children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    // Omitted files still take part in last-sibling detection.
    let count = children.len();
    for (idx, child) in children.iter().enumerate() {
        let is_last = idx + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        let name = file_name(child);

        if child.is_dir() {
            lines.push(format!("{}{}{}/", prefix, connector, name));
            if is_real_dir(child) {
                let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
                render_level(root, child, policy, &child_prefix, depth + 1, lines)?;
            }
        } else if policy.shows_file(&name, depth) {
            lines.push(format!("{}{}{}", prefix, connector, name));
        }
    }

    Ok(())
}
