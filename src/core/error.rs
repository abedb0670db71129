//! Errors raised by the scanning passes

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to list directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk {root}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Whether an I/O error is the one recoverable condition: listing was denied
pub fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

/// Same check for errors surfaced by a directory walk
pub fn is_walk_permission_denied(err: &walkdir::Error) -> bool {
    err.io_error().is_some_and(is_permission_denied)
}
