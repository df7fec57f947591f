//! Error types for the scan crate.

use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while collecting a tree snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Listing a directory or reading an entry's metadata failed.
    ///
    /// Always fatal: the walk stops and no snapshot is returned.
    #[error("traversal failed at {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry handed to a snapshot does not live under the snapshot root.
    #[error("entry {} is outside snapshot root {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

impl ScanError {
    /// Wrap a walk failure, keeping the failing path when the walker knows it.
    pub(crate) fn from_walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        Self::Traversal {
            path,
            source: io::Error::from(err),
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Traversal { path, .. } | Self::OutsideRoot { path, .. } => path,
        }
    }
}

/// Convenience alias for scan results.
pub type ScanResult<T> = Result<T, ScanError>;
