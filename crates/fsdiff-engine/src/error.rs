//! Error types for the diff engine.

use fsdiff_scan::ScanError;

/// Which of the two trees an error came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeSide {
    Source,
    Destination,
}

impl std::fmt::Display for TreeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Errors that can occur during a diff.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// Collecting one of the trees failed. The diff produced no result.
    #[error("failed to collect {side} tree: {source}")]
    Traversal {
        side: TreeSide,
        #[source]
        source: ScanError,
    },
}

impl DiffError {
    /// The tree whose collection failed.
    pub fn side(&self) -> TreeSide {
        match self {
            Self::Traversal { side, .. } => *side,
        }
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
