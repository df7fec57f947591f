//! Recursive metadata collection.
//!
//! The [`MetadataCollector`] walks a directory tree depth-first and records
//! size, modification time, and kind for the root and every descendant.
//! Symlinks are recorded as themselves and never followed.
//!
//! Collection is fail-fast: the first directory that cannot be listed or entry
//! that cannot be statted aborts the walk. A truncated snapshot would make the
//! diff engine misreport entries as added or deleted.

use std::path::Path;

use fsdiff_types::EntryMetadata;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{ScanError, ScanResult};
use crate::snapshot::Snapshot;

/// Something that can capture a directory tree into a [`Snapshot`].
///
/// Implementations must either return a snapshot covering the whole tree or
/// an error; partial results are never returned.
pub trait Collector: Send + Sync {
    /// Capture the tree rooted at `root`.
    fn collect(&self, root: &Path) -> ScanResult<Snapshot>;
}

/// Filesystem collector backed by `walkdir`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetadataCollector;

impl MetadataCollector {
    /// Create a new collector.
    pub fn new() -> Self {
        Self
    }

    fn walk(&self, root: &Path) -> ScanResult<Snapshot> {
        let mut snapshot = Snapshot::new(root);

        let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|e| ScanError::from_walk(root, e))?;
            let metadata = entry.metadata().map_err(|e| ScanError::from_walk(root, e))?;
            let meta = EntryMetadata::from_metadata(entry.path(), &metadata).map_err(|source| {
                ScanError::Traversal {
                    path: entry.path().to_path_buf(),
                    source,
                }
            })?;
            snapshot.insert(meta)?;
        }

        Ok(snapshot)
    }
}

impl Collector for MetadataCollector {
    fn collect(&self, root: &Path) -> ScanResult<Snapshot> {
        debug!(root = %root.display(), "collecting tree metadata");
        match self.walk(root) {
            Ok(snapshot) => {
                debug!(root = %root.display(), entries = snapshot.len(), "tree metadata collected");
                Ok(snapshot)
            }
            Err(e) => {
                warn!(root = %root.display(), path = %e.path().display(), "tree walk aborted: {e}");
                Err(e)
            }
        }
    }
}
