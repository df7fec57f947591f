//! In-memory capture of one directory tree.
//!
//! A [`Snapshot`] maps each traversal path to its [`EntryMetadata`]. Paths are
//! the walked root joined with the entry's location, so an entry's identity
//! across trees is its path relative to the root.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use fsdiff_types::EntryMetadata;

use crate::error::{ScanError, ScanResult};

/// Metadata for every entry of a tree, including the root itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    root: PathBuf,
    entries: HashMap<PathBuf, EntryMetadata>,
}

impl Snapshot {
    /// Create an empty snapshot for the given root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: HashMap::new(),
        }
    }

    /// Build a snapshot from already-known entries.
    ///
    /// Every entry must live at or below `root`.
    pub fn from_entries(
        root: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = EntryMetadata>,
    ) -> ScanResult<Self> {
        let mut snapshot = Self::new(root);
        for entry in entries {
            snapshot.insert(entry)?;
        }
        Ok(snapshot)
    }

    /// Add an entry, replacing any previous entry at the same path.
    pub(crate) fn insert(&mut self, entry: EntryMetadata) -> ScanResult<()> {
        if !entry.path.starts_with(&self.root) {
            return Err(ScanError::OutsideRoot {
                path: entry.path,
                root: self.root.clone(),
            });
        }
        self.entries.insert(entry.path.clone(), entry);
        Ok(())
    }

    /// The root this snapshot was collected from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of entries, the root included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its traversal path.
    pub fn get(&self, path: &Path) -> Option<&EntryMetadata> {
        self.entries.get(path)
    }

    /// Look up an entry by its path relative to the root.
    ///
    /// `.` and the empty path both name the root.
    pub fn get_relative(&self, relative: &Path) -> Option<&EntryMetadata> {
        if is_root_relative(relative) {
            self.entries.get(&self.root)
        } else {
            self.entries.get(&self.root.join(relative))
        }
    }

    /// Iterate over `(relative path, entry)` pairs in arbitrary order.
    pub fn iter_relative(&self) -> impl Iterator<Item = (PathBuf, &EntryMetadata)> {
        self.entries
            .values()
            .map(move |entry| (self.relative_path(entry), entry))
    }

    /// The entry's path relative to the root; the root itself maps to `.`.
    pub fn relative_path(&self, entry: &EntryMetadata) -> PathBuf {
        // `insert` guarantees the prefix is present.
        let relative = entry.path.strip_prefix(&self.root).unwrap_or(entry.path.as_path());
        if relative.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            relative.to_path_buf()
        }
    }
}

fn is_root_relative(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::CurDir))
}
