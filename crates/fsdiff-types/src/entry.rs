//! Per-entry metadata captured during a tree walk.

use std::fs::{FileType, Metadata};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// The kind of filesystem entry, taken from the entry itself (links are not followed).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// A symbolic link.
    Symlink,
    /// Anything else: sockets, FIFOs, device nodes.
    Other,
}

impl EntryKind {
    /// Classify a file type as returned by `lstat`.
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }

    /// Returns `true` for directories.
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
            Self::Symlink => write!(f, "symlink"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Metadata for a single entry of a directory tree.
///
/// `path` is the path as produced by the traversal, i.e. the walked root
/// joined with the entry's location below it. Entries are immutable once
/// collected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMetadata {
    /// Path of the entry, rooted at the walked directory.
    pub path: PathBuf,
    /// Size in bytes as reported by the filesystem.
    pub size: u64,
    /// Last modification time.
    pub modified_at: SystemTime,
    /// What kind of entry this is.
    pub kind: EntryKind,
}

impl EntryMetadata {
    /// Create a new entry.
    pub fn new(path: impl Into<PathBuf>, size: u64, modified_at: SystemTime, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            size,
            modified_at,
            kind,
        }
    }

    /// Build an entry from filesystem metadata.
    ///
    /// Fails only if the platform cannot report a modification time.
    pub fn from_metadata(path: impl Into<PathBuf>, metadata: &Metadata) -> std::io::Result<Self> {
        Ok(Self {
            path: path.into(),
            size: metadata.len(),
            modified_at: metadata.modified()?,
            kind: EntryKind::from_file_type(metadata.file_type()),
        })
    }

    /// The entry's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}
