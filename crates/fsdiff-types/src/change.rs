//! Change records produced by comparing two tree snapshots.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};

/// The kind of change detected for a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Present in the destination, absent from the source.
    Added,
    /// Present in both, but the quick check says the destination differs.
    Modified,
    /// Present in the source, absent from the destination.
    Deleted,
}

impl ChangeKind {
    /// Single-letter marker used in compact listings.
    pub fn marker(self) -> char {
        match self {
            Self::Added => 'A',
            Self::Modified => 'M',
            Self::Deleted => 'D',
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Modified => write!(f, "modified"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}

/// A single detected change.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Path relative to the tree root. The root itself is `.`.
    ///
    /// Serialized lossily: bytes that are not valid UTF-8 become U+FFFD.
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// What happened to the path.
    pub kind: ChangeKind,
}

fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl ChangeRecord {
    /// Create a new change record.
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Shorthand for an `Added` record.
    pub fn added(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::Added)
    }

    /// Shorthand for a `Modified` record.
    pub fn modified(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::Modified)
    }

    /// Shorthand for a `Deleted` record.
    pub fn deleted(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::Deleted)
    }
}

impl std::fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind.marker(), self.path.display())
    }
}

/// The result of a diff: every change record from both passes.
///
/// Record order follows snapshot iteration order and is not stable across
/// runs. Call [`ChangeSet::sort`] before presenting it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet {
    records: Vec<ChangeRecord>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: ChangeRecord) {
        self.records.push(record);
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, ChangeRecord> {
        self.records.iter()
    }

    /// The records as a slice.
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Returns `true` if a record with this path and kind is present.
    pub fn contains(&self, path: impl AsRef<Path>, kind: ChangeKind) -> bool {
        let path = path.as_ref();
        self.records.iter().any(|r| r.kind == kind && r.path == path)
    }

    /// Number of records of the given kind.
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Iterate over records of the given kind.
    pub fn of_kind(&self, kind: ChangeKind) -> impl Iterator<Item = &ChangeRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    /// Sort records by path, then by kind.
    pub fn sort(&mut self) {
        self.records
            .sort_by(|a, b| a.path.cmp(&b.path).then(a.kind.cmp(&b.kind)));
    }

    /// Per-kind counts.
    pub fn summary(&self) -> ChangeSummary {
        let mut summary = ChangeSummary::default();
        for record in &self.records {
            match record.kind {
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Modified => summary.modified += 1,
                ChangeKind::Deleted => summary.deleted += 1,
            }
        }
        summary
    }
}

impl From<Vec<ChangeRecord>> for ChangeSet {
    fn from(records: Vec<ChangeRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<ChangeRecord> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = ChangeRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<ChangeRecord> for ChangeSet {
    fn extend<I: IntoIterator<Item = ChangeRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for ChangeSet {
    type Item = ChangeRecord;
    type IntoIter = std::vec::IntoIter<ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a ChangeRecord;
    type IntoIter = std::slice::Iter<'a, ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Counts of each change kind in a [`ChangeSet`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub added: usize,
    pub modified: usize,
    pub deleted: usize,
}

impl ChangeSummary {
    /// Total number of records.
    pub fn total(&self) -> usize {
        self.added + self.modified + self.deleted
    }
}

impl std::fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} added, {} modified, {} deleted",
            self.added, self.modified, self.deleted
        )
    }
}
