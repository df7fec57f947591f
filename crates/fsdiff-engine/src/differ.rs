//! The [`Differ`]: collect two trees and compare them.

use std::path::{Path, PathBuf};

use fsdiff_scan::{Collector, MetadataCollector, Snapshot};
use fsdiff_types::ChangeSet;
use tracing::{debug, info};

use crate::compare::diff_snapshots;
use crate::config::DiffConfig;
use crate::error::{DiffError, DiffResult, TreeSide};

/// Computes the change set between a source and a destination tree.
///
/// Constructing a `Differ` performs no I/O. Each call to [`Differ::diff`]
/// walks both trees afresh, so calls are independent of each other. The two
/// walks are not atomic; a tree modified while it is being walked yields a
/// torn read.
#[derive(Clone, Debug)]
pub struct Differ<C = MetadataCollector> {
    source_root: PathBuf,
    dest_root: PathBuf,
    config: DiffConfig,
    collector: C,
}

impl Differ {
    /// Create a differ with the default configuration.
    pub fn new(source_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self::with_config(source_root, dest_root, DiffConfig::default())
    }

    /// Create a differ with an explicit configuration.
    pub fn with_config(
        source_root: impl Into<PathBuf>,
        dest_root: impl Into<PathBuf>,
        config: DiffConfig,
    ) -> Self {
        Self::with_collector(source_root, dest_root, config, MetadataCollector::new())
    }
}

impl<C: Collector> Differ<C> {
    /// Create a differ that captures trees through `collector`.
    pub fn with_collector(
        source_root: impl Into<PathBuf>,
        dest_root: impl Into<PathBuf>,
        config: DiffConfig,
        collector: C,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            config,
            collector,
        }
    }

    /// Root of the source tree.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Root of the destination tree.
    pub fn dest_root(&self) -> &Path {
        &self.dest_root
    }

    /// The active configuration.
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Walk both trees and classify every differing path.
    ///
    /// Returns an error if either walk fails. No partial change set is ever
    /// produced.
    pub fn diff(&self) -> DiffResult<ChangeSet> {
        let (source, dest) = self.collect_both()?;
        let changes = diff_snapshots(&source, &dest, &self.config);

        let summary = changes.summary();
        info!(
            source = %self.source_root.display(),
            dest = %self.dest_root.display(),
            added = summary.added,
            modified = summary.modified,
            deleted = summary.deleted,
            "diff complete"
        );
        Ok(changes)
    }

    fn collect_both(&self) -> DiffResult<(Snapshot, Snapshot)> {
        if self.config.parallel {
            debug!("collecting source and destination in parallel");
            let (source, dest) = rayon::join(
                || self.collect(TreeSide::Source),
                || self.collect(TreeSide::Destination),
            );
            Ok((source?, dest?))
        } else {
            let source = self.collect(TreeSide::Source)?;
            let dest = self.collect(TreeSide::Destination)?;
            Ok((source, dest))
        }
    }

    fn collect(&self, side: TreeSide) -> DiffResult<Snapshot> {
        let root = match side {
            TreeSide::Source => &self.source_root,
            TreeSide::Destination => &self.dest_root,
        };
        self.collector
            .collect(root)
            .map_err(|source| DiffError::Traversal { side, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsdiff_scan::{ScanError, ScanResult};
    use fsdiff_types::{ChangeKind, ChangeRecord};
    use std::fs;
    use std::io;
    use std::time::{Duration, UNIX_EPOCH};

    fn write(path: &Path, content: &[u8], secs: u64) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_modified(UNIX_EPOCH + Duration::from_secs(secs)).unwrap();
    }

    fn trees() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let dest = dir.path().join("dest");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&dest).unwrap();
        (dir, source, dest)
    }

    #[test]
    fn new_performs_no_io() {
        let differ = Differ::new("/no/such/source", "/no/such/dest");
        assert_eq!(differ.source_root(), Path::new("/no/such/source"));
        assert_eq!(differ.dest_root(), Path::new("/no/such/dest"));
        assert_eq!(differ.config(), &DiffConfig::default());
    }

    #[test]
    fn same_root_is_identity() {
        let (_dir, source, _dest) = trees();
        write(&source.join("a.txt"), b"aaaa", 100);
        write(&source.join("sub/b.txt"), b"bb", 200);

        let changes = Differ::new(&source, &source).diff().unwrap();
        assert!(changes.is_empty(), "unexpected changes: {changes:?}");
    }

    #[test]
    fn copies_with_preserved_times_are_identical() {
        let (_dir, source, dest) = trees();
        for root in [&source, &dest] {
            write(&root.join("a.txt"), b"aaaa", 100);
            write(&root.join("nested/deep/c.txt"), b"c", 300);
        }

        assert!(Differ::new(&source, &dest).diff().unwrap().is_empty());
    }

    #[test]
    fn staleness_scenario_on_disk() {
        let (_dir, source, dest) = trees();
        write(&source.join("a.txt"), b"0123456789", 100);
        write(&dest.join("a.txt"), b"0123456789", 200);
        write(&dest.join("b.txt"), b"01234", 50);

        let mut changes = Differ::new(&source, &dest).diff().unwrap();
        changes.sort();
        assert_eq!(
            changes.records(),
            &[ChangeRecord::modified("a.txt"), ChangeRecord::added("b.txt")]
        );
    }

    #[test]
    fn reverse_staleness_not_reported() {
        let (_dir, source, dest) = trees();
        write(&source.join("f"), b"same", 200);
        write(&dest.join("f"), b"same", 100);

        assert!(Differ::new(&source, &dest).diff().unwrap().is_empty());
    }

    #[test]
    fn size_difference_detected() {
        let (_dir, source, dest) = trees();
        write(&source.join("f"), b"short", 500);
        write(&dest.join("f"), b"much longer", 100);

        let changes = Differ::new(&source, &dest).diff().unwrap();
        assert_eq!(changes.records(), &[ChangeRecord::modified("f")]);
    }

    #[test]
    fn deleted_file_and_empty_directory() {
        let (_dir, source, dest) = trees();
        write(&source.join("gone.txt"), b"x", 10);
        fs::create_dir(source.join("empty")).unwrap();

        let changes = Differ::new(&source, &dest).diff().unwrap();
        assert_eq!(changes.len(), 2);
        assert!(changes.contains("gone.txt", ChangeKind::Deleted));
        assert!(changes.contains("empty", ChangeKind::Deleted));
    }

    #[test]
    fn added_empty_directory() {
        let (_dir, source, dest) = trees();
        fs::create_dir(dest.join("fresh")).unwrap();

        let changes = Differ::new(&source, &dest).diff().unwrap();
        assert_eq!(changes.records(), &[ChangeRecord::added("fresh")]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let (_dir, source, dest) = trees();
        write(&source.join("keep"), b"k", 10);
        write(&dest.join("keep"), b"k", 10);
        write(&source.join("old"), b"o", 10);
        write(&dest.join("new"), b"n", 10);
        write(&source.join("mod"), b"m", 10);
        write(&dest.join("mod"), b"mm", 10);

        let mut sequential = Differ::new(&source, &dest).diff().unwrap();
        let mut parallel = Differ::with_config(&source, &dest, DiffConfig::parallel())
            .diff()
            .unwrap();
        sequential.sort();
        parallel.sort();
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.len(), 3);
    }

    #[test]
    fn missing_source_is_fatal() {
        let (_dir, source, dest) = trees();
        write(&dest.join("a"), b"a", 1);
        let missing = source.join("nope");

        let err = Differ::new(&missing, &dest).diff().unwrap_err();
        assert_eq!(err.side(), TreeSide::Source);
        assert!(matches!(
            err,
            DiffError::Traversal { source: ScanError::Traversal { .. }, .. }
        ));
    }

    #[test]
    fn missing_destination_is_fatal_in_parallel_mode() {
        let (_dir, source, dest) = trees();
        let missing = dest.join("nope");

        let err = Differ::with_config(&source, &missing, DiffConfig::parallel())
            .diff()
            .unwrap_err();
        assert_eq!(err.side(), TreeSide::Destination);
        assert!(err.to_string().contains("destination"));
    }

    struct FailingDestination;

    impl Collector for FailingDestination {
        fn collect(&self, root: &Path) -> ScanResult<Snapshot> {
            if root.ends_with("dest") {
                return Err(ScanError::Traversal {
                    path: root.join("locked"),
                    source: io::Error::from(io::ErrorKind::PermissionDenied),
                });
            }
            MetadataCollector::new().collect(root)
        }
    }

    #[test]
    fn failure_mid_walk_yields_no_changes() {
        let (_dir, source, dest) = trees();
        write(&source.join("a"), b"a", 1);

        let differ =
            Differ::with_collector(&source, &dest, DiffConfig::default(), FailingDestination);
        let err = differ.diff().unwrap_err();
        assert_eq!(err.side(), TreeSide::Destination);
        match err {
            DiffError::Traversal { source: ScanError::Traversal { source, .. }, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected traversal error, got {other:?}"),
        }
    }
}
