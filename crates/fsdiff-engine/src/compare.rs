//! Snapshot comparison: turn two tree snapshots into a change set.
//!
//! Entries are matched by their path relative to each tree's root. The
//! destination is treated as possibly stale relative to the source:
//!
//! - in destination only: `Added`
//! - in source only: `Deleted`
//! - in both: `Modified` when the kinds differ, the sizes differ, or the
//!   source was modified strictly before the destination.
//!
//! The timestamp rule is one-sided. Same size with a *newer* source is not
//! reported; making it symmetric would change which entries are classified.

use fsdiff_scan::Snapshot;
use fsdiff_types::{ChangeRecord, ChangeSet, EntryMetadata};
use tracing::debug;

use crate::config::DiffConfig;

/// The quick check: does `dest` look stale next to `source`?
///
/// True when the sizes differ, or when `source` was modified strictly
/// earlier than `dest`. Entry kinds are not consulted here: this is the plain
/// size/mtime check. [`diff_snapshots`] goes beyond it and also reports an
/// entry whose kind changed (file to directory, say) as modified, even when
/// size and mtime match.
pub fn is_stale(source: &EntryMetadata, dest: &EntryMetadata) -> bool {
    source.size != dest.size || source.modified_at < dest.modified_at
}

// Kind change first, then the directory policy, then the quick check.
fn is_modified(source: &EntryMetadata, dest: &EntryMetadata, config: &DiffConfig) -> bool {
    if source.kind != dest.kind {
        return true;
    }
    if source.is_dir() && !config.compare_directories {
        return false;
    }
    is_stale(source, dest)
}

/// Compare two collected snapshots.
///
/// Runs the destination pass (added and modified) followed by the source
/// pass (deleted). Each pass visits a relative path at most once, so the
/// result needs no deduplication.
pub fn diff_snapshots(source: &Snapshot, dest: &Snapshot, config: &DiffConfig) -> ChangeSet {
    let mut changes = ChangeSet::new();

    for (relative, dest_entry) in dest.iter_relative() {
        match source.get_relative(&relative) {
            None => {
                debug!(path = %relative.display(), "added");
                changes.push(ChangeRecord::added(relative));
            }
            Some(source_entry) if is_modified(source_entry, dest_entry, config) => {
                debug!(
                    path = %relative.display(),
                    source_size = source_entry.size,
                    dest_size = dest_entry.size,
                    "modified"
                );
                changes.push(ChangeRecord::modified(relative));
            }
            Some(_) => {}
        }
    }

    for (relative, _) in source.iter_relative() {
        if dest.get_relative(&relative).is_none() {
            debug!(path = %relative.display(), "deleted");
            changes.push(ChangeRecord::deleted(relative));
        }
    }

    changes
}
