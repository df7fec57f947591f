//! Foundation types for fsdiff.
//!
//! This crate holds the data model shared by the collector and the diff
//! engine. It performs no I/O.
//!
//! # Key Types
//!
//! - [`EntryMetadata`] — Size, modification time, and kind of one tree entry
//! - [`EntryKind`] — File, directory, symlink, or other special file
//! - [`ChangeKind`] — Added, Modified, or Deleted
//! - [`ChangeRecord`] — A relative path paired with its change kind
//! - [`ChangeSet`] — The records produced by a single diff

pub mod change;
pub mod entry;

pub use change::{ChangeKind, ChangeRecord, ChangeSet, ChangeSummary};
pub use entry::{EntryKind, EntryMetadata};
