//! Metadata collection for fsdiff.
//!
//! Walks a directory tree once, depth-first, and captures the metadata the
//! quick check needs (size, modification time, entry kind) into an in-memory
//! [`Snapshot`]. File contents are never read.
//!
//! # Key Types
//!
//! - [`MetadataCollector`] -- Filesystem walker (walkdir-backed)
//! - [`Collector`] -- Trait seam for anything that produces snapshots
//! - [`Snapshot`] -- Path-keyed map of entry metadata for one tree
//! - [`ScanError`] -- Fatal traversal failure

pub mod collector;
pub mod error;
pub mod snapshot;

pub use collector::{Collector, MetadataCollector};
pub use error::{ScanError, ScanResult};
pub use snapshot::Snapshot;
