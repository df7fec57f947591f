//! Diff engine for fsdiff.
//!
//! Compares a source and a destination directory tree using the quick check
//! (size and modification time) and classifies every differing path as
//! added, modified, or deleted. File contents are never read.
//!
//! # Key Types
//!
//! - [`Differ`] -- Collects both trees and produces a [`ChangeSet`]
//! - [`DiffConfig`] -- Parallel collection and directory comparison settings
//! - [`diff_snapshots`] -- Pure comparison of two collected snapshots
//! - [`DiffError`] -- Fatal collection failure, tagged with the failing side
//!
//! ```no_run
//! use fsdiff_engine::Differ;
//!
//! let changes = Differ::new("backup/current", "backup/previous").diff()?;
//! for record in &changes {
//!     println!("{record}");
//! }
//! # Ok::<(), fsdiff_engine::DiffError>(())
//! ```

pub mod compare;
pub mod config;
pub mod differ;
pub mod error;

pub use compare::{diff_snapshots, is_stale};
pub use config::DiffConfig;
pub use differ::Differ;
pub use error::{DiffError, DiffResult, TreeSide};
pub use fsdiff_types::{ChangeKind, ChangeRecord, ChangeSet, ChangeSummary};
