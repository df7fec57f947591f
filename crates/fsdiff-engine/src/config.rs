//! Settings that tune a diff run.

use serde::{Deserialize, Serialize};

/// Tuning for a diff run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Collect the source and destination trees concurrently.
    ///
    /// The two walks share no state, so this never changes the result.
    pub parallel: bool,
    /// Apply the size/mtime quick check to directories as well as files.
    ///
    /// Off by default: directory sizes are filesystem-defined and a
    /// directory's mtime moves whenever a child is added or removed, which is
    /// already reported through the child's own record. Directories are
    /// always reported when added or deleted.
    pub compare_directories: bool,
}

impl DiffConfig {
    /// Configuration with both trees collected concurrently.
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }
}
