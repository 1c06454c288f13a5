//! crates/perdev/src/scope.rs
//! Configuration scope roots and the membership test.

use std::fmt;

use crate::InventoryEntry;
use crate::path::{SEPARATOR, has_dir_prefix, join};

/// Root of a configuration sub-tree that is partitioned per device.
///
/// Entries beneath the root belong to individual devices; everything else in
/// the inventory is shared. Trailing separators are trimmed on construction,
/// so a root written as `"configs/"` partitions the `configs` directory
/// instead of matching nothing.
///
/// # Examples
///
/// ```
/// use perdev::ConfigScope;
///
/// let scope = ConfigScope::new("edge-configs");
/// assert!(scope.contains("edge-configs/device-a.yaml"));
/// assert!(!scope.contains("edge-configs"));
/// assert!(!scope.contains("edge-configs_backup"));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ConfigScope {
    root: String,
}

impl ConfigScope {
    /// Creates a scope rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        let mut root = root.into();
        let trimmed = root.trim_end_matches(SEPARATOR).len();
        root.truncate(trimmed);
        Self { root }
    }

    /// Returns the root path without trailing separators.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns `true` when the root is empty, which leaves nothing in scope.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns `true` when `path` lies strictly inside the scope root.
    ///
    /// The root itself is outside, as is any sibling whose name only starts
    /// with the same characters.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        !self.root.is_empty() && has_dir_prefix(path, &self.root)
    }

    /// Path of the slot reserved for `device` directly inside the root.
    ///
    /// Leading and trailing separators of `device` are ignored, so
    /// `"folder1/"` names the same slot as `"folder1"`. Returns `None` when
    /// nothing is left of the identifier; such a device owns no slot.
    #[must_use]
    pub fn device_path(&self, device: &str) -> Option<String> {
        let device = device.trim_matches(SEPARATOR);
        (!device.is_empty()).then(|| join(&self.root, device))
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)
    }
}

impl From<&str> for ConfigScope {
    fn from(root: &str) -> Self {
        Self::new(root)
    }
}

impl From<String> for ConfigScope {
    fn from(root: String) -> Self {
        Self::new(root)
    }
}

/// Returns `true` when `entry` lies inside the scope rooted at `config_path`.
///
/// Convenience form of [`ConfigScope::contains`] for callers holding a bare
/// root string.
#[must_use]
pub fn is_in_config_dir<E: InventoryEntry + ?Sized>(entry: &E, config_path: &str) -> bool {
    ConfigScope::new(config_path).contains(entry.name())
}
