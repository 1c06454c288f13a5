//! crates/perdev/src/entry.rs
//! Inventory entries consumed by the per-device filters.

use crate::path::normalize_separators;

/// Read-only view of one inventory entry.
///
/// The filters only ever look at the entry name and whether it is a regular
/// file. Everything else an implementor carries is opaque and travels through
/// the filters untouched, so callers can filter their own entry types without
/// converting them to [`DirEntry`] first.
pub trait InventoryEntry {
    /// Path of the entry relative to the project root.
    fn name(&self) -> &str;

    /// Returns `true` for regular files and `false` for directories and any
    /// other node kind.
    fn is_file(&self) -> bool;
}

impl<T: InventoryEntry + ?Sized> InventoryEntry for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_file(&self) -> bool {
        (**self).is_file()
    }
}

/// One file or directory discovered in a project tree.
///
/// `content` and `permission` are carried for the downstream sync layer and
/// are never inspected by the filters.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct DirEntry {
    /// Path relative to the project root.
    pub name: String,
    /// Opaque payload, typically the encoded file body.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: String,
    /// Whether the entry is a regular file.
    pub is_file: bool,
    /// Permission bits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub permission: u32,
}

impl DirEntry {
    /// Creates a regular file entry with empty content and no permission bits.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: true,
            ..Self::default()
        }
    }

    /// Creates a directory entry.
    #[must_use]
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: false,
            ..Self::default()
        }
    }

    /// Sets the opaque content payload.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the permission bits.
    #[must_use]
    pub const fn with_permission(mut self, permission: u32) -> Self {
        self.permission = permission;
        self
    }

    /// Rewrites the entry name to use `/` as separator.
    ///
    /// Collaborators that build inventories from native paths call this at
    /// the inventory boundary so the filters can compare names byte-wise.
    #[must_use]
    pub fn with_normalized_separators(mut self) -> Self {
        let name = normalize_separators(&self.name).into_owned();
        self.name = name;
        self
    }
}

impl InventoryEntry for DirEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_file(&self) -> bool {
        self.is_file
    }
}
