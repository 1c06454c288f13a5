//! Shared fixtures for integration tests across the workspace.
//!
//! Integration tests only; unit tests inside `perdev` build their own entries
//! because this crate links a separate copy of the library.

use perdev::{DirEntry, InventoryEntry};

/// Permission bits used by every fixture entry.
pub const FIXTURE_PERMISSION: u32 = 0o644;

/// Scope root of [`reference_inventory`].
pub const REFERENCE_SCOPE: &str = "configs";

/// Builds a file entry carrying the fixture permission bits.
#[must_use]
pub fn file(name: &str) -> DirEntry {
    DirEntry::file(name).with_permission(FIXTURE_PERMISSION)
}

/// Builds a directory entry carrying the fixture permission bits.
#[must_use]
pub fn dir(name: &str) -> DirEntry {
    DirEntry::dir(name).with_permission(FIXTURE_PERMISSION)
}

/// Builds an inventory from `(name, is_file)` pairs, keeping their order.
#[must_use]
pub fn inventory(entries: &[(&str, bool)]) -> Vec<DirEntry> {
    entries
        .iter()
        .map(|&(name, is_file)| if is_file { file(name) } else { dir(name) })
        .collect()
}

/// The project tree used throughout the filter scenarios:
///
/// ```text
/// .env
/// docker-compose.yaml
/// configs/
/// configs/file1.conf
/// configs/file2.conf
/// configs/folder1/
/// configs/folder1/config1
/// configs/folder2/
/// configs/folder2/config2
/// ```
#[must_use]
pub fn reference_inventory() -> Vec<DirEntry> {
    inventory(&[
        (".env", true),
        ("docker-compose.yaml", true),
        ("configs", false),
        ("configs/file1.conf", true),
        ("configs/file2.conf", true),
        ("configs/folder1", false),
        ("configs/folder1/config1", true),
        ("configs/folder2", false),
        ("configs/folder2/config2", true),
    ])
}

/// Picks entries of `inventory` by index, in the order given.
#[must_use]
pub fn pick(inventory: &[DirEntry], indices: &[usize]) -> Vec<DirEntry> {
    indices.iter().map(|&i| inventory[i].clone()).collect()
}

/// Collects entry names, in order.
#[must_use]
pub fn names<E: InventoryEntry>(entries: &[E]) -> Vec<&str> {
    entries.iter().map(InventoryEntry::name).collect()
}
