//! crates/perdev/src/merge.rs
//! Merging several device passes over one scope.

use rustc_hash::FxHashSet;

use crate::debug_filter::trace_merge;
use crate::{ConfigScope, DeviceFilter, FilterCriterion, InventoryEntry};

/// Runs one pass per criterion over the scope rooted at `scope_root` and
/// merges the results.
///
/// Passes run in criterion order and their outputs are concatenated. The
/// concatenation is then reduced with [`deduplicate`], so an entry appears
/// once, at the position of its first occurrence. Entries outside the scope
/// are therefore listed once even though every pass keeps them.
///
/// An empty criterion list runs nothing and yields an empty list, including
/// no shared entries.
///
/// # Examples
///
/// ```
/// use perdev::{DirEntry, FilterCriterion, merge_filter_for_device};
///
/// let inventory = [
///     DirEntry::file("docker-compose.yaml"),
///     DirEntry::dir("configs"),
///     DirEntry::file("configs/file1.conf"),
///     DirEntry::file("configs/file2.conf"),
///     DirEntry::file("configs/file3.conf"),
/// ];
///
/// let merged = merge_filter_for_device(
///     &inventory,
///     "configs",
///     &[FilterCriterion::file("file2"), FilterCriterion::file("file1")],
/// );
/// let names: Vec<_> = merged.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(
///     names,
///     ["docker-compose.yaml", "configs", "configs/file2.conf", "configs/file1.conf"]
/// );
/// ```
#[must_use]
pub fn merge_filter_for_device<E>(
    inventory: &[E],
    scope_root: &str,
    criteria: &[FilterCriterion],
) -> Vec<E>
where
    E: InventoryEntry + Clone,
{
    let scope = ConfigScope::new(scope_root);
    let mut concatenated = Vec::new();

    for criterion in criteria {
        let pass = DeviceFilter::new(&scope, &criterion.device, criterion.mode).apply(inventory);
        concatenated.extend(pass);
    }

    let concatenated_len = concatenated.len();
    let merged = deduplicate(concatenated);
    trace_merge(scope.root(), criteria.len(), concatenated_len, merged.len());
    merged
}

/// Removes entries whose name already appeared earlier in `entries`.
///
/// The first occurrence of each name is kept and relative order is
/// preserved.
#[must_use]
pub fn deduplicate<E: InventoryEntry>(entries: Vec<E>) -> Vec<E> {
    let first_seen: Vec<bool> = {
        let mut seen: FxHashSet<&str> =
            FxHashSet::with_capacity_and_hasher(entries.len(), Default::default());
        entries.iter().map(|entry| seen.insert(entry.name())).collect()
    };

    entries
        .into_iter()
        .zip(first_seen)
        .filter_map(|(entry, first)| first.then_some(entry))
        .collect()
}
