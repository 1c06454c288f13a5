//! crates/perdev/src/parallel.rs
//!
//! Parallel merge using rayon.
//!
//! Each criterion's pass only reads the shared inventory, so passes run
//! independently on the rayon pool. Deduplication needs the complete
//! concatenation in criterion order and runs on the calling thread once every
//! pass has finished.

use rayon::prelude::*;

use crate::debug_filter::trace_merge;
use crate::{ConfigScope, DeviceFilter, FilterCriterion, InventoryEntry, deduplicate};

/// Parallel counterpart of [`merge_filter_for_device`](crate::merge_filter_for_device).
///
/// Produces exactly the same list as the sequential merge: pass results are
/// collected in criterion order before they are concatenated and
/// deduplicated.
///
/// # Example
///
/// ```
/// use perdev::{DirEntry, FilterCriterion, parallel};
///
/// let inventory = [
///     DirEntry::dir("configs"),
///     DirEntry::dir("configs/a"),
///     DirEntry::dir("configs/b"),
/// ];
/// let merged = parallel::merge_filter_for_device(
///     &inventory,
///     "configs",
///     &[FilterCriterion::dir("b"), FilterCriterion::dir("a")],
/// );
/// let names: Vec<_> = merged.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, ["configs", "configs/b", "configs/a"]);
/// ```
#[must_use]
pub fn merge_filter_for_device<E>(
    inventory: &[E],
    scope_root: &str,
    criteria: &[FilterCriterion],
) -> Vec<E>
where
    E: InventoryEntry + Clone + Send + Sync,
{
    let scope = ConfigScope::new(scope_root);

    let passes: Vec<Vec<E>> = criteria
        .par_iter()
        .map(|criterion| DeviceFilter::new(&scope, &criterion.device, criterion.mode).apply(inventory))
        .collect();

    let concatenated: Vec<E> = passes.into_iter().flatten().collect();
    let concatenated_len = concatenated.len();
    let merged = deduplicate(concatenated);
    trace_merge(scope.root(), criteria.len(), concatenated_len, merged.len());
    merged
}
