//! Integration tests for merge ordering and deduplication.
//!
//! A merge concatenates passes in criterion order and keeps the first
//! occurrence of every name. These tests cover repeated criteria, shared
//! entries interleaved with device slices, and custom entry types.

use perdev::{
    DirEntry, FilterCriterion, FilterMode, InventoryEntry, deduplicate, merge_filter_for_device,
};
use test_support::{inventory, names};

// ============================================================================
// Idempotence
// ============================================================================

/// Repeating a criterion does not change the merge.
#[test]
fn repeated_criterion_is_idempotent() {
    let base = test_support::reference_inventory();
    let once = merge_filter_for_device(&base, "configs", &[FilterCriterion::dir("folder1")]);
    let twice = merge_filter_for_device(
        &base,
        "configs",
        &[FilterCriterion::dir("folder1"), FilterCriterion::dir("folder1")],
    );

    assert_eq!(once, twice);
}

/// Deduplicating an already unique list is the identity.
#[test]
fn deduplicate_unique_list_is_identity() {
    let base = test_support::reference_inventory();
    assert_eq!(deduplicate(base.clone()), base);
}

// ============================================================================
// Ordering
// ============================================================================

/// Shared entries after the scope are placed after the first pass's slice.
#[test]
fn shared_entries_keep_inventory_position_of_first_pass() {
    let base = inventory(&[
        ("configs", false),
        ("configs/a.env", true),
        ("configs/b.env", true),
        ("zz-shared.env", true),
    ]);

    let merged = merge_filter_for_device(
        &base,
        "configs",
        &[FilterCriterion::file("a"), FilterCriterion::file("b")],
    );

    assert_eq!(
        names(&merged),
        ["configs", "configs/a.env", "zz-shared.env", "configs/b.env"]
    );
}

/// Every criterion with an unsupported mode contributes shared entries only.
#[test]
fn unsupported_criteria_contribute_shared_entries() {
    let base = test_support::reference_inventory();
    let merged = merge_filter_for_device(
        &base,
        "configs",
        &[
            FilterCriterion::new("folder1", FilterMode::Unsupported),
            FilterCriterion::new("file1", FilterMode::Unsupported),
        ],
    );

    assert_eq!(names(&merged), [".env", "docker-compose.yaml", "configs"]);
}

/// An empty criterion list yields nothing, shared entries included.
#[test]
fn empty_criteria_yield_empty_merge() {
    let base = test_support::reference_inventory();
    assert!(merge_filter_for_device(&base, "configs", &[]).is_empty());
}

// ============================================================================
// Custom Entry Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Staged {
    path: String,
    regular: bool,
    checksum: u64,
}

impl InventoryEntry for Staged {
    fn name(&self) -> &str {
        &self.path
    }

    fn is_file(&self) -> bool {
        self.regular
    }
}

/// Any `InventoryEntry` implementor can be merged and keeps its fields.
#[test]
fn custom_entries_merge_with_metadata() {
    let staged = vec![
        Staged { path: "stack.yaml".into(), regular: true, checksum: 1 },
        Staged { path: "configs/dev-1".into(), regular: false, checksum: 2 },
        Staged { path: "configs/dev-1/app.env".into(), regular: true, checksum: 3 },
        Staged { path: "configs/dev-2.env".into(), regular: true, checksum: 4 },
    ];

    let merged = merge_filter_for_device(
        &staged,
        "configs",
        &[FilterCriterion::dir("dev-1"), FilterCriterion::file("dev-2")],
    );

    let checksums: Vec<_> = merged.iter().map(|s| s.checksum).collect();
    assert_eq!(checksums, [1, 2, 3, 4]);
}

/// Names are compared exactly; entries differing only in metadata collapse.
#[test]
fn deduplicate_compares_names_only() {
    let entries = vec![
        DirEntry::file("a").with_content("first"),
        DirEntry::dir("a"),
        DirEntry::file("a").with_content("third"),
    ];

    let deduplicated = deduplicate(entries);
    assert_eq!(deduplicated, [DirEntry::file("a").with_content("first")]);
}
