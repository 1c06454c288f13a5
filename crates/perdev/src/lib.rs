#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `perdev` selects, from a flat inventory of a project's files and
//! directories, the entries a single device should receive. A project may
//! hold a configuration sub-tree (the *scope*) whose children are partitioned
//! per device; every entry outside that scope is shared and always selected.
//! Several device selections over the same scope can be merged into one list
//! without duplicates, which is how a device receives its own slice together
//! with the slices of the groups it belongs to.
//!
//! # Design
//!
//! - [`ConfigScope`] owns the scope root and implements the boundary-aware
//!   membership test.
//! - [`DeviceFilter`] is the per-entry predicate for one device under one
//!   [`FilterMode`]; [`filter_for_device`] applies it to an inventory.
//! - [`merge_filter_for_device`] runs one pass per [`FilterCriterion`],
//!   concatenates the passes and keeps the first occurrence of each name via
//!   [`deduplicate`].
//! - [`PerDeviceConfigs`] models the stored settings of a deployment and
//!   derives the criteria for a device and its groups.
//! - The filters are generic over [`InventoryEntry`], so any entry type that
//!   exposes a name and a file flag can be filtered. [`DirEntry`] is the
//!   provided implementation and carries opaque content and permission bits.
//!
//! # Invariants
//!
//! - Names use `/` as the only separator ([`path::SEPARATOR`]). Collaborators
//!   building inventories from native paths normalise them first with
//!   [`path::normalize_separators`].
//! - An entry is inside a scope only when its name starts with the root
//!   followed by a separator. The root itself and siblings sharing its
//!   leading characters are outside.
//! - Entries outside the scope are never filtered out.
//! - Filter output is an order-preserving subsequence of the inventory. Merge
//!   output holds unique names in order of first appearance.
//! - The inventory is never modified and no state survives a call.
//!
//! # Errors
//!
//! Filtering is total and returns no errors. An unsupported mode hides every
//! in-scope entry instead of failing. Callers that want unknown modes
//! rejected parse tokens with `str::parse::<FilterMode>()`, which reports
//! [`ParseFilterModeError`], or call [`PerDeviceConfigs::validate`].
//!
//! # Examples
//!
//! ```
//! use perdev::{DirEntry, FilterCriterion, FilterMode, filter_for_device, merge_filter_for_device};
//!
//! let inventory = [
//!     DirEntry::file(".env"),
//!     DirEntry::file("docker-compose.yaml"),
//!     DirEntry::dir("configs"),
//!     DirEntry::file("configs/file1.conf"),
//!     DirEntry::file("configs/file2.conf"),
//!     DirEntry::dir("configs/folder1"),
//!     DirEntry::file("configs/folder1/config1"),
//! ];
//!
//! let view = filter_for_device(&inventory, "configs", "file1", FilterMode::File);
//! let names: Vec<_> = view.iter().map(|e| e.name.as_str()).collect();
//! assert_eq!(names, [".env", "docker-compose.yaml", "configs", "configs/file1.conf"]);
//!
//! let merged = merge_filter_for_device(
//!     &inventory,
//!     "configs",
//!     &[FilterCriterion::file("file2"), FilterCriterion::dir("folder1")],
//! );
//! assert_eq!(merged.len(), 6);
//! ```
//!
//! # Features
//!
//! - `parallel`: `parallel::merge_filter_for_device` runs merge passes on the
//!   rayon pool.
//! - `serde`: serialization for [`DirEntry`], [`FilterMode`],
//!   [`FilterCriterion`] and [`PerDeviceConfigs`].
//! - `tracing`: structured events for passes, merges and unsupported modes
//!   under the `perdev::filter` target.

mod config;
mod criterion;
pub mod debug_filter;
mod entry;
mod filter;
mod merge;
mod mode;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod path;
mod scope;

pub use config::{PerDeviceConfigs, PerDeviceConfigsError};
pub use criterion::FilterCriterion;
pub use entry::{DirEntry, InventoryEntry};
pub use filter::{DeviceFilter, filter_for_device};
pub use merge::{deduplicate, merge_filter_for_device};
pub use mode::{FilterMode, ParseFilterModeError};
pub use scope::{ConfigScope, is_in_config_dir};
