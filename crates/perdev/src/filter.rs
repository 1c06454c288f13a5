//! crates/perdev/src/filter.rs
//! Single-scope filtering of an inventory for one device.

use crate::debug_filter::{trace_device_pass, trace_entry_decision, trace_unsupported_mode};
use crate::path::{has_dir_prefix, has_extension_prefix};
use crate::{ConfigScope, FilterMode, InventoryEntry};

/// Per-entry predicate for one device under one scope.
///
/// The device slot path (`<root>/<device>`) is computed once so evaluating a
/// large inventory does not allocate per entry.
///
/// # Examples
///
/// ```
/// use perdev::{ConfigScope, DeviceFilter, DirEntry, FilterMode};
///
/// let scope = ConfigScope::new("configs");
/// let filter = DeviceFilter::new(&scope, "dev", FilterMode::File);
///
/// assert!(filter.includes(&DirEntry::file("docker-compose.yaml")));
/// assert!(filter.includes(&DirEntry::file("configs/dev.yaml")));
/// assert!(!filter.includes(&DirEntry::file("configs/devicex")));
/// ```
#[derive(Clone, Debug)]
pub struct DeviceFilter<'a> {
    scope: &'a ConfigScope,
    device: &'a str,
    // None when the device identifier is empty; nothing in scope matches
    device_path: Option<String>,
    mode: FilterMode,
}

impl<'a> DeviceFilter<'a> {
    /// Builds the predicate for `device` under `scope` using `mode`.
    #[must_use]
    pub fn new(scope: &'a ConfigScope, device: &'a str, mode: FilterMode) -> Self {
        Self {
            scope,
            device,
            device_path: scope.device_path(device),
            mode,
        }
    }

    /// Returns the scope this predicate partitions.
    #[must_use]
    pub const fn scope(&self) -> &ConfigScope {
        self.scope
    }

    /// Returns the device identifier.
    #[must_use]
    pub const fn device(&self) -> &str {
        self.device
    }

    /// Returns the active mode.
    #[must_use]
    pub const fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Returns `true` when `entry` belongs to this device's view.
    ///
    /// Entries outside the scope are always included.
    #[must_use]
    pub fn includes<E: InventoryEntry + ?Sized>(&self, entry: &E) -> bool {
        let name = entry.name();
        if !self.scope.contains(name) {
            return true;
        }

        let included = match self.mode {
            FilterMode::File => self.includes_file(name, entry.is_file()),
            FilterMode::Dir => self.includes_dir(name, entry.is_file()),
            FilterMode::Unsupported => false,
        };
        trace_entry_decision(name, self.device, included);
        included
    }

    // <root>/<device> or <root>/<device>.*, files only
    fn includes_file(&self, name: &str, is_file: bool) -> bool {
        self.device_path.as_deref().is_some_and(|slot| {
            is_file && (name == slot || has_extension_prefix(name, slot))
        })
    }

    // the <root>/<device> directory itself, or anything beneath it
    fn includes_dir(&self, name: &str, is_file: bool) -> bool {
        self.device_path
            .as_deref()
            .is_some_and(|slot| (!is_file && name == slot) || has_dir_prefix(name, slot))
    }

    /// Applies the predicate to `inventory`, keeping input order.
    #[must_use]
    pub fn apply<E>(&self, inventory: &[E]) -> Vec<E>
    where
        E: InventoryEntry + Clone,
    {
        if !self.mode.is_supported() {
            trace_unsupported_mode(self.scope.root(), self.device);
        }

        let filtered: Vec<E> = inventory
            .iter()
            .filter(|entry| self.includes(*entry))
            .cloned()
            .collect();

        trace_device_pass(
            self.scope.root(),
            self.device,
            self.mode.as_str(),
            filtered.len(),
            inventory.len(),
        );
        filtered
    }
}

/// Returns the entries of `inventory` that belong to `device`'s view of the
/// scope rooted at `scope_root`.
///
/// For a scope root `A/B/C` the result holds, in input order:
///
/// 1. every entry outside `A/B/C`;
/// 2. with [`FilterMode::File`], the files `A/B/C/<device>` and
///    `A/B/C/<device>.*`;
/// 3. with [`FilterMode::Dir`], the directory `A/B/C/<device>` and every entry
///    beneath it;
/// 4. with [`FilterMode::Unsupported`], nothing from inside the scope.
///
/// The function never fails and does not modify `inventory`.
///
/// # Examples
///
/// ```
/// use perdev::{DirEntry, FilterMode, filter_for_device};
///
/// let inventory = [
///     DirEntry::file(".env"),
///     DirEntry::dir("configs"),
///     DirEntry::dir("configs/folder1"),
///     DirEntry::file("configs/folder1/config1"),
///     DirEntry::dir("configs/folder2"),
/// ];
///
/// let view = filter_for_device(&inventory, "configs", "folder1", FilterMode::Dir);
/// let names: Vec<_> = view.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, [".env", "configs", "configs/folder1", "configs/folder1/config1"]);
/// ```
#[must_use]
pub fn filter_for_device<E>(inventory: &[E], scope_root: &str, device: &str, mode: FilterMode) -> Vec<E>
where
    E: InventoryEntry + Clone,
{
    let scope = ConfigScope::new(scope_root);
    DeviceFilter::new(&scope, device, mode).apply(inventory)
}
