//! crates/perdev/src/config.rs
//! Stored per-device configuration settings of a deployment.
//!
//! A deployment that ships a shared project tree to many devices names one
//! scope root whose children are split per device, plus the mode used for a
//! device's own slice and for the slices of the groups it belongs to.
//! [`PerDeviceConfigs::select`] turns those settings into the merged view for
//! one device.

use thiserror::Error;

use crate::debug_filter::trace_selection_disabled;
use crate::{ConfigScope, FilterCriterion, FilterMode, InventoryEntry, merge_filter_for_device};

/// Per-device settings attached to a deployment.
///
/// An empty `path` disables per-device filtering entirely.
///
/// With the `serde` feature the settings use the stored field names
/// `PerDeviceConfigsPath`, `PerDeviceConfigsMatchType` and
/// `PerDeviceConfigsGroupMatchType`. Missing or unknown mode tokens read as
/// [`FilterMode::Unsupported`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerDeviceConfigs {
    /// Scope root, relative to the project root.
    #[cfg_attr(feature = "serde", serde(rename = "PerDeviceConfigsPath", default))]
    pub path: String,
    /// Mode for the slice named after the device itself.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "PerDeviceConfigsMatchType", default = "unsupported")
    )]
    pub match_type: FilterMode,
    /// Mode for the slices named after the device's groups.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "PerDeviceConfigsGroupMatchType", default = "unsupported")
    )]
    pub group_match_type: FilterMode,
}

#[cfg(feature = "serde")]
const fn unsupported() -> FilterMode {
    FilterMode::Unsupported
}

impl Default for PerDeviceConfigs {
    fn default() -> Self {
        Self {
            path: String::new(),
            match_type: FilterMode::Unsupported,
            group_match_type: FilterMode::Unsupported,
        }
    }
}

impl PerDeviceConfigs {
    /// Creates settings for the scope rooted at `path`, with no group slices.
    #[must_use]
    pub fn new(path: impl Into<String>, match_type: FilterMode) -> Self {
        Self {
            path: path.into(),
            match_type,
            group_match_type: FilterMode::Unsupported,
        }
    }

    /// Sets the mode used for group slices.
    #[must_use]
    pub const fn with_group_match_type(mut self, group_match_type: FilterMode) -> Self {
        self.group_match_type = group_match_type;
        self
    }

    /// Returns the configured scope.
    #[must_use]
    pub fn scope(&self) -> ConfigScope {
        ConfigScope::new(self.path.as_str())
    }

    /// Returns `true` when a scope root is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.scope().is_empty()
    }

    /// Checks that enabled settings name a usable device mode.
    ///
    /// Disabled settings are always valid. An unsupported group mode is
    /// accepted because groups are then simply skipped.
    pub fn validate(&self) -> Result<(), PerDeviceConfigsError> {
        if self.is_enabled() && !self.match_type.is_supported() {
            return Err(PerDeviceConfigsError::UnsupportedMatchType {
                path: self.scope().root().to_owned(),
            });
        }
        Ok(())
    }

    /// Builds the criteria for `device` and its `groups`.
    ///
    /// The device criterion comes first, followed by one criterion per group
    /// in the order given. Groups are skipped when the group mode is
    /// unsupported.
    #[must_use]
    pub fn criteria<I, S>(&self, device: &str, groups: I) -> Vec<FilterCriterion>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut criteria = vec![FilterCriterion::new(device, self.match_type)];
        if self.group_match_type.is_supported() {
            criteria.extend(
                groups
                    .into_iter()
                    .map(|group| FilterCriterion::new(group, self.group_match_type)),
            );
        }
        criteria
    }

    /// Selects the entries of `inventory` that `device` receives.
    ///
    /// When the settings are disabled the whole inventory is returned in
    /// order. Otherwise this is [`merge_filter_for_device`] over
    /// [`criteria`](Self::criteria).
    #[must_use]
    pub fn select<E, I, S>(&self, inventory: &[E], device: &str, groups: I) -> Vec<E>
    where
        E: InventoryEntry + Clone,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.is_enabled() {
            trace_selection_disabled(device, inventory.len());
            return inventory.to_vec();
        }

        let criteria = self.criteria(device, groups);
        merge_filter_for_device(inventory, &self.path, &criteria)
    }
}

/// Errors reported by [`PerDeviceConfigs::validate`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PerDeviceConfigsError {
    /// Filtering is enabled but the device mode is neither `file` nor `dir`.
    #[error("per-device configs at '{path}' require a 'file' or 'dir' match type")]
    UnsupportedMatchType {
        /// Configured scope root.
        path: String,
    },
}
