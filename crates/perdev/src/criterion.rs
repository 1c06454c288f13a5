use crate::FilterMode;

/// One device selection inside a merge: the device identifier and the mode
/// its slice uses.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterCriterion {
    /// Device (or group) identifier naming the slice.
    #[cfg_attr(feature = "serde", serde(rename = "FilterKey"))]
    pub device: String,
    /// Layout of the slice inside the scope.
    #[cfg_attr(feature = "serde", serde(rename = "FilterType"))]
    pub mode: FilterMode,
}

impl FilterCriterion {
    /// Creates a criterion for `device` using `mode`.
    #[must_use]
    pub fn new(device: impl Into<String>, mode: FilterMode) -> Self {
        Self {
            device: device.into(),
            mode,
        }
    }

    /// Creates a [`FilterMode::File`] criterion.
    #[must_use]
    pub fn file(device: impl Into<String>) -> Self {
        Self::new(device, FilterMode::File)
    }

    /// Creates a [`FilterMode::Dir`] criterion.
    #[must_use]
    pub fn dir(device: impl Into<String>) -> Self {
        Self::new(device, FilterMode::Dir)
    }
}

impl<S: Into<String>> From<(S, FilterMode)> for FilterCriterion {
    fn from((device, mode): (S, FilterMode)) -> Self {
        Self::new(device, mode)
    }
}
