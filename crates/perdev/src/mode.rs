use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How a device's slice of a configuration scope is laid out.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterMode {
    /// The device owns `<root>/<device>` and every `<root>/<device>.*` file.
    #[cfg_attr(feature = "serde", serde(rename = "file"))]
    File,
    /// The device owns the `<root>/<device>` directory and everything below it.
    #[cfg_attr(feature = "serde", serde(rename = "dir"))]
    Dir,
    /// Any other mode token. Nothing inside the scope matches it.
    #[cfg_attr(feature = "serde", serde(other, rename = ""))]
    Unsupported,
}

impl FilterMode {
    /// Maps a mode token to a mode, treating unknown tokens as
    /// [`Unsupported`](Self::Unsupported).
    ///
    /// Use [`str::parse`] instead when unknown tokens should be rejected.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or(Self::Unsupported)
    }

    /// Returns the token used for this mode in stored settings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Dir => "dir",
            Self::Unsupported => "",
        }
    }

    /// Returns `false` for [`Unsupported`](Self::Unsupported).
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => f.write_str("unsupported"),
            mode => f.write_str(mode.as_str()),
        }
    }
}

impl FromStr for FilterMode {
    type Err = ParseFilterModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(Self::File),
            "dir" => Ok(Self::Dir),
            other => Err(ParseFilterModeError {
                token: other.to_owned(),
            }),
        }
    }
}

/// Error returned when a mode token is neither `file` nor `dir`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unsupported per-device filter mode '{token}' (expected 'file' or 'dir')")]
pub struct ParseFilterModeError {
    token: String,
}

impl ParseFilterModeError {
    /// Returns the rejected token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}
