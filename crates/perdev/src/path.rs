//! crates/perdev/src/path.rs
//! Separator-aware string helpers shared by the scope and filter logic.
//!
//! Inventory names are compared as plain strings using `/` as the only
//! separator. Every prefix test in this crate goes through [`has_dir_prefix`]
//! or [`has_extension_prefix`] so the boundary character is checked in one
//! place.

use std::borrow::Cow;

/// Canonical separator used for inventory names and scope roots.
pub const SEPARATOR: char = '/';

/// Replaces the platform separator with [`SEPARATOR`].
///
/// On platforms whose native separator already is `/` the input is borrowed
/// unchanged.
#[must_use]
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
    if std::path::MAIN_SEPARATOR != SEPARATOR && path.contains(std::path::MAIN_SEPARATOR) {
        Cow::Owned(path.replace(std::path::MAIN_SEPARATOR, "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Joins `base` and `name` with a single separator.
///
/// An empty `base` yields `name` unchanged.
pub(crate) fn join(base: &str, name: &str) -> String {
    if base.is_empty() {
        return name.to_owned();
    }
    let mut joined = String::with_capacity(base.len() + 1 + name.len());
    joined.push_str(base);
    joined.push(SEPARATOR);
    joined.push_str(name);
    joined
}

/// Returns `true` when `path` is strictly beneath `dir`.
///
/// `dir` itself and siblings that merely share its leading characters
/// (`configs_backup` for `configs`) are not beneath it.
pub(crate) fn has_dir_prefix(path: &str, dir: &str) -> bool {
    has_prefix_then(path, dir, SEPARATOR)
}

/// Returns `true` when `path` is `stem` followed by `.` and anything else.
pub(crate) fn has_extension_prefix(path: &str, stem: &str) -> bool {
    has_prefix_then(path, stem, '.')
}

fn has_prefix_then(path: &str, prefix: &str, boundary: char) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with(boundary))
}
