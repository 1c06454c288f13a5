//! Structured tracing for per-device filter passes.
//!
//! All events are compiled behind the `tracing` feature flag. Without it every
//! function here is an inline no-op, so the filters stay free of logging cost.
//! The library never installs a subscriber.

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const FILTER_TARGET: &str = "perdev::filter";

/// Traces the outcome of one single-scope pass.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_device_pass(scope: &str, device: &str, mode: &str, kept: usize, total: usize) {
    tracing::debug!(
        target: FILTER_TARGET,
        scope = %scope,
        device = %device,
        mode = %mode,
        kept = kept,
        total = total,
        "device_pass"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_device_pass(_scope: &str, _device: &str, _mode: &str, _kept: usize, _total: usize) {}

/// Traces the decision for a single in-scope entry.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_entry_decision(name: &str, device: &str, included: bool) {
    tracing::trace!(
        target: FILTER_TARGET,
        name = %name,
        device = %device,
        included = included,
        "entry_decision"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_entry_decision(_name: &str, _device: &str, _included: bool) {}

/// Warns that a pass ran with an unsupported mode and hid every in-scope entry.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_unsupported_mode(scope: &str, device: &str) {
    tracing::warn!(
        target: FILTER_TARGET,
        scope = %scope,
        device = %device,
        "unsupported filter mode, excluding all in-scope entries"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_unsupported_mode(_scope: &str, _device: &str) {}

/// Traces a completed merge.
///
/// `concatenated` is the length before deduplication and `merged` the final
/// length.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_merge(scope: &str, criteria: usize, concatenated: usize, merged: usize) {
    tracing::debug!(
        target: FILTER_TARGET,
        scope = %scope,
        criteria = criteria,
        concatenated = concatenated,
        merged = merged,
        "merge"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_merge(_scope: &str, _criteria: usize, _concatenated: usize, _merged: usize) {}

/// Traces a selection that skipped filtering because per-device settings are
/// disabled.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_selection_disabled(device: &str, total: usize) {
    tracing::debug!(
        target: FILTER_TARGET,
        device = %device,
        total = total,
        "per-device configs disabled, selecting full inventory"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_selection_disabled(_device: &str, _total: usize) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_functions_accept_any_input() {
        trace_device_pass("configs", "dev", "file", 3, 9);
        trace_entry_decision("configs/dev.yaml", "dev", true);
        trace_unsupported_mode("configs", "dev");
        trace_merge("configs", 2, 14, 7);
        trace_selection_disabled("dev", 9);
        trace_device_pass("", "", "", 0, 0);
    }
}
