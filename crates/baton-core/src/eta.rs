//! Remaining-time estimation for determinate sessions

use std::time::Duration;

/// Placeholder shown before any progress has been made.
pub const CALCULATING: &str = "calculating...";

/// Estimate the remaining time from elapsed wall-clock time and progress.
///
/// With no progress yet (`value <= 0`) there is no rate to extrapolate from,
/// so this returns [`CALCULATING`] instead of dividing by zero. Otherwise the
/// average time per unit so far is projected over the remaining units.
/// Overshoot (`value > total`) clamps to `0s` rather than printing a negative
/// duration.
pub fn estimate_eta(value: f64, total: f64, elapsed: Duration) -> String {
    if value <= 0.0 {
        return CALCULATING.to_string();
    }
    let avg_per_unit = elapsed.as_secs_f64() / value;
    let remaining = avg_per_unit * (total - value);
    format_seconds(remaining.max(0.0))
}

/// Format a span of seconds as `Hh Mm Ss`.
///
/// The hour field is omitted when zero, the hour and minute fields when both
/// are zero; the seconds field is always present. Rounding to the nearest
/// whole second happens here, at the point of formatting, not before.
pub fn format_seconds(seconds: f64) -> String {
    let secs = seconds.round() as u64;
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{h}h {m}m {s}s")
    } else if m > 0 {
        format!("{m}m {s}s")
    } else {
        format!("{s}s")
    }
}
