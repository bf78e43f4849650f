/// Inclusive membership test for the normalized `[0, 1]` space.
#[must_use]
pub fn in_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

const UNIT_TOLERANCE: f64 = 1e-9;

/// Accepts values inside `[0, 1]` up to float noise, snapping the noise away.
#[must_use]
pub fn snap_to_unit(value: f64) -> Option<f64> {
    if (-UNIT_TOLERANCE..=1.0 + UNIT_TOLERANCE).contains(&value) {
        Some(value.clamp(0.0, 1.0))
    } else {
        None
    }
}

#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Rounds `value` to `precision` decimal places.
#[must_use]
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    // Avoid "-0" labels.
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats a tick value rounded to `precision` decimals; precision 0 yields an
/// integer label.
#[must_use]
pub fn format_rounded(value: f64, precision: u32) -> String {
    let rounded = round_to_precision(value, precision);
    format!("{rounded:.prec$}", prec = precision as usize)
}

/// Default textual form of a tick value (`1` for `1.0`, `2.5` for `2.5`).
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}
