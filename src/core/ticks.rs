use serde::{Deserialize, Serialize};

use crate::core::AxisRange;
use crate::core::primitives::{format_rounded, format_value, round_to_precision, snap_to_unit};

/// Upper bound on ticks produced for one axis in interval mode.
pub const MAX_TICKS_PER_AXIS: usize = 1000;

/// Labeled reference position along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Fraction of the axis extent in `[0, 1]`.
    pub position: f64,
    pub label: String,
}

impl Tick {
    #[must_use]
    pub fn new(position: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }
}

/// Explicit tick entry: either a bare value or a value with a custom label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickOption {
    Value(f64),
    Labeled(LabeledTick),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabeledTick {
    pub v: f64,
    #[serde(default)]
    pub label: Option<String>,
}

impl TickOption {
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Value(value) => *value,
            Self::Labeled(tick) => tick.v,
        }
    }

    /// Configured label, or the default textual form of the value.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Labeled(LabeledTick {
                label: Some(label), ..
            }) => label.clone(),
            _ => format_value(self.value()),
        }
    }
}

impl From<f64> for TickOption {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

/// Drawing direction of an axis. Vertical axes run top-down, so their
/// positions are inverted (`1 - fraction`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    Horizontal,
    Vertical,
}

impl AxisDirection {
    fn position(self, axis: AxisRange, value: f64) -> f64 {
        match self {
            Self::Horizontal => axis.fraction(value),
            Self::Vertical => axis.inverted_fraction(value),
        }
    }
}

/// Tick inputs for one axis, tried in order: explicit list, fixed interval,
/// target count.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickRules<'a> {
    pub explicit: Option<&'a [TickOption]>,
    pub interval: f64,
    pub tick_count: usize,
    pub precision: u32,
}

impl TickRules<'_> {
    fn has_explicit(&self) -> bool {
        self.explicit.is_some_and(|ticks| !ticks.is_empty())
    }

    fn has_interval(&self) -> bool {
        self.interval.is_finite() && self.interval > 0.0
    }
}

/// Generates ticks for a numeric axis.
#[must_use]
pub fn generate_ticks(
    rules: &TickRules<'_>,
    axis: AxisRange,
    direction: AxisDirection,
) -> Vec<Tick> {
    if rules.has_explicit() {
        return explicit_ticks(rules.explicit.unwrap_or_default(), axis, direction);
    }
    if rules.has_interval() {
        return interval_ticks(rules.interval, rules.precision, axis, direction);
    }
    if rules.tick_count > 0 {
        return count_ticks(rules.tick_count, rules.precision, axis, direction);
    }
    Vec::new()
}

fn explicit_ticks(ticks: &[TickOption], axis: AxisRange, direction: AxisDirection) -> Vec<Tick> {
    ticks
        .iter()
        .filter_map(|tick| {
            snap_to_unit(direction.position(axis, tick.value()))
                .map(|position| Tick::new(position, tick.label()))
        })
        .collect()
}

fn interval_ticks(
    interval: f64,
    precision: u32,
    axis: AxisRange,
    direction: AxisDirection,
) -> Vec<Tick> {
    let first = (axis.min / interval).ceil() * interval;
    let mut ticks = Vec::new();
    for step in 0..MAX_TICKS_PER_AXIS {
        let value = first + step as f64 * interval;
        let Some(position) = snap_to_unit(direction.position(axis, value)) else {
            break;
        };
        ticks.push(Tick::new(position, format_rounded(value, precision)));
    }
    ticks
}

fn count_ticks(
    tick_count: usize,
    precision: u32,
    axis: AxisRange,
    direction: AxisDirection,
) -> Vec<Tick> {
    let tick_count = tick_count.min(MAX_TICKS_PER_AXIS);
    let raw = axis.range / tick_count as f64;
    let mut separation = if raw < 1.0 && precision == 0 {
        1.0
    } else {
        round_to_precision(raw, precision)
    };
    if separation <= 0.0 {
        // Precision too coarse for this range: keep the exact separation.
        separation = raw;
    }

    let mut ticks = Vec::with_capacity(tick_count + 1);
    for step in 0..=tick_count {
        let value = axis.min + step as f64 * separation;
        if let Some(position) = snap_to_unit(direction.position(axis, value)) {
            ticks.push(Tick::new(position, format_rounded(value, precision)));
        }
        if separation == 0.0 {
            break;
        }
    }
    ticks
}

/// Category-axis ticks under the unique-indices policy.
///
/// Explicit ticks and fixed intervals keep their priority. Otherwise the
/// candidates are the integer category indices `0..=category_count`; the j-th
/// tick is the first candidate whose offset from `axis.min` reaches
/// `j * range / tick_count`.
#[must_use]
pub fn categorical_ticks(
    rules: &TickRules<'_>,
    axis: AxisRange,
    category_count: usize,
) -> Vec<Tick> {
    if rules.has_explicit() || rules.has_interval() || rules.tick_count == 0 {
        return generate_ticks(rules, axis, AxisDirection::Horizontal);
    }

    let rough_separation = axis.range / rules.tick_count as f64;
    let mut ticks = Vec::new();
    for candidate in 0..=category_count {
        if ticks.len() >= rules.tick_count {
            break;
        }
        let value = candidate as f64;
        if value - axis.min < ticks.len() as f64 * rough_separation {
            continue;
        }
        if let Some(position) = snap_to_unit(axis.fraction(value)) {
            ticks.push(Tick::new(position, candidate.to_string()));
        }
    }
    ticks
}

/// Moves category ticks to the center of their bar slot, dropping ticks that
/// leave the axis.
#[must_use]
pub fn center_in_category_slots(ticks: Vec<Tick>, slot_width: f64) -> Vec<Tick> {
    let offset = slot_width / 2.0;
    ticks
        .into_iter()
        .filter_map(|tick| {
            snap_to_unit(tick.position + offset).map(|position| Tick::new(position, tick.label))
        })
        .collect()
}

/// Axis swap for horizontal bars: value ticks move to the x axis (read
/// left-to-right) and category ticks move to the y axis.
#[must_use]
pub fn swap_for_horizontal_bars(x_ticks: Vec<Tick>, y_ticks: Vec<Tick>) -> (Vec<Tick>, Vec<Tick>) {
    let value_ticks = y_ticks
        .into_iter()
        .map(|tick| Tick::new(1.0 - tick.position, tick.label))
        .collect();
    (value_ticks, x_ticks)
}
