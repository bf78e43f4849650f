use serde::{Deserialize, Serialize};

use crate::core::SeriesSet;
use crate::error::{ChartError, ChartResult};

/// Resolved extent of one axis.
///
/// `scale` maps a value offset (`value - min`) onto the normalized `[0, 1]`
/// extent and is always finite and non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub scale: f64,
}

impl AxisRange {
    /// Linear axis: `scale = 1 / range`, or `1.0` for a zero range.
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        validate_bounds(min, max)?;
        let range = max - min;
        let scale = if range == 0.0 { 1.0 } else { 1.0 / range };
        Ok(Self {
            min,
            max,
            range,
            scale,
        })
    }

    /// Category axis: one extra slot so every category sits centered in its
    /// own `1 / (range + 1)` wide band.
    pub fn categorical(min: f64, max: f64) -> ChartResult<Self> {
        validate_bounds(min, max)?;
        let range = max - min;
        Ok(Self {
            min,
            max,
            range,
            scale: 1.0 / (range + 1.0),
        })
    }

    /// Offset of `value` from `min`, in fractions of the axis extent.
    #[must_use]
    pub fn fraction(self, value: f64) -> f64 {
        (value - self.min) * self.scale
    }

    /// Same as [`fraction`](Self::fraction) for an axis drawn top-down.
    #[must_use]
    pub fn inverted_fraction(self, value: f64) -> f64 {
        1.0 - self.fraction(value)
    }

    #[must_use]
    pub fn straddles_zero(self) -> bool {
        self.min * self.max < 0.0
    }

    /// Zero clamped into the axis bounds; the value bars grow from.
    #[must_use]
    pub fn baseline_value(self) -> f64 {
        0.0f64.clamp(self.min, self.max)
    }
}

fn validate_bounds(min: f64, max: f64) -> ChartResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidData(
            "axis bounds must be finite".to_owned(),
        ));
    }
    if min > max {
        return Err(ChartError::InvalidData(format!(
            "axis min ({min}) must not exceed max ({max})"
        )));
    }
    Ok(())
}

/// Scale state shared by every geometry generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedScales {
    pub x: AxisRange,
    pub y: AxisRange,
    /// Fraction of the y extent where the zero line sits (0 unless the y axis
    /// straddles zero).
    pub origin: f64,
}

impl ResolvedScales {
    #[must_use]
    pub fn new(x: AxisRange, y: AxisRange) -> Self {
        Self {
            x,
            y,
            origin: origin_for(y),
        }
    }
}

#[must_use]
pub fn origin_for(y: AxisRange) -> f64 {
    if y.straddles_zero() {
        y.min.abs() * y.scale
    } else {
        0.0
    }
}

/// Min/max of `values` with the positive-baseline snap applied: when both
/// bounds are positive the minimum moves to zero. Empty input yields `(0, 0)`.
#[must_use]
pub fn data_bounds(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let mut bounds: Option<(f64, f64)> = None;
    for value in values {
        bounds = Some(match bounds {
            None => (value, value),
            Some((min, max)) => (min.min(value), max.max(value)),
        });
    }

    let (mut min, max) = bounds.unwrap_or((0.0, 0.0));
    if min * max > 0.0 && min > 0.0 {
        min = 0.0;
    }
    (min, max)
}

/// Resolves one linear axis from data or from an explicit override.
pub fn resolve_axis_range(
    values: impl IntoIterator<Item = f64>,
    explicit: Option<[f64; 2]>,
) -> ChartResult<AxisRange> {
    let (min, max) = match explicit {
        Some([min, max]) => (min, max),
        None => data_bounds(values),
    };
    AxisRange::new(min, max)
}

/// Scales for line, pie and radial charts.
pub fn resolve_scales(
    series: &SeriesSet,
    x_explicit: Option<[f64; 2]>,
    y_explicit: Option<[f64; 2]>,
) -> ChartResult<ResolvedScales> {
    let x = resolve_axis_range(series.x_values(), x_explicit)?;
    let y = resolve_axis_range(series.y_values(), y_explicit)?;
    Ok(ResolvedScales::new(x, y))
}

/// Category x bounds for bar-like charts.
///
/// When every series holds a single sample the axis collapses onto that shared
/// category so one bar group fills the whole plot width.
fn categorical_x_bounds(series: &SeriesSet, explicit: Option<[f64; 2]>) -> (f64, f64) {
    if let Some([min, max]) = explicit {
        return (min, max);
    }
    if series.longest_len() == 1 {
        let shared = series
            .iter()
            .find_map(|(_, points)| points.first())
            .map_or(0.0, |point| point.x);
        return (shared, shared);
    }
    data_bounds(series.x_values())
}

/// Scales for side-by-side bar charts.
pub fn resolve_categorical_scales(
    series: &SeriesSet,
    x_explicit: Option<[f64; 2]>,
    y_explicit: Option<[f64; 2]>,
) -> ChartResult<ResolvedScales> {
    let (x_min, x_max) = categorical_x_bounds(series, x_explicit);
    let x = AxisRange::categorical(x_min, x_max)?;
    let y = resolve_axis_range(series.y_values(), y_explicit)?;
    Ok(ResolvedScales::new(x, y))
}

/// Per-category cumulative sums `(positive, negative)` using the
/// unique-indices policy: category `k` is the k-th sample of every series.
#[must_use]
pub fn stacked_category_sums(series: &SeriesSet) -> Vec<(f64, f64)> {
    let mut sums = vec![(0.0, 0.0); series.category_indices().len()];
    for (_, points) in series.iter() {
        for (index, point) in points.iter().enumerate() {
            let slot = &mut sums[index];
            if point.y >= 0.0 {
                slot.0 += point.y;
            } else {
                slot.1 += point.y;
            }
        }
    }
    sums
}

/// Scales for stacked bar charts: the value axis spans the tallest stack.
pub fn resolve_stacked_scales(
    series: &SeriesSet,
    x_explicit: Option<[f64; 2]>,
    y_explicit: Option<[f64; 2]>,
) -> ChartResult<ResolvedScales> {
    let (x_min, x_max) = categorical_x_bounds(series, x_explicit);
    let x = AxisRange::categorical(x_min, x_max)?;

    let y = match y_explicit {
        Some([min, max]) => AxisRange::new(min, max)?,
        None => {
            let sums = stacked_category_sums(series);
            let max = sums.iter().map(|sum| sum.0).fold(0.0, f64::max);
            let min = sums.iter().map(|sum| sum.1).fold(0.0, f64::min);
            AxisRange::new(min, max)?
        }
    };
    Ok(ResolvedScales::new(x, y))
}
