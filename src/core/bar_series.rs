use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::layout::Area;
use crate::core::primitives::{clamp_unit, snap_to_unit};
use crate::core::{ResolvedScales, SeriesSet};
use crate::error::{ChartError, ChartResult};

/// Shadow offset applied to bar rectangles, in surface units.
pub const BAR_SHADOW_OFFSET: f64 = 2.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// One bar in normalized plot space, top-left anchored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub xval: f64,
    pub yval: f64,
    pub series_name: String,
}

impl BarRect {
    /// Bar rectangle in surface units inside `plot`.
    #[must_use]
    pub fn to_area(&self, plot: Area) -> Area {
        Area::new(
            plot.x + self.x * plot.w,
            plot.y + self.y * plot.h,
            self.w * plot.w,
            self.h * plot.h,
        )
    }

    /// Shadow rectangle, grown away from the value baseline.
    #[must_use]
    pub fn shadow_rect(&self, plot: Area, orientation: BarOrientation) -> Area {
        let bar = self.to_area(plot);
        let offset = BAR_SHADOW_OFFSET;
        match orientation {
            BarOrientation::Vertical => Area::new(
                bar.x - offset,
                bar.y - offset,
                bar.w + 2.0 * offset,
                bar.h + offset,
            ),
            BarOrientation::Horizontal => Area::new(
                bar.x,
                bar.y - offset,
                bar.w + offset,
                bar.h + 2.0 * offset,
            ),
        }
    }
}

/// Slot metrics shared by every bar of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayoutMetrics {
    /// Spacing between adjacent category indices, in category units.
    pub category_delta: f64,
    /// Width of the group of bars drawn for one category.
    pub bar_width: f64,
    /// Width of one series' bar inside the group.
    pub width_for_set: f64,
    /// Gap on each side of the group inside its slot.
    pub margin: f64,
}

impl BarLayoutMetrics {
    /// Computes slot metrics from the category scale.
    ///
    /// `fill_fraction` is the share of the slot covered by bars and must lie in
    /// `(0, 1]`. `sets_per_slot` is the number of bars placed side by side.
    pub fn new(category_scale: f64, fill_fraction: f64, sets_per_slot: usize) -> ChartResult<Self> {
        if !fill_fraction.is_finite() || fill_fraction <= 0.0 || fill_fraction > 1.0 {
            return Err(ChartError::InvalidData(format!(
                "bar fill fraction must be in (0, 1], got {fill_fraction}"
            )));
        }
        if sets_per_slot == 0 {
            return Err(ChartError::InvalidData(
                "bar layout needs at least one series".to_owned(),
            ));
        }

        let category_delta = 1.0;
        let slot = category_scale * category_delta;
        let bar_width = slot * fill_fraction;
        Ok(Self {
            category_delta,
            bar_width,
            width_for_set: bar_width / sets_per_slot as f64,
            margin: slot * (1.0 - fill_fraction) / 2.0,
        })
    }
}

/// Bars plus the metrics used to place them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub metrics: BarLayoutMetrics,
    pub bars: Vec<BarRect>,
}

/// Orders a value interval as `(low, high)` fractions of the value axis.
fn value_span(from: f64, to: f64) -> (f64, f64) {
    if from <= to { (from, to) } else { (to, from) }
}

/// Projects side-by-side bars.
///
/// Series `i` occupies the i-th sub-slot of every category group. Bars grow
/// from zero clamped into the value axis, so negative values extend below (or
/// left of) the zero line.
pub fn project_bars(
    series: &SeriesSet,
    scales: ResolvedScales,
    orientation: BarOrientation,
    fill_fraction: f64,
) -> ChartResult<BarGeometry> {
    let metrics = BarLayoutMetrics::new(scales.x.scale, fill_fraction, series.len().max(1))?;
    let baseline = scales.y.fraction(scales.y.baseline_value());

    let mut bars = Vec::with_capacity(series.total_points());
    let mut dropped = 0_usize;
    for (set_index, (name, points)) in series.iter().enumerate() {
        let set_offset = set_index as f64 * metrics.width_for_set + metrics.margin;
        for point in points {
            let slot_start = scales.x.fraction(point.x) + set_offset;
            let (low, high) = value_span(baseline, scales.y.fraction(point.y));
            let placed = match orientation {
                BarOrientation::Vertical => {
                    place_vertical(slot_start, low, high, metrics.width_for_set)
                }
                BarOrientation::Horizontal => {
                    place_horizontal(slot_start, low, high, metrics.width_for_set)
                }
            };
            match placed {
                Some((x, y, w, h)) => bars.push(BarRect {
                    x,
                    y,
                    w,
                    h,
                    xval: point.x,
                    yval: point.y,
                    series_name: name.to_owned(),
                }),
                None => dropped += 1,
            }
        }
    }

    trace!(
        bars = bars.len(),
        dropped,
        width_for_set = metrics.width_for_set,
        "projected bars"
    );
    Ok(BarGeometry { metrics, bars })
}

/// Projects stacked bars.
///
/// Category `k` collects the k-th sample of every series. Positive values stack
/// upward from zero and negative values stack downward, each on its own
/// running sum. Segments are clipped to the value axis.
pub fn project_stacked_bars(
    series: &SeriesSet,
    scales: ResolvedScales,
    orientation: BarOrientation,
    fill_fraction: f64,
) -> ChartResult<BarGeometry> {
    let metrics = BarLayoutMetrics::new(scales.x.scale, fill_fraction, 1)?;
    let mut running = vec![(0.0_f64, 0.0_f64); series.category_indices().len()];

    let mut bars = Vec::with_capacity(series.total_points());
    let mut dropped = 0_usize;
    for (name, points) in series.iter() {
        for (index, point) in points.iter().enumerate() {
            let sums = &mut running[index];
            let (start, end) = if point.y >= 0.0 {
                let start = sums.0;
                sums.0 += point.y;
                (start, sums.0)
            } else {
                let start = sums.1;
                sums.1 += point.y;
                (sums.1, start)
            };

            let low = clamp_unit(scales.y.fraction(start));
            let high = clamp_unit(scales.y.fraction(end));
            let slot_start = scales.x.fraction(point.x) + metrics.margin;
            let placed = match orientation {
                BarOrientation::Vertical => {
                    place_vertical(slot_start, low, high, metrics.bar_width)
                }
                BarOrientation::Horizontal => {
                    place_horizontal(slot_start, low, high, metrics.bar_width)
                }
            };
            match placed {
                Some((x, y, w, h)) => bars.push(BarRect {
                    x,
                    y,
                    w,
                    h,
                    xval: point.x,
                    yval: point.y,
                    series_name: name.to_owned(),
                }),
                None => dropped += 1,
            }
        }
    }

    trace!(
        bars = bars.len(),
        dropped,
        bar_width = metrics.bar_width,
        "projected stacked bars"
    );
    Ok(BarGeometry { metrics, bars })
}

/// Vertical bar: dropped when its left edge or top edge leaves the plot.
fn place_vertical(
    slot_start: f64,
    low: f64,
    high: f64,
    width: f64,
) -> Option<(f64, f64, f64, f64)> {
    let x = snap_to_unit(slot_start)?;
    let y = snap_to_unit(1.0 - high)?;
    Some((x, y, width, high - low))
}

/// Horizontal bar: the category position is clamped, the bar is dropped only
/// when its left edge leaves the plot.
fn place_horizontal(
    slot_start: f64,
    low: f64,
    high: f64,
    height: f64,
) -> Option<(f64, f64, f64, f64)> {
    let x = snap_to_unit(low)?;
    Some((x, clamp_unit(slot_start), high - low, height))
}
