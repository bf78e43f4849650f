use std::f64::consts::{FRAC_PI_4, TAU};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::layout::{
    Area, FontSpec, Padding, TextExtents, TextHAlign, TextMeasurer, TextVAlign, title_height,
};
use crate::core::{SeriesSet, TickOption, Viewport};
use crate::error::{ChartError, ChartResult};

/// Minimum angular extent, in radians, for a slice to be drawn.
pub const MIN_SLICE_ANGLE: f64 = 0.001;

/// Angular wedge of a pie chart. Angles are radians, counter-clockwise from
/// the positive x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub series_name: String,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Category of the slice: the index of its series.
    pub xval: f64,
    pub yval: f64,
}

impl Slice {
    #[must_use]
    pub fn is_big_enough(&self) -> bool {
        (self.end_angle - self.start_angle).abs() > MIN_SLICE_ANGLE
    }

    /// Mid angle of the wedge folded into `[0, 2π)`.
    #[must_use]
    pub fn normalized_mid_angle(&self) -> f64 {
        ((self.start_angle + self.end_angle) / 2.0).rem_euclid(TAU)
    }
}

/// Builds one slice per series with a positive first value.
///
/// Series without samples or with a non-positive value produce no slice and
/// consume no angle, so the next slice starts where the last one ended.
#[must_use]
pub fn project_slices(series: &SeriesSet) -> Vec<Slice> {
    let values: Vec<(usize, &str, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(index, (name, points))| points.first().map(|point| (index, name, point.y)))
        .collect();
    let total: f64 = values.iter().map(|(_, _, value)| value.max(0.0)).sum();

    let mut slices = Vec::with_capacity(values.len());
    let mut cumulative = 0.0;
    let mut skipped = 0_usize;
    for (index, name, value) in values {
        if value <= 0.0 {
            skipped += 1;
            continue;
        }
        let fraction = value / total;
        slices.push(Slice {
            series_name: name.to_owned(),
            fraction,
            start_angle: TAU * cumulative,
            end_angle: TAU * (cumulative + fraction),
            xval: index as f64,
            yval: value,
        });
        cumulative += fraction;
    }
    trace!(slices = slices.len(), skipped, "projected pie slices");
    slices
}

/// Label text attached to one slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceLabel {
    pub xval: f64,
    pub text: String,
    pub mid_angle: f64,
}

fn percent_suffix(slice: &Slice) -> String {
    format!("({:.1}%)", slice.fraction * 100.0)
}

/// Resolves slice labels.
///
/// Explicit ticks select slices by category; a tick naming a category without a
/// slice is rejected. Without explicit ticks every slice is labeled with its
/// series name and percentage.
pub fn slice_labels(
    slices: &[Slice],
    explicit: Option<&[TickOption]>,
) -> ChartResult<Vec<SliceLabel>> {
    let Some(ticks) = explicit.filter(|ticks| !ticks.is_empty()) else {
        return Ok(slices
            .iter()
            .map(|slice| SliceLabel {
                xval: slice.xval,
                text: format!("{} {}", slice.series_name, percent_suffix(slice)),
                mid_angle: slice.normalized_mid_angle(),
            })
            .collect());
    };

    ticks
        .iter()
        .map(|tick| {
            let slice = slices
                .iter()
                .find(|slice| slice.xval == tick.value())
                .ok_or_else(|| {
                    ChartError::InvalidData(format!(
                        "pie tick {} does not match any slice",
                        tick.value()
                    ))
                })?;
            Ok(SliceLabel {
                xval: slice.xval,
                text: format!("{} {}", tick.label(), percent_suffix(slice)),
                mid_angle: slice.normalized_mid_angle(),
            })
        })
        .collect()
}

/// Chart-area edge crossed by a label's anchor ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieQuadrant {
    Top,
    Left,
    Bottom,
    Right,
}

impl PieQuadrant {
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let angle = angle.rem_euclid(TAU);
        if (FRAC_PI_4..3.0 * FRAC_PI_4).contains(&angle) {
            Self::Top
        } else if (3.0 * FRAC_PI_4..5.0 * FRAC_PI_4).contains(&angle) {
            Self::Left
        } else if (5.0 * FRAC_PI_4..7.0 * FRAC_PI_4).contains(&angle) {
            Self::Bottom
        } else {
            Self::Right
        }
    }

    #[must_use]
    pub fn alignment(self) -> (TextHAlign, TextVAlign) {
        match self {
            Self::Top => (TextHAlign::Center, TextVAlign::Top),
            Self::Bottom => (TextHAlign::Center, TextVAlign::Bottom),
            Self::Left => (TextHAlign::Left, TextVAlign::Middle),
            Self::Right => (TextHAlign::Right, TextVAlign::Middle),
        }
    }
}

/// Positioned slice label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLabel {
    pub xval: f64,
    pub text: String,
    /// Label box in surface units.
    pub bounds: Area,
    /// Point where the label's ray meets the chart-area edge.
    pub anchor: (f64, f64),
    pub quadrant: PieQuadrant,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

/// Inputs of [`PieLayout::fit`].
#[derive(Debug, Clone, Copy)]
pub struct PieLayoutRequest<'a> {
    pub viewport: Viewport,
    pub padding: Padding,
    pub title: Option<&'a str>,
    pub title_font: &'a FontSpec,
    pub tick_font: &'a FontSpec,
    /// Initial radius as a share of the smaller chart dimension. `None` uses
    /// half of it.
    pub radius_fraction: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub title: Area,
    pub chart: Area,
    pub radius: f64,
    pub labels: Vec<PieLabel>,
}

impl PieLayout {
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        self.chart.center()
    }

    /// Sizes the title and chart areas, then shrinks the radius until every
    /// label box fits between the pie and the chart-area edge.
    #[must_use]
    pub fn fit(
        request: &PieLayoutRequest<'_>,
        labels: &[SliceLabel],
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let PieLayoutRequest {
            viewport, padding, ..
        } = *request;
        let title = Area::new(
            padding.left,
            padding.top,
            viewport.width - (padding.left + padding.right),
            title_height(measurer, request.title, request.title_font),
        );
        let chart = Area::new(
            title.x,
            title.bottom(),
            title.w,
            viewport.height - title.h - (padding.top + padding.bottom),
        );

        let smaller_side = chart.w.min(chart.h);
        let mut radius = match request.radius_fraction {
            Some(fraction) => smaller_side * fraction,
            None => smaller_side / 2.0,
        };

        let mut placed = Vec::with_capacity(labels.len());
        for label in labels {
            let extents = measurer.measure(&label.text, request.tick_font);
            let (positioned, candidate) = place_label(chart, label, extents);
            radius = radius.min(candidate);
            placed.push(positioned);
        }

        trace!(radius, labels = placed.len(), "fitted pie layout");
        Self {
            title,
            chart,
            radius: radius.max(0.0),
            labels: placed,
        }
    }
}

/// Intersection of the ray leaving the center at `angle` with the chart edge
/// selected by `quadrant`.
fn edge_intersection(chart: Area, quadrant: PieQuadrant, angle: f64) -> (f64, f64) {
    let (cx, cy) = chart.center();
    let (dx, dy) = (angle.cos(), -angle.sin());
    let distance = match quadrant {
        PieQuadrant::Top => (chart.y - cy) / dy,
        PieQuadrant::Bottom => (chart.bottom() - cy) / dy,
        PieQuadrant::Left => (chart.x - cx) / dx,
        PieQuadrant::Right => (chart.right() - cx) / dx,
    };
    (cx + dx * distance, cy + dy * distance)
}

fn clamp_into(value: f64, low: f64, high: f64) -> f64 {
    if high < low { low } else { value.clamp(low, high) }
}

fn place_label(chart: Area, label: &SliceLabel, extents: TextExtents) -> (PieLabel, f64) {
    let (cx, cy) = chart.center();
    let TextExtents {
        width: w,
        height: h,
    } = extents;
    let quadrant = PieQuadrant::from_angle(label.mid_angle);
    let (ax, ay) = edge_intersection(chart, quadrant, label.mid_angle);

    let (x, y) = match quadrant {
        PieQuadrant::Top => (ax - w / 2.0, chart.y),
        PieQuadrant::Bottom => (ax - w / 2.0, chart.bottom() - h),
        PieQuadrant::Left => (chart.x, ay - h / 2.0),
        PieQuadrant::Right => (chart.right() - w, ay - h / 2.0),
    };
    let bounds = Area::new(
        clamp_into(x, chart.x, chart.right() - w),
        clamp_into(y, chart.y, chart.bottom() - h),
        w,
        h,
    );

    let candidate = match quadrant {
        PieQuadrant::Top => cy - bounds.bottom(),
        PieQuadrant::Bottom => bounds.y - cy,
        PieQuadrant::Left => cx - bounds.right(),
        PieQuadrant::Right => bounds.x - cx,
    }
    .max(0.0);

    let (h_align, v_align) = quadrant.alignment();
    (
        PieLabel {
            xval: label.xval,
            text: label.text.clone(),
            bounds,
            anchor: (ax, ay),
            quadrant,
            h_align,
            v_align,
        },
        candidate,
    )
}

/// Outline of a slice wedge in surface units, for backends without an arc
/// primitive: the center followed by `segments + 1` points along the arc.
#[must_use]
pub fn wedge_outline(
    slice: &Slice,
    center: (f64, f64),
    radius: f64,
    segments: usize,
) -> Vec<(f64, f64)> {
    let segments = segments.max(1);
    let sweep = slice.end_angle - slice.start_angle;
    let mut outline = Vec::with_capacity(segments + 2);
    outline.push(center);
    for step in 0..=segments {
        let angle = slice.start_angle + sweep * step as f64 / segments as f64;
        outline.push((center.0 + radius * angle.cos(), center.1 - radius * angle.sin()));
    }
    outline
}
