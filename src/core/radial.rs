use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::layout::Area;
use crate::core::primitives::snap_to_unit;
use crate::core::{ResolvedScales, SeriesSet, Tick};

/// Extra length of category spokes past the outer ring.
pub const SPOKE_OVERHANG: f64 = 5.0;
/// Distance of category labels past the outer ring.
pub const LABEL_OFFSET: f64 = 10.0;
/// Shift applied along the text baseline when a label is flipped upright.
pub const FLIP_NUDGE: f64 = 5.0;

/// Angle of slot `index` out of `slots`, starting at the top and advancing
/// by `2π / slots`.
#[must_use]
pub fn slot_angle(index: usize, slots: usize) -> f64 {
    if slots == 0 {
        return FRAC_PI_2;
    }
    FRAC_PI_2 - index as f64 * TAU / slots as f64
}

/// Surface position at `angle` and `distance` from `center`.
#[must_use]
fn polar_to_surface(center: (f64, f64), angle: f64, distance: f64) -> (f64, f64) {
    (
        center.0 - angle.cos() * distance,
        center.1 - angle.sin() * distance,
    )
}

/// Radius of the outer ring for `area`.
#[must_use]
pub fn outer_radius(area: Area) -> f64 {
    area.h / 2.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialPoint {
    pub angle: f64,
    /// Share of the outer radius; larger values sit closer to the rim.
    pub radius_fraction: f64,
    pub xval: f64,
    pub yval: f64,
    pub series_name: String,
}

impl RadialPoint {
    #[must_use]
    pub fn position(&self, area: Area) -> (f64, f64) {
        polar_to_surface(
            area.center(),
            self.angle,
            outer_radius(area) * self.radius_fraction,
        )
    }
}

/// Places sample `k` of every series on angular slot `k` of `n`, `n` being the
/// longest series length. Samples outside either axis are dropped.
#[must_use]
pub fn project_radial_points(series: &SeriesSet, scales: ResolvedScales) -> Vec<RadialPoint> {
    let slots = series.category_indices().len();
    let mut points = Vec::with_capacity(series.total_points());
    for (name, samples) in series.iter() {
        for (index, sample) in samples.iter().enumerate() {
            let (Some(_), Some(value_fraction)) = (
                snap_to_unit(scales.x.fraction(sample.x)),
                snap_to_unit(scales.y.fraction(sample.y)),
            ) else {
                continue;
            };
            points.push(RadialPoint {
                angle: slot_angle(index, slots),
                radius_fraction: value_fraction,
                xval: sample.x,
                yval: sample.y,
                series_name: name.to_owned(),
            });
        }
    }
    trace!(points = points.len(), slots, "projected radial points");
    points
}

/// Concentric value ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialRing {
    pub radius_fraction: f64,
    pub label: String,
}

impl RadialRing {
    #[must_use]
    pub fn radius(&self, area: Area) -> f64 {
        outer_radius(area) * self.radius_fraction
    }
}

/// Turns value-axis ticks (top-down positions) into rings.
#[must_use]
pub fn radial_rings(value_ticks: &[Tick]) -> Vec<RadialRing> {
    value_ticks
        .iter()
        .map(|tick| RadialRing {
            radius_fraction: 1.0 - tick.position,
            label: tick.label.clone(),
        })
        .collect()
}

/// Category spoke from the center to just past the outer ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialSpoke {
    pub angle: f64,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

#[must_use]
pub fn radial_spokes(category_ticks: &[Tick], area: Area) -> Vec<RadialSpoke> {
    let count = category_ticks.len();
    let center = area.center();
    (0..count)
        .map(|index| {
            let angle = slot_angle(index, count);
            RadialSpoke {
                angle,
                start: center,
                end: polar_to_surface(center, angle, outer_radius(area) + SPOKE_OVERHANG),
            }
        })
        .collect()
}

/// Category label placed outside the outer ring.
///
/// `rotation` is the text rotation in radians. Labels on the lower half are
/// turned by a half turn so they stay upright, and `baseline_shift` moves them
/// down their rotated baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialTickLabel {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub flipped: bool,
    pub baseline_shift: f64,
}

#[must_use]
pub fn radial_tick_labels(category_ticks: &[Tick], area: Area) -> Vec<RadialTickLabel> {
    let count = category_ticks.len();
    let center = area.center();
    category_ticks
        .iter()
        .enumerate()
        .map(|(index, tick)| {
            let angle = slot_angle(index, count);
            let (x, y) = polar_to_surface(center, angle, outer_radius(area) + LABEL_OFFSET);
            let flipped = angle.sin() < 0.0;
            let base_rotation = angle - FRAC_PI_2;
            RadialTickLabel {
                label: tick.label.clone(),
                x,
                y,
                rotation: if flipped { base_rotation + PI } else { base_rotation },
                flipped,
                baseline_shift: if flipped { FLIP_NUDGE } else { 0.0 },
            }
        })
        .collect()
}
