use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::layout::Area;
use crate::core::primitives::{clamp_unit, snap_to_unit};
use crate::core::{ResolvedScales, SeriesSet};

/// One line vertex in normalized plot space (y measured from the top).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub xval: f64,
    pub yval: f64,
    pub series_name: String,
}

impl Point {
    #[must_use]
    pub fn to_surface(&self, plot: Area) -> (f64, f64) {
        plot.project(self.x, self.y)
    }
}

/// Maps every sample onto the plot.
///
/// Points whose x leaves the plot are dropped; y is clamped so the line stays
/// continuous at the value-axis bounds.
#[must_use]
pub fn project_line_points(series: &SeriesSet, scales: ResolvedScales) -> Vec<Point> {
    let mut points = Vec::with_capacity(series.total_points());
    let mut dropped = 0_usize;
    for (name, samples) in series.iter() {
        for sample in samples {
            let Some(x) = snap_to_unit(scales.x.fraction(sample.x)) else {
                dropped += 1;
                continue;
            };
            points.push(Point {
                x,
                y: clamp_unit(scales.y.inverted_fraction(sample.y)),
                xval: sample.x,
                yval: sample.y,
                series_name: name.to_owned(),
            });
        }
    }
    trace!(points = points.len(), dropped, "projected line points");
    points
}

/// Vertex of a line path in normalized plot space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

/// Path geometry for one series.
///
/// `stroke` visits the points in series order. `fill_polygon` is present in
/// fill mode and is explicitly closed against the zero line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    pub series_name: String,
    pub stroke: Vec<PathVertex>,
    pub fill_polygon: Option<Vec<PathVertex>>,
}

/// Groups projected points into one path per series, in series order.
#[must_use]
pub fn build_line_paths(
    series: &SeriesSet,
    points: &[Point],
    origin: f64,
    fill: bool,
) -> Vec<LinePath> {
    let baseline_y = 1.0 - origin;
    series
        .names()
        .map(|name| {
            let stroke: Vec<PathVertex> = points
                .iter()
                .filter(|point| point.series_name == name)
                .map(|point| PathVertex {
                    x: point.x,
                    y: point.y,
                })
                .collect();
            let fill_polygon =
                (fill && !stroke.is_empty()).then(|| close_on_baseline(&stroke, baseline_y));
            LinePath {
                series_name: name.to_owned(),
                stroke,
                fill_polygon,
            }
        })
        .collect()
}

fn close_on_baseline(stroke: &[PathVertex], baseline_y: f64) -> Vec<PathVertex> {
    let mut polygon = Vec::with_capacity(stroke.len() + 3);
    if let (Some(first), Some(last)) = (stroke.first(), stroke.last()) {
        polygon.push(PathVertex {
            x: first.x,
            y: baseline_y,
        });
        polygon.extend_from_slice(stroke);
        polygon.push(PathVertex {
            x: last.x,
            y: baseline_y,
        });
        polygon.push(PathVertex {
            x: first.x,
            y: baseline_y,
        });
    }
    polygon
}
