use serde::{Deserialize, Serialize};

use crate::core::primitives::in_unit_interval;
use crate::core::{
    Area, BarGeometry, BarOrientation, ChartLayout, FontSpec, LegendLayout, LinePath, PieLayout,
    Point, RadialPoint, RadialRing, RadialSpoke, RadialTickLabel, Slice, Tick, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Outline stroke applied to filled shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

/// Resolved drawing style for one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    /// Paint for the whole surface, if any.
    pub base_color: Option<Color>,
    /// Plot background; `None` when the background is hidden.
    pub chart_color: Option<Color>,
    pub grid_color: Color,
    pub grid_line_width: f64,
    pub show_x_grid: bool,
    pub show_y_grid: bool,
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub label_color: Color,
    pub title_color: Color,
    pub title_font: FontSpec,
    pub label_font: FontSpec,
    pub tick_font: FontSpec,
    /// `None` when strokes are hidden.
    pub stroke: Option<StrokeStyle>,
    pub shadow: bool,
    pub should_fill: bool,
    pub fill_opacity: f64,
    pub legend_opacity: f64,
    pub legend_border: StrokeStyle,
}

impl SceneStyle {
    fn validate(&self) -> ChartResult<()> {
        let colors = [
            Some(self.grid_color),
            Some(self.axis_color),
            Some(self.label_color),
            Some(self.title_color),
            Some(self.legend_border.color),
            self.base_color,
            self.chart_color,
            self.stroke.map(|stroke| stroke.color),
        ];
        for color in colors.into_iter().flatten() {
            color.validate()?;
        }
        for (name, value) in [
            ("fill opacity", self.fill_opacity),
            ("legend opacity", self.legend_opacity),
        ] {
            if !in_unit_interval(value) {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Ticks and text of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneAxis {
    pub hidden: bool,
    pub label: Option<String>,
    pub ticks: Vec<Tick>,
    /// Tick label rotation in degrees.
    pub rotate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneLayout {
    Cartesian(ChartLayout),
    Pie(PieLayout),
}

impl SceneLayout {
    /// Area the chart shapes are projected into.
    #[must_use]
    pub fn plot_area(&self) -> Area {
        match self {
            Self::Cartesian(layout) => layout.plot,
            Self::Pie(layout) => layout.chart,
        }
    }

    #[must_use]
    pub fn title_area(&self) -> Area {
        match self {
            Self::Cartesian(layout) => layout.title,
            Self::Pie(layout) => layout.title,
        }
    }
}

/// Per-kind geometry in normalized plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartShapes {
    Bars {
        orientation: BarOrientation,
        stacked: bool,
        geometry: BarGeometry,
    },
    Lines {
        points: Vec<Point>,
        paths: Vec<LinePath>,
    },
    Pie {
        slices: Vec<Slice>,
    },
    Radial {
        points: Vec<RadialPoint>,
        rings: Vec<RadialRing>,
        spokes: Vec<RadialSpoke>,
        labels: Vec<RadialTickLabel>,
    },
}

impl ChartShapes {
    #[must_use]
    pub fn shape_count(&self) -> usize {
        match self {
            Self::Bars { geometry, .. } => geometry.bars.len(),
            Self::Lines { points, .. } => points.len(),
            Self::Pie { slices } => slices.len(),
            Self::Radial { points, .. } => points.len(),
        }
    }

    fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Bars { geometry, .. } => {
                for bar in &geometry.bars {
                    let extent_ok =
                        bar.w.is_finite() && bar.h.is_finite() && bar.w >= 0.0 && bar.h >= 0.0;
                    if !in_unit_interval(bar.x) || !in_unit_interval(bar.y) || !extent_ok {
                        return Err(ChartError::InvalidData(format!(
                            "bar of series `{}` lies outside the plot",
                            bar.series_name
                        )));
                    }
                }
            }
            Self::Lines { points, .. } => {
                if let Some(point) = points
                    .iter()
                    .find(|point| !in_unit_interval(point.x) || !in_unit_interval(point.y))
                {
                    return Err(ChartError::InvalidData(format!(
                        "point of series `{}` lies outside the plot",
                        point.series_name
                    )));
                }
            }
            Self::Pie { slices } => {
                if slices.iter().any(|slice| !slice.fraction.is_finite() || slice.fraction <= 0.0) {
                    return Err(ChartError::InvalidData(
                        "pie slice fractions must be finite and > 0".to_owned(),
                    ));
                }
            }
            Self::Radial { points, .. } => {
                if points.iter().any(|point| !in_unit_interval(point.radius_fraction)) {
                    return Err(ChartError::InvalidData(
                        "radial point lies outside the outer ring".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Everything a backend needs to draw one evaluated chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub viewport: Viewport,
    pub title: Option<String>,
    /// Series names in insertion order, for color and legend assignment.
    pub series_names: Vec<String>,
    pub layout: SceneLayout,
    pub x_axis: SceneAxis,
    pub y_axis: SceneAxis,
    pub shapes: ChartShapes,
    pub legend: Option<LegendLayout>,
    pub style: SceneStyle,
}

impl ChartScene {
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.x_axis.ticks.len() + self.y_axis.ticks.len()
    }

    /// Checks the invariants backends rely on.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        let plot = self.layout.plot_area();
        if !plot.has_positive_size() {
            return Err(ChartError::Geometry {
                width: plot.w,
                height: plot.h,
            });
        }
        if let Some(tick) = self
            .x_axis
            .ticks
            .iter()
            .chain(&self.y_axis.ticks)
            .find(|tick| !in_unit_interval(tick.position))
        {
            return Err(ChartError::InvalidData(format!(
                "tick `{}` lies outside its axis",
                tick.label
            )));
        }
        self.shapes.validate()?;
        self.style.validate()
    }
}
