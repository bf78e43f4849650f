use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::core::{
    AxisDirection, AxisLayoutInput, BarOrientation, ChartLayout, DataPoint, LayoutRequest,
    LegendLayout, PieLayout, PieLayoutRequest, ResolvedScales, Series, SeriesSet, TextMeasurer,
    Tick, TickRules, Viewport, build_line_paths, categorical_ticks, center_in_category_slots,
    generate_ticks, project_bars, project_line_points, project_radial_points, project_slices,
    project_stacked_bars, radial_rings, radial_spokes, radial_tick_labels,
    resolve_categorical_scales, resolve_scales, resolve_stacked_scales, slice_labels,
    swap_for_horizontal_bars,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ChartScene, ChartShapes, Renderer, SceneAxis, SceneLayout, SceneStyle, StrokeStyle,
};

use super::options::{AxisSideOptions, ChartOptions};

/// Chart kinds. Every kind shares the scale resolver and layout engine and
/// differs only in tick post-processing and shape generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Bar(BarOrientation),
    StackedBar(BarOrientation),
    Pie,
    Radial,
}

fn tick_rules(side: &AxisSideOptions) -> TickRules<'_> {
    TickRules {
        explicit: side.ticks.as_deref(),
        interval: side.interval,
        tick_count: side.tick_count,
        precision: side.tick_precision,
    }
}

fn scene_axis(side: &AxisSideOptions, ticks: Vec<Tick>) -> SceneAxis {
    SceneAxis {
        hidden: side.hide,
        label: side.label.clone(),
        ticks,
        rotate: side.rotate,
    }
}

fn scene_style(options: &ChartOptions) -> SceneStyle {
    let background = &options.background;
    SceneStyle {
        base_color: background.base_color.filter(|_| !background.hide),
        chart_color: (!background.hide).then_some(background.chart_color),
        grid_color: background.line_color,
        grid_line_width: background.line_width,
        show_x_grid: !background.hide && options.axis.x.show_lines,
        show_y_grid: !background.hide && options.axis.y.show_lines,
        axis_color: options.axis.line_color,
        axis_line_width: options.axis.line_width,
        label_color: options.axis.label_color,
        title_color: options.title_color,
        title_font: options.title_font_spec(),
        label_font: options.axis.label_font_spec(),
        tick_font: options.axis.tick_font_spec(),
        stroke: (!options.stroke.hide).then_some(StrokeStyle {
            color: options.stroke.color,
            width: options.stroke.width,
        }),
        shadow: options.stroke.shadow,
        should_fill: options.should_fill,
        fill_opacity: options.fill_opacity,
        legend_opacity: options.legend.opacity,
        legend_border: StrokeStyle {
            color: options.legend.border_color,
            width: options.legend.border_width,
        },
    }
}

/// One chart instance: options, datasets and the last evaluated scene.
///
/// Every evaluation recomputes scales, ticks, layout and shapes from scratch.
#[derive(Debug, Clone)]
pub struct Chart {
    kind: ChartKind,
    options: ChartOptions,
    series: SeriesSet,
    scene: Option<ChartScene>,
}

impl Chart {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            options: ChartOptions::default(),
            series: SeriesSet::new(),
            scene: None,
        }
    }

    pub fn with_options(kind: ChartKind, options: ChartOptions) -> ChartResult<Self> {
        options.validate()?;
        Ok(Self {
            options,
            ..Self::new(kind)
        })
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    /// Scene produced by the last successful evaluation.
    #[must_use]
    pub fn scene(&self) -> Option<&ChartScene> {
        self.scene.as_ref()
    }

    /// Merges partial option overrides (camelCase JSON object).
    pub fn set_options(&mut self, overrides: Value) -> ChartResult<()> {
        self.options.merge(overrides)?;
        debug!("merged chart options");
        Ok(())
    }

    /// Replaces the whole option set.
    pub fn replace_options(&mut self, options: ChartOptions) -> ChartResult<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Appends a batch of series. The batch is rejected as a whole when any
    /// name is already taken.
    pub fn add_dataset(&mut self, dataset: Vec<Series>) -> ChartResult<()> {
        let added = dataset.len();
        if let Err(err) = self.series.extend_checked(dataset) {
            warn!(error = %err, added, "rejected dataset");
            return Err(err);
        }
        debug!(
            added,
            series_count = self.series.len(),
            point_count = self.series.total_points(),
            "add dataset"
        );
        Ok(())
    }

    pub fn add_series<P>(
        &mut self,
        name: impl Into<String>,
        points: impl IntoIterator<Item = P>,
    ) -> ChartResult<()>
    where
        P: Into<DataPoint>,
    {
        self.add_dataset(vec![Series::new(name, points)?])
    }

    /// Restores default options and drops every series and the last scene.
    pub fn reset(&mut self) {
        self.options = ChartOptions::default();
        self.series.clear();
        self.scene = None;
        debug!("reset chart");
    }

    /// Evaluates the chart for a surface of `viewport` size.
    pub fn evaluate(
        &mut self,
        viewport: Viewport,
        measurer: &dyn TextMeasurer,
    ) -> ChartResult<&ChartScene> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if self.series.is_empty() {
            return Err(ChartError::InvalidData(
                "chart has no series to render".to_owned(),
            ));
        }

        let scene = match self.kind {
            ChartKind::Pie => self.evaluate_pie(viewport, measurer)?,
            _ => self.evaluate_cartesian(viewport, measurer)?,
        };
        debug!(
            kind = ?self.kind,
            shapes = scene.shapes.shape_count(),
            ticks = scene.tick_count(),
            "evaluated chart"
        );
        Ok(self.scene.insert(scene))
    }

    /// Evaluates against the renderer's surface and hands it the scene.
    pub fn render<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<()> {
        let viewport = renderer.viewport();
        let scene = self.evaluate(viewport, &*renderer)?;
        renderer.render(scene)
    }

    fn resolve_scales(&self) -> ChartResult<ResolvedScales> {
        let x_range = self.options.axis.x.range;
        let y_range = self.options.axis.y.range;
        match self.kind {
            ChartKind::Bar(_) => resolve_categorical_scales(&self.series, x_range, y_range),
            ChartKind::StackedBar(_) => resolve_stacked_scales(&self.series, x_range, y_range),
            ChartKind::Line | ChartKind::Pie | ChartKind::Radial => {
                resolve_scales(&self.series, x_range, y_range)
            }
        }
    }

    /// Ticks as laid out on screen: `(x_ticks, y_ticks)`.
    fn resolve_ticks(&self, scales: ResolvedScales) -> (Vec<Tick>, Vec<Tick>) {
        let axis = &self.options.axis;
        let x_rules = tick_rules(&axis.x);
        let y_rules = tick_rules(&axis.y);
        let y_ticks = generate_ticks(&y_rules, scales.y, AxisDirection::Vertical);
        let categories = self.series.category_indices().len();

        match self.kind {
            ChartKind::Bar(orientation) | ChartKind::StackedBar(orientation) => {
                let x_ticks = center_in_category_slots(
                    categorical_ticks(&x_rules, scales.x, categories),
                    scales.x.scale,
                );
                match orientation {
                    BarOrientation::Vertical => (x_ticks, y_ticks),
                    BarOrientation::Horizontal => swap_for_horizontal_bars(x_ticks, y_ticks),
                }
            }
            ChartKind::Radial => (
                categorical_ticks(&x_rules, scales.x, categories.saturating_sub(1)),
                y_ticks,
            ),
            ChartKind::Line => (
                generate_ticks(&x_rules, scales.x, AxisDirection::Horizontal),
                y_ticks,
            ),
            // Pie labels are derived from the slices, not from axis ticks.
            ChartKind::Pie => (Vec::new(), Vec::new()),
        }
    }

    /// Axis-based evaluation. `evaluate` routes pie charts to `evaluate_pie`;
    /// here a pie kind yields its slices without axis ticks.
    fn evaluate_cartesian(
        &self,
        viewport: Viewport,
        measurer: &dyn TextMeasurer,
    ) -> ChartResult<ChartScene> {
        let options = &self.options;
        let scales = self.resolve_scales()?;
        let (x_ticks, y_ticks) = self.resolve_ticks(scales);
        trace!(
            x_min = scales.x.min,
            x_max = scales.x.max,
            y_min = scales.y.min,
            y_max = scales.y.max,
            origin = scales.origin,
            "resolved scales"
        );

        let title_font = options.title_font_spec();
        let label_font = options.axis.label_font_spec();
        let tick_font = options.axis.tick_font_spec();
        let layout = ChartLayout::compute(
            &LayoutRequest {
                viewport,
                padding: options.padding,
                tick_size: options.axis.tick_size,
                title: options.title.as_deref(),
                title_font: &title_font,
                axis_label_font: &label_font,
                tick_font: &tick_font,
                x_axis: AxisLayoutInput {
                    hidden: options.axis.x.hide,
                    label: options.axis.x.label.as_deref(),
                    ticks: &x_ticks,
                    rotate_degrees: options.axis.x.rotate,
                },
                y_axis: AxisLayoutInput {
                    hidden: options.axis.y.hide,
                    label: options.axis.y.label.as_deref(),
                    ticks: &y_ticks,
                    rotate_degrees: options.axis.y.rotate,
                },
            },
            measurer,
        );
        if !layout.plot.has_positive_size() {
            warn!(
                width = layout.plot.w,
                height = layout.plot.h,
                "plot area collapsed"
            );
            return Err(ChartError::Geometry {
                width: layout.plot.w,
                height: layout.plot.h,
            });
        }

        let fill = options.bar_width_fill_fraction;
        let shapes = match self.kind {
            ChartKind::Bar(orientation) => ChartShapes::Bars {
                orientation,
                stacked: false,
                geometry: project_bars(&self.series, scales, orientation, fill)?,
            },
            ChartKind::StackedBar(orientation) => ChartShapes::Bars {
                orientation,
                stacked: true,
                geometry: project_stacked_bars(&self.series, scales, orientation, fill)?,
            },
            ChartKind::Radial => ChartShapes::Radial {
                points: project_radial_points(&self.series, scales),
                rings: radial_rings(&y_ticks),
                spokes: radial_spokes(&x_ticks, layout.plot),
                labels: radial_tick_labels(&x_ticks, layout.plot),
            },
            ChartKind::Pie => ChartShapes::Pie {
                slices: project_slices(&self.series),
            },
            ChartKind::Line => {
                let points = project_line_points(&self.series, scales);
                let paths =
                    build_line_paths(&self.series, &points, scales.origin, options.should_fill);
                ChartShapes::Lines { points, paths }
            }
        };

        Ok(ChartScene {
            viewport,
            title: options.title.clone(),
            series_names: self.series.names().map(str::to_owned).collect(),
            layout: SceneLayout::Cartesian(layout),
            x_axis: scene_axis(&options.axis.x, x_ticks),
            y_axis: scene_axis(&options.axis.y, y_ticks),
            shapes,
            legend: self.legend(viewport, measurer),
            style: scene_style(options),
        })
    }

    fn evaluate_pie(
        &self,
        viewport: Viewport,
        measurer: &dyn TextMeasurer,
    ) -> ChartResult<ChartScene> {
        let options = &self.options;
        let slices = project_slices(&self.series);
        let labels = if options.axis.x.hide {
            Vec::new()
        } else {
            slice_labels(&slices, options.axis.x.ticks.as_deref())?
        };

        let title_font = options.title_font_spec();
        let tick_font = options.axis.tick_font_spec();
        let layout = PieLayout::fit(
            &PieLayoutRequest {
                viewport,
                padding: options.padding,
                title: options.title.as_deref(),
                title_font: &title_font,
                tick_font: &tick_font,
                radius_fraction: options.pie_radius,
            },
            &labels,
            measurer,
        );
        if !layout.chart.has_positive_size() {
            warn!(
                width = layout.chart.w,
                height = layout.chart.h,
                "pie chart area collapsed"
            );
            return Err(ChartError::Geometry {
                width: layout.chart.w,
                height: layout.chart.h,
            });
        }

        Ok(ChartScene {
            viewport,
            title: options.title.clone(),
            series_names: self.series.names().map(str::to_owned).collect(),
            layout: SceneLayout::Pie(layout),
            x_axis: scene_axis(&options.axis.x, Vec::new()),
            y_axis: scene_axis(&options.axis.y, Vec::new()),
            shapes: ChartShapes::Pie { slices },
            legend: self.legend(viewport, measurer),
            style: scene_style(options),
        })
    }

    fn legend(&self, viewport: Viewport, measurer: &dyn TextMeasurer) -> Option<LegendLayout> {
        let legend = &self.options.legend;
        (!legend.hide).then(|| {
            LegendLayout::compute(
                viewport,
                self.series.names(),
                legend.position,
                &self.options.axis.tick_font_spec(),
                measurer,
            )
        })
    }
}
