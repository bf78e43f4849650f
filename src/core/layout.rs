use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Tick, Viewport};

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Area {
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.w
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.h
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Maps a normalized `(fx, fy)` pair into this area.
    #[must_use]
    pub fn project(self, fx: f64, fy: f64) -> (f64, f64) {
        (self.x + fx * self.w, self.y + fy * self.h)
    }

    #[must_use]
    pub fn has_positive_size(self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }

    /// Containment check tolerant to float noise on the edges.
    #[must_use]
    pub fn contains(self, other: Area) -> bool {
        const EPS: f64 = 1e-9;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() <= self.bottom() + EPS
    }
}

/// Space reserved around the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
}

impl TextExtents {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Text measurement provided by the drawing backend.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> TextExtents;
}

/// Backend-free measurer: every glyph is 0.6 em wide and one em tall.
///
/// Deterministic, so layouts computed headless are reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> TextExtents {
        if text.is_empty() {
            return TextExtents::default();
        }
        let glyphs = text.chars().count() as f64;
        TextExtents::new(glyphs * font.size * 0.6, font.size)
    }
}

/// Bounding box of a text block rotated by `degrees`.
#[must_use]
pub fn rotated_extents(extents: TextExtents, degrees: f64) -> TextExtents {
    let radians = degrees.to_radians();
    let (sin, cos) = (radians.sin().abs(), radians.cos().abs());
    TextExtents::new(
        extents.width * cos + extents.height * sin,
        extents.width * sin + extents.height * cos,
    )
}

/// Largest width and largest height over a set of tick labels.
#[must_use]
pub fn max_tick_label_extents(
    measurer: &dyn TextMeasurer,
    ticks: &[Tick],
    font: &FontSpec,
    rotate_degrees: Option<f64>,
) -> TextExtents {
    let measured: Vec<TextExtents> = ticks
        .iter()
        .map(|tick| measurer.measure(&tick.label, font))
        .collect();
    let Some(max_width) = measured.iter().map(|e| OrderedFloat(e.width)).max() else {
        return TextExtents::default();
    };
    let max_height = measured
        .iter()
        .map(|e| OrderedFloat(e.height))
        .max()
        .unwrap_or_default();

    let extents = TextExtents::new(max_width.0, max_height.0);
    match rotate_degrees {
        Some(degrees) if degrees != 0.0 => rotated_extents(extents, degrees),
        _ => extents,
    }
}

/// Per-axis inputs of the cartesian layout.
#[derive(Debug, Clone, Copy)]
pub struct AxisLayoutInput<'a> {
    pub hidden: bool,
    pub label: Option<&'a str>,
    pub ticks: &'a [Tick],
    pub rotate_degrees: Option<f64>,
}

/// Everything the layout engine needs besides the text measurer.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRequest<'a> {
    pub viewport: Viewport,
    pub padding: Padding,
    pub tick_size: f64,
    pub title: Option<&'a str>,
    pub title_font: &'a FontSpec,
    pub axis_label_font: &'a FontSpec,
    pub tick_font: &'a FontSpec,
    pub x_axis: AxisLayoutInput<'a>,
    pub y_axis: AxisLayoutInput<'a>,
}

/// Nested areas of a cartesian chart.
///
/// Areas are carved from the padded surface in a fixed order: title on top,
/// then the y label, y tick labels and y tick marks from the left, then the x
/// label, x tick labels and x tick marks from the bottom. Sizes are not
/// corrected: an undersized surface yields zero or negative plot dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Padded surface rectangle.
    pub padded: Area,
    pub title: Area,
    pub y_label: Area,
    pub y_tick_labels: Area,
    pub y_ticks: Area,
    pub x_label: Area,
    pub x_tick_labels: Area,
    pub x_ticks: Area,
    pub plot: Area,
}

pub(crate) fn title_height(
    measurer: &dyn TextMeasurer,
    title: Option<&str>,
    font: &FontSpec,
) -> f64 {
    title
        .filter(|text| !text.is_empty())
        .map_or(0.0, |text| measurer.measure(text, font).height)
}

fn axis_label_thickness(measurer: &dyn TextMeasurer, label: Option<&str>, font: &FontSpec) -> f64 {
    label
        .filter(|text| !text.is_empty())
        .map_or(0.0, |text| measurer.measure(text, font).height)
}

impl ChartLayout {
    #[must_use]
    pub fn compute(request: &LayoutRequest<'_>, measurer: &dyn TextMeasurer) -> Self {
        let LayoutRequest {
            viewport,
            padding,
            tick_size,
            ..
        } = *request;

        let padded = Area::new(
            padding.left,
            padding.top,
            viewport.width - (padding.left + padding.right),
            viewport.height - (padding.top + padding.bottom),
        );
        let title = Area::new(
            padded.x,
            padded.y,
            padded.w,
            title_height(measurer, request.title, request.title_font),
        );

        let y_label_width =
            axis_label_thickness(measurer, request.y_axis.label, request.axis_label_font);
        let x_label_height =
            axis_label_thickness(measurer, request.x_axis.label, request.axis_label_font);

        let y_tick_labels_width = if request.y_axis.hidden {
            0.0
        } else {
            max_tick_label_extents(
                measurer,
                request.y_axis.ticks,
                request.tick_font,
                request.y_axis.rotate_degrees,
            )
            .width
        };
        let x_tick_labels_height = if request.x_axis.hidden {
            0.0
        } else {
            max_tick_label_extents(
                measurer,
                request.x_axis.ticks,
                request.tick_font,
                request.x_axis.rotate_degrees,
            )
            .height
        };

        let column_height =
            padded.h - (title.h + x_label_height + x_tick_labels_height + tick_size);
        let row_width = padded.w - (y_label_width + y_tick_labels_width + tick_size);

        let y_label = Area::new(padded.x, title.bottom(), y_label_width, column_height);
        let y_tick_labels = Area::new(
            y_label.right(),
            y_label.y,
            y_tick_labels_width,
            column_height,
        );
        let y_ticks = Area::new(y_tick_labels.right(), y_label.y, tick_size, column_height);

        let x_label = Area::new(
            y_ticks.right(),
            padded.bottom() - x_label_height,
            row_width,
            x_label_height,
        );
        let x_tick_labels = Area::new(
            x_label.x,
            x_label.y - x_tick_labels_height,
            row_width,
            x_tick_labels_height,
        );
        let x_ticks = Area::new(x_label.x, x_tick_labels.y - tick_size, row_width, tick_size);

        let plot = Area::new(y_ticks.right(), title.bottom(), row_width, column_height);

        Self {
            padded,
            title,
            y_label,
            y_tick_labels,
            y_ticks,
            x_label,
            x_tick_labels,
            x_ticks,
            plot,
        }
    }
}

/// Horizontal anchor of a label relative to its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a label relative to its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

pub const LEGEND_PADDING: f64 = 4.0;
pub const LEGEND_BULLET_SIZE: f64 = 15.0;

/// Legend anchor offsets. `right`/`bottom` take precedence over `left`/`top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegendPosition {
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
}

impl Default for LegendPosition {
    fn default() -> Self {
        Self {
            top: Some(20.0),
            left: Some(40.0),
            bottom: None,
            right: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub series_name: String,
    /// Color swatch.
    pub bullet: Area,
    /// Left edge of the entry text.
    pub text_x: f64,
    /// Vertical center of the entry text.
    pub text_center_y: f64,
    pub text: TextExtents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub frame: Area,
    pub entries: Vec<LegendEntry>,
}

impl LegendLayout {
    /// Lays out one bullet + name row per series, in insertion order.
    #[must_use]
    pub fn compute<'a>(
        viewport: Viewport,
        series_names: impl IntoIterator<Item = &'a str>,
        position: LegendPosition,
        font: &FontSpec,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let measured: Vec<(&str, TextExtents)> = series_names
            .into_iter()
            .map(|name| (name, measurer.measure(name, font)))
            .collect();

        let text_width = measured
            .iter()
            .map(|(_, extents)| OrderedFloat(extents.width))
            .max()
            .unwrap_or_default()
            .0;
        let row_height =
            |extents: &TextExtents| extents.height.max(LEGEND_BULLET_SIZE) + LEGEND_PADDING;
        let height = LEGEND_PADDING + measured.iter().map(|(_, e)| row_height(e)).sum::<f64>();
        let width = LEGEND_PADDING * 3.0 + LEGEND_BULLET_SIZE + text_width;

        let left = match position.right {
            Some(right) => viewport.width - right - width,
            None => position.left.unwrap_or(0.0),
        };
        let top = match position.bottom {
            Some(bottom) => viewport.height - bottom - height,
            None => position.top.unwrap_or(0.0),
        };

        let mut entries = Vec::with_capacity(measured.len());
        let mut y = top + LEGEND_PADDING;
        for (name, extents) in measured {
            let x = left + LEGEND_PADDING;
            entries.push(LegendEntry {
                series_name: name.to_owned(),
                bullet: Area::new(x, y, LEGEND_BULLET_SIZE, LEGEND_BULLET_SIZE),
                text_x: x + LEGEND_BULLET_SIZE + LEGEND_PADDING,
                text_center_y: y + LEGEND_BULLET_SIZE / 2.0,
                text: extents,
            });
            y += row_height(&extents);
        }

        Self {
            frame: Area::new(left, top, width, height),
            entries,
        }
    }
}
