use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{FontSpec, LegendPosition, Padding, TickOption};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::validation::validate_options;

const DEFAULT_FONT: &str = "Tahoma";

/// Options of one axis side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AxisSideOptions {
    pub hide: bool,
    pub ticks: Option<Vec<TickOption>>,
    pub tick_count: usize,
    pub tick_precision: u32,
    pub range: Option<[f64; 2]>,
    /// Tick label rotation in degrees.
    pub rotate: Option<f64>,
    pub label: Option<String>,
    /// Fixed tick spacing; `0` disables interval mode.
    pub interval: f64,
    pub show_lines: bool,
}

impl AxisSideOptions {
    fn with_grid_lines(show_lines: bool) -> Self {
        Self {
            hide: false,
            ticks: None,
            tick_count: 10,
            tick_precision: 1,
            range: None,
            rotate: None,
            label: None,
            interval: 0.0,
            show_lines,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AxisOptions {
    pub line_width: f64,
    pub line_color: Color,
    pub tick_size: f64,
    pub label_color: Color,
    pub label_font: String,
    pub label_font_size: f64,
    pub tick_font: String,
    pub tick_font_size: f64,
    pub x: AxisSideOptions,
    pub y: AxisSideOptions,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            line_color: Color::from_rgb8(0x0f, 0x00, 0x00),
            tick_size: 3.0,
            label_color: Color::from_rgb8(0x66, 0x66, 0x66),
            label_font: DEFAULT_FONT.to_owned(),
            label_font_size: 9.0,
            tick_font: DEFAULT_FONT.to_owned(),
            tick_font_size: 9.0,
            x: AxisSideOptions::with_grid_lines(false),
            y: AxisSideOptions::with_grid_lines(true),
        }
    }
}

impl AxisOptions {
    #[must_use]
    pub fn label_font_spec(&self) -> FontSpec {
        FontSpec::new(self.label_font.clone(), self.label_font_size)
    }

    #[must_use]
    pub fn tick_font_spec(&self) -> FontSpec {
        FontSpec::new(self.tick_font.clone(), self.tick_font_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BackgroundOptions {
    pub hide: bool,
    pub base_color: Option<Color>,
    pub chart_color: Color,
    pub line_color: Color,
    pub line_width: f64,
}

impl Default for BackgroundOptions {
    fn default() -> Self {
        Self {
            hide: false,
            base_color: None,
            chart_color: Color::from_rgb8(0xf5, 0xf5, 0xf5),
            line_color: Color::from_rgb8(0xff, 0xff, 0xff),
            line_width: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LegendOptions {
    pub hide: bool,
    pub position: LegendPosition,
    pub opacity: f64,
    pub border_color: Color,
    pub border_width: f64,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            hide: false,
            position: LegendPosition::default(),
            opacity: 0.8,
            border_color: Color::from_rgb8(0x00, 0x00, 0x00),
            border_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StrokeOptions {
    pub color: Color,
    pub hide: bool,
    pub shadow: bool,
    pub width: f64,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0xff, 0xff, 0xff),
            hide: false,
            shadow: true,
            width: 2.0,
        }
    }
}

/// Name of the color scheme a backend should use for series colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemeName {
    #[default]
    Gradient,
    Fixed,
    Rainbow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorSchemeArgs {
    pub initial_color: Color,
    pub colors: Option<Vec<Color>>,
}

impl Default for ColorSchemeArgs {
    fn default() -> Self {
        Self {
            initial_color: Color::from_rgb8(0x3c, 0x58, 0x1a),
            colors: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorSchemeOptions {
    pub name: ColorSchemeName,
    pub args: ColorSchemeArgs,
}

/// Complete chart configuration.
///
/// Keys are camelCase in serialized form. Partial overrides are applied with
/// [`ChartOptions::merge`]; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartOptions {
    pub axis: AxisOptions,
    pub background: BackgroundOptions,
    pub color_scheme: ColorSchemeOptions,
    pub legend: LegendOptions,
    pub padding: Padding,
    pub stroke: StrokeOptions,
    pub fill_opacity: f64,
    pub should_fill: bool,
    pub bar_width_fill_fraction: f64,
    /// Initial pie radius as a share of the smaller chart dimension.
    pub pie_radius: Option<f64>,
    pub title: Option<String>,
    pub title_color: Color,
    pub title_font: String,
    pub title_font_size: f64,
    pub encoding: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            axis: AxisOptions::default(),
            background: BackgroundOptions::default(),
            color_scheme: ColorSchemeOptions::default(),
            legend: LegendOptions::default(),
            padding: Padding::default(),
            stroke: StrokeOptions::default(),
            fill_opacity: 1.0,
            should_fill: true,
            bar_width_fill_fraction: 0.75,
            pie_radius: None,
            title: None,
            title_color: Color::from_rgb8(0x00, 0x00, 0x00),
            title_font: DEFAULT_FONT.to_owned(),
            title_font_size: 12.0,
            encoding: "utf-8".to_owned(),
        }
    }
}

impl ChartOptions {
    /// Parses a JSON document of partial overrides on top of the defaults.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let overrides: Value = serde_json::from_str(json)
            .map_err(|err| ChartError::Configuration(format!("malformed options: {err}")))?;
        Self::default().merged(overrides)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::Configuration(format!("cannot serialize options: {err}")))
    }

    /// Applies partial overrides in place.
    ///
    /// Objects merge key by key, recursively; any other value replaces the
    /// current one. On error the options are left untouched.
    pub fn merge(&mut self, overrides: Value) -> ChartResult<()> {
        *self = self.clone().merged(overrides)?;
        Ok(())
    }

    /// Consuming form of [`merge`](Self::merge).
    pub fn merged(self, overrides: Value) -> ChartResult<Self> {
        if !overrides.is_object() {
            return Err(ChartError::Configuration(
                "option overrides must be a JSON object".to_owned(),
            ));
        }
        let mut current = serde_json::to_value(&self)
            .map_err(|err| ChartError::Configuration(format!("cannot serialize options: {err}")))?;
        merge_values(&mut current, overrides);
        let merged: Self = serde_json::from_value(current)
            .map_err(|err| ChartError::Configuration(err.to_string()))?;
        merged.validate()?;
        Ok(merged)
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_options(self)
    }

    #[must_use]
    pub fn title_font_spec(&self) -> FontSpec {
        FontSpec::new(self.title_font.clone(), self.title_font_size)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_bar_width_fill_fraction(mut self, fraction: f64) -> Self {
        self.bar_width_fill_fraction = fraction;
        self
    }

    #[must_use]
    pub fn with_should_fill(mut self, should_fill: bool) -> Self {
        self.should_fill = should_fill;
        self
    }

    #[must_use]
    pub fn with_pie_radius(mut self, fraction: f64) -> Self {
        self.pie_radius = Some(fraction);
        self
    }

    #[must_use]
    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.axis.x.range = Some([min, max]);
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.axis.y.range = Some([min, max]);
        self
    }

    #[must_use]
    pub fn with_x_ticks(mut self, ticks: Vec<TickOption>) -> Self {
        self.axis.x.ticks = Some(ticks);
        self
    }

    #[must_use]
    pub fn with_y_ticks(mut self, ticks: Vec<TickOption>) -> Self {
        self.axis.y.ticks = Some(ticks);
        self
    }

    #[must_use]
    pub fn with_legend_hidden(mut self, hide: bool) -> Self {
        self.legend.hide = hide;
        self
    }
}

fn merge_values(target: &mut Value, overrides: Value) {
    match (target, overrides) {
        (Value::Object(target), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match target.get_mut(&key) {
                    Some(slot) => merge_values(slot, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_merge_keeps_sibling_keys() {
        let mut target = json!({"axis": {"x": {"hide": false, "tickCount": 10}}});
        merge_values(&mut target, json!({"axis": {"x": {"hide": true}}}));
        assert_eq!(target, json!({"axis": {"x": {"hide": true, "tickCount": 10}}}));
    }

    #[test]
    fn null_override_clears_optional_values() {
        let options = ChartOptions::default().with_title("sales");
        let merged = options.merged(json!({"title": null})).expect("merge");
        assert_eq!(merged.title, None);
    }
}
