mod chart;
mod options;
mod validation;

pub use chart::{Chart, ChartKind};
pub use options::{
    AxisOptions, AxisSideOptions, BackgroundOptions, ChartOptions, ColorSchemeArgs,
    ColorSchemeName, ColorSchemeOptions, LegendOptions, StrokeOptions,
};
