pub mod bar_series;
pub mod layout;
pub mod line_series;
pub mod pie;
pub mod primitives;
pub mod radial;
pub mod scale;
pub mod ticks;
pub mod types;

pub use bar_series::{
    BarGeometry, BarLayoutMetrics, BarOrientation, BarRect, project_bars, project_stacked_bars,
};
pub use layout::{
    Area, AxisLayoutInput, ChartLayout, FontSpec, HeuristicTextMeasurer, LayoutRequest,
    LegendEntry, LegendLayout, LegendPosition, Padding, TextExtents, TextHAlign, TextMeasurer,
    TextVAlign,
};
pub use line_series::{LinePath, PathVertex, Point, build_line_paths, project_line_points};
pub use pie::{
    PieLabel, PieLayout, PieLayoutRequest, PieQuadrant, Slice, SliceLabel, project_slices,
    slice_labels,
};
pub use radial::{
    RadialPoint, RadialRing, RadialSpoke, RadialTickLabel, project_radial_points, radial_rings,
    radial_spokes, radial_tick_labels,
};
pub use scale::{
    AxisRange, ResolvedScales, resolve_axis_range, resolve_categorical_scales, resolve_scales,
    resolve_stacked_scales,
};
pub use ticks::{
    AxisDirection, LabeledTick, Tick, TickOption, TickRules, categorical_ticks,
    center_in_category_slots, generate_ticks, swap_for_horizontal_bars,
};
pub use types::{DataPoint, Series, SeriesSet, Viewport};
