//! chart-geometry: data-to-geometry pipeline for 2D charts.
//!
//! Labeled numeric series are turned into a pixel-independent description of a
//! chart (bars, stacked bars, lines, pie slices, radial plots). Scales, ticks
//! and shapes live in a normalized `[0, 1]` space; the layout engine sizes the
//! surrounding areas in surface units. Drawing itself is delegated to a
//! [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartKind, ChartOptions};
pub use error::{ChartError, ChartResult};
