mod null_renderer;
mod primitives;
mod scene;

pub use null_renderer::NullRenderer;
pub use primitives::Color;
pub use scene::{ChartScene, ChartShapes, SceneAxis, SceneLayout, SceneStyle, StrokeStyle};

use crate::core::{TextMeasurer, Viewport};
use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends report their surface size, measure text for the layout pass and
/// receive a fully evaluated `ChartScene`. Their own failures should be wrapped
/// with [`ChartError::surface`](crate::ChartError::surface); they reach the
/// caller unchanged.
pub trait Renderer: TextMeasurer {
    fn viewport(&self) -> Viewport;

    fn render(&mut self, scene: &ChartScene) -> ChartResult<()>;
}
