use crate::core::{FontSpec, HeuristicTextMeasurer, TextExtents, TextMeasurer, Viewport};
use crate::error::ChartResult;
use crate::render::{ChartScene, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates scene content so tests can catch invalid geometry before
/// a real backend is plugged in. Text is measured with
/// [`HeuristicTextMeasurer`].
#[derive(Debug)]
pub struct NullRenderer {
    viewport: Viewport,
    measurer: HeuristicTextMeasurer,
    pub last_shape_count: usize,
    pub last_tick_count: usize,
    pub render_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            measurer: HeuristicTextMeasurer,
            last_shape_count: 0,
            last_tick_count: 0,
            render_count: 0,
        }
    }
}

impl TextMeasurer for NullRenderer {
    fn measure(&self, text: &str, font: &FontSpec) -> TextExtents {
        self.measurer.measure(text, font)
    }
}

impl Renderer for NullRenderer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn render(&mut self, scene: &ChartScene) -> ChartResult<()> {
        scene.validate()?;
        self.last_shape_count = scene.shapes.shape_count();
        self.last_tick_count = scene.tick_count();
        self.render_count += 1;
        Ok(())
    }
}
