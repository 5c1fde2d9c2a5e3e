use unicode_width::UnicodeWidthStr;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::IndicatorOptions;
use crate::layout::{Constraints, Size};
use crate::position::Metrics;

use super::RenderStrategy;

/// Widest label the slot must fit.
const WIDEST_LABEL: &str = "100%";

/// A single text label showing progress as a percentage.
#[derive(Debug, Clone)]
pub struct PercentLabel {
    color: Color,
    /// Width of one text column on the target surface.
    glyph_width: u32,
    line_height: u32,
}

impl PercentLabel {
    pub fn new(options: &IndicatorOptions) -> Self {
        Self {
            color: options.active_color,
            glyph_width: 1,
            line_height: 1,
        }
    }

    /// Text metrics for surfaces that are not one cell per column.
    pub fn with_glyph_metrics(mut self, glyph_width: u32, line_height: u32) -> Self {
        self.glyph_width = glyph_width;
        self.line_height = line_height;
        self
    }

    /// Whole percent, halves rounded up.
    pub fn label(metrics: &Metrics) -> String {
        format!("{}%", (metrics.progress() * 100.0).round())
    }
}

impl RenderStrategy for PercentLabel {
    fn name(&self) -> &str {
        "percent"
    }

    fn slot_count(&self, _item_count: usize) -> usize {
        1
    }

    fn measure(&self, _index: usize, _metrics: &Metrics, constraints: Constraints) -> Size {
        let columns = WIDEST_LABEL.width() as u32;
        constraints.constrain(Size::new(columns * self.glyph_width, self.line_height))
    }

    fn draw(&self, canvas: &mut dyn Canvas, size: Size, _index: usize, metrics: &Metrics) {
        let label = Self::label(metrics);
        let text_width = (label.width() as u32 * self.glyph_width) as f32;
        // Right-aligned within the slot.
        let x = (size.width as f32 - text_width).max(0.0);
        canvas.draw_text(x, 0.0, &label, self.color);
    }

    fn apply_options(&mut self, options: &IndicatorOptions) {
        self.color = options.active_color;
    }
}
