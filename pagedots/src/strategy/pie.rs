use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::IndicatorOptions;
use crate::layout::{Constraints, Size};
use crate::position::Metrics;

use super::{RenderStrategy, px};

/// A single wedge whose sweep follows overall progress.
#[derive(Debug, Clone)]
pub struct PieProgress {
    size: f32,
    start_angle: f32,
    color: Color,
}

impl PieProgress {
    pub fn new(options: &IndicatorOptions) -> Self {
        Self {
            size: options.pie_size,
            start_angle: options.pie_start_angle,
            color: options.pie_color,
        }
    }

    /// Sweep in degrees for the given metrics.
    pub fn sweep(metrics: &Metrics) -> f32 {
        360.0 * metrics.progress()
    }
}

impl RenderStrategy for PieProgress {
    fn name(&self) -> &str {
        "pie"
    }

    fn slot_count(&self, _item_count: usize) -> usize {
        1
    }

    fn measure(&self, _index: usize, _metrics: &Metrics, constraints: Constraints) -> Size {
        let side = px(self.size);
        constraints.constrain(Size::new(side, side))
    }

    fn draw(&self, canvas: &mut dyn Canvas, size: Size, _index: usize, metrics: &Metrics) {
        let radius = size.width.min(size.height) as f32 / 2.0;
        canvas.fill_wedge(
            size.width as f32 / 2.0,
            size.height as f32 / 2.0,
            radius,
            self.start_angle,
            Self::sweep(metrics),
            self.color,
        );
    }

    fn apply_options(&mut self, options: &IndicatorOptions) {
        *self = Self::new(options);
    }
}
