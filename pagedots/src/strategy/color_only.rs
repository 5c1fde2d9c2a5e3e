use crate::canvas::Canvas;
use crate::color::{Color, dot_color};
use crate::config::IndicatorOptions;
use crate::layout::{Constraints, Size};
use crate::position::Metrics;

use super::{RenderStrategy, px};

/// Fixed-size dots recolored by distance.
#[derive(Debug, Clone)]
pub struct ColorOnlyDots {
    size: f32,
    padding: f32,
    active: Color,
    inactive: Color,
}

impl ColorOnlyDots {
    pub fn new(options: &IndicatorOptions) -> Self {
        Self {
            size: options.dot_size,
            padding: options.dot_padding,
            active: options.active_color,
            inactive: options.inactive_color,
        }
    }
}

impl RenderStrategy for ColorOnlyDots {
    fn name(&self) -> &str {
        "color-only"
    }

    fn measure(&self, _index: usize, _metrics: &Metrics, constraints: Constraints) -> Size {
        let side = px(self.size);
        constraints.constrain(Size::new(side, side))
    }

    fn draw(&self, canvas: &mut dyn Canvas, size: Size, index: usize, metrics: &Metrics) {
        let distance = metrics.clamped().relative_distance(index);
        let radius = (size.width as f32 / 2.0 - self.padding).max(0.0);
        canvas.fill_circle(
            size.width as f32 / 2.0,
            size.height as f32 / 2.0,
            radius,
            dot_color(distance, self.active, self.inactive),
        );
    }

    fn apply_options(&mut self, options: &IndicatorOptions) {
        *self = Self::new(options);
    }
}
