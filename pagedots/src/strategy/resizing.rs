use crate::canvas::Canvas;
use crate::color::{Color, dot_color};
use crate::config::IndicatorOptions;
use crate::easing::Interpolator;
use crate::gesture::SwipeContext;
use crate::layout::{Constraints, Size};
use crate::position::Metrics;

use super::{RenderStrategy, px, resize_fraction};

/// One dot per page. Dots grow toward the current position and take on the
/// active color within one page of it.
#[derive(Debug, Clone)]
pub struct ResizingDots {
    min_size: f32,
    max_size: f32,
    spacing: f32,
    span: u32,
    scale: f32,
    interpolator: Interpolator,
    active: Color,
    inactive: Color,
}

impl ResizingDots {
    pub fn new(options: &IndicatorOptions) -> Self {
        let mut dots = Self {
            min_size: 0.0,
            max_size: 0.0,
            spacing: 0.0,
            span: 0,
            scale: 1.0,
            interpolator: Interpolator::default(),
            active: Color::WHITE,
            inactive: Color::BLACK,
        };
        dots.apply_options(options);
        dots
    }

    /// Slot pitch: one max-size dot plus spacing.
    fn pitch(&self) -> f32 {
        (self.max_size + self.spacing) * self.scale
    }

    /// Dot radius and color for `index` under `metrics`.
    pub fn dot(&self, index: usize, metrics: &Metrics) -> (f32, Color) {
        let distance = metrics.clamped().relative_distance(index);
        let eased = self
            .interpolator
            .apply(resize_fraction(distance, self.span));
        let diameter = (self.max_size - self.min_size) * eased + self.min_size;
        let radius = (diameter * self.scale / 2.0).max(0.0);

        (radius, dot_color(distance, self.active, self.inactive))
    }
}

impl RenderStrategy for ResizingDots {
    fn name(&self) -> &str {
        "resizing"
    }

    fn measure(&self, _index: usize, _metrics: &Metrics, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(px(self.pitch()), px(self.max_size * self.scale)))
    }

    fn draw(&self, canvas: &mut dyn Canvas, size: Size, index: usize, metrics: &Metrics) {
        let (radius, color) = self.dot(index, metrics);
        canvas.fill_circle(size.width as f32 / 2.0, size.height as f32 / 2.0, radius, color);
    }

    fn swipe_delta(&self, ctx: &SwipeContext) -> Option<f32> {
        let pitch = self.pitch();
        (pitch > 0.0).then(|| ctx.distance_x / pitch * ctx.pager_width as f32)
    }

    fn apply_options(&mut self, options: &IndicatorOptions) {
        self.min_size = options.min_dot_size;
        self.max_size = options.max_dot_size;
        self.spacing = options.dot_spacing;
        self.span = options.resizing_span;
        self.scale = options.size_scale;
        self.interpolator = options.interpolator;
        self.active = options.active_color;
        self.inactive = options.inactive_color;
    }
}
