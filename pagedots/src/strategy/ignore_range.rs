use crate::canvas::Canvas;
use crate::config::IndicatorOptions;
use crate::gesture::SwipeContext;
use crate::layout::{Constraints, Size};
use crate::position::Metrics;

use super::{RenderStrategy, ResizingDots};

/// Resizing dots with the first and last few pages left out.
///
/// Hidden slots measure zero and never draw. With `hides` set, the whole
/// indicator disappears while the current position sits in a hidden range.
#[derive(Debug, Clone)]
pub struct IgnoreRangeDots {
    dots: ResizingDots,
    first: usize,
    last: usize,
    hides: bool,
}

impl IgnoreRangeDots {
    pub fn new(options: &IndicatorOptions) -> Self {
        Self {
            dots: ResizingDots::new(options),
            first: options.ignore_first,
            last: options.ignore_last,
            hides: options.ignore_hides,
        }
    }

    /// Whether the dot at `index` is suppressed for `item_count` pages.
    pub fn is_hidden(&self, index: usize, item_count: usize) -> bool {
        index < self.first || index >= item_count.saturating_sub(self.last)
    }

    /// Whether the current position lies before the first visible dot or
    /// past the last one.
    pub fn position_hidden(&self, metrics: &Metrics) -> bool {
        let absolute = metrics.absolute_position();
        let last_visible = metrics.item_count as f32 - self.last as f32 - 1.0;
        absolute < self.first as f32 || absolute > last_visible
    }
}

impl RenderStrategy for IgnoreRangeDots {
    fn name(&self) -> &str {
        "ignore-range"
    }

    fn measure(&self, index: usize, metrics: &Metrics, constraints: Constraints) -> Size {
        if self.is_hidden(index, metrics.item_count) {
            return Size::ZERO;
        }
        self.dots.measure(index, metrics, constraints)
    }

    fn draw(&self, canvas: &mut dyn Canvas, size: Size, index: usize, metrics: &Metrics) {
        if self.is_hidden(index, metrics.item_count) {
            return;
        }
        if self.hides && self.position_hidden(metrics) {
            return;
        }
        self.dots.draw(canvas, size, index, metrics);
    }

    fn swipe_delta(&self, ctx: &SwipeContext) -> Option<f32> {
        self.dots.swipe_delta(ctx)
    }

    fn apply_options(&mut self, options: &IndicatorOptions) {
        *self = Self::new(options);
    }
}
