//! Rendering strategies.
//!
//! A strategy turns [`Metrics`] into visuals for each slot. It owns no pager
//! state: the controller hands it a fresh `Metrics` value on every measure
//! and draw call, and strategies never reach back into the controller.

mod color_only;
mod custom;
mod ignore_range;
mod percent;
mod pie;
mod resizing;

pub use color_only::ColorOnlyDots;
pub use custom::{CustomDots, DrawFn, MeasureFn};
pub use ignore_range::IgnoreRangeDots;
pub use percent::PercentLabel;
pub use pie::PieProgress;
pub use resizing::ResizingDots;

use crate::canvas::Canvas;
use crate::config::{IndicatorOptions, IndicatorStyle};
use crate::gesture::{SwipeContext, default_swipe_delta};
use crate::layout::{Constraints, Size};
use crate::position::Metrics;

/// Per-slot measure and draw callbacks for one visual style.
pub trait RenderStrategy {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Number of slots to keep for `item_count` pages.
    fn slot_count(&self, item_count: usize) -> usize {
        item_count
    }

    /// Size of the slot at `index`.
    fn measure(&self, index: usize, metrics: &Metrics, constraints: Constraints) -> Size;

    /// Paint the slot at `index`. Coordinates are relative to the slot.
    fn draw(&self, canvas: &mut dyn Canvas, size: Size, index: usize, metrics: &Metrics);

    /// Container pixels to drag for a finger move on the indicator.
    fn swipe_delta(&self, ctx: &SwipeContext) -> Option<f32> {
        default_swipe_delta(ctx)
    }

    /// Pick up new option values.
    fn apply_options(&mut self, options: &IndicatorOptions);
}

/// Build the strategy for `style`.
pub fn strategy_for(style: IndicatorStyle, options: &IndicatorOptions) -> Box<dyn RenderStrategy> {
    match style {
        IndicatorStyle::Resizing => Box::new(ResizingDots::new(options)),
        IndicatorStyle::ColorOnly => Box::new(ColorOnlyDots::new(options)),
        IndicatorStyle::Pie => Box::new(PieProgress::new(options)),
        IndicatorStyle::Percent => Box::new(PercentLabel::new(options)),
        IndicatorStyle::IgnoreRange => Box::new(IgnoreRangeDots::new(options)),
    }
}

/// How close a dot is to full size: 1 at the current position, falling
/// linearly to 0 at `span` dots away.
pub fn resize_fraction(distance: f32, span: u32) -> f32 {
    if span == 0 {
        return if distance == 0.0 { 1.0 } else { 0.0 };
    }
    let span = span as f32;
    1.0 - distance.min(span) / span
}

pub(crate) fn px(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.ceil() as u32
    } else {
        0
    }
}
