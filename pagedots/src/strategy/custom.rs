use std::rc::Rc;

use crate::canvas::Canvas;
use crate::config::IndicatorOptions;
use crate::layout::{Constraints, Size};
use crate::position::Metrics;

use super::RenderStrategy;

/// Host-supplied slot measurement.
pub type MeasureFn = Rc<dyn Fn(usize, &Metrics, Constraints) -> Size>;

/// Host-supplied slot painting.
pub type DrawFn = Rc<dyn Fn(&mut dyn Canvas, Size, usize, &Metrics)>;

/// One slot per page with host-provided visuals.
#[derive(Clone)]
pub struct CustomDots {
    name: String,
    measure: MeasureFn,
    draw: DrawFn,
}

impl CustomDots {
    pub fn new(
        name: impl Into<String>,
        measure: impl Fn(usize, &Metrics, Constraints) -> Size + 'static,
        draw: impl Fn(&mut dyn Canvas, Size, usize, &Metrics) + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            measure: Rc::new(measure),
            draw: Rc::new(draw),
        }
    }

    /// Every slot the same size.
    pub fn fixed(
        name: impl Into<String>,
        size: Size,
        draw: impl Fn(&mut dyn Canvas, Size, usize, &Metrics) + 'static,
    ) -> Self {
        Self::new(name, move |_, _, constraints| constraints.constrain(size), draw)
    }
}

impl RenderStrategy for CustomDots {
    fn name(&self) -> &str {
        &self.name
    }

    fn measure(&self, index: usize, metrics: &Metrics, constraints: Constraints) -> Size {
        (self.measure)(index, metrics, constraints)
    }

    fn draw(&self, canvas: &mut dyn Canvas, size: Size, index: usize, metrics: &Metrics) {
        (self.draw)(canvas, size, index, metrics);
    }

    fn apply_options(&mut self, _options: &IndicatorOptions) {}
}
