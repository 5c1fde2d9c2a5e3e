//! Drawing surfaces handed to rendering strategies.
//!
//! Strategies only ever see `&mut dyn Canvas` with coordinates relative to
//! the slot being drawn. Real painting belongs to the host; this module ships
//! a recording canvas for tests and a cell canvas for terminal output.

use unicode_width::UnicodeWidthChar;

use crate::buffer::Buffer;
use crate::color::Color;

/// Minimal 2D painting surface.
pub trait Canvas {
    /// Fill a circle centred at `(cx, cy)`.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);

    /// Fill a pie wedge. Angles are in degrees, clockwise from three o'clock.
    fn fill_wedge(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    );

    /// Draw a single line of text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color);
}

/// Shifts every call by a fixed offset before forwarding it.
///
/// Used to turn slot-relative coordinates into surface coordinates.
pub struct Offset<'a> {
    inner: &'a mut dyn Canvas,
    dx: f32,
    dy: f32,
}

impl<'a> Offset<'a> {
    pub fn new(inner: &'a mut dyn Canvas, dx: f32, dy: f32) -> Self {
        Self { inner, dx, dy }
    }
}

impl Canvas for Offset<'_> {
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.inner
            .fill_circle(cx + self.dx, cy + self.dy, radius, color);
    }

    fn fill_wedge(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    ) {
        self.inner.fill_wedge(
            cx + self.dx,
            cy + self.dy,
            radius,
            start_angle,
            sweep_angle,
            color,
        );
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        self.inner.draw_text(x + self.dx, y + self.dy, text, color);
    }
}

/// A recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Color,
    },
    Wedge {
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        color: Color,
    },
}

/// Canvas that stores every call instead of painting.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Recorded circles only, in call order.
    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn fill_wedge(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    ) {
        self.ops.push(DrawOp::Wedge {
            cx,
            cy,
            radius,
            start_angle,
            sweep_angle,
            color,
        });
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }
}

const WEDGE_GLYPHS: [char; 5] = ['○', '◔', '◑', '◕', '●'];

/// Canvas over a cell [`Buffer`]; one pixel maps to one cell.
///
/// Shapes collapse to a single glyph at their centre.
pub struct CellCanvas<'a> {
    buffer: &'a mut Buffer,
}

impl<'a> CellCanvas<'a> {
    pub fn new(buffer: &'a mut Buffer) -> Self {
        Self { buffer }
    }
}

impl Canvas for CellCanvas<'_> {
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let glyph = if radius <= 0.0 {
            return;
        } else if radius < 0.75 {
            '·'
        } else if radius < 1.25 {
            '•'
        } else {
            '●'
        };
        self.buffer
            .put(cx.floor() as i32, cy.floor() as i32, glyph, color);
    }

    fn fill_wedge(
        &mut self,
        cx: f32,
        cy: f32,
        _radius: f32,
        _start_angle: f32,
        sweep_angle: f32,
        color: Color,
    ) {
        let quarters = (sweep_angle.clamp(0.0, 360.0) / 90.0).round() as usize;
        let glyph = WEDGE_GLYPHS[quarters.min(WEDGE_GLYPHS.len() - 1)];
        self.buffer
            .put(cx.floor() as i32, cy.floor() as i32, glyph, color);
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Color) {
        let mut col = x.floor() as i32;
        let row = y.floor() as i32;
        for ch in text.chars() {
            self.buffer.put(col, row, ch, color);
            col += UnicodeWidthChar::width(ch).unwrap_or(0) as i32;
        }
    }
}
