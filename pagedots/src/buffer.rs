//! Cell grid that [`CellCanvas`](crate::canvas::CellCanvas) paints into and
//! [`Terminal`](crate::terminal::Terminal) flushes.

use unicode_width::UnicodeWidthChar;

use crate::color::Color;

/// One glyph on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
    /// Right half of a double-width glyph to its left.
    pub continuation: bool,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        color: Color::WHITE,
        continuation: false,
    };
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.offset(x as i32, y as i32).map(|idx| &self.cells[idx])
    }

    /// Write `glyph` at `(x, y)`. Out-of-grid writes are dropped.
    pub fn put(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        let Some(idx) = self.offset(x, y) else {
            return;
        };
        self.cells[idx] = Cell {
            glyph,
            color,
            continuation: false,
        };

        if UnicodeWidthChar::width(glyph).unwrap_or(1) > 1 {
            if let Some(next) = self.offset(x + 1, y) {
                self.cells[next] = Cell {
                    continuation: true,
                    ..Cell::BLANK
                };
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Cells of `self` that differ from `previous`, with their coordinates.
    pub fn changes<'a>(
        &'a self,
        previous: &'a Buffer,
    ) -> impl Iterator<Item = (u16, u16, &'a Cell)> + 'a {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(idx, (cell, _))| ((idx % width) as u16, (idx / width) as u16, cell))
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = u16::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u16::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }
}
