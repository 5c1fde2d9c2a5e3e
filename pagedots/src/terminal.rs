//! Double-buffered crossterm output for cell canvases.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetForegroundColor},
    terminal,
};
use unicode_width::UnicodeWidthChar;

use crate::buffer::Buffer;
use crate::color::Color;

/// Raw-mode alternate screen with mouse capture, restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        self.current.size()
    }

    /// Wait up to `timeout` for input and return everything pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Cleared back buffer for the next frame, resized to the terminal.
    pub fn frame(&mut self) -> io::Result<&mut Buffer> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.current.size() {
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }
        self.current.clear();
        Ok(&mut self.current)
    }

    /// Write the cells that changed since the last frame.
    pub fn present(&mut self) -> io::Result<()> {
        let mut last: Option<(u16, u16, u16)> = None;
        let mut fg: Option<Color> = None;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.changes(&self.previous) {
            if cell.continuation {
                continue;
            }

            let sequential = matches!(last, Some((lx, ly, w)) if ly == y && lx + w == x);
            if !sequential {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            if fg != Some(cell.color) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.color)))?;
                fg = Some(cell.color);
            }

            write!(self.stdout, "{}", cell.glyph)?;
            let width = UnicodeWidthChar::width(cell.glyph).unwrap_or(1).max(1) as u16;
            last = Some((x, y, width));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }
}

fn to_crossterm(color: Color) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
