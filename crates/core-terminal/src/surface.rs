//! Queues cell writes as crossterm commands on any `io::Write`.

use anyhow::Result;
use core_render::{CellStyle, RenderSurface};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Colors, Print, ResetColor, SetColors},
};
use std::io::{self, Write};

/// Cursor cell colors: black on yellow.
const CURSOR_COLORS: Colors = Colors {
    foreground: Some(Color::Black),
    background: Some(Color::Yellow),
};

/// `RenderSurface` over a crossterm writer.
///
/// `set_cell` cannot fail, so the first write error is held and reported by
/// [`CrosstermSurface::flush`]; writes after an error are skipped.
pub struct CrosstermSurface<W: Write> {
    out: W,
    /// Where the terminal cursor sits after the last print.
    next: Option<(u16, u16)>,
    style: CellStyle,
    error: Option<io::Error>,
}

impl<W: Write> CrosstermSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next: None,
            style: CellStyle::Normal,
            error: None,
        }
    }

    fn queue_cell(&mut self, col: u16, row: u16, ch: Option<char>, style: CellStyle) -> io::Result<()> {
        if self.next != Some((col, row)) {
            queue!(self.out, MoveTo(col, row))?;
        }
        if style != self.style {
            match style {
                CellStyle::Cursor => queue!(self.out, SetColors(CURSOR_COLORS))?,
                CellStyle::Normal => queue!(self.out, ResetColor)?,
            }
            self.style = style;
        }
        queue!(self.out, Print(ch.unwrap_or(' ')))?;
        self.next = Some((col.saturating_add(1), row));
        Ok(())
    }

    /// Reset colors and flush queued output, surfacing any held write error.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(error) = self.error.take() {
            return Err(error.into());
        }
        if self.style != CellStyle::Normal {
            queue!(self.out, ResetColor)?;
            self.style = CellStyle::Normal;
        }
        self.out.flush()?;
        self.next = None;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for CrosstermSurface<W> {
    fn set_cell(&mut self, col: u16, row: u16, ch: Option<char>, style: CellStyle) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.queue_cell(col, row, ch, style) {
            self.error = Some(error);
        }
    }
}
