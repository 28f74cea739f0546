//! Rendering: map a buffer through a viewport onto a cell surface.
//!
//! Painting is a full redraw of the visible rectangle: `paint` issues exactly
//! one `set_cell` per cell, row-major, so surfaces never hold stale content
//! and need no diffing. Line breaks and positions past a line's end render
//! blank. The cursor is a style on the cell it occupies, which may be a blank
//! cell (a line break, or one past the last code point).

pub mod status;
pub mod surface;
pub mod viewport;

pub use status::{StatusContext, StatusSegment, build_status, compose_status, draw_status, format_status};
pub use surface::{Cell, CellGrid, CellStyle, OffsetSurface, RenderSurface};
pub use viewport::{HorizontalDir, VerticalDir, Viewport};

use core_text::{LINE_BREAK, TextBuffer};
use tracing::trace;

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

/// Paint the visible part of `buffer` onto `surface`.
pub fn paint<S: RenderSurface + ?Sized>(
    surface: &mut S,
    buffer: &TextBuffer,
    viewport: &Viewport,
    show_cursor: bool,
) {
    let lines = buffer.lines();
    let cps = buffer.codepoints();
    let (cursor, cursor_line) = buffer.position();
    let cursor_col = lines
        .get(cursor_line)
        .map_or(0, |l| l.column_of(cursor));
    let cursor_cell = (show_cursor && viewport.contains(cursor_col, cursor_line))
        .then_some((cursor_col, cursor_line));
    let width = clamp_u16(viewport.width);
    let height = clamp_u16(viewport.height);

    for row in 0..height {
        let line_idx = viewport.y_scroll + usize::from(row);
        let line = lines.get(line_idx);
        for col in 0..width {
            let column = viewport.x_scroll + usize::from(col);
            let ch = line
                .and_then(|l| {
                    let idx = l.start + column;
                    if idx <= l.end { cps.get(idx).copied() } else { None }
                })
                .filter(|&c| c != LINE_BREAK);
            let style = if cursor_cell == Some((column, line_idx)) {
                CellStyle::Cursor
            } else {
                CellStyle::Normal
            };
            surface.set_cell(col, row, ch, style);
        }
    }
    trace!(
        target: "render",
        width,
        height,
        x_scroll = viewport.x_scroll,
        y_scroll = viewport.y_scroll,
        "paint"
    );
}
