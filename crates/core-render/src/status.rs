//! Status line composition.
//!
//! Format: `[MODE] <name> Ln X, Col Y | pane I/N`, where `<name>` is the base
//! file name of the seed file or `[No Name]`. Composition is two-stage:
//! `compose_status` yields ordered segments and `format_status` renders them,
//! so callers can inspect or drop segments before formatting.

use crate::surface::{CellStyle, RenderSurface};
use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::Path;

pub struct StatusContext<'a> {
    /// Mode label, e.g. "NORMAL".
    pub mode: &'static str,
    /// 0-based line index of the cursor.
    pub line: usize,
    /// 0-based column of the cursor within its line.
    pub col: usize,
    pub file_name: Option<&'a Path>,
    /// 0-based focused pane index and pane count; omitted when `None`.
    pub pane: Option<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Mode(&'static str),
    /// Leading space included.
    FileName(Cow<'a, str>),
    Position { line_1: usize, col_1: usize },
    Pane { index_1: usize, count: usize },
}

pub fn compose_status<'a>(ctx: &'a StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let name: Cow<'a, str> = match ctx.file_name.and_then(|p| p.file_name()) {
        Some(n) => format!(" {}", n.to_string_lossy()).into(),
        None => " [No Name]".into(),
    };
    let mut out = Vec::with_capacity(4);
    out.push(StatusSegment::Mode(ctx.mode));
    out.push(StatusSegment::FileName(name));
    out.push(StatusSegment::Position {
        line_1: ctx.line + 1,
        col_1: ctx.col + 1,
    });
    if let Some((index, count)) = ctx.pane {
        out.push(StatusSegment::Pane {
            index_1: index + 1,
            count,
        });
    }
    out
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    let mut s = String::with_capacity(48);
    for seg in segments {
        match seg {
            StatusSegment::Mode(m) => {
                s.push('[');
                s.push_str(m);
                s.push(']');
            }
            StatusSegment::FileName(name) => s.push_str(name),
            StatusSegment::Position { line_1, col_1 } => {
                let _ = write!(s, " Ln {line_1}, Col {col_1}");
            }
            StatusSegment::Pane { index_1, count } => {
                let _ = write!(s, " | pane {index_1}/{count}");
            }
        }
    }
    s
}

pub fn build_status(ctx: &StatusContext<'_>) -> String {
    format_status(&compose_status(ctx))
}

/// Write `text` into `row`, truncated or blank-padded to exactly `width` cells.
pub fn draw_status<S: RenderSurface + ?Sized>(surface: &mut S, row: u16, width: u16, text: &str) {
    let mut chars = text.chars();
    for col in 0..width {
        surface.set_cell(col, row, chars.next(), CellStyle::Normal);
    }
}
