//! Code-point text buffer with cursor tracking.
//!
//! The buffer stores Unicode scalar values in document order and a cursor in
//! `[0, len]`. The one-past-end position is a valid edit point. Line spans are
//! a pure projection of the content (see [`line::derive_lines`]).
//!
//! Trailing line state: when the content ends in a line break and the cursor
//! equals `len`, the cursor sits on the synthetic empty line after that break
//! ([`TextBuffer::at_end`]). The flag is derived from the cursor and content
//! rather than stored, so no mutation can leave it stale.
//!
//! Every operation is total. Moves and deletes that cannot apply return
//! `false` and leave the buffer untouched.

use std::num::NonZeroUsize;
use tracing::trace;

pub mod line;
pub use line::{LINE_BREAK, LineSpan, derive_lines};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    codepoints: Vec<char>,
    cursor: usize,
    wrap_width: Option<NonZeroUsize>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer that soft-wraps lines after `width` code points (0 disables wrapping).
    pub fn with_wrap_width(width: usize) -> Self {
        Self {
            wrap_width: NonZeroUsize::new(width),
            ..Self::default()
        }
    }

    /// `None` disables soft wrapping.
    pub fn set_wrap_width(&mut self, width: Option<NonZeroUsize>) {
        self.wrap_width = width;
    }

    pub fn wrap_width(&self) -> Option<NonZeroUsize> {
        self.wrap_width
    }

    /// Replace all content and move the cursor to end of buffer.
    pub fn set_text(&mut self, s: &str) {
        self.codepoints = s.chars().collect();
        trace!(target: "text.buffer", len = self.codepoints.len(), "set_text");
        self.cursor_move_eof();
    }

    /// Serialize the code points back into a `String`.
    pub fn text(&self) -> String {
        self.codepoints.iter().collect()
    }

    pub fn codepoints(&self) -> &[char] {
        &self.codepoints
    }

    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Place the cursor at `idx`, clamped to `len`.
    pub fn set_cursor(&mut self, idx: usize) {
        self.cursor = idx.min(self.codepoints.len());
    }

    pub fn has_trailing_line_break(&self) -> bool {
        self.codepoints.last() == Some(&LINE_BREAK)
    }

    /// Cursor is on the synthetic empty line after a trailing line break.
    pub fn at_end(&self) -> bool {
        self.cursor == self.codepoints.len() && self.has_trailing_line_break()
    }

    pub fn lines(&self) -> Vec<LineSpan> {
        derive_lines(&self.codepoints, self.wrap_width)
    }

    pub fn line_count(&self) -> usize {
        self.lines().len()
    }

    /// `(cursor, line_index)`.
    pub fn position(&self) -> (usize, usize) {
        let lines = self.lines();
        (self.cursor, self.line_index_in(&lines))
    }

    /// Span of the line holding the cursor.
    pub fn current_line(&self) -> LineSpan {
        let lines = self.lines();
        lines[self.line_index_in(&lines)]
    }

    /// Code point under the cursor; `None` at end of buffer.
    pub fn rune_at_cursor(&self) -> Option<char> {
        self.codepoints.get(self.cursor).copied()
    }

    // `lines` is never empty, so the fallback index is always valid.
    fn line_index_in(&self, lines: &[LineSpan]) -> usize {
        let last = lines.len() - 1;
        if self.at_end() {
            return last;
        }
        lines
            .iter()
            .position(|l| l.contains(self.cursor))
            .unwrap_or(last)
    }

    /// Insert `c` before the cursor and advance past it.
    pub fn insert(&mut self, c: char) {
        self.codepoints.insert(self.cursor, c);
        self.cursor += 1;
        trace!(
            target: "text.buffer",
            cursor = self.cursor,
            len = self.codepoints.len(),
            line_break = c == LINE_BREAK,
            "insert"
        );
    }

    /// Delete the code point under the cursor.
    pub fn remove(&mut self) -> bool {
        if self.cursor >= self.codepoints.len() {
            return false;
        }
        let removed = self.codepoints.remove(self.cursor);
        self.clamp_cursor();
        trace!(
            target: "text.buffer",
            cursor = self.cursor,
            len = self.codepoints.len(),
            line_break = removed == LINE_BREAK,
            "remove"
        );
        true
    }

    /// Delete the whole line under the cursor, including its line break. The
    /// cursor index is kept and clamped to the new length.
    pub fn remove_current_line(&mut self) -> bool {
        let line = self.current_line();
        let len = self.codepoints.len();
        if line.start >= len {
            return false;
        }
        let end = line.end.min(len - 1);
        self.codepoints.drain(line.start..=end);
        self.clamp_cursor();
        trace!(
            target: "text.buffer",
            start = line.start,
            end,
            len = self.codepoints.len(),
            "remove_line"
        );
        true
    }

    fn clamp_cursor(&mut self) {
        if self.cursor > self.codepoints.len() {
            self.cursor = self.codepoints.len();
        }
    }

    pub fn cursor_move_left(&mut self) -> bool {
        if self.cursor == 0 || self.at_end() {
            return false;
        }
        if self.codepoints.get(self.cursor - 1) == Some(&LINE_BREAK) {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn cursor_move_right(&mut self) -> bool {
        match self.codepoints.get(self.cursor) {
            None | Some(&LINE_BREAK) => false,
            Some(_) => {
                self.cursor += 1;
                true
            }
        }
    }

    pub fn cursor_move_up(&mut self) -> bool {
        let lines = self.lines();
        if self.at_end() {
            // Leave the synthetic line for the start of the last real line.
            let Some(prev) = lines.len().checked_sub(2).map(|i| lines[i]) else {
                return false;
            };
            self.cursor = prev.start;
            return true;
        }
        let idx = self.line_index_in(&lines);
        if idx == 0 {
            return false;
        }
        let column = lines[idx].column_of(self.cursor);
        let target = lines[idx - 1];
        self.cursor = (target.start + column).min(target.end);
        true
    }

    pub fn cursor_move_down(&mut self) -> bool {
        let lines = self.lines();
        let idx = self.line_index_in(&lines);
        let target_idx = idx + 1;
        if target_idx >= lines.len() {
            return false;
        }
        if target_idx == lines.len() - 1 && self.has_trailing_line_break() {
            // No column on the synthetic line.
            self.cursor = self.codepoints.len();
            return true;
        }
        let column = lines[idx].column_of(self.cursor);
        let target = lines[target_idx];
        self.cursor = (target.start + column).min(target.end);
        true
    }

    pub fn cursor_move_bol(&mut self) {
        self.cursor = self.current_line().start;
    }

    pub fn cursor_move_eol(&mut self) {
        self.cursor = self.current_line().end;
    }

    pub fn cursor_move_bof(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_move_eof(&mut self) {
        self.cursor = self.codepoints.len();
    }
}
