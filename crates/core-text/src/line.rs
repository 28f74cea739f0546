//! Line span derivation.
//!
//! Spans are recomputed from the code points on every request. There is no
//! cached index to invalidate, so every mutation path observes the same
//! projection.

use std::num::NonZeroUsize;

/// Line break code point (value 10).
pub const LINE_BREAK: char = '\n';

/// Inclusive span `[start, end]` of code-point indices forming one line.
///
/// A span includes its terminating line break. The synthetic empty line that
/// follows a trailing line break (and the single line of an empty buffer) has
/// `start == end == len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx <= self.end
    }

    /// Column of `idx` relative to the start of this line.
    pub fn column_of(&self, idx: usize) -> usize {
        idx.saturating_sub(self.start)
    }
}

/// Split `codepoints` into line spans.
///
/// Every line break closes the current span. With `wrap_width` set a span is
/// additionally closed after `wrap_width` code points, unless the next code
/// point is a line break (which then closes the span itself) or nothing
/// follows. The result is never empty.
pub fn derive_lines(codepoints: &[char], wrap_width: Option<NonZeroUsize>) -> Vec<LineSpan> {
    let len = codepoints.len();
    let mut lines = Vec::new();
    let mut start = 0usize;
    for (i, &c) in codepoints.iter().enumerate() {
        if c == LINE_BREAK {
            lines.push(LineSpan::new(start, i));
            start = i + 1;
            continue;
        }
        if let Some(w) = wrap_width {
            let full = i + 1 - start == w.get();
            let more = i + 1 < len && codepoints[i + 1] != LINE_BREAK;
            if full && more {
                lines.push(LineSpan::new(start, i));
                start = i + 1;
            }
        }
    }
    if start < len {
        lines.push(LineSpan::new(start, len - 1));
    } else {
        // Empty buffer or trailing line break: one zero-length line at `len`.
        lines.push(LineSpan::new(len, len));
    }
    lines
}
