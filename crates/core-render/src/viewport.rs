//! Scrolling window into a buffer.
//!
//! The viewport only moves when the cursor leaves it, and only along the axis
//! and in the direction of the cursor's own motion. Each rule reads one
//! boundary:
//!
//! * Left: cursor column before `x_scroll` → align `x_scroll` to the column.
//! * Right: cursor column at or past `x_scroll + width` → last visible column.
//! * Up: cursor line above `y_scroll` → align `y_scroll` to the line.
//! * Down: cursor line at or past `y_scroll + height` → last visible row.

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDir {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalDir {
    Up,
    Down,
}

impl HorizontalDir {
    /// Direction implied by a column change (no change counts as Right).
    pub fn between(old_col: usize, new_col: usize) -> Self {
        if new_col < old_col {
            HorizontalDir::Left
        } else {
            HorizontalDir::Right
        }
    }
}

impl VerticalDir {
    /// Direction implied by a line change (no change counts as Down).
    pub fn between(old_line: usize, new_line: usize) -> Self {
        if new_line < old_line {
            VerticalDir::Up
        } else {
            VerticalDir::Down
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x_scroll: usize,
    pub y_scroll: usize,
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            x_scroll: 0,
            y_scroll: 0,
            width,
            height,
        }
    }

    /// Apply the horizontal rule for `column` (cursor offset from its line start).
    pub fn scroll_horizontal(&mut self, dir: HorizontalDir, column: usize) {
        let before = self.x_scroll;
        match dir {
            HorizontalDir::Left => {
                if column < self.x_scroll {
                    self.x_scroll = column;
                }
            }
            HorizontalDir::Right => {
                if self.width > 0 && column >= self.x_scroll + self.width {
                    self.x_scroll = column + 1 - self.width;
                }
            }
        }
        if before != self.x_scroll {
            trace!(target: "editor.viewport", from = before, to = self.x_scroll, ?dir, "x_scroll");
        }
    }

    /// Apply the vertical rule for the cursor's line index.
    pub fn scroll_vertical(&mut self, dir: VerticalDir, line: usize) {
        let before = self.y_scroll;
        match dir {
            VerticalDir::Up => {
                if self.y_scroll > line {
                    self.y_scroll = line;
                }
            }
            VerticalDir::Down => {
                if self.height > 0 && line + 1 > self.y_scroll + self.height {
                    self.y_scroll = line + 1 - self.height;
                }
            }
        }
        if before != self.y_scroll {
            trace!(target: "editor.viewport", from = before, to = self.y_scroll, ?dir, "y_scroll");
        }
    }

    /// Update both axes after the cursor moved from `old` to `new`, each given
    /// as `(column, line_index)`.
    pub fn follow(&mut self, old: (usize, usize), new: (usize, usize)) {
        self.scroll_horizontal(HorizontalDir::between(old.0, new.0), new.0);
        self.scroll_vertical(VerticalDir::between(old.1, new.1), new.1);
    }

    /// Change the window size, then pull the window back over the cursor.
    pub fn resize(&mut self, width: usize, height: usize, cursor: (usize, usize)) {
        self.width = width;
        self.height = height;
        self.scroll_horizontal(HorizontalDir::Right, cursor.0);
        self.scroll_horizontal(HorizontalDir::Left, cursor.0);
        self.scroll_vertical(VerticalDir::Down, cursor.1);
        self.scroll_vertical(VerticalDir::Up, cursor.1);
    }

    pub fn contains(&self, column: usize, line: usize) -> bool {
        column >= self.x_scroll
            && column < self.x_scroll + self.width
            && line >= self.y_scroll
            && line < self.y_scroll + self.height
    }
}
