//! Screen partitioning into side-by-side panes plus a status row.
//!
//! Coordinates are terminal cells. Panes share the rows above the status row
//! and split the width evenly; the last pane absorbs the remainder. A
//! one-column separator sits between neighbouring panes. Degenerate sizes
//! produce zero-sized regions rather than errors.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl LayoutRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Layout {
    width: u16,
    height: u16,
    panes: Vec<LayoutRegion>,
    separators: Vec<u16>,
}

impl Layout {
    /// `count` panes side by side above a one-row status line.
    pub fn columns(width: u16, height: u16, count: u16) -> Self {
        let text_rows = height.saturating_sub(1);
        let count = count.max(1);
        let gaps = count - 1;
        let usable = width.saturating_sub(gaps);
        let base = usable / count;
        let mut panes = Vec::with_capacity(usize::from(count));
        let mut separators = Vec::with_capacity(usize::from(gaps));
        let mut x = 0u16;
        for i in 0..count {
            let w = if i + 1 == count {
                usable.saturating_sub(base * (count - 1))
            } else {
                base
            };
            panes.push(LayoutRegion::new(x, 0, w, text_rows));
            x = x.saturating_add(w);
            if i + 1 < count {
                separators.push(x);
                x = x.saturating_add(1);
            }
        }
        Self {
            width,
            height,
            panes,
            separators,
        }
    }

    pub fn panes(&self) -> &[LayoutRegion] {
        &self.panes
    }

    /// Columns holding the vertical separators.
    pub fn separators(&self) -> &[u16] {
        &self.separators
    }

    /// Row of the status line, `None` when the screen has no rows.
    pub fn status_row(&self) -> Option<u16> {
        self.height.checked_sub(1)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}
