//! Cell-addressed drawing targets.

/// Visual treatment of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStyle {
    #[default]
    Normal,
    /// The cursor cell (yellow background, black foreground on a terminal).
    Cursor,
}

/// Anything that can receive one character per cell.
///
/// `None` means the cell is blank: past the end of a line, past the end of the
/// buffer, or a line break.
pub trait RenderSurface {
    fn set_cell(&mut self, col: u16, row: u16, ch: Option<char>, style: CellStyle);
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn set_cell(&mut self, col: u16, row: u16, ch: Option<char>, style: CellStyle) {
        (**self).set_cell(col, row, ch, style);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub ch: Option<char>,
    pub style: CellStyle,
}

/// In-memory surface. Out-of-range writes are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    pub width: u16,
    pub height: u16,
    cells: Vec<Cell>,
    writes: usize,
}

impl CellGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
            writes: 0,
        }
    }

    #[inline]
    fn index(&self, col: u16, row: u16) -> Option<usize> {
        (col < self.width && row < self.height)
            .then(|| usize::from(row) * usize::from(self.width) + usize::from(col))
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Number of `set_cell` calls received, including dropped ones.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Row contents with blanks as spaces, trailing blanks kept.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.width)
            .filter_map(|col| self.cell(col, row))
            .map(|c| c.ch.unwrap_or(' '))
            .collect()
    }

    /// All rows, trailing blanks trimmed (snapshot helper).
    pub fn lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| self.row_text(row).trim_end().to_string())
            .collect()
    }

    /// Position of the first cell styled as cursor.
    pub fn cursor_cell(&self) -> Option<(u16, u16)> {
        let idx = self.cells.iter().position(|c| c.style == CellStyle::Cursor)?;
        let width = usize::from(self.width);
        Some(((idx % width) as u16, (idx / width) as u16))
    }
}

impl RenderSurface for CellGrid {
    fn set_cell(&mut self, col: u16, row: u16, ch: Option<char>, style: CellStyle) {
        self.writes += 1;
        if let Some(i) = self.index(col, row) {
            self.cells[i] = Cell { ch, style };
        }
    }
}

/// Translates a pane rectangle onto a larger surface.
pub struct OffsetSurface<'a, S: RenderSurface + ?Sized> {
    inner: &'a mut S,
    col: u16,
    row: u16,
}

impl<'a, S: RenderSurface + ?Sized> OffsetSurface<'a, S> {
    pub fn new(inner: &'a mut S, col: u16, row: u16) -> Self {
        Self { inner, col, row }
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for OffsetSurface<'_, S> {
    fn set_cell(&mut self, col: u16, row: u16, ch: Option<char>, style: CellStyle) {
        self.inner.set_cell(
            col.saturating_add(self.col),
            row.saturating_add(self.row),
            ch,
            style,
        );
    }
}
