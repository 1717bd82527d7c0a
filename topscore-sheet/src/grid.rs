use std::collections::HashMap;

/// Uniform read access to a worksheet, 1-indexed like the sheet's own
/// row numbers and column letters (row 1, column 2 is `B1`).
pub trait Worksheet {
    /// Highest row number that may hold data.
    fn max_row(&self) -> usize;

    /// Text of a cell, or `None` when the cell is empty or out of range.
    fn cell(&self, row: usize, col: usize) -> Option<&str>;
}

/// In-memory worksheet holding only non-empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: HashMap<(usize, usize), String>,
    max_row: usize,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from row-major text, starting at row 1, column 1.
    /// Empty strings are treated as empty cells.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let mut grid = Self::new();
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                grid.set(r + 1, c + 1, value.as_ref());
            }
            grid.max_row = grid.max_row.max(r + 1);
        }
        grid
    }

    /// Store a value at a 1-indexed position. Empty values clear the cell
    /// but still extend the row range.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        let value = value.into();
        self.max_row = self.max_row.max(row);
        if value.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }

    /// Extend the row range without storing anything (trailing blank rows).
    pub fn extend_rows(&mut self, max_row: usize) {
        self.max_row = self.max_row.max(max_row);
    }
}

impl Worksheet for Grid {
    fn max_row(&self) -> usize {
        self.max_row
    }

    fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(&(row, col)).map(String::as_str)
    }
}
