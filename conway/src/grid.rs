// grid.rs - Grid storage for Conway's Game of Life

use std::fmt;
use std::ops::Index;

use crate::error::{EngineError, Result};

/// Fixed-size rectangular matrix of cells, stored row-major.
///
/// Dimensions are fixed at construction; every accessor assumes
/// `row < rows` and `col < cols` and panics otherwise, the same way slice
/// indexing does. Use [`Grid::contains`] to check externally supplied indices.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid of `rows` x `cols`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Builds a grid from row slices, mostly useful for fixtures.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Self::new(rows.len(), cols)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(EngineError::InvalidDimensions {
                    rows: rows.len(),
                    cols: row.len(),
                });
            }
            grid.cells[i * cols..(i + 1) * cols].copy_from_slice(row);
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.offset(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let offset = self.offset(row, col);
        self.cells[offset] = alive;
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let offset = self.offset(row, col);
        self.cells[offset] = !self.cells[offset];
        self.cells[offset]
    }

    /// Kills every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Coordinates of every live cell, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(offset, _)| (offset / cols, offset % cols))
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = bool;

    fn index(&self, (row, col): (usize, usize)) -> &bool {
        &self.cells[self.offset(row, col)]
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}

/// One text line per row, `#` alive and `.` dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
