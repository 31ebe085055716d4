use ndarray::Array2;

use crate::shared::error::ClusterError;

/// `(row, col)` coordinate of a grid cell.
pub type Cell = (usize, usize);

/// Rectangular integer grid; any non-zero cell counts as filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<i32>,
}

impl Grid {
    /// Builds a grid from rows, rejecting rows whose length differs from
    /// the first row.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, ClusterError> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ClusterError::RaggedGrid {
                row,
                expected: width,
                found: bad.len(),
            });
        }
        let cells = Array2::from_shape_fn((rows.len(), width), |(r, c)| rows[r][c]);
        Ok(Self { cells })
    }

    pub fn empty() -> Self {
        Self {
            cells: Array2::zeros((0, 0)),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn value(&self, (row, col): Cell) -> i32 {
        self.cells[[row, col]]
    }

    pub fn is_filled(&self, cell: Cell) -> bool {
        self.value(cell) != 0
    }

    /// In-bounds 4-neighbours in the fixed order up, down, left, right.
    pub fn neighbors(&self, (row, col): Cell) -> impl Iterator<Item = Cell> {
        let up = (row > 0).then(|| (row - 1, col));
        let down = (row + 1 < self.rows()).then_some((row + 1, col));
        let left = (col > 0).then(|| (row, col - 1));
        let right = (col + 1 < self.cols()).then_some((row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }
}
