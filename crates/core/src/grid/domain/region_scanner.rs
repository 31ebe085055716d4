use crate::grid::domain::grid::{Cell, Grid};

/// A 4-connected group of filled cells, in the order they were visited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridRegion {
    pub cells: Vec<Cell>,
}

impl GridRegion {
    pub fn size(&self) -> usize {
        self.cells.len()
    }
}

/// Flood fill over a [`Grid`], one explicit stack per region.
///
/// Cells are scanned row-major, so regions come out in the row-major order
/// of their first cell. Within a traversal, neighbours are pushed up, down,
/// left, right and popped LIFO, which fixes the visit order of each
/// region's cells. Empty cells are marked visited but never spread.
pub struct RegionScanner;

impl RegionScanner {
    pub fn new() -> Self {
        Self
    }

    pub fn scan(&self, grid: &Grid) -> Vec<GridRegion> {
        let mut visited = vec![false; grid.rows() * grid.cols()];
        let mut regions = Vec::new();
        let mut stack: Vec<Cell> = Vec::new();

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if visited[row * grid.cols() + col] {
                    continue;
                }
                let region = traverse(grid, (row, col), &mut visited, &mut stack);
                if !region.is_empty() {
                    regions.push(GridRegion { cells: region });
                }
            }
        }

        regions
    }

    /// Size of each region, in discovery order.
    pub fn region_sizes(&self, grid: &Grid) -> Vec<usize> {
        self.scan(grid).iter().map(GridRegion::size).collect()
    }
}

impl Default for RegionScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn traverse(grid: &Grid, start: Cell, visited: &mut [bool], stack: &mut Vec<Cell>) -> Vec<Cell> {
    let cols = grid.cols();
    let mut region = Vec::new();

    stack.clear();
    stack.push(start);
    while let Some(cell) = stack.pop() {
        let idx = cell.0 * cols + cell.1;
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        if !grid.is_filled(cell) {
            continue;
        }

        region.push(cell);
        stack.extend(grid.neighbors(cell).filter(|n| !visited[n.0 * cols + n.1]));
    }

    region
}
