use std::fs;
use std::path::Path;

use crate::grid::domain::grid::Grid;
use crate::grid::domain::grid_reader::GridReader;
use crate::shared::error::ClusterError;
use crate::shared::numeric_text::{data_lines, parse_values};

/// Reads a grid with one row per line.
///
/// Accepts whitespace or comma separated integers, and tolerates the braces
/// of a pasted array literal such as `{1,0,1},` as long as each row sits on
/// its own line.
pub struct TextGridReader;

impl TextGridReader {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, text: &str, path: &Path) -> Result<Grid, ClusterError> {
        let rows = data_lines(text)
            .map(|(line, content)| {
                parse_values::<i32>(content).map_err(|message| ClusterError::Parse {
                    path: path.to_path_buf(),
                    line,
                    message,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}

impl Default for TextGridReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GridReader for TextGridReader {
    fn read(&self, path: &Path) -> Result<Grid, ClusterError> {
        let text = fs::read_to_string(path).map_err(|source| ClusterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = self.parse(&text, path)?;
        log::debug!(
            "Read {}x{} grid from {}",
            grid.rows(),
            grid.cols(),
            path.display()
        );
        Ok(grid)
    }
}
