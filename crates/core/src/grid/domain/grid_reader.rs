use std::path::Path;

use crate::grid::domain::grid::Grid;
use crate::shared::error::ClusterError;

/// Domain interface for loading a grid from an external source.
pub trait GridReader: Send {
    fn read(&self, path: &Path) -> Result<Grid, ClusterError>;
}
