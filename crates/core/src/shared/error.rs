use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("embedding {index} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("embedding {index} has a non-finite value at component {component}")]
    NonFiniteValue { index: usize, component: usize },
    #[error("distance threshold must be a non-negative number, got {0}")]
    InvalidThreshold(f64),
    #[error("iteration budget must be at least 1")]
    InvalidIterations,
    #[error("edge ({0}, {1}) references a node outside the graph of {2} nodes")]
    EdgeOutOfRange(usize, usize, usize),
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ClusterError {
    /// True for errors caused by the shape or values of caller input,
    /// as opposed to failures reading it.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ClusterError::DimensionMismatch { .. }
                | ClusterError::NonFiniteValue { .. }
                | ClusterError::InvalidThreshold(_)
                | ClusterError::InvalidIterations
                | ClusterError::EdgeOutOfRange(..)
                | ClusterError::RaggedGrid { .. }
        )
    }
}
