use std::path::Path;

use crate::clustering::domain::embedding_set::EmbeddingSet;
use crate::shared::error::ClusterError;

/// Domain interface for loading embeddings produced by an external model.
pub trait EmbeddingReader: Send {
    fn read(&self, path: &Path) -> Result<EmbeddingSet, ClusterError>;
}
