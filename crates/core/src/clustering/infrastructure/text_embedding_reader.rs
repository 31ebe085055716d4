use std::fs;
use std::path::Path;

use crate::clustering::domain::embedding_reader::EmbeddingReader;
use crate::clustering::domain::embedding_set::EmbeddingSet;
use crate::shared::error::ClusterError;
use crate::shared::numeric_text::{data_lines, parse_values};

/// Reads one embedding per line, values separated by whitespace or commas.
pub struct TextEmbeddingReader;

impl TextEmbeddingReader {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, text: &str, path: &Path) -> Result<EmbeddingSet, ClusterError> {
        let vectors = data_lines(text)
            .map(|(line, content)| {
                parse_values::<f32>(content).map_err(|message| ClusterError::Parse {
                    path: path.to_path_buf(),
                    line,
                    message,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        EmbeddingSet::new(vectors)
    }
}

impl Default for TextEmbeddingReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddingReader for TextEmbeddingReader {
    fn read(&self, path: &Path) -> Result<EmbeddingSet, ClusterError> {
        let text = fs::read_to_string(path).map_err(|source| ClusterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&text, path)
    }
}
