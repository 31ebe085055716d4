use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::clustering::domain::embedding_reader::EmbeddingReader;
use crate::clustering::domain::embedding_set::EmbeddingSet;
use crate::shared::error::ClusterError;

/// Reads embeddings from JSON.
///
/// Accepts either a bare array of vectors or an object with an
/// `"embeddings"` field holding one.
pub struct JsonEmbeddingReader;

#[derive(Deserialize)]
#[serde(untagged)]
enum EmbeddingDocument {
    Bare(Vec<Vec<f32>>),
    Wrapped { embeddings: Vec<Vec<f32>> },
}

impl JsonEmbeddingReader {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, json: &str, path: &Path) -> Result<EmbeddingSet, ClusterError> {
        let document: EmbeddingDocument =
            serde_json::from_str(json).map_err(|source| ClusterError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        let vectors = match document {
            EmbeddingDocument::Bare(v) => v,
            EmbeddingDocument::Wrapped { embeddings } => embeddings,
        };
        EmbeddingSet::new(vectors)
    }
}

impl Default for JsonEmbeddingReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddingReader for JsonEmbeddingReader {
    fn read(&self, path: &Path) -> Result<EmbeddingSet, ClusterError> {
        let json = fs::read_to_string(path).map_err(|source| ClusterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = self.parse(&json, path)?;
        log::debug!(
            "Read {} embeddings of dimension {} from {}",
            set.len(),
            set.dimension(),
            path.display()
        );
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(json: &str) -> Result<EmbeddingSet, ClusterError> {
        JsonEmbeddingReader::new().parse(json, Path::new("test.json"))
    }

    #[test]
    fn test_parse_bare_array() {
        let set = parse("[[0.0, 1.0], [2.0, 3.0]]").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.dimension(), 2);
    }

    #[test]
    fn test_parse_wrapped_object() {
        let set = parse(r#"{"embeddings": [[1, 2, 3]]}"#).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.dimension(), 3);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_ragged_vectors() {
        let err = parse("[[0.0, 1.0], [2.0]]").unwrap_err();
        assert!(matches!(err, ClusterError::DimensionMismatch { index: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse("[[0.0, 1.0]").unwrap_err();
        assert!(matches!(err, ClusterError::Json { .. }));
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[0.5, 0.5], [0.25, 0.75], [1.0, 0.0]]").unwrap();
        let set = JsonEmbeddingReader::new().read(file.path()).unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonEmbeddingReader::new()
            .read(&dir.path().join("nope.json"))
            .unwrap_err();
        assert!(matches!(err, ClusterError::Io { .. }));
    }
}
