pub mod chinese_whispers_clusterer;
pub mod clusterer_factory;
pub mod connected_components_clusterer;
pub mod json_embedding_reader;
pub mod math;
pub mod text_embedding_reader;
pub mod union_find_clusterer;

use std::path::Path;

use crate::clustering::domain::embedding_reader::EmbeddingReader;
use crate::shared::constants::JSON_EXTENSIONS;

/// Picks a reader by file extension: JSON for `.json`, plain text otherwise.
pub fn open_embedding_reader(path: &Path) -> Box<dyn EmbeddingReader> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| JSON_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false);
    if is_json {
        Box::new(json_embedding_reader::JsonEmbeddingReader::new())
    } else {
        Box::new(text_embedding_reader::TextEmbeddingReader::new())
    }
}
