//! Similarity-graph clustering of face embeddings and flood-fill region
//! scanning over integer grids.

pub mod clustering;
pub mod grid;
pub mod pipeline;
pub mod shared;

pub use clustering::domain::cluster_assignment::ClusterAssignment;
pub use clustering::domain::clusterer::Clusterer;
pub use clustering::domain::embedding_set::EmbeddingSet;
pub use clustering::domain::similarity_graph::SimilarityGraph;
pub use grid::domain::grid::Grid;
pub use grid::domain::region_scanner::RegionScanner;
pub use shared::error::ClusterError;
