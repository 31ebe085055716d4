use crate::clustering::domain::cluster_assignment::ClusterAssignment;
use crate::clustering::domain::embedding_set::EmbeddingSet;
use crate::clustering::domain::similarity_graph::SimilarityGraph;
use crate::shared::error::ClusterError;

/// Domain interface for partitioning a similarity graph into clusters.
///
/// Implementations only decide how the graph is split; edge construction is
/// shared so every strategy sees the same threshold semantics.
pub trait Clusterer: Send {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    fn partition(&self, graph: &SimilarityGraph) -> Result<ClusterAssignment, ClusterError>;

    fn cluster(
        &self,
        embeddings: &EmbeddingSet,
        threshold: f64,
    ) -> Result<ClusterAssignment, ClusterError> {
        let graph = SimilarityGraph::build(embeddings, threshold)?;
        self.partition(&graph)
    }
}
