/// Connected-components clustering by disjoint-set union.
///
/// Yields the same canonical labels as the flood-fill backend; useful when
/// the edge list is already at hand and adjacency is not needed.
use crate::clustering::domain::cluster_assignment::ClusterAssignment;
use crate::clustering::domain::clusterer::Clusterer;
use crate::clustering::domain::similarity_graph::SimilarityGraph;
use crate::clustering::infrastructure::math;
use crate::shared::error::ClusterError;

pub struct UnionFindClusterer;

impl UnionFindClusterer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnionFindClusterer {
    fn default() -> Self {
        Self::new()
    }
}

impl Clusterer for UnionFindClusterer {
    fn name(&self) -> &'static str {
        "union-find"
    }

    fn partition(&self, graph: &SimilarityGraph) -> Result<ClusterAssignment, ClusterError> {
        let mut parent = math::singletons(graph.node_count());
        for &(i, j) in graph.edges() {
            math::union(&mut parent, i, j);
        }
        Ok(ClusterAssignment::from_raw_labels(&math::roots(&mut parent)))
    }
}
