/// Connected-components clustering by iterative flood fill.
///
/// Start nodes are scanned in index order and each traversal uses an
/// explicit stack, so deep chains never grow the call stack. A component's
/// label is the order in which its first node was reached.
use crate::clustering::domain::cluster_assignment::ClusterAssignment;
use crate::clustering::domain::clusterer::Clusterer;
use crate::clustering::domain::similarity_graph::SimilarityGraph;
use crate::shared::error::ClusterError;

pub struct ConnectedComponentsClusterer;

impl ConnectedComponentsClusterer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConnectedComponentsClusterer {
    fn default() -> Self {
        Self::new()
    }
}

impl Clusterer for ConnectedComponentsClusterer {
    fn name(&self) -> &'static str {
        "components"
    }

    fn partition(&self, graph: &SimilarityGraph) -> Result<ClusterAssignment, ClusterError> {
        let n = graph.node_count();
        let mut visited = vec![false; n];
        let mut labels = vec![0usize; n];
        let mut next_label = 0;
        let mut stack: Vec<usize> = Vec::new();

        for start in 0..n {
            if visited[start] {
                continue;
            }

            stack.push(start);
            while let Some(node) = stack.pop() {
                if visited[node] {
                    continue;
                }
                visited[node] = true;
                labels[node] = next_label;
                stack.extend(graph.neighbors(node).iter().filter(|nb| !visited[**nb]));
            }
            next_label += 1;
        }

        Ok(ClusterAssignment::from_raw_labels(&labels))
    }
}
