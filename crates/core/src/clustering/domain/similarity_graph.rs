use crate::clustering::domain::embedding_set::EmbeddingSet;
use crate::shared::error::ClusterError;

/// Unordered node pair with `i <= j`.
pub type Edge = (usize, usize);

/// Undirected, unweighted graph linking embeddings closer than a threshold.
///
/// Self-edges are kept: every node whose distance to itself is below the
/// threshold (any positive threshold) carries one. They never join two
/// distinct nodes, but label propagation counts them as votes.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityGraph {
    node_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl SimilarityGraph {
    /// Exhaustive pairwise comparison: adds `(i, j)` for every `i <= j`
    /// whose Euclidean distance is strictly below `threshold`.
    pub fn build(embeddings: &EmbeddingSet, threshold: f64) -> Result<Self, ClusterError> {
        let threshold = validate_threshold(threshold)?;
        let n = embeddings.len();

        let mut edges = Vec::new();
        for i in 0..n {
            for j in i..n {
                if embeddings.distance(i, j) < threshold {
                    edges.push((i, j));
                }
            }
        }

        log::debug!(
            "Built similarity graph: {n} nodes, {} edges (threshold={threshold})",
            edges.len()
        );
        Self::from_edges(n, edges)
    }

    /// Builds a graph from explicit edges. Pairs are normalized to `i <= j`.
    pub fn from_edges(node_count: usize, edges: Vec<Edge>) -> Result<Self, ClusterError> {
        let mut adjacency = vec![Vec::new(); node_count];
        let mut normalized = Vec::with_capacity(edges.len());

        for (a, b) in edges {
            if a >= node_count || b >= node_count {
                return Err(ClusterError::EdgeOutOfRange(a, b, node_count));
            }
            let (i, j) = if a <= b { (a, b) } else { (b, a) };
            adjacency[i].push(j);
            if i != j {
                adjacency[j].push(i);
            }
            normalized.push((i, j));
        }

        Ok(Self {
            node_count,
            edges: normalized,
            adjacency,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighbours of `node`, including itself when it has a self-edge.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }
}

/// Rejects negative and NaN thresholds. Infinity is accepted and links
/// every pair of finite embeddings.
pub fn validate_threshold(threshold: f64) -> Result<f64, ClusterError> {
    if threshold.is_nan() || threshold < 0.0 {
        return Err(ClusterError::InvalidThreshold(threshold));
    }
    Ok(threshold)
}
