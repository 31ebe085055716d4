/// Chinese Whispers label propagation.
///
/// Every node starts in its own cluster. Each round visits the nodes in a
/// shuffled order and moves each one to the label most common among its
/// neighbours (self-edges vote too; ties go to the smaller label). Rounds
/// stop early once a full pass changes nothing.
///
/// Labels only travel along edges, so a cluster never spans two connected
/// components; on ambiguous graphs (long chains, bridged cliques) it may
/// split a component that flood fill would keep whole.
use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::clustering::domain::cluster_assignment::ClusterAssignment;
use crate::clustering::domain::clusterer::Clusterer;
use crate::clustering::domain::similarity_graph::SimilarityGraph;
use crate::shared::constants::{DEFAULT_MAX_ITERATIONS, DEFAULT_SEED};
use crate::shared::error::ClusterError;

pub struct ChineseWhispersClusterer {
    max_iterations: usize,
    seed: u64,
}

impl ChineseWhispersClusterer {
    pub fn new(max_iterations: usize, seed: u64) -> Result<Self, ClusterError> {
        if max_iterations == 0 {
            return Err(ClusterError::InvalidIterations);
        }
        Ok(Self {
            max_iterations,
            seed,
        })
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

impl Default for ChineseWhispersClusterer {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl Clusterer for ChineseWhispersClusterer {
    fn name(&self) -> &'static str {
        "chinese-whispers"
    }

    fn partition(&self, graph: &SimilarityGraph) -> Result<ClusterAssignment, ClusterError> {
        let n = graph.node_count();
        let mut labels: Vec<usize> = (0..n).collect();
        let mut order: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut votes: HashMap<usize, usize> = HashMap::new();

        for round in 1..=self.max_iterations {
            order.shuffle(&mut rng);
            let mut changed = 0usize;

            for &node in &order {
                if let Some(best) = dominant_label(graph.neighbors(node), &labels, &mut votes) {
                    if best != labels[node] {
                        labels[node] = best;
                        changed += 1;
                    }
                }
            }

            if changed == 0 {
                log::debug!("Chinese Whispers converged after {round} round(s)");
                break;
            }
            if round == self.max_iterations {
                log::debug!(
                    "Chinese Whispers stopped at round budget {round} with {changed} label change(s)"
                );
            }
        }

        Ok(ClusterAssignment::from_raw_labels(&labels))
    }
}

/// Most frequent label among `neighbors`, smallest label on ties.
fn dominant_label(
    neighbors: &[usize],
    labels: &[usize],
    votes: &mut HashMap<usize, usize>,
) -> Option<usize> {
    votes.clear();
    for &nb in neighbors {
        *votes.entry(labels[nb]).or_insert(0) += 1;
    }
    votes
        .iter()
        .max_by(|(la, ca), (lb, cb)| ca.cmp(cb).then(lb.cmp(la)))
        .map(|(label, _)| *label)
}
