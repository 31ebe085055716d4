use std::collections::HashMap;

use serde::Serialize;

/// Cluster label for every embedding index.
///
/// Labels are canonical: dense, zero-based, and numbered in the order each
/// cluster first appears when scanning indices from 0. Two assignments over
/// the same items therefore compare equal exactly when they group the items
/// identically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClusterAssignment {
    cluster_count: usize,
    labels: Vec<usize>,
}

impl ClusterAssignment {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Canonicalizes arbitrary per-item keys (component roots, propagated
    /// labels) into dense labels by first occurrence.
    pub fn from_raw_labels(raw: &[usize]) -> Self {
        let mut dense: HashMap<usize, usize> = HashMap::new();
        let labels: Vec<usize> = raw
            .iter()
            .map(|key| {
                let next = dense.len();
                *dense.entry(*key).or_insert(next)
            })
            .collect();
        Self {
            cluster_count: dense.len(),
            labels,
        }
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label_of(&self, index: usize) -> Option<usize> {
        self.labels.get(index).copied()
    }

    pub fn members(&self, label: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == label)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Item indices per cluster, indexed by label. Each group is ascending.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.cluster_count];
        for (idx, label) in self.labels.iter().enumerate() {
            groups[*label].push(idx);
        }
        groups
    }

    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.cluster_count];
        for label in &self.labels {
            sizes[*label] += 1;
        }
        sizes
    }

    pub fn same_cluster(&self, a: usize, b: usize) -> bool {
        match (self.label_of(a), self.label_of(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }

    /// True if every cluster of `self` lies within a single cluster of
    /// `other`, i.e. `self` is at least as fine as `other`.
    pub fn refines(&self, other: &ClusterAssignment) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut outer: HashMap<usize, usize> = HashMap::new();
        self.labels
            .iter()
            .zip(other.labels.iter())
            .all(|(inner, coarse)| *outer.entry(*inner).or_insert(*coarse) == *coarse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_labels_is_dense_by_first_occurrence() {
        let a = ClusterAssignment::from_raw_labels(&[7, 3, 7, 9, 3]);
        assert_eq!(a.labels(), &[0, 1, 0, 2, 1]);
        assert_eq!(a.cluster_count(), 3);
    }

    #[test]
    fn test_equal_partitions_compare_equal() {
        let a = ClusterAssignment::from_raw_labels(&[4, 4, 1]);
        let b = ClusterAssignment::from_raw_labels(&[0, 0, 2]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty() {
        let a = ClusterAssignment::from_raw_labels(&[]);
        assert_eq!(a, ClusterAssignment::empty());
        assert_eq!(a.cluster_count(), 0);
        assert!(a.groups().is_empty());
    }

    #[test]
    fn test_groups_members_and_sizes() {
        let a = ClusterAssignment::from_raw_labels(&[0, 1, 0, 2, 1, 0]);
        assert_eq!(a.groups(), vec![vec![0, 2, 5], vec![1, 4], vec![3]]);
        assert_eq!(a.members(1), vec![1, 4]);
        assert_eq!(a.sizes(), vec![3, 2, 1]);
    }

    #[test]
    fn test_same_cluster() {
        let a = ClusterAssignment::from_raw_labels(&[0, 1, 0]);
        assert!(a.same_cluster(0, 2));
        assert!(!a.same_cluster(0, 1));
        assert!(!a.same_cluster(0, 5));
    }

    #[test]
    fn test_refines() {
        let fine = ClusterAssignment::from_raw_labels(&[0, 1, 2, 3]);
        let coarse = ClusterAssignment::from_raw_labels(&[0, 0, 1, 1]);
        assert!(fine.refines(&coarse));
        assert!(!coarse.refines(&fine));
        assert!(coarse.refines(&coarse));
    }

    #[test]
    fn test_refines_length_mismatch() {
        let a = ClusterAssignment::from_raw_labels(&[0, 1]);
        let b = ClusterAssignment::from_raw_labels(&[0]);
        assert!(!a.refines(&b));
    }
}
