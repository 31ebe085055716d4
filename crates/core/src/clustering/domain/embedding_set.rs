use ndarray::{Array2, ArrayView1};

use crate::shared::error::ClusterError;

/// An ordered set of embeddings sharing one dimensionality.
///
/// Stored row-major as an `N x D` matrix; row `i` is the embedding of the
/// `i`-th detected entity. An empty set has shape `0 x 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddingSet {
    matrix: Array2<f32>,
}

impl EmbeddingSet {
    /// Builds a set from individual vectors, rejecting inconsistent lengths
    /// and NaN or infinite components.
    ///
    /// The first vector fixes the expected dimension.
    pub fn new(embeddings: Vec<Vec<f32>>) -> Result<Self, ClusterError> {
        let dim = embeddings.first().map_or(0, Vec::len);
        if let Some((index, bad)) = embeddings
            .iter()
            .enumerate()
            .find(|(_, e)| e.len() != dim)
        {
            return Err(ClusterError::DimensionMismatch {
                index,
                expected: dim,
                found: bad.len(),
            });
        }
        for (index, embedding) in embeddings.iter().enumerate() {
            if let Some(component) = embedding.iter().position(|v| !v.is_finite()) {
                return Err(ClusterError::NonFiniteValue { index, component });
            }
        }

        let matrix = Array2::from_shape_fn((embeddings.len(), dim), |(i, j)| embeddings[i][j]);
        Ok(Self { matrix })
    }

    pub fn empty() -> Self {
        Self {
            matrix: Array2::zeros((0, 0)),
        }
    }

    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dimension(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn get(&self, index: usize) -> Option<ArrayView1<'_, f32>> {
        (index < self.len()).then(|| self.matrix.row(index))
    }

    /// Euclidean distance between embeddings `i` and `j`.
    ///
    /// Panics if either index is out of range.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        euclidean_distance(self.matrix.row(i), self.matrix.row(j))
    }
}

/// L2 norm of the difference vector, accumulated in `f64`.
pub fn euclidean_distance(a: ArrayView1<'_, f32>, b: ArrayView1<'_, f32>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = *x as f64 - *y as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rstest::rstest;

    #[test]
    fn test_new_builds_matrix() {
        let set = EmbeddingSet::new(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.dimension(), 2);
        assert_eq!(set.get(1).unwrap().to_vec(), vec![3.0, 4.0]);
        assert!(set.get(3).is_none());
    }

    #[test]
    fn test_new_rejects_dimension_mismatch() {
        let err = EmbeddingSet::new(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]).unwrap_err();
        match err {
            ClusterError::DimensionMismatch {
                index,
                expected,
                found,
            } => {
                assert_eq!(index, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_new_empty() {
        let set = EmbeddingSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.dimension(), 0);
        assert_eq!(set, EmbeddingSet::empty());
    }

    #[test]
    fn test_distance_three_four_five() {
        let set = EmbeddingSet::new(vec![vec![0.0, 0.0], vec![3.0, 4.0]]).unwrap();
        assert_relative_eq!(set.distance(0, 1), 5.0);
    }

    #[rstest]
    #[case::nan(f32::NAN)]
    #[case::positive_infinity(f32::INFINITY)]
    #[case::negative_infinity(f32::NEG_INFINITY)]
    fn test_new_rejects_non_finite_component(#[case] bad: f32) {
        let err = EmbeddingSet::new(vec![vec![0.0, 0.0], vec![0.5, bad]]).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(
            err,
            ClusterError::NonFiniteValue {
                index: 1,
                component: 1
            }
        ));
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_on_self() {
        let set = EmbeddingSet::new(vec![vec![0.1, -0.2, 0.3], vec![0.4, 0.5, -0.6]]).unwrap();
        assert_relative_eq!(set.distance(0, 1), set.distance(1, 0));
        assert_relative_eq!(set.distance(1, 1), 0.0);
    }

    #[test]
    fn test_euclidean_distance_three_four_five() {
        let a = array![1.0f32, 1.0];
        let b = array![4.0f32, 5.0];
        assert_relative_eq!(euclidean_distance(a.view(), b.view()), 5.0, epsilon = 1e-9);
    }
}
