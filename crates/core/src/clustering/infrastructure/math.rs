//! Disjoint-set helpers shared by the clustering backends.

/// Fresh forest where every element is its own root.
pub fn singletons(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Find root of element `i` with path halving for amortized near-O(1).
pub fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

/// Merge the sets containing `a` and `b`.
pub fn union(parent: &mut [usize], a: usize, b: usize) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        parent[ra] = rb;
    }
}

/// Root of every element, in element order.
pub fn roots(parent: &mut [usize]) -> Vec<usize> {
    (0..parent.len()).map(|i| find(parent, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find_transitive() {
        let mut parent = singletons(3);
        union(&mut parent, 0, 1);
        union(&mut parent, 1, 2);
        assert_eq!(find(&mut parent, 0), find(&mut parent, 2));
    }

    #[test]
    fn test_union_find_separate() {
        let mut parent = singletons(4);
        union(&mut parent, 0, 1);
        union(&mut parent, 2, 3);
        assert_ne!(find(&mut parent, 0), find(&mut parent, 2));
    }

    #[test]
    fn test_union_self_is_noop() {
        let mut parent = singletons(2);
        union(&mut parent, 1, 1);
        assert_eq!(parent, vec![0, 1]);
    }

    #[test]
    fn test_roots_share_value_within_set() {
        let mut parent = singletons(5);
        union(&mut parent, 0, 3);
        union(&mut parent, 3, 4);
        let r = roots(&mut parent);
        assert_eq!(r[0], r[3]);
        assert_eq!(r[3], r[4]);
        assert_ne!(r[0], r[1]);
        assert_ne!(r[1], r[2]);
    }
}
