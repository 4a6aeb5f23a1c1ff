//! A [`UnionFind`] whose `find` returns the largest element of a component.
//!
//! See [`CanonicalUnionFind`] for more information.
//!
//! [`UnionFind`]: ../union_find/struct.UnionFind.html
//! [`CanonicalUnionFind`]: struct.CanonicalUnionFind.html

use crate::disjoint_sets::UnionFind;

/// A weighted union-find whose `find` returns the largest element of the
/// queried component instead of an arbitrary representative.
///
/// The largest element is kept per root and merged with a single `max` on
/// every union, so `find` stays as cheap as a plain root lookup.
/// Recomputing it by scanning the component on every query would cost `O(n)`
/// instead.
///
/// # Examples
///
/// ```
/// use percolate::CanonicalUnionFind;
///
/// let mut union_find = CanonicalUnionFind::new(10);
///
/// union_find.union(1, 2);
/// union_find.union(2, 6);
/// union_find.union(6, 9);
///
/// // Every member of {1, 2, 6, 9} answers with 9.
/// assert!(union_find.find(1) == 9);
/// assert!(union_find.find(6) == 9);
///
/// // Untouched elements are their own canonical element.
/// assert!(union_find.find(4) == 4);
/// ```
#[derive(Clone, Debug)]
pub struct CanonicalUnionFind {
    sets: UnionFind,
    /// The largest original index in the component.
    /// Only meaningful at roots.
    max: Vec<usize>,
}

impl CanonicalUnionFind {
    /// Constructs a new `CanonicalUnionFind` over the universe `0 .. n`.
    pub fn new(n: usize) -> Self {
        Self {
            sets: UnionFind::new(n),
            max: (0 .. n).collect(),
        }
    }

    /// Returns the amount of elements in the universe.
    #[inline]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns `true` if the universe is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Returns the current amount of components.
    #[inline]
    pub fn count(&self) -> usize {
        self.sets.count()
    }

    /// Gives the largest element of the component that `index` belongs to.
    ///
    /// This method will be executed in amortized `O(α(n))` time where `α` is
    /// the inverse Ackermann function.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate::CanonicalUnionFind;
    ///
    /// let mut union_find = CanonicalUnionFind::new(5);
    ///
    /// union_find.union(0, 3);
    ///
    /// assert!(union_find.find(0) == 3);
    /// assert!(union_find.find(3) == 3);
    /// ```
    #[inline]
    pub fn find(&self, index: usize) -> usize {
        self.max[self.sets.find(index)]
    }

    /// Joins the components of `first_index` and `second_index`.
    ///
    /// The surviving root records the larger of the two components' maxima, so
    /// the answer of `find` is independent of the order the unions happened in.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    pub fn union(&mut self, first_index: usize, second_index: usize) {
        let i = self.sets.find(first_index);
        let j = self.sets.find(second_index);

        if i == j {
            return;
        }

        let merged = usize::max(self.max[i], self.max[j]);
        let root = self.sets.union(i, j);

        self.max[root] = merged;
    }

    /// Returns `true` if `first_index` and `second_index` are in the same
    /// component.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    #[inline]
    pub fn connected(&self, first_index: usize, second_index: usize) -> bool {
        self.sets.connected(first_index, second_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_canonical_element() {
        let union_find = CanonicalUnionFind::new(4);

        for i in 0 .. 4 {
            assert_eq!(union_find.find(i), i);
        }
    }

    #[test]
    fn find_returns_the_component_maximum() {
        let mut union_find = CanonicalUnionFind::new(10);

        for &(p, q) in &[(0, 2), (3, 7), (1, 6), (1, 8), (6, 3), (4, 0)] {
            if !union_find.connected(p, q) {
                union_find.union(p, q);
            }
        }

        let expected = [4, 8, 4, 8, 4, 5, 8, 8, 8, 9];
        for (index, &canonical) in expected.iter().enumerate() {
            assert_eq!(union_find.find(index), canonical);
        }

        assert_eq!(union_find.count(), 4);
    }

    #[test]
    fn maximum_is_order_independent() {
        let pairs = [(0, 1), (1, 2), (2, 3), (3, 4)];

        let mut forward = CanonicalUnionFind::new(5);
        for &(p, q) in pairs.iter() {
            forward.union(p, q);
        }

        let mut backward = CanonicalUnionFind::new(5);
        for &(p, q) in pairs.iter().rev() {
            backward.union(p, q);
        }

        for i in 0 .. 5 {
            assert_eq!(forward.find(i), 4);
            assert_eq!(backward.find(i), 4);
        }
    }

    #[test]
    fn repeated_unions_keep_the_maximum() {
        let mut union_find = CanonicalUnionFind::new(6);

        union_find.union(5, 0);
        union_find.union(0, 5);
        union_find.union(0, 1);

        assert_eq!(union_find.find(1), 5);
        assert_eq!(union_find.count(), 4);
    }

    #[test]
    #[should_panic]
    fn find_rejects_out_of_bounds() {
        let union_find = CanonicalUnionFind::new(3);

        union_find.find(3);
    }
}
