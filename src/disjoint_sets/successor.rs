//! Successor queries over a shrinking set of integers.
//!
//! See [`SuccessorSet`] for more information.
//!
//! [`SuccessorSet`]: struct.SuccessorSet.html

use crate::disjoint_sets::UnionFind;

/// The integers `0 .. n` with deletion and successor queries, all running in
/// amortized `O(α(n))` time after construction.
///
/// `find(x)` answers the smallest surviving value that is greater than or
/// equal to `x`.
/// Deleting `x` is modelled as a union of `x` with its right neighbour while
/// the largest surviving index of each component is kept at the root, so a
/// successor query is a single root lookup instead of a linear scan.
///
/// One extra slot past the end of the universe acts as an absorbing neighbour
/// for the largest real element; once a component has absorbed it the
/// component has no successor left.
///
/// # Examples
///
/// ```
/// use percolate::SuccessorSet;
///
/// let mut successors = SuccessorSet::new(10);
///
/// successors.delete(3);
/// successors.delete(4);
///
/// assert!(successors.find(3) == Some(5));
/// assert!(successors.find(5) == Some(5));
/// assert!(successors.is_deleted(4));
/// assert!(!successors.is_deleted(5));
/// ```
#[derive(Clone, Debug)]
pub struct SuccessorSet {
    /// The universe plus the absorbing slot at index `len`.
    sets: UnionFind,
    /// The largest surviving index in the component.
    /// Only meaningful at roots.
    successor: Vec<usize>,
}

impl SuccessorSet {
    /// Constructs a new `SuccessorSet` over the universe `0 .. n` with no
    /// element deleted.
    pub fn new(n: usize) -> Self {
        Self {
            sets: UnionFind::new(n + 1),
            successor: (0 ..= n).collect(),
        }
    }

    /// Returns the amount of elements the universe started with.
    ///
    /// Deletions do not change this.
    #[inline]
    pub fn len(&self) -> usize {
        self.sets.len() - 1
    }

    /// Returns `true` if the universe started empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gives the smallest surviving value greater than or equal to `index`,
    /// or `None` if every such value has been deleted.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate::SuccessorSet;
    ///
    /// let mut successors = SuccessorSet::new(3);
    ///
    /// assert!(successors.find(1) == Some(1));
    ///
    /// successors.delete(1);
    /// assert!(successors.find(1) == Some(2));
    ///
    /// successors.delete(2);
    /// successors.delete(0);
    /// assert!(successors.find(0) == None);
    /// ```
    pub fn find(&self, index: usize) -> Option<usize> {
        self.validate(index);

        let successor = self.successor[self.sets.find(index)];

        if successor == self.len() {
            None
        } else {
            Some(successor)
        }
    }

    /// Returns `true` if `index` has been deleted.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    #[inline]
    pub fn is_deleted(&self, index: usize) -> bool {
        self.find(index) != Some(index)
    }

    /// Deletes `index` from the surviving set.
    ///
    /// Deleting an element twice is a no-op, so any interleaving of deletions
    /// leaves the structure in the same state.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub fn delete(&mut self, index: usize) {
        if self.is_deleted(index) {
            return;
        }

        let i = self.sets.find(index);
        let j = self.sets.find(index + 1);

        let merged = usize::max(self.successor[i], self.successor[j]);
        let root = self.sets.union(i, j);

        self.successor[root] = merged;
    }

    fn validate(&self, index: usize) {
        if index >= self.len() {
            panic!("index {} is out of bounds for a universe of {} elements", index, self.len());
        }
    }
}
