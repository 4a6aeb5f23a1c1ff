//! The weighted [disjoint-sets/union-find] core.
//!
//! See [`UnionFind`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UnionFind`]: struct.UnionFind.html

use {
    std::fmt,
    crate::disjoint_sets::metadata::Metadata,
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A weighted [disjoint-sets/union-find] over a fixed universe of elements.
///
/// The universe `0 .. n` is fixed at construction and each element starts in
/// its own component.
/// Components can be joined with the `union` method, membership can be queried
/// with `connected`, and the current amount of components with `count`.
///
/// Smaller components are always attached below larger ones ("union by size")
/// and every `find` re-parents the elements it visits directly to the root of
/// their tree ("path compression").
/// Together these keep the trees so shallow that every operation runs in
/// amortized `O(α(n))` time where `α` is the inverse Ackermann function.
///
/// Path compression mutates the parent pointers during queries, so the parent
/// pointers live in `Cell`s and `find` and `connected` take `&self` even
/// though they rewrite the tree behind the scenes.
/// This also means the structure is not `Sync`; a caller that wants to share
/// one between threads has to wrap it in a lock.
///
/// # Examples
///
/// ```
/// use percolate::UnionFind;
///
/// let mut union_find = UnionFind::new(5);
///
/// union_find.union(0, 1);
/// union_find.union(3, 4);
///
/// assert!(union_find.connected(0, 1));
/// assert!(!union_find.connected(1, 3));
/// assert!(union_find.count() == 3);
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone)]
pub struct UnionFind {
    /// The metadata for each element of the universe.
    meta: Vec<Metadata>,
    /// The current amount of components.
    sets: usize,
}

impl UnionFind {
    /// Constructs a new `UnionFind` over the universe `0 .. n`.
    ///
    /// Every element starts as the sole member of its own component.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate::UnionFind;
    ///
    /// let union_find = UnionFind::new(10);
    ///
    /// assert!(union_find.len() == 10);
    /// assert!(union_find.count() == 10);
    /// ```
    pub fn new(n: usize) -> Self {
        Self {
            meta: (0 .. n).map(Metadata::new).collect(),
            sets: n,
        }
    }

    /// Returns the amount of elements in the universe.
    #[inline]
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    /// Returns `true` if the universe is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    /// Returns the current amount of components.
    ///
    /// This starts at `n` and decreases by exactly one for every `union` call
    /// that joins two previously distinct components.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate::UnionFind;
    ///
    /// let mut union_find = UnionFind::new(3);
    /// assert!(union_find.count() == 3);
    ///
    /// union_find.union(0, 1);
    /// assert!(union_find.count() == 2);
    ///
    /// // Joining an already joined pair changes nothing.
    /// union_find.union(1, 0);
    /// assert!(union_find.count() == 2);
    /// ```
    #[inline]
    pub fn count(&self) -> usize {
        self.sets
    }

    /// Gives the root of the component that `index` belongs to.
    ///
    /// Each index of a component gives the same root.
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
    /// use percolate::UnionFind;
    ///
    /// let mut union_find = UnionFind::new(4);
    ///
    /// // Before any union every element is its own root.
    /// assert!(union_find.find(2) == 2);
    ///
    /// union_find.union(2, 3);
    /// assert!(union_find.find(2) == union_find.find(3));
    /// ```
    pub fn find(&self, index: usize) -> usize {
        self.validate(index);

        self.root(index)
    }

    /// Joins the components of `first_index` and `second_index` and returns
    /// the root of the resulting component.
    ///
    /// If both elements are already in the same component this does nothing
    /// and returns their common root.
    /// Otherwise the root of the smaller component is attached below the root
    /// of the larger one; when both components have the same size the root of
    /// `first_index` survives.
    ///
    /// This method will be executed in amortized `O(α(n))` time where `α` is
    /// the inverse Ackermann function.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate::UnionFind;
    ///
    /// let mut union_find = UnionFind::new(4);
    ///
    /// union_find.union(0, 1);
    /// union_find.union(1, 2);
    ///
    /// assert!(union_find.connected(0, 2));
    /// assert!(union_find.size_of(2) == 3);
    /// ```
    pub fn union(&mut self, first_index: usize, second_index: usize) -> usize {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return i;
        }

        self.sets -= 1;

        let size_i = self.meta[i].size();
        let size_j = self.meta[j].size();

        // We add the smaller tree to the larger one.
        if size_i < size_j {
            self.meta[i].set_parent(j);
            self.meta[j].set_size(size_i + size_j);

            j
        } else {
            self.meta[j].set_parent(i);
            self.meta[i].set_size(size_i + size_j);

            i
        }
    }

    /// Returns `true` if `first_index` and `second_index` are in the same
    /// component.
    ///
    /// This method will be executed in amortized `O(α(n))` time where `α` is
    /// the inverse Ackermann function.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate::UnionFind;
    ///
    /// let mut union_find = UnionFind::new(4);
    ///
    /// union_find.union(1, 3);
    /// union_find.union(0, 1);
    ///
    /// assert!(union_find.connected(0, 3));
    /// assert!(!union_find.connected(0, 2));
    /// ```
    #[inline]
    pub fn connected(&self, first_index: usize, second_index: usize) -> bool {
        self.find(first_index) == self.find(second_index)
    }

    /// Returns the amount of elements in the component that `index` belongs to.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate::UnionFind;
    ///
    /// let mut union_find = UnionFind::new(4);
    /// assert!(union_find.size_of(1) == 1);
    ///
    /// union_find.union(1, 2);
    /// assert!(union_find.size_of(1) == 2);
    /// assert!(union_find.size_of(0) == 1);
    /// ```
    #[inline]
    pub fn size_of(&self, index: usize) -> usize {
        self.meta[self.find(index)].size()
    }

    /// Gives the root of the tree that `index` belongs to.
    ///
    /// This method is recursive so each parent on the way to the root is
    /// updated to point at the root directly.
    fn root(&self, index: usize) -> usize {
        // If the element is its own parent we have found the root.
        if self.meta[index].parent() == index {
            index
        } else {
            let root = self.root(self.meta[index].parent());

            // We update the parent to the root for a lower tree.
            self.meta[index].set_parent(root);

            root
        }
    }

    fn validate(&self, index: usize) {
        if index >= self.len() {
            panic!("index {} is out of bounds for a universe of {} elements", index, self.len());
        }
    }
}

impl Default for UnionFind {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for UnionFind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // We map the roots to `usize` names.
        let mut map = std::collections::HashMap::with_capacity(self.len());
        let mut builder = formatter.debug_list();
        let mut names = 0;

        for i in 0 .. self.len() {
            let root = self.find(i);

            let name = if let Some(&name) = map.get(&root) {
                // If we already have a name we use it.
                name
            } else {
                // If we don't we make a new name.
                let new_name = names;
                map.insert(root, new_name);
                names += 1;

                new_name
            };

            builder.entry(&format_args!("{} => {}", i, name));
        }

        builder.finish()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for UnionFind {
    type Parameters = proptest::collection::SizeRange;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(size_range: Self::Parameters) -> Self::Strategy {
        use std::collections::hash_map;

        (Vec::<usize>::arbitrary_with((size_range, ()))).prop_map(|vec| {
            let mut union_find = Self::new(vec.len());

            // We map a `set_number` to an `index` of that set.
            let mut map = hash_map::HashMap::with_capacity(union_find.len());

            for (index, set_number) in vec.into_iter().enumerate() {
                let set_number = set_number.trailing_zeros();

                match map.entry(set_number) {
                    hash_map::Entry::Occupied(occupied) => {
                        union_find.union(index, *occupied.get());
                    },
                    hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(index);
                    }
                }
            }

            union_find
        }).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_elements_are_their_own_roots() {
        let union_find = UnionFind::new(10);

        for i in 0 .. 10 {
            assert_eq!(union_find.find(i), i);
            assert_eq!(union_find.size_of(i), 1);
        }

        assert_eq!(union_find.count(), 10);
    }

    #[test]
    fn union_connects_and_stays_connected() {
        let mut union_find = UnionFind::new(10);

        union_find.union(1, 3);
        union_find.union(4, 5);
        union_find.union(1, 5);

        assert!(union_find.connected(1, 3));
        assert!(union_find.connected(3, 4));
        assert!(union_find.connected(1, 5));
        assert!(!union_find.connected(0, 1));
        assert!(!union_find.connected(5, 9));

        // More unions elsewhere never split an existing component.
        union_find.union(6, 7);
        union_find.union(8, 9);
        assert!(union_find.connected(1, 5));
    }

    #[test]
    fn count_decreases_once_per_merge() {
        let mut union_find = UnionFind::new(5);
        assert_eq!(union_find.count(), 5);

        union_find.union(0, 1);
        assert_eq!(union_find.count(), 4);

        union_find.union(2, 3);
        assert_eq!(union_find.count(), 3);

        // Already connected, count is unchanged.
        union_find.union(1, 0);
        assert_eq!(union_find.count(), 3);

        union_find.union(0, 2);
        union_find.union(3, 4);
        assert_eq!(union_find.count(), 1);
    }

    #[test]
    fn union_returns_the_surviving_root() {
        let mut union_find = UnionFind::new(4);

        // Equal sizes, the first operand's root survives.
        let root = union_find.union(2, 3);
        assert_eq!(root, 2);
        assert_eq!(union_find.find(3), 2);

        // The larger component's root survives regardless of operand order.
        let root = union_find.union(0, 2);
        assert_eq!(root, 2);
        assert_eq!(union_find.find(0), 2);
    }

    #[test]
    fn sizes_accumulate() {
        let mut union_find = UnionFind::new(6);

        union_find.union(0, 1);
        union_find.union(2, 3);
        union_find.union(0, 3);

        assert_eq!(union_find.size_of(1), 4);
        assert_eq!(union_find.size_of(4), 1);
    }

    #[test]
    fn long_chain_collapses_to_one_component() {
        let mut union_find = UnionFind::new(256);

        for i in 0 .. 255 {
            union_find.union(i, i + 1);
        }

        let root = union_find.find(0);
        for i in 1 .. 256 {
            assert_eq!(union_find.find(i), root);
        }

        assert_eq!(union_find.count(), 1);
        assert_eq!(union_find.size_of(17), 256);
    }

    #[test]
    fn empty_universe() {
        let union_find = UnionFind::new(0);

        assert!(union_find.is_empty());
        assert_eq!(union_find.count(), 0);
    }

    #[test]
    #[should_panic]
    fn find_rejects_out_of_bounds() {
        let union_find = UnionFind::new(3);

        union_find.find(3);
    }

    #[test]
    #[should_panic]
    fn union_rejects_out_of_bounds() {
        let mut union_find = UnionFind::new(3);

        union_find.union(0, 7);
    }
}

#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;

    proptest! {
        #[test]
        fn connectivity_is_transitive(
            n in 2usize .. 16,
            ops in proptest::collection::vec((0usize .. 16, 0usize .. 16), 0 .. 40),
        ) {
            let mut union_find = UnionFind::new(n);
            for &(p, q) in &ops {
                if p < n && q < n {
                    union_find.union(p, q);
                }
            }

            for p in 0 .. n {
                for q in 0 .. n {
                    for r in 0 .. n {
                        if union_find.connected(p, q) && union_find.connected(q, r) {
                            prop_assert!(union_find.connected(p, r));
                        }
                    }
                }
            }
        }

        #[test]
        fn count_matches_the_merges(
            n in 1usize .. 16,
            ops in proptest::collection::vec((0usize .. 16, 0usize .. 16), 0 .. 40),
        ) {
            let mut union_find = UnionFind::new(n);
            let mut expected = n;

            for &(p, q) in &ops {
                if p < n && q < n {
                    if !union_find.connected(p, q) {
                        expected -= 1;
                    }
                    union_find.union(p, q);
                }
            }

            prop_assert_eq!(union_find.count(), expected);
        }

        #[test]
        fn root_sizes_sum_to_the_universe(
            n in 1usize .. 16,
            ops in proptest::collection::vec((0usize .. 16, 0usize .. 16), 0 .. 40),
        ) {
            let mut union_find = UnionFind::new(n);
            for &(p, q) in &ops {
                if p < n && q < n {
                    union_find.union(p, q);
                }
            }

            let mut total = 0;
            for i in 0 .. n {
                if union_find.find(i) == i {
                    total += union_find.size_of(i);
                }
            }

            prop_assert_eq!(total, n);
        }

        #[test]
        fn arbitrary_structures_are_consistent(union_find in UnionFind::arbitrary()) {
            for i in 0 .. union_find.len() {
                let root = union_find.find(i);
                prop_assert_eq!(union_find.find(root), root);
            }
        }
    }
}
