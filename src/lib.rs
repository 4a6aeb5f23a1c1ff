//! Weighted [disjoint-sets/union-find] structures and a grid percolation
//! simulator built on top of them.
//!
//! The core of this crate is [`UnionFind`]: a partition of a fixed universe of
//! `n` elements into disjoint components, supporting `union`, `connected`,
//! `find`, and `count` with union by size and path compression.
//! The `union` and `connected` methods are extremely fast and have an amortized
//! complexity of `O(α(n))` where 'α' is the inverse Ackermann function and
//! length `n`.
//! The `α(n)` has value below 5 for any `n` that can be written in the
//! observable universe.
//!
//! Two augmented variants maintain extra per-component data under `union`:
//! [`CanonicalUnionFind`], whose `find` returns the largest element of the
//! queried component, and [`SuccessorSet`], which answers "smallest remaining
//! value ≥ x" after arbitrary deletions by chaining each deleted element to
//! its right neighbour.
//!
//! [`Percolation`] models an n×n grid of sites that can be opened one at a
//! time, answering whether water poured on the top row reaches a given site
//! (`is_full`) and whether it reaches the bottom (`percolates`).
//! It keeps two separate `UnionFind` instances with different virtual-site
//! wiring so that a site connected to the bottom of the grid through some
//! other percolating path is never falsely reported as full.
//! [`PercolationStats`] estimates the percolation threshold of such grids by
//! Monte Carlo simulation.
//!
//! # Examples
//!
//! ```
//! use percolate::UnionFind;
//!
//! let mut union_find = UnionFind::new(4);
//! union_find.union(1, 2);
//! union_find.union(2, 3);
//!
//! assert!(union_find.connected(1, 3));
//! assert!(union_find.count() == 2);
//! ```
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UnionFind`]: struct.UnionFind.html
//! [`CanonicalUnionFind`]: struct.CanonicalUnionFind.html
//! [`SuccessorSet`]: struct.SuccessorSet.html
//! [`Percolation`]: struct.Percolation.html
//! [`PercolationStats`]: struct.PercolationStats.html

extern crate bit_vec;
#[cfg(feature = "proptest")]
#[macro_use]
extern crate proptest;
extern crate rand;
#[cfg(feature = "rayon")]
extern crate rayon;

pub mod connectivity;
pub mod disjoint_sets;
pub mod percolation;

pub use disjoint_sets::{CanonicalUnionFind, SuccessorSet, UnionFind};
pub use percolation::{Percolation, PercolationStats};
