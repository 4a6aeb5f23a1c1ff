//! Contains the implementations of the [disjoint-sets/union-find] structures.
//!
//! [`UnionFind`] is the core structure; [`CanonicalUnionFind`] and
//! [`SuccessorSet`] augment it with per-component metadata that is maintained
//! incrementally under `union`.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UnionFind`]: union_find/struct.UnionFind.html
//! [`CanonicalUnionFind`]: canonical/struct.CanonicalUnionFind.html
//! [`SuccessorSet`]: successor/struct.SuccessorSet.html

mod metadata;

pub mod canonical;
pub mod successor;
pub mod union_find;

pub use self::canonical::CanonicalUnionFind;
pub use self::successor::SuccessorSet;
pub use self::union_find::UnionFind;
