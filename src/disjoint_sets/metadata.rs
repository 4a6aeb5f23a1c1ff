use std::cell::Cell;

/// This provides additional information about a given element in a `UnionFind`.
///
/// For each element of the universe we store a `Metadata`.
#[derive(Clone, Debug, Default)]
pub(crate) struct Metadata {
    /// The parent of the element in its component tree.
    /// These form an upside down tree where each child has the index of its parent.
    ///
    /// The `Cell` lets `find` re-parent elements during path compression while
    /// the structure is only borrowed immutably.
    parent: Cell<usize>,
    /// The amount of elements in the component.
    /// Only meaningful when this element is the root of its tree.
    size: Cell<usize>,
}

impl Metadata {
    /// Create a new `Metadata` for an element with the given index.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            size: Cell::new(1),
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `size` variable.
    pub(crate) fn size(&self) -> usize {
        self.size.get()
    }

    /// Set the `size` variable.
    pub(crate) fn set_size(&self, value: usize) {
        self.size.set(value);
    }
}
