//! The grid percolation simulator.
//!
//! See [`Percolation`] for more information.
//!
//! [`Percolation`]: struct.Percolation.html

use {
    bit_vec::BitVec,
    crate::disjoint_sets::UnionFind,
};

/// An n×n grid of sites that can be opened one at a time, answering whether
/// water poured on the top row reaches a given site and whether it reaches the
/// bottom row.
///
/// Sites only ever transition from closed to open.
/// Rows and columns are 1-indexed.
///
/// The grid is backed by two separate [`UnionFind`] instances over the sites
/// plus virtual sites: one carries a virtual top and a virtual bottom site and
/// answers `percolates`, the other carries the virtual top only and answers
/// `is_full`.
/// The bottom sentinel never enters the second structure: once the grid
/// percolates, every open bottom-row site shares a component with the top in
/// the first structure whether or not water actually reaches it, and a single
/// structure would report all of them as full ("backwash").
/// Collapsing the two instances into one therefore reintroduces that bug.
///
/// # Examples
///
/// ```
/// use percolate::Percolation;
///
/// let mut percolation = Percolation::new(2);
///
/// percolation.open(1, 1);
/// percolation.open(2, 1);
///
/// assert!(percolation.is_full(2, 1));
/// assert!(percolation.percolates());
/// assert!(percolation.number_of_open_sites() == 2);
/// ```
///
/// [`UnionFind`]: ../../disjoint_sets/union_find/struct.UnionFind.html
#[derive(Clone, Debug)]
pub struct Percolation {
    /// Open/closed state per site, row-major.
    open_sites: BitVec,
    /// The amount of open sites.
    open_count: usize,
    /// The side length of the grid.
    size: usize,
    /// Wired to both virtual sites; answers `percolates`.
    top_bottom: UnionFind,
    /// Wired to the virtual top only; answers `is_full`.
    top_only: UnionFind,
}

impl Percolation {
    /// Constructs a fully closed `n` by `n` grid.
    ///
    /// # Panics
    ///
    /// If `n` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate::Percolation;
    ///
    /// let percolation = Percolation::new(5);
    ///
    /// assert!(percolation.size() == 5);
    /// assert!(percolation.number_of_open_sites() == 0);
    /// assert!(!percolation.percolates());
    /// ```
    pub fn new(n: usize) -> Self {
        if n == 0 {
            panic!("the grid dimension must be greater than 0");
        }

        let sites = n * n;

        Self {
            open_sites: BitVec::from_elem(sites, false),
            open_count: 0,
            size: n,
            top_bottom: UnionFind::new(sites + 2),
            top_only: UnionFind::new(sites + 1),
        }
    }

    /// Returns the side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Opens the site at `(row, col)`.
    ///
    /// Opening an already open site does nothing.
    /// An opened site is joined with each of its open orthogonal neighbours;
    /// top-row sites are joined with the virtual top and bottom-row sites with
    /// the virtual bottom.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not between 1 and `size`.
    /// The grid is unchanged by a rejected call.
    pub fn open(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);

        if self.open_sites.get(index).unwrap() {
            return;
        }

        self.open_sites.set(index, true);
        self.open_count += 1;

        // Join with each open orthogonal neighbour, in both structures.
        if row > 1 {
            self.connect_neighbour(index, self.index(row - 1, col));
        }
        if row < self.size {
            self.connect_neighbour(index, self.index(row + 1, col));
        }
        if col > 1 {
            self.connect_neighbour(index, self.index(row, col - 1));
        }
        if col < self.size {
            self.connect_neighbour(index, self.index(row, col + 1));
        }

        // The top row joins the virtual top in both structures.
        if row == 1 {
            self.top_bottom.union(index, self.top_index());
            self.top_only.union(index, self.top_index());
        }

        // The bottom row joins the virtual bottom in the dual-sentinel
        // structure only; the top-only structure never sees the bottom.
        if row == self.size {
            self.top_bottom.union(index, self.bottom_index());
        }
    }

    /// Returns `true` if the site at `(row, col)` is open.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not between 1 and `size`.
    #[inline]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        let index = self.index(row, col);

        self.open_sites.get(index).unwrap()
    }

    /// Returns `true` if the site at `(row, col)` is connected to the top row
    /// through a chain of open sites.
    ///
    /// A site that only reaches the bottom of the grid is not full, even once
    /// the grid percolates through some other path.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not between 1 and `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate::Percolation;
    ///
    /// let mut percolation = Percolation::new(3);
    ///
    /// percolation.open(2, 2);
    /// assert!(!percolation.is_full(2, 2));
    ///
    /// percolation.open(1, 2);
    /// assert!(percolation.is_full(2, 2));
    /// ```
    #[inline]
    pub fn is_full(&self, row: usize, col: usize) -> bool {
        let index = self.index(row, col);

        self.top_only.connected(index, self.top_index())
    }

    /// Returns the amount of open sites.
    #[inline]
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns `true` if the top and bottom rows are connected through a chain
    /// of open sites.
    #[inline]
    pub fn percolates(&self) -> bool {
        self.top_bottom.connected(self.top_index(), self.bottom_index())
    }

    /// Translates 1-indexed grid coordinates to a site index.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not between 1 and `size`.
    fn index(&self, row: usize, col: usize) -> usize {
        if row == 0 || row > self.size || col == 0 || col > self.size {
            panic!("row and col must be between 1 and {}", self.size);
        }

        (row - 1) * self.size + (col - 1)
    }

    /// Joins `site` with `neighbour` in both structures if the neighbour is
    /// open.
    fn connect_neighbour(&mut self, site: usize, neighbour: usize) {
        if self.open_sites.get(neighbour).unwrap() {
            self.top_bottom.union(site, neighbour);
            self.top_only.union(site, neighbour);
        }
    }

    /// The index of the virtual top site.
    #[inline]
    fn top_index(&self) -> usize {
        self.size * self.size
    }

    /// The index of the virtual bottom site.
    ///
    /// Only valid in the `top_bottom` structure.
    #[inline]
    fn bottom_index(&self) -> usize {
        self.size * self.size + 1
    }
}
