//! Grid percolation built on two cooperating union-find instances.
//!
//! [`Percolation`] is the simulator itself; [`PercolationStats`] estimates the
//! percolation threshold of random grids by Monte Carlo simulation.
//!
//! [`Percolation`]: grid/struct.Percolation.html
//! [`PercolationStats`]: stats/struct.PercolationStats.html

pub mod grid;
pub mod stats;

pub use self::grid::Percolation;
pub use self::stats::PercolationStats;
