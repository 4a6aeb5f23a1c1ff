//! Monte Carlo estimation of the percolation threshold.
//!
//! See [`PercolationStats`] for more information.
//!
//! [`PercolationStats`]: struct.PercolationStats.html

use {
    crate::percolation::grid::Percolation,
    rand::Rng,
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The z-value bounding 95% of the normal distribution.
const CONFIDENCE_95: f64 = 1.96;

/// The percolation thresholds of a series of independent Monte Carlo trials,
/// with their sample mean, sample standard deviation, and 95% confidence
/// interval.
///
/// Each trial opens uniformly random sites of a fresh grid until it
/// percolates and records the fraction of open sites at that moment.
///
/// # Examples
///
/// ```
/// use percolate::PercolationStats;
///
/// let stats = PercolationStats::run(8, 10);
///
/// assert!(stats.trials() == 10);
/// assert!(stats.mean() > 0.0 && stats.mean() <= 1.0);
/// assert!(stats.confidence_lo() <= stats.confidence_hi());
/// ```
#[derive(Clone, Debug)]
pub struct PercolationStats {
    /// Fraction of open sites at first percolation, one entry per trial.
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` independent trials on `size` by `size` grids.
    ///
    /// With the `rayon` feature enabled the trials run in parallel; every
    /// trial owns its grid and random number generator, so the results only
    /// differ from a sequential run in their order.
    ///
    /// # Panics
    ///
    /// If `size` or `trials` is zero.
    pub fn run(size: usize, trials: usize) -> Self {
        if size == 0 || trials == 0 {
            panic!("size and trials must be greater than 0");
        }

        #[cfg(feature = "rayon")]
        let thresholds = (0 .. trials)
            .into_par_iter()
            .map(|_| Self::trial(size, &mut rand::rng()))
            .collect();

        #[cfg(not(feature = "rayon"))]
        let thresholds = (0 .. trials)
            .map(|_| Self::trial(size, &mut rand::rng()))
            .collect();

        Self { thresholds }
    }

    /// Runs `trials` sequential trials driven by the given random number
    /// generator.
    ///
    /// A seeded generator makes the run reproducible.
    ///
    /// # Panics
    ///
    /// If `size` or `trials` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolate::PercolationStats;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(17);
    /// let stats = PercolationStats::with_rng(5, 4, &mut rng);
    ///
    /// assert!(stats.trials() == 4);
    /// ```
    pub fn with_rng<R: Rng>(size: usize, trials: usize, rng: &mut R) -> Self {
        if size == 0 || trials == 0 {
            panic!("size and trials must be greater than 0");
        }

        Self {
            thresholds: (0 .. trials).map(|_| Self::trial(size, rng)).collect(),
        }
    }

    /// Opens random sites of a fresh grid until it percolates and returns the
    /// fraction of open sites.
    fn trial<R: Rng>(size: usize, rng: &mut R) -> f64 {
        let mut percolation = Percolation::new(size);

        while !percolation.percolates() {
            let row = rng.random_range(1 ..= size);
            let col = rng.random_range(1 ..= size);

            percolation.open(row, col);
        }

        percolation.number_of_open_sites() as f64 / (size * size) as f64
    }

    /// Returns the amount of trials.
    #[inline]
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Returns the recorded threshold of every trial.
    #[inline]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Returns the sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.trials() as f64
    }

    /// Returns the sample standard deviation of the percolation threshold.
    ///
    /// A single trial has no spread to measure and answers NaN.
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let squares = self
            .thresholds
            .iter()
            .map(|threshold| (threshold - mean) * (threshold - mean))
            .sum::<f64>();

        (squares / (self.trials() - 1) as f64).sqrt()
    }

    /// Returns the low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }

    /// Returns the high endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}
