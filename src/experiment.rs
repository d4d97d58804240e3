//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial opens uniformly random blocked sites of a fresh grid until it
//! percolates and records the fraction of open sites at that moment.
//! [`PercolationStats`] then summarises the recorded thresholds.

use rand::Rng;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::percolation::Percolation;
use crate::random::{create_rng, uniform};
use crate::stats;

/// Runs one trial on a fresh `n × n` grid and returns its threshold,
/// `open sites / n²` at the first moment the grid percolates.
///
/// Sites are drawn with rejection sampling: a draw that lands on an open
/// site is discarded and redrawn.
///
/// # Errors
/// [`Error::InvalidArgument`] if `n == 0`.
pub fn trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let row = uniform(rng, 1, n + 1);
        let col = uniform(rng, 1, n + 1);
        if !grid.is_open(row, col)? {
            grid.open(row, col)?;
        }
    }
    let threshold = grid.open_count() as f64 / (n * n) as f64;
    log::debug!(
        "trial on {n}x{n} percolated after {} opens (threshold {threshold})",
        grid.open_count()
    );
    Ok(threshold)
}

/// Thresholds recorded over independent trials, with their summary
/// statistics.
///
/// # Examples
/// ```
/// use percolate::PercolationStats;
///
/// let stats = PercolationStats::run_seeded(20, 30, 7).unwrap();
/// assert_eq!(stats.trials(), 30);
/// assert!(stats.confidence_lo() <= stats.mean());
/// assert!(stats.mean() <= stats.confidence_hi());
/// ```
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` trials on `n × n` grids one after another, drawing every
    /// site from `rng`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `n == 0` or `trials == 0`.
    pub fn run<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        validate(n, trials)?;
        log::info!("running {trials} sequential trials on a {n}x{n} grid");
        let thresholds = (0..trials)
            .map(|_| trial(n, &mut *rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::finish(n, thresholds))
    }

    /// Runs `trials` trials on `n × n` grids across the rayon thread pool.
    ///
    /// Trial `i` draws from its own generator seeded with `seed + i`
    /// (wrapping) and fills slot `i` of the result, so the
    /// outcome depends on `seed` only, not on the number of threads.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `n == 0` or `trials == 0`.
    pub fn run_seeded(n: usize, trials: usize, seed: u64) -> Result<Self> {
        validate(n, trials)?;
        log::info!(
            "running {trials} trials on a {n}x{n} grid over {} threads (seed {seed})",
            rayon::current_num_threads()
        );
        let thresholds = (0..trials)
            .into_par_iter()
            .map(|i| {
                let mut rng = create_rng(seed.wrapping_add(i as u64));
                trial(n, &mut rng)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::finish(n, thresholds))
    }

    /// Wraps thresholds recorded elsewhere.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `thresholds` is empty.
    pub fn from_thresholds(grid_size: usize, thresholds: Vec<f64>) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one threshold is required".into(),
            ));
        }
        Ok(Self {
            grid_size,
            thresholds,
        })
    }

    fn finish(grid_size: usize, thresholds: Vec<f64>) -> Self {
        let stats = Self {
            grid_size,
            thresholds,
        };
        log::info!(
            "finished {} trials: mean {}, stddev {}",
            stats.trials(),
            stats.mean(),
            stats.stddev()
        );
        stats
    }

    /// Grid dimension the trials ran on.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of recorded trials `T`.
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Recorded thresholds in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the thresholds.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.thresholds).unwrap_or(f64::NAN)
    }

    /// Sample standard deviation of the thresholds (divisor `T - 1`).
    ///
    /// Undefined for a single trial: returns `NaN` when `T == 1`, and the
    /// confidence bounds are `NaN` as well.
    pub fn stddev(&self) -> f64 {
        stats::std_dev(&self.thresholds).unwrap_or(f64::NAN)
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.confidence_interval().0
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.confidence_interval().1
    }

    fn confidence_interval(&self) -> (f64, f64) {
        stats::confidence_interval_95(self.mean(), self.stddev(), self.trials())
    }
}

fn validate(n: usize, trials: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "grid size must be positive, got 0".into(),
        ));
    }
    if trials == 0 {
        return Err(Error::InvalidArgument(
            "trial count must be positive, got 0".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_arguments() {
        let mut rng = create_rng(1);
        assert!(matches!(
            PercolationStats::run(0, 10, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            PercolationStats::run(10, 0, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            PercolationStats::run_seeded(0, 10, 1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            PercolationStats::run_seeded(10, 0, 1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            PercolationStats::from_thresholds(10, vec![]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_statistics_over_known_thresholds() {
        let stats = PercolationStats::from_thresholds(5, vec![0.2, 0.4, 0.6]).unwrap();
        assert_eq!(stats.trials(), 3);
        assert!((stats.mean() - 0.4).abs() < 1e-12);
        assert!((stats.stddev() - 0.2).abs() < 1e-12);

        let half = 1.96 * stats.stddev() / 3.0_f64.sqrt();
        assert!((stats.confidence_lo() - (0.4 - half)).abs() < 1e-12);
        assert!((stats.confidence_hi() - (0.4 + half)).abs() < 1e-12);
    }

    #[test]
    fn test_single_trial_stddev_is_nan() {
        let stats = PercolationStats::from_thresholds(5, vec![0.6]).unwrap();
        assert_eq!(stats.mean(), 0.6);
        assert!(stats.stddev().is_nan());
        assert!(stats.confidence_lo().is_nan());
        assert!(stats.confidence_hi().is_nan());
    }

    #[test]
    fn test_single_site_threshold_is_one() {
        let mut rng = create_rng(3);
        assert_eq!(trial(1, &mut rng), Ok(1.0));
    }

    #[test]
    fn test_thresholds_strictly_inside_unit_interval() {
        let mut rng = create_rng(11);
        for n in 2..=12 {
            let stats = PercolationStats::run(n, 20, &mut rng).unwrap();
            assert_eq!(stats.grid_size(), n);
            for &t in stats.thresholds() {
                assert!(t > 0.0 && t < 1.0, "n={n}: threshold {t}");
            }
        }
    }

    #[test]
    fn test_smallest_nontrivial_grid_thresholds() {
        // A 2x2 grid needs two or three opens.
        let mut rng = create_rng(5);
        let stats = PercolationStats::run(2, 200, &mut rng).unwrap();
        for &t in stats.thresholds() {
            assert!(t == 0.5 || t == 0.75, "unexpected threshold {t}");
        }
    }

    #[test]
    fn test_sequential_run_is_reproducible() {
        let a = PercolationStats::run(15, 10, &mut create_rng(99)).unwrap();
        let b = PercolationStats::run(15, 10, &mut create_rng(99)).unwrap();
        assert_eq!(a.thresholds(), b.thresholds());
    }

    #[test]
    fn test_seeded_run_ignores_thread_count() {
        let expected = PercolationStats::run_seeded(12, 16, 2024).unwrap();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        let single = pool
            .install(|| PercolationStats::run_seeded(12, 16, 2024))
            .unwrap();
        assert_eq!(expected.thresholds(), single.thresholds());
    }

    #[test]
    fn test_seeded_trials_draw_independent_sites() {
        let stats = PercolationStats::run_seeded(30, 16, 1).unwrap();
        let first = stats.thresholds()[0];
        assert!(
            stats.thresholds().iter().any(|&t| t != first),
            "all trials produced threshold {first}"
        );
    }

    #[test]
    fn test_oversized_grid_is_an_error() {
        assert!(matches!(
            PercolationStats::run_seeded(4_000_000_000, 1, 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_estimate_near_known_threshold() {
        // Site percolation threshold on the square lattice is ~0.5927.
        let stats = PercolationStats::run_seeded(50, 200, 17).unwrap();
        assert!(
            (stats.mean() - 0.5927).abs() < 0.02,
            "mean {} too far from 0.5927",
            stats.mean()
        );
        assert!(stats.stddev() > 0.0 && stats.stddev() < 0.1);
    }
}
