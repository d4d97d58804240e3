//! Validated parameters of a threshold experiment.

use crate::error::{Error, Result};

/// Grid size, trial count and the optional knobs of one experiment run.
///
/// Signed inputs are accepted so that negative command-line values surface
/// as [`Error::InvalidArgument`] rather than as parse failures.
///
/// # Examples
/// ```
/// use percolate::ExperimentConfig;
///
/// let config = ExperimentConfig::new(200, 100).unwrap().with_seed(42);
/// assert_eq!(config.grid_size(), 200);
/// assert_eq!(config.seed(), Some(42));
/// assert!(ExperimentConfig::new(-1, 100).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    grid_size: usize,
    trials: usize,
    seed: Option<u64>,
    threads: Option<usize>,
}

impl ExperimentConfig {
    /// Creates a config for `trials` trials on `grid_size × grid_size` grids.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `grid_size <= 0` or `trials <= 0`.
    pub fn new(grid_size: i64, trials: i64) -> Result<Self> {
        Ok(Self {
            grid_size: positive("grid size", grid_size)?,
            trials: positive("trial count", trials)?,
            seed: None,
            threads: None,
        })
    }

    /// Fixes the seed of the random site draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the worker pool at `threads` threads.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `threads == 0`.
    pub fn with_threads(mut self, threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(Error::InvalidArgument(
                "thread count must be positive, got 0".into(),
            ));
        }
        self.threads = Some(threads);
        Ok(self)
    }

    /// Returns the grid dimension `N`.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Returns the trial count `T`.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the fixed seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the worker thread cap, if any.
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }
}

fn positive(name: &str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(Error::InvalidArgument(format!(
            "{name} must be positive, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| Error::InvalidArgument(format!("{name} {value} does not fit in usize")))
}
