//! # percolate
//!
//! Monte Carlo estimation of the site percolation threshold on `n × n`
//! grids.
//!
//! ## Modules
//!
//! - [`collections`] — Disjoint-set forest with union by size and path halving
//! - [`percolation`] — Incremental percolation model over the disjoint-set
//! - [`experiment`] — Repeated random trials and their summary statistics
//! - [`stats`] — Descriptive statistics with numerical stability guarantees
//! - [`random`] — Seeded generators and uniform site draws
//! - [`config`] — Validated experiment parameters
//!
//! ## Example
//!
//! ```
//! use percolate::{random::create_rng, PercolationStats};
//!
//! let mut rng = create_rng(42);
//! let stats = PercolationStats::run(20, 10, &mut rng).unwrap();
//! assert!(stats.mean() > 0.0 && stats.mean() < 1.0);
//! ```

pub mod collections;
pub mod config;
pub mod error;
pub mod experiment;
pub mod percolation;
pub mod random;
pub mod stats;

pub use config::ExperimentConfig;
pub use error::{Error, Result};
pub use experiment::PercolationStats;
pub use percolation::Percolation;
