//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised by the disjoint-set, the percolation model and the
/// experiment driver.
///
/// Every operation validates its input before mutating anything, so an
/// `Err` never leaves a partially updated value behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A size, count or other construction parameter is not allowed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A site coordinate or element id lies outside the configured universe.
    #[error("index out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
