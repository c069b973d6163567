//! Shared error types for the services crate.

use thiserror::Error;

/// Errors a simulated fetch can report.
///
/// The built-in fixture source never produces one; they exist so views keep
/// a real error branch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServicesError {
    #[error("simulated latency of {0} ms is too large")]
    LatencyOutOfRange(u64),
}
