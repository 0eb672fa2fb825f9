//! Error types for the summary pipeline.

use thiserror::Error;

/// Result type for the summary pipeline.
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Errors that can occur while building period summaries.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// A column requested by the aggregation policy is absent from the panel
    #[error("Missing aggregation column: {column}")]
    MissingColumn {
        /// Name of the absent column
        column: String,
    },

    /// The period specification is malformed
    #[error("Invalid period specification: {reason}")]
    InvalidPeriod {
        /// Why the specification was rejected
        reason: String,
    },

    /// A calendar month outside 1..=12 was requested
    #[error("Invalid calendar month: {month} (expected 1..=12)")]
    InvalidMonth {
        /// The rejected month number
        month: u32,
    },

    /// Windowed-return derivation failed
    #[error("Return transform error: {0}")]
    Returns(#[from] shortall_returns::ReturnsError),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
