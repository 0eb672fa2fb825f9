//! Error types for view construction.

use thiserror::Error;

/// Result type for view construction.
pub type Result<T> = std::result::Result<T, ViewError>;

/// Errors that can occur while building chart view-models.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A column required by the view is absent from the panel or summary
    #[error("Column not found: {column}")]
    MissingColumn {
        /// Name of the absent column
        column: String,
    },

    /// A value expected to be present was null
    #[error("Unexpected null in column: {column}")]
    UnexpectedNull {
        /// Column containing the null
        column: String,
    },

    /// The view configuration is malformed
    #[error("Invalid view configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected
        reason: String,
    },

    /// Summary pipeline error
    #[error("Summary error: {0}")]
    Summary(#[from] shortall_summary::SummaryError),

    /// Return transform error
    #[error("Return transform error: {0}")]
    Returns(#[from] shortall_returns::ReturnsError),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
