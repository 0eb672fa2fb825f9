//! Error types for the return transforms.

use thiserror::Error;

/// Result type for return transforms.
pub type Result<T> = std::result::Result<T, ReturnsError>;

/// Errors that can occur while deriving windowed returns.
#[derive(Debug, Error)]
pub enum ReturnsError {
    /// The trailing window must cover at least one observation
    #[error("Invalid trailing window: {window} (must be at least 1)")]
    InvalidWindow {
        /// The rejected window length
        window: usize,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
