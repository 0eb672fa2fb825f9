//! Error types for panel operations.

use thiserror::Error;

/// Result type for panel operations.
pub type Result<T> = std::result::Result<T, PanelError>;

/// Errors that can occur while loading or validating the daily panel.
#[derive(Debug, Error)]
pub enum PanelError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// A column required by the panel contract is absent
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// Name of the absent column
        column: String,
    },

    /// The date column has the wrong dtype
    #[error("Date column has dtype {dtype}, expected Date")]
    NotDateTyped {
        /// Observed dtype of the date column
        dtype: String,
    },

    /// The date index is not strictly increasing
    #[error("Date index not strictly increasing at row {position}")]
    NonIncreasingDates {
        /// Row index of the first violation
        position: usize,
    },

    /// The date index contains a null entry
    #[error("Null date at row {position}")]
    NullDate {
        /// Row index of the null entry
        position: usize,
    },

    /// The panel has no rows
    #[error("Panel is empty")]
    Empty,
}
