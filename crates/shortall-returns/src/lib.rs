#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/shortall-research/shortall/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod window;

pub use error::{Result, ReturnsError};
pub use window::{
    DEFAULT_WINDOW, TRADING_DAYS_PER_YEAR, annualized_column_name, calculate_windowed_returns,
    calculate_windowed_annualized_returns, enrich_with_annualized_returns,
    enrich_with_windowed_returns, windowed_annualized_return_expr, windowed_column_name,
    windowed_return_expr,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
