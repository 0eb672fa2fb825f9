#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/shortall-research/shortall/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pipeline;
pub mod policy;

pub use error::{Result, SummaryError};
pub use pipeline::{
    DECADE_COLUMN, MONTH_COLUMN, OBS_COUNT_COLUMN, PeriodSummary, YEAR_COLUMN,
    aggregate_annualized_panel, summarize_by_period, yearly_windowed_panel,
};
pub use policy::{AggregationPolicy, PeriodSpec};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
