#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/shortall-research/shortall/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dashboard;

// Re-export main types from sub-crates
pub use shortall_data as data;
pub use shortall_output as output;
pub use shortall_returns as returns;
pub use shortall_summary as summary;

pub use dashboard::{DashboardConfig, DashboardViews, build_dashboard_views};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
