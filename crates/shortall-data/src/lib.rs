#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/shortall-research/shortall/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod columns;
pub mod error;
pub mod panel;

pub use error::{PanelError, Result};
pub use panel::{DEFAULT_PANEL_PATH, date_range, load_panel, validate_panel};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
