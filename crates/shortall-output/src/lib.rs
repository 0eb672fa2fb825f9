#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/shortall-research/shortall/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod export;
pub mod views;

pub use error::{Result, ViewError};
pub use export::{
    ExportError, ExportFormat, write_annual_returns_csv, write_decade_scatter_csv,
    write_summary_csv, write_view_json,
};
pub use views::annual_returns::{AnnualReturnsView, build_annual_returns};
pub use views::bubble_year::{BubbleYear, BubbleYearView, PortfolioBubbleConfig, build_bubble_year};
pub use views::cumulative::{
    CumulativeReturnsConfig, CumulativeReturnsView, LookbackSeries, build_cumulative_returns,
};
pub use views::decade_scatter::{
    DecadeScatterConfig, DecadeScatterView, DecadeSeries, ScatterPeriod, ScatterPoint,
    build_decade_scatter,
};
pub use views::rolling::{
    AssetRollingSeries, RollingReturnsConfig, RollingReturnsView, RollingWindowSpec, WindowSeries,
    build_rolling_returns,
};
pub use views::yield_comparison::{
    YieldComparisonConfig, YieldComparisonView, build_yield_comparison,
};

#[cfg(test)]
pub(crate) mod test_util;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
