//! One-call construction of every dashboard view.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use shortall_output::{
    AnnualReturnsView, BubbleYearView, CumulativeReturnsConfig, CumulativeReturnsView,
    DecadeScatterConfig, DecadeScatterView, PortfolioBubbleConfig, RollingReturnsConfig,
    RollingReturnsView, YieldComparisonConfig, YieldComparisonView, build_annual_returns,
    build_bubble_year, build_cumulative_returns, build_decade_scatter, build_rolling_returns,
    build_yield_comparison,
};

/// Configuration bundle for all dashboard views.
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    /// Decade scatter configuration.
    pub decade_scatter: DecadeScatterConfig,
    /// Cumulative returns configuration.
    pub cumulative: CumulativeReturnsConfig,
    /// Rolling returns configuration.
    pub rolling: RollingReturnsConfig,
    /// Yield comparison configuration.
    pub yield_comparison: YieldComparisonConfig,
    /// Yearly bubble configuration.
    pub bubble: PortfolioBubbleConfig,
}

/// Every view the dashboard renders, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardViews {
    /// 10Y Treasury vs. Fed Funds comparison.
    pub yield_comparison: YieldComparisonView,
    /// Rolling annualized market returns.
    pub rolling_returns: RollingReturnsView,
    /// Annual compounded SPX/10Y returns.
    pub annual_returns: AnnualReturnsView,
    /// Decade-grouped portfolio scatter.
    pub decade_scatter: DecadeScatterView,
    /// Cumulative windowed portfolio returns.
    pub cumulative_returns: CumulativeReturnsView,
    /// Yearly short-portfolio bubbles.
    pub bubble_year: BubbleYearView,
}

/// Build every dashboard view from the validated daily panel.
pub fn build_dashboard_views(
    panel: &DataFrame,
    config: &DashboardConfig,
) -> shortall_output::Result<DashboardViews> {
    Ok(DashboardViews {
        yield_comparison: build_yield_comparison(panel, &config.yield_comparison)?,
        rolling_returns: build_rolling_returns(panel, &config.rolling)?,
        annual_returns: build_annual_returns(panel)?,
        decade_scatter: build_decade_scatter(panel, &config.decade_scatter)?,
        cumulative_returns: build_cumulative_returns(panel, &config.cumulative)?,
        bubble_year: build_bubble_year(panel, &config.bubble)?,
    })
}
