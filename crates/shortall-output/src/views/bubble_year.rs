//! Yearly short-portfolio bubble summary.
//!
//! One bubble per calendar year: the short risk-parity portfolio's windowed
//! return, sized by its outperformance over the long book (delta in percent
//! points, floored at zero, plus one) and de-emphasized in years the delta
//! is negative.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use shortall_summary::{YEAR_COLUMN, yearly_windowed_panel};

use crate::error::Result;
use crate::views::util::{f64_required, i32_values};

/// Configuration for the yearly bubble view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PortfolioBubbleConfig {
    /// Trailing window of the yearly windowed returns, in trading days.
    pub window_size: usize,
    /// Years before this one are excluded (inclusive cutoff).
    pub start_year: i32,
}

impl Default for PortfolioBubbleConfig {
    fn default() -> Self {
        Self {
            window_size: 256,
            start_year: 1970,
        }
    }
}

/// One year's bubble.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BubbleYear {
    /// Calendar year.
    pub year: i32,
    /// Windowed return of the short risk-parity portfolio at year end.
    pub performance: f64,
    /// Long/short delta as a fraction.
    pub delta: f64,
    /// Bubble size: delta in percent points floored at zero, plus one.
    pub bubble_size: f64,
    /// Whether the year is emphasized (non-negative delta).
    pub emphasized: bool,
    /// Mean short-book SPX weight over the year.
    pub weight_spx: f64,
    /// Mean short-book 10Y weight over the year.
    pub weight_10y: f64,
    /// Mean short-book DXY weight over the year.
    pub weight_dxy: f64,
    /// SPX windowed return at year end.
    pub market_spx: f64,
    /// 10Y windowed return at year end.
    pub market_10y: f64,
    /// DXY windowed return at year end.
    pub market_dxy: f64,
}

/// The yearly bubble view-model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BubbleYearView {
    /// Trailing window used for the yearly returns.
    pub window_size: usize,
    /// One bubble per surviving year, ascending.
    pub years: Vec<BubbleYear>,
}

/// Build the yearly bubble view from the daily panel.
pub fn build_bubble_year(
    panel: &DataFrame,
    config: &PortfolioBubbleConfig,
) -> Result<BubbleYearView> {
    let summary = yearly_windowed_panel(panel, config.window_size)?;
    let table = summary
        .table
        .lazy()
        .filter(col(YEAR_COLUMN).gt_eq(lit(config.start_year)))
        .collect()?;

    let years = i32_values(&table, YEAR_COLUMN)?;
    let performance = f64_required(&table, "WINDOWED_RET_RP_Portfolio_SHORT")?;
    let delta = f64_required(&table, "WINDOWED_RET_RPLONGSHORT_DELTA")?;
    let weight_spx = f64_required(&table, "RP_SHORT_SPX")?;
    let weight_10y = f64_required(&table, "RP_SHORT_10Y")?;
    let weight_dxy = f64_required(&table, "RP_SHORT_DXY")?;
    let market_spx = f64_required(&table, "WINDOWED_RET_SPX_d")?;
    let market_10y = f64_required(&table, "WINDOWED_RET_10Y_d")?;
    let market_dxy = f64_required(&table, "WINDOWED_RET_DXY_d")?;

    let years = years
        .into_iter()
        .enumerate()
        .map(|(row, year)| {
            let delta_pct = delta[row] * 100.0;
            BubbleYear {
                year,
                performance: performance[row],
                delta: delta[row],
                bubble_size: delta_pct.max(0.0) + 1.0,
                emphasized: delta_pct >= 0.0,
                weight_spx: weight_spx[row],
                weight_10y: weight_10y[row],
                weight_dxy: weight_dxy[row],
                market_spx: market_spx[row],
                market_10y: market_10y[row],
                market_dxy: market_dxy[row],
            }
        })
        .collect();

    Ok(BubbleYearView {
        window_size: config.window_size,
        years,
    })
}
