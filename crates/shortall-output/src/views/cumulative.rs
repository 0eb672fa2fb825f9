//! Cumulative windowed portfolio returns per selectable lookback.
//!
//! One full-index series per lookback option, each the compounded return
//! over a trailing window of 23 trading days per lookback month.

use chrono::NaiveDate;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use shortall_data::columns::DATE_COLUMN;
use shortall_returns::windowed_return_expr;

use crate::error::Result;
use crate::views::util::{date_values, f64_values, require_column};

/// Trading days per calendar month used to size the lookback window.
const DAYS_PER_MONTH: usize = 23;

/// Configuration for the cumulative returns view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CumulativeReturnsConfig {
    /// Daily return column the series are derived from.
    pub column: String,
    /// Selectable lookbacks, in months.
    pub lookback_months: Vec<u32>,
}

impl Default for CumulativeReturnsConfig {
    fn default() -> Self {
        Self {
            column: "RET_RP_Portfolio_SHORT".to_string(),
            lookback_months: vec![3, 6, 12, 24],
        }
    }
}

/// One derived series per lookback option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookbackSeries {
    /// Lookback in months.
    pub months: u32,
    /// Trailing window in trading days (23 per month).
    pub window: usize,
    /// Windowed returns aligned with the view's date index; the first
    /// `window - 1` entries are missing.
    pub values: Vec<Option<f64>>,
}

/// The cumulative returns view-model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CumulativeReturnsView {
    /// Source column of all series.
    pub column: String,
    /// Full daily date index of the panel.
    pub dates: Vec<NaiveDate>,
    /// One entry per configured lookback.
    pub series: Vec<LookbackSeries>,
}

/// Build the cumulative returns view from the daily panel.
pub fn build_cumulative_returns(
    panel: &DataFrame,
    config: &CumulativeReturnsConfig,
) -> Result<CumulativeReturnsView> {
    require_column(panel, &config.column)?;
    let dates = date_values(panel, DATE_COLUMN)?;

    let mut series = Vec::with_capacity(config.lookback_months.len());
    for &months in &config.lookback_months {
        let window = DAYS_PER_MONTH * months as usize;
        let frame = panel
            .clone()
            .lazy()
            .select([windowed_return_expr(&config.column, window)?.alias("value")])
            .collect()?;
        series.push(LookbackSeries {
            months,
            window,
            values: f64_values(&frame, "value")?,
        });
    }

    Ok(CumulativeReturnsView {
        column: config.column.clone(),
        dates,
        series,
    })
}
