//! 10-year Treasury yield vs. Federal Funds rate comparison.
//!
//! Both level series are smoothed with a short rolling mean; the view also
//! carries their spread and the inversion mask (short rate above the long
//! yield) used to shade inverted stretches.

use chrono::NaiveDate;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use shortall_data::columns::{DATE_COLUMN, YIELD_COLUMNS};

use crate::error::{Result, ViewError};
use crate::views::util::{date_values, f64_values, require_column};

/// Configuration for the yield comparison view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YieldComparisonConfig {
    /// Rolling-mean smoothing window, in observations.
    pub smoothing_window: usize,
}

impl Default for YieldComparisonConfig {
    fn default() -> Self {
        Self {
            smoothing_window: 14,
        }
    }
}

/// The yield comparison view-model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YieldComparisonView {
    /// Full daily date index of the panel.
    pub dates: Vec<NaiveDate>,
    /// Smoothed 10-year Treasury yield.
    pub treasury_10y: Vec<Option<f64>>,
    /// Smoothed Federal Funds rate.
    pub fed_funds: Vec<Option<f64>>,
    /// Spread `fed_funds - treasury_10y`.
    pub spread: Vec<Option<f64>>,
    /// Inversion mask: true where the short rate exceeds the long yield.
    pub inverted: Vec<Option<bool>>,
}

/// Build the yield comparison view from the daily panel.
pub fn build_yield_comparison(
    panel: &DataFrame,
    config: &YieldComparisonConfig,
) -> Result<YieldComparisonView> {
    if config.smoothing_window == 0 {
        return Err(ViewError::InvalidConfig {
            reason: "smoothing window must be at least 1".to_string(),
        });
    }
    for column in YIELD_COLUMNS {
        require_column(panel, column)?;
    }

    let opts = RollingOptionsFixedWindow {
        window_size: config.smoothing_window,
        min_periods: config.smoothing_window,
        ..Default::default()
    };
    let frame = panel
        .clone()
        .lazy()
        .select([
            col(DATE_COLUMN),
            col("YIELD_10Y_y")
                .rolling_mean(opts.clone())
                .alias("treasury_10y"),
            col("YIELD_FFR_y").rolling_mean(opts).alias("fed_funds"),
        ])
        .with_columns([
            (col("fed_funds") - col("treasury_10y")).alias("spread"),
            col("fed_funds").gt(col("treasury_10y")).alias("inverted"),
        ])
        .collect()?;

    let inverted = frame
        .column("inverted")?
        .as_materialized_series()
        .bool()?
        .into_iter()
        .collect();

    Ok(YieldComparisonView {
        dates: date_values(&frame, DATE_COLUMN)?,
        treasury_10y: f64_values(&frame, "treasury_10y")?,
        fed_funds: f64_values(&frame, "fed_funds")?,
        spread: f64_values(&frame, "spread")?,
        inverted,
    })
}
