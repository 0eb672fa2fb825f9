//! Rolling annualized market returns per asset and window.
//!
//! The DXY series is leveraged in the panel; it is deleveraged before the
//! transform so the view shows unlevered currency returns.

use chrono::NaiveDate;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use shortall_data::columns::{self, DATE_COLUMN};
use shortall_returns::windowed_annualized_return_expr;

use crate::error::Result;
use crate::views::util::{date_values, f64_values, require_column};

/// A rolling window with its display label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollingWindowSpec {
    /// Window length in trading days.
    pub days: usize,
    /// Display label, e.g. `1y`.
    pub label: String,
}

impl RollingWindowSpec {
    /// Create a window spec from length and label.
    pub fn new(days: usize, label: &str) -> Self {
        Self {
            days,
            label: label.to_string(),
        }
    }
}

/// Configuration for the rolling returns view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingReturnsConfig {
    /// Assets to include, addressed by `RET_<asset>_d` columns.
    pub assets: Vec<String>,
    /// Rolling windows to derive per asset.
    pub windows: Vec<RollingWindowSpec>,
    /// Leverage divisor applied to the DXY return column.
    pub dxy_leverage: f64,
}

impl Default for RollingReturnsConfig {
    fn default() -> Self {
        Self {
            assets: columns::MARKET_ASSETS
                .iter()
                .map(|asset| (*asset).to_string())
                .collect(),
            windows: vec![
                RollingWindowSpec::new(63, "3m"),
                RollingWindowSpec::new(126, "6m"),
                RollingWindowSpec::new(252, "1y"),
                RollingWindowSpec::new(504, "2y"),
            ],
            dxy_leverage: 5.0,
        }
    }
}

/// One rolling series for one asset and window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSeries {
    /// Window length in trading days.
    pub days: usize,
    /// Display label of the window.
    pub label: String,
    /// Annualized windowed returns aligned with the view's date index.
    pub values: Vec<Option<f64>>,
}

/// All rolling series of one asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetRollingSeries {
    /// Asset label, e.g. `SPX`.
    pub asset: String,
    /// One series per configured window.
    pub windows: Vec<WindowSeries>,
}

/// The rolling returns view-model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RollingReturnsView {
    /// Full daily date index of the panel.
    pub dates: Vec<NaiveDate>,
    /// Leverage divisor applied to the DXY return column.
    pub dxy_leverage: f64,
    /// One entry per configured asset.
    pub assets: Vec<AssetRollingSeries>,
}

/// Build the rolling returns view from the daily panel.
pub fn build_rolling_returns(
    panel: &DataFrame,
    config: &RollingReturnsConfig,
) -> Result<RollingReturnsView> {
    let dxy_column = columns::daily_return_column("DXY");
    require_column(panel, &dxy_column)?;

    let mut exprs = vec![col(DATE_COLUMN)];
    for asset in &config.assets {
        let source = columns::daily_return_column(asset);
        require_column(panel, &source)?;
        for window in &config.windows {
            exprs.push(
                windowed_annualized_return_expr(&source, window.days)?
                    .alias(format!("ROLL_{asset}_IRR_{}d", window.days)),
            );
        }
    }

    let frame = panel
        .clone()
        .lazy()
        .with_column((col(dxy_column.as_str()) / lit(config.dxy_leverage)).alias(dxy_column.as_str()))
        .select(exprs)
        .collect()?;

    let dates = date_values(&frame, DATE_COLUMN)?;
    let mut assets = Vec::with_capacity(config.assets.len());
    for asset in &config.assets {
        let mut windows = Vec::with_capacity(config.windows.len());
        for window in &config.windows {
            let name = format!("ROLL_{asset}_IRR_{}d", window.days);
            windows.push(WindowSeries {
                days: window.days,
                label: window.label.clone(),
                values: f64_values(&frame, &name)?,
            });
        }
        assets.push(AssetRollingSeries {
            asset: asset.clone(),
            windows,
        });
    }

    Ok(RollingReturnsView {
        dates,
        dxy_leverage: config.dxy_leverage,
        assets,
    })
}
