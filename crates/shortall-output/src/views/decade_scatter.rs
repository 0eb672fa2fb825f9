//! Decade-grouped scatter of annualized portfolio excess returns.
//!
//! One trace set per selectable IRR period: the panel is aggregated at the
//! plot frequency with a lookback of 22 trading days per IRR month, points
//! are grouped by decade, and each point carries the weight and market
//! context shown on hover.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use shortall_data::columns::DATE_COLUMN;
use shortall_returns::TRADING_DAYS_PER_YEAR;
use shortall_summary::{DECADE_COLUMN, aggregate_annualized_panel};

use crate::error::Result;
use crate::views::util::{date_values, f64_required, i32_values, require_column};

/// Trading days per calendar month used to size the lookback window.
const DAYS_PER_MONTH: usize = 22;

/// Configuration for the decade scatter view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecadeScatterConfig {
    /// Aggregation frequency of the scatter points, in calendar months.
    pub plot_freq_months: u32,
    /// Summary column plotted on the x axis.
    pub column: String,
    /// Weight columns included as hover context.
    pub weight_hover: Vec<String>,
    /// Market annualized-return columns included as hover context.
    pub market_hover: Vec<String>,
    /// Points are restricted to years strictly after this year.
    pub start_year: i32,
    /// Selectable IRR periods, in months.
    pub irr_period_months: Vec<u32>,
}

impl Default for DecadeScatterConfig {
    fn default() -> Self {
        Self {
            plot_freq_months: 1,
            column: "IRR_ER_RP_Portfolio_SHORT".to_string(),
            weight_hover: vec![
                "RP_SHORT_SPX".to_string(),
                "RP_SHORT_10Y".to_string(),
                "RP_SHORT_DXY".to_string(),
            ],
            market_hover: vec![
                "IRR_RET_SPX_d".to_string(),
                "IRR_RET_10Y_d".to_string(),
                "IRR_RET_DXY_d".to_string(),
            ],
            start_year: 1970,
            irr_period_months: vec![1, 3, 6, 12],
        }
    }
}

/// A single scatter point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterPoint {
    /// Period date of the point.
    pub date: NaiveDate,
    /// Approximate start of the trailing return window.
    pub window_start: NaiveDate,
    /// Annualized windowed return at the period end.
    pub annualized_return: f64,
    /// De-annualized total return over the window,
    /// `annualized × lookback / 252`.
    pub total_return: f64,
    /// Mean period weights, aligned with the configured hover columns.
    pub weights: Vec<f64>,
    /// Market annualized returns, aligned with the configured hover columns.
    pub market_returns: Vec<f64>,
}

/// All points of one decade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecadeSeries {
    /// Decade label, e.g. 1970.
    pub decade: i32,
    /// Points of the decade, in period order.
    pub points: Vec<ScatterPoint>,
}

/// Scatter data for one selectable IRR period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterPeriod {
    /// IRR period in months.
    pub months: u32,
    /// Lookback window in trading days (22 per month).
    pub lookback_window: usize,
    /// Decade-grouped points, decades ascending.
    pub decades: Vec<DecadeSeries>,
}

/// The decade scatter view-model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecadeScatterView {
    /// Summary column plotted on the x axis.
    pub column: String,
    /// Year cutoff applied to the points (exclusive).
    pub start_year: i32,
    /// One entry per configured IRR period.
    pub periods: Vec<ScatterPeriod>,
}

/// Build the decade scatter view from the daily panel.
///
/// # Errors
/// Fails if the configured plot or hover columns are absent from the
/// aggregated summary.
pub fn build_decade_scatter(
    panel: &DataFrame,
    config: &DecadeScatterConfig,
) -> Result<DecadeScatterView> {
    let mut periods = Vec::with_capacity(config.irr_period_months.len());

    for &months in &config.irr_period_months {
        let lookback = DAYS_PER_MONTH * months as usize;
        let summary = aggregate_annualized_panel(panel, lookback, config.plot_freq_months)?;
        let table = summary
            .table
            .lazy()
            .filter(col(DATE_COLUMN).dt().year().gt(lit(config.start_year)))
            .collect()?;

        require_column(&table, &config.column)?;
        for hover in config.weight_hover.iter().chain(config.market_hover.iter()) {
            require_column(&table, hover)?;
        }

        let dates = date_values(&table, DATE_COLUMN)?;
        let decades = i32_values(&table, DECADE_COLUMN)?;
        let values = f64_required(&table, &config.column)?;
        let weight_series: Vec<Vec<f64>> = config
            .weight_hover
            .iter()
            .map(|column| f64_required(&table, column))
            .collect::<Result<_>>()?;
        let market_series: Vec<Vec<f64>> = config
            .market_hover
            .iter()
            .map(|column| f64_required(&table, column))
            .collect::<Result<_>>()?;

        let years_fraction = lookback as f64 / TRADING_DAYS_PER_YEAR;
        let window_days = Duration::days((years_fraction * 365.0) as i64);

        let mut by_decade: BTreeMap<i32, Vec<ScatterPoint>> = BTreeMap::new();
        for (row, date) in dates.iter().enumerate() {
            by_decade.entry(decades[row]).or_default().push(ScatterPoint {
                date: *date,
                window_start: *date - window_days,
                annualized_return: values[row],
                total_return: values[row] * years_fraction,
                weights: weight_series.iter().map(|series| series[row]).collect(),
                market_returns: market_series.iter().map(|series| series[row]).collect(),
            });
        }

        periods.push(ScatterPeriod {
            months,
            lookback_window: lookback,
            decades: by_decade
                .into_iter()
                .map(|(decade, points)| DecadeSeries { decade, points })
                .collect(),
        });
    }

    Ok(DecadeScatterView {
        column: config.column.clone(),
        start_year: config.start_year,
        periods,
    })
}
