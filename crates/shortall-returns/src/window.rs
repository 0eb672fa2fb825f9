//! Trailing-window compounded and annualized return transforms.
//!
//! A windowed return at date `t` is the return compounded over the trailing
//! `window` trading days ending at and including `t`. Compounding goes
//! through log space: `exp(Σ ln(1 + r)) - 1`, with a full-window minimum so
//! the first `window - 1` outputs are missing.

use polars::prelude::*;

use crate::error::{Result, ReturnsError};

/// Trading days in a calendar year.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Default trailing window: one trading year.
pub const DEFAULT_WINDOW: usize = 252;

/// Name of the annualized windowed-return column derived from `source`.
pub fn annualized_column_name(source: &str) -> String {
    format!("IRR_{source}")
}

/// Name of the cumulative windowed-return column derived from `source`.
pub fn windowed_column_name(source: &str) -> String {
    format!("WINDOWED_{source}")
}

/// Compounded return over the trailing `window` observations.
///
/// Inputs at or below -1 (total loss or worse) flow through the natural-log
/// domain unchanged: below -1 the output is NaN, exactly -1 compounds to a
/// -100% return. Not special-cased.
fn compound_over_window(returns: Expr, window: usize) -> Expr {
    returns
        .log1p()
        .rolling_sum(RollingOptionsFixedWindow {
            window_size: window,
            min_periods: window,
            ..Default::default()
        })
        .exp()
        - lit(1.0)
}

fn check_window(window: usize) -> Result<()> {
    if window == 0 {
        return Err(ReturnsError::InvalidWindow { window });
    }
    Ok(())
}

/// Expression computing the trailing-window compounded return of `column`.
///
/// # Arguments
/// * `column` - Name of a daily simple-return column
/// * `window` - Trailing observations required per output value
pub fn windowed_return_expr(column: &str, window: usize) -> Result<Expr> {
    check_window(window)?;
    Ok(compound_over_window(col(column), window))
}

/// Expression computing the linearly annualized trailing-window return of
/// `column`: the compounded windowed return scaled by `252 / window`.
pub fn windowed_annualized_return_expr(column: &str, window: usize) -> Result<Expr> {
    check_window(window)?;
    Ok(compound_over_window(col(column), window) * lit(TRADING_DAYS_PER_YEAR / window as f64))
}

/// Compounded return over the trailing `window` observations of a daily
/// simple-return series.
///
/// The output shares the input's length and order, with the first
/// `window - 1` values missing. The input series is not modified.
///
/// # Arguments
/// * `returns` - Daily simple returns (0.01 = +1%); missing values propagate
/// * `window` - Trailing observations, including the current one
pub fn calculate_windowed_returns(returns: &Series, window: usize) -> Result<Series> {
    check_window(window)?;
    apply_to_series(returns, compound_over_window(col(returns.name().as_str()), window))
}

/// Linearly annualized trailing-window return of a daily simple-return
/// series: [`calculate_windowed_returns`] scaled by `252 / window`.
pub fn calculate_windowed_annualized_returns(returns: &Series, window: usize) -> Result<Series> {
    check_window(window)?;
    apply_to_series(
        returns,
        compound_over_window(col(returns.name().as_str()), window)
            * lit(TRADING_DAYS_PER_YEAR / window as f64),
    )
}

/// Derive a new frame with an `IRR_<column>` annualized windowed-return
/// column added for every listed source column.
///
/// Absent source columns surface as Polars errors when the frame is
/// collected.
pub fn enrich_with_annualized_returns(
    frame: LazyFrame,
    columns: &[&str],
    window: usize,
) -> Result<LazyFrame> {
    check_window(window)?;
    let factor = TRADING_DAYS_PER_YEAR / window as f64;
    let derived: Vec<Expr> = columns
        .iter()
        .map(|column| {
            (compound_over_window(col(*column), window) * lit(factor))
                .alias(annualized_column_name(column))
        })
        .collect();
    Ok(frame.with_columns(derived))
}

/// Derive a new frame with a `WINDOWED_<column>` cumulative windowed-return
/// column added for every listed source column.
pub fn enrich_with_windowed_returns(
    frame: LazyFrame,
    columns: &[&str],
    window: usize,
) -> Result<LazyFrame> {
    check_window(window)?;
    let derived: Vec<Expr> = columns
        .iter()
        .map(|column| {
            compound_over_window(col(*column), window).alias(windowed_column_name(column))
        })
        .collect();
    Ok(frame.with_columns(derived))
}

fn apply_to_series(returns: &Series, expr: Expr) -> Result<Series> {
    let name = returns.name().clone();
    let frame = DataFrame::new(vec![returns.clone().into()])?;
    let out = frame.lazy().select([expr.alias(name.clone())]).collect()?;
    Ok(out.column(name.as_str())?.as_materialized_series().clone())
}
