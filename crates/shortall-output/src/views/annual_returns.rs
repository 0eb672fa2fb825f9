//! Annual compounded returns of SPX and 10-year Treasuries.
//!
//! Per calendar year, the compounded return of each asset's daily series,
//! computed through log space like every other compounding call site.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use shortall_data::columns::{DATE_COLUMN, daily_return_column};
use shortall_summary::YEAR_COLUMN;

use crate::error::Result;
use crate::views::util::{f64_required, i32_values, require_column};

/// The annual returns view-model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnualReturnsView {
    /// Calendar years, ascending.
    pub years: Vec<i32>,
    /// Compounded SPX return per year.
    pub spx: Vec<f64>,
    /// Compounded 10-year Treasury return per year.
    pub treasury_10y: Vec<f64>,
}

/// Build the annual returns view from the daily panel.
pub fn build_annual_returns(panel: &DataFrame) -> Result<AnnualReturnsView> {
    let spx = daily_return_column("SPX");
    let treasury = daily_return_column("10Y");
    require_column(panel, &spx)?;
    require_column(panel, &treasury)?;

    let frame = panel
        .clone()
        .lazy()
        .with_column(col(DATE_COLUMN).dt().year().alias(YEAR_COLUMN))
        .group_by([col(YEAR_COLUMN)])
        .agg([
            (col(spx.as_str()).log1p().sum().exp() - lit(1.0)).alias("spx"),
            (col(treasury.as_str()).log1p().sum().exp() - lit(1.0)).alias("treasury_10y"),
        ])
        .sort([YEAR_COLUMN], Default::default())
        .collect()?;

    Ok(AnnualReturnsView {
        years: i32_values(&frame, YEAR_COLUMN)?,
        spx: f64_required(&frame, "spx")?,
        treasury_10y: f64_required(&frame, "treasury_10y")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sample_panel;
    use approx::assert_relative_eq;
    use chrono::Datelike;

    #[test]
    fn test_years_ascending_and_complete() {
        let panel = sample_panel(600);
        let view = build_annual_returns(&panel).unwrap();

        assert!(view.years.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(view.years.len(), view.spx.len());
        assert_eq!(view.years.len(), view.treasury_10y.len());
        assert_eq!(view.years[0], 1998);
    }

    #[test]
    fn test_matches_manual_compounding() {
        let panel = sample_panel(400);
        let view = build_annual_returns(&panel).unwrap();

        let dates: Vec<chrono::NaiveDate> =
            crate::views::util::date_values(&panel, DATE_COLUMN).unwrap();
        let returns: Vec<f64> = panel
            .column("RET_SPX_d")
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();

        for (row, year) in view.years.iter().enumerate() {
            let manual: f64 = dates
                .iter()
                .zip(&returns)
                .filter(|(date, _)| date.year() == *year)
                .fold(1.0, |acc, (_, r)| acc * (1.0 + r))
                - 1.0;
            assert_relative_eq!(view.spx[row], manual, max_relative = 1e-9);
        }
    }
}
