//! Synthetic panel construction shared by the view tests.

use chrono::{Datelike, NaiveDate, Weekday};
use polars::prelude::*;

use shortall_data::columns;

/// Deterministic daily panel covering `days` weekdays from 1998-01-05.
///
/// Return columns hold small oscillating daily returns, weight columns
/// slowly drifting allocations, yield columns level series; every required
/// vocabulary column is present.
pub(crate) fn sample_panel(days: usize) -> DataFrame {
    let start = NaiveDate::from_ymd_opt(1998, 1, 5).unwrap();
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();

    let mut dates = Vec::with_capacity(days);
    let mut current = start;
    while dates.len() < days {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(current);
        }
        current = current.succ_opt().unwrap();
    }

    let day_numbers: Vec<i32> = dates
        .iter()
        .map(|date| (*date - epoch).num_days() as i32)
        .collect();
    let mut cols: Vec<Column> = vec![
        Series::new(columns::DATE_COLUMN.into(), day_numbers)
            .cast(&DataType::Date)
            .unwrap()
            .into(),
    ];

    for (i, name) in columns::AGGREGATE_RETURN_COLUMNS.iter().enumerate() {
        let values: Vec<f64> = (0..days)
            .map(|t| 0.002 * ((t as f64) * 0.13 + i as f64).sin())
            .collect();
        cols.push(Series::new((*name).into(), values).into());
    }
    for (i, name) in columns::RISK_PARITY_WEIGHT_COLUMNS
        .iter()
        .chain(columns::IDEAL_SHORT_WEIGHT_COLUMNS.iter())
        .enumerate()
    {
        let values: Vec<f64> = (0..days)
            .map(|t| 0.2 + 0.1 * ((t as f64) * 0.05 + i as f64).cos())
            .collect();
        cols.push(Series::new((*name).into(), values).into());
    }
    for (i, name) in columns::YIELD_COLUMNS.iter().enumerate() {
        let values: Vec<f64> = (0..days)
            .map(|t| 4.0 + i as f64 + ((t as f64) * 0.02).sin())
            .collect();
        cols.push(Series::new((*name).into(), values).into());
    }

    DataFrame::new(cols).unwrap()
}
