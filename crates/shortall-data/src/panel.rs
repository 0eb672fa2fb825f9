//! Panel snapshot loading and contract validation.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::*;

use crate::columns;
use crate::error::{PanelError, Result};

/// Relative path of the processed panel snapshot.
pub const DEFAULT_PANEL_PATH: &str = "data/processed_panel.parquet";

/// Load the daily panel from a parquet snapshot and validate it.
///
/// # Arguments
/// * `path` - Location of the parquet file, usually [`DEFAULT_PANEL_PATH`]
///
/// # Returns
/// The validated panel as a Polars DataFrame.
pub fn load_panel(path: impl AsRef<Path>) -> Result<DataFrame> {
    let file = File::open(path.as_ref())?;
    let panel = ParquetReader::new(file).finish()?;
    validate_panel(&panel)?;
    Ok(panel)
}

/// Validate the panel contract.
///
/// The date index must be typed `Date`, strictly increasing and free of
/// nulls, and every required vocabulary column must be present. Gaps
/// (non-trading days) are permitted.
pub fn validate_panel(panel: &DataFrame) -> Result<()> {
    if panel.height() == 0 {
        return Err(PanelError::Empty);
    }

    let date = column(panel, columns::DATE_COLUMN)?;
    if date.dtype() != &DataType::Date {
        return Err(PanelError::NotDateTyped {
            dtype: date.dtype().to_string(),
        });
    }

    // Date stores days since epoch; compare on the physical representation.
    let days = date.as_materialized_series().cast(&DataType::Int32)?;
    let days = days.i32()?;
    let mut prev: Option<i32> = None;
    for (position, value) in days.into_iter().enumerate() {
        let value = value.ok_or(PanelError::NullDate { position })?;
        if let Some(prev) = prev
            && value <= prev
        {
            return Err(PanelError::NonIncreasingDates { position });
        }
        prev = Some(value);
    }

    for required in columns::required_columns() {
        column(panel, required)?;
    }

    Ok(())
}

/// First and last dates of the panel index.
pub fn date_range(panel: &DataFrame) -> Result<(NaiveDate, NaiveDate)> {
    let date = column(panel, columns::DATE_COLUMN)?;
    let dates = date.as_materialized_series().date()?.clone();
    let first = dates.as_date_iter().next().flatten();
    let last = dates.as_date_iter().last().flatten();
    match (first, last) {
        (Some(first), Some(last)) => Ok((first, last)),
        _ => Err(PanelError::Empty),
    }
}

fn column<'a>(panel: &'a DataFrame, name: &str) -> Result<&'a Column> {
    panel.column(name).map_err(|_| PanelError::MissingColumn {
        column: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch_days(date: NaiveDate) -> i32 {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        (date - epoch).num_days() as i32
    }

    fn date_series_from_days(days: Vec<i32>) -> Series {
        Series::new(columns::DATE_COLUMN.into(), days)
            .cast(&DataType::Date)
            .unwrap()
    }

    fn date_series(start: NaiveDate, n: usize) -> Series {
        let base = epoch_days(start);
        date_series_from_days((0..n as i32).map(|i| base + i).collect())
    }

    fn full_panel(n: usize) -> DataFrame {
        let start = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
        let mut cols: Vec<Column> = vec![date_series(start, n).into()];
        for name in columns::required_columns() {
            cols.push(Series::new(name.into(), vec![0.01_f64; n]).into());
        }
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn test_validate_full_panel() {
        let panel = full_panel(10);
        assert!(validate_panel(&panel).is_ok());
    }

    #[test]
    fn test_empty_panel_rejected() {
        let panel = full_panel(10);
        let empty = panel.head(Some(0));
        assert!(matches!(validate_panel(&empty), Err(PanelError::Empty)));
    }

    #[test]
    fn test_duplicate_date_rejected() {
        let mut cols: Vec<Column> = vec![date_series_from_days(vec![100, 101, 101, 102]).into()];
        for name in columns::required_columns() {
            cols.push(Series::new(name.into(), vec![0.0_f64; 4]).into());
        }
        let panel = DataFrame::new(cols).unwrap();
        assert!(matches!(
            validate_panel(&panel),
            Err(PanelError::NonIncreasingDates { position: 2 })
        ));
    }

    #[test]
    fn test_decreasing_date_rejected() {
        let mut cols: Vec<Column> = vec![date_series_from_days(vec![100, 99]).into()];
        for name in columns::required_columns() {
            cols.push(Series::new(name.into(), vec![0.0_f64; 2]).into());
        }
        let panel = DataFrame::new(cols).unwrap();
        assert!(matches!(
            validate_panel(&panel),
            Err(PanelError::NonIncreasingDates { position: 1 })
        ));
    }

    #[test]
    fn test_missing_column_rejected() {
        let panel = full_panel(5).drop("RET_SPX_d").unwrap();
        match validate_panel(&panel) {
            Err(PanelError::MissingColumn { column }) => assert_eq!(column, "RET_SPX_d"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_integer_date_column_rejected() {
        let mut cols: Vec<Column> = vec![Series::new("date".into(), vec![1_i64, 2, 3]).into()];
        for name in columns::required_columns() {
            cols.push(Series::new(name.into(), vec![0.0_f64; 3]).into());
        }
        let panel = DataFrame::new(cols).unwrap();
        assert!(matches!(
            validate_panel(&panel),
            Err(PanelError::NotDateTyped { .. })
        ));
    }

    #[test]
    fn test_date_range() {
        let panel = full_panel(10);
        let (first, last) = date_range(&panel).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2000, 1, 3).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2000, 1, 12).unwrap());
    }

    #[test]
    fn test_gaps_permitted() {
        let mut cols: Vec<Column> = vec![date_series_from_days(vec![100, 103, 110]).into()];
        for name in columns::required_columns() {
            cols.push(Series::new(name.into(), vec![0.0_f64; 3]).into());
        }
        let panel = DataFrame::new(cols).unwrap();
        assert!(validate_panel(&panel).is_ok());
    }
}
