//! Column extraction helpers shared by the view builders.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::error::{Result, ViewError};

pub(crate) fn require_column(frame: &DataFrame, name: &str) -> Result<()> {
    if frame
        .get_column_names()
        .iter()
        .any(|column| column.as_str() == name)
    {
        Ok(())
    } else {
        Err(ViewError::MissingColumn {
            column: name.to_string(),
        })
    }
}

pub(crate) fn date_values(frame: &DataFrame, name: &str) -> Result<Vec<NaiveDate>> {
    let series = frame
        .column(name)
        .map_err(|_| ViewError::MissingColumn {
            column: name.to_string(),
        })?
        .as_materialized_series()
        .clone();
    let dates = series.date()?;
    dates
        .as_date_iter()
        .map(|date| {
            date.ok_or_else(|| ViewError::UnexpectedNull {
                column: name.to_string(),
            })
        })
        .collect()
}

pub(crate) fn f64_values(frame: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = frame
        .column(name)
        .map_err(|_| ViewError::MissingColumn {
            column: name.to_string(),
        })?
        .as_materialized_series();
    Ok(series.f64()?.into_iter().collect())
}

pub(crate) fn f64_required(frame: &DataFrame, name: &str) -> Result<Vec<f64>> {
    f64_values(frame, name)?
        .into_iter()
        .map(|value| {
            value.ok_or_else(|| ViewError::UnexpectedNull {
                column: name.to_string(),
            })
        })
        .collect()
}

pub(crate) fn i32_values(frame: &DataFrame, name: &str) -> Result<Vec<i32>> {
    let series = frame
        .column(name)
        .map_err(|_| ViewError::MissingColumn {
            column: name.to_string(),
        })?
        .as_materialized_series();
    series
        .i32()?
        .into_iter()
        .map(|value| {
            value.ok_or_else(|| ViewError::UnexpectedNull {
                column: name.to_string(),
            })
        })
        .collect()
}
