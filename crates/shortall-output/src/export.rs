//! Export of summary tables and chart views.
//!
//! Summary tables write as CSV through the Polars writer; views serialize
//! to JSON for the dashboard, with record-oriented CSV available where a
//! flat schema exists.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shortall_summary::PeriodSummary;

use crate::views::annual_returns::AnnualReturnsView;
use crate::views::decade_scatter::DecadeScatterView;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Write a period summary table as CSV.
pub fn write_summary_csv(
    summary: &PeriodSummary,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let mut table = summary.table.clone();
    let mut file = File::create(path.as_ref())?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut table)?;
    Ok(())
}

/// Serialize a view to a JSON file.
///
/// # Arguments
/// * `view` - Any serializable view-model
/// * `path` - Destination file
/// * `format` - [`ExportFormat::Json`] or [`ExportFormat::PrettyJson`]
pub fn write_view_json<T: Serialize>(
    view: &T,
    path: impl AsRef<Path>,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let payload = match format {
        ExportFormat::Json => serde_json::to_string(view)?,
        ExportFormat::PrettyJson => serde_json::to_string_pretty(view)?,
        ExportFormat::Csv => {
            return Err(ExportError::InvalidFormat(
                "views serialize to JSON, not CSV".to_string(),
            ));
        }
    };
    let mut file = File::create(path.as_ref())?;
    file.write_all(payload.as_bytes())?;
    Ok(())
}

/// One annual-returns row in record form.
#[derive(Debug, Serialize, Deserialize)]
struct AnnualReturnRecord {
    year: i32,
    spx: f64,
    treasury_10y: f64,
}

/// Write the annual returns view as record-oriented CSV.
pub fn write_annual_returns_csv(
    view: &AnnualReturnsView,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in 0..view.years.len() {
        writer.serialize(AnnualReturnRecord {
            year: view.years[row],
            spx: view.spx[row],
            treasury_10y: view.treasury_10y[row],
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// One scatter point in record form.
#[derive(Debug, Serialize, Deserialize)]
struct ScatterPointRecord {
    months: u32,
    decade: i32,
    date: chrono::NaiveDate,
    annualized_return: f64,
    total_return: f64,
}

/// Write the decade scatter view as record-oriented CSV, one row per point.
pub fn write_decade_scatter_csv(
    view: &DecadeScatterView,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for period in &view.periods {
        for series in &period.decades {
            for point in &series.points {
                writer.serialize(ScatterPointRecord {
                    months: period.months,
                    decade: series.decade,
                    date: point.date,
                    annualized_return: point.annualized_return,
                    total_return: point.total_return,
                })?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sample_panel;
    use crate::views::annual_returns::build_annual_returns;
    use shortall_summary::aggregate_annualized_panel;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("shortall_export_{name}"))
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }

    #[test]
    fn test_write_summary_csv() {
        let panel = sample_panel(200);
        let summary = aggregate_annualized_panel(&panel, 22, 1).unwrap();
        let path = temp_path("summary.csv");
        write_summary_csv(&summary, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("date,"));
        assert!(contents.contains("IRR_RET_SPX_d"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_view_json_roundtrip() {
        let panel = sample_panel(300);
        let view = build_annual_returns(&panel).unwrap();
        let path = temp_path("annual.json");
        write_view_json(&view, &path, ExportFormat::PrettyJson).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: AnnualReturnsView = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, view);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_view_csv_format_rejected() {
        let panel = sample_panel(300);
        let view = build_annual_returns(&panel).unwrap();
        let path = temp_path("annual_rejected.json");
        assert!(matches!(
            write_view_json(&view, &path, ExportFormat::Csv),
            Err(ExportError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_write_annual_returns_csv() {
        let panel = sample_panel(300);
        let view = build_annual_returns(&panel).unwrap();
        let path = temp_path("annual.csv");
        write_annual_returns_csv(&view, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("year,spx,treasury_10y"));
        assert_eq!(contents.lines().count(), view.years.len() + 1);
        std::fs::remove_file(&path).ok();
    }
}
