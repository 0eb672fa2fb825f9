//! Period summary construction over the daily panel.
//!
//! Every transform derives a new frame; the caller's panel is never
//! modified. A period with a missing value in any aggregated field is
//! excluded from the output entirely, and the number of excluded periods is
//! reported alongside the table.

use polars::prelude::*;

use shortall_data::columns::{self, DATE_COLUMN};
use shortall_returns::{
    annualized_column_name, enrich_with_annualized_returns, enrich_with_windowed_returns,
    windowed_column_name,
};

use crate::error::{Result, SummaryError};
use crate::policy::{AggregationPolicy, PeriodSpec};

/// Row-count column in summary tables.
pub const OBS_COUNT_COLUMN: &str = "n_obs";

/// Decade label column, `(year / 10) * 10`.
pub const DECADE_COLUMN: &str = "decade";

/// Calendar-month label column (month buckets only).
pub const MONTH_COLUMN: &str = "month";

/// Calendar-year key column (yearly summaries only).
pub const YEAR_COLUMN: &str = "year";

/// One summary row per period, plus the count of periods excluded by the
/// all-fields-present policy.
#[derive(Debug, Clone)]
pub struct PeriodSummary {
    /// The summary table, one row per surviving period, in period order.
    pub table: DataFrame,
    /// Periods removed because an aggregated field was missing.
    pub dropped_periods: usize,
}

impl PeriodSummary {
    /// Number of surviving periods.
    pub fn len(&self) -> usize {
        self.table.height()
    }

    /// Whether no period survived aggregation.
    pub fn is_empty(&self) -> bool {
        self.table.height() == 0
    }
}

/// Summarize the panel into one row per period.
///
/// Weight columns aggregate by mean, windowed-return columns by the value
/// in the period's last row, and every period carries an `n_obs` row count
/// and a `decade` label (month buckets additionally carry `month`). A
/// period with any missing aggregated field is dropped and counted.
///
/// # Arguments
/// * `panel` - Daily panel, date-sorted, already enriched with the policy's
///   windowed-return columns
/// * `policy` - Per-column aggregation mapping
/// * `period` - Calendar partitioning of the date index
///
/// # Errors
/// A policy column absent from the panel is a configuration error and fails
/// immediately; an empty result is valid and returned as an empty table.
pub fn summarize_by_period(
    panel: &DataFrame,
    policy: &AggregationPolicy,
    period: &PeriodSpec,
) -> Result<PeriodSummary> {
    period.validate()?;
    require_column(panel, DATE_COLUMN)?;
    for column in policy.columns() {
        require_column(panel, column)?;
    }

    let aggs = build_aggs(policy);
    let labeled = match period {
        PeriodSpec::MonthBuckets(months) => month_bucket_frame(panel, *months, aggs),
        PeriodSpec::MonthsOfYear(months) => {
            month_bucket_frame(panel, 1, aggs).filter(months_predicate(months))
        }
        PeriodSpec::CalendarYear => calendar_year_frame(panel, aggs),
    };

    // NaN and null both mean "missing" here; normalize before dropping.
    let aggregated = labeled.fill_nan(lit(NULL)).collect()?;
    let total_periods = aggregated.height();
    let table = aggregated.lazy().drop_nulls(None).collect()?;
    let dropped_periods = total_periods - table.height();

    Ok(PeriodSummary {
        table,
        dropped_periods,
    })
}

/// Enrich every vocabulary return column with its `IRR_` annualized
/// windowed return over `lookback_window` trading days, then summarize into
/// `num_months`-month buckets with the standard weight policy.
pub fn aggregate_annualized_panel(
    panel: &DataFrame,
    lookback_window: usize,
    num_months: u32,
) -> Result<PeriodSummary> {
    for column in columns::AGGREGATE_RETURN_COLUMNS {
        require_column(panel, column)?;
    }

    let enriched = enrich_with_annualized_returns(
        panel.clone().lazy(),
        &columns::AGGREGATE_RETURN_COLUMNS,
        lookback_window,
    )?
    .collect()?;

    let policy = AggregationPolicy::new(
        columns::standard_weight_columns(),
        columns::AGGREGATE_RETURN_COLUMNS
            .iter()
            .map(|column| annualized_column_name(column))
            .collect(),
    );
    summarize_by_period(&enriched, &policy, &PeriodSpec::MonthBuckets(num_months))
}

/// Enrich every vocabulary return column with its `WINDOWED_` cumulative
/// windowed return over `window_size` trading days, then summarize per
/// calendar year with the risk-parity weight policy.
pub fn yearly_windowed_panel(panel: &DataFrame, window_size: usize) -> Result<PeriodSummary> {
    for column in columns::AGGREGATE_RETURN_COLUMNS {
        require_column(panel, column)?;
    }

    let enriched = enrich_with_windowed_returns(
        panel.clone().lazy(),
        &columns::AGGREGATE_RETURN_COLUMNS,
        window_size,
    )?
    .collect()?;

    let policy = AggregationPolicy::new(
        columns::RISK_PARITY_WEIGHT_COLUMNS
            .iter()
            .map(|column| (*column).to_string())
            .collect(),
        columns::AGGREGATE_RETURN_COLUMNS
            .iter()
            .map(|column| windowed_column_name(column))
            .collect(),
    );
    summarize_by_period(&enriched, &policy, &PeriodSpec::CalendarYear)
}

fn build_aggs(policy: &AggregationPolicy) -> Vec<Expr> {
    let mut aggs = Vec::with_capacity(policy.weight_columns.len() + policy.windowed_columns.len() + 1);
    for column in &policy.weight_columns {
        aggs.push(col(column.as_str()).mean());
    }
    for column in &policy.windowed_columns {
        aggs.push(col(column.as_str()).last());
    }
    aggs.push(len().alias(OBS_COUNT_COLUMN));
    aggs
}

fn month_bucket_frame(panel: &DataFrame, months: u32, aggs: Vec<Expr>) -> LazyFrame {
    let every = format!("{months}mo");
    panel
        .clone()
        .lazy()
        .with_column(
            col(DATE_COLUMN)
                .dt()
                .truncate(lit(every))
                .alias(DATE_COLUMN),
        )
        .group_by([col(DATE_COLUMN)])
        .agg(aggs)
        .sort([DATE_COLUMN], Default::default())
        .with_columns([
            (col(DATE_COLUMN).dt().year().floor_div(lit(10)) * lit(10)).alias(DECADE_COLUMN),
            col(DATE_COLUMN)
                .dt()
                .month()
                .cast(DataType::Int32)
                .alias(MONTH_COLUMN),
        ])
}

fn calendar_year_frame(panel: &DataFrame, aggs: Vec<Expr>) -> LazyFrame {
    panel
        .clone()
        .lazy()
        .with_column(col(DATE_COLUMN).dt().year().alias(YEAR_COLUMN))
        .group_by([col(YEAR_COLUMN)])
        .agg(aggs)
        .sort([YEAR_COLUMN], Default::default())
        .with_columns([(col(YEAR_COLUMN).floor_div(lit(10)) * lit(10)).alias(DECADE_COLUMN)])
}

fn months_predicate(months: &[u32]) -> Expr {
    months
        .iter()
        .map(|month| col(MONTH_COLUMN).eq(lit(*month as i32)))
        .reduce(|acc, expr| acc.or(expr))
        .unwrap_or_else(|| lit(false))
}

fn require_column(panel: &DataFrame, name: &str) -> Result<()> {
    if panel
        .get_column_names()
        .iter()
        .any(|column| column.as_str() == name)
    {
        Ok(())
    } else {
        Err(SummaryError::MissingColumn {
            column: name.to_string(),
        })
    }
}
