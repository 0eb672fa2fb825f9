//! Shortall CLI binary.
//!
//! Drives the research core end to end: validates the panel snapshot,
//! builds annualized period summaries, and writes the dashboard view files.
//! Set `RUST_LOG` to control diagnostic output, e.g.
//! `RUST_LOG=debug shortall summary`.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shortall::{DashboardConfig, build_dashboard_views};
use shortall_data::{DEFAULT_PANEL_PATH, date_range, load_panel};
use shortall_output::{ExportFormat, write_summary_csv, write_view_json};
use shortall_summary::{PeriodSummary, aggregate_annualized_panel};

#[derive(Parser)]
#[command(name = "shortall")]
#[command(about = "Shortall: macro-asset returns research core", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the panel snapshot against the data contract
    Validate {
        /// Path of the parquet panel snapshot
        #[arg(long, default_value = DEFAULT_PANEL_PATH)]
        data: PathBuf,
    },

    /// Build the annualized period summary
    Summary {
        /// Path of the parquet panel snapshot
        #[arg(long, default_value = DEFAULT_PANEL_PATH)]
        data: PathBuf,

        /// Trailing lookback window in trading days
        #[arg(long, default_value = "252")]
        window: usize,

        /// Aggregation bucket width in calendar months
        #[arg(long, default_value = "1")]
        months: u32,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the full summary table as CSV to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Build all dashboard views and write one JSON file each
    Views {
        /// Path of the parquet panel snapshot
        #[arg(long, default_value = DEFAULT_PANEL_PATH)]
        data: PathBuf,

        /// Directory the view files are written into
        #[arg(long, default_value = "views")]
        out_dir: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { data } => validate_panel_file(&data),
        Commands::Summary {
            data,
            window,
            months,
            format,
            output,
        } => build_summary(&data, window, months, &format, output.as_deref()),
        Commands::Views { data, out_dir } => build_views(&data, &out_dir),
    }
}

fn validate_panel_file(data: &Path) -> Result<(), Box<dyn std::error::Error>> {
    info!(path = %data.display(), "validating panel snapshot");
    let panel = load_panel(data)?;
    let (first, last) = date_range(&panel)?;

    println!("Panel: {}", data.display());
    println!("  Rows:        {}", panel.height());
    println!("  Columns:     {}", panel.width());
    println!("  Date range:  {} to {}", first, last);
    println!("\nPanel contract satisfied.");

    Ok(())
}

fn build_summary(
    data: &Path,
    window: usize,
    months: u32,
    format: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let panel = load_panel(data)?;
    info!(window, months, "aggregating annualized panel");
    let summary = aggregate_annualized_panel(&panel, window, months)?;

    match format.to_lowercase().as_str() {
        "text" => print_summary_text(&summary, window, months),
        "json" => print_summary_json(&summary, window, months)?,
        other => return Err(format!("Unknown format: {other} (expected text or json)").into()),
    }

    if let Some(path) = output {
        write_summary_csv(&summary, path)?;
        println!("\nSummary table written to {}", path.display());
    }

    Ok(())
}

fn print_summary_text(summary: &PeriodSummary, window: usize, months: u32) {
    println!("\n══════════════════════════════════════════════════════════════");
    println!("ANNUALIZED PERIOD SUMMARY");
    println!("══════════════════════════════════════════════════════════════\n");

    println!("  Lookback window:  {} trading days", window);
    println!("  Bucket width:     {} month(s)", months);
    println!("  Periods:          {}", summary.len());
    println!("  Dropped periods:  {}", summary.dropped_periods);
    println!();
    println!("{}", summary.table.head(Some(12)));
}

fn print_summary_json(
    summary: &PeriodSummary,
    window: usize,
    months: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let columns: Vec<String> = summary
        .table
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let output = json!({
        "lookback_window_days": window,
        "bucket_months": months,
        "periods": summary.len(),
        "dropped_periods": summary.dropped_periods,
        "columns": columns,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn build_views(data: &Path, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let panel = load_panel(data)?;
    std::fs::create_dir_all(out_dir)?;

    info!(out_dir = %out_dir.display(), "building dashboard views");
    let views = build_dashboard_views(&panel, &DashboardConfig::default())?;

    write_view_json(
        &views.yield_comparison,
        out_dir.join("yield_comparison.json"),
        ExportFormat::Json,
    )?;
    println!("  yield_comparison.json     ✓");
    write_view_json(
        &views.rolling_returns,
        out_dir.join("rolling_returns.json"),
        ExportFormat::Json,
    )?;
    println!("  rolling_returns.json      ✓");
    write_view_json(
        &views.annual_returns,
        out_dir.join("annual_returns.json"),
        ExportFormat::Json,
    )?;
    println!("  annual_returns.json       ✓");
    write_view_json(
        &views.decade_scatter,
        out_dir.join("decade_scatter.json"),
        ExportFormat::Json,
    )?;
    println!("  decade_scatter.json       ✓");
    write_view_json(
        &views.cumulative_returns,
        out_dir.join("cumulative_returns.json"),
        ExportFormat::Json,
    )?;
    println!("  cumulative_returns.json   ✓");
    write_view_json(
        &views.bubble_year,
        out_dir.join("bubble_year.json"),
        ExportFormat::Json,
    )?;
    println!("  bubble_year.json          ✓");

    println!("\nAll views written to {}", out_dir.display());
    Ok(())
}
