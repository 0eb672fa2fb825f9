//! Column vocabulary of the daily macro return panel.
//!
//! All consumers address the panel by these exact names. The vocabulary is
//! fixed by the upstream ETL step; a panel missing any required column is
//! rejected at load time.

/// Name of the date index column.
pub const DATE_COLUMN: &str = "date";

/// Daily return and excess-return columns enriched by the annualized
/// aggregation pipeline.
pub const AGGREGATE_RETURN_COLUMNS: [&str; 22] = [
    "RET_SPX_d",
    "RET_10Y_d",
    "RET_DXY_d",
    "RET_FFR_d",
    "RET_FXR_d",
    "RET_SHORT_SPX_d",
    "RET_SHORT_10Y_d",
    "RET_SHORT_DXY_d",
    "ER_SPX_d",
    "ER_10Y_d",
    "ER_DXY_d",
    "ER_SHORT_SPX_d",
    "ER_SHORT_10Y_d",
    "ER_SHORT_DXY_d",
    "ER_RP_Portfolio_LONG",
    "ER_RP_Portfolio_SHORT",
    "RET_RP_Portfolio_LONG",
    "RET_RP_Portfolio_SHORT",
    "ER_TANGENCY_Portfolio_SHORT",
    "RET_TANGENCY_Portfolio_SHORT",
    "RET_RPLONGSHORT_DELTA",
    "RET_IDEALSHORT_DELTA",
];

/// Risk-parity capital weight columns (long and short book).
pub const RISK_PARITY_WEIGHT_COLUMNS: [&str; 5] = [
    "RP_LONG_SPX",
    "RP_LONG_10Y",
    "RP_SHORT_SPX",
    "RP_SHORT_10Y",
    "RP_SHORT_DXY",
];

/// Maximum-Sharpe ("ideal short") capital weight columns.
pub const IDEAL_SHORT_WEIGHT_COLUMNS: [&str; 3] =
    ["IDEAL_SHORT_SPX", "IDEAL_SHORT_10Y", "IDEAL_SHORT_DXY"];

/// Yield-level columns used by the yield-comparison view.
pub const YIELD_COLUMNS: [&str; 2] = ["YIELD_10Y_y", "YIELD_FFR_y"];

/// Assets covered by the rolling-return views.
pub const MARKET_ASSETS: [&str; 3] = ["SPX", "10Y", "DXY"];

/// All capital weight columns, risk-parity first.
pub fn standard_weight_columns() -> Vec<String> {
    RISK_PARITY_WEIGHT_COLUMNS
        .iter()
        .chain(IDEAL_SHORT_WEIGHT_COLUMNS.iter())
        .map(|c| (*c).to_string())
        .collect()
}

/// Every column the panel contract requires, excluding the date index.
pub fn required_columns() -> Vec<&'static str> {
    AGGREGATE_RETURN_COLUMNS
        .iter()
        .chain(RISK_PARITY_WEIGHT_COLUMNS.iter())
        .chain(IDEAL_SHORT_WEIGHT_COLUMNS.iter())
        .chain(YIELD_COLUMNS.iter())
        .copied()
        .collect()
}

/// Daily simple-return column for an asset, e.g. `RET_SPX_d`.
pub fn daily_return_column(asset: &str) -> String {
    format!("RET_{asset}_d")
}

/// Daily excess-return column for an asset, e.g. `ER_SPX_d`.
pub fn daily_excess_return_column(asset: &str) -> String {
    format!("ER_{asset}_d")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_columns_unique() {
        let cols = required_columns();
        let mut deduped = cols.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(cols.len(), deduped.len());
        assert_eq!(cols.len(), 32);
    }

    #[test]
    fn test_asset_column_names() {
        assert_eq!(daily_return_column("SPX"), "RET_SPX_d");
        assert_eq!(daily_excess_return_column("10Y"), "ER_10Y_d");
    }

    #[test]
    fn test_weight_columns_order() {
        let weights = standard_weight_columns();
        assert_eq!(weights.len(), 8);
        assert_eq!(weights[0], "RP_LONG_SPX");
        assert_eq!(weights[5], "IDEAL_SHORT_SPX");
    }
}
