//! Required-column contracts for raw provider rows.

/// The fiscal-year-end issued-share column, as named by the provider.
pub const ISSUED_SHARES_COLUMN: &str =
    "NumberOfIssuedAndOutstandingSharesAtTheEndOfFiscalYearIncludingTreasuryStock";

/// Columns every raw daily-quote row must carry.
pub const QUOTE_REQUIRED_COLUMNS: &[&str] = &[
    "Date",
    "Code",
    "Open",
    "High",
    "Low",
    "Close",
    "Volume",
    "TurnoverValue",
    "AdjustmentFactor",
    "AdjustmentOpen",
    "AdjustmentHigh",
    "AdjustmentLow",
    "AdjustmentClose",
    "AdjustmentVolume",
];

/// Columns every raw financial-statement row must carry.
pub const DISCLOSURE_REQUIRED_COLUMNS: &[&str] = &[
    "DisclosedDate",
    "LocalCode",
    "TypeOfDocument",
    "NetSales",
    "OperatingProfit",
    "OrdinaryProfit",
    "Profit",
    "EarningsPerShare",
    "ForecastNetSales",
    "ForecastOperatingProfit",
    "ForecastOrdinaryProfit",
    "ForecastProfit",
    "ForecastEarningsPerShare",
    "NextYearForecastNetSales",
    "NextYearForecastOperatingProfit",
    "NextYearForecastOrdinaryProfit",
    "NextYearForecastProfit",
    "NextYearForecastEarningsPerShare",
    "TotalAssets",
    "Equity",
    "EquityToAssetRatio",
    "BookValuePerShare",
    ISSUED_SHARES_COLUMN,
    "AverageNumberOfShares",
];

/// Columns every raw listed-info row must carry.
pub const LISTED_REQUIRED_COLUMNS: &[&str] = &["Code", "CompanyName"];
