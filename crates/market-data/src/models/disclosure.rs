use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One periodic financial-statement filing for one security.
///
/// Filings arrive on an irregular cadence (quarterly or annual) keyed by
/// `disclosed_date`. Any series of filings must be ordered ascending by
/// disclosure date before being joined against a quote series.
///
/// All statement figures are `Option<f64>`: a filing routinely omits fields
/// (no next-year forecast in a Q1 report, for example) and the pipeline
/// treats those as missing, not as zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct FinancialDisclosure {
    pub disclosed_date: NaiveDate,
    pub local_code: String,
    pub type_of_document: String,

    // Actuals for the reported period
    pub net_sales: Option<f64>,
    pub operating_profit: Option<f64>,
    pub ordinary_profit: Option<f64>,
    pub profit: Option<f64>,
    pub earnings_per_share: Option<f64>,

    // Current fiscal year forecasts
    pub forecast_net_sales: Option<f64>,
    pub forecast_operating_profit: Option<f64>,
    pub forecast_ordinary_profit: Option<f64>,
    pub forecast_profit: Option<f64>,
    pub forecast_earnings_per_share: Option<f64>,

    // Next fiscal year forecasts
    pub next_year_forecast_net_sales: Option<f64>,
    pub next_year_forecast_operating_profit: Option<f64>,
    pub next_year_forecast_ordinary_profit: Option<f64>,
    pub next_year_forecast_profit: Option<f64>,
    pub next_year_forecast_earnings_per_share: Option<f64>,

    // Balance sheet
    pub total_assets: Option<f64>,
    pub equity: Option<f64>,
    pub equity_to_asset_ratio: Option<f64>,
    pub book_value_per_share: Option<f64>,

    // Share counts. The issued count is the fiscal-year-end
    // issued-and-outstanding figure including treasury stock.
    #[serde(rename = "NumberOfIssuedAndOutstandingSharesAtTheEndOfFiscalYearIncludingTreasuryStock")]
    pub issued_shares: Option<f64>,
    #[serde(rename = "AverageNumberOfShares")]
    pub average_shares: Option<f64>,
}
