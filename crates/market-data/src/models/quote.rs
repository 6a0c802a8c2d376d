use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of price data for one security.
///
/// Field names serialize in the provider's PascalCase column names, which are
/// the documented contract between the ingestion, analysis, and rendering
/// layers.
///
/// Raw prices are as traded; the `adjustment_*` fields are retroactively
/// corrected for splits and dividends and are the ones the valuation pipeline
/// reads. `adjustment_factor` carries the correction applied on this date
/// (1.0 on ordinary days).
///
/// Records are immutable once loaded - the pipeline never writes back into a
/// quote series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct QuoteRecord {
    pub date: NaiveDate,
    pub code: String,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub turnover_value: Option<f64>,
    pub adjustment_factor: Option<f64>,
    pub adjustment_open: Option<f64>,
    pub adjustment_high: Option<f64>,
    pub adjustment_low: Option<f64>,
    pub adjustment_close: Option<f64>,
    pub adjustment_volume: Option<f64>,
}
