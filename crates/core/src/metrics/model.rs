use chrono::NaiveDate;
use serde::Serialize;

use crate::alignment::MergedRecord;
use crate::indicators::IndicatorRecord;
use crate::valuation::ValuationRecord;

/// The complete analysis result for one security.
///
/// Carries the three progressively augmented series: the merged timeline,
/// the indicator-augmented rows, and the valuation-augmented rows. Built
/// once per analysis run; the rendering layer reads it, nothing mutates it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMetrics {
    pub code: String,
    pub company_name: String,
    pub analysis_date: NaiveDate,
    pub merged: Vec<MergedRecord>,
    pub indicators: Vec<IndicatorRecord>,
    pub valuation: Vec<ValuationRecord>,
}
