use serde::Serialize;

use crate::alignment::MergedRecord;

/// A merged row augmented with the standard valuation ratios.
///
/// Serialized column names (`PER`, `PBR`, `Smoothed_volume`, `SMA_200`, ...)
/// are the documented contract with the rendering layer. Every derived cell
/// is `Option<f64>`: a missing or zero denominator leaves the cell missing
/// without failing the series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndicatorRecord {
    #[serde(flatten)]
    pub merged: MergedRecord,
    #[serde(rename = "EPS")]
    pub eps: Option<f64>,
    #[serde(rename = "BPS")]
    pub bps: Option<f64>,
    #[serde(rename = "PER")]
    pub per: Option<f64>,
    #[serde(rename = "PBR")]
    pub pbr: Option<f64>,
    #[serde(rename = "ROE")]
    pub roe: Option<f64>,
    #[serde(rename = "ROA")]
    pub roa: Option<f64>,
    #[serde(rename = "MarketCap")]
    pub market_cap: Option<f64>,
    #[serde(rename = "Smoothed_volume")]
    pub smoothed_volume: Option<f64>,
    #[serde(rename = "SMA_200")]
    pub sma_200: Option<f64>,
}
