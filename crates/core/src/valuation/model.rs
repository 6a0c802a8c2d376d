use serde::Serialize;

use crate::indicators::IndicatorRecord;

/// An indicator row augmented with the theoretical-price columns.
///
/// `TheoreticalStockPrice` and `TheoreticalStockPriceUpperLimit` are the
/// columns the rendering layer plots against the adjusted close. Any missing
/// operand upstream (a rate gap, an undefined ratio) leaves the dependent
/// cells missing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValuationRecord {
    #[serde(flatten)]
    pub indicators: IndicatorRecord,
    #[serde(rename = "DiscountRate")]
    pub discount_rate: Option<f64>,
    #[serde(rename = "ROA_Capped")]
    pub roa_capped: Option<f64>,
    #[serde(rename = "RiskAssessmentRate")]
    pub risk_assessment_rate: Option<f64>,
    #[serde(rename = "FinancialLeverageAdjustment")]
    pub financial_leverage_adjustment: Option<f64>,
    #[serde(rename = "AssetValue")]
    pub asset_value: Option<f64>,
    #[serde(rename = "BusinessValue")]
    pub business_value: Option<f64>,
    #[serde(rename = "TheoreticalStockPrice")]
    pub theoretical_price: Option<f64>,
    #[serde(rename = "TheoreticalStockPriceUpperLimit")]
    pub theoretical_price_upper_limit: Option<f64>,
}
