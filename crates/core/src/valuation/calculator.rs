//! Row-wise theoretical-price pipeline.

use crate::constants::{BUSINESS_VALUE_MULTIPLIER, THEORETICAL_PRICE_UPPER_MULTIPLE};
use crate::indicators::IndicatorRecord;
use crate::utils::{add, mul};
use crate::valuation::model::ValuationRecord;
use crate::valuation::tiers;

/// Computes the theoretical price and its upper bound for every row.
///
/// Pure and row-local: each output cell depends only on the current row's
/// indicator cells (the cross-series smoothing already happened in the
/// indicator stage).
pub fn calculate(rows: &[IndicatorRecord]) -> Vec<ValuationRecord> {
    rows.iter().map(valuation_row).collect()
}

fn valuation_row(row: &IndicatorRecord) -> ValuationRecord {
    let ratio = row.merged.equity_to_asset_ratio();

    let discount_rate = ratio.and_then(tiers::discount_rate);
    let roa_capped = row.roa.map(tiers::cap_roa);
    let risk_assessment_rate = row.pbr.and_then(tiers::risk_assessment_rate);
    let financial_leverage_adjustment = ratio.and_then(tiers::financial_leverage_adjustment);

    let asset_value = mul(row.bps, discount_rate);
    let business_value = mul(
        mul(row.eps, roa_capped),
        mul(Some(BUSINESS_VALUE_MULTIPLIER), financial_leverage_adjustment),
    );
    let theoretical_price = mul(add(business_value, asset_value), risk_assessment_rate);
    let theoretical_price_upper_limit =
        theoretical_price.map(|p| p * THEORETICAL_PRICE_UPPER_MULTIPLE);

    ValuationRecord {
        indicators: row.clone(),
        discount_rate,
        roa_capped,
        risk_assessment_rate,
        financial_leverage_adjustment,
        asset_value,
        business_value,
        theoretical_price,
        theoretical_price_upper_limit,
    }
}
