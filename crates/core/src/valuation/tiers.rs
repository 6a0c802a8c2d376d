//! Tiered rate tables and the leverage clamp.
//!
//! The tier boundaries reproduce the source tables of the theoretical-price
//! method verbatim. The risk-assessment table leaves four PBR sub-ranges
//! uncovered ([0.20,0.21), [0.33,0.34), [0.40,0.41), [0.49,0.50)); values in
//! those gaps resolve to `None`, never to a neighboring tier. Do not close
//! the gaps without confirming the method's intent.

use crate::constants::{LEVERAGE_LOWER_BOUND, LEVERAGE_OFFSET, LEVERAGE_UPPER_BOUND, ROA_CAP};

/// Discount rate bucketed on the equity-to-asset ratio.
///
/// The buckets cover the whole real line; only a NaN input yields `None`.
pub fn discount_rate(equity_to_asset_ratio: f64) -> Option<f64> {
    let r = equity_to_asset_ratio;
    if r >= 0.8 {
        Some(0.8)
    } else if (0.67..0.8).contains(&r) {
        Some(0.75)
    } else if (0.5..0.67).contains(&r) {
        Some(0.7)
    } else if (0.33..0.5).contains(&r) {
        Some(0.65)
    } else if (0.1..0.33).contains(&r) {
        Some(0.6)
    } else if r < 0.1 {
        Some(0.5)
    } else {
        None
    }
}

/// Risk assessment rate bucketed on PBR. Gap inputs yield `None`.
pub fn risk_assessment_rate(pbr: f64) -> Option<f64> {
    if pbr >= 0.5 {
        Some(1.0)
    } else if (0.41..0.49).contains(&pbr) {
        Some(0.8)
    } else if (0.34..0.40).contains(&pbr) {
        Some(0.66)
    } else if (0.25..0.33).contains(&pbr) {
        Some(0.5)
    } else if (0.21..0.25).contains(&pbr) {
        Some(0.33)
    } else if (0.04..0.20).contains(&pbr) {
        Some(0.15)
    } else if pbr < 0.04 {
        Some(0.02)
    } else {
        None
    }
}

/// Caps ROA at [`ROA_CAP`] before it enters the business-value term.
pub fn cap_roa(roa: f64) -> f64 {
    if roa >= ROA_CAP {
        ROA_CAP
    } else {
        roa
    }
}

/// Financial leverage adjustment: the equity-to-asset ratio plus
/// [`LEVERAGE_OFFSET`], clamped into [0.66, 1.00], inverted.
pub fn financial_leverage_adjustment(equity_to_asset_ratio: f64) -> Option<f64> {
    if equity_to_asset_ratio.is_nan() {
        return None;
    }
    let t = (equity_to_asset_ratio + LEVERAGE_OFFSET).clamp(LEVERAGE_LOWER_BOUND, LEVERAGE_UPPER_BOUND);
    Some(1.0 / t)
}
