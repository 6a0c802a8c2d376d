//! Missing-value arithmetic shared by the indicator and valuation stages.
//!
//! Derived columns carry `Option<f64>`: any missing operand, or a zero
//! denominator, makes the result missing instead of raising. This mirrors
//! how a tabular engine lets NaN flow through a column without aborting the
//! series.

/// Division that treats a missing or zero denominator as undefined.
pub fn div(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}

/// Multiplication over possibly-missing operands.
pub fn mul(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a * b),
        _ => None,
    }
}

/// Addition over possibly-missing operands.
pub fn add(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + b),
        _ => None,
    }
}
