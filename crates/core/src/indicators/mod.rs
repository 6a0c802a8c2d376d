//! Derived valuation ratios over a merged series.
//!
//! - [`model`] - the indicator-augmented record
//! - [`calculator`] - the per-row ratio and moving-average computations

pub mod calculator;
pub mod model;


pub use calculator::IndicatorCalculator;
pub use model::IndicatorRecord;
