//! Theoretical-price computation.
//!
//! - [`tiers`] - bucketed discount and risk-assessment rates, leverage clamp
//! - [`model`] - the valuation-augmented record
//! - [`calculator`] - the row-wise valuation pipeline

pub mod calculator;
pub mod model;
pub mod tiers;

#[cfg(test)]
mod valuation_tests;

pub use calculator::calculate;
pub use model::ValuationRecord;
