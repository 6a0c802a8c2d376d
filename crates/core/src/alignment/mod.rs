//! Timeline alignment of quote and disclosure series.
//!
//! - [`model`] - the per-trading-day merged record
//! - [`aligner`] - the as-of backward join and gap fill

pub mod aligner;
pub mod model;


pub use aligner::{align, join_asof};
pub use model::MergedRecord;
