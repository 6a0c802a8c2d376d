//! Per-security orchestration of the analysis pipeline.
//!
//! - [`model`] - the per-security analysis result
//! - [`store`] - the trait seam to the data-loading layer
//! - [`aggregator`] - batch orchestration with per-code failure isolation

pub mod aggregator;
pub mod model;
pub mod store;

#[cfg(test)]
mod aggregator_tests;

pub use aggregator::StockMetricsAggregator;
pub use model::StockMetrics;
pub use store::MarketDataStore;
