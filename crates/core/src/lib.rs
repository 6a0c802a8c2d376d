//! Kabuscope Core - per-security alignment and valuation pipeline.
//!
//! This crate contains the analysis logic for Kabuscope: it takes a daily
//! quote series and a financial-statement series for a security, aligns them
//! on the trading-day timeline, derives the standard valuation ratios, and
//! computes a rule-based theoretical price with an upper bound.
//!
//! It is I/O-agnostic: data arrives through the [`MarketDataStore`] trait
//! (implemented by the fetching/persistence layer) and results leave as
//! [`StockMetrics`] values consumed by the rendering layer.
//!
//! ```text
//! MarketDataStore -> alignment -> indicators -> valuation -> StockMetrics
//!                         (orchestrated per batch by StockMetricsAggregator)
//! ```

pub mod alignment;
pub mod constants;
pub mod errors;
pub mod indicators;
pub mod metrics;
pub mod settings;
pub mod utils;
pub mod valuation;

// Re-export the pipeline surface
pub use alignment::MergedRecord;
pub use indicators::{IndicatorCalculator, IndicatorRecord};
pub use metrics::{MarketDataStore, StockMetrics, StockMetricsAggregator};
pub use settings::AnalyzerSettings;
pub use valuation::ValuationRecord;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
