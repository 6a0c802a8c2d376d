//! Kabuscope Market Data Crate
//!
//! Input-side domain models for the Kabuscope valuation pipeline.
//!
//! # Overview
//!
//! This crate owns the tabular records the analysis core consumes:
//!
//! - [`QuoteRecord`] - one trading day of raw and split-adjusted OHLCV data
//! - [`FinancialDisclosure`] - one periodic financial-statement filing
//! - [`ListedInfo`] - security-code to company-name mapping (labeling only)
//!
//! It also owns the ingestion path from raw provider rows (JSON objects as
//! returned by an API client or CSV reader) into those typed records, with
//! column validation and lenient numeric coercion, plus security-code
//! normalization.
//!
//! Prices and statement figures are `Option<f64>`: a value a provider could
//! not supply (or that fails numeric coercion) is carried as `None` rather
//! than rejected, so a single bad cell degrades one column instead of the
//! whole series.

pub mod code;
pub mod errors;
pub mod models;
pub mod raw;

// Re-export all public types from models
pub use models::{FinancialDisclosure, ListedInfo, QuoteRecord};

// Re-export ingestion entry points
pub use raw::{disclosures_from_rows, listed_info_from_rows, quotes_from_rows};

// Re-export code normalization
pub use code::normalize_stock_code;

// Re-export error types
pub use errors::DataError;
