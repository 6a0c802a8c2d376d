//! Trait seam between the pipeline and the data-loading layer.

use chrono::NaiveDate;

use kabuscope_market_data::{FinancialDisclosure, ListedInfo, QuoteRecord};

use crate::errors::Result;

/// Supplies the tabular inputs for one analysis date.
///
/// Implemented by the fetching/persistence layer (API client replay, CSV
/// snapshots, a database). Implementations convert their own failures into
/// [`Error::Store`](crate::errors::Error::Store); a failure for one code
/// must not poison calls for other codes.
///
/// Implementations must be `Send + Sync`: the aggregator fans codes out
/// across a worker pool and calls `daily_quotes` concurrently.
pub trait MarketDataStore: Send + Sync {
    /// The full financial-statement set for the analysis date, all codes.
    /// Loaded once per batch and filtered per code by the caller.
    fn financial_statements(&self, date: NaiveDate) -> Result<Vec<FinancialDisclosure>>;

    /// The daily quote series for one security, bounded by the analysis
    /// date's snapshot window.
    fn daily_quotes(&self, code: &str, date: NaiveDate) -> Result<Vec<QuoteRecord>>;

    /// The code-to-company-name listing for the analysis date.
    fn listed_info(&self, date: NaiveDate) -> Result<Vec<ListedInfo>>;
}
