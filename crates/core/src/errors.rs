//! Core error types for the analysis pipeline.
//!
//! Storage- and transport-specific failures are converted to these types by
//! the layer implementing [`MarketDataStore`](crate::metrics::MarketDataStore).
//! Undefined computations are not errors: they surface as `None` cells in the
//! derived columns and leave the rest of the series usable.

use thiserror::Error;

use kabuscope_market_data::DataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analysis pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Data validation failed: {0}")]
    Data(#[from] DataError),

    #[error("Market data store operation failed: {0}")]
    Store(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
