//! Market data models
//!
//! Core data types for the analysis pipeline inputs:
//! - `quote` - daily OHLCV records with split/dividend adjustments
//! - `disclosure` - periodic financial-statement filings
//! - `listing` - security-code to company-name mapping

mod disclosure;
mod listing;
mod quote;

pub use disclosure::FinancialDisclosure;
pub use listing::ListedInfo;
pub use quote::QuoteRecord;
