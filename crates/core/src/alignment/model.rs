use serde::Serialize;

use kabuscope_market_data::{FinancialDisclosure, QuoteRecord};

/// One trading day with the latest applicable filing attached.
///
/// The quote fields are always present; `disclosure` is `None` on days not
/// covered by any filing (only possible before the fill step, or when the
/// series carries no filing at all for those rows). Serialization flattens
/// both sides, so a merged row exposes the same PascalCase column names as
/// the inputs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergedRecord {
    #[serde(flatten)]
    pub quote: QuoteRecord,
    #[serde(flatten)]
    pub disclosure: Option<FinancialDisclosure>,
}

impl MergedRecord {
    /// Statement field accessor: `None` when no filing covers this row or
    /// the filing omits the field.
    fn fins(&self) -> Option<&FinancialDisclosure> {
        self.disclosure.as_ref()
    }

    pub fn forecast_profit(&self) -> Option<f64> {
        self.fins().and_then(|d| d.forecast_profit)
    }

    pub fn equity(&self) -> Option<f64> {
        self.fins().and_then(|d| d.equity)
    }

    pub fn total_assets(&self) -> Option<f64> {
        self.fins().and_then(|d| d.total_assets)
    }

    pub fn equity_to_asset_ratio(&self) -> Option<f64> {
        self.fins().and_then(|d| d.equity_to_asset_ratio)
    }

    pub fn issued_shares(&self) -> Option<f64> {
        self.fins().and_then(|d| d.issued_shares)
    }

    pub fn average_shares(&self) -> Option<f64> {
        self.fins().and_then(|d| d.average_shares)
    }
}
