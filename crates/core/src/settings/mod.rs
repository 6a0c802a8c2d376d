//! Analyzer configuration.
//!
//! Passed explicitly into [`StockMetricsAggregator`](crate::metrics::StockMetricsAggregator)
//! at construction; there is no module-level shared configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SMA_WINDOW, DEFAULT_VOLUME_WINDOW};

/// Tunable parameters of the indicator stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerSettings {
    /// Trailing window for the smoothed-volume average, in trading days.
    pub volume_window: usize,
    /// Trailing window for the long price average, in trading days.
    pub sma_window: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            volume_window: DEFAULT_VOLUME_WINDOW,
            sma_window: DEFAULT_SMA_WINDOW,
        }
    }
}
