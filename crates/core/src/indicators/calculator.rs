//! Ratio and moving-average computation over a merged series.

use log::debug;

use crate::alignment::MergedRecord;
use crate::indicators::model::IndicatorRecord;
use crate::settings::AnalyzerSettings;
use crate::utils::{div, mul};

/// Computes the fixed set of valuation ratios for every row of a merged
/// series.
///
/// EPS and BPS divide by the issued-share count of the *last* row of the
/// series rather than the per-row count: a stock split changes the issued
/// count mid-series, and using the per-row value would put a discontinuous
/// jump into EPS/PER/BPS/PBR on the split date even though the adjusted
/// close is already split-corrected. Market cap intentionally keeps the
/// per-row average share count.
pub struct IndicatorCalculator {
    volume_window: usize,
    sma_window: usize,
}

impl IndicatorCalculator {
    pub fn new(settings: &AnalyzerSettings) -> Self {
        Self {
            volume_window: settings.volume_window,
            sma_window: settings.sma_window,
        }
    }

    pub fn calculate(&self, merged: &[MergedRecord]) -> Vec<IndicatorRecord> {
        let latest_shares = merged.last().and_then(MergedRecord::issued_shares);
        if latest_shares.is_none() {
            debug!("Latest issued-share count missing; EPS/BPS/PER/PBR will be undefined");
        }

        let volumes: Vec<Option<f64>> = merged.iter().map(|r| r.quote.volume).collect();
        let closes: Vec<Option<f64>> = merged.iter().map(|r| r.quote.adjustment_close).collect();

        // Smoothed volume is defined from the first row on; the long price
        // average stays undefined until a full window has accumulated.
        let smoothed_volume = trailing_mean(&volumes, self.volume_window, 1);
        let sma = trailing_mean(&closes, self.sma_window, self.sma_window);

        merged
            .iter()
            .zip(smoothed_volume)
            .zip(sma)
            .map(|((row, smoothed_volume), sma_200)| {
                let close = row.quote.adjustment_close;
                let eps = div(row.forecast_profit(), latest_shares);
                let bps = div(row.equity(), latest_shares);
                IndicatorRecord {
                    per: div(close, eps),
                    pbr: div(close, bps),
                    roe: div(row.forecast_profit(), row.equity()),
                    roa: div(row.forecast_profit(), row.total_assets()),
                    market_cap: mul(close, row.average_shares()),
                    eps,
                    bps,
                    smoothed_volume,
                    sma_200,
                    merged: row.clone(),
                }
            })
            .collect()
    }
}

/// Trailing moving average with tabular-engine semantics: for each row, the
/// mean of the present values in the trailing window, or `None` when fewer
/// than `min_periods` values are present.
pub(crate) fn trailing_mean(
    values: &[Option<f64>],
    window: usize,
    min_periods: usize,
) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let present: Vec<f64> = values[start..=i].iter().flatten().copied().collect();
            if present.len() >= min_periods.max(1) {
                Some(present.iter().sum::<f64>() / present.len() as f64)
            } else {
                None
            }
        })
        .collect()
}
