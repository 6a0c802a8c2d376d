//! Batch orchestration of the per-security pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use log::{error, info};
use rayon::prelude::*;

use kabuscope_market_data::FinancialDisclosure;

use crate::alignment;
use crate::errors::Result;
use crate::indicators::IndicatorCalculator;
use crate::metrics::model::StockMetrics;
use crate::metrics::store::MarketDataStore;
use crate::settings::AnalyzerSettings;
use crate::valuation;

/// Runs the alignment/indicator/valuation pipeline for a batch of security
/// codes against one analysis date.
///
/// The statement set and the listing are loaded once per batch; codes are
/// then processed independently across a worker pool. A failure for one code
/// is logged and that code is omitted from the returned batch - the batch as
/// a whole only fails when the shared loads fail. Successful results come
/// back in the order the codes were requested and are also cached by code.
pub struct StockMetricsAggregator {
    store: Arc<dyn MarketDataStore>,
    settings: AnalyzerSettings,
    cache: DashMap<String, Arc<StockMetrics>>,
}

impl StockMetricsAggregator {
    pub fn new(store: Arc<dyn MarketDataStore>, settings: AnalyzerSettings) -> Self {
        Self {
            store,
            settings,
            cache: DashMap::new(),
        }
    }

    /// Analyzes every requested code; failed codes are absent from the
    /// result, not null-padded.
    pub fn analyze_batch(
        &self,
        codes: &[String],
        date: NaiveDate,
    ) -> Result<Vec<Arc<StockMetrics>>> {
        info!("Analyzing {} securities for {}", codes.len(), date);

        let statements = self.store.financial_statements(date)?;
        let names: HashMap<String, String> = self
            .store
            .listed_info(date)?
            .into_iter()
            .map(|entry| (entry.code, entry.company_name))
            .collect();

        let outcomes: Vec<(String, Result<Arc<StockMetrics>>)> = codes
            .par_iter()
            .map(|code| {
                let outcome = self.analyze_one(code, date, &statements, &names);
                (code.clone(), outcome)
            })
            .collect();

        let mut results = Vec::with_capacity(codes.len());
        for (code, outcome) in outcomes {
            match outcome {
                Ok(metrics) => {
                    self.cache.insert(code, Arc::clone(&metrics));
                    results.push(metrics);
                }
                Err(e) => error!("Analysis failed for {}: {}", code, e),
            }
        }

        info!(
            "Analyzed {}/{} securities successfully",
            results.len(),
            codes.len()
        );
        Ok(results)
    }

    /// Returns the cached result for a code from any previous batch.
    pub fn cached(&self, code: &str) -> Option<Arc<StockMetrics>> {
        self.cache.get(code).map(|entry| Arc::clone(entry.value()))
    }

    fn analyze_one(
        &self,
        code: &str,
        date: NaiveDate,
        statements: &[FinancialDisclosure],
        names: &HashMap<String, String>,
    ) -> Result<Arc<StockMetrics>> {
        let quotes = self.store.daily_quotes(code, date)?;
        let filings: Vec<FinancialDisclosure> = statements
            .iter()
            .filter(|d| d.local_code == code)
            .cloned()
            .collect();

        let merged = alignment::align(&quotes, &filings)?;
        let indicators = IndicatorCalculator::new(&self.settings).calculate(&merged);
        let valuation = valuation::calculate(&indicators);

        let company_name = names
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string());

        Ok(Arc::new(StockMetrics {
            code: code.to_string(),
            company_name,
            analysis_date: date,
            merged,
            indicators,
            valuation,
        }))
    }
}
