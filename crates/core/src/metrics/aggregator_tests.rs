#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use kabuscope_market_data::{FinancialDisclosure, ListedInfo, QuoteRecord};

    use crate::errors::{Error, Result};
    use crate::metrics::{MarketDataStore, StockMetricsAggregator};
    use crate::settings::AnalyzerSettings;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn quote_series(code: &str) -> Vec<QuoteRecord> {
        (1..=5)
            .map(|d| QuoteRecord {
                date: NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
                code: code.to_string(),
                adjustment_close: Some(100.0 + d as f64),
                volume: Some(1000.0),
                ..Default::default()
            })
            .collect()
    }

    fn filing(code: &str) -> FinancialDisclosure {
        FinancialDisclosure {
            disclosed_date: day("2024-03-02"),
            local_code: code.to_string(),
            forecast_profit: Some(3000.0),
            equity: Some(15000.0),
            total_assets: Some(30000.0),
            equity_to_asset_ratio: Some(0.5),
            issued_shares: Some(100.0),
            average_shares: Some(100.0),
            ..Default::default()
        }
    }

    // --- Mock store ---
    struct MockStore {
        quotes: HashMap<String, Vec<QuoteRecord>>,
        statements: Vec<FinancialDisclosure>,
        listed: Vec<ListedInfo>,
    }

    impl MockStore {
        fn with_codes(codes: &[&str]) -> Self {
            MockStore {
                quotes: codes
                    .iter()
                    .map(|c| (c.to_string(), quote_series(c)))
                    .collect(),
                statements: codes.iter().map(|c| filing(c)).collect(),
                listed: codes
                    .iter()
                    .map(|c| ListedInfo {
                        code: c.to_string(),
                        company_name: format!("Company {}", c),
                    })
                    .collect(),
            }
        }
    }

    impl MarketDataStore for MockStore {
        fn financial_statements(&self, _date: NaiveDate) -> Result<Vec<FinancialDisclosure>> {
            Ok(self.statements.clone())
        }

        fn daily_quotes(&self, code: &str, _date: NaiveDate) -> Result<Vec<QuoteRecord>> {
            self.quotes
                .get(code)
                .cloned()
                .ok_or_else(|| Error::Store(format!("no quotes snapshot for {}", code)))
        }

        fn listed_info(&self, _date: NaiveDate) -> Result<Vec<ListedInfo>> {
            Ok(self.listed.clone())
        }
    }

    fn aggregator(store: MockStore) -> StockMetricsAggregator {
        StockMetricsAggregator::new(Arc::new(store), AnalyzerSettings::default())
    }

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn batch_returns_metrics_in_requested_order() {
        let agg = aggregator(MockStore::with_codes(&["13010", "72030", "99840"]));
        let results = agg
            .analyze_batch(&codes(&["99840", "13010", "72030"]), day("2024-03-05"))
            .unwrap();

        let returned: Vec<_> = results.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(returned, vec!["99840", "13010", "72030"]);
        assert_eq!(results[0].company_name, "Company 99840");
        assert_eq!(results[0].analysis_date, day("2024-03-05"));
    }

    #[test]
    fn one_failing_code_does_not_abort_the_batch() {
        // The middle code has no quotes snapshot.
        let agg = aggregator(MockStore::with_codes(&["13010", "99840"]));
        let results = agg
            .analyze_batch(&codes(&["13010", "72030", "99840"]), day("2024-03-05"))
            .unwrap();

        let returned: Vec<_> = results.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(returned, vec!["13010", "99840"]);
        assert!(agg.cached("72030").is_none());
    }

    #[test]
    fn results_are_cached_by_code() {
        let agg = aggregator(MockStore::with_codes(&["13010"]));
        assert!(agg.cached("13010").is_none());

        agg.analyze_batch(&codes(&["13010"]), day("2024-03-05"))
            .unwrap();

        let cached = agg.cached("13010").unwrap();
        assert_eq!(cached.code, "13010");
        assert_eq!(cached.merged.len(), 5);
        assert_eq!(cached.valuation.len(), 5);
    }

    #[test]
    fn company_name_falls_back_to_the_code() {
        let mut store = MockStore::with_codes(&["13010"]);
        store.listed.clear();
        let agg = aggregator(store);

        let results = agg
            .analyze_batch(&codes(&["13010"]), day("2024-03-05"))
            .unwrap();
        assert_eq!(results[0].company_name, "13010");
    }

    #[test]
    fn pipeline_stages_line_up_row_for_row() {
        let agg = aggregator(MockStore::with_codes(&["13010"]));
        let results = agg
            .analyze_batch(&codes(&["13010"]), day("2024-03-05"))
            .unwrap();
        let metrics = &results[0];

        assert_eq!(metrics.merged.len(), metrics.indicators.len());
        assert_eq!(metrics.indicators.len(), metrics.valuation.len());
        // The filing discloses on day 2; day 1 is covered by backfill.
        assert!(metrics.merged[0].disclosure.is_some());
        // Ratios flow through to the valuation stage.
        let last = metrics.valuation.last().unwrap();
        assert_eq!(last.discount_rate, Some(0.70));
        assert!(last.theoretical_price.is_some());
    }
}
