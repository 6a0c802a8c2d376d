#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use kabuscope_market_data::{FinancialDisclosure, QuoteRecord};

    use crate::alignment::MergedRecord;
    use crate::indicators::IndicatorRecord;
    use crate::valuation::tiers::{
        cap_roa, discount_rate, financial_leverage_adjustment, risk_assessment_rate,
    };
    use crate::valuation::{calculate, ValuationRecord};

    fn indicator_row(
        equity_to_asset_ratio: Option<f64>,
        eps: Option<f64>,
        bps: Option<f64>,
        pbr: Option<f64>,
        roa: Option<f64>,
    ) -> IndicatorRecord {
        IndicatorRecord {
            merged: MergedRecord {
                quote: QuoteRecord {
                    code: "13010".to_string(),
                    ..Default::default()
                },
                disclosure: Some(FinancialDisclosure {
                    local_code: "13010".to_string(),
                    equity_to_asset_ratio,
                    ..Default::default()
                }),
            },
            eps,
            bps,
            per: None,
            pbr,
            roe: None,
            roa,
            market_cap: None,
            smoothed_volume: None,
            sma_200: None,
        }
    }

    fn one(row: IndicatorRecord) -> ValuationRecord {
        calculate(&[row]).remove(0)
    }

    #[test]
    fn discount_rate_tier_boundaries() {
        assert_eq!(discount_rate(0.80), Some(0.80));
        assert_eq!(discount_rate(0.75), Some(0.75));
        assert_eq!(discount_rate(0.67), Some(0.75));
        assert_eq!(discount_rate(0.6699), Some(0.70));
        assert_eq!(discount_rate(0.50), Some(0.70));
        assert_eq!(discount_rate(0.33), Some(0.65));
        assert_eq!(discount_rate(0.10), Some(0.60));
        assert_eq!(discount_rate(0.0999), Some(0.50));
        assert_eq!(discount_rate(0.0), Some(0.50));
    }

    #[test]
    fn risk_rate_tier_boundaries() {
        assert_eq!(risk_assessment_rate(0.50), Some(1.0));
        assert_eq!(risk_assessment_rate(0.48), Some(0.8));
        assert_eq!(risk_assessment_rate(0.45), Some(0.8));
        assert_eq!(risk_assessment_rate(0.41), Some(0.8));
        assert_eq!(risk_assessment_rate(0.39), Some(0.66));
        assert_eq!(risk_assessment_rate(0.34), Some(0.66));
        assert_eq!(risk_assessment_rate(0.30), Some(0.5));
        assert_eq!(risk_assessment_rate(0.24), Some(0.33));
        assert_eq!(risk_assessment_rate(0.15), Some(0.15));
        assert_eq!(risk_assessment_rate(0.039), Some(0.02));
    }

    #[test]
    fn risk_rate_gaps_are_undefined_not_a_neighboring_tier() {
        for pbr in [0.205, 0.335, 0.405, 0.495, 0.20, 0.33, 0.40, 0.49] {
            assert_eq!(risk_assessment_rate(pbr), None, "pbr = {}", pbr);
        }
    }

    #[test]
    fn roa_cap_applies_only_at_and_above_the_cap() {
        assert_eq!(cap_roa(0.35), 0.3);
        assert_eq!(cap_roa(0.30), 0.3);
        assert_eq!(cap_roa(0.29), 0.29);
        assert_eq!(cap_roa(-0.1), -0.1);
    }

    #[test]
    fn leverage_clamp_hits_the_bounds_exactly() {
        // 0.2 + 0.33 = 0.53 -> clamped up to 0.66.
        assert_eq!(financial_leverage_adjustment(0.2), Some(1.0 / 0.66));
        // 0.33 + 0.33 = 0.66 -> exactly the lower bound.
        assert_eq!(financial_leverage_adjustment(0.33), Some(1.0 / 0.66));
        // 0.9 + 0.33 = 1.23 -> clamped down to 1.0.
        assert_eq!(financial_leverage_adjustment(0.9), Some(1.0));
        // Inside the band passes through unclamped.
        assert_eq!(financial_leverage_adjustment(0.5), Some(1.0 / (0.5 + 0.33)));
    }

    #[test]
    fn full_row_combines_the_terms() {
        let row = indicator_row(
            Some(0.75),
            Some(20.0),
            Some(400.0),
            Some(0.45),
            Some(0.10),
        );
        let v = one(row);

        assert_eq!(v.discount_rate, Some(0.75));
        assert_eq!(v.risk_assessment_rate, Some(0.8));
        // 0.75 + 0.33 = 1.08 -> clamped to 1.0.
        assert_eq!(v.financial_leverage_adjustment, Some(1.0));
        assert_eq!(v.asset_value, Some(400.0 * 0.75));
        assert_eq!(v.business_value, Some(20.0 * 0.10 * 150.0));
        let expected = (300.0 + 300.0) * 0.8;
        assert_eq!(v.theoretical_price, Some(expected));
        assert_eq!(v.theoretical_price_upper_limit, Some(expected * 2.0));
    }

    #[test]
    fn gap_pbr_leaves_the_theoretical_price_undefined() {
        let row = indicator_row(
            Some(0.75),
            Some(20.0),
            Some(400.0),
            Some(0.495),
            Some(0.10),
        );
        let v = one(row);

        assert_eq!(v.risk_assessment_rate, None);
        // Upstream terms still compute; only the rate-dependent cells vanish.
        assert_eq!(v.asset_value, Some(300.0));
        assert_eq!(v.theoretical_price, None);
        assert_eq!(v.theoretical_price_upper_limit, None);
    }

    #[test]
    fn missing_ratio_leaves_rate_columns_undefined() {
        let row = indicator_row(None, Some(20.0), Some(400.0), Some(0.6), Some(0.10));
        let v = one(row);

        assert_eq!(v.discount_rate, None);
        assert_eq!(v.financial_leverage_adjustment, None);
        assert_eq!(v.asset_value, None);
        assert_eq!(v.business_value, None);
        assert_eq!(v.theoretical_price, None);
    }

    #[test]
    fn serialized_rows_expose_the_documented_column_names() {
        let row = indicator_row(
            Some(0.75),
            Some(20.0),
            Some(400.0),
            Some(0.45),
            Some(0.10),
        );
        let json = serde_json::to_value(one(row)).unwrap();

        for column in [
            "Code",
            "EquityToAssetRatio",
            "EPS",
            "BPS",
            "PER",
            "PBR",
            "ROE",
            "ROA",
            "MarketCap",
            "Smoothed_volume",
            "SMA_200",
            "DiscountRate",
            "ROA_Capped",
            "RiskAssessmentRate",
            "FinancialLeverageAdjustment",
            "AssetValue",
            "BusinessValue",
            "TheoreticalStockPrice",
            "TheoreticalStockPriceUpperLimit",
        ] {
            assert!(json.get(column).is_some(), "missing column {}", column);
        }
    }

    proptest! {
        #[test]
        fn discount_rate_is_total_on_the_unit_interval(r in 0.0f64..=1.0) {
            prop_assert!(discount_rate(r).is_some());
        }

        #[test]
        fn risk_rate_is_none_exactly_in_the_gaps(pbr in 0.0f64..=1.0) {
            let in_gap = (0.20..0.21).contains(&pbr)
                || (0.33..0.34).contains(&pbr)
                || (0.40..0.41).contains(&pbr)
                || (0.49..0.50).contains(&pbr);
            prop_assert_eq!(risk_assessment_rate(pbr).is_none(), in_gap);
        }

        #[test]
        fn leverage_denominator_stays_in_the_clamp_band(r in -1.0f64..=2.0) {
            let adjustment = financial_leverage_adjustment(r).unwrap();
            // 1/t for t in [0.66, 1.00]
            prop_assert!((1.0..=1.0 / 0.66 + 1e-12).contains(&adjustment));
        }
    }
}
