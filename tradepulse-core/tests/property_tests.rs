//! Property tests for pipeline invariants.
//!
//! Uses proptest to verify:
//! 1. RSI bounds and the minimum-window absence rule
//! 2. Stochastic degenerate-range fallback
//! 3. Pipeline idempotence (no hidden state or randomness)
//! 4. RSI monotonicity in the latest close
//! 5. Signal aggregation: strengths are exact sums; the BUY/SELL decision
//!    floor (reason strengths are fixed calibration constants, asserted
//!    as exact values on purpose)
//! 6. Stop-loss anchoring to the nearest support for BUY signals

use chrono::NaiveDate;
use proptest::prelude::*;
use tradepulse_core::analysis::{
    Analyzer, IndicatorEngine, RiskTargetCalculator, SignalAction, SupportResistance,
};
use tradepulse_core::domain::PriceSeries;
use tradepulse_core::indicators::Rsi;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_close() -> impl Strategy<Value = f64> {
    (1.0..1000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_closes(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_close(), 0..max_len)
}

fn make_series(closes: &[f64]) -> PriceSeries {
    let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let dates = (0..closes.len())
        .map(|i| base + chrono::Duration::days(i as i64))
        .collect();
    PriceSeries::from_parts(dates, closes.to_vec(), vec![750_000; closes.len()]).unwrap()
}

proptest! {
    /// Below 15 closes RSI is absent; at or above, it is within [0, 100].
    #[test]
    fn rsi_bounds_and_absence(closes in arb_closes(80)) {
        let rsi = Rsi::standard().compute(&closes);
        if closes.len() < 15 {
            prop_assert!(rsi.is_none());
        } else {
            let value = rsi.unwrap();
            prop_assert!((0.0..=100.0).contains(&value));
        }
    }

    /// A zero-range stochastic window always reads exactly 50.
    #[test]
    fn stochastic_degenerate_window_is_fifty(
        close in arb_close(),
        len in 14usize..60,
        price in arb_close(),
    ) {
        let closes = vec![close; len];
        let series = make_series(&closes);
        let bundle = IndicatorEngine::default().compute(&series, price);
        prop_assert_eq!(bundle.stochastic.unwrap().k, 50.0);
    }

    /// The pipeline has no hidden state: two runs agree exactly.
    #[test]
    fn analysis_is_idempotent(closes in arb_closes(60)) {
        let series = make_series(&closes);
        let analyzer = Analyzer::default();
        let a = analyzer.analyze("PROP", &series, None);
        let b = analyzer.analyze("PROP", &series, None);
        prop_assert_eq!(a, b);
    }

    /// Raising only the most recent close can never lower RSI.
    #[test]
    fn rsi_monotone_in_last_close(
        mut closes in prop::collection::vec(arb_close(), 15..40),
        bump in 0.01..50.0_f64,
    ) {
        let before = Rsi::standard().compute(&closes).unwrap();
        let last = closes.len() - 1;
        closes[last] += bump;
        let after = Rsi::standard().compute(&closes).unwrap();
        // Rounding to 2 dp keeps ordering up to half a cent of RSI.
        prop_assert!(after >= before - 0.005);
    }

    /// Strength sums and the decision floor hold for every reason set the
    /// trending-bullish strategy can produce.
    #[test]
    fn signal_aggregation_is_exact(
        rsi_pulled_back in any::<bool>(),
        above_vwap in any::<bool>(),
        diverging in any::<bool>(),
    ) {
        // Build a real series, then force the interesting indicator states
        // through a constructed bundle via the public synthesize path.
        use tradepulse_core::analysis::{MarketRegime, RegimeType, SignalSynthesizer};
        use tradepulse_core::domain::Trend;
        use tradepulse_core::indicators::{ObvValue, PricePosition, VwapValue};

        let series = make_series(&vec![100.0; 30]);
        let mut bundle = IndicatorEngine::default().compute(&series, 100.0);
        bundle.rsi = Some(if rsi_pulled_back { 35.0 } else { 55.0 });
        bundle.vwap = Some(VwapValue {
            value: 100.0,
            position: if above_vwap { PricePosition::Above } else { PricePosition::Below },
            distance_pct: 0.0,
        });
        bundle.obv = Some(ObvValue {
            value: 1_000,
            trend: Trend::Bullish,
            divergence: diverging,
        });

        let regime = MarketRegime {
            regime: RegimeType::Trending,
            direction: Trend::Bullish,
            strength: 0.5,
            adx_proxy: 50.0,
            ma_slope: 1.0,
        };
        let signal = SignalSynthesizer::default().synthesize(
            100.0,
            &bundle,
            &regime,
            &SupportResistance::default(),
        );

        let buy_strength: f64 = signal.entry_reasons.iter().map(|r| r.strength).sum();
        let sell_strength: f64 = signal.exit_reasons.iter().map(|r| r.strength).sum();

        let mut expected = 0.0;
        if rsi_pulled_back { expected += 0.7; }
        if above_vwap { expected += 0.6; }
        if rsi_pulled_back && diverging { expected += 0.9; }
        prop_assert!((buy_strength - expected).abs() < 1e-12);
        prop_assert_eq!(sell_strength, 0.0);

        if buy_strength > sell_strength && buy_strength >= 1.0 {
            prop_assert_eq!(signal.primary, SignalAction::Buy);
            prop_assert!((signal.strength - (buy_strength / 2.0).min(1.0)).abs() < 1e-12);
            prop_assert!((signal.confidence - (0.5 + buy_strength * 0.2).min(0.9)).abs() < 1e-12);
        } else {
            prop_assert_eq!(signal.primary, SignalAction::Hold);
        }
    }

    /// A BUY with a detected support always stops 2% under that support.
    #[test]
    fn buy_stop_anchors_to_support(
        price in 50.0..500.0_f64,
        support_frac in 0.5..0.99_f64,
        atr in 0.1..10.0_f64,
    ) {
        let support = price * support_frac;
        let levels = SupportResistance {
            nearest_support: Some(support),
            ..Default::default()
        };
        let targets = RiskTargetCalculator::default().calculate(
            price,
            SignalAction::Buy,
            &levels,
            Some(atr),
        );
        let expected = (support * 0.98 * 100.0).round() / 100.0;
        prop_assert_eq!(targets.stop_loss, expected);
        prop_assert!(targets.position_size_fraction >= 0.5);
        prop_assert!(targets.position_size_fraction <= 1.0);
    }
}
