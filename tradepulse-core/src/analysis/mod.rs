//! The analysis pipeline: series → indicators/regime/levels → signal →
//! risk targets → action plan.
//!
//! Data flows strictly one-way; no stage mutates another's output. The
//! whole pipeline is a pure function of the input series, so an `Analyzer`
//! can be shared across threads or rebuilt per call interchangeably.

pub mod bundle;
pub mod levels;
pub mod plan;
pub mod regime;
pub mod risk;
pub mod signal;

pub use bundle::{IndicatorBundle, IndicatorEngine, MovingAverages};
pub use levels::{LevelDetector, PivotPoints, SupportResistance};
pub use regime::{MarketRegime, RegimeClassifier, RegimeType};
pub use risk::{RiskTargetCalculator, RiskTargets, TrailingPlan};
pub use signal::{Reason, ReasonKind, SignalAction, SignalSynthesizer, TradingSignal};

use serde::Serialize;

use crate::domain::PriceSeries;

/// Complete analysis result for one symbol, ready for the presentation
/// layer to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub symbol: String,
    pub current_price: f64,
    pub market_regime: MarketRegime,
    pub indicators: IndicatorBundle,
    pub support_resistance: SupportResistance,
    pub signal: TradingSignal,
    pub risk_targets: RiskTargets,
    pub action_plan: Vec<String>,
}

/// Stateless pipeline façade.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    engine: IndicatorEngine,
    classifier: RegimeClassifier,
    detector: LevelDetector,
    synthesizer: SignalSynthesizer,
    risk: RiskTargetCalculator,
}

impl Analyzer {
    /// Run the full pipeline. `current_price` overrides the series' last
    /// close (a live quote may be fresher than the last daily bar); when
    /// both are missing the price is 0 and every stage degrades to its
    /// absent/neutral form.
    pub fn analyze(
        &self,
        symbol: &str,
        series: &PriceSeries,
        current_price: Option<f64>,
    ) -> Analysis {
        let price = current_price.or(series.last_close()).unwrap_or(0.0);

        let indicators = self.engine.compute(series, price);
        let market_regime = self.classifier.classify(series);
        let support_resistance = self.detector.detect(series, price);
        let signal =
            self.synthesizer
                .synthesize(price, &indicators, &market_regime, &support_resistance);
        let risk_targets = self.risk.calculate(
            price,
            signal.primary,
            &support_resistance,
            indicators.atr.map(|a| a.value),
        );
        let action_plan = plan::build_plan(&signal, &risk_targets, &market_regime);

        Analysis {
            symbol: symbol.to_string(),
            current_price: price,
            market_regime,
            indicators,
            support_resistance,
            signal,
            risk_targets,
            action_plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(closes: Vec<f64>) -> PriceSeries {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = (0..closes.len())
            .map(|i| base + chrono::Duration::days(i as i64))
            .collect();
        let volumes = vec![1_000_000; closes.len()];
        PriceSeries::from_parts(dates, closes, volumes).unwrap()
    }

    #[test]
    fn analyze_empty_series_degrades_cleanly() {
        let analysis = Analyzer::default().analyze("TEST", &PriceSeries::empty(), None);
        assert_eq!(analysis.current_price, 0.0);
        assert_eq!(analysis.market_regime.regime, RegimeType::Unknown);
        assert!(analysis.indicators.rsi.is_none());
        assert_eq!(analysis.signal.primary, SignalAction::Hold);
        assert!(!analysis.action_plan.is_empty());
    }

    #[test]
    fn explicit_price_overrides_last_close() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64 * 0.1).collect();
        let s = series(closes);
        let analysis = Analyzer::default().analyze("TEST", &s, Some(250.0));
        assert_eq!(analysis.current_price, 250.0);
        assert_eq!(analysis.risk_targets.entry_price, 250.0);
    }

    #[test]
    fn analysis_serializes_to_json() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.4).sin() * 6.0).collect();
        let s = series(closes);
        let analysis = Analyzer::default().analyze("SPY", &s, None);
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["symbol"], "SPY");
        assert!(json["market_regime"]["type"].is_string());
        assert!(json["risk_targets"]["take_profit"].is_array());
    }
}
