//! Composite signal synthesis.
//!
//! Regime-conditioned strategy selection: pullback entries in bull trends,
//! rally exits in bear trends, band-edge reversals in ranges, and an OBV
//! divergence boost on confirmed pullbacks. Reason strengths, the >= 1.0
//! decision floor, and the confidence coefficients are fixed calibration
//! constants.

use serde::Serialize;

use crate::analysis::bundle::IndicatorBundle;
use crate::analysis::levels::SupportResistance;
use crate::analysis::regime::{MarketRegime, RegimeType};
use crate::domain::Trend;
use crate::indicators::{MomentumLabel, PricePosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

/// Label for one contributing entry/exit reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    PullbackBuy,
    VwapSupport,
    RallySell,
    OversoldBounce,
    OverboughtReversal,
    BullishDivergence,
}

impl ReasonKind {
    pub fn description(&self) -> &'static str {
        match self {
            ReasonKind::PullbackBuy => "temporary pullback within an uptrend",
            ReasonKind::VwapSupport => "buyers in control above VWAP",
            ReasonKind::RallySell => "temporary rally within a downtrend",
            ReasonKind::OversoldBounce => "oversold near a support level",
            ReasonKind::OverboughtReversal => "overbought near a resistance level",
            ReasonKind::BullishDivergence => "bullish price/OBV divergence",
        }
    }
}

/// One contributing reason with its calibrated strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reason {
    pub kind: ReasonKind,
    pub strength: f64,
}

/// Synthesized trading signal for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradingSignal {
    pub primary: SignalAction,
    /// Winning-side strength mapped into [0, 1]; 0 for HOLD.
    pub strength: f64,
    /// Confidence in [0, 1].
    pub confidence: f64,
    /// Which strategy family produced the reasons.
    pub strategy: RegimeType,
    pub entry_reasons: Vec<Reason>,
    pub exit_reasons: Vec<Reason>,
}

#[derive(Debug, Clone, Default)]
pub struct SignalSynthesizer;

/// Price must be within 2% of a level for range reversals to fire.
const LEVEL_PROXIMITY: f64 = 0.02;

impl SignalSynthesizer {
    /// Deterministic given its inputs; pure function of the pipeline stages.
    pub fn synthesize(
        &self,
        current_price: f64,
        indicators: &IndicatorBundle,
        regime: &MarketRegime,
        levels: &SupportResistance,
    ) -> TradingSignal {
        let mut entry_reasons = Vec::new();
        let mut exit_reasons = Vec::new();

        if regime.regime == RegimeType::Trending {
            match regime.direction {
                Trend::Bullish => {
                    if indicators.rsi.is_some_and(|rsi| rsi < 40.0) {
                        entry_reasons.push(Reason {
                            kind: ReasonKind::PullbackBuy,
                            strength: 0.7,
                        });
                    }
                    if indicators
                        .vwap
                        .is_some_and(|v| v.position == PricePosition::Above)
                    {
                        entry_reasons.push(Reason {
                            kind: ReasonKind::VwapSupport,
                            strength: 0.6,
                        });
                    }
                }
                Trend::Bearish => {
                    if indicators.rsi.is_some_and(|rsi| rsi > 60.0) {
                        exit_reasons.push(Reason {
                            kind: ReasonKind::RallySell,
                            strength: 0.7,
                        });
                    }
                }
                Trend::Neutral => {}
            }
        } else {
            // Ranging (or unknown) market: mean-reversion at the band edges.
            let stoch_label = indicators.stochastic.map(|s| s.label);
            if stoch_label == Some(MomentumLabel::Oversold) {
                if let Some(support) = levels.nearest_support {
                    if near_level(current_price, support) {
                        entry_reasons.push(Reason {
                            kind: ReasonKind::OversoldBounce,
                            strength: 0.8,
                        });
                    }
                }
            }
            if stoch_label == Some(MomentumLabel::Overbought) {
                if let Some(resistance) = levels.nearest_resistance {
                    if near_level(current_price, resistance) {
                        exit_reasons.push(Reason {
                            kind: ReasonKind::OverboughtReversal,
                            strength: 0.8,
                        });
                    }
                }
            }
        }

        // Volume confirmation: divergence on a confirmed pullback.
        if let Some(obv) = indicators.obv {
            let has_pullback = entry_reasons
                .iter()
                .any(|r| r.kind == ReasonKind::PullbackBuy);
            if obv.divergence && obv.trend == Trend::Bullish && has_pullback {
                entry_reasons.push(Reason {
                    kind: ReasonKind::BullishDivergence,
                    strength: 0.9,
                });
            }
        }

        let buy_strength: f64 = entry_reasons.iter().map(|r| r.strength).sum();
        let sell_strength: f64 = exit_reasons.iter().map(|r| r.strength).sum();

        let (primary, strength, confidence) = if buy_strength > sell_strength
            && buy_strength >= 1.0
        {
            (
                SignalAction::Buy,
                (buy_strength / 2.0).min(1.0),
                (0.5 + buy_strength * 0.2).min(0.9),
            )
        } else if sell_strength > buy_strength && sell_strength >= 1.0 {
            (
                SignalAction::Sell,
                (sell_strength / 2.0).min(1.0),
                (0.5 + sell_strength * 0.2).min(0.9),
            )
        } else {
            (
                SignalAction::Hold,
                0.0,
                0.3 + buy_strength.max(sell_strength) * 0.1,
            )
        };

        TradingSignal {
            primary,
            strength,
            confidence,
            strategy: regime.regime,
            entry_reasons,
            exit_reasons,
        }
    }
}

fn near_level(price: f64, level: f64) -> bool {
    price > 0.0 && (price - level).abs() / price < LEVEL_PROXIMITY
}
