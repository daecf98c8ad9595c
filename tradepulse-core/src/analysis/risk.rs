//! Risk/reward targets: stop-loss, take-profit ladder, position size.
//!
//! Stops anchor to the nearest detected level when one exists (with a 2%
//! buffer past it), otherwise fall back to ATR multiples. ATR itself
//! defaults to 2% of price when the indicator is absent.
//!
//! A HOLD carries an informational symmetric ATR bracket rather than
//! zeroed targets, so consumers never render zero prices.

use serde::Serialize;

use crate::analysis::levels::SupportResistance;
use crate::analysis::signal::SignalAction;
use crate::indicators::round2;

/// Trailing-stop plan: start at the initial stop, ratchet in ATR steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailingPlan {
    pub initial: f64,
    pub step: f64,
}

/// Entry/exit price targets and sizing for one signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskTargets {
    pub entry_price: f64,
    pub stop_loss: f64,
    /// Three take-profit rungs, nearest first.
    pub take_profit: [f64; 3],
    /// Reward to the first rung over risk to the stop; 0 when risk is 0.
    pub risk_reward_ratio: f64,
    /// Suggested fraction of the normal position size, in [0, 1].
    pub position_size_fraction: f64,
    pub trailing: Option<TrailingPlan>,
}

#[derive(Debug, Clone)]
pub struct RiskTargetCalculator {
    /// ATR fallback as a fraction of price when the indicator is absent.
    atr_fallback_pct: f64,
    /// Buffer placed past the anchoring level (2%).
    level_buffer: f64,
}

impl Default for RiskTargetCalculator {
    fn default() -> Self {
        Self {
            atr_fallback_pct: 0.02,
            level_buffer: 0.02,
        }
    }
}

impl RiskTargetCalculator {
    /// Compute targets for the signal at `current_price`.
    pub fn calculate(
        &self,
        current_price: f64,
        action: SignalAction,
        levels: &SupportResistance,
        atr: Option<f64>,
    ) -> RiskTargets {
        let atr = atr.unwrap_or(current_price * self.atr_fallback_pct);

        let (stop_loss, take_profit, trailing) = match action {
            SignalAction::Buy => {
                let stop = levels
                    .nearest_support
                    .map(|s| s * (1.0 - self.level_buffer))
                    .unwrap_or(current_price - 2.0 * atr);
                let tp1 = levels
                    .nearest_resistance
                    .unwrap_or(current_price + 2.0 * atr);
                let ladder = [tp1, current_price + 3.0 * atr, current_price + 5.0 * atr];
                let trailing = TrailingPlan {
                    initial: round2(stop),
                    step: round2(atr * 0.5),
                };
                (stop, ladder, Some(trailing))
            }
            SignalAction::Sell => {
                let stop = levels
                    .nearest_resistance
                    .map(|r| r * (1.0 + self.level_buffer))
                    .unwrap_or(current_price + 2.0 * atr);
                let tp1 = levels.nearest_support.unwrap_or(current_price - 2.0 * atr);
                let ladder = [tp1, current_price - 3.0 * atr, current_price - 5.0 * atr];
                let trailing = TrailingPlan {
                    initial: round2(stop),
                    step: round2(atr * 0.5),
                };
                (stop, ladder, Some(trailing))
            }
            SignalAction::Hold => {
                // Informational bracket only: symmetric ATR band, no level
                // anchoring, no trailing plan.
                let stop = current_price - 2.0 * atr;
                let ladder = [
                    current_price + 2.0 * atr,
                    current_price + 3.0 * atr,
                    current_price + 5.0 * atr,
                ];
                (stop, ladder, None)
            }
        };

        let risk = (current_price - stop_loss).abs();
        let reward = (take_profit[0] - current_price).abs();
        let risk_reward_ratio = if risk > 0.0 {
            round2(reward / risk)
        } else {
            0.0
        };

        let position_size_fraction = if risk_reward_ratio >= 2.0 {
            1.0
        } else if risk_reward_ratio >= 1.5 {
            0.75
        } else {
            0.5
        };

        RiskTargets {
            entry_price: current_price,
            stop_loss: round2(stop_loss),
            take_profit: take_profit.map(round2),
            risk_reward_ratio,
            position_size_fraction,
            trailing,
        }
    }
}
