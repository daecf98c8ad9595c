//! Action-plan rendering: the signal and targets as ordered, readable steps.
//!
//! Output belongs to the presentation contract; the lines are stable
//! strings a frontend can show verbatim.

use crate::analysis::regime::{MarketRegime, RegimeType};
use crate::analysis::risk::RiskTargets;
use crate::analysis::signal::{SignalAction, TradingSignal};

/// Render the ordered action plan for a synthesized signal.
pub fn build_plan(
    signal: &TradingSignal,
    targets: &RiskTargets,
    regime: &MarketRegime,
) -> Vec<String> {
    let mut plan = Vec::new();
    let entry = targets.entry_price;

    match signal.primary {
        SignalAction::Buy => {
            plan.push("Buy entry recommended".to_string());
            plan.push(format!("Entry price: ${entry:.2}"));
            plan.push(format!(
                "Stop loss: ${:.2} ({:.1}%)",
                targets.stop_loss,
                signed_pct(entry, targets.stop_loss)
            ));
            plan.push(format!(
                "First target: ${:.2} ({:+.1}%)",
                targets.take_profit[0],
                signed_pct(entry, targets.take_profit[0])
            ));
            plan.push(format!(
                "Suggested position size: {}%",
                (targets.position_size_fraction * 100.0) as u32
            ));
            plan.push(match regime.regime {
                RegimeType::Trending => {
                    "Trending market: scale out in stages to let profits run".to_string()
                }
                _ => "Ranging market: take profits at the target".to_string(),
            });
        }
        SignalAction::Sell => {
            plan.push("Sell entry recommended".to_string());
            plan.push(format!("Entry price: ${entry:.2}"));
            plan.push(format!(
                "Stop loss: ${:.2} ({:+.1}%)",
                targets.stop_loss,
                signed_pct(entry, targets.stop_loss)
            ));
            plan.push(format!(
                "First target: ${:.2} ({:.1}%)",
                targets.take_profit[0],
                signed_pct(entry, targets.take_profit[0])
            ));
        }
        SignalAction::Hold => {
            plan.push("Wait for a clearer setup".to_string());
            plan.push("No actionable signal at current levels".to_string());
            if signal.confidence < 0.5 {
                plan.push("Market direction is unclear".to_string());
            }
        }
    }

    if targets.risk_reward_ratio < 1.5 {
        plan.push("Risk/reward below 1.5 — trade with caution".to_string());
    }

    plan
}

/// Percent move from entry to a target; 0 when the entry price is unusable
/// (empty series). Display formatting owns the rounding.
fn signed_pct(entry: f64, target: f64) -> f64 {
    if entry <= 0.0 {
        return 0.0;
    }
    (target - entry) / entry * 100.0
}
