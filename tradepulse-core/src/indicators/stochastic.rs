//! Stochastic oscillator %K / %D.
//!
//! %K = 100 * (price - low_n) / (high_n - low_n) over the last `period`
//! closes; a zero-range window yields the neutral 50.
//! %D is approximated as 0.9 * %K, a deliberate simplification rather
//! than a true 3-period SMA of %K.
//! Labels: oversold below 20, overbought above 80, neutral otherwise.

use serde::Serialize;

use crate::indicators::round2;

/// Zone label for the oscillator reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentumLabel {
    Oversold,
    Overbought,
    Neutral,
}

/// Latest %K, %D, and zone label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StochasticValue {
    pub k: f64,
    pub d: f64,
    pub label: MomentumLabel,
}

#[derive(Debug, Clone)]
pub struct Stochastic {
    period: usize,
}

impl Stochastic {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "stochastic period must be >= 1");
        Self { period }
    }

    /// Standard 14-period oscillator.
    pub fn standard() -> Self {
        Self::new(14)
    }

    /// Latest oscillator value against `current_price`, or `None` when
    /// fewer than `period` closes exist.
    pub fn compute(&self, closes: &[f64], current_price: f64) -> Option<StochasticValue> {
        if closes.len() < self.period {
            return None;
        }
        let window = &closes[closes.len() - self.period..];
        let high = window.iter().copied().fold(f64::MIN, f64::max);
        let low = window.iter().copied().fold(f64::MAX, f64::min);

        let k = if high == low {
            50.0
        } else {
            (current_price - low) / (high - low) * 100.0
        };

        let label = if k < 20.0 {
            MomentumLabel::Oversold
        } else if k > 80.0 {
            MomentumLabel::Overbought
        } else {
            MomentumLabel::Neutral
        };

        Some(StochasticValue {
            k: round2(k),
            d: round2(k * 0.9),
            label,
        })
    }
}
