//! Bollinger Bands — moving average +/- standard deviation multiplier.
//!
//! middle = SMA(period) of close; upper/lower = middle +/- mult * stddev.
//! Uses population stddev (divide by N). Requires `period` closes.

use serde::Serialize;

use crate::indicators::{mean, round2, stddev};

/// Latest upper/middle/lower band values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BollingerValue {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

#[derive(Debug, Clone)]
pub struct BollingerBands {
    period: usize,
    multiplier: f64,
}

impl BollingerBands {
    pub fn new(period: usize, multiplier: f64) -> Self {
        assert!(period >= 1, "Bollinger period must be >= 1");
        assert!(multiplier > 0.0, "Bollinger multiplier must be > 0");
        Self { period, multiplier }
    }

    /// Standard Bollinger(20, 2.0).
    pub fn standard() -> Self {
        Self::new(20, 2.0)
    }

    /// Latest band values, or `None` when fewer than `period` closes exist.
    pub fn compute(&self, closes: &[f64]) -> Option<BollingerValue> {
        if closes.len() < self.period {
            return None;
        }
        let window = &closes[closes.len() - self.period..];
        let middle = mean(window);
        let width = self.multiplier * stddev(window);
        Some(BollingerValue {
            upper: round2(middle + width),
            middle: round2(middle),
            lower: round2(middle - width),
        })
    }
}
