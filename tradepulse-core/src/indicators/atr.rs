//! Average True Range (ATR), close-only proxy.
//!
//! The upstream series carries no intraday high/low, so each true range is
//! approximated as the absolute close-to-close move. This is a deliberate
//! simplification, not the standard high/low/close true range.
//! ATR = mean of the last `period` ranges. Requires period + 1 closes.

use serde::Serialize;

use crate::indicators::round2;

/// Latest ATR in price units and as a percentage of the current price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtrValue {
    pub value: f64,
    pub pct_of_price: f64,
}

#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
}

impl Atr {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ATR period must be >= 1");
        Self { period }
    }

    /// Standard 14-period ATR.
    pub fn standard() -> Self {
        Self::new(14)
    }

    /// Latest ATR against `current_price`, or `None` when fewer than
    /// `period + 1` closes exist.
    pub fn compute(&self, closes: &[f64], current_price: f64) -> Option<AtrValue> {
        if closes.len() < self.period + 1 {
            return None;
        }
        let window = &closes[closes.len() - self.period - 1..];
        let sum: f64 = window.windows(2).map(|pair| (pair[1] - pair[0]).abs()).sum();
        let atr = sum / self.period as f64;
        Some(AtrValue {
            value: round2(atr),
            pct_of_price: round2(atr / current_price * 100.0),
        })
    }
}
