//! Support/resistance detection: swing points and pivot levels.
//!
//! Swing highs/lows use a strict two-neighbor fence over the whole series.
//! Only levels on the correct side of the current price are kept — at most
//! the three nearest on each side, ascending. Pivot points use the classic
//! formula over the last 20 closes.

use serde::Serialize;

use crate::domain::PriceSeries;
use crate::indicators::round2;

/// Classic pivot levels from the recent high/low/close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PivotPoints {
    pub pivot: f64,
    pub r1: f64,
    pub r2: f64,
    pub s1: f64,
    pub s2: f64,
}

/// Detected price levels around the current price.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SupportResistance {
    /// Up to 3 distinct swing lows below the current price, ascending.
    pub support: Vec<f64>,
    /// Up to 3 distinct swing highs above the current price, ascending.
    pub resistance: Vec<f64>,
    pub pivot_points: Option<PivotPoints>,
    pub nearest_support: Option<f64>,
    pub nearest_resistance: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct LevelDetector {
    min_len: usize,
    max_levels: usize,
    pivot_window: usize,
}

impl Default for LevelDetector {
    fn default() -> Self {
        Self {
            min_len: 20,
            max_levels: 3,
            pivot_window: 20,
        }
    }
}

impl LevelDetector {
    /// Detect levels. Fewer than 20 points → empty result.
    pub fn detect(&self, series: &PriceSeries, current_price: f64) -> SupportResistance {
        let closes = series.closes();
        if closes.len() < self.min_len {
            return SupportResistance::default();
        }

        let mut swing_lows = Vec::new();
        let mut swing_highs = Vec::new();
        for i in 2..closes.len() - 2 {
            let c = closes[i];
            if c > closes[i - 1] && c > closes[i - 2] && c > closes[i + 1] && c > closes[i + 2] {
                swing_highs.push(round2(c));
            }
            if c < closes[i - 1] && c < closes[i - 2] && c < closes[i + 1] && c < closes[i + 2] {
                swing_lows.push(round2(c));
            }
        }

        // Nearest `max_levels` on the correct side, ascending. Values are
        // already rounded, so exact dedup is safe.
        let mut support: Vec<f64> = swing_lows.into_iter().filter(|&s| s < current_price).collect();
        support.sort_by(|a, b| a.partial_cmp(b).unwrap());
        support.dedup();
        if support.len() > self.max_levels {
            support.drain(..support.len() - self.max_levels);
        }

        let mut resistance: Vec<f64> = swing_highs
            .into_iter()
            .filter(|&r| r > current_price)
            .collect();
        resistance.sort_by(|a, b| a.partial_cmp(b).unwrap());
        resistance.dedup();
        resistance.truncate(self.max_levels);

        let window = &closes[closes.len() - self.pivot_window..];
        let high = window.iter().copied().fold(f64::MIN, f64::max);
        let low = window.iter().copied().fold(f64::MAX, f64::min);
        let close = *window.last().unwrap();
        let pivot = (high + low + close) / 3.0;
        let pivot_points = Some(PivotPoints {
            pivot: round2(pivot),
            r1: round2(2.0 * pivot - low),
            r2: round2(pivot + (high - low)),
            s1: round2(2.0 * pivot - high),
            s2: round2(pivot - (high - low)),
        });

        SupportResistance {
            nearest_support: support.last().copied(),
            nearest_resistance: resistance.first().copied(),
            support,
            resistance,
            pivot_points,
        }
    }
}
