//! Volume-Weighted Average Price (VWAP), windowed.
//!
//! Volume-weighted mean of the last `window` closes, with the current
//! price's position relative to it and the percent distance.
//! Absent when fewer than `window` points exist or the window's total
//! volume is zero (degenerate input, would divide by zero).

use serde::Serialize;

use crate::indicators::round2;

/// Side of VWAP the current price sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePosition {
    Above,
    Below,
}

/// Latest windowed VWAP with position annotations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VwapValue {
    pub value: f64,
    pub position: PricePosition,
    pub distance_pct: f64,
}

#[derive(Debug, Clone)]
pub struct Vwap {
    window: usize,
}

impl Vwap {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "VWAP window must be >= 1");
        Self { window }
    }

    /// 20-point window, as served by the analysis endpoint.
    pub fn standard() -> Self {
        Self::new(20)
    }

    /// Latest VWAP against `current_price`, or `None` when the window is
    /// not filled or carries zero total volume.
    pub fn compute(&self, closes: &[f64], volumes: &[u64], current_price: f64) -> Option<VwapValue> {
        if closes.len() < self.window || volumes.len() < closes.len() {
            return None;
        }
        let start = closes.len() - self.window;
        let total_volume: u64 = volumes[start..].iter().sum();
        if total_volume == 0 {
            return None;
        }

        let weighted: f64 = closes[start..]
            .iter()
            .zip(&volumes[start..])
            .map(|(&close, &volume)| close * volume as f64)
            .sum();
        let vwap = weighted / total_volume as f64;

        let position = if current_price > vwap {
            PricePosition::Above
        } else {
            PricePosition::Below
        };

        Some(VwapValue {
            value: round2(vwap),
            position,
            distance_pct: round2((current_price - vwap) / vwap * 100.0),
        })
    }
}
