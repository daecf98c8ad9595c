//! On-Balance Volume (OBV), windowed.
//!
//! Running sum over the most recent transitions (at most `window`):
//! add volume on an up-day, subtract on a down-day, unchanged on a flat
//! day. Trend label from the relative slope across the last 5 OBV values;
//! divergence flag when the 5-point price trend and OBV trend disagree
//! in direction.
//! Requires at least 5 OBV values (6 closes).

use serde::Serialize;

use crate::domain::Trend;

/// Number of OBV points the trend slope and divergence check look at.
const TREND_POINTS: usize = 5;

/// Latest windowed OBV with trend and divergence annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObvValue {
    pub value: i64,
    pub trend: Trend,
    pub divergence: bool,
}

#[derive(Debug, Clone)]
pub struct Obv {
    window: usize,
}

impl Obv {
    pub fn new(window: usize) -> Self {
        assert!(window >= TREND_POINTS, "OBV window must cover the trend points");
        Self { window }
    }

    /// 20-transition window, as served by the analysis endpoint.
    pub fn standard() -> Self {
        Self::new(20)
    }

    /// Latest OBV value, or `None` when fewer than 6 closes exist or the
    /// volume column is shorter than the close column.
    pub fn compute(&self, closes: &[f64], volumes: &[u64]) -> Option<ObvValue> {
        if closes.len() < TREND_POINTS + 1 || volumes.len() < closes.len() {
            return None;
        }

        let transitions = (closes.len() - 1).min(self.window);
        let start = closes.len() - transitions;

        let mut obv: i64 = 0;
        let mut obv_series = Vec::with_capacity(transitions);
        for i in start..closes.len() {
            if closes[i] > closes[i - 1] {
                obv += volumes[i] as i64;
            } else if closes[i] < closes[i - 1] {
                obv -= volumes[i] as i64;
            }
            obv_series.push(obv);
        }

        let recent = &obv_series[obv_series.len() - TREND_POINTS..];
        let first = recent[0] as f64;
        let slope = (recent[TREND_POINTS - 1] as f64 - first) / (first.abs() + 1.0);

        let price_window = &closes[closes.len() - TREND_POINTS..];
        let price_rising = price_window[TREND_POINTS - 1] > price_window[0];
        let obv_rising = recent[TREND_POINTS - 1] > recent[0];

        Some(ObvValue {
            value: obv,
            trend: Trend::from_slope(slope),
            divergence: price_rising != obv_rising,
        })
    }
}
