//! Moving Average Convergence Divergence (MACD).
//!
//! macd = EMA(fast) - EMA(slow); signal = EMA(signal_period) of the macd
//! series; histogram = macd - signal.
//! EMAs are seeded with the SMA of the first `period` values, then
//! recursive: EMA[t] = alpha * close[t] + (1 - alpha) * EMA[t-1].
//! Present from `slow` closes; the signal line stabilizes once at least
//! `signal_period` macd values exist (fewer → simple mean of what exists).

use serde::Serialize;

use crate::indicators::{mean, round4};

/// Latest MACD line, signal line, and histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacdValue {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal_period: usize,
}

impl Macd {
    pub fn new(fast: usize, slow: usize, signal_period: usize) -> Self {
        assert!(fast >= 1 && slow >= 1 && signal_period >= 1, "MACD periods must be >= 1");
        assert!(fast < slow, "MACD fast period must be shorter than slow");
        Self {
            fast,
            slow,
            signal_period,
        }
    }

    /// Standard MACD(12, 26, 9).
    pub fn standard() -> Self {
        Self::new(12, 26, 9)
    }

    /// Latest MACD value, or `None` when fewer than `slow` closes exist.
    pub fn compute(&self, closes: &[f64]) -> Option<MacdValue> {
        if closes.len() < self.slow {
            return None;
        }

        let fast_ema = ema_series(closes, self.fast);
        let slow_ema = ema_series(closes, self.slow);

        // MACD line exists wherever the slow EMA does.
        let macd_line: Vec<f64> = (self.slow - 1..closes.len())
            .map(|i| fast_ema[i] - slow_ema[i])
            .collect();

        let signal = if macd_line.len() >= self.signal_period {
            *ema_series(&macd_line, self.signal_period).last().unwrap()
        } else {
            // Short series: the EMA seed rule applied to what exists.
            mean(&macd_line)
        };

        let macd = *macd_line.last().unwrap();
        Some(MacdValue {
            macd: round4(macd),
            signal: round4(signal),
            histogram: round4(macd - signal),
        })
    }
}

/// Full-length EMA series; the first `period - 1` slots are unseeded and
/// must not be read. Caller guarantees `values.len() >= period`.
fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut result = vec![0.0; values.len()];

    let seed = mean(&values[..period]);
    result[period - 1] = seed;

    let mut prev = seed;
    for i in period..values.len() {
        let ema = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = ema;
        prev = ema;
    }
    result
}
