//! Concrete indicator implementations.
//!
//! Each module computes the latest value of one indicator from the close
//! (and, where relevant, volume) columns of a validated series. Too-short
//! input is the expected failure mode and yields `None` — never a panic,
//! never a fabricated zero.
//!
//! Outputs carry presentation rounding (2 decimal places, 4 for MACD
//! fields); all intermediate math runs at full precision.

pub mod atr;
pub mod bollinger;
pub mod macd;
pub mod obv;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod vwap;

pub use atr::{Atr, AtrValue};
pub use bollinger::{BollingerBands, BollingerValue};
pub use macd::{Macd, MacdValue};
pub use obv::{Obv, ObvValue};
pub use rsi::Rsi;
pub use sma::Sma;
pub use stochastic::{MomentumLabel, Stochastic, StochasticValue};
pub use vwap::{PricePosition, Vwap, VwapValue};

/// Arithmetic mean. Caller guarantees a non-empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by N).
pub(crate) fn stddev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Round to 2 decimal places for presentation.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimal places (MACD fields).
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_stddev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_approx(mean(&values), 5.0, 1e-12);
        assert_approx(stddev(&values), 2.0, 1e-12);
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(99.994), 99.99);
        assert_eq!(round4(1.0 / 3.0), 0.3333);
        assert_eq!(round4(-2.0 / 3.0), -0.6667);
    }
}
