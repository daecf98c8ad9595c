//! Simple Moving Average (SMA).
//!
//! Mean of the last `period` closes. Requires `period` closes.

use crate::indicators::{mean, round2};

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self { period }
    }

    /// Latest SMA value, or `None` when fewer than `period` closes exist.
    pub fn compute(&self, closes: &[f64]) -> Option<f64> {
        if closes.len() < self.period {
            return None;
        }
        Some(round2(mean(&closes[closes.len() - self.period..])))
    }
}
