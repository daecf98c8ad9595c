//! Relative Strength Index (RSI).
//!
//! Wilder RSI over a single trailing window: average gain / average loss
//! across the last `period` close-to-close changes, then
//! RSI = 100 - 100 / (1 + RS).
//! Requires period + 1 closes.
//! Edge cases: no losses → 100; no gains → 0; flat window → 50.

use crate::indicators::round2;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self { period }
    }

    /// Standard 14-period RSI.
    pub fn standard() -> Self {
        Self::new(14)
    }

    /// Latest RSI value, or `None` when fewer than `period + 1` closes exist.
    pub fn compute(&self, closes: &[f64]) -> Option<f64> {
        if closes.len() < self.period + 1 {
            return None;
        }

        let window = &closes[closes.len() - self.period - 1..];
        let mut avg_gain = 0.0;
        let mut avg_loss = 0.0;
        for pair in window.windows(2) {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                avg_gain += change;
            } else {
                avg_loss -= change;
            }
        }
        avg_gain /= self.period as f64;
        avg_loss /= self.period as f64;

        let rsi = if avg_loss == 0.0 && avg_gain == 0.0 {
            50.0 // no movement
        } else if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        };
        Some(round2(rsi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_approx;

    #[test]
    fn rsi_all_gains() {
        let closes = [100.0, 101.0, 102.0, 103.0, 104.0];
        let rsi = Rsi::new(4).compute(&closes).unwrap();
        assert_approx(rsi, 100.0, 1e-9);
    }

    #[test]
    fn rsi_all_losses() {
        let closes = [104.0, 103.0, 102.0, 101.0, 100.0];
        let rsi = Rsi::new(4).compute(&closes).unwrap();
        assert_approx(rsi, 0.0, 1e-9);
    }

    #[test]
    fn rsi_flat_window_is_neutral() {
        let closes = [100.0; 15];
        let rsi = Rsi::standard().compute(&closes).unwrap();
        assert_approx(rsi, 50.0, 1e-9);
    }

    #[test]
    fn rsi_balanced_changes() {
        // Equal total gains and losses → RS = 1 → RSI = 50.
        let closes = [100.0, 102.0, 100.0, 102.0, 100.0];
        let rsi = Rsi::new(4).compute(&closes).unwrap();
        assert_approx(rsi, 50.0, 1e-9);
    }

    #[test]
    fn rsi_absent_below_minimum() {
        let closes = [100.0; 14];
        assert!(Rsi::standard().compute(&closes).is_none());
        assert!(Rsi::standard().compute(&[]).is_none());
    }

    #[test]
    fn rsi_uses_only_trailing_window() {
        // A huge spike outside the 14-change window must not matter.
        let mut closes = vec![500.0, 100.0];
        closes.extend(std::iter::repeat(100.0).take(14));
        let rsi = Rsi::standard().compute(&closes).unwrap();
        assert_approx(rsi, 50.0, 1e-9);
    }

    #[test]
    fn rsi_within_bounds() {
        let closes = [
            100.0, 101.2, 99.8, 100.5, 102.3, 101.1, 103.4, 102.2, 104.0, 103.1, 105.2, 104.8,
            106.0, 105.5, 107.1,
        ];
        let rsi = Rsi::standard().compute(&closes).unwrap();
        assert!((0.0..=100.0).contains(&rsi));
        assert!(rsi > 50.0); // mostly gains
    }
}
