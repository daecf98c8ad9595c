//! Market regime classification: trending vs ranging.
//!
//! The trend-strength measure is a volatility proxy, not a true ADX: the
//! coefficient-of-variation of the last 20 closes scaled by 500 and capped
//! at 100. The full directional-movement computation is out of scope and
//! this linear stand-in is kept deliberately — calibrated thresholds
//! downstream depend on it.

use serde::Serialize;

use crate::domain::{PriceSeries, Trend};
use crate::indicators::{mean, round2, stddev};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegimeType {
    Trending,
    Ranging,
    Unknown,
}

/// Classified market regime for one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketRegime {
    #[serde(rename = "type")]
    pub regime: RegimeType,
    pub direction: Trend,
    /// Trend strength in [0, 1] (adx_proxy / 100).
    pub strength: f64,
    /// Volatility-based ADX stand-in in [0, 100].
    pub adx_proxy: f64,
    /// SMA-50 one-period slope in percent (0 when under 51 points).
    pub ma_slope: f64,
}

impl MarketRegime {
    /// Regime for a series too short to classify.
    pub fn unknown() -> Self {
        Self {
            regime: RegimeType::Unknown,
            direction: Trend::Neutral,
            strength: 0.0,
            adx_proxy: 0.0,
            ma_slope: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegimeClassifier {
    window: usize,
    slope_period: usize,
    trend_threshold: f64,
}

impl Default for RegimeClassifier {
    fn default() -> Self {
        Self {
            window: 20,
            slope_period: 50,
            trend_threshold: 25.0,
        }
    }
}

impl RegimeClassifier {
    /// Classify the series. Fewer than 20 points → unknown regime.
    pub fn classify(&self, series: &PriceSeries) -> MarketRegime {
        let closes = series.closes();
        if closes.len() < self.window {
            return MarketRegime::unknown();
        }

        let window = &closes[closes.len() - self.window..];
        let volatility = stddev(window) / mean(window);
        let adx_proxy = (volatility * 500.0).min(100.0);

        // SMA-50 slope over one period, in percent.
        let ma_slope = if closes.len() > self.slope_period {
            let now = mean(&closes[closes.len() - self.slope_period..]);
            let prev = mean(&closes[closes.len() - self.slope_period - 1..closes.len() - 1]);
            (now - prev) / prev * 100.0
        } else {
            0.0
        };

        let (regime, direction) = if adx_proxy > self.trend_threshold {
            (RegimeType::Trending, Trend::from_slope(ma_slope))
        } else {
            (RegimeType::Ranging, Trend::Neutral)
        };

        MarketRegime {
            regime,
            direction,
            strength: round2(adx_proxy / 100.0),
            adx_proxy: round2(adx_proxy),
            ma_slope: round2(ma_slope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(closes: Vec<f64>) -> PriceSeries {
        let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let dates = (0..closes.len())
            .map(|i| base + chrono::Duration::days(i as i64))
            .collect();
        let volumes = vec![1_000_000; closes.len()];
        PriceSeries::from_parts(dates, closes, volumes).unwrap()
    }

    #[test]
    fn short_series_is_unknown() {
        let regime = RegimeClassifier::default().classify(&series(vec![100.0; 19]));
        assert_eq!(regime.regime, RegimeType::Unknown);
        assert_eq!(regime.direction, Trend::Neutral);
        assert_eq!(regime.strength, 0.0);
    }

    #[test]
    fn flat_series_is_ranging_with_zero_strength() {
        let regime = RegimeClassifier::default().classify(&series(vec![100.0; 60]));
        assert_eq!(regime.regime, RegimeType::Ranging);
        assert_eq!(regime.adx_proxy, 0.0);
        assert_eq!(regime.strength, 0.0);
        assert_eq!(regime.direction, Trend::Neutral);
    }

    #[test]
    fn steep_rise_is_trending_bullish() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 2.0).collect();
        let regime = RegimeClassifier::default().classify(&series(closes));
        assert_eq!(regime.regime, RegimeType::Trending);
        assert_eq!(regime.direction, Trend::Bullish);
        assert!(regime.ma_slope > 0.1);
        assert!(regime.adx_proxy > 25.0);
    }

    #[test]
    fn steep_fall_is_trending_bearish() {
        let closes: Vec<f64> = (0..60).map(|i| 400.0 - i as f64 * 2.0).collect();
        let regime = RegimeClassifier::default().classify(&series(closes));
        assert_eq!(regime.regime, RegimeType::Trending);
        assert_eq!(regime.direction, Trend::Bearish);
        assert!(regime.ma_slope < -0.1);
    }

    #[test]
    fn volatile_but_short_history_has_zero_slope() {
        // 30 points: volatile enough to trend, too short for the SMA-50
        // slope → neutral direction.
        let closes: Vec<f64> = (0..30)
            .map(|i| 100.0 + if i % 2 == 0 { 20.0 } else { -20.0 })
            .collect();
        let regime = RegimeClassifier::default().classify(&series(closes));
        assert_eq!(regime.regime, RegimeType::Trending);
        assert_eq!(regime.ma_slope, 0.0);
        assert_eq!(regime.direction, Trend::Neutral);
    }

    #[test]
    fn strength_tracks_adx_proxy() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 2.0).collect();
        let regime = RegimeClassifier::default().classify(&series(closes));
        assert!((regime.strength - regime.adx_proxy / 100.0).abs() < 0.01);
        assert!(regime.strength <= 1.0);
    }
}
