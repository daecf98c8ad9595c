//! IndicatorBundle — the derived-indicator record for one series.
//!
//! The engine wires the standard parameter set and runs every indicator
//! against the same series snapshot. Every field is optional: a series too
//! short for an indicator's window simply lacks that field.

use serde::Serialize;

use crate::domain::PriceSeries;
use crate::indicators::{
    Atr, AtrValue, BollingerBands, BollingerValue, Macd, MacdValue, Obv, ObvValue, Rsi, Sma,
    Stochastic, StochasticValue, Vwap, VwapValue,
};

/// SMA snapshot at the three conventional windows, each independently
/// absent when the series is shorter than its window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovingAverages {
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
}

/// All derived indicators for one series, computed fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorBundle {
    pub rsi: Option<f64>,
    pub macd: Option<MacdValue>,
    pub bollinger_bands: Option<BollingerValue>,
    pub moving_averages: Option<MovingAverages>,
    pub stochastic: Option<StochasticValue>,
    pub obv: Option<ObvValue>,
    pub vwap: Option<VwapValue>,
    pub atr: Option<AtrValue>,
}

/// Stateless indicator engine. Construct once and share, or per call —
/// there is no per-invocation state.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    rsi: Rsi,
    macd: Macd,
    bollinger: BollingerBands,
    sma_20: Sma,
    sma_50: Sma,
    sma_200: Sma,
    stochastic: Stochastic,
    obv: Obv,
    vwap: Vwap,
    atr: Atr,
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self {
            rsi: Rsi::standard(),
            macd: Macd::standard(),
            bollinger: BollingerBands::standard(),
            sma_20: Sma::new(20),
            sma_50: Sma::new(50),
            sma_200: Sma::new(200),
            stochastic: Stochastic::standard(),
            obv: Obv::standard(),
            vwap: Vwap::standard(),
            atr: Atr::standard(),
        }
    }
}

impl IndicatorEngine {
    /// Compute the full bundle. Never fails: short series yield absent
    /// fields, an empty series yields an all-absent bundle.
    pub fn compute(&self, series: &PriceSeries, current_price: f64) -> IndicatorBundle {
        let closes = series.closes();
        let volumes = series.volumes();

        let sma_20 = self.sma_20.compute(closes);
        let sma_50 = self.sma_50.compute(closes);
        let sma_200 = self.sma_200.compute(closes);
        let moving_averages = if sma_20.is_none() && sma_50.is_none() && sma_200.is_none() {
            None
        } else {
            Some(MovingAverages {
                sma_20,
                sma_50,
                sma_200,
            })
        };

        IndicatorBundle {
            rsi: self.rsi.compute(closes),
            macd: self.macd.compute(closes),
            bollinger_bands: self.bollinger.compute(closes),
            moving_averages,
            stochastic: self.stochastic.compute(closes, current_price),
            obv: self.obv.compute(closes, volumes),
            vwap: self.vwap.compute(closes, volumes, current_price),
            atr: self.atr.compute(closes, current_price),
        }
    }
}
