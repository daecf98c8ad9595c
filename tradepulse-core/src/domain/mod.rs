//! Domain types: price series, validation errors, shared labels.

pub mod series;

pub use series::{PricePoint, PriceSeries, SeriesError};

use serde::{Deserialize, Serialize};

/// Directional label shared by the OBV trend and the regime direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl Trend {
    /// Classify a relative slope with the +/-0.1 thresholds used throughout
    /// the pipeline (OBV trend, MA-50 slope direction).
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.1 {
            Trend::Bullish
        } else if slope < -0.1 {
            Trend::Bearish
        } else {
            Trend::Neutral
        }
    }
}
