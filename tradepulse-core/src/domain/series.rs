//! PriceSeries — the fundamental market data unit.
//!
//! A validated daily close/volume history for one symbol, oldest to newest.
//! The pipeline treats a series as an immutable value: every downstream
//! component is a pure function of it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Close/volume observation for a single symbol on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: u64,
}

/// Rejections at the series boundary.
///
/// Indicator math never sees unvalidated data: a series that constructs is
/// finite, positive, and strictly date-ordered. Short (even empty) series
/// are valid — too-short windows surface as absent indicators, not errors.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("close at index {index} is not a positive finite price: {close}")]
    InvalidClose { index: usize, close: f64 },

    #[error("date {date} at index {index} is not after the previous date")]
    OutOfOrderDate { index: usize, date: NaiveDate },

    #[error("column length mismatch: {dates} dates, {closes} closes, {volumes} volumes")]
    ColumnMismatch {
        dates: usize,
        closes: usize,
        volumes: usize,
    },
}

/// Validated, immutable price history.
///
/// Stored column-wise so the indicator math can borrow the close and volume
/// columns as plain slices without copying.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
    volumes: Vec<u64>,
}

impl PriceSeries {
    /// An empty series. Valid input: every indicator is simply absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from row-oriented points, validating closes and date order.
    pub fn from_points(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        let mut dates = Vec::with_capacity(points.len());
        let mut closes = Vec::with_capacity(points.len());
        let mut volumes = Vec::with_capacity(points.len());
        for p in &points {
            dates.push(p.date);
            closes.push(p.close);
            volumes.push(p.volume);
        }
        Self::from_parts(dates, closes, volumes)
    }

    /// Build from parallel columns, validating lengths, closes, and date order.
    pub fn from_parts(
        dates: Vec<NaiveDate>,
        closes: Vec<f64>,
        volumes: Vec<u64>,
    ) -> Result<Self, SeriesError> {
        if dates.len() != closes.len() || closes.len() != volumes.len() {
            return Err(SeriesError::ColumnMismatch {
                dates: dates.len(),
                closes: closes.len(),
                volumes: volumes.len(),
            });
        }
        for (index, &close) in closes.iter().enumerate() {
            if !close.is_finite() || close <= 0.0 {
                return Err(SeriesError::InvalidClose { index, close });
            }
        }
        for index in 1..dates.len() {
            if dates[index] <= dates[index - 1] {
                return Err(SeriesError::OutOfOrderDate {
                    index,
                    date: dates[index],
                });
            }
        }
        Ok(Self {
            dates,
            closes,
            volumes,
        })
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn volumes(&self) -> &[u64] {
        &self.volumes
    }

    /// Most recent close, if any.
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}
