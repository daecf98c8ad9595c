//! TradePulse Core — price-series analysis pipeline.
//!
//! This crate contains the computational heart of the stock analysis
//! backend:
//! - Validated price-series domain types
//! - Technical indicators (RSI, MACD, Bollinger, SMA, stochastic, OBV,
//!   VWAP, ATR)
//! - Market regime classification (trending vs ranging)
//! - Support/resistance and pivot-point detection
//! - Composite signal synthesis with risk/reward targets
//!
//! The pipeline is pure and synchronous: series in, structured analysis
//! out. Caching, data fetching, and HTTP shaping live outside this crate.

pub mod analysis;
pub mod domain;
pub mod indicators;
pub mod synthetic;
