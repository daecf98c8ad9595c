//! Synthetic price series for demos and tests.
//!
//! A deterministic random walk seeded from the symbol name. This module is
//! a labeled fixture generator: the analysis pipeline itself never calls
//! it, and nothing here stands in for missing live data silently.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::PriceSeries;

/// Generate `days` trading days (weekends skipped) ending before `end`,
/// as a random walk from 100.0. The same symbol always yields the same
/// series.
pub fn demo_series(symbol: &str, end: NaiveDate, days: usize) -> PriceSeries {
    let seed: [u8; 32] = *blake3::hash(symbol.as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut dates = Vec::with_capacity(days);
    let mut current = end;
    while dates.len() < days {
        current = current - chrono::Duration::days(1);
        let weekday = current.weekday();
        if weekday == chrono::Weekday::Sat || weekday == chrono::Weekday::Sun {
            continue;
        }
        dates.push(current);
    }
    dates.reverse();

    let mut closes = Vec::with_capacity(days);
    let mut volumes = Vec::with_capacity(days);
    let mut price = 100.0_f64;
    for _ in 0..days {
        let daily_return: f64 = rng.gen_range(-0.03..0.03);
        price *= 1.0 + daily_return;
        closes.push((price * 100.0).round() / 100.0);
        volumes.push(rng.gen_range(500_000..5_000_000u64));
    }

    // The walk stays strictly positive and the dates strictly increase, so
    // validation cannot fail.
    PriceSeries::from_parts(dates, closes, volumes).expect("generated series is valid")
}
