//! TradePulse CLI — run the analysis pipeline from the command line.
//!
//! Commands:
//! - `analyze` — analyze a symbol from a CSV file of daily closes
//! - `demo` — analyze a deterministic synthetic series for a symbol
//!
//! Both commands print a human-readable summary by default, or the full
//! analysis as JSON with `--json`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tradepulse_core::analysis::{Analysis, Analyzer, SignalAction};
use tradepulse_core::domain::{PricePoint, PriceSeries};
use tradepulse_core::synthetic::demo_series;

#[derive(Parser)]
#[command(
    name = "tradepulse",
    about = "TradePulse CLI — technical analysis pipeline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a symbol from a CSV file with date,close,volume columns.
    Analyze {
        /// Ticker symbol to label the analysis with.
        symbol: String,

        /// Path to the CSV file (header: date,close,volume).
        #[arg(long)]
        csv: PathBuf,

        /// Live quote to use instead of the last close.
        #[arg(long)]
        price: Option<f64>,

        /// Print the full analysis as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Analyze a deterministic synthetic series (no data file needed).
    Demo {
        /// Ticker symbol; the same symbol always yields the same series.
        symbol: String,

        /// Number of trading days to generate.
        #[arg(long, default_value_t = 252)]
        days: usize,

        /// Print the full analysis as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            symbol,
            csv,
            price,
            json,
        } => run_analyze(&symbol, &csv, price, json),
        Commands::Demo { symbol, days, json } => run_demo(&symbol, days, json),
    }
}

/// One CSV row. Dates are ISO (YYYY-MM-DD); chrono's serde impl handles
/// the parse.
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    close: f64,
    volume: u64,
}

fn run_analyze(symbol: &str, csv_path: &Path, price: Option<f64>, json: bool) -> Result<()> {
    let symbol = normalize_symbol(symbol)?;
    let series = load_csv(csv_path)?;
    if let Some(p) = price {
        if !p.is_finite() || p <= 0.0 {
            bail!("--price must be a positive number, got {p}");
        }
    }

    let analysis = Analyzer::default().analyze(&symbol, &series, price);
    print_analysis(&analysis, json)
}

fn run_demo(symbol: &str, days: usize, json: bool) -> Result<()> {
    let symbol = normalize_symbol(symbol)?;
    if days == 0 {
        bail!("--days must be at least 1");
    }

    let end = chrono::Local::now().date_naive();
    let series = demo_series(&symbol, end, days);
    let analysis = Analyzer::default().analyze(&symbol, &series, None);
    print_analysis(&analysis, json)
}

fn normalize_symbol(symbol: &str) -> Result<String> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        bail!("symbol must not be empty");
    }
    Ok(trimmed.to_uppercase())
}

fn load_csv(path: &Path) -> Result<PriceSeries> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut points = Vec::new();
    for (i, record) in reader.deserialize::<CsvRow>().enumerate() {
        let row = record.with_context(|| format!("bad CSV record at line {}", i + 2))?;
        points.push(PricePoint {
            date: row.date,
            close: row.close,
            volume: row.volume,
        });
    }

    PriceSeries::from_points(points)
        .with_context(|| format!("invalid price data in {}", path.display()))
}

fn print_analysis(analysis: &Analysis, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
        return Ok(());
    }

    println!();
    println!("=== {} ===", analysis.symbol);
    println!("Price:          ${:.2}", analysis.current_price);
    println!(
        "Regime:         {:?} / {:?} (strength {:.2})",
        analysis.market_regime.regime, analysis.market_regime.direction, analysis.market_regime.strength
    );
    println!();

    println!("--- Indicators ---");
    match analysis.indicators.rsi {
        Some(rsi) => println!("RSI(14):        {rsi:.2}"),
        None => println!("RSI(14):        n/a"),
    }
    if let Some(macd) = &analysis.indicators.macd {
        println!(
            "MACD:           {:.4} / signal {:.4} / hist {:.4}",
            macd.macd, macd.signal, macd.histogram
        );
    }
    if let Some(bands) = &analysis.indicators.bollinger_bands {
        println!(
            "Bollinger:      {:.2} / {:.2} / {:.2}",
            bands.lower, bands.middle, bands.upper
        );
    }
    if let Some(stoch) = &analysis.indicators.stochastic {
        println!("Stochastic:     %K {:.2}  %D {:.2} ({:?})", stoch.k, stoch.d, stoch.label);
    }
    if let Some(vwap) = &analysis.indicators.vwap {
        println!("VWAP(20):       {:.2} ({:?}, {:+.2}%)", vwap.value, vwap.position, vwap.distance_pct);
    }
    if let Some(atr) = &analysis.indicators.atr {
        println!("ATR(14):        {:.2} ({:.2}% of price)", atr.value, atr.pct_of_price);
    }

    println!();
    println!("--- Signal ---");
    let action = match analysis.signal.primary {
        SignalAction::Buy => "BUY",
        SignalAction::Sell => "SELL",
        SignalAction::Hold => "HOLD",
    };
    println!(
        "Action:         {action} (strength {:.2}, confidence {:.2})",
        analysis.signal.strength, analysis.signal.confidence
    );
    for reason in &analysis.signal.entry_reasons {
        println!("  entry: {} ({:.1})", reason.kind.description(), reason.strength);
    }
    for reason in &analysis.signal.exit_reasons {
        println!("  exit:  {} ({:.1})", reason.kind.description(), reason.strength);
    }

    println!();
    println!("--- Plan ---");
    for line in &analysis.action_plan {
        println!("  {line}");
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_trimmed_and_uppercased() {
        assert_eq!(normalize_symbol("  aapl ").unwrap(), "AAPL");
    }

    #[test]
    fn empty_symbol_is_rejected() {
        assert!(normalize_symbol("   ").is_err());
    }
}
