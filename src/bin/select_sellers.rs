//! Command-line front end for the seller selection engine.
//!
//! ```text
//! select_sellers --sellers 1,2,3,4,5 --quantities 50,20,70,30,90 --required 100 --deviation 2
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use seller_select::application::services::{InputValidator, SelectionEngine, TracingObserver};
use seller_select::infrastructure::{AppConfig, init_tracing};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "select_sellers")]
#[command(about = "Pick whole sellers to cover a required quantity", long_about = None)]
struct Cli {
    /// Seller ids, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    sellers: Option<Vec<i64>>,

    /// Quantities aligned with --sellers, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    quantities: Option<Vec<i64>>,

    /// Quantity to cover
    #[arg(long, allow_negative_numbers = true)]
    required: i64,

    /// Tolerance for a single-seller match; defaults to selection.default_deviation
    #[arg(long, allow_negative_numbers = true)]
    deviation: Option<i64>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log every selection step to stderr
    #[arg(long, default_value_t = false)]
    trace: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let mut engine = SelectionEngine::new();
    if cli.trace {
        init_tracing(&config.logging).context("initializing logging")?;
        engine = engine.with_observer(Arc::new(TracingObserver::new()));
    }

    let deviation = match cli.deviation {
        Some(deviation) => deviation,
        None => i64::try_from(config.selection.default_deviation)
            .context("selection.default_deviation does not fit in i64")?,
    };

    let request = InputValidator::new()
        .validate(
            cli.sellers.as_deref(),
            cli.quantities.as_deref(),
            cli.required,
            deviation,
        )
        .context("invalid input")?;
    let selection = engine.select(&request).context("selection failed")?;
    let summary = selection.summary();

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary).context("encoding summary")?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{summary}"),
    }
    Ok(())
}
