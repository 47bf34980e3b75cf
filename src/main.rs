use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use spend_kpis::report::{write_json, write_kpis, write_month_detail, OutputFormat, Timeframe};
use spend_kpis::{MonthKey, SpendEngine, SpendError};

/// Spending statistics from an SMS transaction export.
#[derive(Debug, Parser)]
#[command(name = "spend-kpis", version)]
struct Cli {
    /// CSV export with a `Sender,Date,Amount,Status,Label,Message` header
    input: PathBuf,

    /// Show the breakdown of a single month (YYYY-MM) instead of the overview
    #[arg(long)]
    month: Option<MonthKey>,

    /// Trailing window for the monthly series
    #[arg(long, value_enum, default_value_t = Timeframe::Lifetime)]
    timeframe: Timeframe,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// error, warn, info, debug or trace
    #[arg(long, default_value = "error")]
    log_level: String
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let engine = SpendEngine::new();
    let timer = Instant::now();

    //NOTE: Stdout carries the report, so failures go to stderr with a non-zero exit code
    let outcome = match cli.month {
        Some(month) => run_month_detail(&engine, &cli, month).await,
        None => run_overview(&engine, &cli).await
    };

    info!("Processed [{}] in: {:?}", cli.input.display(), timer.elapsed());

    if let Err(error) = outcome {
        match error.downcast_ref::<SpendError>() {
            Some(SpendError::NoValidData) => eprintln!("No valid data found in {}", cli.input.display()),
            _ => eprintln!("Error: {error}")
        }
        exit(1);
    }

    Ok(())
}

async fn run_overview(engine: &SpendEngine, cli: &Cli) -> Result<()> {
    let result = engine.run_kpis(&cli.input).await?;
    let mut output = BufWriter::new(stdout().lock());

    match cli.format {
        OutputFormat::Text => write_kpis(&mut output, &result, cli.timeframe)?,
        OutputFormat::Json => write_json(&mut output, &result)?
    }

    output.flush()?;

    Ok(())
}

async fn run_month_detail(engine: &SpendEngine, cli: &Cli, month: MonthKey) -> Result<()> {
    let detail = engine.run_month_detail(&cli.input, month).await?;
    let mut output = BufWriter::new(stdout().lock());

    match cli.format {
        OutputFormat::Text => write_month_detail(&mut output, &detail)?,
        OutputFormat::Json => write_json(&mut output, &detail)?
    }

    output.flush()?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
