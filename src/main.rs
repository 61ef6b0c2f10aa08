//! Command-line view layer for the age calculator.
//!
//! Thin wrapper around the `agecalc` library: parses the three raw input
//! values, picks the reference date, and renders either the validation
//! message or the computed result. It keeps no state of its own.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use agecalc::render::render_plain;
use agecalc::{compute_age, validate};

/// Calculate age from a birth date
#[derive(Parser)]
#[command(name = "agecalc", version)]
#[command(about = "Calculate age in years/months/days, total days lived, and days until the next birthday")]
struct Cli {
    /// Day of the month (1-31)
    day: Option<u32>,

    /// Month (1-12)
    month: Option<u32>,

    /// Year (e.g. 1990)
    year: Option<i32>,

    /// Reference date to calculate against instead of today's local date
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(%today, "reference date");

    let birth = match validate(cli.day, cli.month, cli.year, today) {
        Ok(birth) => birth,
        Err(err) => {
            // User feedback, not a program error: message verbatim, no trace.
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    debug!(%birth, "validated birth date");

    let age = compute_age(birth, today);

    if cli.json {
        let json = serde_json::to_string_pretty(&age).context("Failed to serialize result")?;
        println!("{json}");
    } else {
        print!("{}", render_plain(&age));
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
