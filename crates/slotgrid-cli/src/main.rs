//! `slotgrid` CLI — resolve availability and generate bookable slots from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Generate slots for a request (stdin → stdout)
//! slotgrid generate < request.json
//!
//! # Generate from file to file
//! slotgrid generate -i request.json -o slots.json
//!
//! # Resolve the availability windows for a single date
//! slotgrid windows -i windows.json
//!
//! # Merge overlapping busy blocks into a disjoint set
//! echo '[{"start":"2026-03-02T10:00:00Z","end":"2026-03-02T11:30:00Z"}]' | slotgrid merge
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use slotgrid_core::{
    generate_range, merge_busy_blocks, resolve_windows, BusyBlock, Clock, EventParams, FixedClock,
    Schedule, SystemClock,
};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "slotgrid",
    version,
    about = "Availability resolution and bookable-slot generation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bookable slots for a schedule, parameters, and busy time
    Generate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Resolve the availability windows for a single date
    Windows {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Merge overlapping busy blocks into a disjoint set
    Merge {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// A `generate` request.
#[derive(Deserialize)]
struct GenerateRequest {
    schedule: Schedule,
    params: EventParams,
    #[serde(default)]
    busy_blocks: Vec<BusyBlock>,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    /// Pins "now" instead of reading the system clock; useful for
    /// reproducible runs.
    now: Option<DateTime<Utc>>,
}

/// A `windows` request.
#[derive(Deserialize)]
struct WindowsRequest {
    schedule: Schedule,
    date: NaiveDate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => {
            let raw = read_payload(input.as_deref())?;
            let request: GenerateRequest =
                serde_json::from_str(&raw).context("Failed to parse generate request")?;

            let clock: Box<dyn Clock> = match request.now {
                Some(now) => Box::new(FixedClock(now)),
                None => Box::new(SystemClock),
            };
            let slots = generate_range(
                &request.schedule,
                &request.params,
                &request.busy_blocks,
                request.from,
                request.to,
                clock.as_ref(),
            )
            .context("Failed to generate slots")?;

            let pretty = serde_json::to_string_pretty(&slots)?;
            emit(output.as_deref(), &pretty)?;
        }
        Commands::Windows { input, output } => {
            let raw = read_payload(input.as_deref())?;
            let request: WindowsRequest =
                serde_json::from_str(&raw).context("Failed to parse windows request")?;
            request.schedule.validate().context("Invalid schedule")?;

            let windows = resolve_windows(&request.schedule, request.date);
            let pretty = serde_json::to_string_pretty(&windows)?;
            emit(output.as_deref(), &pretty)?;
        }
        Commands::Merge { input, output } => {
            let raw = read_payload(input.as_deref())?;
            let blocks: Vec<BusyBlock> =
                serde_json::from_str(&raw).context("Failed to parse busy blocks")?;

            let merged = merge_busy_blocks(&blocks);
            let pretty = serde_json::to_string_pretty(&merged)?;
            emit(output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

/// Reads the request payload from `path`, or stdin when no path is given.
fn read_payload(path: Option<&str>) -> Result<String> {
    let Some(path) = path else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    };
    std::fs::read_to_string(path).with_context(|| format!("Failed to read input file '{}'", path))
}

/// Writes rendered JSON to `path`, or stdout when no path is given.
fn emit(path: Option<&str>, rendered: &str) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file '{}'", path))
    } else {
        println!("{}", rendered);
        Ok(())
    }
}
