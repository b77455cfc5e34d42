//! `slots` CLI — inspect the booking widget's availability logic from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Default slot grid (fixed Monday schedule)
//! slots grid
//!
//! # Availability for a date/service from a booked-events payload
//! slots parse -i payload.json --date 2024-03-18 --service 360-booth
//!
//! # Same, payload piped on stdin, rendered as a plain table
//! cat payload.json | slots parse --date 2024-03-18 --service 360-booth --plain
//!
//! # The service catalog
//! slots services
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde_json::Value;
use slot_engine::{
    generate_default_time_slots, parse_webhook_time_slots, BookingConfig, TimeSlot,
};

#[derive(Parser)]
#[command(name = "slots", version, about = "Booking slot availability CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default slot grid (fixed Monday schedule)
    Grid {
        /// Render a plain text table instead of JSON
        #[arg(long)]
        plain: bool,
    },
    /// Derive availability for a date/service from a booked-events payload
    Parse {
        /// Input payload file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Selected date, YYYY-MM-DD (empty selects the default grid)
        #[arg(long, default_value = "")]
        date: String,
        /// Selected service id (e.g. "360-booth")
        #[arg(long, default_value = "")]
        service: String,
        /// Render a plain text table instead of JSON
        #[arg(long)]
        plain: bool,
    },
    /// Print the service catalog
    Services,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BookingConfig::default();

    match cli.command {
        Commands::Grid { plain } => {
            let slots = generate_default_time_slots(&config.hours, Utc::now());
            print_slots(&slots, plain)?;
        }
        Commands::Parse {
            input,
            date,
            service,
            plain,
        } => {
            let raw = read_input(input.as_deref())?;
            // Unreadable JSON gets the same treatment as an unusable payload:
            // the engine falls back to the default grid.
            let payload: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);
            let slots =
                parse_webhook_time_slots(&payload, &date, &service, &config.hours, Utc::now());
            print_slots(&slots, plain)?;
        }
        Commands::Services => {
            let json = serde_json::to_string_pretty(&config.services)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn print_slots(slots: &[TimeSlot], plain: bool) -> Result<()> {
    if plain {
        for slot in slots {
            let state = if slot.available { "available" } else { "booked" };
            println!("{}  {}", slot.time, state);
        }
    } else {
        println!("{}", serde_json::to_string_pretty(slots)?);
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
