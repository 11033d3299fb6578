// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # zoneshift CLI Entry Point
//!
//! Thin wrapper over the library: parses each positional timestamp,
//! converts it in the requested direction, and prints the formatted result.
//! Per-item failures go to stderr and the process exits non-zero if any
//! input failed; successful conversions are never withheld because a
//! sibling input was bad.

use clap::Parser;
use zoneshift::{
    convert, parse_timestamp, AmbiguousPreference, Conversion, Direction, EpochUnit,
};

/// Convert timestamps between UTC and US Eastern time.
///
/// Accepts epoch seconds, epoch milliseconds, or ISO-8601 date-times.
/// Naive date-times (no offset) are read in the source zone of the
/// conversion direction.
#[derive(Parser, Debug)]
#[command(name = "zoneshift", version, about)]
struct Cli {
    /// Epoch seconds/millis or ISO-8601 date-time, one or more.
    #[arg(required = true)]
    timestamps: Vec<String>,

    /// Convert from Eastern to UTC (default is UTC to Eastern).
    #[arg(long)]
    to_utc: bool,

    /// Numeric input units (auto: values >= 1e12 are milliseconds).
    #[arg(long, value_enum, default_value = "auto")]
    units: Units,

    /// Inside the fall-back overlap, pick the later (standard-time)
    /// occurrence instead of the earlier one.
    #[arg(long)]
    later: bool,

    /// strftime pattern for the output (default: ISO-8601).
    #[arg(long)]
    fmt: Option<String>,
}

#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum Units {
    Auto,
    S,
    Ms,
}

impl From<Units> for EpochUnit {
    fn from(units: Units) -> Self {
        match units {
            Units::Auto => EpochUnit::Auto,
            Units::S => EpochUnit::Seconds,
            Units::Ms => EpochUnit::Milliseconds,
        }
    }
}

fn render(conversion: &Conversion, direction: Direction, pattern: Option<&str>) -> String {
    match (direction, pattern) {
        (Direction::UtcToEastern, None) => conversion.eastern.to_string(),
        (Direction::UtcToEastern, Some(p)) => conversion.eastern.format(p),
        (Direction::EasternToUtc, None) => conversion.utc.to_string(),
        (Direction::EasternToUtc, Some(p)) => conversion.utc.format(p),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let direction = if cli.to_utc {
        Direction::EasternToUtc
    } else {
        Direction::UtcToEastern
    };
    let preference = if cli.later {
        AmbiguousPreference::Later
    } else {
        AmbiguousPreference::Earlier
    };
    tracing::debug!(?direction, ?preference, units = ?cli.units, "converting");

    let mut failures = 0usize;
    for raw in &cli.timestamps {
        match parse_timestamp(raw, cli.units.into())
            .and_then(|parsed| convert(parsed, direction, preference))
        {
            Ok(conversion) => {
                tracing::debug!(input = %raw, instant = %conversion.instant, "converted");
                println!("{raw} -> {}", render(&conversion, direction, cli.fmt.as_deref()));
            }
            Err(err) => {
                eprintln!("{raw}: {err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!(
            "{failures} of {} timestamps failed to convert",
            cli.timestamps.len()
        );
    }
    Ok(())
}
