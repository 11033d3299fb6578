// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Input-encoding detection and parsing.
//!
//! Three encodings are accepted:
//!
//! 1. **Epoch seconds** (numeric),
//! 2. **Epoch milliseconds** (numeric) — for the `Auto` unit the two are
//!    told apart by magnitude: values at or above
//!    [`EPOCH_MILLIS_THRESHOLD`] (`10^12`) are taken as milliseconds,
//! 3. **ISO-8601 text** — date, `T`, time, optional fractional seconds,
//!    and either a `Z` suffix, an explicit numeric offset, or no offset at
//!    all.  A string with no offset parses to a *naive* reading whose zone
//!    is assigned later by the conversion direction.
//!
//! Anything else fails with [`ConvertError::Parse`]; non-finite numerics
//! are rejected rather than coerced.

use crate::error::ConvertError;
use crate::instant::Instant;
use chrono::{DateTime, NaiveDateTime};

/// Numeric inputs at or above this value are interpreted as epoch
/// milliseconds when the unit is [`EpochUnit::Auto`].
///
/// `10^12` seconds is roughly the year 33658, while `10^12` milliseconds is
/// 2001-09-09 — so any plausible millisecond timestamp clears the threshold
/// and any plausible second timestamp stays below it.
pub const EPOCH_MILLIS_THRESHOLD: f64 = 1.0e12;

/// Unit declaration for numeric epoch input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EpochUnit {
    /// Decide by magnitude against [`EPOCH_MILLIS_THRESHOLD`].
    #[default]
    Auto,
    /// The value is seconds since the Unix epoch (fractions kept to
    /// millisecond precision).
    Seconds,
    /// The value is milliseconds since the Unix epoch.
    Milliseconds,
}

/// A successfully parsed input value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// The input pinned an absolute point on the timeline (epoch value, or
    /// ISO-8601 text carrying `Z` / an explicit offset).
    Absolute(Instant),
    /// The input was a wall-clock reading with no zone information; the
    /// conversion direction decides which zone it is read in.
    Naive(NaiveDateTime),
}

/// Parse a numeric epoch value into an [`Instant`].
///
/// Fails with [`ConvertError::Parse`] when the value is not finite or the
/// scaled result leaves chrono's representable date range.
pub fn parse_epoch(value: f64, unit: EpochUnit) -> Result<Instant, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::parse(
            value.to_string(),
            "numeric timestamps must be finite",
        ));
    }

    let millis = match unit {
        EpochUnit::Milliseconds => value,
        EpochUnit::Seconds => value * 1_000.0,
        EpochUnit::Auto if value >= EPOCH_MILLIS_THRESHOLD => value,
        EpochUnit::Auto => value * 1_000.0,
    }
    .round();

    if millis < i64::MIN as f64
        || millis > i64::MAX as f64
        || DateTime::from_timestamp_millis(millis as i64).is_none()
    {
        return Err(ConvertError::parse(
            value.to_string(),
            "epoch value outside the representable date range",
        ));
    }
    Ok(Instant::from_epoch_millis(millis as i64))
}

/// Parse a raw timestamp string into an absolute instant or a naive reading.
///
/// Numeric forms are tried first (matching the behaviour users expect from
/// shell input), then offset-carrying ISO-8601, then naive ISO-8601.
pub fn parse_timestamp(raw: &str, unit: EpochUnit) -> Result<Parsed, ConvertError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::parse(raw, "empty input"));
    }

    if let Ok(value) = trimmed.parse::<f64>() {
        return parse_epoch(value, unit).map(Parsed::Absolute);
    }

    if let Ok(aware) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Parsed::Absolute(Instant::from_epoch_millis(
            aware.timestamp_millis(),
        )));
    }

    // No offset: a naive wall clock.  Seconds may be omitted.
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(Parsed::Naive(naive));
        }
    }

    Err(ConvertError::parse(
        raw,
        "expected epoch seconds/milliseconds or an ISO-8601 date-time",
    ))
}
