// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil Time Module
//!
//! This crate provides types and abstractions for converting timestamps
//! between the absolute UTC timeline and US Eastern civil time, with the
//! daylight-saving edge cases made explicit.
//!
//! # Core types
//!
//! - [`Instant`] — an absolute point on the UTC timeline (epoch milliseconds).
//! - [`CivilReading<Z>`] — a resolved wall-clock reading parameterised by a
//!   [`Zone`] marker.
//! - [`Zone`] — trait that defines a civil zone (offset lookup + wall-clock
//!   resolution).
//! - [`LocalResolution`] — outcome of resolving a wall clock: unambiguous,
//!   ambiguous (fall-back overlap), or nonexistent (spring-forward gap).
//! - [`ZoneRuleProvider`] / [`UsDstRules`] — per-year DST transition data.
//! - [`convert`] / [`Direction`] / [`AmbiguousPreference`] — the top-level
//!   conversion operation.
//! - [`parse_timestamp`] / [`EpochUnit`] — input-encoding detection.
//! - [`ConvertError`] — the two failure kinds, parse and nonexistent-time.
//!
//! # Zones
//!
//! The following markers implement [`Zone`]:
//!
//! | Marker | Zone | Offsets |
//! |--------|------|---------|
//! | [`UTC`] | Coordinated Universal Time | +00:00 |
//! | [`ET`] | US Eastern | −05:00 (EST) / −04:00 (EDT) |
//!
//! # DST (daylight saving time)
//!
//! The Eastern offset shift is applied automatically by the [`ET`] zone.
//! Transition instants are computed per year from calendar arithmetic
//! (second Sunday of March / first Sunday of November since 2007), so the
//! logic generalises across years without a lookup table.  Wall clocks
//! inside the spring-forward gap fail with
//! [`ConvertError::NonexistentTime`]; wall clocks inside the fall-back
//! overlap are settled by an explicit [`AmbiguousPreference`]
//! (default: the earlier, still-daylight occurrence).
//!
//! ```rust
//! use zoneshift::{convert, parse_timestamp, AmbiguousPreference, Direction, EpochUnit};
//!
//! let parsed = parse_timestamp("2024-03-10T06:59:59Z", EpochUnit::Auto)?;
//! let conversion = convert(parsed, Direction::UtcToEastern, AmbiguousPreference::Earlier)?;
//! assert_eq!(conversion.eastern.to_string(), "2024-03-10T01:59:59-05:00");
//! # Ok::<(), zoneshift::ConvertError>(())
//! ```

pub(crate) mod civil;
mod convert;
pub mod dst;
mod error;
pub(crate) mod instant;
mod parse;
pub(crate) mod zones;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use civil::{CivilReading, Zone};
pub use convert::{convert, resolve_eastern, AmbiguousPreference, Conversion, Direction};
pub use dst::{
    LocalResolution, TransitionYear, UsDstRules, ZoneRuleProvider, EASTERN_DAYLIGHT_OFFSET,
    EASTERN_STANDARD_OFFSET,
};
pub use error::ConvertError;
pub use instant::Instant;
pub use parse::{parse_epoch, parse_timestamp, EpochUnit, Parsed, EPOCH_MILLIS_THRESHOLD};
pub use zones::{ET, UTC};

// ── Convenience type aliases ──────────────────────────────────────────────

/// A resolved reading on the UTC wall clock.
///
/// This is a type alias for [`CivilReading<UTC>`].
pub type UtcReading = CivilReading<UTC>;

/// A resolved reading on the US Eastern wall clock.
///
/// This is a type alias for [`CivilReading<ET>`].
pub type EasternReading = CivilReading<ET>;
