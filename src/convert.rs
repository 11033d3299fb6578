// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Top-level conversion between the absolute timeline and civil readings.
//!
//! [`convert`] normalises a parsed input to an [`Instant`] — assigning naive
//! wall clocks the zone named by the [`Direction`] — and returns the instant
//! together with both civil readings.  The Eastern gap/overlap edge cases
//! surface here: nonexistent readings fail, ambiguous ones are settled by an
//! explicit [`AmbiguousPreference`], never guessed silently.

use crate::civil::{CivilReading, Zone};
use crate::dst::LocalResolution;
use crate::error::ConvertError;
use crate::instant::Instant;
use crate::parse::Parsed;
use crate::zones::{ET, UTC};
use chrono::NaiveDateTime;

/// Which way a conversion reads its input and renders its output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Input is UTC (naive wall clocks read as UTC); output of interest is
    /// the Eastern reading.
    UtcToEastern,
    /// Input is Eastern (naive wall clocks resolved against the DST rules);
    /// output of interest is the UTC reading.
    EasternToUtc,
}

/// Which occurrence an ambiguous (fall-back overlap) reading denotes.
///
/// The default is `Earlier` — the first pass through the repeated hour,
/// still on daylight time.  This matches localising a naive reading with
/// the pre-transition offset; callers wanting the post-transition reading
/// opt in with `Later`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum AmbiguousPreference {
    /// The first occurrence on the absolute timeline (daylight offset).
    #[default]
    Earlier,
    /// The second occurrence (standard offset).
    Later,
}

/// The result of a conversion: the absolute instant plus its reading on
/// each zone's wall clock.
///
/// Both readings denote the same instant, so either converts back exactly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The absolute point on the UTC timeline.
    pub instant: Instant,
    /// That point on the UTC wall clock.
    pub utc: CivilReading<UTC>,
    /// That point on the Eastern wall clock, with the DST offset resolved.
    pub eastern: CivilReading<ET>,
}

/// Convert a parsed input between UTC and Eastern civil time.
///
/// Naive readings are interpreted in the direction's *source* zone; inputs
/// that already pin an absolute instant (epoch values, offset-carrying
/// ISO-8601) ignore the direction for interpretation and only use it to
/// choose what the caller renders.
///
/// # Errors
///
/// [`ConvertError::NonexistentTime`] when a naive Eastern reading falls in
/// the spring-forward gap, and [`ConvertError::Parse`] when the instant
/// cannot be expressed on both wall clocks (edges of chrono's range).
pub fn convert(
    parsed: Parsed,
    direction: Direction,
    preference: AmbiguousPreference,
) -> Result<Conversion, ConvertError> {
    let instant = match parsed {
        Parsed::Absolute(instant) => instant,
        Parsed::Naive(wall) => {
            let resolution = match direction {
                Direction::UtcToEastern => UTC::resolve_wall_clock(wall),
                Direction::EasternToUtc => ET::resolve_wall_clock(wall),
            };
            settle(wall, resolution, preference)?
        }
    };

    let utc = CivilReading::<UTC>::from_instant(instant).ok_or_else(|| out_of_range(instant))?;
    let eastern = CivilReading::<ET>::from_instant(instant).ok_or_else(|| out_of_range(instant))?;
    Ok(Conversion {
        instant,
        utc,
        eastern,
    })
}

/// Resolve a naive Eastern wall clock to an absolute instant.
///
/// This is the Eastern→UTC core on its own, for callers that do not need
/// the paired readings.
pub fn resolve_eastern(
    wall: NaiveDateTime,
    preference: AmbiguousPreference,
) -> Result<Instant, ConvertError> {
    settle(wall, ET::resolve_wall_clock(wall), preference)
}

/// Settle a [`LocalResolution`] with the caller's preference.
fn settle(
    wall: NaiveDateTime,
    resolution: LocalResolution,
    preference: AmbiguousPreference,
) -> Result<Instant, ConvertError> {
    match resolution {
        LocalResolution::Unambiguous(instant) => Ok(instant),
        LocalResolution::Ambiguous { earlier, later } => Ok(match preference {
            AmbiguousPreference::Earlier => earlier,
            AmbiguousPreference::Later => later,
        }),
        LocalResolution::Nonexistent { gap_start, gap_end } => Err(ConvertError::NonexistentTime {
            reading: wall,
            gap_start,
            gap_end,
        }),
    }
}

fn out_of_range(instant: Instant) -> ConvertError {
    ConvertError::parse(
        instant.epoch_millis().to_string(),
        "instant outside the representable date range",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_timestamp, EpochUnit};

    fn naive(iso: &str) -> Parsed {
        let parsed = parse_timestamp(iso, EpochUnit::Auto).unwrap();
        assert!(matches!(parsed, Parsed::Naive(_)));
        parsed
    }

    fn absolute(iso: &str) -> Instant {
        match parse_timestamp(iso, EpochUnit::Auto).unwrap() {
            Parsed::Absolute(instant) => instant,
            other => panic!("expected absolute, got {other:?}"),
        }
    }

    #[test]
    fn naive_input_follows_the_direction() {
        let as_utc = convert(
            naive("2024-07-04T12:00:00"),
            Direction::UtcToEastern,
            AmbiguousPreference::Earlier,
        )
        .unwrap();
        assert_eq!(as_utc.instant, absolute("2024-07-04T12:00:00Z"));

        let as_eastern = convert(
            naive("2024-07-04T12:00:00"),
            Direction::EasternToUtc,
            AmbiguousPreference::Earlier,
        )
        .unwrap();
        assert_eq!(as_eastern.instant, absolute("2024-07-04T16:00:00Z"));
    }

    #[test]
    fn absolute_input_ignores_the_direction() {
        let forward = convert(
            Parsed::Absolute(absolute("2024-01-15T12:00:00Z")),
            Direction::UtcToEastern,
            AmbiguousPreference::Earlier,
        )
        .unwrap();
        let backward = convert(
            Parsed::Absolute(absolute("2024-01-15T12:00:00Z")),
            Direction::EasternToUtc,
            AmbiguousPreference::Earlier,
        )
        .unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn conversion_pairs_denote_one_instant() {
        let conversion = convert(
            Parsed::Absolute(absolute("2024-07-04T12:00:00Z")),
            Direction::UtcToEastern,
            AmbiguousPreference::Earlier,
        )
        .unwrap();
        assert_eq!(conversion.utc.instant(), conversion.instant);
        assert_eq!(conversion.eastern.instant(), conversion.instant);
        assert_eq!(conversion.utc.to_string(), "2024-07-04T12:00:00Z");
        assert_eq!(conversion.eastern.to_string(), "2024-07-04T08:00:00-04:00");
    }

    #[test]
    fn overlap_preference_picks_the_occurrence() {
        let earlier = convert(
            naive("2024-11-03T01:30:00"),
            Direction::EasternToUtc,
            AmbiguousPreference::Earlier,
        )
        .unwrap();
        assert_eq!(earlier.instant, absolute("2024-11-03T05:30:00Z"));
        assert!(earlier.eastern.is_daylight());

        let later = convert(
            naive("2024-11-03T01:30:00"),
            Direction::EasternToUtc,
            AmbiguousPreference::Later,
        )
        .unwrap();
        assert_eq!(later.instant, absolute("2024-11-03T06:30:00Z"));
        assert!(!later.eastern.is_daylight());
    }

    #[test]
    fn gap_reading_is_a_nonexistent_time_error() {
        let err = convert(
            naive("2024-03-10T02:30:00"),
            Direction::EasternToUtc,
            AmbiguousPreference::Earlier,
        )
        .unwrap_err();
        let ConvertError::NonexistentTime {
            reading,
            gap_start,
            gap_end,
        } = err
        else {
            panic!("expected NonexistentTime, got {err:?}");
        };
        assert_eq!(reading.to_string(), "2024-03-10 02:30:00");
        assert_eq!(gap_start.to_string(), "2024-03-10 02:00:00");
        assert_eq!(gap_end.to_string(), "2024-03-10 03:00:00");
    }

    #[test]
    fn gap_error_message_names_the_boundaries() {
        let Parsed::Naive(wall) = naive("2024-03-10T02:30:00") else {
            unreachable!()
        };
        let message = resolve_eastern(wall, AmbiguousPreference::Earlier)
            .unwrap_err()
            .to_string();
        assert!(message.contains("2024-03-10 02:00:00"));
        assert!(message.contains("2024-03-10 03:00:00"));
    }

    #[test]
    fn gap_reading_as_utc_input_is_fine() {
        // The same wall clock read as UTC is a perfectly ordinary moment.
        let conversion = convert(
            naive("2024-03-10T02:30:00"),
            Direction::UtcToEastern,
            AmbiguousPreference::Earlier,
        )
        .unwrap();
        assert_eq!(conversion.eastern.to_string(), "2024-03-09T21:30:00-05:00");
    }

    #[test]
    fn round_trip_through_the_wall_clock() {
        for iso in [
            "2024-01-15T12:00:00Z",
            "2024-07-04T12:00:00Z",
            "2024-03-10T06:59:59Z",
            "2024-03-10T07:00:00Z",
            "2024-11-03T05:30:00Z", // overlap, first pass
            "2024-11-03T06:30:00Z", // overlap, second pass
        ] {
            let instant = absolute(iso);
            let conversion = convert(
                Parsed::Absolute(instant),
                Direction::UtcToEastern,
                AmbiguousPreference::Earlier,
            )
            .unwrap();
            // The resolved reading carries its offset, so the inverse is
            // exact even inside the overlap.
            assert_eq!(conversion.eastern.instant(), instant, "round trip {iso}");
        }
    }
}
