// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # US Eastern DST — Zone Rule Layer
//!
//! This module computes the daylight-saving transition instants of the US
//! Eastern zone **algorithmically per year** (find the Nth weekday of a
//! month), never from a per-date lookup table.
//!
//! ## Integration with Zones
//!
//! The rules are applied **automatically** by the [`ET`](crate::ET) zone
//! marker.  When you read an instant on the Eastern wall clock
//! (`CivilReading::<ET>::from_instant`) or resolve an Eastern wall clock
//! back to the timeline, `ET` consults [`UsDstRules`] through the functions
//! here, so external callers get DST-correct offsets without touching this
//! module.
//!
//! ## Quick Example
//! ```rust
//! use zoneshift::{UsDstRules, ZoneRuleProvider};
//!
//! let year = UsDstRules.transitions_for_year(2024);
//! println!("DST begins {}", year.spring_forward); // 2024-03-10T07:00:00Z
//! println!("DST ends {}", year.fall_back);        // 2024-11-03T06:00:00Z
//! ```
//!
//! ## Rule Eras
//! * 2007–present: second Sunday of March / first Sunday of November
//!   (Energy Policy Act of 2005).
//! * 1987–2006: first Sunday of April / last Sunday of October.
//!
//! Both transitions happen at 02:00 on the local clock then in effect —
//! 02:00 EST going in, 02:00 EDT coming out.
//!
//! ## Valid Time Range
//! Years before 1987 are approximated by the 1987 era.  The pre-1987 US
//! rules varied by year (and briefly by state); readings that far back get
//! the nearest era rather than a per-year reconstruction.

use crate::civil::CivilReading;
use crate::instant::Instant;
use crate::zones::ET;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

/// EST: UTC−05:00, in seconds east of UTC.
pub const EASTERN_STANDARD_OFFSET: i32 = -5 * 3_600;

/// EDT: UTC−04:00, in seconds east of UTC.
pub const EASTERN_DAYLIGHT_OFFSET: i32 = -4 * 3_600;

/// Both transitions fire at 02:00 on the local clock then in effect.
const TRANSITION_WALL_HOUR: u32 = 2;

// ═══════════════════════════════════════════════════════════════════════════
// Zone rule provider
// ═══════════════════════════════════════════════════════════════════════════

/// One year's DST data for an offset-shifting zone.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TransitionYear {
    /// Absolute instant at which the zone jumps to its daylight offset.
    pub spring_forward: Instant,
    /// Absolute instant at which the zone returns to its standard offset.
    pub fall_back: Instant,
    /// Offset (seconds east of UTC) outside the daylight window.
    pub standard_offset: i32,
    /// Offset (seconds east of UTC) inside the daylight window.
    pub daylight_offset: i32,
}

/// Capability supplying per-year transition data.
///
/// The conversion core is written against this trait rather than a concrete
/// data source, so any provider that can answer "given a year, what are the
/// two transition instants and the two offsets" is interchangeable with
/// [`UsDstRules`] — with no behavioural difference visible to callers.
pub trait ZoneRuleProvider {
    /// Transition data for the given calendar year.
    fn transitions_for_year(&self, year: i32) -> TransitionYear;
}

/// The US Eastern rule set, computed from calendar arithmetic.
#[derive(Debug, Copy, Clone, Default)]
pub struct UsDstRules;

impl ZoneRuleProvider for UsDstRules {
    fn transitions_for_year(&self, year: i32) -> TransitionYear {
        match year {
            y if y >= 2007 => era_2007(y),
            y => era_1987(y),
        }
    }
}

// ------------------------------------------------------------------------------------
// Rule Eras
// ------------------------------------------------------------------------------------

/// **2007–present**
/// Second Sunday of March, first Sunday of November.
#[inline]
fn era_2007(year: i32) -> TransitionYear {
    TransitionYear {
        spring_forward: transition_instant(
            nth_weekday(year, 3, Weekday::Sun, 2),
            EASTERN_STANDARD_OFFSET,
        ),
        fall_back: transition_instant(
            nth_weekday(year, 11, Weekday::Sun, 1),
            EASTERN_DAYLIGHT_OFFSET,
        ),
        standard_offset: EASTERN_STANDARD_OFFSET,
        daylight_offset: EASTERN_DAYLIGHT_OFFSET,
    }
}

/// **1987–2006** (and, as an approximation, earlier years)
/// First Sunday of April, last Sunday of October.
#[inline]
fn era_1987(year: i32) -> TransitionYear {
    TransitionYear {
        spring_forward: transition_instant(
            nth_weekday(year, 4, Weekday::Sun, 1),
            EASTERN_STANDARD_OFFSET,
        ),
        fall_back: transition_instant(
            last_weekday(year, 10, Weekday::Sun),
            EASTERN_DAYLIGHT_OFFSET,
        ),
        standard_offset: EASTERN_STANDARD_OFFSET,
        daylight_offset: EASTERN_DAYLIGHT_OFFSET,
    }
}

// ------------------------------------------------------------------------------------
// Calendar arithmetic
// ------------------------------------------------------------------------------------

#[inline]
fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u8) -> NaiveDate {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
        .expect("first and second weekday occurrences exist in every month")
}

#[inline]
fn last_weekday(year: i32, month: u32, weekday: Weekday) -> NaiveDate {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, 5)
        .or_else(|| NaiveDate::from_weekday_of_month_opt(year, month, weekday, 4))
        .expect("every month has at least four of each weekday")
}

/// Absolute instant of a transition firing at 02:00 on the local clock that
/// is in effect as the transition is reached.
#[inline]
fn transition_instant(date: NaiveDate, offset_seconds: i32) -> Instant {
    let wall = date
        .and_hms_opt(TRANSITION_WALL_HOUR, 0, 0)
        .expect("02:00:00 is a valid wall-clock time");
    Instant::from_epoch_millis(wall.and_utc().timestamp_millis() - i64::from(offset_seconds) * 1_000)
}

// ═══════════════════════════════════════════════════════════════════════════
// Offset lookup and wall-clock resolution
// ═══════════════════════════════════════════════════════════════════════════

/// Outcome of resolving a naive wall-clock reading against a zone's rules.
///
/// The spring-forward gap and fall-back overlap are explicit variants, never
/// silently coerced: the caller decides what an ambiguous reading means and
/// a nonexistent one is an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LocalResolution {
    /// Exactly one offset is valid for the wall clock.
    Unambiguous(Instant),
    /// The wall clock occurs twice (fall-back overlap).  `earlier` is the
    /// first pass, still on the daylight offset; `later` is the second,
    /// back on standard time.
    Ambiguous { earlier: Instant, later: Instant },
    /// The wall clock was skipped (spring-forward gap).  Boundaries are the
    /// first skipped wall-clock value and the first value that exists again.
    Nonexistent {
        gap_start: NaiveDateTime,
        gap_end: NaiveDateTime,
    },
}

/// Offset (seconds east of UTC) in effect at `instant` under `provider`.
///
/// Daylight time covers the half-open window
/// `[spring_forward, fall_back)`; everything else is standard time.
pub fn offset_seconds_at(provider: &impl ZoneRuleProvider, instant: Instant) -> i32 {
    let utc = instant
        .to_utc()
        .expect("instant out of chrono::DateTime<Utc> representable range");
    let year = provider.transitions_for_year(utc.year());
    if instant >= year.spring_forward && instant < year.fall_back {
        year.daylight_offset
    } else {
        year.standard_offset
    }
}

/// Resolve a naive wall-clock reading against `provider`'s rules.
///
/// Pure wall-clock comparison against the reading's own year: the candidate
/// instants under each offset are checked against that year's half-open
/// daylight window, and the (in)validity pattern picks the variant.  No
/// state survives between calls.
pub fn resolve_wall_clock(provider: &impl ZoneRuleProvider, wall: NaiveDateTime) -> LocalResolution {
    let year = provider.transitions_for_year(wall.year());
    let wall_millis = wall.and_utc().timestamp_millis();
    let as_standard =
        Instant::from_epoch_millis(wall_millis - i64::from(year.standard_offset) * 1_000);
    let as_daylight =
        Instant::from_epoch_millis(wall_millis - i64::from(year.daylight_offset) * 1_000);

    let standard_valid = as_standard < year.spring_forward || as_standard >= year.fall_back;
    let daylight_valid = as_daylight >= year.spring_forward && as_daylight < year.fall_back;

    match (standard_valid, daylight_valid) {
        (true, false) => LocalResolution::Unambiguous(as_standard),
        (false, true) => LocalResolution::Unambiguous(as_daylight),
        // Fall-back overlap: the daylight occurrence comes first on the
        // absolute timeline.
        (true, true) => LocalResolution::Ambiguous {
            earlier: as_daylight,
            later: as_standard,
        },
        (false, false) => LocalResolution::Nonexistent {
            gap_start: local_wall(year.spring_forward, year.standard_offset),
            gap_end: local_wall(year.spring_forward, year.daylight_offset),
        },
    }
}

/// Wall clock shown at `instant` under a fixed offset.
#[inline]
fn local_wall(instant: Instant, offset_seconds: i32) -> NaiveDateTime {
    let utc = instant
        .to_utc()
        .expect("transition instants are within chrono's representable range");
    utc.naive_utc() + Duration::seconds(offset_seconds.into())
}

// ── CivilReading<ET> convenience methods ──────────────────────────────────

impl CivilReading<ET> {
    /// Whether this reading is on the daylight offset (EDT).
    #[inline]
    pub fn is_daylight(&self) -> bool {
        self.offset_seconds() == EASTERN_DAYLIGHT_OFFSET
    }

    /// `"EDT"` or `"EST"`, matching the resolved offset.
    #[inline]
    pub fn offset_abbreviation(&self) -> &'static str {
        if self.is_daylight() {
            "EDT"
        } else {
            "EST"
        }
    }
}
