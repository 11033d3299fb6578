// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Absolute instant on the UTC timeline.
//!
//! [`Instant`] is the core type of the crate.  It stores an integer count of
//! milliseconds since 1970-01-01T00:00:00Z, so every value is a single
//! unambiguous point on the absolute timeline — one `Instant` corresponds to
//! exactly one UTC civil reading.  All arithmetic (addition/subtraction of
//! durations, difference between instants), UTC conversion, serialisation,
//! and display are exact integer operations.
//!
//! Zone-dependent behaviour (the Eastern offset in effect at an instant,
//! wall-clock resolution) lives in the [`Zone`](crate::Zone) markers, not
//! here: an `Instant` has no zone.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// Instant — a point on the absolute UTC timeline
// ═══════════════════════════════════════════════════════════════════════════

/// A point on the absolute UTC timeline, with millisecond precision.
///
/// The struct is `Copy` and zero-cost: it is layout-identical to an `i64`
/// millisecond count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    millis: i64,
}

impl Instant {
    /// The Unix epoch, 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self::from_epoch_millis(0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from milliseconds since the Unix epoch.
    #[inline]
    pub const fn from_epoch_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Create from whole seconds since the Unix epoch.
    #[inline]
    pub const fn from_epoch_seconds(seconds: i64) -> Self {
        Self {
            millis: seconds * 1_000,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Milliseconds since the Unix epoch.
    #[inline]
    pub const fn epoch_millis(&self) -> i64 {
        self.millis
    }

    /// Whole seconds since the Unix epoch (floor division, so readings
    /// before 1970 round toward minus infinity).
    #[inline]
    pub const fn epoch_seconds(&self) -> i64 {
        self.millis.div_euclid(1_000)
    }

    /// Millisecond fraction within the current second, always `0..1000`.
    #[inline]
    pub const fn subsec_millis(&self) -> i64 {
        self.millis.rem_euclid(1_000)
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    #[inline]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.millis)
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    ///
    /// Sub-millisecond precision is truncated.
    #[inline]
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_epoch_millis(datetime.timestamp_millis())
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        if self.millis <= other.millis {
            self
        } else {
            other
        }
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        if self.millis >= other.millis {
            self
        } else {
            other
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for Instant {
    /// ISO-8601 with a `Z` suffix; fractional seconds appear only when the
    /// millisecond part is nonzero, so whole-second values survive a
    /// parse → format cycle byte-for-byte.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_utc() {
            Some(utc) => write!(f, "{}", utc.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            // Outside chrono's range there is no civil rendering to give.
            None => write!(f, "{} ms since epoch", self.millis),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Instant {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_i64(self.millis)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        Ok(Self::from_epoch_millis(millis))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Duration> for Instant {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        Self::from_epoch_millis(self.millis + rhs.num_milliseconds())
    }
}

impl AddAssign<Duration> for Instant {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        self.millis += rhs.num_milliseconds();
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        Self::from_epoch_millis(self.millis - rhs.num_milliseconds())
    }
}

impl SubAssign<Duration> for Instant {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        self.millis -= rhs.num_milliseconds();
    }
}

impl Sub for Instant {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Duration::milliseconds(self.millis - rhs.millis)
    }
}

// ── From/Into chrono ──────────────────────────────────────────────────────

impl From<DateTime<Utc>> for Instant {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_creation() {
        let instant = Instant::from_epoch_millis(1_700_000_000_000);
        assert_eq!(instant.epoch_millis(), 1_700_000_000_000);
        assert_eq!(instant.epoch_seconds(), 1_700_000_000);
        assert_eq!(instant.subsec_millis(), 0);
    }

    #[test]
    fn test_from_epoch_seconds() {
        let instant = Instant::from_epoch_seconds(1_700_000_000);
        assert_eq!(instant, Instant::from_epoch_millis(1_700_000_000_000));
    }

    #[test]
    fn test_negative_epoch_floors_toward_minus_infinity() {
        // 1969-12-31T23:59:59.750Z
        let instant = Instant::from_epoch_millis(-250);
        assert_eq!(instant.epoch_seconds(), -1);
        assert_eq!(instant.subsec_millis(), 750);
    }

    #[test]
    fn test_utc_roundtrip_is_exact() {
        let datetime = DateTime::from_timestamp(946_728_000, 123_000_000).unwrap();
        let instant = Instant::from_utc(datetime);
        let back = instant.to_utc().expect("to_utc");
        assert_eq!(back, datetime);
        assert_eq!(instant.subsec_millis(), 123);
    }

    #[test]
    fn test_to_utc_out_of_range() {
        assert!(Instant::from_epoch_millis(i64::MAX).to_utc().is_none());
    }

    #[test]
    fn test_add_sub_duration() {
        let mut instant = Instant::from_epoch_millis(1_000);
        assert_eq!(
            instant + Duration::seconds(2),
            Instant::from_epoch_millis(3_000)
        );
        assert_eq!(
            instant - Duration::milliseconds(500),
            Instant::from_epoch_millis(500)
        );
        instant += Duration::seconds(1);
        assert_eq!(instant.epoch_millis(), 2_000);
        instant -= Duration::milliseconds(1_500);
        assert_eq!(instant.epoch_millis(), 500);
    }

    #[test]
    fn test_sub_instants_gives_duration() {
        let earlier = Instant::from_epoch_millis(1_000);
        let later = Instant::from_epoch_millis(4_500);
        assert_eq!(later - earlier, Duration::milliseconds(3_500));
        assert_eq!(earlier - later, Duration::milliseconds(-3_500));
    }

    #[test]
    fn test_const_min_max() {
        const A: Instant = Instant::from_epoch_millis(10);
        const B: Instant = Instant::from_epoch_millis(14);
        const MIN: Instant = A.min(B);
        const MAX: Instant = A.max(B);
        assert_eq!(MIN, A);
        assert_eq!(MAX, B);
    }

    #[test]
    fn test_display_whole_seconds_has_no_fraction() {
        let instant = Instant::from_epoch_seconds(1_720_094_400); // 2024-07-04T12:00:00Z
        assert_eq!(instant.to_string(), "2024-07-04T12:00:00Z");
    }

    #[test]
    fn test_display_prints_nonzero_millis() {
        let instant = Instant::from_epoch_millis(1_720_094_400_123);
        assert_eq!(instant.to_string(), "2024-07-04T12:00:00.123Z");
    }

    #[test]
    fn test_ordering() {
        let earlier = Instant::from_epoch_millis(0);
        let later = Instant::from_epoch_millis(1);
        assert!(earlier < later);
        assert_eq!(earlier.max(later), later);
    }

    #[test]
    fn test_from_datetime_utc() {
        let datetime = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let instant: Instant = datetime.into();
        assert_eq!(instant.epoch_seconds(), 1_700_000_000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrips_as_epoch_millis() {
        let instant = Instant::from_epoch_millis(1_700_000_000_123);
        let json = serde_json::to_string(&instant).unwrap();
        assert_eq!(json, "1700000000123");
        let back: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instant);
    }
}
