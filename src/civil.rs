// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic zone-tagged civil (wall-clock) reading.
//!
//! [`CivilReading<Z>`] stores a wall-clock date-time whose *meaning* is
//! determined by the compile-time marker `Z: Zone`, together with the UTC
//! offset that was resolved for it.  A civil reading alone is not globally
//! meaningful — the zone tag and resolved offset are what pin it to the
//! absolute timeline, and during DST transitions an untagged wall clock may
//! be ambiguous or nonexistent (see [`LocalResolution`]).
//!
//! Readings are only ever constructed in *resolved* form (offset known).
//! Unresolved wall clocks are plain `chrono::NaiveDateTime` values until a
//! conversion direction assigns them a zone; see
//! [`convert`](crate::convert()).

use crate::dst::LocalResolution;
use crate::instant::Instant;
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, SecondsFormat};
use std::marker::PhantomData;

// ═══════════════════════════════════════════════════════════════════════════
// Zone trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for civil time zones.
///
/// A **zone** defines:
///
/// 1. A human-readable **label** (e.g. `"UTC"`, `"Eastern"`).
/// 2. A pair of conversion directions between the zone's wall clock and the
///    absolute UTC timeline — the canonical internal representation used
///    throughout the crate:
///    - absolute → civil via [`offset_seconds_at`](Zone::offset_seconds_at)
///      (always single-valued), and
///    - civil → absolute via [`resolve_wall_clock`](Zone::resolve_wall_clock)
///      (single-valued, ambiguous, or nonexistent around DST transitions).
///
/// For fixed-offset zones ([`UTC`](crate::UTC)) both directions are trivial.
/// For DST-observing zones ([`ET`](crate::ET)) they consult the zone's rule
/// provider (see [`dst`](crate::dst)).
pub trait Zone: Copy + Clone + std::fmt::Debug + PartialEq + 'static {
    /// Display label used by diagnostics.
    const LABEL: &'static str;

    /// Offset from UTC (seconds east) in effect at an absolute instant.
    fn offset_seconds_at(instant: Instant) -> i32;

    /// Resolve a naive wall-clock reading in this zone against the absolute
    /// timeline.
    fn resolve_wall_clock(wall: NaiveDateTime) -> LocalResolution;
}

// ═══════════════════════════════════════════════════════════════════════════
// CivilReading<Z> — the generic resolved wall-clock reading
// ═══════════════════════════════════════════════════════════════════════════

/// A resolved wall-clock reading in zone `Z`.
///
/// Internally stores the wall-clock `NaiveDateTime` plus the UTC offset
/// (seconds east) in effect for this particular reading; `PhantomData` is
/// zero-sized, so the marker costs nothing.  Because the offset is stored,
/// converting back to an [`Instant`] is exact and infallible — including for
/// readings inside the fall-back overlap, where the offset records *which*
/// of the two occurrences this reading is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CivilReading<Z: Zone> {
    wall: NaiveDateTime,
    offset_seconds: i32,
    _zone: PhantomData<Z>,
}

impl<Z: Zone> CivilReading<Z> {
    // ── constructors ──────────────────────────────────────────────────

    /// Read an absolute instant on zone `Z`'s wall clock.
    ///
    /// This direction is always single-valued: the offset in effect at
    /// `instant` is computed from the zone rules and applied.  Returns
    /// `None` if the instant falls outside chrono's representable range.
    pub fn from_instant(instant: Instant) -> Option<Self> {
        let utc = instant.to_utc()?;
        let offset_seconds = Z::offset_seconds_at(instant);
        let shifted = utc.checked_add_signed(Duration::seconds(offset_seconds.into()))?;
        Some(Self {
            wall: shifted.naive_utc(),
            offset_seconds,
            _zone: PhantomData,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The wall-clock date-time (no zone attached).
    #[inline]
    pub const fn wall(&self) -> NaiveDateTime {
        self.wall
    }

    /// The UTC offset (seconds east) resolved for this reading.
    #[inline]
    pub const fn offset_seconds(&self) -> i32 {
        self.offset_seconds
    }

    /// The zone's display label.
    #[inline]
    pub const fn zone_label(&self) -> &'static str {
        Z::LABEL
    }

    /// The absolute instant this reading denotes.
    ///
    /// Exact inverse of [`from_instant`](Self::from_instant): the stored
    /// offset makes the subtraction unambiguous.
    #[inline]
    pub fn instant(&self) -> Instant {
        Instant::from_epoch_millis(
            self.wall.and_utc().timestamp_millis() - i64::from(self.offset_seconds) * 1_000,
        )
    }

    // ── cross-zone conversion (mirroring Instant's hub-and-spoke) ─────

    /// Convert this reading to another zone's wall clock.
    ///
    /// The conversion routes through the canonical absolute timeline:
    ///
    /// ```text
    /// self → Instant → target
    /// ```
    ///
    /// Returns `None` only at the edges of chrono's representable range.
    #[inline]
    pub fn to_zone<T: Zone>(&self) -> Option<CivilReading<T>> {
        CivilReading::<T>::from_instant(self.instant())
    }

    // ── formatting ────────────────────────────────────────────────────

    /// The reading as a `chrono::DateTime<FixedOffset>`, for formatting or
    /// further chrono arithmetic.
    pub fn to_datetime(&self) -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(self.offset_seconds)
            .expect("zone offsets are well inside +/-24h");
        self.wall
            .and_local_timezone(offset)
            .single()
            .expect("reading was constructed from a representable instant")
    }

    /// Format the reading with a strftime-style pattern.
    pub fn format(&self, pattern: &str) -> String {
        self.to_datetime().format(pattern).to_string()
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<Z: Zone> std::fmt::Display for CivilReading<Z> {
    /// ISO-8601 with the resolved numeric offset; UTC readings take the `Z`
    /// suffix.  Fractional seconds appear only when nonzero.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.to_datetime()
                .to_rfc3339_opts(SecondsFormat::AutoSi, true)
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
