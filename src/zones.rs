// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Zone marker types.
//!
//! Each zero-sized type identifies a civil time zone and encodes how wall
//! clocks in that zone relate to the canonical **absolute UTC timeline**.
//!
//! | Marker | Zone | Offsets |
//! |--------|------|---------|
//! | [`UTC`] | Coordinated Universal Time | +00:00 |
//! | [`ET`] | US Eastern | −05:00 (EST) / −04:00 (EDT) |
//!
//! [`UTC`] is the identity zone: its wall clock *is* the absolute timeline,
//! so both conversion directions are trivial and always single-valued.
//! [`ET`] consults the [`UsDstRules`] provider, so its wall clock can be
//! ambiguous or nonexistent around the DST transitions (see
//! [`dst`](crate::dst)).

use crate::civil::Zone;
use crate::dst::{self, LocalResolution, UsDstRules};
use crate::instant::Instant;
use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Fixed-offset zones
// ---------------------------------------------------------------------------

/// Coordinated Universal Time — the identity zone.
///
/// A UTC wall clock and the absolute timeline coincide, so resolution can
/// never be ambiguous or nonexistent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd)]
pub struct UTC;

impl Zone for UTC {
    const LABEL: &'static str = "UTC";

    #[inline(always)]
    fn offset_seconds_at(_instant: Instant) -> i32 {
        0
    }

    #[inline(always)]
    fn resolve_wall_clock(wall: NaiveDateTime) -> LocalResolution {
        LocalResolution::Unambiguous(Instant::from_utc(wall.and_utc()))
    }
}

// ---------------------------------------------------------------------------
// DST-observing zones
// ---------------------------------------------------------------------------

/// US Eastern time — the DST-observing civil zone.
///
/// Unlike [`UTC`], `ET` shifts between EST (UTC−5) and EDT (UTC−4) at the
/// instants computed by [`UsDstRules`], so resolving an Eastern wall clock
/// can surface the spring-forward gap and the fall-back overlap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd)]
pub struct ET;

impl Zone for ET {
    const LABEL: &'static str = "Eastern";

    #[inline]
    fn offset_seconds_at(instant: Instant) -> i32 {
        dst::offset_seconds_at(&UsDstRules, instant)
    }

    #[inline]
    fn resolve_wall_clock(wall: NaiveDateTime) -> LocalResolution {
        dst::resolve_wall_clock(&UsDstRules, wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dst::{EASTERN_DAYLIGHT_OFFSET, EASTERN_STANDARD_OFFSET};

    #[test]
    fn utc_is_the_identity_zone() {
        let instant = Instant::from_epoch_seconds(1_700_000_000);
        assert_eq!(UTC::offset_seconds_at(instant), 0);

        let wall = NaiveDateTime::parse_from_str("2024-07-04T12:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(
            UTC::resolve_wall_clock(wall),
            LocalResolution::Unambiguous(Instant::from_epoch_seconds(1_720_094_400))
        );
    }

    #[test]
    fn eastern_offset_tracks_the_dst_window() {
        // 2024-07-04T12:00:00Z is inside the daylight window,
        // 2024-01-15T12:00:00Z is outside it.
        assert_eq!(
            ET::offset_seconds_at(Instant::from_epoch_seconds(1_720_094_400)),
            EASTERN_DAYLIGHT_OFFSET
        );
        assert_eq!(
            ET::offset_seconds_at(Instant::from_epoch_seconds(1_705_320_000)),
            EASTERN_STANDARD_OFFSET
        );
    }

    #[test]
    fn zone_labels() {
        assert_eq!(UTC::LABEL, "UTC");
        assert_eq!(ET::LABEL, "Eastern");
    }
}
