// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Conversion error types.
//!
//! Both variants are ordinary return-path outcomes scoped to a single call:
//! nothing is retried (every operation is a deterministic pure function) and
//! nothing is fatal to the host process.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors produced while parsing or converting a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input value does not match any accepted encoding, or a numeric
    /// epoch is non-finite / outside the representable date range.
    #[error("unrecognised timestamp {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// An Eastern wall-clock reading falls inside the spring-forward gap.
    ///
    /// The gap boundaries are included so the caller can see exactly which
    /// wall-clock range was skipped (02:00:00 up to 03:00:00 on the
    /// transition day).
    #[error(
        "wall-clock time {reading} does not exist in Eastern time: \
         clocks skip from {gap_start} to {gap_end}"
    )]
    NonexistentTime {
        /// The offending wall-clock reading.
        reading: NaiveDateTime,
        /// First skipped wall-clock value (inclusive).
        gap_start: NaiveDateTime,
        /// First wall-clock value that exists again (exclusive gap end).
        gap_end: NaiveDateTime,
    },
}

impl ConvertError {
    /// Shorthand for a [`ConvertError::Parse`] with an owned input copy.
    pub(crate) fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
