// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deadline wall-clock model.
//!
//! Deadlines never drive stage transitions. Whether a deadline has passed
//! is computed against a caller-supplied `now`; nothing in this module
//! reads the system clock.

use crate::error::DomainError;
use chrono::{DateTime, NaiveDateTime, Utc};

/// A stage or submission deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: DateTime<Utc>,
}

/// Remaining time until a deadline, broken down for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRemaining {
    /// Whole days remaining.
    pub days: i64,
    /// Hours remaining after whole days.
    pub hours: i64,
    /// Minutes remaining after whole hours.
    pub minutes: i64,
}

impl Deadline {
    /// Creates a deadline from a UTC timestamp.
    #[must_use]
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// Parses a deadline from an RFC 3339 timestamp string.
    ///
    /// This is the format the backend uses for `deadline.tanggal`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DeadlineParse` if the string is not a valid
    /// timestamp.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        // The backend sends either a full RFC 3339 timestamp or a local
        // datetime without offset; accept both, treating the latter as UTC.
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self {
                at: dt.with_timezone(&Utc),
            });
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .map(|naive| Self { at: naive.and_utc() })
            .map_err(|e| DomainError::DeadlineParse {
                value: s.to_string(),
                error: e.to_string(),
            })
    }

    /// Returns the deadline timestamp.
    #[must_use]
    pub const fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Returns true if the deadline has passed at `now`.
    #[must_use]
    pub fn is_passed(&self, now: DateTime<Utc>) -> bool {
        now > self.at
    }

    /// Returns the remaining time at `now`, or `None` once passed.
    #[must_use]
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Option<TimeRemaining> {
        let diff = self.at - now;
        if diff <= chrono::Duration::zero() {
            return None;
        }
        Some(TimeRemaining {
            days: diff.num_days(),
            hours: diff.num_hours() % 24,
            minutes: diff.num_minutes() % 60,
        })
    }
}

impl std::fmt::Display for Deadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.at.to_rfc3339())
    }
}
