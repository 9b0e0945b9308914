// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stage status as derived for display.
//!
//! Status is derived from the backend-supplied active-stage pointer, never
//! from counters and never from deadlines. A passed deadline on an active
//! stage is a warning surface, not a transition.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The derived status of one stage within a year's timeline.
///
/// Exactly one stage per year is `Active`; every stage ordered before it
/// is `Completed` and every stage after it is `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// The stage has not started yet.
    Pending,
    /// The stage is currently running.
    Active,
    /// The stage has been finalized.
    Completed,
}

impl StageStatus {
    /// Returns the string representation of the status.
    ///
    /// This is the wire value used by the backend timeline payload.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parses a status from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStageStatus` if the string is not a
    /// valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidStageStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if the stage can be reopened from this status.
    ///
    /// Only a completed stage may be reopened; reopening a pending or
    /// already-active stage is meaningless.
    #[must_use]
    pub const fn is_reopenable(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl FromStr for StageStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
