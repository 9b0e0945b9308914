// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The stage registry: the closed set of yearly assessment stages.
//!
//! Stages form a fixed, ordered pipeline. Stage advancement is an explicit
//! backend-authorized action; the registry only describes the stages, it
//! never advances them.
//!
//! ## Invariants
//!
//! - The canonical order is total and gap-free (1 through 6)
//! - `submission` is the entry stage and is never reversible
//! - Every reversible stage has exactly one reopen endpoint segment
//! - The endpoint segment table is case-sensitive and must match the
//!   backend route names byte for byte

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The stages of the yearly assessment pipeline, in canonical order.
///
/// Each variant corresponds to one `tahap` key on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Document submission by regional agencies (DLH).
    #[serde(rename = "submission")]
    Submission,
    /// SLHD document scoring.
    #[serde(rename = "penilaian_slhd")]
    PenilaianSlhd,
    /// First validation round.
    #[serde(rename = "validasi_1")]
    Validasi1,
    /// Second validation round.
    #[serde(rename = "validasi_2")]
    Validasi2,
    /// Award candidate scoring.
    #[serde(rename = "penilaian_penghargaan")]
    PenilaianPenghargaan,
    /// Candidate interviews.
    #[serde(rename = "wawancara")]
    Wawancara,
}

/// Which derived statistics block applies to a stage.
///
/// The counters themselves are backend-supplied; the shape only tells the
/// display layer which fields to expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsShape {
    /// Submission totals and finalized count.
    Submission,
    /// Evaluated count with pass/fail split.
    Scoring,
    /// Participant count with pass/fail split.
    Validation,
    /// Participant count and award entry count.
    Award,
    /// Participant count only.
    Participants,
}

/// All stages in canonical order.
///
/// Evaluation and display must iterate this array, never a hand-sorted
/// subset.
pub const ALL_STAGES: [Stage; 6] = [
    Stage::Submission,
    Stage::PenilaianSlhd,
    Stage::Validasi1,
    Stage::Validasi2,
    Stage::PenilaianPenghargaan,
    Stage::Wawancara,
];

impl Stage {
    /// Returns the string representation of the stage key.
    ///
    /// This is the `tahap` value used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Submission => "submission",
            Self::PenilaianSlhd => "penilaian_slhd",
            Self::Validasi1 => "validasi_1",
            Self::Validasi2 => "validasi_2",
            Self::PenilaianPenghargaan => "penilaian_penghargaan",
            Self::Wawancara => "wawancara",
        }
    }

    /// Parses a stage from its wire key.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownStage` if the string is not a known
    /// stage key.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "submission" => Ok(Self::Submission),
            "penilaian_slhd" => Ok(Self::PenilaianSlhd),
            "validasi_1" => Ok(Self::Validasi1),
            "validasi_2" => Ok(Self::Validasi2),
            "penilaian_penghargaan" => Ok(Self::PenilaianPenghargaan),
            "wawancara" => Ok(Self::Wawancara),
            _ => Err(DomainError::UnknownStage {
                stage: s.to_string(),
            }),
        }
    }

    /// Returns the 1-based canonical order of this stage.
    #[must_use]
    pub const fn order(&self) -> u8 {
        match self {
            Self::Submission => 1,
            Self::PenilaianSlhd => 2,
            Self::Validasi1 => 3,
            Self::Validasi2 => 4,
            Self::PenilaianPenghargaan => 5,
            Self::Wawancara => 6,
        }
    }

    /// Returns the human-readable label for this stage.
    ///
    /// Display-only; never used for dispatch.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Submission => "Pengiriman Dokumen",
            Self::PenilaianSlhd => "Penilaian SLHD",
            Self::Validasi1 => "Validasi 1",
            Self::Validasi2 => "Validasi 2",
            Self::PenilaianPenghargaan => "Penilaian Penghargaan",
            Self::Wawancara => "Wawancara",
        }
    }

    /// Returns whether a completed instance of this stage may be reopened.
    ///
    /// The submission stage is the entry stage and has no unfinalize
    /// semantics; every later stage is reversible by policy.
    #[must_use]
    pub const fn reversible(&self) -> bool {
        !matches!(self, Self::Submission)
    }

    /// Returns the statistics shape for this stage.
    #[must_use]
    pub const fn statistics_shape(&self) -> StatisticsShape {
        match self {
            Self::Submission => StatisticsShape::Submission,
            Self::PenilaianSlhd => StatisticsShape::Scoring,
            Self::Validasi1 | Self::Validasi2 => StatisticsShape::Validation,
            Self::PenilaianPenghargaan => StatisticsShape::Award,
            Self::Wawancara => StatisticsShape::Participants,
        }
    }

    /// Returns the backend endpoint segment for reopening this stage.
    ///
    /// `None` for stages with no reopen route. This table must stay
    /// consistent with the backend route names; a reversible stage added
    /// server-side needs a matching entry here or reopening fails.
    #[must_use]
    pub const fn endpoint_segment(&self) -> Option<&'static str> {
        match self {
            Self::Submission => None,
            Self::PenilaianSlhd => Some("slhd"),
            Self::Validasi1 => Some("validasi1"),
            Self::Validasi2 => Some("validasi2"),
            Self::PenilaianPenghargaan => Some("penghargaan"),
            Self::Wawancara => Some("wawancara"),
        }
    }
}

impl FromStr for Stage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
