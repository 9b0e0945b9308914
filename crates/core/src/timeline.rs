// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evaluated timeline state.
//!
//! These types are the output of [`crate::evaluate_snapshot`]. They hold
//! derived statuses and typed statistics; they carry no authority of their
//! own and are discarded whenever a fresh snapshot arrives.

use sipelita_domain::{AssessmentYear, Deadline, Stage, StageStatus};

use crate::snapshot::WireStatistics;
use crate::summary::SummaryTotals;

/// The evaluated timeline for one assessment year.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedTimeline {
    /// The assessment year.
    pub year: AssessmentYear,
    /// The active stage, resolved against the registry.
    pub active_stage: Stage,
    /// Display label of the active stage, as sent by the backend.
    pub active_label: String,
    /// Free-form description of the active stage.
    pub description: String,
    /// Whether result announcements are open.
    pub announcement_open: bool,
    /// Overall progress, 0-100. Forwarded verbatim from the snapshot.
    pub progress_percentage: u8,
    /// Per-stage evaluations, ascending by canonical order.
    pub stages: Vec<EvaluatedStage>,
    /// Year-level rollup totals, reshaped for display.
    pub summary: SummaryTotals,
}

impl EvaluatedTimeline {
    /// Returns the evaluation for one stage, if present in the timeline.
    #[must_use]
    pub fn stage(&self, stage: Stage) -> Option<&EvaluatedStage> {
        self.stages.iter().find(|s| s.stage == stage)
    }
}

/// One stage's evaluated state.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedStage {
    /// The stage.
    pub stage: Stage,
    /// Display label, as sent by the backend.
    pub label: String,
    /// Derived status. Comes only from the active-stage pointer.
    pub status: StageStatus,
    /// Deadline state, if a deadline is configured.
    pub deadline: Option<EvaluatedDeadline>,
    /// Typed statistics, if the stage reports any.
    pub statistics: Option<StageStatistics>,
}

/// A stage deadline with its locally computed passed flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedDeadline {
    /// The deadline.
    pub deadline: Deadline,
    /// Pre-formatted display string from the backend.
    pub formatted: String,
    /// Whether the deadline had passed at evaluation time. Never affects
    /// the stage status; surfaced as a warning only.
    pub is_passed: bool,
}

/// Typed per-stage statistics, shaped per the stage registry.
///
/// Missing wire counters default to zero; all values are backend-computed
/// and are not re-derived here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatistics {
    /// Submission totals and finalized count.
    Submission {
        /// Total submissions.
        total_submission: u64,
        /// Finalized submissions.
        finalized: u64,
    },
    /// Evaluated count with pass/fail split.
    Scoring {
        /// Evaluated submissions.
        total_dinilai: u64,
        /// Passed.
        lolos: u64,
        /// Failed.
        tidak_lolos: u64,
    },
    /// Participant count with pass/fail split.
    Validation {
        /// Participants in this round.
        total_peserta: u64,
        /// Passed.
        lolos: u64,
        /// Failed.
        tidak_lolos: u64,
    },
    /// Participant count and award entry count.
    Award {
        /// Participants in this round.
        total_peserta: u64,
        /// Entered the award round.
        masuk_penghargaan: u64,
    },
    /// Participant count only.
    Participants {
        /// Participants in this round.
        total_peserta: u64,
    },
}

impl StageStatistics {
    /// Shapes raw wire counters for the given stage.
    ///
    /// Counters the shape does not name are ignored; counters it names
    /// but the backend omitted default to zero.
    #[must_use]
    pub fn from_wire(stage: Stage, wire: &WireStatistics) -> Self {
        use sipelita_domain::StatisticsShape;

        match stage.statistics_shape() {
            StatisticsShape::Submission => Self::Submission {
                total_submission: wire.total_submission.unwrap_or(0),
                finalized: wire.finalized.unwrap_or(0),
            },
            StatisticsShape::Scoring => Self::Scoring {
                total_dinilai: wire.total_dinilai.unwrap_or(0),
                lolos: wire.lolos.unwrap_or(0),
                tidak_lolos: wire.tidak_lolos.unwrap_or(0),
            },
            StatisticsShape::Validation => Self::Validation {
                total_peserta: wire.total_peserta.unwrap_or(0),
                lolos: wire.lolos.unwrap_or(0),
                tidak_lolos: wire.tidak_lolos.unwrap_or(0),
            },
            StatisticsShape::Award => Self::Award {
                total_peserta: wire.total_peserta.unwrap_or(0),
                masuk_penghargaan: wire.masuk_penghargaan.unwrap_or(0),
            },
            StatisticsShape::Participants => Self::Participants {
                total_peserta: wire.total_peserta.unwrap_or(0),
            },
        }
    }
}
