// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::stage::Stage;
use crate::status::StageStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stage key is not in the stage registry.
    UnknownStage {
        /// The unrecognized stage key.
        stage: String,
    },
    /// A stage status string is not a valid status.
    InvalidStageStatus {
        /// The invalid status value.
        status: String,
    },
    /// The stage has no unfinalize semantics.
    StageNotReversible {
        /// The stage that was asked to reopen.
        stage: Stage,
    },
    /// The stage is not in a state that allows reopening.
    StageNotCompleted {
        /// The stage that was asked to reopen.
        stage: Stage,
        /// Its current derived status.
        status: StageStatus,
    },
    /// Invalid assessment year value.
    InvalidYear(String),
    /// Failed to parse a deadline timestamp.
    DeadlineParse {
        /// The invalid timestamp string.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// A deadline being configured lies in the past.
    DeadlineInPast {
        /// The rejected deadline timestamp.
        value: String,
    },
    /// A required deadline field is missing.
    DeadlineMissing,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStage { stage } => {
                write!(f, "Unknown assessment stage '{stage}'")
            }
            Self::InvalidStageStatus { status } => {
                write!(f, "Invalid stage status '{status}'")
            }
            Self::StageNotReversible { stage } => {
                write!(f, "Stage '{stage}' cannot be reopened")
            }
            Self::StageNotCompleted { stage, status } => {
                write!(f, "Stage '{stage}' cannot be reopened while it is {status}")
            }
            Self::InvalidYear(msg) => write!(f, "Invalid assessment year: {msg}"),
            Self::DeadlineParse { value, error } => {
                write!(f, "Failed to parse deadline '{value}': {error}")
            }
            Self::DeadlineInPast { value } => {
                write!(f, "Deadline '{value}' is already in the past")
            }
            Self::DeadlineMissing => {
                write!(f, "A deadline date is required")
            }
        }
    }
}

impl std::error::Error for DomainError {}
