// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::deadline::Deadline;
use crate::error::DomainError;
use crate::stage::Stage;
use crate::status::StageStatus;
use chrono::{DateTime, Utc};

/// Validates the preconditions for reopening a stage.
///
/// These checks are a client-side fast-fail; the backend re-validates and
/// remains the authority. They are pure and make no network calls.
///
/// # Arguments
///
/// * `stage` - The stage being reopened
/// * `status` - The stage's current derived status
///
/// # Returns
///
/// * `Ok(())` if the stage may be reopened
/// * `Err(DomainError)` if the stage is not reversible or not completed
///
/// # Errors
///
/// Returns an error if:
/// - The stage has no unfinalize semantics (the submission stage)
/// - The stage is pending or currently active
pub fn validate_unfinalize(stage: Stage, status: StageStatus) -> Result<(), DomainError> {
    // Rule: the submission stage is never reversible
    if !stage.reversible() {
        return Err(DomainError::StageNotReversible { stage });
    }

    // Rule: only a completed stage may be reopened
    if !status.is_reopenable() {
        return Err(DomainError::StageNotCompleted { stage, status });
    }

    Ok(())
}

/// Validates a deadline being configured by an administrator.
///
/// # Arguments
///
/// * `value` - The raw deadline input, if any
/// * `now` - The current wall-clock time
///
/// # Returns
///
/// * `Ok(Deadline)` with the parsed deadline
/// * `Err(DomainError)` if the input is missing, unparseable, or in the past
///
/// # Errors
///
/// Returns an error if:
/// - No deadline value was supplied
/// - The value does not parse as a timestamp
/// - The parsed deadline is not in the future
pub fn validate_deadline_input(
    value: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Deadline, DomainError> {
    let raw = value.ok_or(DomainError::DeadlineMissing)?;
    if raw.trim().is_empty() {
        return Err(DomainError::DeadlineMissing);
    }

    let deadline = Deadline::parse(raw)?;
    if deadline.is_passed(now) {
        return Err(DomainError::DeadlineInPast {
            value: raw.to_string(),
        });
    }

    Ok(deadline)
}
