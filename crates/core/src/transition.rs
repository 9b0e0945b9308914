// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transition planning for stage reopening.
//!
//! Planning is pure: it validates preconditions against the evaluated
//! timeline and yields a request value, never touching the network. The
//! backend re-validates and remains the authority; these checks are a
//! fast-fail so no request is issued for a stage that cannot be reopened.

use sipelita_domain::{AssessmentYear, DomainError, Stage, validate_unfinalize};

use crate::error::CoreError;
use crate::timeline::EvaluatedTimeline;

/// A planned reopen request.
///
/// Intent as data: holds everything the HTTP layer needs to issue the
/// mutation, and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinalizeRequest {
    /// The stage being reopened.
    pub stage: Stage,
    /// The backend route segment for this stage.
    pub segment: &'static str,
    /// The assessment year the reopen is scoped to.
    pub year: AssessmentYear,
}

impl UnfinalizeRequest {
    /// Returns the backend path for this request.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/api/admin/unfinalize/{}/{}", self.segment, self.year)
    }
}

/// Plans the reopening of a stage.
///
/// # Arguments
///
/// * `stage` - The stage to reopen
/// * `timeline` - The current evaluated timeline
///
/// # Returns
///
/// * `Ok(UnfinalizeRequest)` ready for the HTTP layer
/// * `Err(CoreError)` if preconditions fail; no request value exists then
///
/// # Errors
///
/// Returns an error if:
/// - The stage is not reversible (the submission stage never is)
/// - The stage's derived status is not completed
/// - The stage does not appear in the timeline
pub fn plan_unfinalize(
    stage: Stage,
    timeline: &EvaluatedTimeline,
) -> Result<UnfinalizeRequest, CoreError> {
    let evaluated = timeline
        .stage(stage)
        .ok_or_else(|| CoreError::MalformedSnapshot {
            reason: format!("stage '{stage}' is missing from the timeline"),
        })?;

    validate_unfinalize(stage, evaluated.status)?;

    // reversible() and endpoint_segment() agree by registry invariant;
    // the validation above already rejected segment-less stages.
    let segment = stage
        .endpoint_segment()
        .ok_or(DomainError::StageNotReversible { stage })?;

    Ok(UnfinalizeRequest {
        stage,
        segment,
        year: timeline.year,
    })
}
