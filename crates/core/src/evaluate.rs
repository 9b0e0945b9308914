// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timeline evaluation.
//!
//! Status is **derived, not stored**: the only input to a stage's status
//! is its canonical order relative to the backend-asserted active stage.
//! Counters never influence status. Deadline passage never influences
//! status. Progress is forwarded verbatim.

use chrono::{DateTime, Utc};
use sipelita_domain::{AssessmentYear, Deadline, Stage, StageStatus};
use std::str::FromStr;

use crate::error::CoreError;
use crate::snapshot::{DashboardSnapshot, TimelineEntry};
use crate::summary::summarize;
use crate::timeline::{EvaluatedDeadline, EvaluatedStage, EvaluatedTimeline, StageStatistics};

/// Evaluates a fetched snapshot at the given wall-clock time.
///
/// # Arguments
///
/// * `snapshot` - The snapshot as fetched, unmodified
/// * `now` - The current wall-clock time
///
/// # Returns
///
/// * `Ok(EvaluatedTimeline)` with derived statuses and typed statistics
/// * `Err(CoreError)` if the snapshot cannot be resolved against the
///   stage registry
///
/// # Errors
///
/// Returns an error if:
/// - `tahap_aktif` names a stage this client does not know
/// - A timeline entry names a stage this client does not know
/// - The snapshot year is out of range
pub fn evaluate_snapshot(
    snapshot: &DashboardSnapshot,
    now: DateTime<Utc>,
) -> Result<EvaluatedTimeline, CoreError> {
    let doc = &snapshot.timeline_penilaian;

    let year = AssessmentYear::new(snapshot.year)?;

    // The active pointer is the single source of stage activeness. An
    // unresolvable pointer makes the whole snapshot unusable.
    let active_stage =
        Stage::from_str(&doc.tahap_aktif).map_err(|_| CoreError::MalformedSnapshot {
            reason: format!("active stage '{}' is not in the stage registry", doc.tahap_aktif),
        })?;

    let mut stages: Vec<EvaluatedStage> = Vec::with_capacity(doc.timeline.len());
    for entry in &doc.timeline {
        stages.push(evaluate_entry(entry, active_stage, now)?);
    }
    stages.sort_by_key(|s| s.stage.order());

    Ok(EvaluatedTimeline {
        year,
        active_stage,
        active_label: doc.tahap_label.clone(),
        description: doc.keterangan.clone(),
        announcement_open: doc.pengumuman_terbuka,
        progress_percentage: doc.progress_percentage,
        stages,
        summary: summarize(&doc.summary),
    })
}

/// Evaluates a single timeline entry against the active stage.
fn evaluate_entry(
    entry: &TimelineEntry,
    active_stage: Stage,
    now: DateTime<Utc>,
) -> Result<EvaluatedStage, CoreError> {
    let stage = Stage::from_str(&entry.tahap).map_err(|_| CoreError::MalformedSnapshot {
        reason: format!("timeline stage '{}' is not in the stage registry", entry.tahap),
    })?;

    if entry.order != stage.order() {
        tracing::warn!(
            stage = %stage,
            wire_order = entry.order,
            registry_order = stage.order(),
            "snapshot order disagrees with the stage registry; using the registry"
        );
    }

    let status = derive_status(stage, active_stage);

    // The backend also reports a status string. The derived status is
    // authoritative; a disagreement is logged and ignored.
    match StageStatus::from_str(&entry.status) {
        Ok(wire_status) if wire_status != status => {
            tracing::warn!(
                stage = %stage,
                wire_status = %wire_status,
                derived_status = %status,
                "snapshot status disagrees with the derived status"
            );
        }
        Ok(_) => {}
        Err(_) => {
            tracing::warn!(
                stage = %stage,
                wire_status = %entry.status,
                "snapshot carries an unrecognized status string"
            );
        }
    }

    let deadline = match &entry.deadline {
        Some(wire) => {
            let deadline = Deadline::parse(&wire.tanggal)?;
            let is_passed = deadline.is_passed(now);
            if is_passed != wire.is_passed {
                tracing::warn!(
                    stage = %stage,
                    wire_is_passed = wire.is_passed,
                    derived_is_passed = is_passed,
                    "snapshot deadline flag disagrees with the local clock"
                );
            }
            Some(EvaluatedDeadline {
                deadline,
                formatted: wire.tanggal_formatted.clone(),
                is_passed,
            })
        }
        None => None,
    };

    let statistics = entry
        .statistik
        .as_ref()
        .map(|wire| StageStatistics::from_wire(stage, wire));

    Ok(EvaluatedStage {
        stage,
        label: entry.label.clone(),
        status,
        deadline,
        statistics,
    })
}

/// Derives one stage's status from its order relative to the active stage.
const fn derive_status(stage: Stage, active_stage: Stage) -> StageStatus {
    if stage.order() < active_stage.order() {
        StageStatus::Completed
    } else if stage.order() == active_stage.order() {
        StageStatus::Active
    } else {
        StageStatus::Pending
    }
}
