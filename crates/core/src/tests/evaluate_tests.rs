// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for snapshot evaluation.
//!
//! The ordering invariant: stages before the active stage are completed,
//! the active stage is active, everything after is pending. No other
//! combination is valid.

use chrono::{TimeZone, Utc};
use sipelita_domain::{ALL_STAGES, Stage, StageStatus};

use crate::{CoreError, StageStatistics, evaluate_snapshot};

use super::helpers::{create_test_snapshot, test_now};

#[test]
fn test_ordering_invariant_for_every_active_stage() {
    for active in ALL_STAGES {
        let snapshot = create_test_snapshot(active);
        let timeline = evaluate_snapshot(&snapshot, test_now()).expect("snapshot must evaluate");

        for evaluated in &timeline.stages {
            let expected = if evaluated.stage.order() < active.order() {
                StageStatus::Completed
            } else if evaluated.stage == active {
                StageStatus::Active
            } else {
                StageStatus::Pending
            };
            assert_eq!(
                evaluated.status, expected,
                "stage {} with active {}",
                evaluated.stage, active
            );
        }
    }
}

#[test]
fn test_concrete_scenario_slhd_active() {
    // submission(1), penilaian_slhd(2, active), validasi_1(3)
    let snapshot = create_test_snapshot(Stage::PenilaianSlhd);
    let timeline = evaluate_snapshot(&snapshot, test_now()).expect("snapshot must evaluate");

    let status_of = |stage: Stage| timeline.stage(stage).map(|s| s.status);
    assert_eq!(status_of(Stage::Submission), Some(StageStatus::Completed));
    assert_eq!(status_of(Stage::PenilaianSlhd), Some(StageStatus::Active));
    assert_eq!(status_of(Stage::Validasi1), Some(StageStatus::Pending));
}

#[test]
fn test_unknown_active_stage_is_a_hard_error() {
    let mut snapshot = create_test_snapshot(Stage::Submission);
    snapshot.timeline_penilaian.tahap_aktif = String::from("penetapan_peringkat");

    let result = evaluate_snapshot(&snapshot, test_now());
    assert!(matches!(result, Err(CoreError::MalformedSnapshot { .. })));
}

#[test]
fn test_unknown_timeline_entry_is_a_hard_error() {
    let mut snapshot = create_test_snapshot(Stage::Submission);
    snapshot.timeline_penilaian.timeline[2].tahap = String::from("tahap_baru");

    let result = evaluate_snapshot(&snapshot, test_now());
    assert!(matches!(result, Err(CoreError::MalformedSnapshot { .. })));
}

#[test]
fn test_deadline_passage_never_changes_status() {
    // Submission is active and its deadline (2025-05-31) is behind now
    // (2025-06-15). The stage must stay active and only flag the deadline.
    let snapshot = create_test_snapshot(Stage::Submission);
    let timeline = evaluate_snapshot(&snapshot, test_now()).expect("snapshot must evaluate");

    let submission = timeline
        .stage(Stage::Submission)
        .expect("submission present");
    assert_eq!(submission.status, StageStatus::Active);
    let deadline = submission.deadline.as_ref().expect("deadline present");
    assert!(deadline.is_passed);
}

#[test]
fn test_deadline_is_passed_follows_caller_clock() {
    let snapshot = create_test_snapshot(Stage::Submission);
    let before = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();

    let timeline = evaluate_snapshot(&snapshot, before).expect("snapshot must evaluate");
    let submission = timeline
        .stage(Stage::Submission)
        .expect("submission present");
    let deadline = submission.deadline.as_ref().expect("deadline present");
    // The wire flag says passed; the caller's clock says otherwise and wins.
    assert!(!deadline.is_passed);
}

#[test]
fn test_progress_percentage_is_forwarded_verbatim() {
    let mut snapshot = create_test_snapshot(Stage::Validasi1);
    snapshot.timeline_penilaian.progress_percentage = 67;

    let timeline = evaluate_snapshot(&snapshot, test_now()).expect("snapshot must evaluate");
    // 67 matches no recomputation from stage counts (3 of 6 stages done
    // would be 50); the evaluator must forward, never recompute.
    assert_eq!(timeline.progress_percentage, 67);
}

#[test]
fn test_wire_status_disagreement_is_overridden_by_derived() {
    let mut snapshot = create_test_snapshot(Stage::Validasi1);
    // Corrupt the wire status of a completed stage.
    snapshot.timeline_penilaian.timeline[0].status = String::from("pending");

    let timeline = evaluate_snapshot(&snapshot, test_now()).expect("snapshot must evaluate");
    let submission = timeline
        .stage(Stage::Submission)
        .expect("submission present");
    assert_eq!(submission.status, StageStatus::Completed);
}

#[test]
fn test_stages_are_sorted_by_canonical_order() {
    let mut snapshot = create_test_snapshot(Stage::Wawancara);
    snapshot.timeline_penilaian.timeline.reverse();

    let timeline = evaluate_snapshot(&snapshot, test_now()).expect("snapshot must evaluate");
    let orders: Vec<u8> = timeline.stages.iter().map(|s| s.stage.order()).collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_statistics_are_shaped_per_stage() {
    let snapshot = create_test_snapshot(Stage::Wawancara);
    let timeline = evaluate_snapshot(&snapshot, test_now()).expect("snapshot must evaluate");

    let submission = timeline
        .stage(Stage::Submission)
        .expect("submission present");
    assert_eq!(
        submission.statistics,
        Some(StageStatistics::Submission {
            total_submission: 30,
            finalized: 28,
        })
    );

    let award = timeline
        .stage(Stage::PenilaianPenghargaan)
        .expect("award present");
    assert_eq!(
        award.statistics,
        Some(StageStatistics::Award {
            total_peserta: 22,
            masuk_penghargaan: 8,
        })
    );
}

#[test]
fn test_summary_is_reshaped_into_display_names() {
    let snapshot = create_test_snapshot(Stage::Validasi2);
    let timeline = evaluate_snapshot(&snapshot, test_now()).expect("snapshot must evaluate");

    assert_eq!(timeline.summary.total_registered_agencies, 34);
    assert_eq!(timeline.summary.passed_validation_2, 12);
    assert_eq!(timeline.summary.entered_award, 8);
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let snapshot = create_test_snapshot(Stage::Validasi1);
    let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
    let parsed: crate::DashboardSnapshot = serde_json::from_str(&json).expect("snapshot parses");
    let timeline = evaluate_snapshot(&parsed, test_now()).expect("snapshot must evaluate");
    assert_eq!(timeline.active_stage, Stage::Validasi1);
}
