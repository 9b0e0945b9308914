// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire-format snapshot documents.
//!
//! These structs mirror the backend dashboard payload field for field.
//! They are never constructed or mutated locally; a snapshot is fetched
//! whole and replaced whole after every mutation. All derived fields in
//! here (`tahap_aktif`, `progress_percentage`, summary totals) are
//! backend-computed and must be treated as opaque.

use serde::{Deserialize, Serialize};

/// The full dashboard snapshot returned by the dashboard query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// The assessment year this snapshot covers.
    pub year: u16,
    /// Count of active user accounts.
    pub total_users_aktif: u64,
    /// Count of accounts awaiting approval.
    pub total_users_pending: u64,
    /// User totals broken down by status and role.
    pub users: UserTotals,
    /// Submission totals broken down by status.
    pub submissions: SubmissionTotals,
    /// Server-side storage usage.
    pub storage: StorageUsage,
    /// The assessment timeline document.
    pub timeline_penilaian: TimelineDocument,
}

/// User account totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTotals {
    /// Total registered accounts.
    pub total: u64,
    /// Accounts awaiting approval.
    pub pending_approval: u64,
    /// Active accounts.
    pub active: u64,
    /// Accounts by role.
    pub by_role: RoleTotals,
    /// Regional agency accounts by administrative level.
    pub dinas_by_type: DinasTotals,
}

/// Account counts per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTotals {
    /// Administrator accounts.
    pub admin: u64,
    /// Data-center (pusdatin) accounts.
    pub pusdatin: u64,
    /// Regional agency (DLH) accounts.
    pub dinas: u64,
}

/// Regional agency counts per administrative level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DinasTotals {
    /// Province-level agencies.
    pub provinsi: u64,
    /// City/regency-level agencies.
    pub kabupaten_kota: u64,
}

/// Submission totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionTotals {
    /// Total submissions for the year.
    pub total: u64,
    /// Submissions by workflow status.
    pub by_status: SubmissionStatusTotals,
}

/// Submission counts per workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionStatusTotals {
    /// Draft submissions.
    pub draft: u64,
    /// Finalized submissions.
    pub finalized: u64,
    /// Approved submissions.
    pub approved: u64,
}

/// Server-side storage usage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageUsage {
    /// Used storage in megabytes.
    pub used_mb: f64,
    /// Used storage in gigabytes.
    pub used_gb: f64,
}

/// The per-year assessment timeline document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDocument {
    /// The assessment year.
    pub year: u16,
    /// The backend-asserted active stage key. Authoritative; status is
    /// derived only from this pointer, never from counters.
    pub tahap_aktif: String,
    /// Display label of the active stage.
    pub tahap_label: String,
    /// Whether result announcements are open.
    pub pengumuman_terbuka: bool,
    /// Free-form description of the active stage.
    pub keterangan: String,
    /// When the active stage started, if reported.
    #[serde(default)]
    pub tahap_mulai_at: Option<String>,
    /// Overall progress, 0-100. Backend-computed; an opaque passthrough.
    pub progress_percentage: u8,
    /// Per-stage timeline entries.
    pub timeline: Vec<TimelineEntry>,
    /// Year-level rollup totals.
    pub summary: WireSummary,
}

/// One stage entry within the timeline document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// The stage key.
    pub tahap: String,
    /// Display label.
    pub label: String,
    /// 1-based position in the pipeline.
    pub order: u8,
    /// Backend-reported status string.
    pub status: String,
    /// Stage deadline, if one is configured.
    #[serde(default)]
    pub deadline: Option<WireDeadline>,
    /// Stage statistics, if the stage reports any.
    #[serde(default)]
    pub statistik: Option<WireStatistics>,
}

/// A stage deadline as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDeadline {
    /// The deadline timestamp.
    pub tanggal: String,
    /// Pre-formatted display string.
    pub tanggal_formatted: String,
    /// Backend's own passed flag. The evaluator recomputes this from the
    /// caller's clock; the wire flag is used only for cross-checking.
    pub is_passed: bool,
}

/// Raw per-stage counters. Which fields are populated depends on the
/// stage's statistics shape; all counters are backend-computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireStatistics {
    /// Total submissions (submission stage).
    #[serde(default)]
    pub total_submission: Option<u64>,
    /// Finalized submissions (submission stage).
    #[serde(default)]
    pub finalized: Option<u64>,
    /// Evaluated count (SLHD scoring stage).
    #[serde(default)]
    pub total_dinilai: Option<u64>,
    /// Pass count (scoring and validation stages).
    #[serde(default)]
    pub lolos: Option<u64>,
    /// Fail count (scoring and validation stages).
    #[serde(default)]
    pub tidak_lolos: Option<u64>,
    /// Participant count (validation, award, interview stages).
    #[serde(default)]
    pub total_peserta: Option<u64>,
    /// Award entry count (award stage).
    #[serde(default)]
    pub masuk_penghargaan: Option<u64>,
}

/// Year-level rollup totals as named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSummary {
    /// Registered regional agencies.
    pub total_dinas_terdaftar: u64,
    /// Total submissions.
    pub total_submission: u64,
    /// Agencies that passed SLHD scoring.
    pub lolos_slhd: u64,
    /// Agencies that passed validation round 1.
    pub lolos_validasi_1: u64,
    /// Agencies that passed validation round 2.
    pub lolos_validasi_2: u64,
    /// Agencies that entered the award round.
    pub masuk_penghargaan: u64,
}

/// The current submission deadline for a year, as returned by the
/// deadline query endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineSnapshot {
    /// The configured deadline timestamp.
    pub deadline: String,
    /// Whether the backend considers the deadline passed.
    pub is_passed: bool,
}
