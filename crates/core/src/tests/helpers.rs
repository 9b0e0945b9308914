// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, TimeZone, Utc};
use sipelita_domain::{ALL_STAGES, Stage};

use crate::snapshot::{
    DashboardSnapshot, DinasTotals, RoleTotals, StorageUsage, SubmissionStatusTotals,
    SubmissionTotals, TimelineDocument, TimelineEntry, UserTotals, WireDeadline, WireStatistics,
    WireSummary,
};

pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap()
}

pub fn create_test_summary() -> WireSummary {
    WireSummary {
        total_dinas_terdaftar: 34,
        total_submission: 30,
        lolos_slhd: 22,
        lolos_validasi_1: 18,
        lolos_validasi_2: 12,
        masuk_penghargaan: 8,
    }
}

/// Builds a timeline entry whose status is consistent with `active`.
pub fn create_test_entry(stage: Stage, active: Stage) -> TimelineEntry {
    let status = if stage.order() < active.order() {
        "completed"
    } else if stage == active {
        "active"
    } else {
        "pending"
    };

    TimelineEntry {
        tahap: stage.as_str().to_string(),
        label: stage.label().to_string(),
        order: stage.order(),
        status: status.to_string(),
        deadline: (stage == Stage::Submission).then(|| WireDeadline {
            tanggal: String::from("2025-05-31T23:59:00"),
            tanggal_formatted: String::from("31 Mei 2025 23:59"),
            is_passed: true,
        }),
        statistik: Some(WireStatistics {
            total_submission: Some(30),
            finalized: Some(28),
            total_dinilai: Some(28),
            lolos: Some(22),
            tidak_lolos: Some(6),
            total_peserta: Some(22),
            masuk_penghargaan: Some(8),
        }),
    }
}

/// Builds a full consistent snapshot with the given active stage.
pub fn create_test_snapshot(active: Stage) -> DashboardSnapshot {
    DashboardSnapshot {
        year: 2025,
        total_users_aktif: 40,
        total_users_pending: 3,
        users: UserTotals {
            total: 43,
            pending_approval: 3,
            active: 40,
            by_role: RoleTotals {
                admin: 2,
                pusdatin: 4,
                dinas: 37,
            },
            dinas_by_type: DinasTotals {
                provinsi: 10,
                kabupaten_kota: 27,
            },
        },
        submissions: SubmissionTotals {
            total: 30,
            by_status: SubmissionStatusTotals {
                draft: 2,
                finalized: 28,
                approved: 22,
            },
        },
        storage: StorageUsage {
            used_mb: 512.0,
            used_gb: 0.5,
        },
        timeline_penilaian: TimelineDocument {
            year: 2025,
            tahap_aktif: active.as_str().to_string(),
            tahap_label: active.label().to_string(),
            pengumuman_terbuka: false,
            keterangan: String::from("Tahap sedang berjalan"),
            tahap_mulai_at: Some(String::from("2025-06-01T00:00:00")),
            progress_percentage: 45,
            timeline: ALL_STAGES
                .iter()
                .map(|&stage| create_test_entry(stage, active))
                .collect(),
            summary: create_test_summary(),
        },
    }
}
