// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, TimeZone, Utc};
use sipelita::{
    DashboardSnapshot, DeadlineSnapshot, DinasTotals, RoleTotals, StorageUsage,
    SubmissionStatusTotals, SubmissionTotals, TimelineDocument, TimelineEntry, UnfinalizeRequest,
    UserTotals, WireStatistics, WireSummary,
};
use sipelita_domain::{ALL_STAGES, Stage};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::ApiError;
use crate::gateway::{DashboardGateway, SetDeadlineRequest};

pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap()
}

/// Builds a consistent snapshot with the given active stage.
pub fn create_test_snapshot(active: Stage) -> DashboardSnapshot {
    let timeline: Vec<TimelineEntry> = ALL_STAGES
        .iter()
        .map(|&stage| {
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
                deadline: None,
                statistik: Some(WireStatistics {
                    total_peserta: Some(20),
                    ..WireStatistics::default()
                }),
            }
        })
        .collect();

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
            tahap_mulai_at: None,
            progress_percentage: 45,
            timeline,
            summary: WireSummary {
                total_dinas_terdaftar: 34,
                total_submission: 30,
                lolos_slhd: 22,
                lolos_validasi_1: 18,
                lolos_validasi_2: 12,
                masuk_penghargaan: 8,
            },
        },
    }
}

/// A recording gateway with programmable responses.
#[derive(Default)]
pub struct MockGateway {
    /// Snapshots handed out by `fetch_snapshot`, in order.
    pub snapshots: Mutex<VecDeque<DashboardSnapshot>>,
    /// Optional per-fetch delays, consumed in order.
    pub fetch_delays: Mutex<VecDeque<Duration>>,
    /// Error to return from the next `unfinalize` call.
    pub unfinalize_error: Mutex<Option<ApiError>>,
    /// Deadline handed out by `fetch_deadline`.
    pub deadline: Mutex<Option<DeadlineSnapshot>>,
    /// Every network call, in issue order.
    pub calls: Mutex<Vec<String>>,
}

impl MockGateway {
    pub fn with_snapshots(snapshots: impl IntoIterator<Item = DashboardSnapshot>) -> Self {
        Self {
            snapshots: Mutex::new(snapshots.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl DashboardGateway for MockGateway {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(String::from("GET /api/admin/dashboard"));

        let delay = self.fetch_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.snapshots
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ApiError::Transport {
                message: String::from("no snapshot programmed"),
            })
    }

    async fn unfinalize(&self, request: &UnfinalizeRequest) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("PATCH {}", request.path()));

        if let Some(err) = self.unfinalize_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(())
    }

    async fn fetch_deadline(&self, year: u16) -> Result<DeadlineSnapshot, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("GET /api/admin/deadline/date/{year}"));

        self.deadline
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::Transport {
                message: String::from("no deadline programmed"),
            })
    }

    async fn set_deadline(&self, request: &SetDeadlineRequest) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("POST /api/admin/deadline/set {}", request.deadline_at));
        Ok(())
    }
}
