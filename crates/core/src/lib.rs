// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod evaluate;
mod snapshot;
mod summary;
mod timeline;
mod transition;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use evaluate::evaluate_snapshot;
pub use snapshot::{
    DashboardSnapshot, DeadlineSnapshot, DinasTotals, RoleTotals, StorageUsage,
    SubmissionStatusTotals, SubmissionTotals, TimelineDocument, TimelineEntry, UserTotals,
    WireDeadline, WireStatistics, WireSummary,
};
pub use summary::{SummaryTotals, summarize};
pub use timeline::{EvaluatedDeadline, EvaluatedStage, EvaluatedTimeline, StageStatistics};
pub use transition::{UnfinalizeRequest, plan_unfinalize};
