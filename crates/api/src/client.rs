// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The dashboard client.
//!
//! Owns the last evaluated timeline as transient view state. Mutations
//! follow the refetch-after-mutate pattern: the result of a reopen is
//! surfaced only once the subsequent whole-snapshot fetch resolves, so
//! the held state is never a hybrid of pre- and post-mutation data.
//! Mutations are never retried automatically.

use chrono::{DateTime, Utc};
use sipelita::{EvaluatedTimeline, evaluate_snapshot, plan_unfinalize};
use sipelita_domain::Stage;
use std::str::FromStr;
use tokio::sync::RwLock;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::gateway::DashboardGateway;
use crate::sequence::RequestSequence;

/// Whether a fetched snapshot was applied to the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The snapshot was evaluated and is now the current timeline.
    Applied,
    /// A newer fetch superseded this one; its response was discarded.
    Discarded,
}

/// Client for the assessment dashboard.
pub struct DashboardClient<G> {
    gateway: G,
    sequence: RequestSequence,
    timeline: RwLock<Option<EvaluatedTimeline>>,
}

impl<G: DashboardGateway> DashboardClient<G> {
    /// Creates a client over the given gateway with no snapshot loaded.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            sequence: RequestSequence::new(),
            timeline: RwLock::new(None),
        }
    }

    /// Returns a copy of the current evaluated timeline, if one is loaded.
    pub async fn timeline(&self) -> Option<EvaluatedTimeline> {
        self.timeline.read().await.clone()
    }

    /// Returns the underlying gateway.
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetches and evaluates a fresh snapshot.
    ///
    /// Overlapping refreshes resolve last-issued-wins: if a newer refresh
    /// began while this one was in flight, this response is discarded and
    /// the view state is left for the newer one.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the snapshot cannot be
    /// resolved against the stage registry. The held timeline is
    /// unchanged on error.
    pub async fn refresh(&self, now: DateTime<Utc>) -> Result<RefreshOutcome, ApiError> {
        let token = self.sequence.begin();
        let snapshot = self.gateway.fetch_snapshot().await?;

        if !self.sequence.is_current(token) {
            tracing::info!("discarding superseded snapshot response");
            return Ok(RefreshOutcome::Discarded);
        }

        let evaluated = evaluate_snapshot(&snapshot, now).map_err(translate_core_error)?;

        let mut held = self.timeline.write().await;
        // Re-check after reacquiring: a newer refresh may have finished
        // while this one was evaluating.
        if !self.sequence.is_current(token) {
            tracing::info!("discarding superseded snapshot response");
            return Ok(RefreshOutcome::Discarded);
        }
        *held = Some(evaluated);
        Ok(RefreshOutcome::Applied)
    }

    /// Reopens a completed stage, then refreshes the whole snapshot.
    ///
    /// Preconditions are checked locally first as a fast-fail; a stage
    /// that is not reversible or not completed is rejected without any
    /// network call. The backend re-validates and its rejection is
    /// authoritative.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshot has been loaded yet
    /// - The local preconditions fail (no request is issued)
    /// - The backend rejects the mutation (no retry is attempted)
    /// - The follow-up snapshot fetch fails
    ///
    /// On any error the held timeline still reflects the last applied
    /// snapshot; it is never partially updated.
    pub async fn unfinalize(&self, stage: Stage, now: DateTime<Utc>) -> Result<(), ApiError> {
        let request = {
            let held = self.timeline.read().await;
            let timeline = held.as_ref().ok_or(ApiError::NoSnapshot)?;
            plan_unfinalize(stage, timeline).map_err(translate_core_error)?
        };

        self.gateway.unfinalize(&request).await?;

        // Reopening cascades server-side (the active pointer moves back),
        // so the result cannot be patched in locally; refetch whole.
        self.refresh(now).await?;
        Ok(())
    }

    /// Reopens a stage given its wire key.
    ///
    /// A key with no registry entry is rejected locally with the same
    /// user-facing message as a non-reversible stage; no network call is
    /// made.
    ///
    /// # Errors
    ///
    /// As [`Self::unfinalize`], plus a validation error for unknown keys.
    pub async fn unfinalize_key(&self, key: &str, now: DateTime<Utc>) -> Result<(), ApiError> {
        let stage = Stage::from_str(key).map_err(translate_domain_error)?;
        self.unfinalize(stage, now).await
    }
}
