// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission-deadline configuration.
//!
//! Reads go through a time-boxed cache; writes validate locally, post to
//! the backend, and invalidate the cached read so the next fetch sees the
//! new value.

use chrono::{DateTime, Utc};
use sipelita::DeadlineSnapshot;
use sipelita_domain::{AssessmentYear, Deadline, validate_deadline_input};

use crate::cache::ResponseCache;
use crate::error::{ApiError, translate_domain_error};
use crate::gateway::{DashboardGateway, SetDeadlineRequest};

/// Client for reading and configuring the submission deadline.
pub struct DeadlineClient<G> {
    gateway: G,
    cache: ResponseCache<DeadlineSnapshot>,
}

fn cache_key(year: u16) -> String {
    format!("deadline-date-{year}")
}

impl<G: DashboardGateway> DeadlineClient<G> {
    /// Creates a client over the given gateway.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            cache: ResponseCache::new(),
        }
    }

    /// Returns the underlying gateway.
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Returns the configured deadline for a year.
    ///
    /// Served from the cache while fresh; reads through to the backend
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend query fails.
    pub async fn current(&mut self, year: u16) -> Result<DeadlineSnapshot, ApiError> {
        let key = cache_key(year);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit.clone());
        }

        let snapshot = self.gateway.fetch_deadline(year).await?;
        self.cache.insert(key, snapshot.clone());
        Ok(snapshot)
    }

    /// Configures the submission deadline for a year.
    ///
    /// The input is validated locally before any network call: it must be
    /// present, parse as a timestamp, and lie in the future at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The year is out of range
    /// - The input is missing, unparseable, or in the past (no request
    ///   is issued)
    /// - The backend rejects the request
    pub async fn set(
        &mut self,
        year: u16,
        input: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Deadline, ApiError> {
        let year = AssessmentYear::new(year).map_err(translate_domain_error)?;
        let deadline = validate_deadline_input(input, now).map_err(translate_domain_error)?;

        let request = SetDeadlineRequest {
            year: year.value(),
            deadline_at: deadline.at().format("%Y-%m-%dT%H:%M:%S").to_string(),
        };
        self.gateway.set_deadline(&request).await?;

        self.cache.invalidate(&cache_key(year.value()));
        Ok(deadline)
    }
}
