// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The backend gateway.
//!
//! [`DashboardGateway`] is the seam between the client logic and the
//! transport. The production implementation speaks HTTP/JSON with
//! `reqwest`; tests substitute a recording mock.

use serde::{Deserialize, Serialize};
use sipelita::{DashboardSnapshot, DeadlineSnapshot, UnfinalizeRequest};
use std::time::Duration;

use crate::error::{ApiError, GENERIC_FAILURE_MESSAGE};

/// Request body for configuring a submission deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDeadlineRequest {
    /// The assessment year the deadline applies to.
    pub year: u16,
    /// The deadline as a local `YYYY-MM-DDTHH:MM:SS` timestamp.
    pub deadline_at: String,
}

/// Error body shape used by the backend on rejection.
#[derive(Debug, Clone, Deserialize)]
struct BackendErrorBody {
    message: Option<String>,
}

/// Transport seam for all backend calls.
///
/// Every method is a single request; retry policy and snapshot refresh
/// orchestration live in the client, not here.
#[allow(async_fn_in_trait)]
pub trait DashboardGateway {
    /// Fetches the whole dashboard snapshot.
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, ApiError>;

    /// Issues the reopen mutation for a planned request.
    async fn unfinalize(&self, request: &UnfinalizeRequest) -> Result<(), ApiError>;

    /// Fetches the configured submission deadline for a year.
    async fn fetch_deadline(&self, year: u16) -> Result<DeadlineSnapshot, ApiError>;

    /// Configures the submission deadline.
    async fn set_deadline(&self, request: &SetDeadlineRequest) -> Result<(), ApiError>;
}

/// HTTP implementation of [`DashboardGateway`].
pub struct HttpGateway {
    base_url: String,
    auth_token: Option<String>,
    client: reqwest::Client,
}

impl HttpGateway {
    /// Request timeout, matching the dashboard's HTTP configuration.
    const TIMEOUT: Duration = Duration::from_secs(60);

    /// Creates a gateway against the given backend base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>, auth_token: Option<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport {
                message: e.to_string(),
            })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token,
            client,
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self
            .client
            .request(method, url)
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(token) = &self.auth_token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder
    }

    async fn send(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "backend request failed");
            ApiError::Transport {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Surface the backend's own message when one is present; the
        // backend's rejection is authoritative over local assumptions.
        let message = response
            .json::<BackendErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| String::from(GENERIC_FAILURE_MESSAGE));

        tracing::warn!(status = status.as_u16(), message = %message, "backend rejected request");
        Err(ApiError::BackendRejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::send(self.request(reqwest::Method::GET, path)).await?;
        response.json::<T>().await.map_err(|e| ApiError::Transport {
            message: e.to_string(),
        })
    }
}

impl DashboardGateway for HttpGateway {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, ApiError> {
        tracing::info!("fetching dashboard snapshot");
        self.get_json("/api/admin/dashboard").await
    }

    async fn unfinalize(&self, request: &UnfinalizeRequest) -> Result<(), ApiError> {
        tracing::info!(stage = %request.stage, year = %request.year, "reopening stage");
        Self::send(self.request(reqwest::Method::PATCH, &request.path())).await?;
        Ok(())
    }

    async fn fetch_deadline(&self, year: u16) -> Result<DeadlineSnapshot, ApiError> {
        self.get_json(&format!("/api/admin/deadline/date/{year}")).await
    }

    async fn set_deadline(&self, request: &SetDeadlineRequest) -> Result<(), ApiError> {
        tracing::info!(year = request.year, "configuring submission deadline");
        Self::send(
            self.request(reqwest::Method::POST, "/api/admin/deadline/set")
                .json(request),
        )
        .await?;
        Ok(())
    }
}
