// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the HTTP boundary layer.
//!
//! Local validation failures never reach the network. Backend rejections
//! are authoritative and surfaced with the backend's own message when one
//! is available. Domain and core errors are translated explicitly, never
//! leaked raw.

use sipelita::CoreError;
use sipelita_domain::DomainError;

/// Errors surfaced by the dashboard client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A local precondition failed; no network call was made.
    #[error("{message}")]
    Validation {
        /// User-facing message.
        message: String,
    },
    /// The network call itself failed (timeout, connectivity).
    #[error("Permintaan gagal: {message}")]
    Transport {
        /// Transport-level description.
        message: String,
    },
    /// The backend rejected the request.
    #[error("{message}")]
    BackendRejected {
        /// HTTP status code.
        status: u16,
        /// The backend's message, or a generic fallback.
        message: String,
    },
    /// The fetched snapshot could not be resolved against the registry.
    #[error("Data timeline tidak valid: {reason}")]
    MalformedSnapshot {
        /// Description of what could not be resolved.
        reason: String,
    },
    /// An operation needs a snapshot and none has been fetched yet.
    #[error("Data dashboard belum dimuat")]
    NoSnapshot,
}

/// Fallback message for backend rejections without a usable body.
pub(crate) const GENERIC_FAILURE_MESSAGE: &str = "Terjadi kesalahan sistem";

/// Message shown when a stage has no reopen route.
pub(crate) const NOT_REOPENABLE_MESSAGE: &str = "Tahap ini tidak dapat dibuka kembali";

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly. Reopen-precondition failures map to the user-facing message
/// the dashboard shows for them.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::StageNotReversible { .. } | DomainError::UnknownStage { .. } => {
            ApiError::Validation {
                message: String::from(NOT_REOPENABLE_MESSAGE),
            }
        }
        DomainError::StageNotCompleted { stage, status } => ApiError::Validation {
            message: format!("Tahap '{}' belum selesai (status: {status})", stage.label()),
        },
        DomainError::DeadlineMissing => ApiError::Validation {
            message: String::from("Tanggal deadline wajib diisi"),
        },
        DomainError::DeadlineInPast { value } => ApiError::Validation {
            message: format!("Deadline '{value}' sudah terlewat"),
        },
        DomainError::DeadlineParse { value, error } => ApiError::Validation {
            message: format!("Format tanggal '{value}' tidak valid: {error}"),
        },
        DomainError::InvalidYear(msg) | DomainError::InvalidStageStatus { status: msg } => {
            ApiError::Validation { message: msg }
        }
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::MalformedSnapshot { reason } => ApiError::MalformedSnapshot { reason },
    }
}
