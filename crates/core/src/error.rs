// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sipelita_domain::DomainError;

/// Errors that can occur while evaluating a snapshot or planning a
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The snapshot is structurally unusable.
    ///
    /// Raised when the backend payload cannot be resolved against the
    /// stage registry, e.g. an active-stage pointer naming a stage this
    /// client does not know. Surfaced as a hard error, never silently
    /// mapped to an arbitrary stage.
    MalformedSnapshot {
        /// Description of what could not be resolved.
        reason: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::MalformedSnapshot { reason } => {
                write!(f, "Malformed snapshot: {reason}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
