// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Represents one assessment year.
///
/// The year partitions all timeline state; a new stage-instance set exists
/// implicitly for each year, keyed by this value. There is no explicit
/// rollover call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentYear(u16);

impl AssessmentYear {
    /// Creates a new `AssessmentYear` after range validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidYear` if the year is not a reasonable
    /// calendar year (2000-2200).
    pub fn new(year: u16) -> Result<Self, DomainError> {
        if !(2000..=2200).contains(&year) {
            return Err(DomainError::InvalidYear(format!(
                "Assessment year must be between 2000 and 2200, got {year}"
            )));
        }
        Ok(Self(year))
    }

    /// Returns the year value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for AssessmentYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
