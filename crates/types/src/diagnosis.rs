//! Diagnosis catalog entries and per-patient diagnoses.

use crate::{DiagnosisId, PatientId, TypesError};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A catalog entry for a diagnosis code (ICD-style), unique by code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCatalogEntry {
    /// ICD-style code, e.g. `I50.9`. Unique in the catalog.
    pub code: String,
    pub description: String,
    /// Optional shorthand shown on schedules, e.g. `CHF`.
    pub shorthand: Option<String>,
    /// Whether this code may appear on a claim.
    pub billable: bool,
    /// Marks codes surfaced first in pickers.
    pub common: bool,
}

/// Ordering rank of a patient diagnosis, constrained to 1..=10.
///
/// Rank 1 is the primary diagnosis. Uniqueness per patient is an invariant
/// owned by the diagnosis ordering component, not by this type and not by
/// the storage layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    /// The primary diagnosis rank.
    pub const PRIMARY: Priority = Priority(1);
    /// Lowest rank accepted.
    pub const MIN: u8 = 1;
    /// Highest rank accepted.
    pub const MAX: u8 = 10;

    /// Creates a priority, rejecting ranks outside 1..=10.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::PriorityOutOfRange`] when `rank` is 0 or
    /// greater than 10.
    pub fn new(rank: u8) -> Result<Self, TypesError> {
        if !(Self::MIN..=Self::MAX).contains(&rank) {
            return Err(TypesError::PriorityOutOfRange(rank));
        }
        Ok(Self(rank))
    }

    /// The numeric rank.
    pub fn rank(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rank = u8::deserialize(deserializer)?;
        Priority::new(rank).map_err(serde::de::Error::custom)
    }
}

/// A diagnosis attached to a patient.
///
/// The catalog code is stored as a plain string, not a foreign key; the
/// catalog may not even contain it (free-text historical codes exist).
/// Resolving a diagnosis sets the resolved date and clears `active`; the
/// hospice-code flag is orthogonal to the active/resolved state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDiagnosis {
    /// Storage identifier. Zero means not yet persisted.
    pub id: DiagnosisId,
    pub patient_id: PatientId,

    /// Catalog code as entered, e.g. `I50.9`.
    pub code: String,

    /// Ordering rank, 1 = primary.
    pub priority: Priority,

    /// Whether this code is a hospice-qualifying diagnosis.
    pub hospice_code: bool,

    pub diagnosed_date: Option<NaiveDate>,
    pub resolved_date: Option<NaiveDate>,

    /// Cleared when the diagnosis is resolved.
    pub active: bool,

    pub notes: String,
}
