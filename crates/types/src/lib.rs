//! Domain value types for the care billing rules core.
//!
//! This crate holds the plain records and enumerations that the rules engine
//! operates on: patients, facilities, diagnosis catalog entries, patient
//! diagnoses and billable events. There is no behaviour here beyond pure
//! derivations (for example [`Patient::hospice_needs_diagnosis`]) and the
//! wire-string mappings used for storage.
//!
//! Enumerations serialise through an explicit bidirectional wire mapping
//! (`as_wire`/`from_wire`) so that an unrecognised stored string fails fast
//! with a clear [`TypesError::UnknownEnumValue`] instead of an ambiguous
//! runtime fault.
//!
//! Storage note: the record-access facade persists timestamps as
//! epoch-millisecond values and date-only fields as start-of-day
//! epoch-millisecond values in the local time zone. The helpers in [`time`]
//! implement that contract; domain code works in `chrono` types throughout.

pub mod diagnosis;
pub mod enums;
pub mod event;
pub mod facility;
pub mod patient;
pub mod time;

pub use diagnosis::{DiagnosisCatalogEntry, PatientDiagnosis, Priority};
pub use enums::{EventStatus, EventType, FollowUpRecurrence, VisitLocation, VisitType};
pub use event::Event;
pub use facility::Facility;
pub use patient::Patient;

/// Identifier assigned by the storage facade to a patient record.
pub type PatientId = i64;
/// Identifier assigned by the storage facade to a facility record.
pub type FacilityId = i64;
/// Identifier assigned by the storage facade to a patient diagnosis record.
pub type DiagnosisId = i64;
/// Identifier assigned by the storage facade to an event record.
pub type EventId = i64;
/// Identifier assigned by the storage facade to a monthly billing batch.
pub type BatchId = i64;

/// Errors returned by the domain value types.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    /// A stored enumeration string did not match any known wire value.
    #[error("unknown {enumeration} value '{value}'")]
    UnknownEnumValue {
        enumeration: &'static str,
        value: String,
    },

    /// A diagnosis priority outside the 1..=10 range.
    #[error("diagnosis priority must be between 1 and 10, got {0}")]
    PriorityOutOfRange(u8),
}

/// Type alias for Results that can fail with a [`TypesError`].
pub type TypesResult<T> = Result<T, TypesError>;
