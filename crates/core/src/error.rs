//! Error taxonomy for the rules core.
//!
//! Validation rejections are typed variants, never silent coercions.
//! Plain absence on a lookup is `Option`, not an error; a mutation that
//! references a record the store cannot produce is a rejection, because the
//! operation was asked to act on something specific.

use carebill_types::{DiagnosisId, EventId, EventStatus, PatientId};

/// Errors returned by the rules core.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// A diagnosis operation named a patient the diagnosis does not belong
    /// to. Raised before any write happens.
    #[error("diagnosis {diagnosis_id} does not belong to patient {patient_id}")]
    DiagnosisOwnership {
        diagnosis_id: DiagnosisId,
        patient_id: PatientId,
    },

    /// A mutation referenced a patient the store does not have.
    #[error("patient {0} not found")]
    UnknownPatient(PatientId),

    /// A mutation referenced an event the store does not have.
    #[error("event {0} not found")]
    UnknownEvent(EventId),

    /// A mutation referenced a diagnosis the store does not have.
    #[error("diagnosis {0} not found")]
    UnknownDiagnosis(DiagnosisId),

    /// The transition table does not allow this status change.
    #[error("status transition {from} -> {to} is not allowed")]
    IllegalTransition { from: EventStatus, to: EventStatus },

    /// The storage facade reported a failed write (for example a
    /// constraint violation). Nothing was persisted.
    #[error("storage rejected the write")]
    WriteRejected,
}

/// Type alias for Results that can fail with a [`RulesError`].
pub type RulesResult<T> = Result<T, RulesError>;
