//! Record-access facade.
//!
//! Storage is an external collaborator. The core sees it only through this
//! trait: synchronous fetch-by-key reads and whole-record writes. Writes
//! return a boolean success indicator rather than an error, because
//! storage-layer failures (for example a UPI or batch constraint violation)
//! are caught at the facade boundary and reported, not propagated as
//! exceptions. Callers must check the indicator.
//!
//! The core never reads persisted state mid-computation except through
//! explicit fetches that become plain inputs, so concurrent callers working
//! on different entities cannot interfere. Serialising same-entity writers
//! is the facade's job.

use carebill_types::{DiagnosisId, Event, EventId, Patient, PatientDiagnosis, PatientId};

/// Synchronous key/value access to persisted records.
pub trait RecordStore {
    /// Fetches a patient by id, or `None` when absent.
    fn fetch_patient(&self, id: PatientId) -> Option<Patient>;

    /// Fetches an event by id, or `None` when absent.
    fn fetch_event(&self, id: EventId) -> Option<Event>;

    /// Fetches one diagnosis by id, or `None` when absent.
    fn fetch_diagnosis(&self, id: DiagnosisId) -> Option<PatientDiagnosis>;

    /// Fetches all diagnoses attached to a patient, active and resolved.
    /// Used for priority-conflict checks.
    fn fetch_patient_diagnoses(&self, patient_id: PatientId) -> Vec<PatientDiagnosis>;

    /// Persists a patient record. Returns false when storage rejected the
    /// write (constraint violation); nothing is persisted in that case.
    fn write_patient(&mut self, patient: &Patient) -> bool;

    /// Persists an event record. Same success contract as
    /// [`RecordStore::write_patient`].
    fn write_event(&mut self, event: &Event) -> bool;

    /// Persists a diagnosis record. Same success contract as
    /// [`RecordStore::write_patient`].
    fn write_diagnosis(&mut self, diagnosis: &PatientDiagnosis) -> bool;
}
