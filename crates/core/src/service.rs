//! Caller-facing operations.
//!
//! [`CareService`] is the surface the application layer talks to. It threads
//! the injected clock through every write path, performs the existence and
//! ownership checks before any mutation, and hands the validated records to
//! the [`RecordStore`] facade for persistence. The service holds no state of
//! its own beyond the clock; every call is a deterministic function of its
//! inputs plus the explicit fetches it performs.

use crate::billing;
use crate::clock::Clock;
use crate::diagnoses;
use crate::error::{RulesError, RulesResult};
use crate::facade::RecordStore;
use crate::status::TransitionTable;
use carebill_types::{
    DiagnosisId, Event, EventId, EventStatus, EventType, FollowUpRecurrence, Patient,
    PatientDiagnosis, PatientId, Priority, VisitLocation, VisitType,
};
use chrono::{NaiveDate, NaiveDateTime};

/// Rules-core entry point for the application layer.
pub struct CareService<C: Clock> {
    clock: C,
    transitions: TransitionTable,
}

impl<C: Clock> CareService<C> {
    /// Creates a service with the standard transition table.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            transitions: TransitionTable::standard(),
        }
    }

    /// Creates a service with a caller-supplied transition table.
    pub fn with_transitions(clock: C, transitions: TransitionTable) -> Self {
        Self { clock, transitions }
    }

    /// The transition table this service enforces.
    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Builds a fully populated event: status Pending, procedure code
    /// derived from type/visit type/minutes, timestamps from the clock.
    ///
    /// Pure; nothing is persisted. The id is zero until the storage facade
    /// assigns one.
    #[allow(clippy::too_many_arguments)]
    pub fn derive_event(
        &self,
        patient_id: PatientId,
        event_type: EventType,
        visit_type: VisitType,
        visit_location: VisitLocation,
        minutes: u32,
        note: String,
        clinical_datetime: NaiveDateTime,
        recurrence: FollowUpRecurrence,
    ) -> Event {
        let procedure_code =
            billing::default_procedure_code(event_type, visit_type, minutes).map(str::to_owned);
        let now = self.clock.now();
        tracing::debug!(
            patient_id,
            %event_type,
            %visit_type,
            minutes,
            code = procedure_code.as_deref().unwrap_or("-"),
            "derived event"
        );
        Event {
            id: 0,
            patient_id,
            event_type,
            visit_type,
            visit_location,
            minutes,
            note,
            procedure_code,
            procedure_modifier: None,
            status: EventStatus::Pending,
            discharge_date: None,
            time_to_discharge: None,
            billing_batch_id: None,
            recurrence,
            clinical_datetime,
            billing_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Derives an event for an existing patient and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::UnknownPatient`] when the patient does not
    /// exist, or [`RulesError::WriteRejected`] when the facade refuses the
    /// write.
    #[allow(clippy::too_many_arguments)]
    pub fn create_event(
        &self,
        store: &mut dyn RecordStore,
        patient_id: PatientId,
        event_type: EventType,
        visit_type: VisitType,
        visit_location: VisitLocation,
        minutes: u32,
        note: String,
        clinical_datetime: NaiveDateTime,
        recurrence: FollowUpRecurrence,
    ) -> RulesResult<Event> {
        if store.fetch_patient(patient_id).is_none() {
            return Err(RulesError::UnknownPatient(patient_id));
        }
        let event = self.derive_event(
            patient_id,
            event_type,
            visit_type,
            visit_location,
            minutes,
            note,
            clinical_datetime,
            recurrence,
        );
        if !store.write_event(&event) {
            return Err(RulesError::WriteRejected);
        }
        Ok(event)
    }

    /// Explicitly re-derives an event's procedure code from its current
    /// fields and overwrites whatever was there, including a biller's
    /// override. This is the only path that re-runs the derivation.
    pub fn recompute_procedure_code(&self, event: &mut Event) {
        event.procedure_code = billing::default_code_for(event).map(str::to_owned);
        event.updated_at = self.clock.now();
    }

    /// Moves a stored event to a new status, if the transition table
    /// permits, and persists the change.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::UnknownEvent`], [`RulesError::IllegalTransition`]
    /// or [`RulesError::WriteRejected`].
    pub fn set_event_status(
        &self,
        store: &mut dyn RecordStore,
        event_id: EventId,
        new_status: EventStatus,
    ) -> RulesResult<Event> {
        let mut event = store
            .fetch_event(event_id)
            .ok_or(RulesError::UnknownEvent(event_id))?;
        self.transitions.apply(&mut event, new_status, &self.clock)?;
        if !store.write_event(&event) {
            return Err(RulesError::WriteRejected);
        }
        Ok(event)
    }

    // ========================================================================
    // Diagnoses
    // ========================================================================

    /// Resolves a patient's diagnosis and persists it.
    ///
    /// The ownership check runs before anything is written; a diagnosis
    /// belonging to another patient is rejected with the store untouched.
    /// Resolving an already-resolved diagnosis is a no-op re-write.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::DiagnosisOwnership`] or
    /// [`RulesError::WriteRejected`].
    pub fn resolve_diagnosis(
        &self,
        store: &mut dyn RecordStore,
        patient_id: PatientId,
        diagnosis: PatientDiagnosis,
        resolved_date: Option<NaiveDate>,
    ) -> RulesResult<PatientDiagnosis> {
        diagnoses::ensure_ownership(patient_id, &diagnosis)?;
        let resolved = diagnoses::resolve(diagnosis, resolved_date, &self.clock);
        self.persist_diagnosis(store, resolved)
    }

    /// Reactivates a resolved diagnosis and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::DiagnosisOwnership`] or
    /// [`RulesError::WriteRejected`].
    pub fn reactivate_diagnosis(
        &self,
        store: &mut dyn RecordStore,
        patient_id: PatientId,
        diagnosis: PatientDiagnosis,
    ) -> RulesResult<PatientDiagnosis> {
        diagnoses::ensure_ownership(patient_id, &diagnosis)?;
        self.persist_diagnosis(store, diagnoses::reactivate(diagnosis))
    }

    /// Sets or clears a diagnosis's hospice-code flag and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::DiagnosisOwnership`] or
    /// [`RulesError::WriteRejected`].
    pub fn set_hospice_flag(
        &self,
        store: &mut dyn RecordStore,
        patient_id: PatientId,
        diagnosis: PatientDiagnosis,
        flag: bool,
    ) -> RulesResult<PatientDiagnosis> {
        diagnoses::ensure_ownership(patient_id, &diagnosis)?;
        self.persist_diagnosis(store, diagnoses::set_hospice_flag(diagnosis, flag))
    }

    /// Re-ranks a patient's diagnosis and persists it.
    ///
    /// Duplicate priorities are allowed to exist temporarily (the invariant
    /// is component-owned, not a storage constraint); a conflict with
    /// another active diagnosis is logged so the caller can surface it.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::DiagnosisOwnership`] or
    /// [`RulesError::WriteRejected`].
    pub fn set_diagnosis_priority(
        &self,
        store: &mut dyn RecordStore,
        patient_id: PatientId,
        mut diagnosis: PatientDiagnosis,
        priority: Priority,
    ) -> RulesResult<PatientDiagnosis> {
        diagnoses::ensure_ownership(patient_id, &diagnosis)?;
        let existing = store.fetch_patient_diagnoses(patient_id);
        let conflicts = diagnoses::priority_conflicts(&existing, priority, Some(diagnosis.id));
        if !conflicts.is_empty() {
            tracing::warn!(
                patient_id,
                diagnosis_id = diagnosis.id,
                %priority,
                conflicts = conflicts.len(),
                "assigning an already-held priority"
            );
        }
        diagnosis.priority = priority;
        self.persist_diagnosis(store, diagnosis)
    }

    /// The lowest open priority rank for a patient, from stored diagnoses.
    pub fn next_open_priority(
        &self,
        store: &dyn RecordStore,
        patient_id: PatientId,
    ) -> Option<Priority> {
        diagnoses::next_open_priority(&store.fetch_patient_diagnoses(patient_id))
    }

    // ========================================================================
    // Patient-level hospice designation
    // ========================================================================

    /// Links a stored diagnosis as the patient's primary hospice diagnosis
    /// and persists the patient record.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::UnknownPatient`], [`RulesError::UnknownDiagnosis`],
    /// [`RulesError::DiagnosisOwnership`] or [`RulesError::WriteRejected`].
    /// Every rejection happens before the write.
    pub fn designate_hospice_diagnosis(
        &self,
        store: &mut dyn RecordStore,
        patient_id: PatientId,
        diagnosis_id: DiagnosisId,
    ) -> RulesResult<Patient> {
        let mut patient = store
            .fetch_patient(patient_id)
            .ok_or(RulesError::UnknownPatient(patient_id))?;
        let diagnosis = store
            .fetch_diagnosis(diagnosis_id)
            .ok_or(RulesError::UnknownDiagnosis(diagnosis_id))?;
        diagnoses::designate_hospice_diagnosis(&mut patient, &diagnosis, &self.clock)?;
        if !store.write_patient(&patient) {
            return Err(RulesError::WriteRejected);
        }
        Ok(patient)
    }

    /// Clears the patient's hospice-designation reference and persists the
    /// patient record.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::UnknownPatient`] or [`RulesError::WriteRejected`].
    pub fn clear_hospice_designation(
        &self,
        store: &mut dyn RecordStore,
        patient_id: PatientId,
    ) -> RulesResult<Patient> {
        let mut patient = store
            .fetch_patient(patient_id)
            .ok_or(RulesError::UnknownPatient(patient_id))?;
        diagnoses::clear_hospice_designation(&mut patient, &self.clock);
        if !store.write_patient(&patient) {
            return Err(RulesError::WriteRejected);
        }
        Ok(patient)
    }

    fn persist_diagnosis(
        &self,
        store: &mut dyn RecordStore,
        diagnosis: PatientDiagnosis,
    ) -> RulesResult<PatientDiagnosis> {
        if !store.write_diagnosis(&diagnosis) {
            tracing::warn!(diagnosis_id = diagnosis.id, "storage rejected diagnosis write");
            return Err(RulesError::WriteRejected);
        }
        Ok(diagnosis)
    }
}
