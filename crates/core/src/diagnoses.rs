//! Diagnosis ordering and the hospice-designation invariant.
//!
//! Priorities (1 = primary) must be meaningful orderings per patient even
//! though the storage layer enforces no uniqueness constraint. The scan
//! functions here are the invariant's home: callers assigning a priority
//! query the patient's existing diagnoses first and either pick a
//! non-conflicting rank or knowingly accept a temporary duplicate.
//! Concurrent callers racing on the same patient's priority set are a
//! storage-layer problem, not resolved here.
//!
//! The pure functions take a diagnosis by value and return the updated
//! value; nothing is persisted here. Ownership checks (diagnosis belongs to
//! the named patient) are applied by the service layer before any write.

use crate::clock::Clock;
use crate::error::{RulesError, RulesResult};
use carebill_types::{DiagnosisId, Patient, PatientDiagnosis, PatientId, Priority};
use chrono::NaiveDate;

/// Active diagnoses of `existing` that already hold `priority`.
///
/// `exclude` skips the diagnosis being re-ranked so it does not conflict
/// with itself.
pub fn priority_conflicts<'a>(
    existing: &'a [PatientDiagnosis],
    priority: Priority,
    exclude: Option<DiagnosisId>,
) -> Vec<&'a PatientDiagnosis> {
    existing
        .iter()
        .filter(|d| d.active && d.priority == priority && Some(d.id) != exclude)
        .collect()
}

/// The lowest rank in 1..=10 not held by any active diagnosis, or `None`
/// when all ten ranks are taken.
pub fn next_open_priority(existing: &[PatientDiagnosis]) -> Option<Priority> {
    (Priority::MIN..=Priority::MAX)
        .filter_map(|rank| Priority::new(rank).ok())
        .find(|p| priority_conflicts(existing, *p, None).is_empty())
}

/// Marks a diagnosis resolved: sets the resolved date and clears `active`.
///
/// `resolved_date` defaults to the clock's current date. Resolving an
/// already-resolved diagnosis is not an error; the state is unchanged
/// except that an explicitly supplied date overwrites the stored one.
pub fn resolve(
    mut diagnosis: PatientDiagnosis,
    resolved_date: Option<NaiveDate>,
    clock: &dyn Clock,
) -> PatientDiagnosis {
    diagnosis.resolved_date = match resolved_date {
        Some(date) => Some(date),
        None => diagnosis.resolved_date.or_else(|| Some(clock.today())),
    };
    diagnosis.active = false;
    diagnosis
}

/// Reverses a resolution: restores `active` and clears the resolved date.
/// This is an explicit write, never an implicit side effect.
pub fn reactivate(mut diagnosis: PatientDiagnosis) -> PatientDiagnosis {
    diagnosis.active = true;
    diagnosis.resolved_date = None;
    diagnosis
}

/// Toggles the hospice-code flag. Orthogonal to active/resolved state: a
/// resolved diagnosis keeps whatever hospice flag it had.
pub fn set_hospice_flag(mut diagnosis: PatientDiagnosis, flag: bool) -> PatientDiagnosis {
    diagnosis.hospice_code = flag;
    diagnosis
}

/// Rejects the operation when `diagnosis` does not belong to `patient_id`.
/// Called before any write in the service layer.
pub fn ensure_ownership(patient_id: PatientId, diagnosis: &PatientDiagnosis) -> RulesResult<()> {
    if diagnosis.patient_id != patient_id {
        return Err(RulesError::DiagnosisOwnership {
            diagnosis_id: diagnosis.id,
            patient_id,
        });
    }
    Ok(())
}

/// Designates `diagnosis` as the patient's primary hospice diagnosis.
///
/// This stores the diagnosis reference on the patient record; at most one
/// diagnosis can be designated because the reference is single-valued.
/// Setting the patient's hospice flag never does this implicitly.
///
/// # Errors
///
/// Returns [`RulesError::DiagnosisOwnership`] when the diagnosis belongs to
/// a different patient; the patient record is left untouched.
pub fn designate_hospice_diagnosis(
    patient: &mut Patient,
    diagnosis: &PatientDiagnosis,
    clock: &dyn Clock,
) -> RulesResult<()> {
    ensure_ownership(patient.id, diagnosis)?;
    patient.hospice_diagnosis_id = Some(diagnosis.id);
    patient.updated_at = clock.now();
    Ok(())
}

/// Clears the patient's hospice-designation reference. If the hospice flag
/// stays on, the patient re-enters the displayable "needs diagnosis" state.
pub fn clear_hospice_designation(patient: &mut Patient, clock: &dyn Clock) {
    patient.hospice_diagnosis_id = None;
    patient.updated_at = clock.now();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn diagnosis(id: i64, patient_id: i64, rank: u8, active: bool) -> PatientDiagnosis {
        PatientDiagnosis {
            id,
            patient_id,
            code: "I50.9".into(),
            priority: Priority::new(rank).unwrap(),
            hospice_code: false,
            diagnosed_date: NaiveDate::from_ymd_opt(2023, 11, 2),
            resolved_date: None,
            active,
            notes: String::new(),
        }
    }

    fn patient(id: i64) -> Patient {
        Patient {
            id,
            first_name: "John".into(),
            last_name: "Smith".into(),
            birth_date: NaiveDate::from_ymd_opt(1980, 5, 3),
            is_male: true,
            medicare_number: None,
            upi: "smijoh800503".into(),
            facility_id: None,
            hospice: true,
            chronic_care_management: false,
            psychiatric: false,
            psych_med_review: false,
            psych_med_review_date: None,
            hospice_diagnosis_id: None,
            created_at: dt(2024, 1, 1),
            updated_at: dt(2024, 1, 1),
        }
    }

    #[test]
    fn conflict_scan_sees_only_active_diagnoses() {
        let existing = vec![
            diagnosis(1, 5, 1, true),
            diagnosis(2, 5, 2, true),
            diagnosis(3, 5, 1, false), // resolved, does not conflict
        ];
        let conflicts = priority_conflicts(&existing, Priority::PRIMARY, None);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].id, 1);
    }

    #[test]
    fn conflict_scan_excludes_the_diagnosis_being_reranked() {
        let existing = vec![diagnosis(1, 5, 1, true)];
        assert!(priority_conflicts(&existing, Priority::PRIMARY, Some(1)).is_empty());
    }

    #[test]
    fn next_open_priority_skips_taken_ranks() {
        let existing = vec![diagnosis(1, 5, 1, true), diagnosis(2, 5, 2, true)];
        assert_eq!(next_open_priority(&existing), Priority::new(3).ok());
    }

    #[test]
    fn next_open_priority_is_none_when_all_ranks_taken() {
        let existing: Vec<_> = (1..=10)
            .map(|rank| diagnosis(rank as i64, 5, rank, true))
            .collect();
        assert_eq!(next_open_priority(&existing), None);
    }

    #[test]
    fn resolve_sets_date_and_clears_active() {
        let clock = FixedClock(dt(2024, 6, 1));
        let resolved = resolve(diagnosis(1, 5, 1, true), None, &clock);
        assert!(!resolved.active);
        assert_eq!(resolved.resolved_date, NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn resolve_prefers_an_explicit_date() {
        let clock = FixedClock(dt(2024, 6, 1));
        let date = NaiveDate::from_ymd_opt(2024, 5, 20);
        let resolved = resolve(diagnosis(1, 5, 1, true), date, &clock);
        assert_eq!(resolved.resolved_date, date);
    }

    #[test]
    fn resolve_twice_is_idempotent() {
        let clock = FixedClock(dt(2024, 6, 1));
        let once = resolve(diagnosis(1, 5, 1, true), None, &clock);

        let later = FixedClock(dt(2024, 7, 1));
        let twice = resolve(once.clone(), None, &later);
        // Second call leaves the stored date alone.
        assert_eq!(once, twice);
    }

    #[test]
    fn reactivate_restores_active_and_clears_date() {
        let clock = FixedClock(dt(2024, 6, 1));
        let resolved = resolve(diagnosis(1, 5, 1, true), None, &clock);
        let back = reactivate(resolved);
        assert!(back.active);
        assert_eq!(back.resolved_date, None);
    }

    #[test]
    fn hospice_flag_is_orthogonal_to_resolution() {
        let clock = FixedClock(dt(2024, 6, 1));
        let flagged = set_hospice_flag(diagnosis(1, 5, 1, true), true);
        assert!(flagged.hospice_code);

        let resolved = resolve(flagged, None, &clock);
        assert!(resolved.hospice_code);

        let unflagged = set_hospice_flag(resolved, false);
        assert!(!unflagged.hospice_code);
        assert!(!unflagged.active);
    }

    #[test]
    fn designation_stores_the_reference() {
        let clock = FixedClock(dt(2024, 6, 1));
        let mut p = patient(5);
        assert!(p.hospice_needs_diagnosis());

        let d = diagnosis(9, 5, 1, true);
        designate_hospice_diagnosis(&mut p, &d, &clock).unwrap();
        assert_eq!(p.hospice_diagnosis_id, Some(9));
        assert!(!p.hospice_needs_diagnosis());
        assert_eq!(p.updated_at, dt(2024, 6, 1));
    }

    #[test]
    fn designation_rejects_foreign_diagnosis_without_writing() {
        let clock = FixedClock(dt(2024, 6, 1));
        let mut p = patient(5);
        let foreign = diagnosis(9, 6, 1, true);

        let err = designate_hospice_diagnosis(&mut p, &foreign, &clock)
            .expect_err("should reject");
        match err {
            RulesError::DiagnosisOwnership {
                diagnosis_id,
                patient_id,
            } => {
                assert_eq!(diagnosis_id, 9);
                assert_eq!(patient_id, 5);
            }
            other => panic!("expected DiagnosisOwnership, got {other:?}"),
        }
        assert_eq!(p.hospice_diagnosis_id, None);
        assert_eq!(p.updated_at, dt(2024, 1, 1));
    }

    #[test]
    fn clearing_designation_reopens_needs_diagnosis_state() {
        let clock = FixedClock(dt(2024, 6, 1));
        let mut p = patient(5);
        let d = diagnosis(9, 5, 1, true);
        designate_hospice_diagnosis(&mut p, &d, &clock).unwrap();

        clear_hospice_designation(&mut p, &clock);
        assert!(p.hospice_needs_diagnosis());
    }
}
