//! Patient record.

use crate::{DiagnosisId, FacilityId, PatientId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A patient under care.
///
/// The UPI is derived from name and birth date by the identifier generator,
/// never supplied by a user; the storage facade rejects duplicates. The four
/// care-program flags are independent of each other. The hospice flag and the
/// hospice-designation diagnosis reference are set by separate operations: a
/// patient may legitimately be flagged for hospice with no designated
/// diagnosis yet (see [`Patient::hospice_needs_diagnosis`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Storage identifier. Zero means not yet persisted.
    pub id: PatientId,

    pub first_name: String,
    pub last_name: String,

    /// Date of birth, when known.
    pub birth_date: Option<NaiveDate>,

    /// Sex flag as recorded for billing (true = male).
    pub is_male: bool,

    pub medicare_number: Option<String>,

    /// Derived unique patient identifier, e.g. `smijoh800503`.
    pub upi: String,

    /// Facility the patient is usually seen at, if any. Deleting a facility
    /// nulls this reference rather than cascading.
    pub facility_id: Option<FacilityId>,

    /// Care-program flags, independent of one another.
    pub hospice: bool,
    pub chronic_care_management: bool,
    pub psychiatric: bool,
    pub psych_med_review: bool,

    /// Date of the last psychiatric medication review, if the program flag
    /// is in use.
    pub psych_med_review_date: Option<NaiveDate>,

    /// The diagnosis designated as the patient's primary hospice diagnosis.
    /// At most one diagnosis may be designated, enforced by this single
    /// reference rather than by counting flagged diagnoses.
    pub hospice_diagnosis_id: Option<DiagnosisId>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Patient {
    /// True when the patient is flagged for hospice care but no diagnosis has
    /// been designated yet. This is a displayable "needs diagnosis" state,
    /// not an error.
    pub fn hospice_needs_diagnosis(&self) -> bool {
        self.hospice && self.hospice_diagnosis_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn patient() -> Patient {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Patient {
            id: 1,
            first_name: "John".into(),
            last_name: "Smith".into(),
            birth_date: NaiveDate::from_ymd_opt(1980, 5, 3),
            is_male: true,
            medicare_number: Some("1EG4-TE5-MK73".into()),
            upi: "smijoh800503".into(),
            facility_id: None,
            hospice: false,
            chronic_care_management: true,
            psychiatric: false,
            psych_med_review: false,
            psych_med_review_date: None,
            hospice_diagnosis_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn hospice_needs_diagnosis_only_when_flagged_without_reference() {
        let mut p = patient();
        assert!(!p.hospice_needs_diagnosis());

        p.hospice = true;
        assert!(p.hospice_needs_diagnosis());

        p.hospice_diagnosis_id = Some(42);
        assert!(!p.hospice_needs_diagnosis());
    }
}
