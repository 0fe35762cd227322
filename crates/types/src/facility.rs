//! Facility record.

use crate::FacilityId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A facility where patients are seen (nursing home, assisted living, etc.).
///
/// Facilities do not own patients: patients carry an optional facility
/// reference, and deleting a facility nulls that reference instead of
/// cascading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Storage identifier. Zero means not yet persisted.
    pub id: FacilityId,

    /// Facility name, or the individual's name when the "facility" is a
    /// single contact person.
    pub name: String,
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,

    pub phone: Option<String>,
    pub fax: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,

    pub active: bool,

    /// Short unique facility code used on schedules and billing exports.
    pub code: String,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn round_trips_through_serde() {
        let now = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let facility = Facility {
            id: 3,
            name: "Lakeview Nursing Center".into(),
            contact_first_name: Some("Dana".into()),
            contact_last_name: Some("Ortiz".into()),
            phone: Some("555-0142".into()),
            fax: None,
            address: Some("200 Lake Rd".into()),
            city: Some("Springfield".into()),
            state: Some("IL".into()),
            zip: Some("62704".into()),
            active: true,
            code: "LNC".into(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&facility).unwrap();
        let back: Facility = serde_json::from_str(&json).unwrap();
        assert_eq!(facility, back);
    }
}
