//! Billable clinical event record.

use crate::{BatchId, EventId, EventStatus, EventType, FollowUpRecurrence, PatientId};
use crate::{VisitLocation, VisitType};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A billable clinical event: a visit, a month of chronic-care-management
/// time, a hospice supervision entry, and so on.
///
/// The procedure code is derived once from type/visit type/minutes when the
/// event is created. Updates never silently re-derive it; a caller that
/// changes the inputs must explicitly recompute and overwrite. Billability
/// and minimum-time compliance, by contrast, are evaluated from the current
/// fields whenever asked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Storage identifier. Zero means not yet persisted.
    pub id: EventId,
    pub patient_id: PatientId,

    pub event_type: EventType,
    pub visit_type: VisitType,
    pub visit_location: VisitLocation,

    /// Minutes of clinical time spent.
    pub minutes: u32,

    pub note: String,

    /// Derived at creation, or overridden by the biller.
    pub procedure_code: Option<String>,
    pub procedure_modifier: Option<String>,

    pub status: EventStatus,

    /// Hospital discharge date for transitional-care events.
    pub discharge_date: Option<NaiveDate>,

    /// When set, this anchors the follow-up computation instead of
    /// `clinical_datetime`.
    pub time_to_discharge: Option<NaiveDateTime>,

    /// Monthly billing batch this event was swept into, if any. An event
    /// with `Completed` status and no batch reference is "unbilled".
    pub billing_batch_id: Option<BatchId>,

    pub recurrence: FollowUpRecurrence,

    /// When the care happened.
    pub clinical_datetime: NaiveDateTime,

    /// When the event was (or will be) billed; distinct from the clinical
    /// date.
    pub billing_date: Option<NaiveDate>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
