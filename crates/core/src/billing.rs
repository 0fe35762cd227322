//! Billing rules: billability, default procedure codes, time requirements.
//!
//! Everything here is a pure, total function over event fields. Absence of a
//! matching rule means "no code" or "not billable", never an error.
//!
//! The default code is derived once at event creation and is never silently
//! re-derived on update: if a biller has overridden the code, an edit to
//! minutes must not clobber it. Callers that change the inputs recompute
//! explicitly via [`default_code_for`] and overwrite.

use carebill_types::{Event, EventType, VisitType};

// Procedure codes used by the default-code table.
/// Home visit, established patient (CPT 99348).
pub const CODE_HOME_VISIT: &str = "99348";
/// Subsequent nursing facility care (CPT 99308).
pub const CODE_NURSING_FACILITY: &str = "99308";
/// Telephone/telehealth evaluation and management (CPT 99441).
pub const CODE_TELEHEALTH: &str = "99441";
/// Chronic care management, 20+ minutes per month (CPT 99490).
pub const CODE_CCM: &str = "99490";
/// Complex chronic care management, 60+ minutes per month (CPT 99487).
pub const CODE_CCM_COMPLEX: &str = "99487";
/// Transitional care management (CPT 99495).
pub const CODE_TCM: &str = "99495";
/// Hospice care plan oversight (HCPCS G0182).
pub const CODE_HOSPICE_SUPERVISION: &str = "G0182";
/// Home health care plan oversight, 30+ minutes per month (HCPCS G0181).
pub const CODE_HOME_HEALTH_SUPERVISION: &str = "G0181";

/// Minutes of CCM time required in a month before the event is billable.
pub const CCM_MINIMUM_MINUTES: u32 = 20;
/// Minutes of CCM time at which the complex-care code applies.
pub const CCM_COMPLEX_MINUTES: u32 = 60;
/// Minutes of home-health oversight required before the event is billable.
pub const HOME_HEALTH_MINIMUM_MINUTES: u32 = 30;

/// Whether an event with these attributes can go on a claim.
///
/// Face-to-face encounters are billable only for home, nursing facility and
/// telehealth visits. CCM and home health are billable once their monthly
/// time minimums are met. TCM and hospice supervision are always billable.
pub fn is_billable(event_type: EventType, visit_type: VisitType, minutes: u32) -> bool {
    match event_type {
        EventType::FaceToFace => matches!(
            visit_type,
            VisitType::HomeVisit | VisitType::NursingFacility | VisitType::Telehealth
        ),
        EventType::Ccm => minutes >= CCM_MINIMUM_MINUTES,
        EventType::Tcm | EventType::Hospice => true,
        EventType::HomeHealth => minutes >= HOME_HEALTH_MINIMUM_MINUTES,
        EventType::Other => false,
    }
}

/// Default procedure code for an event with these attributes, if any.
///
/// This runs once when an event is created. It is never re-run implicitly;
/// see the module doc.
pub fn default_procedure_code(
    event_type: EventType,
    visit_type: VisitType,
    minutes: u32,
) -> Option<&'static str> {
    match event_type {
        EventType::FaceToFace => match visit_type {
            VisitType::HomeVisit => Some(CODE_HOME_VISIT),
            VisitType::NursingFacility => Some(CODE_NURSING_FACILITY),
            VisitType::Telehealth => Some(CODE_TELEHEALTH),
            _ => None,
        },
        EventType::Ccm => {
            if minutes >= CCM_COMPLEX_MINUTES {
                Some(CODE_CCM_COMPLEX)
            } else if minutes >= CCM_MINIMUM_MINUTES {
                Some(CODE_CCM)
            } else {
                None
            }
        }
        EventType::Tcm => Some(CODE_TCM),
        EventType::Hospice => Some(CODE_HOSPICE_SUPERVISION),
        EventType::HomeHealth => {
            if minutes >= HOME_HEALTH_MINIMUM_MINUTES {
                Some(CODE_HOME_HEALTH_SUPERVISION)
            } else {
                None
            }
        }
        EventType::Other => None,
    }
}

/// Default code for an existing event's current fields. Used by the
/// explicit recompute path.
pub fn default_code_for(event: &Event) -> Option<&'static str> {
    default_procedure_code(event.event_type, event.visit_type, event.minutes)
}

/// Minimum minutes this event type must accumulate before it is billable.
pub fn minimum_required_minutes(event_type: EventType) -> u32 {
    match event_type {
        EventType::Ccm => CCM_MINIMUM_MINUTES,
        EventType::HomeHealth => HOME_HEALTH_MINIMUM_MINUTES,
        _ => 0,
    }
}

/// Whether an event meets the minimum-time requirement for its type.
pub fn meets_time_requirement(event_type: EventType, minutes: u32) -> bool {
    minutes >= minimum_required_minutes(event_type)
}

/// Human-readable description of the time requirement for an event type.
/// Informational only; no decision is made from this text.
pub fn time_requirement_description(event_type: EventType) -> &'static str {
    match event_type {
        EventType::FaceToFace => "No minimum time; billed per visit",
        EventType::Ccm => "At least 20 minutes of care management time in the calendar month",
        EventType::Tcm => "No minimum time; billed once per discharge",
        EventType::Hospice => "No minimum time; billed per supervision entry",
        EventType::HomeHealth => {
            "At least 30 minutes of care plan oversight in the calendar month"
        }
        EventType::Other => "Not billable",
    }
}
