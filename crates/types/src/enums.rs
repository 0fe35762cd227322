//! Enumerations shared across the rules core, with their storage wire strings.
//!
//! Each enumeration carries an explicit bidirectional mapping
//! (`as_wire`/`from_wire`). Serde goes through the same mapping, so a record
//! read back with an unrecognised string surfaces
//! [`TypesError::UnknownEnumValue`] at deserialisation time.

use crate::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// EventType
// ============================================================================

/// Clinical category of a billable event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// In-person (or telehealth) encounter with the patient.
    FaceToFace,
    /// Chronic care management time, accumulated per calendar month.
    Ccm,
    /// Transitional care management after a hospital discharge.
    Tcm,
    /// Hospice care plan supervision.
    Hospice,
    /// Home health care plan supervision.
    HomeHealth,
    /// Anything else (administrative, unclassified).
    Other,
}

impl EventType {
    /// Every variant, for table construction and load-time validation.
    pub const ALL: [EventType; 6] = [
        EventType::FaceToFace,
        EventType::Ccm,
        EventType::Tcm,
        EventType::Hospice,
        EventType::HomeHealth,
        EventType::Other,
    ];

    /// Storage wire string for this variant.
    pub fn as_wire(self) -> &'static str {
        match self {
            EventType::FaceToFace => "FACE_TO_FACE",
            EventType::Ccm => "CCM",
            EventType::Tcm => "TCM",
            EventType::Hospice => "HOSPICE",
            EventType::HomeHealth => "HOME_HEALTH",
            EventType::Other => "OTHER",
        }
    }

    /// Parse a storage wire string.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::UnknownEnumValue`] for any string that is not an
    /// exact wire value.
    pub fn from_wire(s: &str) -> Result<Self, TypesError> {
        match s {
            "FACE_TO_FACE" => Ok(EventType::FaceToFace),
            "CCM" => Ok(EventType::Ccm),
            "TCM" => Ok(EventType::Tcm),
            "HOSPICE" => Ok(EventType::Hospice),
            "HOME_HEALTH" => Ok(EventType::HomeHealth),
            "OTHER" => Ok(EventType::Other),
            _ => Err(TypesError::UnknownEnumValue {
                enumeration: "event type",
                value: s.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        EventType::from_wire(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// VisitType
// ============================================================================

/// How a face-to-face encounter took place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisitType {
    /// House call at the patient's residence.
    HomeVisit,
    /// Visit at a nursing facility.
    NursingFacility,
    /// Real-time audio/video encounter.
    Telehealth,
    /// Office visit (not billable under the house-call code set).
    OfficeVisit,
    /// Telephone contact.
    Phone,
    /// Not a visit (non-encounter events).
    None,
}

impl VisitType {
    pub const ALL: [VisitType; 6] = [
        VisitType::HomeVisit,
        VisitType::NursingFacility,
        VisitType::Telehealth,
        VisitType::OfficeVisit,
        VisitType::Phone,
        VisitType::None,
    ];

    /// Storage wire string for this variant.
    pub fn as_wire(self) -> &'static str {
        match self {
            VisitType::HomeVisit => "HOME_VISIT",
            VisitType::NursingFacility => "NURSING_FACILITY",
            VisitType::Telehealth => "TELEHEALTH",
            VisitType::OfficeVisit => "OFFICE_VISIT",
            VisitType::Phone => "PHONE",
            VisitType::None => "NONE",
        }
    }

    /// Parse a storage wire string.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::UnknownEnumValue`] for any string that is not an
    /// exact wire value.
    pub fn from_wire(s: &str) -> Result<Self, TypesError> {
        match s {
            "HOME_VISIT" => Ok(VisitType::HomeVisit),
            "NURSING_FACILITY" => Ok(VisitType::NursingFacility),
            "TELEHEALTH" => Ok(VisitType::Telehealth),
            "OFFICE_VISIT" => Ok(VisitType::OfficeVisit),
            "PHONE" => Ok(VisitType::Phone),
            "NONE" => Ok(VisitType::None),
            _ => Err(TypesError::UnknownEnumValue {
                enumeration: "visit type",
                value: s.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for VisitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for VisitType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for VisitType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        VisitType::from_wire(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// VisitLocation
// ============================================================================

/// Where an encounter physically happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisitLocation {
    Home,
    Facility,
    Hospital,
    Remote,
    Other,
}

impl VisitLocation {
    pub const ALL: [VisitLocation; 5] = [
        VisitLocation::Home,
        VisitLocation::Facility,
        VisitLocation::Hospital,
        VisitLocation::Remote,
        VisitLocation::Other,
    ];

    /// Storage wire string for this variant.
    pub fn as_wire(self) -> &'static str {
        match self {
            VisitLocation::Home => "HOME",
            VisitLocation::Facility => "FACILITY",
            VisitLocation::Hospital => "HOSPITAL",
            VisitLocation::Remote => "REMOTE",
            VisitLocation::Other => "OTHER",
        }
    }

    /// Parse a storage wire string.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::UnknownEnumValue`] for any string that is not an
    /// exact wire value.
    pub fn from_wire(s: &str) -> Result<Self, TypesError> {
        match s {
            "HOME" => Ok(VisitLocation::Home),
            "FACILITY" => Ok(VisitLocation::Facility),
            "HOSPITAL" => Ok(VisitLocation::Hospital),
            "REMOTE" => Ok(VisitLocation::Remote),
            "OTHER" => Ok(VisitLocation::Other),
            _ => Err(TypesError::UnknownEnumValue {
                enumeration: "visit location",
                value: s.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for VisitLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for VisitLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for VisitLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        VisitLocation::from_wire(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// EventStatus
// ============================================================================

/// Billing lifecycle status of an event.
///
/// Events are created as [`EventStatus::Pending`] and normally advance
/// through `Completed`, `Billed` and `Paid`. `Cancelled` and `NoShow` are
/// terminal branches. Which transitions are legal is decided by the status
/// state machine in the rules core, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Pending,
    Completed,
    Billed,
    Paid,
    Cancelled,
    NoShow,
}

impl EventStatus {
    pub const ALL: [EventStatus; 6] = [
        EventStatus::Pending,
        EventStatus::Completed,
        EventStatus::Billed,
        EventStatus::Paid,
        EventStatus::Cancelled,
        EventStatus::NoShow,
    ];

    /// Storage wire string for this variant.
    pub fn as_wire(self) -> &'static str {
        match self {
            EventStatus::Pending => "PENDING",
            EventStatus::Completed => "COMPLETED",
            EventStatus::Billed => "BILLED",
            EventStatus::Paid => "PAID",
            EventStatus::Cancelled => "CANCELLED",
            EventStatus::NoShow => "NO_SHOW",
        }
    }

    /// Parse a storage wire string.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::UnknownEnumValue`] for any string that is not an
    /// exact wire value.
    pub fn from_wire(s: &str) -> Result<Self, TypesError> {
        match s {
            "PENDING" => Ok(EventStatus::Pending),
            "COMPLETED" => Ok(EventStatus::Completed),
            "BILLED" => Ok(EventStatus::Billed),
            "PAID" => Ok(EventStatus::Paid),
            "CANCELLED" => Ok(EventStatus::Cancelled),
            "NO_SHOW" => Ok(EventStatus::NoShow),
            _ => Err(TypesError::UnknownEnumValue {
                enumeration: "event status",
                value: s.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for EventStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for EventStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        EventStatus::from_wire(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// FollowUpRecurrence
// ============================================================================

/// How often a follow-up is due after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FollowUpRecurrence {
    /// No follow-up is scheduled.
    None,
    Weekly,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl FollowUpRecurrence {
    pub const ALL: [FollowUpRecurrence; 6] = [
        FollowUpRecurrence::None,
        FollowUpRecurrence::Weekly,
        FollowUpRecurrence::Monthly,
        FollowUpRecurrence::Quarterly,
        FollowUpRecurrence::SemiAnnual,
        FollowUpRecurrence::Annual,
    ];

    /// Storage wire string for this variant.
    pub fn as_wire(self) -> &'static str {
        match self {
            FollowUpRecurrence::None => "NONE",
            FollowUpRecurrence::Weekly => "WEEKLY",
            FollowUpRecurrence::Monthly => "MONTHLY",
            FollowUpRecurrence::Quarterly => "QUARTERLY",
            FollowUpRecurrence::SemiAnnual => "SEMI_ANNUAL",
            FollowUpRecurrence::Annual => "ANNUAL",
        }
    }

    /// Parse a storage wire string.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::UnknownEnumValue`] for any string that is not an
    /// exact wire value.
    pub fn from_wire(s: &str) -> Result<Self, TypesError> {
        match s {
            "NONE" => Ok(FollowUpRecurrence::None),
            "WEEKLY" => Ok(FollowUpRecurrence::Weekly),
            "MONTHLY" => Ok(FollowUpRecurrence::Monthly),
            "QUARTERLY" => Ok(FollowUpRecurrence::Quarterly),
            "SEMI_ANNUAL" => Ok(FollowUpRecurrence::SemiAnnual),
            "ANNUAL" => Ok(FollowUpRecurrence::Annual),
            _ => Err(TypesError::UnknownEnumValue {
                enumeration: "follow-up recurrence",
                value: s.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for FollowUpRecurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for FollowUpRecurrence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for FollowUpRecurrence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        FollowUpRecurrence::from_wire(&s).map_err(serde::de::Error::custom)
    }
}
