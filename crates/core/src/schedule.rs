//! Follow-up scheduling.
//!
//! Computes when the next follow-up for an event is due. Pure and
//! idempotent: the same event always yields the same answer.

use carebill_types::{Event, FollowUpRecurrence};
use chrono::{Duration, Months, NaiveDateTime};

/// When the next follow-up for this event is due, if its recurrence policy
/// calls for one.
///
/// The anchor is the event's time-to-discharge timestamp when present,
/// otherwise its clinical date/time. Month-based offsets use calendar
/// arithmetic with chrono's clamping convention: adding a month to Jan 31
/// lands on Feb 28 (Feb 29 in a leap year).
///
/// Returns `None` for [`FollowUpRecurrence::None`], and for the degenerate
/// case of an anchor so close to chrono's representable limits that the
/// offset overflows.
pub fn next_follow_up(event: &Event) -> Option<NaiveDateTime> {
    let anchor = event.time_to_discharge.unwrap_or(event.clinical_datetime);
    match event.recurrence {
        FollowUpRecurrence::None => None,
        FollowUpRecurrence::Weekly => anchor.checked_add_signed(Duration::weeks(1)),
        FollowUpRecurrence::Monthly => anchor.checked_add_months(Months::new(1)),
        FollowUpRecurrence::Quarterly => anchor.checked_add_months(Months::new(3)),
        FollowUpRecurrence::SemiAnnual => anchor.checked_add_months(Months::new(6)),
        FollowUpRecurrence::Annual => anchor.checked_add_months(Months::new(12)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carebill_types::{EventStatus, EventType, VisitLocation, VisitType};
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn event(recurrence: FollowUpRecurrence, clinical: NaiveDateTime) -> Event {
        Event {
            id: 1,
            patient_id: 1,
            event_type: EventType::FaceToFace,
            visit_type: VisitType::HomeVisit,
            visit_location: VisitLocation::Home,
            minutes: 45,
            note: String::new(),
            procedure_code: Some("99348".into()),
            procedure_modifier: None,
            status: EventStatus::Pending,
            discharge_date: None,
            time_to_discharge: None,
            billing_batch_id: None,
            recurrence,
            clinical_datetime: clinical,
            billing_date: None,
            created_at: clinical,
            updated_at: clinical,
        }
    }

    #[test]
    fn no_recurrence_means_no_follow_up() {
        let e = event(FollowUpRecurrence::None, dt(2024, 3, 15, 10, 0));
        assert_eq!(next_follow_up(&e), None);
    }

    #[test]
    fn weekly_adds_seven_days() {
        let e = event(FollowUpRecurrence::Weekly, dt(2024, 3, 15, 10, 30));
        assert_eq!(next_follow_up(&e), Some(dt(2024, 3, 22, 10, 30)));
    }

    #[test]
    fn monthly_uses_calendar_arithmetic() {
        let e = event(FollowUpRecurrence::Monthly, dt(2024, 3, 15, 10, 0));
        assert_eq!(next_follow_up(&e), Some(dt(2024, 4, 15, 10, 0)));
    }

    // chrono's month addition clamps to the last valid day of the target
    // month: Jan 31 + 1 month = Feb 29 in a leap year, Feb 28 otherwise.
    // That is the convention this scheduler commits to.
    #[test]
    fn monthly_clamps_jan_31_to_end_of_february() {
        let leap = event(FollowUpRecurrence::Monthly, dt(2024, 1, 31, 9, 0));
        assert_eq!(next_follow_up(&leap), Some(dt(2024, 2, 29, 9, 0)));

        let common = event(FollowUpRecurrence::Monthly, dt(2023, 1, 31, 9, 0));
        assert_eq!(next_follow_up(&common), Some(dt(2023, 2, 28, 9, 0)));
    }

    #[test]
    fn quarterly_semi_annual_and_annual_offsets() {
        let q = event(FollowUpRecurrence::Quarterly, dt(2024, 1, 10, 8, 0));
        assert_eq!(next_follow_up(&q), Some(dt(2024, 4, 10, 8, 0)));

        let s = event(FollowUpRecurrence::SemiAnnual, dt(2024, 1, 10, 8, 0));
        assert_eq!(next_follow_up(&s), Some(dt(2024, 7, 10, 8, 0)));

        let a = event(FollowUpRecurrence::Annual, dt(2024, 2, 29, 8, 0));
        // Feb 29 + 12 months clamps to Feb 28 of the common year.
        assert_eq!(next_follow_up(&a), Some(dt(2025, 2, 28, 8, 0)));
    }

    #[test]
    fn discharge_anchor_takes_precedence_over_clinical_time() {
        let mut e = event(FollowUpRecurrence::Weekly, dt(2024, 3, 15, 10, 0));
        e.time_to_discharge = Some(dt(2024, 3, 20, 14, 0));
        assert_eq!(next_follow_up(&e), Some(dt(2024, 3, 27, 14, 0)));
    }

    #[test]
    fn computation_is_idempotent() {
        let e = event(FollowUpRecurrence::Quarterly, dt(2024, 5, 31, 16, 45));
        assert_eq!(next_follow_up(&e), next_follow_up(&e));
    }
}
