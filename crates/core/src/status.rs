//! Event status state machine.
//!
//! Statuses move Pending -> Completed -> Billed -> Paid, with Cancelled and
//! NoShow as terminal branches. The legal moves live in a
//! [`TransitionTable`] that callers can replace: the table is data, not
//! code, because the set of allowed transitions is a practice-level policy
//! rather than a law of the domain. [`TransitionTable::permissive`]
//! reproduces the historical behaviour where any status could overwrite any
//! other.

use crate::clock::Clock;
use crate::error::{RulesError, RulesResult};
use carebill_types::{Event, EventStatus};
use std::collections::HashSet;

/// The set of allowed status transitions.
///
/// A transition from a status to itself is always allowed; re-writing the
/// current status is a harmless no-op, not a lifecycle change.
#[derive(Clone, Debug)]
pub struct TransitionTable {
    allowed: HashSet<(EventStatus, EventStatus)>,
}

impl TransitionTable {
    /// Builds a table from explicit (from, to) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (EventStatus, EventStatus)>) -> Self {
        Self {
            allowed: pairs.into_iter().collect(),
        }
    }

    /// The standard lifecycle: Pending -> {Completed, Cancelled, NoShow},
    /// Completed -> {Billed, Cancelled, NoShow}, Billed -> Paid. Paid,
    /// Cancelled and NoShow are terminal.
    pub fn standard() -> Self {
        use EventStatus::*;
        Self::from_pairs([
            (Pending, Completed),
            (Pending, Cancelled),
            (Pending, NoShow),
            (Completed, Billed),
            (Completed, Cancelled),
            (Completed, NoShow),
            (Billed, Paid),
        ])
    }

    /// Any status may overwrite any other. Matches the legacy behaviour of
    /// unguarded single-field status updates.
    pub fn permissive() -> Self {
        let mut allowed = HashSet::new();
        for from in EventStatus::ALL {
            for to in EventStatus::ALL {
                allowed.insert((from, to));
            }
        }
        Self { allowed }
    }

    /// Whether this table permits `from -> to`.
    pub fn allows(&self, from: EventStatus, to: EventStatus) -> bool {
        from == to || self.allowed.contains(&(from, to))
    }

    /// Moves `event` to `new_status`, stamping `updated_at` from the clock.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::IllegalTransition`] when the table does not
    /// permit the move; the event is left untouched.
    pub fn apply(
        &self,
        event: &mut Event,
        new_status: EventStatus,
        clock: &dyn Clock,
    ) -> RulesResult<()> {
        if !self.allows(event.status, new_status) {
            return Err(RulesError::IllegalTransition {
                from: event.status,
                to: new_status,
            });
        }
        event.status = new_status;
        event.updated_at = clock.now();
        Ok(())
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Whether an event is completed but not yet swept into a billing batch.
/// The monthly batch builder selects events with this predicate.
pub fn is_unbilled(event: &Event) -> bool {
    event.status == EventStatus::Completed && event.billing_batch_id.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use carebill_types::{EventType, FollowUpRecurrence, VisitLocation, VisitType};
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn event(status: EventStatus) -> Event {
        Event {
            id: 7,
            patient_id: 3,
            event_type: EventType::FaceToFace,
            visit_type: VisitType::HomeVisit,
            visit_location: VisitLocation::Home,
            minutes: 40,
            note: String::new(),
            procedure_code: Some("99348".into()),
            procedure_modifier: None,
            status,
            discharge_date: None,
            time_to_discharge: None,
            billing_batch_id: None,
            recurrence: FollowUpRecurrence::None,
            clinical_datetime: dt(2024, 3, 1),
            billing_date: None,
            created_at: dt(2024, 3, 1),
            updated_at: dt(2024, 3, 1),
        }
    }

    #[test]
    fn standard_table_walks_the_happy_path() {
        let table = TransitionTable::standard();
        let clock = FixedClock(dt(2024, 3, 2));
        let mut e = event(EventStatus::Pending);

        table.apply(&mut e, EventStatus::Completed, &clock).unwrap();
        table.apply(&mut e, EventStatus::Billed, &clock).unwrap();
        table.apply(&mut e, EventStatus::Paid, &clock).unwrap();
        assert_eq!(e.status, EventStatus::Paid);
        assert_eq!(e.updated_at, dt(2024, 3, 2));
    }

    #[test]
    fn standard_table_rejects_backward_moves() {
        let table = TransitionTable::standard();
        let clock = FixedClock(dt(2024, 3, 2));
        let mut e = event(EventStatus::Billed);

        let err = table
            .apply(&mut e, EventStatus::Pending, &clock)
            .expect_err("should reject");
        match err {
            RulesError::IllegalTransition { from, to } => {
                assert_eq!(from, EventStatus::Billed);
                assert_eq!(to, EventStatus::Pending);
            }
            other => panic!("expected IllegalTransition, got {other:?}"),
        }
        // Rejection left the event untouched.
        assert_eq!(e.status, EventStatus::Billed);
        assert_eq!(e.updated_at, dt(2024, 3, 1));
    }

    #[test]
    fn terminal_statuses_accept_no_moves() {
        let table = TransitionTable::standard();
        for terminal in [EventStatus::Paid, EventStatus::Cancelled, EventStatus::NoShow] {
            for to in EventStatus::ALL {
                if to != terminal {
                    assert!(!table.allows(terminal, to), "{terminal} -> {to}");
                }
            }
        }
    }

    #[test]
    fn same_status_rewrite_is_always_allowed() {
        let table = TransitionTable::standard();
        let clock = FixedClock(dt(2024, 3, 2));
        let mut e = event(EventStatus::Paid);
        table.apply(&mut e, EventStatus::Paid, &clock).unwrap();
        assert_eq!(e.status, EventStatus::Paid);
    }

    #[test]
    fn permissive_table_allows_anything() {
        let table = TransitionTable::permissive();
        for from in EventStatus::ALL {
            for to in EventStatus::ALL {
                assert!(table.allows(from, to));
            }
        }
    }

    #[test]
    fn custom_table_from_pairs() {
        let table =
            TransitionTable::from_pairs([(EventStatus::Pending, EventStatus::Completed)]);
        assert!(table.allows(EventStatus::Pending, EventStatus::Completed));
        assert!(!table.allows(EventStatus::Completed, EventStatus::Billed));
    }

    #[test]
    fn unbilled_means_completed_without_batch() {
        let mut e = event(EventStatus::Completed);
        assert!(is_unbilled(&e));

        e.billing_batch_id = Some(11);
        assert!(!is_unbilled(&e));

        let pending = event(EventStatus::Pending);
        assert!(!is_unbilled(&pending));
    }
}
