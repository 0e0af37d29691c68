//! Unit tests for gt-schedule.

use gt_core::{Timestamp, TripId, TripWindow, UserId, Visibility};
use gt_core::time::SECS_PER_DAY;

use crate::{GuideAssignment, GuideItinerary, ScheduleError, check_guide_assignment};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn day(n: i64) -> Timestamp {
    Timestamp(n * SECS_PER_DAY)
}

fn window(start_day: i64, duration: u32) -> TripWindow {
    TripWindow::new(day(start_day), duration)
}

fn assignment(trip: u64, start_day: i64, duration: u32) -> GuideAssignment {
    GuideAssignment::new(TripId(trip), window(start_day, duration))
}

// ── Guide assignment ──────────────────────────────────────────────────────────

#[cfg(test)]
mod guide {
    use super::*;

    const NOW: Timestamp = Timestamp(0);

    #[test]
    fn private_trip_not_eligible() {
        let err = check_guide_assignment(
            TripId(1),
            Visibility::Private,
            Some(window(10, 5)),
            &[],
            NOW,
        );
        assert_eq!(err, Err(ScheduleError::NotEligibleForGuide));
    }

    #[test]
    fn window_required() {
        let err = check_guide_assignment(TripId(1), Visibility::Public, None, &[], NOW);
        assert_eq!(err, Err(ScheduleError::ScheduleUndetermined));
    }

    #[test]
    fn no_other_assignments_ok() {
        check_guide_assignment(TripId(1), Visibility::Public, Some(window(10, 5)), &[], NOW)
            .unwrap();
    }

    #[test]
    fn overlapping_assignment_conflicts() {
        // Trip A: days [10, 15]. Trip B: days [12, 15] → conflict, naming A.
        let existing = [assignment(1, 10, 5)];
        let err = check_guide_assignment(
            TripId(2),
            Visibility::Public,
            Some(window(12, 3)),
            &existing,
            NOW,
        );
        assert_eq!(err, Err(ScheduleError::GuideDoubleBooked { conflicting: TripId(1) }));
    }

    #[test]
    fn clear_assignment_succeeds() {
        // Trip A: [10, 15]. Trip C: [20, 22] → no conflict.
        let existing = [assignment(1, 10, 5)];
        check_guide_assignment(
            TripId(3),
            Visibility::Public,
            Some(window(20, 2)),
            &existing,
            NOW,
        )
        .unwrap();
    }

    #[test]
    fn touching_windows_conflict() {
        // Ending day 15 vs starting day 15: closed/closed → conflict.
        let existing = [assignment(1, 10, 5)];
        let err = check_guide_assignment(
            TripId(2),
            Visibility::Public,
            Some(window(15, 3)),
            &existing,
            NOW,
        );
        assert_eq!(err, Err(ScheduleError::GuideDoubleBooked { conflicting: TripId(1) }));
    }

    #[test]
    fn completed_assignment_does_not_block() {
        // Same dates as the conflict case, but "now" is past trip 1's end.
        let existing = [assignment(1, 10, 5)];
        let now = day(16);
        check_guide_assignment(
            TripId(2),
            Visibility::Public,
            Some(window(12, 3)),
            &existing,
            now,
        )
        .unwrap();
    }

    #[test]
    fn candidate_trip_skips_itself() {
        // Reassigning trip 1 after a date change: its own old entry must not
        // self-conflict.
        let existing = [assignment(1, 10, 5)];
        check_guide_assignment(
            TripId(1),
            Visibility::Public,
            Some(window(11, 2)),
            &existing,
            NOW,
        )
        .unwrap();
    }

    #[test]
    fn first_conflict_reported() {
        let existing = [assignment(4, 1, 2), assignment(7, 11, 2), assignment(9, 12, 4)];
        let err = check_guide_assignment(
            TripId(2),
            Visibility::Public,
            Some(window(10, 5)),
            &existing,
            NOW,
        );
        assert_eq!(err, Err(ScheduleError::GuideDoubleBooked { conflicting: TripId(7) }));
    }
}

// ── GuideItinerary ────────────────────────────────────────────────────────────

#[cfg(test)]
mod itinerary {
    use super::*;

    #[test]
    fn partitions_by_completion() {
        let now = day(16);
        let all = [
            assignment(1, 10, 5),  // ended day 15 → completed
            assignment(2, 14, 4),  // ends day 18 → active
            assignment(3, 20, 2),  // future → active
        ];
        let it = GuideItinerary::partition(all, now);
        let active: Vec<u64> = it.active.iter().map(|a| a.trip.0).collect();
        let completed: Vec<u64> = it.completed.iter().map(|a| a.trip.0).collect();
        assert_eq!(active, vec![2, 3]);
        assert_eq!(completed, vec![1]);
    }

    #[test]
    fn end_day_still_active() {
        // end == now is not yet completed (closed interval).
        let it = GuideItinerary::partition([assignment(1, 10, 5)], day(15));
        assert_eq!(it.active.len(), 1);
        assert!(it.completed.is_empty());
    }

    #[test]
    fn empty() {
        assert!(GuideItinerary::partition([], day(0)).is_empty());
    }
}

// ── Attendance ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod attendance {
    use gt_core::{BalancePolicy, Demographic};
    use gt_roster::TripRoster;

    use crate::{AttendanceSheet, AttendanceStatus, mark_attendance};

    use super::*;

    const GUIDE: UserId = UserId(100);

    fn trip_with_members(ids: &[u64]) -> TripRoster {
        let mut roster = TripRoster::new(10, BalancePolicy::Open);
        for &id in ids {
            roster.admit(UserId(id), Demographic::Other).unwrap();
        }
        roster
    }

    #[test]
    fn only_assigned_guide_may_mark() {
        let roster = trip_with_members(&[1]);
        let mut sheet = AttendanceSheet::new();

        let err = mark_attendance(
            &mut sheet, &roster, Some(GUIDE), UserId(99), UserId(1), AttendanceStatus::Present,
        );
        assert_eq!(err, Err(ScheduleError::NotAssignedGuide(UserId(99))));

        // No guide assigned at all: even the would-be guide is refused.
        let err = mark_attendance(
            &mut sheet, &roster, None, GUIDE, UserId(1), AttendanceStatus::Present,
        );
        assert_eq!(err, Err(ScheduleError::NotAssignedGuide(GUIDE)));
    }

    #[test]
    fn target_must_be_participant() {
        let roster = trip_with_members(&[1]);
        let mut sheet = AttendanceSheet::new();
        let err = mark_attendance(
            &mut sheet, &roster, Some(GUIDE), GUIDE, UserId(2), AttendanceStatus::Absent,
        );
        assert_eq!(err, Err(ScheduleError::NotAParticipant(UserId(2))));
        assert!(sheet.is_empty());
    }

    #[test]
    fn mark_is_idempotent() {
        let roster = trip_with_members(&[1]);
        let mut sheet = AttendanceSheet::new();
        for _ in 0..2 {
            mark_attendance(
                &mut sheet, &roster, Some(GUIDE), GUIDE, UserId(1), AttendanceStatus::Present,
            )
            .unwrap();
        }
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.status_of(UserId(1)), Some(AttendanceStatus::Present));
    }

    #[test]
    fn remark_overwrites_without_history() {
        let roster = trip_with_members(&[1]);
        let mut sheet = AttendanceSheet::new();
        mark_attendance(&mut sheet, &roster, Some(GUIDE), GUIDE, UserId(1), AttendanceStatus::Present)
            .unwrap();
        mark_attendance(&mut sheet, &roster, Some(GUIDE), GUIDE, UserId(1), AttendanceStatus::Absent)
            .unwrap();
        assert_eq!(sheet.status_of(UserId(1)), Some(AttendanceStatus::Absent));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn clear_removes_record() {
        let roster = trip_with_members(&[1, 2]);
        let mut sheet = AttendanceSheet::new();
        mark_attendance(&mut sheet, &roster, Some(GUIDE), GUIDE, UserId(1), AttendanceStatus::Present)
            .unwrap();
        sheet.clear(UserId(1));
        assert!(sheet.status_of(UserId(1)).is_none());
    }
}
