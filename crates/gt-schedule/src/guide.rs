//! Guide assignment: one escort per trip, no double-booking.
//!
//! # Overlap rule
//!
//! A candidate assignment is checked against every *other* trip currently
//! assigned to the same guide.  Assignments whose window has already
//! completed (`end < now`) never block; live ones conflict on closed/closed
//! day-granularity overlap (see [`gt_core::TripWindow::overlaps`]).  The
//! failure names the conflicting trip so the caller can pick another guide
//! or another date.
//!
//! Assignment overwrites any previous guide on the trip — reassignment needs
//! no explicit unassign step.

use gt_core::{Timestamp, TripId, TripWindow, Visibility};

use crate::error::{ScheduleError, ScheduleResult};

/// One entry in a guide's derived assignment view: a trip they escort and
/// its window.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideAssignment {
    pub trip: TripId,
    pub window: TripWindow,
}

impl GuideAssignment {
    pub fn new(trip: TripId, window: TripWindow) -> Self {
        Self { trip, window }
    }

    #[inline]
    pub fn is_completed(&self, now: Timestamp) -> bool {
        self.window.is_completed(now)
    }
}

/// Validate assigning a guide to `trip`.
///
/// Preconditions, in order:
/// - the trip is public → else [`ScheduleError::NotEligibleForGuide`];
/// - the trip has a computable window → else
///   [`ScheduleError::ScheduleUndetermined`];
/// - no live assignment of the same guide overlaps → else
///   [`ScheduleError::GuideDoubleBooked`] naming the conflicting trip.
///
/// `existing` is a snapshot of the guide's current assignments; entries for
/// `trip` itself are skipped, so reassigning the same trip to the same guide
/// (e.g. after a date change) does not self-conflict.
pub fn check_guide_assignment(
    trip: TripId,
    visibility: Visibility,
    window: Option<TripWindow>,
    existing: &[GuideAssignment],
    now: Timestamp,
) -> ScheduleResult<()> {
    if visibility != Visibility::Public {
        return Err(ScheduleError::NotEligibleForGuide);
    }
    let window = window.ok_or(ScheduleError::ScheduleUndetermined)?;

    for other in existing {
        if other.trip == trip || other.is_completed(now) {
            continue;
        }
        if window.overlaps(&other.window) {
            return Err(ScheduleError::GuideDoubleBooked { conflicting: other.trip });
        }
    }
    Ok(())
}

// ── GuideItinerary ────────────────────────────────────────────────────────────

/// A guide's assignments partitioned by completion — the view behind the
/// guide dashboard ("my upcoming trips" / "my completed trips").
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideItinerary {
    /// Upcoming or in-progress assignments (window end has not passed).
    pub active: Vec<GuideAssignment>,
    /// Assignments whose window has completed.
    pub completed: Vec<GuideAssignment>,
}

impl GuideItinerary {
    /// Partition `assignments` by completion at `now`.
    pub fn partition<I>(assignments: I, now: Timestamp) -> Self
    where
        I: IntoIterator<Item = GuideAssignment>,
    {
        let mut itinerary = Self::default();
        for a in assignments {
            if a.is_completed(now) {
                itinerary.completed.push(a);
            } else {
                itinerary.active.push(a);
            }
        }
        itinerary
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.completed.is_empty()
    }
}
