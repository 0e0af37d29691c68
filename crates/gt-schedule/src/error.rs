use gt_core::{TripId, UserId};
use thiserror::Error;

/// Errors from guide assignment and attendance marking.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("guides are only assigned to public trips")]
    NotEligibleForGuide,

    #[error("trip has no start time or duration — its window cannot be computed")]
    ScheduleUndetermined,

    #[error("guide is already assigned to overlapping trip {conflicting}")]
    GuideDoubleBooked { conflicting: TripId },

    #[error("user {0} is not the assigned guide for this trip")]
    NotAssignedGuide(UserId),

    #[error("user {0} is not a participant of this trip")]
    NotAParticipant(UserId),
}

/// Shorthand result type for scheduling operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
