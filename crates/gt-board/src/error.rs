use gt_core::TripId;
use gt_requests::RequestError;
use gt_roster::RosterError;
use gt_schedule::ScheduleError;
use gt_settle::ExpenseError;
use thiserror::Error;

/// Errors from board-coordinated operations.
///
/// Domain failures pass through transparently so callers match on the
/// originating crate's error; only registry-level failures are added here.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("trip {0} not found")]
    TripNotFound(TripId),

    #[error("trip {0} is already registered")]
    TripExists(TripId),

    #[error(transparent)]
    Membership(#[from] RosterError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Expense(#[from] ExpenseError),
}

/// Shorthand result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
