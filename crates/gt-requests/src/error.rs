use gt_core::UserId;
use gt_roster::AdmitError;
use thiserror::Error;

/// Errors from the join-request workflow.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    #[error("guides cannot request to join trips")]
    RoleNotEligible,

    #[error("trip is public — join it directly")]
    NotPrivate,

    #[error("trip creators cannot request to join their own trip")]
    SelfRequest,

    #[error("user {0} already has a pending request")]
    DuplicateRequest(UserId),

    #[error("user {0} is already a participant")]
    AlreadyMember(UserId),

    #[error("no pending request from user {0}")]
    RequestNotFound(UserId),

    #[error("only the trip creator may respond to join requests")]
    NotAuthorized,

    /// Capacity or policy failure — the same pair the direct-join path
    /// produces, surfaced at submit time and again at approval time.
    #[error(transparent)]
    Admission(#[from] AdmitError),
}

/// Shorthand result type for workflow operations.
pub type RequestResult<T> = Result<T, RequestError>;
