//! Membership error types.
//!
//! [`AdmitError`] is the shared admission-failure pair (capacity, policy)
//! re-used by the join-request workflow at approval time — both paths fail
//! with the same errors because both run the same checks.

use gt_core::{BalancePolicy, UserId};
use thiserror::Error;

/// Why a roster refused to admit a traveler.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AdmitError {
    #[error("trip is full (capacity {capacity})")]
    CapacityExceeded { capacity: u32 },

    #[error("balance policy {policy:?} does not admit this traveler")]
    PolicyViolation { policy: BalancePolicy },
}

/// Errors from the direct membership path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    #[error("guides cannot join trips as participants")]
    RoleNotEligible,

    #[error("user {0} is already a participant")]
    AlreadyMember(UserId),

    #[error("membership is locked once the trip has started")]
    MembershipLocked,

    #[error("user {0} is not a participant")]
    NotAParticipant(UserId),

    #[error(transparent)]
    Admission(#[from] AdmitError),
}

/// Shorthand result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;
