//! Request log and the submit/respond state machine.
//!
//! # State model
//!
//! Per (trip, requester): `Pending → Accepted | Rejected`, both terminal.
//! The log is keyed by requester, so "at most one live request per user" is
//! structural.  A rejected requester may submit again: the entry returns to
//! `Pending` in its original arrival slot.
//!
//! # Demographic snapshot
//!
//! The requester's demographic is captured at submission.  It is a read-only
//! identity attribute, and snapshotting it means approval needs no callback
//! into the identity collaborator.

use gt_core::{Demographic, Traveler, UserId, Visibility};
use gt_roster::{RosterError, TripRoster};
use rustc_hash::FxHashMap;

use crate::error::{RequestError, RequestResult};

/// Lifecycle state of one join request.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    /// Accepted and Rejected are terminal; only Pending can transition.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

/// The creator's verdict on a pending request.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReviewDecision {
    Accept,
    Reject,
}

// ── RequestLog ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct RequestEntry {
    status: RequestStatus,
    /// Demographic snapshot taken at submission.
    demographic: Demographic,
}

/// One trip's join requests: arrival order plus a requester-keyed entry map.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestLog {
    /// Requesters in first-submission order (display order).
    arrival: Vec<UserId>,
    entries: FxHashMap<UserId, RequestEntry>,
}

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requesters ever recorded (any status).
    pub fn len(&self) -> usize {
        self.arrival.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrival.is_empty()
    }

    pub fn status_of(&self, user: UserId) -> Option<RequestStatus> {
        self.entries.get(&user).map(|e| e.status)
    }

    /// `(requester, status)` pairs in arrival order.
    pub fn entries(&self) -> impl Iterator<Item = (UserId, RequestStatus)> + '_ {
        self.arrival
            .iter()
            .map(|&user| (user, self.entries[&user].status))
    }

    /// Requesters currently awaiting a decision, in arrival order.
    pub fn pending(&self) -> impl Iterator<Item = UserId> + '_ {
        self.entries()
            .filter(|(_, s)| *s == RequestStatus::Pending)
            .map(|(user, _)| user)
    }

    fn record_pending(&mut self, user: UserId, demographic: Demographic) {
        let entry = RequestEntry { status: RequestStatus::Pending, demographic };
        if self.entries.insert(user, entry).is_none() {
            self.arrival.push(user);
        }
    }
}

// ── Operations ────────────────────────────────────────────────────────────────

/// Submit a join request for a private trip.
///
/// Checks, in order: requester role, trip visibility, capacity, self-request,
/// duplicate live request, existing membership, balance policy.  On success
/// the log gains (or re-marks) a `Pending` entry carrying the requester's
/// demographic snapshot.  The roster is never mutated here.
pub fn submit(
    log: &mut RequestLog,
    roster: &TripRoster,
    visibility: Visibility,
    creator: UserId,
    requester: &Traveler,
) -> RequestResult<()> {
    if requester.is_guide() {
        return Err(RequestError::RoleNotEligible);
    }
    if visibility != Visibility::Private {
        return Err(RequestError::NotPrivate);
    }
    roster.check_capacity()?;
    if requester.id == creator {
        return Err(RequestError::SelfRequest);
    }
    if log
        .status_of(requester.id)
        .is_some_and(|s| !s.is_terminal())
    {
        return Err(RequestError::DuplicateRequest(requester.id));
    }
    if roster.contains(requester.id) {
        return Err(RequestError::AlreadyMember(requester.id));
    }
    roster.check_policy(requester.demographic)?;

    log.record_pending(requester.id, requester.demographic);
    Ok(())
}

/// Decide a pending request.  Only the trip creator may respond.
///
/// Rejection is terminal and always safe — it runs no admission checks.
/// Acceptance re-runs the capacity and policy checks against membership *as
/// of this moment* and admits the requester only if they still pass; on
/// failure the entry stays `Pending` so the creator can retry once the
/// roster changes.
///
/// Returns the request's resulting status.
pub fn respond(
    log: &mut RequestLog,
    roster: &mut TripRoster,
    creator: UserId,
    acting: UserId,
    requester: UserId,
    decision: ReviewDecision,
) -> RequestResult<RequestStatus> {
    if acting != creator {
        return Err(RequestError::NotAuthorized);
    }
    let demographic = match log.entries.get(&requester) {
        Some(entry) if entry.status == RequestStatus::Pending => entry.demographic,
        _ => return Err(RequestError::RequestNotFound(requester)),
    };

    let status = match decision {
        ReviewDecision::Reject => RequestStatus::Rejected,
        ReviewDecision::Accept => {
            roster.admit(requester, demographic).map_err(|e| match e {
                RosterError::Admission(admit) => RequestError::Admission(admit),
                // Unreachable through this workflow (membership implies a
                // terminal entry), but mapped rather than panicking.
                _ => RequestError::AlreadyMember(requester),
            })?;
            RequestStatus::Accepted
        }
    };

    // Entry is known to exist; checked above.
    if let Some(entry) = log.entries.get_mut(&requester) {
        entry.status = status;
    }
    Ok(status)
}
