//! The direct membership path: `join` and `leave`.
//!
//! These are the public-trip operations; private trips route admission
//! through the join-request workflow instead, which re-uses the roster's
//! admission checks at approval time.

use gt_core::{Timestamp, Traveler, UserId};

use crate::error::{RosterError, RosterResult};
use crate::roster::TripRoster;

/// Admit `traveler` directly.
///
/// Preconditions, each with a distinct failure, checked in order:
///
/// 1. guides are staff, not members → [`RosterError::RoleNotEligible`];
/// 2. not already a participant → [`RosterError::AlreadyMember`];
/// 3. a seat is free → `CapacityExceeded`;
/// 4. the balance policy admits them against *current* counts →
///    `PolicyViolation`.
///
/// Checks and insert run under one `&mut` borrow; driven through a per-trip
/// lock, no concurrent join can interleave between them.
pub fn join(roster: &mut TripRoster, traveler: &Traveler) -> RosterResult<()> {
    if traveler.is_guide() {
        return Err(RosterError::RoleNotEligible);
    }
    roster.admit(traveler.id, traveler.demographic)
}

/// Remove `user` from the roster.
///
/// Membership is frozen once the trip departs: if `start` is known and `now`
/// has reached it, fails with [`RosterError::MembershipLocked`].  A trip with
/// no start time never locks.  Guides are never participants, so this
/// operation cannot touch a trip's guide.
pub fn leave(
    roster: &mut TripRoster,
    start: Option<Timestamp>,
    now: Timestamp,
    user: UserId,
) -> RosterResult<()> {
    if let Some(start) = start {
        if now >= start {
            return Err(RosterError::MembershipLocked);
        }
    }
    roster.remove(user).map(|_| ())
}
