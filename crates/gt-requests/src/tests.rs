//! Unit tests for the join-request workflow.

use gt_core::{BalancePolicy, Demographic, Role, Traveler, UserId, Visibility};
use gt_roster::{AdmitError, TripRoster};

use crate::{RequestError, RequestLog, RequestStatus, ReviewDecision, respond, submit};

// ── Helpers ───────────────────────────────────────────────────────────────────

const CREATOR: UserId = UserId(1);

fn member(id: u64, demographic: Demographic) -> Traveler {
    Traveler::member(UserId(id), demographic)
}

/// A private trip: roster seeded with the creator, empty log.
fn private_trip(capacity: u32, policy: BalancePolicy) -> (TripRoster, RequestLog) {
    let mut roster = TripRoster::new(capacity, policy);
    roster.insert_unchecked(CREATOR, Demographic::Female);
    (roster, RequestLog::new())
}

fn submit_ok(log: &mut RequestLog, roster: &TripRoster, requester: &Traveler) {
    submit(log, roster, Visibility::Private, CREATOR, requester).unwrap();
}

// ── submit ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod submitting {
    use super::*;

    #[test]
    fn pending_entry_recorded() {
        let (roster, mut log) = private_trip(4, BalancePolicy::Open);
        submit_ok(&mut log, &roster, &member(2, Demographic::Male));
        assert_eq!(log.status_of(UserId(2)), Some(RequestStatus::Pending));
        assert_eq!(log.pending().collect::<Vec<_>>(), vec![UserId(2)]);
    }

    #[test]
    fn public_trip_rejected() {
        let (roster, mut log) = private_trip(4, BalancePolicy::Open);
        let err = submit(&mut log, &roster, Visibility::Public, CREATOR, &member(2, Demographic::Male));
        assert_eq!(err, Err(RequestError::NotPrivate));
    }

    #[test]
    fn guide_rejected() {
        let (roster, mut log) = private_trip(4, BalancePolicy::Open);
        let guide = Traveler::new(UserId(9), Role::Guide, Demographic::Female);
        let err = submit(&mut log, &roster, Visibility::Private, CREATOR, &guide);
        assert_eq!(err, Err(RequestError::RoleNotEligible));
    }

    #[test]
    fn full_trip_rejected() {
        let (mut roster, mut log) = private_trip(1, BalancePolicy::Open);
        assert!(roster.is_full());
        let err = submit(&mut log, &mut roster, Visibility::Private, CREATOR, &member(2, Demographic::Male));
        assert_eq!(err, Err(AdmitError::CapacityExceeded { capacity: 1 }.into()));
    }

    #[test]
    fn self_request_rejected() {
        let (roster, mut log) = private_trip(4, BalancePolicy::Open);
        let creator = Traveler::member(CREATOR, Demographic::Female);
        let err = submit(&mut log, &roster, Visibility::Private, CREATOR, &creator);
        assert_eq!(err, Err(RequestError::SelfRequest));
    }

    #[test]
    fn duplicate_pending_rejected() {
        let (roster, mut log) = private_trip(4, BalancePolicy::Open);
        let alice = member(2, Demographic::Female);
        submit_ok(&mut log, &roster, &alice);
        let err = submit(&mut log, &roster, Visibility::Private, CREATOR, &alice);
        assert_eq!(err, Err(RequestError::DuplicateRequest(UserId(2))));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn policy_checked_at_submit() {
        let (roster, mut log) = private_trip(4, BalancePolicy::FemaleOnly);
        let err = submit(&mut log, &roster, Visibility::Private, CREATOR, &member(2, Demographic::Male));
        assert_eq!(
            err,
            Err(AdmitError::PolicyViolation { policy: BalancePolicy::FemaleOnly }.into())
        );
        assert!(log.is_empty());
    }

    #[test]
    fn resubmit_after_rejection() {
        let (mut roster, mut log) = private_trip(4, BalancePolicy::Open);
        let bob = member(2, Demographic::Male);
        submit_ok(&mut log, &roster, &bob);
        respond(&mut log, &mut roster, CREATOR, CREATOR, bob.id, ReviewDecision::Reject).unwrap();

        submit_ok(&mut log, &roster, &bob);
        assert_eq!(log.status_of(bob.id), Some(RequestStatus::Pending));
        // Re-submission re-marks the existing entry, it does not duplicate it.
        assert_eq!(log.len(), 1);
    }
}

// ── respond ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod responding {
    use super::*;

    #[test]
    fn only_creator_may_respond() {
        let (mut roster, mut log) = private_trip(4, BalancePolicy::Open);
        submit_ok(&mut log, &roster, &member(2, Demographic::Male));
        let err = respond(&mut log, &mut roster, CREATOR, UserId(99), UserId(2), ReviewDecision::Accept);
        assert_eq!(err, Err(RequestError::NotAuthorized));
    }

    #[test]
    fn unknown_request_not_found() {
        let (mut roster, mut log) = private_trip(4, BalancePolicy::Open);
        let err = respond(&mut log, &mut roster, CREATOR, CREATOR, UserId(5), ReviewDecision::Accept);
        assert_eq!(err, Err(RequestError::RequestNotFound(UserId(5))));
    }

    #[test]
    fn reject_never_mutates_roster() {
        let (mut roster, mut log) = private_trip(4, BalancePolicy::Open);
        submit_ok(&mut log, &roster, &member(2, Demographic::Male));
        let before = roster.members().to_vec();
        let status =
            respond(&mut log, &mut roster, CREATOR, CREATOR, UserId(2), ReviewDecision::Reject).unwrap();
        assert_eq!(status, RequestStatus::Rejected);
        assert_eq!(roster.members(), &before[..]);
    }

    #[test]
    fn reject_is_terminal() {
        let (mut roster, mut log) = private_trip(4, BalancePolicy::Open);
        submit_ok(&mut log, &roster, &member(2, Demographic::Male));
        respond(&mut log, &mut roster, CREATOR, CREATOR, UserId(2), ReviewDecision::Reject).unwrap();
        // A second response finds nothing pending.
        let err = respond(&mut log, &mut roster, CREATOR, CREATOR, UserId(2), ReviewDecision::Accept);
        assert_eq!(err, Err(RequestError::RequestNotFound(UserId(2))));
    }

    #[test]
    fn accept_admits_and_marks_terminal() {
        let (mut roster, mut log) = private_trip(4, BalancePolicy::Open);
        submit_ok(&mut log, &roster, &member(2, Demographic::Male));
        let status =
            respond(&mut log, &mut roster, CREATOR, CREATOR, UserId(2), ReviewDecision::Accept).unwrap();
        assert_eq!(status, RequestStatus::Accepted);
        assert!(roster.contains(UserId(2)));
    }

    #[test]
    fn accept_revalidates_capacity_at_approval_time() {
        let (mut roster, mut log) = private_trip(2, BalancePolicy::Open);
        submit_ok(&mut log, &roster, &member(2, Demographic::Male));
        // A direct admission lands between submit and respond.
        roster.admit(UserId(3), Demographic::Other).unwrap();
        assert!(roster.is_full());

        let err = respond(&mut log, &mut roster, CREATOR, CREATOR, UserId(2), ReviewDecision::Accept);
        assert_eq!(err, Err(AdmitError::CapacityExceeded { capacity: 2 }.into()));
        // The request survives the failed approval.
        assert_eq!(log.status_of(UserId(2)), Some(RequestStatus::Pending));
    }

    #[test]
    fn accept_revalidates_policy_at_approval_time() {
        // Creator is female; policy GenderEqual. A male request is valid at
        // submission (0M 1F → male is the minority)...
        let (mut roster, mut log) = private_trip(5, BalancePolicy::GenderEqual);
        submit_ok(&mut log, &roster, &member(2, Demographic::Male));

        // ...but two males join directly before the creator responds.
        roster.admit(UserId(3), Demographic::Male).unwrap(); // 1M 1F
        roster.admit(UserId(4), Demographic::Male).unwrap(); // 2M 1F

        let err = respond(&mut log, &mut roster, CREATOR, CREATOR, UserId(2), ReviewDecision::Accept);
        assert_eq!(
            err,
            Err(AdmitError::PolicyViolation { policy: BalancePolicy::GenderEqual }.into())
        );
        assert_eq!(log.status_of(UserId(2)), Some(RequestStatus::Pending));
    }

    #[test]
    fn entries_keep_arrival_order() {
        let (mut roster, mut log) = private_trip(6, BalancePolicy::Open);
        for id in [5u64, 3, 8] {
            submit_ok(&mut log, &roster, &member(id, Demographic::Other));
        }
        respond(&mut log, &mut roster, CREATOR, CREATOR, UserId(3), ReviewDecision::Accept).unwrap();

        let order: Vec<(u64, RequestStatus)> =
            log.entries().map(|(u, s)| (u.0, s)).collect();
        assert_eq!(
            order,
            vec![
                (5, RequestStatus::Pending),
                (3, RequestStatus::Accepted),
                (8, RequestStatus::Pending),
            ]
        );
    }
}
