//! `TripRoster` — one trip's participant set under capacity and balance
//! constraints.
//!
//! # Representation
//!
//! Participants live in two structures kept in lockstep:
//!
//! - `seating: Vec<UserId>` — insertion order, preserved for display;
//! - `demographics: FxHashMap<UserId, Demographic>` — O(1) membership lookup
//!   and the demographic inputs for policy evaluation.
//!
//! The map makes the uniqueness invariant structural: a second insert of the
//! same id is impossible to express, not merely forbidden by convention.
//!
//! # Invariants
//!
//! - `seating.len() == demographics.len() ≤ capacity` after every operation.
//! - Under `GenderEqual`, `|male − female| ≤ 1` (maintained, never repaired).

use gt_core::{BalancePolicy, Demographic, DemographicCounts, UserId};
use rustc_hash::FxHashMap;

use crate::error::{AdmitError, RosterError, RosterResult};

/// Default participant capacity when the creator specifies none.
pub const DEFAULT_CAPACITY: u32 = 5;

/// One trip's participant set, capacity, and balance policy.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRoster {
    capacity: u32,
    policy: BalancePolicy,
    /// Participants in insertion order (display order).
    seating: Vec<UserId>,
    /// Participant → demographic, for O(1) lookup and policy tallies.
    demographics: FxHashMap<UserId, Demographic>,
}

impl TripRoster {
    /// Create an empty roster.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `capacity == 0`.
    pub fn new(capacity: u32, policy: BalancePolicy) -> Self {
        debug_assert!(capacity > 0, "capacity must be positive");
        Self {
            capacity,
            policy,
            seating: Vec::new(),
            demographics: FxHashMap::default(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn policy(&self) -> BalancePolicy {
        self.policy
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seating.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seating.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.seating.len() >= self.capacity as usize
    }

    #[inline]
    pub fn contains(&self, user: UserId) -> bool {
        self.demographics.contains_key(&user)
    }

    /// Participants in insertion order.
    pub fn members(&self) -> &[UserId] {
        &self.seating
    }

    pub fn demographic_of(&self, user: UserId) -> Option<Demographic> {
        self.demographics.get(&user).copied()
    }

    /// Male/female tallies over current participants.  O(participants).
    pub fn counts(&self) -> DemographicCounts {
        DemographicCounts::tally(self.demographics.values().copied())
    }

    // ── Admission checks ──────────────────────────────────────────────────

    /// Is there a seat left?
    pub fn check_capacity(&self) -> Result<(), AdmitError> {
        if self.is_full() {
            return Err(AdmitError::CapacityExceeded { capacity: self.capacity });
        }
        Ok(())
    }

    /// Does the balance policy admit `joining` against current counts?
    pub fn check_policy(&self, joining: Demographic) -> Result<(), AdmitError> {
        if !self.policy.admits(self.counts(), joining) {
            return Err(AdmitError::PolicyViolation { policy: self.policy });
        }
        Ok(())
    }

    /// Capacity then policy — the admission checks shared by direct join and
    /// join-request approval.
    pub fn check_admission(&self, joining: Demographic) -> Result<(), AdmitError> {
        self.check_capacity()?;
        self.check_policy(joining)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Admit `user`: uniqueness, capacity, and policy checks plus the insert,
    /// all under one `&mut` borrow.
    pub fn admit(&mut self, user: UserId, demographic: Demographic) -> RosterResult<()> {
        if self.contains(user) {
            return Err(RosterError::AlreadyMember(user));
        }
        self.check_admission(demographic)?;
        self.insert_unchecked(user, demographic);
        Ok(())
    }

    /// Insert without capacity or policy checks.
    ///
    /// Used exactly once per trip: seating the creator at trip creation.
    /// The founder defines the group, so no policy can exclude them; a second
    /// insert of a present id is a no-op.
    pub fn insert_unchecked(&mut self, user: UserId, demographic: Demographic) {
        if self.demographics.insert(user, demographic).is_none() {
            self.seating.push(user);
        }
    }

    /// Remove `user` and return their demographic.
    pub fn remove(&mut self, user: UserId) -> RosterResult<Demographic> {
        let demographic = self
            .demographics
            .remove(&user)
            .ok_or(RosterError::NotAParticipant(user))?;
        self.seating.retain(|&id| id != user);
        Ok(demographic)
    }
}

impl Default for TripRoster {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, BalancePolicy::Open)
    }
}
