//! `TripBoard` — the registry of live trips and their coordination lock.
//!
//! # Locking model
//!
//! - The registry map is behind an `RwLock`; trip lookup takes the read side,
//!   registration the write side.
//! - Each trip sits behind its own `Mutex`.  Every operation locks exactly
//!   one trip, runs its checks, mutates, and releases — lock hold time is
//!   O(participants), and no I/O happens inside a critical section.
//! - Guide assignment is the one operation whose precondition reads *other*
//!   trips.  It serializes per guide on a dedicated gate, snapshots the
//!   guide's other assignments (locking those trips one at a time, never
//!   nested), then locks the target trip to validate and commit.  Lock order
//!   is always guide-gate → one trip mutex, so the board cannot deadlock,
//!   and two racing assignments of the same guide cannot both commit
//!   overlapping windows.
//!
//! Poisoned locks are recovered with `into_inner`: critical sections are
//! small, in-memory, and panic-free under valid preconditions, so a poison
//! flag carries no actionable information about torn state.

use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use gt_core::{ExpenseId, Timestamp, TripId, Traveler, UserId};
use gt_roster::allocator;
use gt_requests::{RequestStatus, ReviewDecision, respond, submit};
use gt_schedule::{
    AttendanceStatus, GuideAssignment, GuideItinerary, check_guide_assignment, mark_attendance,
};
use gt_settle::{ExpenseDraft, Transfer, net_balances, settle};
use rustc_hash::FxHashMap;

use crate::error::{BoardError, BoardResult};
use crate::record::{TripConfig, TripRecord};

type SharedTrip = Arc<Mutex<TripRecord>>;

/// Registry of live trips; all coordinated operations go through here.
#[derive(Default)]
pub struct TripBoard {
    trips: RwLock<FxHashMap<TripId, SharedTrip>>,
    /// Per-guide assignment gates, created on first use.
    guide_gates: Mutex<FxHashMap<UserId, Arc<Mutex<()>>>>,
}

/// Recover a guard from a possibly poisoned lock.
fn relock<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl TripBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registry ──────────────────────────────────────────────────────────

    /// Register a trip and seat its creator.
    pub fn open_trip(&self, config: TripConfig, creator: &Traveler) -> BoardResult<()> {
        let id = config.id;
        let mut trips = self.trips.write().unwrap_or_else(|p| p.into_inner());
        if trips.contains_key(&id) {
            return Err(BoardError::TripExists(id));
        }
        trips.insert(id, Arc::new(Mutex::new(TripRecord::open(config, creator))));
        Ok(())
    }

    pub fn contains(&self, trip: TripId) -> bool {
        self.trips
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .contains_key(&trip)
    }

    pub fn len(&self) -> usize {
        self.trips.read().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of all registered trips, in no particular order.
    pub fn trip_ids(&self) -> Vec<TripId> {
        self.trips
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .keys()
            .copied()
            .collect()
    }

    fn shared(&self, trip: TripId) -> BoardResult<SharedTrip> {
        self.trips
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .get(&trip)
            .cloned()
            .ok_or(BoardError::TripNotFound(trip))
    }

    /// Run `f` against the trip's record under its lock (read-only access
    /// for display and reporting).
    pub fn with_trip<T>(&self, trip: TripId, f: impl FnOnce(&TripRecord) -> T) -> BoardResult<T> {
        let shared = self.shared(trip)?;
        let record = relock(&shared);
        Ok(f(&record))
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Direct join.  Checks and insert run under the trip lock.
    pub fn join(&self, trip: TripId, traveler: &Traveler) -> BoardResult<()> {
        let shared = self.shared(trip)?;
        let mut record = relock(&shared);
        allocator::join(&mut record.roster, traveler)?;
        Ok(())
    }

    /// Leave before departure.  Removes the participant's attendance record
    /// with their seat, keeping attendance keys ⊆ participants.
    pub fn leave(&self, trip: TripId, user: UserId, now: Timestamp) -> BoardResult<()> {
        let shared = self.shared(trip)?;
        let mut record = relock(&shared);
        let start = record.start();
        allocator::leave(&mut record.roster, start, now, user)?;
        record.attendance.clear(user);
        Ok(())
    }

    // ── Join requests ─────────────────────────────────────────────────────

    /// Submit a join request for a private trip.
    pub fn submit_join_request(&self, trip: TripId, requester: &Traveler) -> BoardResult<()> {
        let shared = self.shared(trip)?;
        let mut guard = relock(&shared);
        let record = &mut *guard;
        submit(
            &mut record.requests,
            &record.roster,
            record.visibility,
            record.creator,
            requester,
        )?;
        Ok(())
    }

    /// Creator decision on a pending request.  Acceptance re-validates
    /// capacity and policy against the roster as it stands *now*, under the
    /// same lock that admits the requester.
    pub fn respond_to_request(
        &self,
        trip: TripId,
        acting: UserId,
        requester: UserId,
        decision: ReviewDecision,
    ) -> BoardResult<RequestStatus> {
        let shared = self.shared(trip)?;
        let mut guard = relock(&shared);
        let record = &mut *guard;
        let status = respond(
            &mut record.requests,
            &mut record.roster,
            record.creator,
            acting,
            requester,
            decision,
        )?;
        Ok(status)
    }

    // ── Guide scheduling ──────────────────────────────────────────────────

    /// Assign `guide` to `trip`, rejecting overlaps with the guide's other
    /// live assignments.  Reassignment overwrites silently.
    pub fn assign_guide(&self, trip: TripId, guide: UserId, now: Timestamp) -> BoardResult<()> {
        // Serialize all assignment activity for this guide.
        let gate = self.guide_gate(guide);
        let _gate = relock(&gate);

        // Snapshot the guide's other assignments; one short-lived trip lock
        // at a time, never nested with the target's.
        let existing = self.assignments_of(guide, Some(trip));

        let shared = self.shared(trip)?;
        let mut record = relock(&shared);
        check_guide_assignment(trip, record.visibility, record.window, &existing, now)?;
        record.guide = Some(guide);
        Ok(())
    }

    /// The guide's assignments partitioned into active and completed — the
    /// guide-dashboard view.
    pub fn guide_assignments(&self, guide: UserId, now: Timestamp) -> GuideItinerary {
        GuideItinerary::partition(self.assignments_of(guide, None), now)
    }

    fn guide_gate(&self, guide: UserId) -> Arc<Mutex<()>> {
        let mut gates = relock(&self.guide_gates);
        gates.entry(guide).or_default().clone()
    }

    /// Collect `(trip, window)` for every trip assigned to `guide`, skipping
    /// `except` (the trip about to be re-validated).
    fn assignments_of(&self, guide: UserId, except: Option<TripId>) -> Vec<GuideAssignment> {
        let shared: Vec<SharedTrip> = {
            let trips = self.trips.read().unwrap_or_else(|p| p.into_inner());
            trips
                .iter()
                .filter(|(id, _)| Some(**id) != except)
                .map(|(_, t)| t.clone())
                .collect()
        };

        let mut assignments = Vec::new();
        for trip in &shared {
            let record = relock(trip);
            if record.guide == Some(guide) {
                // Guides are only ever assigned to scheduled trips, so the
                // window is present; skip defensively if not.
                if let Some(window) = record.window {
                    assignments.push(GuideAssignment::new(record.id, window));
                }
            }
        }
        assignments
    }

    // ── Attendance ────────────────────────────────────────────────────────

    /// Guide-only idempotent attendance upsert.
    pub fn mark_attendance(
        &self,
        trip: TripId,
        acting: UserId,
        target: UserId,
        status: AttendanceStatus,
    ) -> BoardResult<()> {
        let shared = self.shared(trip)?;
        let mut guard = relock(&shared);
        let record = &mut *guard;
        mark_attendance(
            &mut record.attendance,
            &record.roster,
            record.guide,
            acting,
            target,
            status,
        )?;
        Ok(())
    }

    // ── Expenses ──────────────────────────────────────────────────────────

    /// Record an expense paid by `payer`.  Splits are sanitized against the
    /// membership read under the same lock.
    pub fn add_expense(
        &self,
        trip: TripId,
        payer: UserId,
        draft: &ExpenseDraft,
        now: Timestamp,
    ) -> BoardResult<ExpenseId> {
        let shared = self.shared(trip)?;
        let mut guard = relock(&shared);
        let record = &mut *guard;
        let members = record.roster.members().to_vec();
        let id = record.expenses.add(payer, &members, draft, now)?;
        Ok(id)
    }

    /// Rewrite an expense.  Payer-only.
    pub fn update_expense(
        &self,
        trip: TripId,
        expense: ExpenseId,
        acting: UserId,
        draft: &ExpenseDraft,
    ) -> BoardResult<()> {
        let shared = self.shared(trip)?;
        let mut guard = relock(&shared);
        let record = &mut *guard;
        let members = record.roster.members().to_vec();
        record.expenses.update(expense, acting, &members, draft)?;
        Ok(())
    }

    /// Delete an expense.  Payer-only.
    pub fn remove_expense(
        &self,
        trip: TripId,
        expense: ExpenseId,
        acting: UserId,
    ) -> BoardResult<()> {
        let shared = self.shared(trip)?;
        let mut record = relock(&shared);
        record.expenses.remove(expense, acting)?;
        Ok(())
    }

    // ── Settlement ────────────────────────────────────────────────────────

    /// Per-member net balances, computed over a snapshot taken under the
    /// trip lock.
    pub fn balances(&self, trip: TripId) -> BoardResult<Vec<(UserId, f64)>> {
        self.with_trip(trip, |record| {
            net_balances(record.expenses.records(), record.roster.members())
        })
    }

    /// The trip's settlement transfers, computed over a snapshot taken under
    /// the trip lock.
    pub fn settlement(&self, trip: TripId) -> BoardResult<Vec<Transfer>> {
        self.with_trip(trip, |record| {
            settle(record.expenses.records(), record.roster.members())
        })
    }

    /// Settle every registered trip on the Rayon pool.
    ///
    /// Settlement is pure over each trip's snapshot, so trips parallelize
    /// freely; results arrive in unspecified order.
    #[cfg(feature = "parallel")]
    pub fn settle_all(&self) -> Vec<(TripId, Vec<Transfer>)> {
        use rayon::prelude::*;

        let shared: Vec<SharedTrip> = {
            let trips = self.trips.read().unwrap_or_else(|p| p.into_inner());
            trips.values().cloned().collect()
        };

        shared
            .par_iter()
            .map(|trip| {
                let record = relock(trip);
                let transfers = settle(record.expenses.records(), record.roster.members());
                (record.id, transfers)
            })
            .collect()
    }
}
