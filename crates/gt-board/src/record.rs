//! One trip's aggregate state as held by the board.
//!
//! The record carries only what the coordination core reads from a trip —
//! visibility, capacity/policy (inside the roster), window, creator, guide —
//! plus the four coordinated sub-states.  Everything else on a trip
//! (destination, description, images, chat, …) belongs to external
//! collaborators and never enters this core.

use gt_core::{BalancePolicy, Timestamp, TripId, TripWindow, Traveler, UserId, Visibility};
use gt_roster::{DEFAULT_CAPACITY, TripRoster};
use gt_requests::RequestLog;
use gt_schedule::AttendanceSheet;
use gt_settle::ExpenseBook;

/// Parameters for registering a trip with the board.
#[derive(Clone, Debug)]
pub struct TripConfig {
    pub id: TripId,
    pub visibility: Visibility,
    /// Maximum participants, creator included.  Default 5.
    pub capacity: u32,
    pub policy: BalancePolicy,
    /// Scheduled window; `None` while dates are undecided (such a trip
    /// cannot take a guide and never locks membership).
    pub window: Option<TripWindow>,
}

impl TripConfig {
    /// A public, policy-free trip with the default capacity.
    pub fn public(id: TripId) -> Self {
        Self {
            id,
            visibility: Visibility::Public,
            capacity: DEFAULT_CAPACITY,
            policy: BalancePolicy::Open,
            window: None,
        }
    }

    /// A private trip with the default capacity.
    pub fn private(id: TripId) -> Self {
        Self { visibility: Visibility::Private, ..Self::public(id) }
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn policy(mut self, policy: BalancePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn window(mut self, window: TripWindow) -> Self {
        self.window = Some(window);
        self
    }
}

/// One trip's full coordinated state.
#[derive(Clone, Debug)]
pub struct TripRecord {
    pub id: TripId,
    pub creator: UserId,
    pub visibility: Visibility,
    pub window: Option<TripWindow>,
    /// The assigned escort, if any.  At most one per trip.
    pub guide: Option<UserId>,
    pub roster: TripRoster,
    pub requests: RequestLog,
    pub attendance: AttendanceSheet,
    pub expenses: ExpenseBook,
}

impl TripRecord {
    /// Build the record and seat the creator as the first participant.
    pub fn open(config: TripConfig, creator: &Traveler) -> Self {
        let mut roster = TripRoster::new(config.capacity, config.policy);
        roster.insert_unchecked(creator.id, creator.demographic);
        Self {
            id: config.id,
            creator: creator.id,
            visibility: config.visibility,
            window: config.window,
            guide: None,
            roster,
            requests: RequestLog::new(),
            attendance: AttendanceSheet::new(),
            expenses: ExpenseBook::new(config.id),
        }
    }

    /// The departure instant, when scheduled.
    #[inline]
    pub fn start(&self) -> Option<Timestamp> {
        self.window.map(|w| w.start)
    }
}
