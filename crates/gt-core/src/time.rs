//! Trip time model.
//!
//! # Design
//!
//! Time is a plain Unix-seconds `Timestamp`.  The core never reads the system
//! clock: every operation that depends on "now" (membership locking, completed
//! -trip checks) takes it as an explicit argument, so behavior is fully
//! deterministic under test and the caller decides what "now" means.
//!
//! A trip's active window is `[start, start + duration_days]` at day
//! granularity.  Overlap between two windows is closed/closed: a trip that
//! ends the day another starts still conflicts.  Using integer seconds keeps
//! all window arithmetic exact with no datetime dependency.

use std::fmt;

/// Seconds in one day.
pub const SECS_PER_DAY: i64 = 86_400;

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// An absolute point in time, as Unix seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The timestamp `days` whole days after `self`.
    #[inline]
    pub fn plus_days(self, days: u32) -> Timestamp {
        Timestamp(self.0 + days as i64 * SECS_PER_DAY)
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

// ── TripWindow ────────────────────────────────────────────────────────────────

/// A trip's scheduled active interval: a start instant plus a whole-day
/// duration.
///
/// `duration_days` may be zero (a day trip): the window is then the single
/// instant `start`, which still conflicts with any window containing it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripWindow {
    /// When the trip departs.
    pub start: Timestamp,
    /// How many whole days the trip runs past `start`.
    pub duration_days: u32,
}

impl TripWindow {
    pub fn new(start: Timestamp, duration_days: u32) -> Self {
        Self { start, duration_days }
    }

    /// The window's end instant: `start + duration_days`.
    #[inline]
    pub fn end(&self) -> Timestamp {
        self.start.plus_days(self.duration_days)
    }

    /// `true` once the window's end has passed.  Completed trips do not block
    /// new guide assignments.
    #[inline]
    pub fn is_completed(&self, now: Timestamp) -> bool {
        self.end() < now
    }

    /// `true` once the trip has departed (membership is then locked).
    #[inline]
    pub fn has_started(&self, now: Timestamp) -> bool {
        now >= self.start
    }

    /// Closed/closed interval overlap at day granularity.
    ///
    /// A trip ending the day another starts counts as conflicting — guides
    /// cannot be expected to finish one group and depart with the next on the
    /// same day.
    #[inline]
    pub fn overlaps(&self, other: &TripWindow) -> bool {
        self.start <= other.end() && self.end() >= other.start
    }
}

impl fmt::Display for TripWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} +{}d]", self.start, self.duration_days)
    }
}
