//! Per-trip attendance: an idempotent status upsert, guide-only.
//!
//! Marking keeps no history — re-marking a participant simply overwrites.
//! There is deliberately no constraint tying attendance to the trip's active
//! window; a guide may mark before, during, or after the scheduled dates.

use gt_core::UserId;
use gt_roster::TripRoster;
use rustc_hash::FxHashMap;

use crate::error::{ScheduleError, ScheduleResult};

/// Whether a participant showed up.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Lower-case label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

/// One trip's attendance records, keyed by participant.
///
/// Invariant: keys are a subset of the trip's participants.  The board
/// maintains this across membership changes by removing a leaver's entry
/// together with their seat.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttendanceSheet {
    records: FxHashMap<UserId, AttendanceStatus>,
}

impl AttendanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn status_of(&self, user: UserId) -> Option<AttendanceStatus> {
        self.records.get(&user).copied()
    }

    /// Drop a participant's record (used when they leave the trip).
    pub fn clear(&mut self, user: UserId) {
        self.records.remove(&user);
    }
}

/// Upsert `target`'s attendance on behalf of `acting`.
///
/// Only the trip's assigned guide may mark, and only actual participants can
/// be marked.  The upsert is idempotent: marking twice with the same status
/// is indistinguishable from marking once, and a different status overwrites.
pub fn mark_attendance(
    sheet: &mut AttendanceSheet,
    roster: &TripRoster,
    assigned_guide: Option<UserId>,
    acting: UserId,
    target: UserId,
    status: AttendanceStatus,
) -> ScheduleResult<()> {
    if assigned_guide != Some(acting) {
        return Err(ScheduleError::NotAssignedGuide(acting));
    }
    if !roster.contains(target) {
        return Err(ScheduleError::NotAParticipant(target));
    }
    sheet.records.insert(target, status);
    Ok(())
}
