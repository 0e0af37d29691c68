//! `gt-schedule` — trip staffing: guide assignment and attendance.
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`guide`]      | `GuideAssignment`, `GuideItinerary`, overlap validation |
//! | [`attendance`] | `AttendanceSheet`, `mark_attendance`                    |
//! | [`error`]      | `ScheduleError`, `ScheduleResult`                       |
//!
//! Overlap validation is a pure function over a snapshot of the guide's other
//! assignments; the caller (in this workspace, `gt-board` holding its
//! per-guide gate) is responsible for producing that snapshot and committing
//! the assignment under whatever serialization it maintains.

pub mod attendance;
pub mod error;
pub mod guide;

#[cfg(test)]
mod tests;

pub use attendance::{AttendanceSheet, AttendanceStatus, mark_attendance};
pub use error::{ScheduleError, ScheduleResult};
pub use guide::{GuideAssignment, GuideItinerary, check_guide_assignment};
