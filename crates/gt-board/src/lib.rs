//! `gt-board` — the per-trip serialization point.
//!
//! Every trip is a single mutable resource that may receive concurrent
//! `join`, `respond`, `assign_guide`, and `mark_attendance` calls from
//! independent request handlers.  The board gives each trip its own mutex
//! and runs every read-check-write sequence entirely under it, so no second
//! admission can slip between a capacity/policy check and the insert it
//! guards.  Operations on different trips never contend.
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`record`] | `TripConfig`, `TripRecord` (one trip's aggregate)   |
//! | [`board`]  | `TripBoard` and all coordinated operations          |
//! | [`error`]  | `BoardError`, `BoardResult`                         |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Adds [`TripBoard::settle_all`] on the Rayon pool.   |

pub mod board;
pub mod error;
pub mod record;


pub use board::TripBoard;
pub use error::{BoardError, BoardResult};
pub use record::{TripConfig, TripRecord};
