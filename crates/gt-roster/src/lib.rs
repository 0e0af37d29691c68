//! `gt-roster` — trip participant roster and membership allocation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`roster`]    | `TripRoster` — capacity, policy, keyed participant set |
//! | [`allocator`] | `join` / `leave` — the direct membership path         |
//! | [`error`]     | `AdmitError`, `RosterError`, `RosterResult`           |
//!
//! The roster is the leaf data structure every allocator works against.  Its
//! check-then-insert methods take `&mut self`, so whoever owns the roster
//! (in this workspace, `gt-board` behind a per-trip mutex) gets the required
//! atomicity from exclusive access — there is no window between a capacity or
//! policy check and the insert it guards.

pub mod allocator;
pub mod error;
pub mod roster;


pub use allocator::{join, leave};
pub use error::{AdmitError, RosterError, RosterResult};
pub use roster::{DEFAULT_CAPACITY, TripRoster};
