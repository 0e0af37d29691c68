//! `gt-core` — foundational types for the `rust_gt` trip coordination
//! framework.
//!
//! This crate is a dependency of every other `gt-*` crate.  It intentionally
//! has no `gt-*` dependencies and minimal external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`ids`]       | `UserId`, `TripId`, `ExpenseId`                     |
//! | [`time`]      | `Timestamp`, `TripWindow`                           |
//! | [`traveler`]  | `Traveler`, `Role`, `Demographic`                   |
//! | [`policy`]    | `Visibility`, `BalancePolicy`, `DemographicCounts`  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod ids;
pub mod policy;
pub mod time;
pub mod traveler;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{ExpenseId, TripId, UserId};
pub use policy::{BalancePolicy, DemographicCounts, Visibility};
pub use time::{Timestamp, TripWindow};
pub use traveler::{Demographic, Role, Traveler};
