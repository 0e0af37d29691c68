//! `gt-requests` — the join-request workflow for private trips.
//!
//! Private trips do not admit directly: a traveler submits a request, the
//! trip creator accepts or rejects it, and only acceptance mutates the
//! roster.  Acceptance is asynchronous relative to submission, so the
//! capacity and balance checks run **again at approval time** against
//! membership as it stands in that moment — a request that was fine when
//! submitted can legitimately fail later because other admissions moved the
//! balance or filled the last seat.
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`workflow`] | `RequestLog`, `submit`, `respond`               |
//! | [`error`]    | `RequestError`, `RequestResult`                 |

pub mod error;
pub mod workflow;

#[cfg(test)]
mod tests;

pub use error::{RequestError, RequestResult};
pub use workflow::{RequestLog, RequestStatus, ReviewDecision, respond, submit};
