//! `gt-settle` — shared expenses and their settlement.
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`expense`] | `Expense`, `ExpenseDraft`, `ExpenseBook` (payer-owned CRUD) |
//! | [`settle`]  | `net_balances`, `settle`, `Transfer`, `BALANCE_EPSILON`   |
//! | [`loader`]  | CSV expense import                                        |
//! | [`error`]   | `ExpenseError`, `ExpenseResult`                           |
//!
//! # Settlement is pure
//!
//! [`settle::settle`] is a side-effect-free function over a snapshot of
//! expenses and the member list.  It needs no locking of its own; callers
//! that want a consistent snapshot read it under the same lock as any
//! concurrent expense mutation (`gt-board` does exactly that).
//!
//! # Determinism over minimality
//!
//! The transfer list is produced by greedy head-to-head matching in
//! first-seen member order.  It reconciles every non-zero balance to within
//! [`settle::BALANCE_EPSILON`], but it does *not* minimize the number of
//! transfers — that approximation is deliberate and kept bit-compatible with
//! the behavior downstream consumers already display.

pub mod error;
pub mod expense;
pub mod loader;
pub mod settle;


pub use error::{ExpenseError, ExpenseResult};
pub use expense::{Expense, ExpenseBook, ExpenseDraft};
pub use loader::{load_expenses_path, load_expenses_reader};
pub use settle::{BALANCE_EPSILON, Transfer, net_balances, settle};
