//! CSV expense loader.
//!
//! # CSV format
//!
//! One row per expense, grouped by trip:
//!
//! ```csv
//! trip_id,title,amount,paid_by,split_among,date_unix_secs
//! 1,Fuel,300.0,10,10;11;12,1766000000
//! 1,Snacks,90.0,11,11;12,1766086400
//! 2,Tickets,120.5,20,20;21,1766172800
//! ```
//!
//! **`split_among`** is a `;`-separated list of user ids; an empty field
//! means "payer only" (the payer is appended when absent, matching the
//! book's sanitization).
//!
//! Record ids are assigned per trip in file order, so a loaded ledger
//! settles identically to one built through an
//! [`ExpenseBook`](crate::ExpenseBook) in the same order.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use gt_core::{ExpenseId, Timestamp, TripId, UserId};
use rustc_hash::FxHashMap;

use crate::ExpenseError;
use crate::expense::Expense;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ExpenseRow {
    trip_id:        u64,
    title:          String,
    amount:         f64,
    paid_by:        u64,
    split_among:    String,
    date_unix_secs: i64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load expenses from a CSV file, in file order.
pub fn load_expenses_path(path: &Path) -> Result<Vec<Expense>, ExpenseError> {
    let file = std::fs::File::open(path).map_err(ExpenseError::Io)?;
    load_expenses_reader(file)
}

/// Like [`load_expenses_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_expenses_reader<R: Read>(reader: R) -> Result<Vec<Expense>, ExpenseError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut next_id_by_trip: FxHashMap<u64, u64> = FxHashMap::default();
    let mut expenses = Vec::new();

    for result in csv_reader.deserialize::<ExpenseRow>() {
        let row = result.map_err(|e| ExpenseError::Parse(e.to_string()))?;
        if !(row.amount.is_finite() && row.amount > 0.0) {
            return Err(ExpenseError::Parse(format!(
                "expense {:?}: amount must be a positive number, got {}",
                row.title, row.amount
            )));
        }

        let paid_by = UserId(row.paid_by);
        let mut split_among = parse_split(&row.split_among)?;
        if !split_among.contains(&paid_by) {
            split_among.push(paid_by);
        }

        let next_id = next_id_by_trip.entry(row.trip_id).or_insert(0);
        let id = ExpenseId(*next_id);
        *next_id += 1;

        expenses.push(Expense {
            id,
            trip: TripId(row.trip_id),
            title: row.title,
            amount: row.amount,
            paid_by,
            split_among,
            date: Timestamp(row.date_unix_secs),
        });
    }

    Ok(expenses)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_split(s: &str) -> Result<Vec<UserId>, ExpenseError> {
    let mut split = Vec::new();
    for part in s.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let id = part.parse::<u64>().map_err(|_| {
            ExpenseError::Parse(format!("invalid split entry {part:?}: expected a user id (u64)"))
        })?;
        let id = UserId(id);
        if !split.contains(&id) {
            split.push(id);
        }
    }
    Ok(split)
}
