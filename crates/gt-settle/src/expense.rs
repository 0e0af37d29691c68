//! Expense records and the per-trip expense book.
//!
//! Expenses are owned by whoever paid them: only the payer may edit or
//! delete a record.  The split list is sanitized on every write — entries
//! that are not current trip members are dropped, and the payer is always
//! part of the split (they consumed a share of what they bought).
//!
//! Amounts are `f64` and stay unrounded through every computation; rounding
//! happens at display time only, so error cannot compound across records.

use gt_core::{ExpenseId, Timestamp, TripId, UserId};

use crate::error::{ExpenseError, ExpenseResult};

/// One shared expense.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expense {
    pub id: ExpenseId,
    pub trip: TripId,
    pub title: String,
    /// Positive, currency-agnostic amount.
    pub amount: f64,
    pub paid_by: UserId,
    /// Members sharing this expense.  Non-empty; always includes `paid_by`.
    pub split_among: Vec<UserId>,
    pub date: Timestamp,
}

/// Caller-supplied fields for creating or editing an expense.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: f64,
    /// Requested split.  Sanitized against current trip membership.
    pub split_among: Vec<UserId>,
    /// `None` means "dated now".
    pub date: Option<Timestamp>,
}

impl ExpenseDraft {
    fn validate(&self) -> ExpenseResult<()> {
        if self.title.trim().is_empty() {
            return Err(ExpenseError::Validation("title is required".into()));
        }
        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(ExpenseError::Validation(format!(
                "amount must be a positive number, got {}",
                self.amount
            )));
        }
        Ok(())
    }

    /// Keep only current members, dedup, and make sure the payer is present.
    fn sanitized_split(&self, payer: UserId, members: &[UserId]) -> Vec<UserId> {
        let mut split: Vec<UserId> = Vec::with_capacity(self.split_among.len() + 1);
        for &user in &self.split_among {
            if members.contains(&user) && !split.contains(&user) {
                split.push(user);
            }
        }
        if !split.contains(&payer) {
            split.push(payer);
        }
        split
    }
}

// ── ExpenseBook ───────────────────────────────────────────────────────────────

/// One trip's expense records, in creation order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpenseBook {
    trip: TripId,
    records: Vec<Expense>,
    next_id: u64,
}

impl ExpenseBook {
    pub fn new(trip: TripId) -> Self {
        Self { trip, records: Vec::new(), next_id: 0 }
    }

    pub fn trip(&self) -> TripId {
        self.trip
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in creation order.
    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Record a new expense paid by `payer`.
    ///
    /// `members` is the trip's current participant list (split sanitization
    /// input); `now` dates the record when the draft carries no date.
    pub fn add(
        &mut self,
        payer: UserId,
        members: &[UserId],
        draft: &ExpenseDraft,
        now: Timestamp,
    ) -> ExpenseResult<ExpenseId> {
        draft.validate()?;
        let id = ExpenseId(self.next_id);
        self.next_id += 1;
        self.records.push(Expense {
            id,
            trip: self.trip,
            title: draft.title.clone(),
            amount: draft.amount,
            paid_by: payer,
            split_among: draft.sanitized_split(payer, members),
            date: draft.date.unwrap_or(now),
        });
        Ok(id)
    }

    /// Rewrite an existing expense.  Payer-only; the payer itself never
    /// changes.  A draft without a date keeps the record's original date.
    pub fn update(
        &mut self,
        id: ExpenseId,
        acting: UserId,
        members: &[UserId],
        draft: &ExpenseDraft,
    ) -> ExpenseResult<()> {
        draft.validate()?;
        let record = self
            .records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ExpenseError::NotFound(id))?;
        if record.paid_by != acting {
            return Err(ExpenseError::NotAuthorized);
        }
        record.title = draft.title.clone();
        record.amount = draft.amount;
        record.split_among = draft.sanitized_split(record.paid_by, members);
        if let Some(date) = draft.date {
            record.date = date;
        }
        Ok(())
    }

    /// Delete an expense.  Payer-only.  Returns the removed record.
    pub fn remove(&mut self, id: ExpenseId, acting: UserId) -> ExpenseResult<Expense> {
        let idx = self
            .records
            .iter()
            .position(|e| e.id == id)
            .ok_or(ExpenseError::NotFound(id))?;
        if self.records[idx].paid_by != acting {
            return Err(ExpenseError::NotAuthorized);
        }
        Ok(self.records.remove(idx))
    }
}
