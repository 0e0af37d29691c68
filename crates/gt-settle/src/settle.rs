//! Net balances and the greedy transfer matcher.
//!
//! # Algorithm
//!
//! 1. Every member starts at balance 0, in first-seen member order.
//! 2. Per expense: the payer's balance rises by the full amount; every split
//!    member's falls by `amount / |split|` (real division, no rounding).
//! 3. Members with balance above `ε` are creditors, below `−ε` debtors, both
//!    lists in the order the members were first seen.
//! 4. Repeatedly transfer `min(debt, credit)` between the head debtor and
//!    head creditor, advancing whichever side drops within `ε` of zero.
//!
//! The result reconciles all balances to within `ε` but is **not** the
//! theoretical minimum transfer count (that needs sorting or subset-sum
//! heuristics).  Downstream consumers already display exactly this output,
//! so the approximation — and the unsorted encounter order it depends on —
//! must not be "improved" silently.

use gt_core::UserId;
use rustc_hash::FxHashMap;

use crate::expense::Expense;

/// Balance tolerance absorbing floating-point drift, in currency units.
pub const BALANCE_EPSILON: f64 = 0.01;

/// One peer-to-peer repayment: `from` owes `to`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transfer {
    pub from: UserId,
    pub to: UserId,
    /// Always positive.
    pub amount: f64,
}

/// Per-member net balance: positive = owed money, negative = owes money.
///
/// Order: `members` first, then any id appearing only in expense records,
/// each in first-seen order.  Unknown ids are unreachable when expenses come
/// from an [`ExpenseBook`](crate::ExpenseBook) (its split sanitization keeps
/// splits within the membership), but the engine stays total regardless.
pub fn net_balances(expenses: &[Expense], members: &[UserId]) -> Vec<(UserId, f64)> {
    let mut order: Vec<UserId> = Vec::with_capacity(members.len());
    let mut index: FxHashMap<UserId, usize> = FxHashMap::default();
    let mut balances: Vec<f64> = Vec::with_capacity(members.len());

    let mut slot = |user: UserId, order: &mut Vec<UserId>, balances: &mut Vec<f64>| -> usize {
        *index.entry(user).or_insert_with(|| {
            order.push(user);
            balances.push(0.0);
            order.len() - 1
        })
    };

    for &member in members {
        slot(member, &mut order, &mut balances);
    }

    for expense in expenses {
        debug_assert!(!expense.split_among.is_empty(), "expense with empty split");
        if expense.split_among.is_empty() {
            continue;
        }
        let share = expense.amount / expense.split_among.len() as f64;
        let payer = slot(expense.paid_by, &mut order, &mut balances);
        balances[payer] += expense.amount;
        for &user in &expense.split_among {
            let i = slot(user, &mut order, &mut balances);
            balances[i] -= share;
        }
    }

    order.into_iter().zip(balances).collect()
}

/// Reduce `expenses` to a list of transfers that zeroes every net balance to
/// within [`BALANCE_EPSILON`].
pub fn settle(expenses: &[Expense], members: &[UserId]) -> Vec<Transfer> {
    let mut creditors: Vec<(UserId, f64)> = Vec::new();
    let mut debtors: Vec<(UserId, f64)> = Vec::new();

    for (user, balance) in net_balances(expenses, members) {
        if balance > BALANCE_EPSILON {
            creditors.push((user, balance));
        } else if balance < -BALANCE_EPSILON {
            debtors.push((user, -balance)); // stored as positive debt
        }
    }

    let mut transfers = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let amount = debtors[i].1.min(creditors[j].1);
        transfers.push(Transfer { from: debtors[i].0, to: creditors[j].0, amount });
        debtors[i].1 -= amount;
        creditors[j].1 -= amount;
        if debtors[i].1 < BALANCE_EPSILON {
            i += 1;
        }
        if creditors[j].1 < BALANCE_EPSILON {
            j += 1;
        }
    }
    transfers
}
