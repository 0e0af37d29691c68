//! Trip visibility and the demographic-balance admission policy.
//!
//! # The one predicate
//!
//! [`BalancePolicy::admits`] is the single pure admission predicate used by
//! both the direct-join path and the join-request approval path.  Both invoke
//! it at the moment of actual mutation (under the trip lock), never against a
//! stale snapshot — this is what keeps the `GenderEqual` imbalance bound a
//! *maintained* invariant rather than one that must be restored.
//!
//! # GenderEqual
//!
//! With equal male/female counts either demographic may join; with unequal
//! counts only the minority may.  `Other` is not constrained by this policy.
//! Post-admission the imbalance `|male − female|` therefore never exceeds 1.

use crate::Demographic;

/// Who may see and directly join a trip.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Open listing; direct join, guide-assignable.
    Public,
    /// Admission by creator-approved join request only.
    Private,
}

/// Demographic-balance rule evaluated at admission time.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BalancePolicy {
    /// No demographic constraint.
    #[default]
    Open,
    /// Only `Female` travelers are admitted.
    FemaleOnly,
    /// Keep male and female counts within one of each other.
    GenderEqual,
}

// ── DemographicCounts ─────────────────────────────────────────────────────────

/// Male/female tallies over a trip's current participants.
///
/// `Other` participants are deliberately not counted: no policy constrains
/// them, and they do not shift the `GenderEqual` balance either way.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemographicCounts {
    pub male: usize,
    pub female: usize,
}

impl DemographicCounts {
    /// Tally an iterator of participant demographics.
    pub fn tally<I: IntoIterator<Item = Demographic>>(iter: I) -> Self {
        let mut counts = Self::default();
        for d in iter {
            match d {
                Demographic::Male => counts.male += 1,
                Demographic::Female => counts.female += 1,
                Demographic::Other => {}
            }
        }
        counts
    }

    /// `|male − female|`.
    #[inline]
    pub fn imbalance(&self) -> usize {
        self.male.abs_diff(self.female)
    }
}

impl BalancePolicy {
    /// Would admitting one `joining` traveler keep this policy satisfied,
    /// given the current participant `counts`?
    ///
    /// Pure and total — the capacity check lives with the roster, not here.
    pub fn admits(&self, counts: DemographicCounts, joining: Demographic) -> bool {
        match self {
            BalancePolicy::Open => true,
            BalancePolicy::FemaleOnly => joining == Demographic::Female,
            BalancePolicy::GenderEqual => match joining {
                Demographic::Other => true,
                // Equal counts admit either side; unequal counts admit only
                // the minority, so the post-join imbalance stays ≤ 1.
                Demographic::Male => counts.male <= counts.female,
                Demographic::Female => counts.female <= counts.male,
            },
        }
    }
}
