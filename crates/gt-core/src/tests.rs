//! Unit tests for gt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{TripId, UserId};

    #[test]
    fn ordering() {
        assert!(UserId(0) < UserId(1));
        assert!(TripId(100) > TripId(99));
    }

    #[test]
    fn display() {
        assert_eq!(UserId(7).to_string(), "UserId(7)");
        assert_eq!(TripId(3).to_string(), "TripId(3)");
    }

    #[test]
    fn raw_roundtrip() {
        let id: UserId = 42u64.into();
        assert_eq!(u64::from(id), 42);
    }
}

#[cfg(test)]
mod time {
    use crate::time::SECS_PER_DAY;
    use crate::{Timestamp, TripWindow};

    fn day(n: i64) -> Timestamp {
        Timestamp(n * SECS_PER_DAY)
    }

    #[test]
    fn plus_days() {
        assert_eq!(day(10).plus_days(5), day(15));
        assert_eq!(day(0).plus_days(0), day(0));
    }

    #[test]
    fn window_end() {
        let w = TripWindow::new(day(10), 5);
        assert_eq!(w.end(), day(15));
    }

    #[test]
    fn zero_duration_window() {
        let w = TripWindow::new(day(10), 0);
        assert_eq!(w.end(), w.start);
        // A day trip still conflicts with a window containing its day.
        assert!(w.overlaps(&TripWindow::new(day(8), 4)));
    }

    #[test]
    fn completed_and_started() {
        let w = TripWindow::new(day(10), 5);
        assert!(!w.is_completed(day(15))); // end day itself is not past
        assert!(w.is_completed(day(16)));
        assert!(!w.has_started(day(9)));
        assert!(w.has_started(day(10))); // departure instant counts as started
    }

    #[test]
    fn overlap_is_closed_closed() {
        let a = TripWindow::new(day(10), 5); // [10, 15]
        // Ends the day the other starts → conflict.
        assert!(a.overlaps(&TripWindow::new(day(15), 3)));
        assert!(a.overlaps(&TripWindow::new(day(5), 5)));
        // Fully inside.
        assert!(a.overlaps(&TripWindow::new(day(12), 1)));
        // Clear of each other.
        assert!(!a.overlaps(&TripWindow::new(day(16), 2)));
        assert!(!a.overlaps(&TripWindow::new(day(2), 7)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = TripWindow::new(day(10), 5);
        let b = TripWindow::new(day(12), 3);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }
}

#[cfg(test)]
mod policy {
    use crate::{BalancePolicy, Demographic, DemographicCounts};

    fn counts(male: usize, female: usize) -> DemographicCounts {
        DemographicCounts { male, female }
    }

    #[test]
    fn tally_ignores_other() {
        use Demographic::*;
        let c = DemographicCounts::tally([Male, Female, Other, Female]);
        assert_eq!(c, counts(1, 2));
        assert_eq!(c.imbalance(), 1);
    }

    #[test]
    fn open_admits_everyone() {
        for d in [Demographic::Male, Demographic::Female, Demographic::Other] {
            assert!(BalancePolicy::Open.admits(counts(9, 0), d));
        }
    }

    #[test]
    fn female_only() {
        let p = BalancePolicy::FemaleOnly;
        assert!(p.admits(counts(0, 3), Demographic::Female));
        assert!(!p.admits(counts(0, 3), Demographic::Male));
        assert!(!p.admits(counts(0, 3), Demographic::Other));
    }

    #[test]
    fn gender_equal_balanced_admits_either() {
        let p = BalancePolicy::GenderEqual;
        assert!(p.admits(counts(2, 2), Demographic::Male));
        assert!(p.admits(counts(2, 2), Demographic::Female));
    }

    #[test]
    fn gender_equal_only_minority_when_unbalanced() {
        let p = BalancePolicy::GenderEqual;
        assert!(!p.admits(counts(3, 2), Demographic::Male));
        assert!(p.admits(counts(3, 2), Demographic::Female));
        assert!(p.admits(counts(1, 2), Demographic::Male));
        assert!(!p.admits(counts(1, 2), Demographic::Female));
    }

    #[test]
    fn gender_equal_never_constrains_other() {
        let p = BalancePolicy::GenderEqual;
        assert!(p.admits(counts(5, 0), Demographic::Other));
    }

    #[test]
    fn gender_equal_preserves_imbalance_bound() {
        // Admitting whichever demographic the policy allows never pushes the
        // imbalance past 1, from any reachable state (imbalance ≤ 1).
        let p = BalancePolicy::GenderEqual;
        for male in 0..5usize {
            for female in male.saturating_sub(1)..=(male + 1) {
                let c = counts(male, female);
                for d in [Demographic::Male, Demographic::Female] {
                    if p.admits(c, d) {
                        let next = match d {
                            Demographic::Male => counts(male + 1, female),
                            _ => counts(male, female + 1),
                        };
                        assert!(next.imbalance() <= 1, "{c:?} + {d:?} → {next:?}");
                    }
                }
            }
        }
    }
}
