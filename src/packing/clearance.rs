//! Pairwise clearance between a candidate and accepted marbles
//!
//! Every accepted marble is checked, even after a violation is found, so the
//! failure budget is charged once per conflicting neighbour.

use glam::DVec2;

/// Result of scanning a candidate against the accepted marbles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearanceTally {
    /// Neighbours the candidate is far enough from
    pub cleared: usize,
    /// Neighbours the candidate is too close to
    pub violations: usize,
}

impl ClearanceTally {
    /// True when every one of `checked` neighbours was cleared
    #[inline]
    pub fn is_clear(&self, checked: usize) -> bool {
        self.cleared == checked
    }
}

/// Strict test: touching at exactly `clearance` is a violation
#[inline]
pub fn clears(a: DVec2, b: DVec2, clearance: f64) -> bool {
    a.distance(b) > clearance
}

/// Scan all occupied centres without early exit
pub fn tally_clearance(candidate: DVec2, occupied: &[DVec2], clearance: f64) -> ClearanceTally {
    occupied
        .iter()
        .fold(ClearanceTally::default(), |mut tally, &other| {
            if clears(candidate, other, clearance) {
                tally.cleared += 1;
            } else {
                tally.violations += 1;
            }
            tally
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_contact_is_violation() {
        let a = DVec2::new(5.0, 0.0);
        let b = DVec2::new(7.0, 0.0);
        assert!(!clears(a, b, 2.0));
        assert!(clears(a, b, 1.999));
    }

    #[test]
    fn test_empty_set_is_clear() {
        let tally = tally_clearance(DVec2::new(1.0, 1.0), &[], 2.0);
        assert_eq!(tally, ClearanceTally::default());
        assert!(tally.is_clear(0));
    }

    #[test]
    fn test_tally_counts_every_neighbour() {
        let occupied = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(0.5, 0.5),
        ];
        let tally = tally_clearance(DVec2::new(0.5, 0.0), &occupied, 2.0);
        assert_eq!(tally.violations, 3);
        assert_eq!(tally.cleared, 1);
        assert!(!tally.is_clear(occupied.len()));
    }

    #[test]
    fn test_all_cleared() {
        let occupied = [DVec2::new(-5.0, 0.0), DVec2::new(5.0, 0.0)];
        let tally = tally_clearance(DVec2::new(0.0, 5.0), &occupied, 2.0);
        assert_eq!(tally.violations, 0);
        assert!(tally.is_clear(2));
    }
}
