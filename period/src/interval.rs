use std::cmp::Ordering;
use std::fmt;

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::bound::{self, Bound};
use crate::Instant;

/// A single contiguous span of the time line.
///
/// Construction checks the bounds: an interval whose left bound lies after its right bound (or
/// which only touches a single instant through an exclusive end) collapses to the canonical
/// empty interval and carries the `empty` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Interval {
    left: Bound,
    right: Bound,
    empty: bool,
}

impl Interval {
    pub fn new(left: Bound, right: Bound) -> Self {
        if bound::spans_instant(&left, &right) {
            Self { left, right, empty: false }
        } else {
            Self::empty()
        }
    }

    pub fn empty() -> Self { Self { left: Bound::Unbounded, right: Bound::Unbounded, empty: true } }

    /// `]-oo;+oo[`
    pub fn full() -> Self { Self { left: Bound::Unbounded, right: Bound::Unbounded, empty: false } }

    pub fn left(&self) -> &Bound { &self.left }

    pub fn right(&self) -> &Bound { &self.right }

    pub fn is_empty(&self) -> bool { self.empty }

    pub fn is_full(&self) -> bool { !self.empty && self.left.is_unbounded() && self.right.is_unbounded() }

    pub fn contains(&self, instant: &Instant) -> bool {
        !self.empty && bound::admits_from_left(&self.left, instant) && bound::admits_from_right(&self.right, instant)
    }

    /// The overlap of two intervals, possibly empty.
    pub fn intersection(&self, other: &Interval) -> Interval {
        if self.empty || other.empty {
            return Interval::empty();
        }
        let left = match bound::cmp_left(&self.left, &other.left) {
            Ordering::Less => other.left,
            _ => self.left,
        };
        let right = match bound::cmp_right(&self.right, &other.right) {
            Ordering::Greater => other.right,
            _ => self.right,
        };
        Interval::new(left, right)
    }

    pub(crate) fn cmp_start(&self, other: &Interval) -> Ordering { bound::cmp_left(&self.left, &other.left) }

    /// Absorbs `later`, which must start no earlier than `self` and leave no gap after it.
    pub(crate) fn extend_to(&mut self, later: &Interval) {
        if bound::cmp_right(&later.right, &self.right) == Ordering::Greater {
            self.right = later.right;
        }
    }

    pub(crate) fn leaves_gap_before(&self, later: &Interval) -> bool { bound::leaves_gap(&self.right, &later.left) }
}

pub(crate) fn format_instant(instant: &Instant) -> String { instant.to_rfc3339_opts(SecondsFormat::AutoSi, true) }

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.empty {
            return write!(f, "][");
        }
        match &self.left {
            Bound::Included(t) => write!(f, "[{}", format_instant(t))?,
            Bound::Excluded(t) => write!(f, "]{}", format_instant(t))?,
            Bound::Unbounded => write!(f, "]-oo")?,
        }
        write!(f, ";")?;
        match &self.right {
            Bound::Included(t) => write!(f, "{}]", format_instant(t)),
            Bound::Excluded(t) => write!(f, "{}[", format_instant(t)),
            Bound::Unbounded => write!(f, "+oo["),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(hour: u32) -> Instant { Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap() }

    #[test]
    fn test_reversed_bounds_are_empty() {
        let interval = Interval::new(Bound::Included(at(5)), Bound::Included(at(3)));
        assert!(interval.is_empty());
        assert_eq!(interval, Interval::empty());
        assert_ne!(Interval::empty(), Interval::full());
    }

    #[test]
    fn test_contains_honors_inclusivity() {
        let interval = Interval::new(Bound::Included(at(1)), Bound::Excluded(at(3)));
        assert!(interval.contains(&at(1)));
        assert!(interval.contains(&at(2)));
        assert!(!interval.contains(&at(3)));
        assert!(!interval.contains(&at(0)));
        assert!(Interval::full().contains(&at(23)));
        assert!(!Interval::empty().contains(&at(1)));
    }

    #[test]
    fn test_intersection() {
        let a = Interval::new(Bound::Included(at(1)), Bound::Included(at(5)));
        let b = Interval::new(Bound::Excluded(at(3)), Bound::Unbounded);
        assert_eq!(a.intersection(&b), Interval::new(Bound::Excluded(at(3)), Bound::Included(at(5))));

        let c = Interval::new(Bound::Unbounded, Bound::Excluded(at(1)));
        assert!(a.intersection(&c).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::full().to_string(), "]-oo;+oo[");
        assert_eq!(Interval::empty().to_string(), "][");
        let interval = Interval::new(Bound::Included(at(1)), Bound::Excluded(at(2)));
        assert_eq!(interval.to_string(), "[2024-01-01T01:00:00Z;2024-01-01T02:00:00Z[");
    }
}
