use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::Instant;

/// One end of an interval.
///
/// `Unbounded` is `-oo` when it sits on the left of an interval and `+oo` when it sits on the right.
/// Infinite ends are always open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bound {
    Included(Instant),
    Excluded(Instant),
    Unbounded,
}

impl Bound {
    pub fn new(instant: Instant, inclusive: bool) -> Self {
        if inclusive {
            Bound::Included(instant)
        } else {
            Bound::Excluded(instant)
        }
    }

    pub fn instant(&self) -> Option<&Instant> {
        match self {
            Bound::Included(t) | Bound::Excluded(t) => Some(t),
            Bound::Unbounded => None,
        }
    }

    pub fn is_inclusive(&self) -> bool { matches!(self, Bound::Included(_)) }

    pub fn is_unbounded(&self) -> bool { matches!(self, Bound::Unbounded) }

    /// The bound that meets this one from the other side without overlap or gap.
    /// `[x` flips to `x[` and `x]` flips to `]x`. Infinite bounds stay infinite.
    pub fn flip(&self) -> Bound {
        match *self {
            Bound::Included(t) => Bound::Excluded(t),
            Bound::Excluded(t) => Bound::Included(t),
            Bound::Unbounded => Bound::Unbounded,
        }
    }
}

/// Orders two bounds used as left (start) bounds: `-oo` first, and at a shared instant the
/// inclusive bound starts earlier than the exclusive one.
pub(crate) fn cmp_left(a: &Bound, b: &Bound) -> Ordering {
    match (a, b) {
        (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
        (Bound::Unbounded, _) => Ordering::Less,
        (_, Bound::Unbounded) => Ordering::Greater,
        (a, b) => a.instant().cmp(&b.instant()).then_with(|| b.is_inclusive().cmp(&a.is_inclusive())),
    }
}

/// Orders two bounds used as right (end) bounds: `+oo` last, and at a shared instant the
/// exclusive bound ends earlier than the inclusive one.
pub(crate) fn cmp_right(a: &Bound, b: &Bound) -> Ordering {
    match (a, b) {
        (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
        (Bound::Unbounded, _) => Ordering::Greater,
        (_, Bound::Unbounded) => Ordering::Less,
        (a, b) => a.instant().cmp(&b.instant()).then_with(|| a.is_inclusive().cmp(&b.is_inclusive())),
    }
}

pub(crate) fn admits_from_left(bound: &Bound, instant: &Instant) -> bool {
    match bound {
        Bound::Included(t) => instant >= t,
        Bound::Excluded(t) => instant > t,
        Bound::Unbounded => true,
    }
}

pub(crate) fn admits_from_right(bound: &Bound, instant: &Instant) -> bool {
    match bound {
        Bound::Included(t) => instant <= t,
        Bound::Excluded(t) => instant < t,
        Bound::Unbounded => true,
    }
}

/// True when an interval starting at `left` and ending at `right` holds at least one instant.
pub(crate) fn spans_instant(left: &Bound, right: &Bound) -> bool {
    match (left.instant(), right.instant()) {
        (Some(l), Some(r)) => match l.cmp(r) {
            Ordering::Less => true,
            Ordering::Equal => left.is_inclusive() && right.is_inclusive(),
            Ordering::Greater => false,
        },
        _ => true,
    }
}

/// True when some instant lies strictly between an interval ending at `right` and a later
/// interval starting at `left`. Overlapping or touching ends leave no gap.
pub(crate) fn leaves_gap(right: &Bound, left: &Bound) -> bool {
    match (right.instant(), left.instant()) {
        (Some(r), Some(l)) => match r.cmp(l) {
            Ordering::Less => true,
            Ordering::Equal => !right.is_inclusive() && !left.is_inclusive(),
            Ordering::Greater => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(hour: u32) -> Instant { Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap() }

    #[test]
    fn test_left_ordering() {
        assert_eq!(cmp_left(&Bound::Unbounded, &Bound::Included(at(1))), Ordering::Less);
        assert_eq!(cmp_left(&Bound::Included(at(1)), &Bound::Excluded(at(1))), Ordering::Less);
        assert_eq!(cmp_left(&Bound::Excluded(at(1)), &Bound::Included(at(2))), Ordering::Less);
        assert_eq!(cmp_left(&Bound::Unbounded, &Bound::Unbounded), Ordering::Equal);
    }

    #[test]
    fn test_right_ordering() {
        assert_eq!(cmp_right(&Bound::Unbounded, &Bound::Included(at(1))), Ordering::Greater);
        assert_eq!(cmp_right(&Bound::Excluded(at(1)), &Bound::Included(at(1))), Ordering::Less);
        assert_eq!(cmp_right(&Bound::Included(at(1)), &Bound::Excluded(at(2))), Ordering::Less);
    }

    #[test]
    fn test_gap_between_touching_bounds() {
        // x[ followed by [x: no gap
        assert!(!leaves_gap(&Bound::Excluded(at(1)), &Bound::Included(at(1))));
        // x] followed by ]x: no gap
        assert!(!leaves_gap(&Bound::Included(at(1)), &Bound::Excluded(at(1))));
        // x[ followed by ]x: x itself is missing
        assert!(leaves_gap(&Bound::Excluded(at(1)), &Bound::Excluded(at(1))));
        assert!(leaves_gap(&Bound::Included(at(1)), &Bound::Included(at(2))));
        assert!(!leaves_gap(&Bound::Unbounded, &Bound::Included(at(2))));
    }

    #[test]
    fn test_spans_instant() {
        assert!(spans_instant(&Bound::Included(at(1)), &Bound::Included(at(1))));
        assert!(!spans_instant(&Bound::Included(at(1)), &Bound::Excluded(at(1))));
        assert!(!spans_instant(&Bound::Included(at(2)), &Bound::Included(at(1))));
        assert!(spans_instant(&Bound::Unbounded, &Bound::Excluded(at(1))));
    }

    #[test]
    fn test_flip() {
        assert_eq!(Bound::Included(at(3)).flip(), Bound::Excluded(at(3)));
        assert_eq!(Bound::Excluded(at(3)).flip(), Bound::Included(at(3)));
        assert_eq!(Bound::Unbounded.flip(), Bound::Unbounded);
    }
}
