use std::fmt;
use std::ops::{BitAnd, BitOr, Not, Sub};

use crate::bound::Bound;
use crate::interval::Interval;
use crate::Instant;

/// A subset of the time line: a sorted collection of non-empty intervals, none of which overlap
/// or touch another.
///
/// Every constructor and operation normalizes its result, so two Periods covering the same
/// instants always hold the same intervals and compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Period {
    intervals: Vec<Interval>,
}

impl Period {
    pub fn empty() -> Self { Self { intervals: Vec::new() } }

    pub fn full() -> Self { Self { intervals: vec![Interval::full()] } }

    /// `[instant;+oo[`, or `]instant;+oo[` when not inclusive.
    pub fn since(instant: Instant, inclusive: bool) -> Self {
        Self::from_interval(Interval::new(Bound::new(instant, inclusive), Bound::Unbounded))
    }

    /// `]-oo;instant]`, or `]-oo;instant[` when not inclusive.
    pub fn until(instant: Instant, inclusive: bool) -> Self {
        Self::from_interval(Interval::new(Bound::Unbounded, Bound::new(instant, inclusive)))
    }

    /// A finite range. Reversed bounds give the empty Period.
    pub fn between(start: Instant, end: Instant, start_inclusive: bool, end_inclusive: bool) -> Self {
        Self::from_interval(Interval::new(Bound::new(start, start_inclusive), Bound::new(end, end_inclusive)))
    }

    /// The single instant `[instant;instant]`.
    pub fn point(instant: Instant) -> Self { Self::between(instant, instant, true, true) }

    pub fn from_interval(interval: Interval) -> Self {
        if interval.is_empty() {
            Self::empty()
        } else {
            Self { intervals: vec![interval] }
        }
    }

    /// Builds a Period from arbitrary intervals, which may overlap, touch, be empty or come in any order.
    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval>) -> Self { Self { intervals: normalize(intervals) } }

    pub fn intervals(&self) -> impl ExactSizeIterator<Item = &Interval> + '_ { self.intervals.iter() }

    pub fn is_empty(&self) -> bool { self.intervals.is_empty() }

    pub fn is_full(&self) -> bool { matches!(self.intervals.as_slice(), [only] if only.is_full()) }

    pub fn contains(&self, instant: &Instant) -> bool { self.intervals.iter().any(|interval| interval.contains(instant)) }

    /// Every instant not in `self`. The bound of each gap flips inclusivity relative to the interval it borders.
    pub fn complement(&self) -> Period {
        let mut gaps = Vec::with_capacity(self.intervals.len() + 1);
        // left bound of the gap currently open; None once an interval runs to +oo
        let mut gap_start = Some(Bound::Unbounded);
        for interval in &self.intervals {
            let Some(start) = gap_start else { break };
            if !interval.left().is_unbounded() {
                gaps.push(Interval::new(start, interval.left().flip()));
            }
            gap_start = match interval.right() {
                Bound::Unbounded => None,
                right => Some(right.flip()),
            };
        }
        if let Some(start) = gap_start {
            gaps.push(Interval::new(start, Bound::Unbounded));
        }
        Period::from_intervals(gaps)
    }

    pub fn union(&self, other: &Period) -> Period {
        Period::from_intervals(self.intervals.iter().chain(other.intervals.iter()).copied())
    }

    pub fn intersection(&self, other: &Period) -> Period {
        let mut overlaps = Vec::new();
        for a in &self.intervals {
            for b in &other.intervals {
                let overlap = a.intersection(b);
                if !overlap.is_empty() {
                    overlaps.push(overlap);
                }
            }
        }
        Period::from_intervals(overlaps)
    }

    /// Set difference: the instants of `self` that are not in `other`.
    pub fn remove(&self, other: &Period) -> Period { self.intersection(&other.complement()) }

    pub fn is_included_in(&self, reference: &Period) -> bool { self.intersection(reference) == *self }

    /// True when the two Periods share at least one instant.
    pub fn overlaps(&self, other: &Period) -> bool { !self.intersection(other).is_empty() }

    /// The smallest single interval covering every instant of `self`.
    pub fn bounding_period(&self) -> Period {
        match (self.intervals.first(), self.intervals.last()) {
            (Some(first), Some(last)) => Period::from_interval(Interval::new(*first.left(), *last.right())),
            _ => Period::empty(),
        }
    }
}

fn normalize(intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals
        .into_iter()
        .filter(|interval| !interval.is_empty())
        // re-check bounds for intervals that did not come through Interval::new
        .map(|interval| Interval::new(*interval.left(), *interval.right()))
        .filter(|interval| !interval.is_empty())
        .collect();
    sorted.sort_by(|a, b| a.cmp_start(b));

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if !last.leaves_gap_before(&interval) => last.extend_to(&interval),
            _ => merged.push(interval),
        }
    }
    merged
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return write!(f, "{}", Interval::empty());
        }
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", interval)?;
        }
        Ok(())
    }
}

impl From<Interval> for Period {
    fn from(interval: Interval) -> Self { Period::from_interval(interval) }
}

impl FromIterator<Interval> for Period {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self { Period::from_intervals(iter) }
}

impl BitOr for &Period {
    type Output = Period;
    fn bitor(self, rhs: Self) -> Period { self.union(rhs) }
}

impl BitOr for Period {
    type Output = Period;
    fn bitor(self, rhs: Self) -> Period { self.union(&rhs) }
}

impl BitAnd for &Period {
    type Output = Period;
    fn bitand(self, rhs: Self) -> Period { self.intersection(rhs) }
}

impl BitAnd for Period {
    type Output = Period;
    fn bitand(self, rhs: Self) -> Period { self.intersection(&rhs) }
}

impl Sub for &Period {
    type Output = Period;
    fn sub(self, rhs: Self) -> Period { self.remove(rhs) }
}

impl Sub for Period {
    type Output = Period;
    fn sub(self, rhs: Self) -> Period { self.remove(&rhs) }
}

impl Not for &Period {
    type Output = Period;
    fn not(self) -> Period { self.complement() }
}

impl Not for Period {
    type Output = Period;
    fn not(self) -> Period { self.complement() }
}
