//! # tempograph-period
//!
//! An algebra over subsets of the time line. A [`Period`] is a sorted, normalized union of
//! pairwise-disjoint [`Interval`]s, each delimited by a pair of [`Bound`]s that may be inclusive,
//! exclusive or infinite. Every operation returns a new Period, so a Period can be shared freely
//! once built.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempograph_period::Period;
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let since = Period::since(now, true);
//! let until = Period::until(now, false);
//!
//! assert_eq!(since.union(&until), Period::full());
//! assert_eq!(since.to_string(), "[2024-01-01T00:00:00Z;+oo[");
//! ```
//!
//! The text form round-trips through [`parse_period`]; see [`parser`] for the token syntax.

pub mod bound;
pub mod conversion;
pub mod error;
pub mod grammar;
pub mod interval;
pub mod parser;
pub mod period;
pub mod relation;

pub use bound::Bound;
pub use error::{ParseError, ParseErrors};
pub use interval::Interval;
pub use parser::{parse_interval, parse_period, parse_period_lossy};
pub use period::Period;
pub use relation::PeriodRelation;

/// A single point on the time line.
pub type Instant = chrono::DateTime<chrono::Utc>;
