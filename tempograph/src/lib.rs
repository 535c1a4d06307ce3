//! # Tempograph
//!
//! Graphs whose edges exist only for part of the time line.
//!
//! ## Core Concepts
//!
//! - **Period**: a subset of the time line, kept as a sorted union of disjoint intervals with
//!   inclusive, exclusive or infinite ends. Periods support union, intersection, complement and
//!   removal, and round-trip through a compact text form such as `[2024-01-01T00:00:00Z;+oo[`.
//! - **DynamicGraph**: a directed graph where each edge carries a label and the Period during
//!   which it is valid. Adjacency is always asked for "as of" an instant.
//! - **Walker**: a breadth-first walk over the edges valid at one instant. Each vertex is
//!   expanded once, so cyclic graphs terminate, and the caller can stop it at any step.
//! - **Dag**: a named-node graph that rejects, and fully rolls back, any link closing a cycle.
//!
//! ## Example
//!
//! ```rust
//! # use chrono::{TimeZone, Utc};
//! # use tempograph::{DynamicGraph, Period};
//! # fn main() -> anyhow::Result<()> {
//! let opening = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
//! let mut lines = DynamicGraph::new();
//! lines.relate("depot", "market", "bus 4", Period::full());
//! lines.relate("market", "harbour", "tram 1", "[2024-03-01T00:00:00Z;+oo[".parse::<Period>()?);
//!
//! let before: Vec<_> = lines.walk(&"depot", opening - chrono::Duration::days(1)).map(|s| *s.destination).collect();
//! assert_eq!(before, vec!["market"]);
//!
//! let after: Vec<_> = lines.walk(&"depot", opening).map(|s| *s.destination).collect();
//! assert_eq!(after, vec!["market", "harbour"]);
//! # Ok(())
//! # }
//! ```
//!
//! Build with the `instrument` feature to get tracing spans around bulk traversals and Dag links.

pub use tempograph_core as core;
pub use tempograph_period as period;

// Re-export commonly used types
pub use tempograph_core::{
    dag::Dag,
    error::DagError,
    graph::{DynamicGraph, TemporalEdge},
    traits::{Vertex, VertexId},
    traversal::{self, apply_to_neighbors, apply_to_reachable, reachable_edges, spread, Step, Walker},
};
pub use tempograph_period::{parse_interval, parse_period, parse_period_lossy, Bound, Instant, Interval, ParseError, ParseErrors, Period, PeriodRelation};
