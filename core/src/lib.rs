//! Time-sliced graph structures for tempograph.
//!
//! - [`graph::DynamicGraph`]: directed edges that each carry a label and a validity [`Period`];
//!   adjacency is always read "as of" an instant.
//! - [`traversal::Walker`]: a cancellable, visit-once walk over the edges active at an instant,
//!   and the bulk operations built on it.
//! - [`dag::Dag`]: a named-node graph that refuses any link closing a cycle.

pub mod dag;
pub mod dfs;
pub mod error;
pub mod graph;
pub mod traits;
pub mod traversal;

pub use dag::Dag;
pub use error::DagError;
pub use graph::{DynamicGraph, TemporalEdge};
pub use traits::{Vertex, VertexId};
pub use traversal::{Step, Walker};

pub use tempograph_period as period;
pub use tempograph_period::{Instant, Period};
