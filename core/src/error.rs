use thiserror::Error;

pub use tempograph_period::{ParseError, ParseErrors};

/// A rejected [`Dag`](crate::dag::Dag) link. The graph is unchanged after either variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DagError {
    #[error("cannot link node {0:?} to itself")]
    SelfLink(String),
    #[error("linking {from:?} -> {to:?} would create a cycle")]
    Cycle { from: String, to: String },
}
