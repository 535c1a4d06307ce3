//! Walking the edges of a [`DynamicGraph`](crate::graph::DynamicGraph) that are active at a fixed instant.
//!
//! Every operation here goes through one [`Walker`], which expands each reachable vertex at most
//! once and therefore terminates on cyclic graphs too. The order in which equally eligible edges
//! come out is not part of the contract.

pub(crate) mod frontier;
pub mod bulk;
pub mod walker;

pub use bulk::{apply_to_neighbors, apply_to_reachable, reachable_edges, spread};
pub use walker::{Step, Walker};
