//! Identity contracts for the vertices of a graph.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A stable identity usable as a map key.
pub trait VertexId: Ord + Clone + Hash + Debug + Display {}

/// A value that can live in a graph. Two vertices with the same id are the same vertex.
pub trait Vertex {
    type Id: VertexId;

    fn id(&self) -> Self::Id;
}

impl VertexId for String {}
impl VertexId for &'static str {}
impl VertexId for u32 {}
impl VertexId for u64 {}

impl Vertex for String {
    type Id = String;

    fn id(&self) -> String { self.clone() }
}

impl Vertex for &'static str {
    type Id = &'static str;

    fn id(&self) -> &'static str { self }
}

impl Vertex for u32 {
    type Id = u32;

    fn id(&self) -> u32 { *self }
}

impl Vertex for u64 {
    type Id = u64;

    fn id(&self) -> u64 { *self }
}
