//! A directed graph whose edges are only valid during a [`Period`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::traits::Vertex;
use crate::traversal::Walker;
use crate::{Instant, Period};

/// The record kept for one ordered (source, destination) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalEdge<L> {
    pub label: L,
    pub period: Period,
}

impl<L> TemporalEdge<L> {
    pub fn new(label: L, period: Period) -> Self { Self { label, period } }

    pub fn is_active_at(&self, instant: &Instant) -> bool { self.period.contains(instant) }
}

/// Directed graph with time-bounded edges, generic over the vertex type and an opaque label.
///
/// There is at most one edge record per ordered pair: relating the same pair again replaces the
/// label and the Period. Edges `a -> b` and `b -> a` are independent.
#[derive(Debug, Clone)]
pub struct DynamicGraph<V: Vertex, L> {
    vertices: BTreeMap<V::Id, V>,
    edges: BTreeMap<V::Id, BTreeMap<V::Id, TemporalEdge<L>>>,
}

impl<V: Vertex, L> Default for DynamicGraph<V, L> {
    fn default() -> Self { Self::new() }
}

impl<V: Vertex, L> DynamicGraph<V, L> {
    pub fn new() -> Self { Self { vertices: BTreeMap::new(), edges: BTreeMap::new() } }

    /// Registers a vertex without edges. Returns false, leaving the stored vertex in place, if
    /// the id is already known.
    pub fn set(&mut self, vertex: V) -> bool {
        let id = vertex.id();
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.vertices.insert(id, vertex);
        true
    }

    /// Sets the edge `source -> destination` to `(label, period)`, registering or updating both
    /// vertices. Returns the record it replaced, if any.
    pub fn relate(&mut self, source: V, destination: V, label: L, period: Period) -> Option<TemporalEdge<L>> {
        let source_id = source.id();
        let destination_id = destination.id();
        debug!("relate {source_id} -> {destination_id} during {period}");

        self.vertices.insert(source_id.clone(), source);
        self.vertices.insert(destination_id.clone(), destination);
        self.edges.entry(source_id).or_default().insert(destination_id, TemporalEdge::new(label, period))
    }

    /// Deletes the edge record for the pair. Both vertices stay registered.
    pub fn remove(&mut self, source: &V::Id, destination: &V::Id) -> Option<TemporalEdge<L>> {
        let outgoing = self.edges.get_mut(source)?;
        let removed = outgoing.remove(destination);
        if outgoing.is_empty() {
            self.edges.remove(source);
        }
        if removed.is_some() {
            debug!("removed {source} -> {destination}");
        }
        removed
    }

    /// The destinations of every edge leaving `source` that is valid at `instant`, with their
    /// labels. The map is a copy; later changes to the graph do not show through it.
    pub fn neighbors(&self, source: &V::Id, instant: &Instant) -> BTreeMap<V::Id, L>
    where L: Clone {
        self.active_edges(source, *instant).map(|(id, edge)| (id.clone(), edge.label.clone())).collect()
    }

    /// Every vertex known to the graph, whether it was set explicitly or arrived through an edge.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ { self.vertices.values() }

    pub fn lookup(&self, id: &V::Id) -> Option<&V> { self.vertices.get(id) }

    pub fn contains(&self, id: &V::Id) -> bool { self.vertices.contains_key(id) }

    /// The edge record for the pair regardless of when it is valid.
    pub fn edge(&self, source: &V::Id, destination: &V::Id) -> Option<&TemporalEdge<L>> {
        self.edges.get(source)?.get(destination)
    }

    /// Every edge record as `(source, destination, edge)`.
    pub fn edges(&self) -> impl Iterator<Item = (&V::Id, &V::Id, &TemporalEdge<L>)> + '_ {
        self.edges.iter().flat_map(|(source, outgoing)| outgoing.iter().map(move |(destination, edge)| (source, destination, edge)))
    }

    pub fn vertex_count(&self) -> usize { self.vertices.len() }

    pub fn edge_count(&self) -> usize { self.edges.values().map(BTreeMap::len).sum() }

    /// Starts a [`Walker`] over the edges valid at `instant`.
    pub fn walk(&self, start: &V::Id, instant: Instant) -> Walker<'_, V, L> { Walker::new(self, start, instant) }

    /// The id key and value stored for `id`, borrowed from the graph.
    pub(crate) fn entry(&self, id: &V::Id) -> Option<(&V::Id, &V)> { self.vertices.get_key_value(id) }

    /// Outgoing edges of `source` valid at `instant`, borrowed from the graph.
    pub(crate) fn active_edges(&self, source: &V::Id, instant: Instant) -> impl Iterator<Item = (&V::Id, &TemporalEdge<L>)> + '_ {
        self.edges
            .get(source)
            .into_iter()
            .flat_map(move |outgoing| outgoing.iter().filter(move |(_, edge)| edge.is_active_at(&instant)))
    }
}
