use std::collections::VecDeque;
use std::fmt;

use tracing::trace;

use super::frontier::Frontier;
use crate::graph::DynamicGraph;
use crate::traits::Vertex;
use crate::Instant;

/// One edge produced by a [`Walker`].
pub struct Step<'g, V, L> {
    pub source: &'g V,
    pub destination: &'g V,
    pub label: &'g L,
    /// 1 for edges leaving the start vertex, n + 1 for edges leaving a vertex first reached at depth n.
    pub depth: usize,
}

impl<V, L> Clone for Step<'_, V, L> {
    fn clone(&self) -> Self { *self }
}

impl<V, L> Copy for Step<'_, V, L> {}

impl<V: fmt::Debug, L: fmt::Debug> fmt::Debug for Step<'_, V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("source", self.source)
            .field("destination", self.destination)
            .field("label", self.label)
            .field("depth", &self.depth)
            .finish()
    }
}

/// Breadth-first walk over the edges of a [`DynamicGraph`] that are valid at one instant.
///
/// The start vertex seeds the frontier. Expanding a vertex yields each of its active outgoing
/// edges once and queues every destination not seen before; no vertex is expanded twice, so
/// edges back into visited vertices are still produced but never followed. The walker borrows
/// the graph, which cannot change until the walker is dropped.
///
/// Use it as an [`Iterator`] of [`Step`]s, or read the last step back through [`source`](Self::source),
/// [`position`](Self::position) and [`source_edge`](Self::source_edge). [`stop`](Self::stop)
/// ends the walk at the next step boundary.
pub struct Walker<'g, V: Vertex, L> {
    graph: &'g DynamicGraph<V, L>,
    instant: Instant,
    frontier: Frontier<&'g V::Id>,
    pending: VecDeque<(&'g V::Id, Step<'g, V, L>)>,
    current: Option<Step<'g, V, L>>,
    stopped: bool,
}

impl<'g, V: Vertex, L> Walker<'g, V, L> {
    /// A walker from `start` at `instant`. An unknown start vertex gives an empty walk.
    pub fn new(graph: &'g DynamicGraph<V, L>, start: &V::Id, instant: Instant) -> Self {
        let mut frontier = Frontier::new();
        match graph.entry(start) {
            Some((id, _)) => {
                frontier.push(id, 0);
            }
            None => trace!("walk from unknown vertex {start}"),
        }
        Self { graph, instant, frontier, pending: VecDeque::new(), current: None, stopped: false }
    }

    pub fn instant(&self) -> &Instant { &self.instant }

    /// Ends the walk; every later call to `next` returns `None`.
    pub fn stop(&mut self) {
        if !self.stopped {
            trace!("walker stopped after visiting {} vertices", self.frontier.visited());
        }
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool { self.stopped }

    /// The step produced by the last successful call to `next`.
    pub fn step(&self) -> Option<Step<'g, V, L>> { self.current }

    /// Source vertex of the last step.
    pub fn source(&self) -> Option<&'g V> { self.current.map(|step| step.source) }

    /// Destination vertex of the last step.
    pub fn position(&self) -> Option<&'g V> { self.current.map(|step| step.destination) }

    /// Label of the last step's edge.
    pub fn source_edge(&self) -> Option<&'g L> { self.current.map(|step| step.label) }

    /// Number of vertices reached so far, the start included.
    pub fn visited(&self) -> usize { self.frontier.visited() }

    fn expand(&mut self, id: &'g V::Id, depth: usize) {
        let graph = self.graph;
        let Some(source) = graph.lookup(id) else { return };
        let edges = graph.active_edges(id, self.instant).filter_map(|(destination_id, edge)| {
            let destination = graph.lookup(destination_id)?;
            Some((destination_id, Step { source, destination, label: &edge.label, depth: depth + 1 }))
        });
        self.pending.extend(edges);
    }
}

impl<'g, V: Vertex, L> Iterator for Walker<'g, V, L> {
    type Item = Step<'g, V, L>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        loop {
            if let Some((destination_id, step)) = self.pending.pop_front() {
                self.frontier.push(destination_id, step.depth);
                trace!("step to {destination_id} at depth {}", step.depth);
                self.current = Some(step);
                return Some(step);
            }
            match self.frontier.pop() {
                Some((id, depth)) => self.expand(id, depth),
                None => {
                    self.current = None;
                    self.stop();
                    return None;
                }
            }
        }
    }
}
