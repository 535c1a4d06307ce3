//! Bulk operations over the subgraph reachable from a vertex at an instant.
//!
//! Processors run in walk order and commit as they go: when one fails, the walk stops and its
//! error comes back unchanged, but the effects of earlier calls stay in place.

use tracing::debug;

use super::walker::Walker;
use crate::graph::DynamicGraph;
use crate::traits::Vertex;
use crate::Instant;

/// Applies `processor` to every edge leaving `start` that is valid at `instant`, without going
/// any further. Stops at the first error.
#[cfg_attr(feature = "instrument", tracing::instrument(level = "debug", skip_all, fields(start = %start, instant = %instant)))]
pub fn apply_to_neighbors<V, L, E, F>(graph: &DynamicGraph<V, L>, start: &V::Id, instant: Instant, mut processor: F) -> Result<(), E>
where
    V: Vertex,
    F: FnMut(&V, &V, &L) -> Result<(), E>,
{
    let Some(source) = graph.lookup(start) else { return Ok(()) };
    for (destination_id, edge) in graph.active_edges(start, instant) {
        let Some(destination) = graph.lookup(destination_id) else { continue };
        processor(source, destination, &edge.label)?;
    }
    Ok(())
}

/// Lazily yields `(source, destination)` for every reachable edge that satisfies `predicate`.
pub fn reachable_edges<'g, V, L, P>(
    graph: &'g DynamicGraph<V, L>,
    start: &V::Id,
    instant: Instant,
    mut predicate: P,
) -> impl Iterator<Item = (&'g V, &'g V)> + 'g
where
    V: Vertex + 'g,
    L: 'g,
    P: FnMut(&V, &V, &L) -> bool + 'g,
{
    Walker::new(graph, start, instant)
        .filter(move |step| predicate(step.source, step.destination, step.label))
        .map(|step| (step.source, step.destination))
}

/// Applies `action` to the destination of every reachable edge that satisfies `predicate`.
/// A destination reached through several matching edges is acted on once per edge.
#[cfg_attr(feature = "instrument", tracing::instrument(level = "debug", skip_all, fields(start = %start, instant = %instant)))]
pub fn apply_to_reachable<V, L, P, A>(graph: &DynamicGraph<V, L>, start: &V::Id, instant: Instant, mut predicate: P, mut action: A)
where
    V: Vertex,
    P: FnMut(&V, &V, &L) -> bool,
    A: FnMut(&V),
{
    let mut applied = 0usize;
    for step in Walker::new(graph, start, instant) {
        if predicate(step.source, step.destination, step.label) {
            action(step.destination);
            applied += 1;
        }
    }
    debug!("applied action to {applied} reachable destinations from {start}");
}

/// Applies `processor` to every reachable edge, leaving it to the processor to decide what to
/// do with each one. Stops at the first error.
#[cfg_attr(feature = "instrument", tracing::instrument(level = "debug", skip_all, fields(start = %start, instant = %instant)))]
pub fn spread<V, L, E, F>(graph: &DynamicGraph<V, L>, start: &V::Id, instant: Instant, mut processor: F) -> Result<(), E>
where
    V: Vertex,
    F: FnMut(&V, &V, &L) -> Result<(), E>,
{
    let mut walker = Walker::new(graph, start, instant);
    while let Some(step) = walker.next() {
        if let Err(e) = processor(step.source, step.destination, step.label) {
            debug!("spread from {start} aborted after {} visited vertices", walker.visited());
            walker.stop();
            return Err(e);
        }
    }
    Ok(())
}
