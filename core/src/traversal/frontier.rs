//! Frontier management for graph traversal.

use std::collections::{BTreeSet, VecDeque};

/// Vertices waiting to be expanded, plus every vertex ever queued.
///
/// A vertex enters the queue at most once, so a walk over a finite graph always drains it.
#[derive(Debug, Clone)]
pub(crate) struct Frontier<Id> {
    queue: VecDeque<(Id, usize)>,
    visited: BTreeSet<Id>,
}

impl<Id: Ord + Clone> Frontier<Id> {
    pub(crate) fn new() -> Self { Self { queue: VecDeque::new(), visited: BTreeSet::new() } }

    /// Queue `id` at `depth` hops from the start unless it was seen before.
    pub(crate) fn push(&mut self, id: Id, depth: usize) -> bool {
        if !self.visited.insert(id.clone()) {
            return false;
        }
        self.queue.push_back((id, depth));
        true
    }

    pub(crate) fn pop(&mut self) -> Option<(Id, usize)> { self.queue.pop_front() }

    pub(crate) fn visited(&self) -> usize { self.visited.len() }
}
