//! Depth-first primitives shared by the graph structures.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Looks for a cycle among everything reachable from `roots`, returning the edge that closes it.
///
/// Iterative, so deep graphs cannot overflow the stack. Each node is unvisited, in progress
/// (on the current DFS path) or done; meeting an in-progress node again means the path loops.
pub fn find_cycle<N, R, F, S>(roots: R, mut successors: F) -> Option<(N, N)>
where
    N: Ord + Clone,
    R: IntoIterator<Item = N>,
    F: FnMut(&N) -> S,
    S: IntoIterator<Item = N>,
{
    let mut marks: BTreeMap<N, Mark> = BTreeMap::new();
    for root in roots {
        if marks.contains_key(&root) {
            continue;
        }
        marks.insert(root.clone(), Mark::InProgress);
        let children = successors(&root).into_iter();
        let mut stack = vec![(root, children)];

        while let Some((node, children)) = stack.last_mut() {
            match children.next() {
                Some(child) => match marks.get(&child) {
                    Some(Mark::InProgress) => return Some((node.clone(), child)),
                    Some(Mark::Done) => {}
                    None => {
                        marks.insert(child.clone(), Mark::InProgress);
                        let grandchildren = successors(&child).into_iter();
                        stack.push((child, grandchildren));
                    }
                },
                None => {
                    marks.insert(node.clone(), Mark::Done);
                    stack.pop();
                }
            }
        }
    }
    None
}

/// Every node reachable from `start` through at least one edge. `start` itself is only included
/// when it lies on a cycle.
pub fn reachable<N, F, S>(start: &N, mut successors: F) -> BTreeSet<N>
where
    N: Ord + Clone,
    F: FnMut(&N) -> S,
    S: IntoIterator<Item = N>,
{
    let mut seen = BTreeSet::new();
    let mut stack: Vec<N> = successors(start).into_iter().collect();
    while let Some(node) = stack.pop() {
        if seen.insert(node.clone()) {
            stack.extend(successors(&node));
        }
    }
    seen
}
