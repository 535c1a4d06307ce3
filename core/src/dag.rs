//! A named-node graph that stays acyclic.
//!
//! Every link is applied tentatively, then the whole graph is scanned for a cycle. A link that
//! closes one is reverted along with any node it created, so a rejected call leaves the graph
//! exactly as it found it.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::dfs;
use crate::error::DagError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct DagNode<V, L> {
    value: V,
    links: BTreeMap<String, L>,
}

impl<V: Default, L> Default for DagNode<V, L> {
    fn default() -> Self { Self { value: V::default(), links: BTreeMap::new() } }
}

/// Nodes keyed by name, each carrying a value and its labelled outgoing links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dag<V, L> {
    nodes: BTreeMap<String, DagNode<V, L>>,
}

impl<V, L> Default for Dag<V, L> {
    fn default() -> Self { Self { nodes: BTreeMap::new() } }
}

impl<V: Default, L> Dag<V, L> {
    pub fn new() -> Self { Self::default() }

    /// Registers `name` with a default value. Returns whether it was new.
    pub fn add_node(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.nodes.contains_key(&name) {
            return false;
        }
        self.nodes.insert(name, DagNode::default());
        true
    }

    /// Inserts or overwrites the link `source -> destination`, creating either node if needed.
    ///
    /// Fails without touching the graph when the link points a node at itself or would close a cycle.
    #[cfg_attr(feature = "instrument", tracing::instrument(level = "debug", skip(self, label)))]
    pub fn link(&mut self, source: &str, destination: &str, label: L) -> Result<(), DagError> {
        if source == destination {
            warn!("rejected self-link on {source:?}");
            return Err(DagError::SelfLink(source.to_string()));
        }

        let created_source = self.add_node(source);
        let created_destination = self.add_node(destination);
        let previous = self.links_mut(source).insert(destination.to_string(), label);

        let Some((from, to)) = self.find_cycle() else {
            debug!("linked {source:?} -> {destination:?}");
            return Ok(());
        };

        match previous {
            Some(label) => {
                self.links_mut(source).insert(destination.to_string(), label);
            }
            None => {
                self.links_mut(source).remove(destination);
            }
        }
        if created_source {
            self.nodes.remove(source);
        }
        if created_destination {
            self.nodes.remove(destination);
        }
        warn!("rejected link {source:?} -> {destination:?}: cycle closes at {from:?} -> {to:?}");
        Err(DagError::Cycle { from: source.to_string(), to: destination.to_string() })
    }

    fn links_mut(&mut self, name: &str) -> &mut BTreeMap<String, L> {
        &mut self.nodes.entry(name.to_string()).or_default().links
    }
}

impl<V, L> Dag<V, L> {
    /// A copy of the outgoing links of `source`, or `None` if there is no such node.
    pub fn neighbors(&self, source: &str) -> Option<BTreeMap<String, L>>
    where L: Clone {
        self.nodes.get(source).map(|node| node.links.clone())
    }

    pub fn contains(&self, name: &str) -> bool { self.nodes.contains_key(name) }

    pub fn value(&self, name: &str) -> Option<&V> { self.nodes.get(name).map(|node| &node.value) }

    /// Replaces the value of an existing node, returning the old one. Unknown names are ignored.
    pub fn set_value(&mut self, name: &str, value: V) -> Option<V> {
        self.nodes.get_mut(name).map(|node| std::mem::replace(&mut node.value, value))
    }

    /// Node names in order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ { self.nodes.keys().map(String::as_str) }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Every node reachable from `name` by following links.
    pub fn descendants(&self, name: &str) -> BTreeSet<String> {
        dfs::reachable(&name.to_string(), |node: &String| self.successors(node))
    }

    /// Every node, each one before all of the nodes it links to. Ties are broken by name.
    pub fn topological_order(&self) -> Vec<&str> {
        let mut incoming: BTreeMap<&str, usize> = self.nodes.keys().map(|name| (name.as_str(), 0)).collect();
        for node in self.nodes.values() {
            for destination in node.links.keys() {
                if let Some(count) = incoming.get_mut(destination.as_str()) {
                    *count += 1;
                }
            }
        }

        let mut ready: BTreeSet<&str> = incoming.iter().filter(|(_, count)| **count == 0).map(|(name, _)| *name).collect();
        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(name) = ready.pop_first() {
            order.push(name);
            let Some(node) = self.nodes.get(name) else { continue };
            for destination in node.links.keys() {
                if let Some(count) = incoming.get_mut(destination.as_str()) {
                    *count -= 1;
                    if *count == 0 {
                        ready.insert(destination.as_str());
                    }
                }
            }
        }
        order
    }

    fn successors(&self, name: &str) -> Vec<String> {
        self.nodes.get(name).map(|node| node.links.keys().cloned().collect()).unwrap_or_default()
    }

    fn find_cycle(&self) -> Option<(String, String)> { dfs::find_cycle(self.nodes.keys().cloned(), |node: &String| self.successors(node)) }
}
