mod common;

use std::collections::{BTreeMap, BTreeSet};

use common::{arb_graph, at, Station};
use proptest::prelude::*;
use tempograph_core::{DynamicGraph, Period};

fn line() -> DynamicGraph<&'static str, &'static str> {
    let mut graph = DynamicGraph::new();
    graph.relate("A", "B", "ab", Period::since(at(10), true));
    graph.relate("B", "C", "bc", Period::since(at(10), true));
    graph
}

#[test]
fn walk_follows_active_edges() {
    let graph = line();
    let mut walker = graph.walk(&"A", at(10));
    let mut steps = BTreeSet::new();
    while let Some(step) = walker.next() {
        steps.insert((*step.source, *step.destination));
    }
    assert_eq!(steps, BTreeSet::from([("A", "B"), ("B", "C")]));
    assert!(walker.next().is_none());
    assert!(walker.is_stopped());
}

#[test]
fn nothing_is_active_before_the_period() {
    let graph = line();
    assert!(graph.neighbors(&"A", &at(9)).is_empty());
    assert_eq!(graph.walk(&"A", at(9)).count(), 0);
}

#[test]
fn cycle_yields_each_edge_once() {
    let mut graph = DynamicGraph::new();
    graph.relate("X", "Y", 1, Period::full());
    graph.relate("Y", "Z", 2, Period::full());
    graph.relate("Z", "X", 3, Period::full());

    let labels: Vec<u8> = graph.walk(&"X", at(0)).map(|step| *step.label).collect();
    assert_eq!(labels, vec![1, 2, 3]);
}

#[test]
fn accessors_report_last_step() {
    let mut graph = DynamicGraph::new();
    let central = Station::new("CEN", "Central");
    let harbour = Station::new("HAR", "Harbour");
    graph.relate(central.clone(), harbour.clone(), "ferry", Period::between(at(6), at(22), true, false));

    let mut walker = graph.walk(&"CEN".to_string(), at(12));
    assert!(walker.source().is_none());
    assert!(walker.position().is_none());

    let step = walker.next().unwrap();
    assert_eq!(step.depth, 1);
    assert_eq!(walker.source(), Some(&central));
    assert_eq!(walker.position().map(|s| s.name.as_str()), Some("Harbour"));
    assert_eq!(walker.source_edge(), Some(&"ferry"));
    assert_eq!(walker.visited(), 2);

    assert!(walker.next().is_none());
    assert!(walker.position().is_none());

    // the ferry does not run at night
    assert_eq!(graph.walk(&"CEN".to_string(), at(23)).count(), 0);
}

#[test]
fn stop_ends_the_walk() {
    let mut graph = DynamicGraph::new();
    for i in 0u32..10 {
        graph.relate(i, i + 1, (), Period::full());
    }
    let mut walker = graph.walk(&0, at(0));
    let mut taken = 0;
    while let Some(step) = walker.next() {
        taken += 1;
        if *step.destination == 3 {
            walker.stop();
        }
    }
    assert_eq!(taken, 3);
    assert!(walker.next().is_none());
    assert_eq!(walker.position(), Some(&3));
}

#[test]
fn unknown_start_is_an_empty_walk() {
    let graph = line();
    let mut walker = graph.walk(&"Q", at(10));
    assert!(walker.next().is_none());
    assert_eq!(walker.visited(), 0);
}

#[test]
fn neighbors_are_a_snapshot() {
    let mut graph = line();
    let before = graph.neighbors(&"A", &at(10));
    graph.relate("A", "D", "ad", Period::full());
    assert_eq!(before, BTreeMap::from([("B", "ab")]));
    assert_eq!(graph.neighbors(&"A", &at(10)).len(), 2);
}

proptest! {
    #[test]
    fn walk_expands_each_vertex_once(graph in arb_graph(), start in 0u32..8, hour in 0u32..8) {
        let instant = at(hour);
        let steps: Vec<_> = graph.walk(&start, instant).map(|step| (*step.source, *step.destination)).collect();

        // every reachable vertex is expanded exactly once, so each active edge out of it shows up once
        let sources: BTreeSet<u32> = steps.iter().map(|(source, _)| *source).collect();
        let mut reached: BTreeSet<u32> = steps.iter().map(|(_, destination)| *destination).collect();
        if graph.contains(&start) {
            reached.insert(start);
        }
        prop_assert!(sources.is_subset(&reached));

        let expected: usize = reached.iter().map(|vertex| graph.neighbors(vertex, &instant).len()).sum();
        prop_assert_eq!(steps.len(), expected);

        let distinct: BTreeSet<_> = steps.iter().collect();
        prop_assert_eq!(distinct.len(), steps.len());
    }

    #[test]
    fn stepwise_neighbors_match_the_walk(graph in arb_graph(), start in 0u32..8, hour in 0u32..8) {
        let instant = at(hour);
        for step in graph.walk(&start, instant) {
            let active = graph.neighbors(step.source, &instant);
            prop_assert_eq!(active.get(step.destination), Some(step.label));
        }
    }
}
