#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use tempograph_core::{DynamicGraph, Period, Vertex};
use tracing::Level;

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_max_level(Level::DEBUG).with_test_writer().try_init();
}

pub fn at(hour: u32) -> DateTime<Utc> { Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub code: String,
    pub name: String,
}

impl Station {
    pub fn new(code: &str, name: &str) -> Self { Self { code: code.into(), name: name.into() } }
}

impl Vertex for Station {
    type Id = String;

    fn id(&self) -> String { self.code.clone() }
}

/// Up to 8 vertices and 20 edges, each edge valid from a random hour onward.
pub fn arb_graph() -> impl Strategy<Value = DynamicGraph<u32, u32>> {
    prop::collection::vec((0u32..8, 0u32..8, 0u32..6), 0..20).prop_map(|edges| {
        let mut graph = DynamicGraph::new();
        for (label, (source, destination, since)) in edges.into_iter().enumerate() {
            graph.relate(source, destination, label as u32, Period::since(at(since), true));
        }
        graph
    })
}
