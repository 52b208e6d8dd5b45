/*!
`graphbox` is a declarative graph generation and structural-property
validation library.

A caller describes the kind of graph they want as a [`GraphSpec`]
(directed or undirected, weighted or not, connected, acyclic, dense,
bipartite, chordal, ...) rather than writing a generator by hand.
[`generator::generate_graph`] builds a concrete [`graph::Graph`]
matching that description as closely as its dispatch of strategies
allows, and [`orchestrator::validate_graph_properties`] checks any
graph — generated here or built/loaded independently — against the
same spec, reporting exactly which of the requested properties hold.

# Overview

```
use graphbox::constraints::is_graph_spec_impossible;
use graphbox::generator::{generate_graph, GenerationConfig};
use graphbox::orchestrator::validate_graph_properties;
use graphbox::spec_model::{make_graph_spec, Connectivity, Cycles, GraphSpecOverrides};

let spec = make_graph_spec(GraphSpecOverrides {
    cycles: Some(Cycles::Acyclic),
    connectivity: Some(Connectivity::Connected),
    ..Default::default()
});
assert!(!is_graph_spec_impossible(&spec));

let config = GenerationConfig {
    node_count: 20,
    seed: 42,
    ..Default::default()
};
let graph = generate_graph(&spec, &config).unwrap();
let result = validate_graph_properties(&graph, &spec);
assert!(result.valid);
```

# Modules

- [`model`] / [`graph`] — the node/edge/attribute types and the
  adjacency-list store that owns them.
- [`csr`] — a read-only Compressed Sparse Row projection of a graph,
  for algorithms that want array-of-offsets locality.
- [`heap`] — an indexed binary min-heap with `O(log n)` `decrease_key`,
  used by [`pathfinding::dijkstra`].
- [`pathfinding`] — Dijkstra and BFS shortest-path search.
- [`subgraph`] — induced subgraphs, ego-networks, reachability
  subgraphs, and attribute-based filtering.
- [`patterns`] — the forbidden-subgraph pattern library and the shared
  induced-subgraph matcher several structural validators use.
- [`spec_model`] — the [`GraphSpec`] vocabulary: the nine core
  properties plus optional advanced facets.
- [`constraints`] — pre-generation analysis of a spec for contradictory
  or unusual property combinations.
- [`generator`] — spec-driven graph construction.
- [`validators`] — one function per property, each checking a built
  graph against a spec.
- [`orchestrator`] — runs the full validator battery and aggregates the
  result.
- [`adapters`] — the portable graph/spec JSON interfaces (`serde` feature).
- [`rng`] — the small seeded PRNG the generator uses for determinism.
- [`error`] — the closed error taxonomy shared by every fallible API.

[`GraphSpec`]: spec_model::GraphSpec
*/

#![warn(missing_docs)]
#![allow(clippy::type_complexity)]

pub mod adapters;
pub mod constraints;
pub mod csr;
pub mod error;
pub mod generator;
pub mod graph;
pub mod heap;
pub mod model;
pub mod orchestrator;
pub mod pathfinding;
pub mod patterns;
pub mod rng;
pub mod spec_model;
pub mod subgraph;
pub mod validators;

pub use error::{GraphBoxError, GraphBoxResult};
pub use graph::Graph;
pub use model::{AttrMap, AttrValue, Edge, Node};
pub use spec_model::GraphSpec;
