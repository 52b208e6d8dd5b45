//! Validators for the nine core properties (spec.md §4.10).

use std::collections::{HashSet, VecDeque};

use crate::graph::Graph;
use crate::spec_model::{Completeness, Connectivity, Cycles, Density, Directionality, EdgeMultiplicity, GraphSpec, Schema, SelfLoops, Weighting};

use super::PropertyValidation;

/// Checks `directionality`: `directed` requires every edge to be
/// effectively directed; `undirected` requires none to be; `mixed`
/// always holds (a mixed spec permits any per-edge choice).
pub fn validate_directionality(graph: &Graph, spec: &GraphSpec) -> PropertyValidation {
    let edges: Vec<bool> = graph
        .get_all_edges()
        .map(|e| e.directed_override.unwrap_or(graph.is_directed()))
        .collect();
    let (valid, actual) = match spec.directionality {
        Directionality::Directed => {
            let ok = graph.is_directed() && edges.iter().all(|&d| d);
            (ok, if ok { "directed" } else { "not fully directed" })
        }
        Directionality::Undirected => {
            let ok = !graph.is_directed() && edges.iter().all(|&d| !d);
            (ok, if ok { "undirected" } else { "not fully undirected" })
        }
        Directionality::Mixed => (true, "mixed (any per-edge override permitted)"),
    };
    PropertyValidation::new("directionality", valid, format!("{:?}", spec.directionality), actual)
}

/// Checks `weighting`: every edge's weight (or category attribute)
/// matches the requested scheme.
pub fn validate_weighting(graph: &Graph, spec: &GraphSpec) -> PropertyValidation {
    let (valid, actual) = match &spec.weighting {
        Weighting::Unweighted => {
            let ok = graph.get_all_edges().all(|e| e.weight.is_none());
            (ok, "unweighted")
        }
        Weighting::WeightedNumeric { min, max } => {
            let ok = graph
                .get_all_edges()
                .all(|e| e.weight.is_some_and(|w| w >= *min && w <= *max));
            (ok, "weighted_numeric")
        }
        Weighting::WeightedCategorical { categories } => {
            let allowed: HashSet<&str> = categories.iter().map(|s| s.as_str()).collect();
            let ok = graph.get_all_edges().all(|e| {
                matches!(e.attributes.get("category"), Some(crate::model::AttrValue::Text(t)) if allowed.contains(t.as_str()))
            });
            (ok, "weighted_categorical")
        }
    };
    PropertyValidation::new("weighting", valid, format!("{:?}", spec.weighting), actual)
}

fn has_cycle(graph: &Graph) -> bool {
    if graph.is_directed() {
        has_cycle_directed(graph)
    } else {
        has_cycle_undirected(graph)
    }
}

fn has_cycle_directed(graph: &Graph) -> bool {
    // Kahn's algorithm: a DAG admits a full topological order.
    let mut indegree: std::collections::HashMap<&str, usize> =
        graph.get_all_nodes().map(|n| (n.id.as_str(), 0)).collect();
    for edge in graph.get_all_edges() {
        if edge.source != edge.target {
            *indegree.entry(edge.target.as_str()).or_insert(0) += 1;
        } else {
            return true; // a self-loop is a 1-cycle
        }
    }
    let mut queue: VecDeque<&str> = indegree.iter().filter(|(_, &d)| d == 0).map(|(&id, _)| id).collect();
    let mut visited = 0usize;
    while let Some(node) = queue.pop_front() {
        visited += 1;
        if let Ok(outgoing) = graph.get_outgoing_edges(node) {
            for edge in outgoing {
                if edge.source != node || edge.target == node {
                    continue;
                }
                let entry = indegree.get_mut(edge.target.as_str()).expect("target tracked above");
                *entry -= 1;
                if *entry == 0 {
                    queue.push_back(edge.target.as_str());
                }
            }
        }
    }
    visited != graph.node_count()
}

fn has_cycle_undirected(graph: &Graph) -> bool {
    let mut visited: HashSet<String> = HashSet::new();
    for start in graph.get_all_nodes().map(|n| n.id.clone()) {
        if visited.contains(&start) {
            continue;
        }
        // BFS with parent tracking; a visited non-parent neighbour means a cycle.
        let mut parent: std::collections::HashMap<String, String> = std::collections::HashMap::new();
        let mut queue = VecDeque::new();
        queue.push_back(start.clone());
        visited.insert(start.clone());
        while let Some(node) = queue.pop_front() {
            if let Ok(neighbours) = graph.get_neighbors(&node) {
                for neighbour in neighbours {
                    if neighbour == node {
                        return true; // self-loop
                    }
                    if !visited.contains(&neighbour) {
                        visited.insert(neighbour.clone());
                        parent.insert(neighbour.clone(), node.clone());
                        queue.push_back(neighbour);
                    } else if parent.get(&node) != Some(&neighbour) {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// Checks `cycles`: `acyclic` requires no cycle be present; when
/// `adjustments.skip_cycle_validation` is set (a multigraph, where a
/// pair of parallel edges forms a trivial 2-cycle that doesn't count),
/// acyclicity is instead checked against the graph's *simple*
/// projection (duplicate unordered pairs collapsed to one edge).
pub fn validate_cycles(graph: &Graph, spec: &GraphSpec, skip_cycle_validation: bool) -> PropertyValidation {
    match spec.cycles {
        Cycles::CyclesAllowed => PropertyValidation::new("cycles", true, "cycles_allowed", "no constraint"),
        Cycles::Acyclic => {
            let found = if skip_cycle_validation {
                has_cycle_ignoring_parallel_edges(graph)
            } else {
                has_cycle(graph)
            };
            PropertyValidation::new(
                "cycles",
                !found,
                "acyclic",
                if found { "cycle present" } else { "no cycle" },
            )
        }
    }
}

fn has_cycle_ignoring_parallel_edges(graph: &Graph) -> bool {
    let mut seen_pairs: HashSet<(String, String)> = HashSet::new();
    for edge in graph.get_all_edges() {
        if edge.is_self_loop() {
            continue;
        }
        let key = if edge.source < edge.target {
            (edge.source.clone(), edge.target.clone())
        } else {
            (edge.target.clone(), edge.source.clone())
        };
        seen_pairs.insert(key);
    }
    // Rebuild a simple graph from the deduplicated pairs and test it.
    let mut simple = Graph::new(graph.is_directed());
    for node in graph.get_all_nodes() {
        let _ = simple.add_node(node.clone());
    }
    for (i, (a, b)) in seen_pairs.into_iter().enumerate() {
        let _ = simple.add_edge(crate::model::Edge::new(format!("dedup{i}"), a, b));
    }
    has_cycle(&simple)
}

fn weakly_connected_components(graph: &Graph) -> usize {
    let mut visited: HashSet<String> = HashSet::new();
    let mut components = 0usize;
    for start in graph.get_all_nodes().map(|n| n.id.clone()) {
        if visited.contains(&start) {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::new();
        queue.push_back(start.clone());
        visited.insert(start);
        while let Some(node) = queue.pop_front() {
            if let Ok(neighbours) = graph.get_neighbors(&node) {
                for neighbour in neighbours {
                    if !visited.contains(&neighbour) {
                        visited.insert(neighbour.clone());
                        queue.push_back(neighbour);
                    }
                }
            }
        }
    }
    components
}

/// Checks `connectivity`: `connected` requires exactly one (weak, for
/// directed graphs) component; `disconnected` requires the requested
/// component count; `unconstrained` always holds.
pub fn validate_connectivity(graph: &Graph, spec: &GraphSpec) -> PropertyValidation {
    if graph.node_count() == 0 {
        return PropertyValidation::new("connectivity", true, format!("{:?}", spec.connectivity), "empty graph");
    }
    let components = weakly_connected_components(graph);
    let (valid, expected) = match spec.connectivity {
        Connectivity::Connected => (components == 1, "connected".to_string()),
        Connectivity::Disconnected { components: want } => (components == want, format!("disconnected[{want}]")),
        Connectivity::Unconstrained => (true, "unconstrained".to_string()),
    };
    PropertyValidation::new("connectivity", valid, expected, format!("{components} component(s)"))
}

/// Checks `schema`: `homogeneous` requires a single distinct
/// `node_type` (or none); `heterogeneous` requires at least two.
pub fn validate_schema(graph: &Graph, spec: &GraphSpec) -> PropertyValidation {
    let distinct: HashSet<Option<&str>> = graph.get_all_nodes().map(|n| n.node_type.as_deref()).collect();
    let (valid, actual) = match spec.schema {
        Schema::Homogeneous => (distinct.len() <= 1, format!("{} distinct type(s)", distinct.len())),
        Schema::Heterogeneous => (distinct.len() >= 2, format!("{} distinct type(s)", distinct.len())),
    };
    PropertyValidation::new("schema", valid, format!("{:?}", spec.schema), actual)
}

fn has_parallel_edge(graph: &Graph) -> bool {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    for edge in graph.get_all_edges() {
        if edge.is_self_loop() {
            continue;
        }
        let directed = edge.directed_override.unwrap_or(graph.is_directed());
        let key = if directed || edge.source < edge.target {
            (edge.source.clone(), edge.target.clone())
        } else {
            (edge.target.clone(), edge.source.clone())
        };
        if !seen.insert(key) {
            return true;
        }
    }
    false
}

/// Checks `edgeMultiplicity`: `simple` forbids parallel edges between
/// the same endpoint pair; `multi` requires at least one.
pub fn validate_edge_multiplicity(graph: &Graph, spec: &GraphSpec) -> PropertyValidation {
    let parallel = has_parallel_edge(graph);
    let (valid, expected) = match spec.edge_multiplicity {
        EdgeMultiplicity::Simple => (!parallel, "simple"),
        EdgeMultiplicity::Multi => (parallel, "multi"),
    };
    PropertyValidation::new(
        "edgeMultiplicity",
        valid,
        expected,
        if parallel { "parallel edge(s) present" } else { "no parallel edges" },
    )
}

/// Checks `selfLoops`: `disallowed` forbids any self-loop; `allowed`
/// always holds (it permits, but doesn't require, self-loops).
pub fn validate_self_loops(graph: &Graph, spec: &GraphSpec) -> PropertyValidation {
    let has_loop = graph.get_all_edges().any(|e| e.is_self_loop());
    let (valid, expected) = match spec.self_loops {
        SelfLoops::Allowed => (true, "allowed"),
        SelfLoops::Disallowed => (!has_loop, "disallowed"),
    };
    PropertyValidation::new(
        "selfLoops",
        valid,
        expected,
        if has_loop { "self-loop present" } else { "no self-loops" },
    )
}

fn max_possible_simple_edges(graph: &Graph) -> usize {
    let n = graph.node_count();
    if n < 2 {
        return 0;
    }
    if graph.is_directed() {
        n * (n - 1)
    } else {
        n * (n - 1) / 2
    }
}

/// Checks `density`: compares the edge count against the documented
/// band for `sparse`/`moderate`/`dense`; `unconstrained` always holds.
pub fn validate_density(graph: &Graph, spec: &GraphSpec) -> PropertyValidation {
    let n = graph.node_count();
    let e = graph.edge_count();
    let max_possible = max_possible_simple_edges(graph).max(1);
    let ratio = e as f64 / max_possible as f64;
    let (valid, expected) = match spec.density {
        Density::Sparse => (ratio <= 0.25 || e <= n.max(1) * 2, "sparse"),
        Density::Moderate => (ratio > 0.05 && ratio < 0.9, "moderate"),
        Density::Dense => (ratio >= 0.5, "dense"),
        Density::Unconstrained => (true, "unconstrained"),
    };
    PropertyValidation::new("density", valid, expected, format!("{e} edges ({:.2} of max)", ratio))
}

/// Checks `completeness`: `complete` requires an edge between every
/// distinct pair; `incomplete` always holds (it's the absence of a
/// requirement, not a requirement that edges be missing).
pub fn validate_completeness(graph: &Graph, spec: &GraphSpec) -> PropertyValidation {
    let (valid, expected) = match spec.completeness {
        Completeness::Complete => {
            let max_possible = max_possible_simple_edges(graph);
            (graph.edge_count() >= max_possible && max_possible > 0 || graph.node_count() <= 1, "complete")
        }
        Completeness::Incomplete => (true, "incomplete"),
    };
    PropertyValidation::new("completeness", valid, expected, format!("{} edges", graph.edge_count()))
}
