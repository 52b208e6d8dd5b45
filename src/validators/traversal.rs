//! Validators for whole-graph traversal properties (spec.md §4.10):
//! Eulerian circuits (tractable, checked exactly) and Hamiltonian
//! cycles/paths (NP-complete in general; checked exactly only below a
//! small vertex-count bound, reported inconclusive above it).

use std::collections::HashSet;

use crate::graph::Graph;
use crate::spec_model::{AdvancedFacet, GraphSpec};

use super::PropertyValidation;

const EXHAUSTIVE_SEARCH_LIMIT: usize = 12;

fn is_weakly_connected_ignoring_isolated(graph: &Graph) -> bool {
    let non_isolated: Vec<String> = graph
        .get_all_nodes()
        .filter(|n| graph.get_neighbors(&n.id).map(|v| !v.is_empty()).unwrap_or(false))
        .map(|n| n.id.clone())
        .collect();
    if non_isolated.len() <= 1 {
        return true;
    }
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue = std::collections::VecDeque::new();
    queue.push_back(non_isolated[0].clone());
    visited.insert(non_isolated[0].clone());
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
    non_isolated.iter().all(|id| visited.contains(id))
}

/// Checks `eulerian`: an Eulerian circuit exists iff the (non-isolated
/// part of the) graph is connected and, for undirected graphs, every
/// vertex has even degree, or for directed graphs, every vertex's
/// in-degree equals its out-degree.
pub fn validate_eulerian(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !spec.advanced.iter().any(|f| matches!(f, AdvancedFacet::Eulerian)) {
        return None;
    }
    if !is_weakly_connected_ignoring_isolated(graph) {
        return Some(PropertyValidation::new("eulerian", false, "connected + balanced degree", "disconnected"));
    }
    let degree_ok = if graph.is_directed() {
        graph.get_all_nodes().all(|n| {
            let out = graph.get_outgoing_edges(&n.id).map(|v| v.len()).unwrap_or(0);
            let inc = graph.get_incoming_edges(&n.id).map(|v| v.len()).unwrap_or(0);
            out == inc
        })
    } else {
        graph.get_all_nodes().all(|n| {
            let mut degree = 0usize;
            if let Ok(edges) = graph.get_outgoing_edges(&n.id) {
                degree = edges.len();
            }
            degree % 2 == 0
        })
    };
    Some(PropertyValidation::new(
        "eulerian",
        degree_ok,
        "connected, every vertex balanced/even degree",
        if degree_ok { "balanced" } else { "unbalanced degree found" },
    ))
}

fn has_hamiltonian_cycle(graph: &Graph) -> bool {
    let nodes: Vec<String> = graph.get_all_nodes().map(|n| n.id.clone()).collect();
    let n = nodes.len();
    if n < 3 {
        return false;
    }
    let start = nodes[0].clone();
    let mut path = vec![start.clone()];
    let mut visited: HashSet<String> = [start.clone()].into_iter().collect();
    backtrack_cycle(graph, &start, &mut path, &mut visited, n)
}

fn backtrack_cycle(graph: &Graph, start: &str, path: &mut Vec<String>, visited: &mut HashSet<String>, total: usize) -> bool {
    if path.len() == total {
        return graph.get_neighbors(path.last().expect("non-empty")).map(|v| v.contains(&start.to_string())).unwrap_or(false);
    }
    let current = path.last().expect("non-empty").clone();
    let neighbours = graph.get_neighbors(&current).unwrap_or_default();
    for neighbour in neighbours {
        if !visited.contains(&neighbour) {
            visited.insert(neighbour.clone());
            path.push(neighbour.clone());
            if backtrack_cycle(graph, start, path, visited, total) {
                return true;
            }
            path.pop();
            visited.remove(&neighbour);
        }
    }
    false
}

fn has_hamiltonian_path(graph: &Graph) -> bool {
    let nodes: Vec<String> = graph.get_all_nodes().map(|n| n.id.clone()).collect();
    let n = nodes.len();
    if n == 0 {
        return true;
    }
    for start in &nodes {
        let mut path = vec![start.clone()];
        let mut visited: HashSet<String> = [start.clone()].into_iter().collect();
        if backtrack_path(graph, &mut path, &mut visited, n) {
            return true;
        }
    }
    false
}

fn backtrack_path(graph: &Graph, path: &mut Vec<String>, visited: &mut HashSet<String>, total: usize) -> bool {
    if path.len() == total {
        return true;
    }
    let current = path.last().expect("non-empty").clone();
    let neighbours = graph.get_neighbors(&current).unwrap_or_default();
    for neighbour in neighbours {
        if !visited.contains(&neighbour) {
            visited.insert(neighbour.clone());
            path.push(neighbour.clone());
            if backtrack_path(graph, path, visited, total) {
                return true;
            }
            path.pop();
            visited.remove(&neighbour);
        }
    }
    false
}

/// Checks `hamiltonian`: a Hamiltonian cycle exists. Exhaustive
/// backtracking search below [`EXHAUSTIVE_SEARCH_LIMIT`] vertices;
/// above it, reports inconclusive (`valid = true`, with a message)
/// rather than an unreliable guess.
pub fn validate_hamiltonian(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !spec.advanced.iter().any(|f| matches!(f, AdvancedFacet::Hamiltonian)) {
        return None;
    }
    if graph.node_count() > EXHAUSTIVE_SEARCH_LIMIT {
        return Some(
            PropertyValidation::new("hamiltonian", true, "has a Hamiltonian cycle", "not computed")
                .with_message(format!("graph has more than {EXHAUSTIVE_SEARCH_LIMIT} vertices; search skipped as inconclusive")),
        );
    }
    let found = has_hamiltonian_cycle(graph);
    Some(PropertyValidation::new(
        "hamiltonian",
        found,
        "has a Hamiltonian cycle",
        if found { "found" } else { "none found" },
    ))
}

/// Checks `traceable`: a Hamiltonian path exists (weaker than
/// [`validate_hamiltonian`] — a path, not necessarily a cycle). Same
/// exhaustive-search bound and inconclusive-above-bound behavior.
pub fn validate_traceable(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !spec.advanced.iter().any(|f| matches!(f, AdvancedFacet::Traceable)) {
        return None;
    }
    if graph.node_count() > EXHAUSTIVE_SEARCH_LIMIT {
        return Some(
            PropertyValidation::new("traceable", true, "has a Hamiltonian path", "not computed")
                .with_message(format!("graph has more than {EXHAUSTIVE_SEARCH_LIMIT} vertices; search skipped as inconclusive")),
        );
    }
    let found = has_hamiltonian_path(graph);
    Some(PropertyValidation::new(
        "traceable",
        found,
        "has a Hamiltonian path",
        if found { "found" } else { "none found" },
    ))
}
