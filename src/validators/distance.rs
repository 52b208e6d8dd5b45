//! Validators for distance-based bounds: diameter, radius, girth, and
//! circumference (spec.md §4.10's advanced facets).
//!
//! Diameter/radius use a plain all-pairs BFS, tractable for the graph
//! sizes this crate targets. Girth uses the standard BFS-from-every-
//! vertex shortest-cycle technique. Circumference (longest cycle) is
//! NP-hard in general; above a small vertex-count bound this validator
//! reports *inconclusive* (valid, with an explanatory message) rather
//! than attempting exhaustive search or returning a wrong answer.

use std::collections::{HashMap, VecDeque};

use crate::graph::Graph;
use crate::spec_model::AdvancedFacet;

use super::PropertyValidation;

const EXHAUSTIVE_CYCLE_SEARCH_LIMIT: usize = 12;

fn bfs_distances(graph: &Graph, start: &str) -> HashMap<String, u32> {
    let mut dist = HashMap::new();
    dist.insert(start.to_string(), 0);
    let mut queue = VecDeque::new();
    queue.push_back(start.to_string());
    while let Some(node) = queue.pop_front() {
        let d = dist[&node];
        if let Ok(neighbours) = graph.get_neighbors(&node) {
            for neighbour in neighbours {
                if !dist.contains_key(&neighbour) {
                    dist.insert(neighbour.clone(), d + 1);
                    queue.push_back(neighbour);
                }
            }
        }
    }
    dist
}

fn eccentricities(graph: &Graph) -> Option<Vec<u32>> {
    let nodes: Vec<String> = graph.get_all_nodes().map(|n| n.id.clone()).collect();
    if nodes.is_empty() {
        return Some(Vec::new());
    }
    let mut out = Vec::with_capacity(nodes.len());
    for node in &nodes {
        let dist = bfs_distances(graph, node);
        if dist.len() != nodes.len() {
            return None; // disconnected: diameter/radius undefined
        }
        out.push(*dist.values().max().expect("non-empty since node itself is in dist"));
    }
    Some(out)
}

fn facet_bound<'a>(spec: &'a crate::spec_model::GraphSpec, matcher: impl Fn(&AdvancedFacet) -> Option<u32>) -> Option<u32> {
    spec.advanced.iter().find_map(|f| matcher(f))
}

/// Checks a requested `diameterBound` (spec.md's advanced facets): the
/// graph's diameter (max eccentricity) must not exceed `max`. Reports
/// invalid (not inconclusive) when the graph is disconnected, since an
/// infinite diameter trivially violates any finite bound.
pub fn validate_diameter_bound(graph: &Graph, spec: &crate::spec_model::GraphSpec) -> Option<PropertyValidation> {
    let max = facet_bound(spec, |f| if let AdvancedFacet::DiameterBound { max } = f { Some(*max) } else { None })?;
    let actual = eccentricities(graph);
    let (valid, actual_desc) = match actual {
        Some(ecc) => {
            let diameter = ecc.into_iter().max().unwrap_or(0);
            (diameter <= max, diameter.to_string())
        }
        None => (false, "infinite (graph disconnected)".to_string()),
    };
    Some(PropertyValidation::new("diameterBound", valid, format!("<= {max}"), actual_desc))
}

/// Checks a requested `radiusBound`: the graph's radius (min
/// eccentricity) must not exceed `max`.
pub fn validate_radius_bound(graph: &Graph, spec: &crate::spec_model::GraphSpec) -> Option<PropertyValidation> {
    let max = facet_bound(spec, |f| if let AdvancedFacet::RadiusBound { max } = f { Some(*max) } else { None })?;
    let actual = eccentricities(graph);
    let (valid, actual_desc) = match actual {
        Some(ecc) => {
            let radius = ecc.into_iter().min().unwrap_or(0);
            (radius <= max, radius.to_string())
        }
        None => (false, "infinite (graph disconnected)".to_string()),
    };
    Some(PropertyValidation::new("radiusBound", valid, format!("<= {max}"), actual_desc))
}

fn girth(graph: &Graph) -> Option<u32> {
    let nodes: Vec<String> = graph.get_all_nodes().map(|n| n.id.clone()).collect();
    let mut best: Option<u32> = None;
    for start in &nodes {
        let mut dist: HashMap<String, u32> = HashMap::new();
        let mut parent: HashMap<String, String> = HashMap::new();
        dist.insert(start.clone(), 0);
        let mut queue = VecDeque::new();
        queue.push_back(start.clone());
        while let Some(node) = queue.pop_front() {
            let d = dist[&node];
            if let Ok(neighbours) = graph.get_neighbors(&node) {
                for neighbour in neighbours {
                    if neighbour == node {
                        best = Some(best.map_or(1, |b| b.min(1)));
                        continue;
                    }
                    match dist.get(&neighbour) {
                        None => {
                            dist.insert(neighbour.clone(), d + 1);
                            parent.insert(neighbour.clone(), node.clone());
                            queue.push_back(neighbour);
                        }
                        Some(&nd) => {
                            if parent.get(&node) != Some(&neighbour) {
                                let cycle_len = d + nd + 1;
                                best = Some(best.map_or(cycle_len, |b| b.min(cycle_len)));
                            }
                        }
                    }
                }
            }
        }
    }
    best
}

/// Checks a requested `girthBound`: the graph's girth (shortest cycle
/// length) must be at least `min`. A graph with no cycle at all is
/// reported with actual `"acyclic (no girth)"` and is treated as
/// satisfying any lower bound (vacuously: it has no cycle shorter than
/// `min`).
pub fn validate_girth_bound(graph: &Graph, spec: &crate::spec_model::GraphSpec) -> Option<PropertyValidation> {
    let min = facet_bound(spec, |f| if let AdvancedFacet::GirthBound { min } = f { Some(*min) } else { None })?;
    let (valid, actual_desc) = match girth(graph) {
        Some(g) => (g >= min, g.to_string()),
        None => (true, "acyclic (no girth)".to_string()),
    };
    Some(PropertyValidation::new("girthBound", valid, format!(">= {min}"), actual_desc))
}

/// Finds the length of the longest simple cycle reachable from `start`
/// via DFS backtracking, bounded by [`EXHAUSTIVE_CYCLE_SEARCH_LIMIT`].
fn longest_cycle_from(graph: &Graph, start: &str) -> u32 {
    let mut best = 0u32;
    let mut visited: Vec<String> = vec![start.to_string()];
    dfs_longest_cycle(graph, start, start, &mut visited, &mut best);
    best
}

fn dfs_longest_cycle(graph: &Graph, start: &str, current: &str, visited: &mut Vec<String>, best: &mut u32) {
    let neighbours = graph.get_neighbors(current).unwrap_or_default();
    for neighbour in neighbours {
        if neighbour == start && visited.len() >= 3 {
            *best = (*best).max(visited.len() as u32);
            continue;
        }
        if !visited.contains(&neighbour) {
            visited.push(neighbour.clone());
            dfs_longest_cycle(graph, start, &neighbour, visited, best);
            visited.pop();
        }
    }
}

/// Checks a requested `circumferenceBound`: the length of the longest
/// cycle must not exceed `max`. Above [`EXHAUSTIVE_CYCLE_SEARCH_LIMIT`]
/// vertices this is reported *inconclusive* (`valid = true`, with a
/// message) rather than computed exactly, since longest-cycle search is
/// NP-hard.
pub fn validate_circumference_bound(graph: &Graph, spec: &crate::spec_model::GraphSpec) -> Option<PropertyValidation> {
    let max = facet_bound(spec, |f| if let AdvancedFacet::CircumferenceBound { max } = f { Some(*max) } else { None })?;
    if graph.node_count() > EXHAUSTIVE_CYCLE_SEARCH_LIMIT {
        return Some(
            PropertyValidation::new("circumferenceBound", true, format!("<= {max}"), "not computed")
                .with_message(format!(
                    "graph has more than {EXHAUSTIVE_CYCLE_SEARCH_LIMIT} vertices; longest-cycle search skipped as inconclusive"
                )),
        );
    }
    let longest = graph
        .get_all_nodes()
        .map(|n| longest_cycle_from(graph, &n.id))
        .max()
        .unwrap_or(0);
    Some(PropertyValidation::new("circumferenceBound", longest <= max, format!("<= {max}"), longest.to_string()))
}
