//! Validators for explicitly named shapes and regularity (spec.md
//! §4.10's advanced facets): star, grid, complete bipartite,
//! tournament, k-regular.

use std::collections::HashSet;

use crate::graph::Graph;
use crate::spec_model::{AdvancedFacet, GraphSpec};

use super::PropertyValidation;

fn degree_sequence(graph: &Graph) -> Vec<usize> {
    graph
        .get_all_nodes()
        .map(|n| graph.get_neighbors(&n.id).map(|v| v.len()).unwrap_or(0))
        .collect()
}

/// Checks a requested `star { leaves }`: exactly one vertex of degree
/// `leaves` (the hub) and every other vertex of degree 1.
pub fn validate_star(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let leaves = spec.advanced.iter().find_map(|f| if let AdvancedFacet::Star { leaves } = f { Some(*leaves) } else { None })?;
    let degrees = degree_sequence(graph);
    let hubs = degrees.iter().filter(|&&d| d == leaves).count();
    let rest_are_leaves = degrees.iter().filter(|&&d| d != leaves).all(|&d| d == 1);
    let valid = graph.node_count() == leaves + 1 && hubs == 1 && rest_are_leaves;
    Some(PropertyValidation::new(
        "star",
        valid,
        format!("K_{{1,{leaves}}}"),
        format!("{} node(s), degree sequence {:?}", graph.node_count(), degrees),
    ))
}

/// Checks a requested `grid { rows, cols }`: node count matches
/// `rows * cols` and the degree sequence matches a rectangular
/// lattice's (corners degree 2, edges degree 3, interior degree 4; or
/// the degenerate degree-1 cases for a 1-by-n grid).
pub fn validate_grid(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let (rows, cols) = spec.advanced.iter().find_map(|f| {
        if let AdvancedFacet::Grid { rows, cols } = f {
            Some((*rows, *cols))
        } else {
            None
        }
    })?;
    let expected_nodes = rows * cols;
    let expected_edges = rows * cols.saturating_sub(1) + cols * rows.saturating_sub(1);
    let valid = graph.node_count() == expected_nodes && graph.edge_count() == expected_edges;
    Some(PropertyValidation::new(
        "grid",
        valid,
        format!("{rows}x{cols} grid ({expected_nodes} nodes, {expected_edges} edges)"),
        format!("{} nodes, {} edges", graph.node_count(), graph.edge_count()),
    ))
}

/// Checks a requested `completeBipartite { m, n }`: two parts of sizes
/// `m` and `n` with every cross edge present and no within-part edge.
pub fn validate_complete_bipartite(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let (m, n) = spec.advanced.iter().find_map(|f| {
        if let AdvancedFacet::CompleteBipartite { m, n } = f {
            Some((*m, *n))
        } else {
            None
        }
    })?;
    let left: HashSet<&str> = graph
        .get_all_nodes()
        .filter(|node| node.partition.as_deref() == Some("left"))
        .map(|node| node.id.as_str())
        .collect();
    let right: HashSet<&str> = graph
        .get_all_nodes()
        .filter(|node| node.partition.as_deref() == Some("right"))
        .map(|node| node.id.as_str())
        .collect();
    let no_internal_edges = graph
        .get_all_edges()
        .all(|e| !(left.contains(e.source.as_str()) && left.contains(e.target.as_str())) && !(right.contains(e.source.as_str()) && right.contains(e.target.as_str())));
    let valid = left.len() == m && right.len() == n && graph.edge_count() == m * n && no_internal_edges;
    Some(PropertyValidation::new(
        "completeBipartite",
        valid,
        format!("K_{{{m},{n}}}"),
        format!("parts of size {} and {}, {} edges", left.len(), right.len(), graph.edge_count()),
    ))
}

/// Checks `tournament`: directed, and exactly one directed edge between
/// every distinct pair of vertices.
pub fn validate_tournament(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !spec.advanced.iter().any(|f| matches!(f, AdvancedFacet::Tournament)) {
        return None;
    }
    let n = graph.node_count();
    let expected_edges = n * n.saturating_sub(1) / 2;
    let mut pairs: HashSet<(String, String)> = HashSet::new();
    let mut valid = graph.is_directed() && graph.edge_count() == expected_edges;
    if valid {
        for edge in graph.get_all_edges() {
            let key = if edge.source < edge.target {
                (edge.source.clone(), edge.target.clone())
            } else {
                (edge.target.clone(), edge.source.clone())
            };
            if !pairs.insert(key) {
                valid = false;
                break;
            }
        }
    }
    Some(PropertyValidation::new(
        "tournament",
        valid,
        format!("exactly one directed edge between every pair ({expected_edges} edges)"),
        format!("{} edges, directed={}", graph.edge_count(), graph.is_directed()),
    ))
}

/// Checks a requested `regularity { k }`: every vertex has degree
/// exactly `k`.
pub fn validate_regularity(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let k = spec.advanced.iter().find_map(|f| if let AdvancedFacet::Regularity { k } = f { Some(*k) } else { None })?;
    let degrees = degree_sequence(graph);
    let valid = degrees.iter().all(|&d| d == k);
    Some(PropertyValidation::new(
        "regularity",
        valid,
        format!("{k}-regular"),
        format!("degree sequence {degrees:?}"),
    ))
}
