//! Induced-subgraph isomorphism for small patterns (spec.md §4.6).
//!
//! Enumerates every k-subset of vertices (lexicographic, via
//! `itertools::Itertools::combinations`) and, for each, every
//! permutation (Heap's algorithm) looking for one under which the
//! pattern's edges correspond exactly to the induced subgraph's edges
//! — no missing edge, and no extra one. This is the shared substrate
//! spec.md §9 calls for: a single well-tested matcher rather than a
//! per-validator copy.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::graph::Graph;
use crate::patterns::library::PatternRef;

/// Maximum pattern size the engine will attempt (spec.md §4.6).
pub const MAX_PATTERN_SIZE: usize = 6;

struct Adjacency {
    node_ids: Vec<String>,
    matrix: Vec<Vec<bool>>,
}

fn build_adjacency(graph: &Graph) -> Adjacency {
    let node_ids: Vec<String> = graph.get_all_nodes().map(|n| n.id.clone()).collect();
    let index: HashMap<&str, usize> = node_ids.iter().enumerate().map(|(i, id)| (id.as_str(), i)).collect();
    let n = node_ids.len();
    let mut matrix = vec![vec![false; n]; n];
    for edge in graph.get_all_edges() {
        if let (Some(&a), Some(&b)) = (index.get(edge.source.as_str()), index.get(edge.target.as_str())) {
            matrix[a][b] = true;
            matrix[b][a] = true;
        }
    }
    Adjacency { node_ids, matrix }
}

/// Heap's algorithm: all permutations of `0..n`, as index arrays.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut a: Vec<usize> = (0..n).collect();
    let mut c = vec![0usize; n];
    result.push(a.clone());
    let mut i = 0;
    while i < n {
        if c[i] < i {
            if i % 2 == 0 {
                a.swap(0, i);
            } else {
                a.swap(c[i], i);
            }
            result.push(a.clone());
            c[i] += 1;
            i = 0;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
    result
}

fn matches_induced(adj: &Adjacency, subset: &[usize], perm: &[usize], pattern: PatternRef<'_>) -> bool {
    let k = pattern.vertex_count;
    for i in 0..k {
        for j in (i + 1)..k {
            let u = subset[perm[i]];
            let v = subset[perm[j]];
            if adj.matrix[u][v] != pattern.has_edge(i, j) {
                return false;
            }
        }
    }
    true
}

/// Whether `graph` contains `pattern` as an **induced** subgraph.
///
/// Returns `false` immediately if `graph` has fewer vertices than the
/// pattern. Worst case `Theta(C(n,k) * k! * k^2)`; tractable only for
/// `pattern.vertex_count <= MAX_PATTERN_SIZE`.
pub fn has_induced_subgraph(graph: &Graph, pattern: PatternRef<'_>) -> bool {
    let adj = build_adjacency(graph);
    let n = adj.node_ids.len();
    let k = pattern.vertex_count;
    if n < k || k == 0 || k > MAX_PATTERN_SIZE {
        return false;
    }

    let perms = permutations(k);
    for subset in (0..n).combinations(k) {
        for perm in &perms {
            if matches_induced(&adj, &subset, perm, pattern) {
                return true;
            }
        }
    }
    false
}

/// Runs every pattern in `patterns` against `graph`, grouping by
/// pattern size so each size's k-subsets are generated once and
/// shared across all patterns of that size; short-circuits a pattern
/// as soon as it's found.
///
/// Returns a map from pattern name to whether it was found as an
/// induced subgraph.
pub fn detect_multiple_subgraphs<'a>(
    graph: &Graph,
    patterns: &[PatternRef<'a>],
) -> HashMap<&'static str, bool> {
    let adj = build_adjacency(graph);
    let n = adj.node_ids.len();
    let mut found: HashMap<&'static str, bool> = patterns.iter().map(|p| (p.name, false)).collect();

    let mut by_size: HashMap<usize, Vec<PatternRef<'a>>> = HashMap::new();
    for &p in patterns {
        by_size.entry(p.vertex_count).or_default().push(p);
    }

    for (&k, group) in &by_size {
        if n < k || k == 0 || k > MAX_PATTERN_SIZE {
            continue;
        }
        let perms = permutations(k);
        let mut remaining: HashSet<&str> = group.iter().map(|p| p.name).collect();
        'subsets: for subset in (0..n).combinations(k) {
            for perm in &perms {
                let mut matched_this_round = Vec::new();
                for &pattern in group {
                    if remaining.contains(pattern.name) && matches_induced(&adj, &subset, perm, pattern) {
                        matched_this_round.push(pattern.name);
                    }
                }
                for name in matched_this_round {
                    remaining.remove(name);
                    *found.get_mut(name).expect("name came from found's keys") = true;
                }
                if remaining.is_empty() {
                    break 'subsets;
                }
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Node};
    use crate::patterns::library::{CLAW, DIAMOND};

    fn star_k13() -> Graph {
        let mut g = Graph::new(false);
        for id in ["0", "1", "2", "3"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("e0", "0", "1")).unwrap();
        g.add_edge(Edge::new("e1", "0", "2")).unwrap();
        g.add_edge(Edge::new("e2", "0", "3")).unwrap();
        g
    }

    #[test]
    fn claw_matches_itself() {
        let g = star_k13();
        assert!(has_induced_subgraph(&g, (&CLAW).into()));
    }

    #[test]
    fn extra_edge_breaks_induced_match() {
        let mut g = star_k13();
        g.add_edge(Edge::new("extra", "1", "2")).unwrap();
        assert!(!has_induced_subgraph(&g, (&CLAW).into()));
    }

    #[test]
    fn detect_multiple_agrees_with_single() {
        let g = star_k13();
        let patterns = vec![(&CLAW).into(), (&DIAMOND).into()];
        let batch = detect_multiple_subgraphs(&g, &patterns);
        assert_eq!(batch["claw"], has_induced_subgraph(&g, (&CLAW).into()));
        assert_eq!(batch["diamond"], has_induced_subgraph(&g, (&DIAMOND).into()));
    }
}
