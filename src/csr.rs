//! `CsrSnapshot`: a read-only Compressed Sparse Row projection of a
//! [`Graph`], for read-dominated algorithms.
//!
//! Grounded on `petgraph::csr::Csr` (the three-packed-array layout is
//! the same idea) but value-typed and string-keyed rather than a
//! generic container the caller mutates in place: spec.md §4.2/§9
//! treats a CSR as an immutable snapshot with no observer pattern —
//! callers who need a fresh view rebuild one after mutating the graph.

use crate::error::{GraphBoxError, GraphBoxResult};
use crate::graph::Graph;

/// A compressed-sparse-row snapshot of a [`Graph`] at the moment
/// [`to_csr`] was called. Mutating the source graph afterwards does
/// not update this snapshot.
#[derive(Debug, Clone)]
pub struct CsrSnapshot {
    /// position -> node id.
    pub node_ids: Vec<String>,
    /// offsets[i]..offsets[i+1] indexes into `neighbours`/`weights` for node i.
    pub offsets: Vec<usize>,
    /// packed neighbour positions.
    pub neighbours: Vec<usize>,
    /// parallel weight array (defaults to 1.0 when the source edge has none).
    pub weights: Vec<f64>,
    directed: bool,
}

impl CsrSnapshot {
    /// Whether the source graph was directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes in the snapshot.
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Neighbour positions of node at `position`.
    pub fn neighbours_of(&self, position: usize) -> &[usize] {
        &self.neighbours[self.offsets[position]..self.offsets[position + 1]]
    }

    /// Weights parallel to [`CsrSnapshot::neighbours_of`].
    pub fn weights_of(&self, position: usize) -> &[f64] {
        &self.weights[self.offsets[position]..self.offsets[position + 1]]
    }
}

/// Builds a [`CsrSnapshot`] from `graph`.
///
/// Algorithm (spec.md §4.2): enumerate nodes to assign positions;
/// count each directed edge's contribution to its source's degree
/// (and, for undirected non-self-loop edges, the target's too);
/// prefix-sum to produce offsets; place neighbour indices and weights
/// at cursor positions tracked per node, emitting the reverse
/// direction too for undirected non-self-loop edges. Self-loops on an
/// undirected graph are stored once, consistent with spec.md §9's
/// documented `sum_of_degrees != 2*|E|` contract when self-loops exist.
pub fn to_csr(graph: &Graph) -> GraphBoxResult<CsrSnapshot> {
    let node_ids: Vec<String> = graph.get_all_nodes().map(|n| n.id.clone()).collect();
    let n = node_ids.len();
    if n > u32::MAX as usize {
        return Err(GraphBoxError::IndexOverflow {
            message: format!("{n} nodes exceeds the CSR index capacity"),
        });
    }

    let mut position_of = std::collections::HashMap::with_capacity(n);
    for (idx, id) in node_ids.iter().enumerate() {
        position_of.insert(id.clone(), idx);
    }

    let mut degree = vec![0usize; n];
    for edge in graph.get_all_edges() {
        let effective_directed = edge.directed_override.unwrap_or(graph.is_directed());
        let src = position_of[&edge.source];
        let tgt = position_of[&edge.target];
        degree[src] += 1;
        if !effective_directed && !edge.is_self_loop() {
            degree[tgt] += 1;
        }
    }

    let total: usize = degree.iter().sum();
    if total > u32::MAX as usize {
        return Err(GraphBoxError::IndexOverflow {
            message: format!("{total} directed neighbour slots exceeds the CSR index capacity"),
        });
    }

    let mut offsets = vec![0usize; n + 1];
    for i in 0..n {
        offsets[i + 1] = offsets[i] + degree[i];
    }

    let mut cursor = offsets.clone();
    let mut neighbours = vec![0usize; total];
    let mut weights = vec![0f64; total];

    for edge in graph.get_all_edges() {
        let effective_directed = edge.directed_override.unwrap_or(graph.is_directed());
        let src = position_of[&edge.source];
        let tgt = position_of[&edge.target];
        let w = edge.effective_weight();

        neighbours[cursor[src]] = tgt;
        weights[cursor[src]] = w;
        cursor[src] += 1;

        if !effective_directed && !edge.is_self_loop() {
            neighbours[cursor[tgt]] = src;
            weights[cursor[tgt]] = w;
            cursor[tgt] += 1;
        }
    }

    Ok(CsrSnapshot {
        node_ids,
        offsets,
        neighbours,
        weights,
        directed: graph.is_directed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Node};

    #[test]
    fn directed_csr_offsets_match_out_degree() {
        let mut g = Graph::new(true);
        for id in ["a", "b", "c"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("e1", "a", "b")).unwrap();
        g.add_edge(Edge::new("e2", "a", "c")).unwrap();
        let csr = to_csr(&g).unwrap();
        assert_eq!(csr.offsets[csr.node_count()], 2);
        let a_pos = csr.node_ids.iter().position(|n| n == "a").unwrap();
        assert_eq!(csr.neighbours_of(a_pos).len(), 2);
    }

    #[test]
    fn undirected_self_loop_counted_once() {
        let mut g = Graph::new(false);
        g.add_node(Node::new("a")).unwrap();
        g.add_edge(Edge::new("e1", "a", "a")).unwrap();
        let csr = to_csr(&g).unwrap();
        assert_eq!(csr.offsets[1], 1);
    }

    #[test]
    fn undirected_edge_emits_both_directions() {
        let mut g = Graph::new(false);
        g.add_node(Node::new("a")).unwrap();
        g.add_node(Node::new("b")).unwrap();
        g.add_edge(Edge::new("e1", "a", "b").with_weight(2.5)).unwrap();
        let csr = to_csr(&g).unwrap();
        assert_eq!(csr.offsets[csr.node_count()], 2);
        assert_eq!(csr.weights[0], 2.5);
        assert_eq!(csr.weights[1], 2.5);
    }
}
