//! `Graph`: an insertion-ordered adjacency-list store with fallible
//! mutation, directed or undirected.
//!
//! Modeled after the role `petgraph::graph::Graph` plays in the teacher
//! crate, but concrete rather than generic: nodes and edges carry
//! string identities (see [`crate::model`]) rather than arbitrary
//! associated weights, because GraphBox's graphs are produced by a
//! spec-driven generator and consumed by a validator battery that both
//! need stable, serializable ids.

use indexmap::{IndexMap, IndexSet};

use crate::error::{GraphBoxError, GraphBoxResult};
use crate::model::{Edge, Node};

/// An adjacency-list graph, directed or undirected.
///
/// Invariant: adjacency is consistent with the edge set at every
/// observable moment (spec.md §3). For undirected graphs every edge
/// contributes to both endpoints' adjacency sets; self-loops are
/// stored once in adjacency regardless of directedness.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    nodes: IndexMap<String, Node>,
    edges: IndexMap<String, Edge>,
    /// node id -> neighbour ids reachable via a single hop, insertion ordered.
    adjacency: IndexMap<String, IndexSet<String>>,
    /// node id -> ids of edges where the node is the relevant "outgoing" endpoint.
    outgoing: IndexMap<String, Vec<String>>,
}

impl Graph {
    /// Creates an empty graph with the given directedness.
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            adjacency: IndexMap::new(),
            outgoing: IndexMap::new(),
        }
    }

    /// Whether this graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Inserts a node. Fails with [`GraphBoxError::DuplicateNode`] if
    /// the id already exists.
    pub fn add_node(&mut self, node: Node) -> GraphBoxResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphBoxError::DuplicateNode { id: node.id });
        }
        self.adjacency.insert(node.id.clone(), IndexSet::new());
        self.outgoing.insert(node.id.clone(), Vec::new());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Removes a node and every edge incident to it, atomically. Fails
    /// with [`GraphBoxError::InvalidInput`] if the node is absent.
    pub fn remove_node(&mut self, id: &str) -> GraphBoxResult<()> {
        if !self.nodes.contains_key(id) {
            return Err(GraphBoxError::InvalidInput {
                message: format!("remove_node: no such node {id}"),
            });
        }
        let incident: Vec<String> = self
            .edges
            .values()
            .filter(|e| e.source == id || e.target == id)
            .map(|e| e.id.clone())
            .collect();
        for edge_id in incident {
            // already validated to exist; the invariant guarantees this succeeds
            self.remove_edge(&edge_id)?;
        }
        self.nodes.shift_remove(id);
        self.adjacency.shift_remove(id);
        self.outgoing.shift_remove(id);
        Ok(())
    }

    /// Whether a node with the given id exists.
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Fetches a node by id, if present.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All nodes, in insertion order.
    pub fn get_all_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges, in insertion order.
    pub fn get_all_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Fetches an edge by id, if present.
    pub fn get_edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Inserts an edge. Fails with [`GraphBoxError::InvalidInput`] if
    /// either endpoint is unknown. Parallel edges are permitted at the
    /// store level; `simple` vs `multi` is a spec-level concern
    /// enforced by the `edgeMultiplicity` validator, not the store.
    pub fn add_edge(&mut self, edge: Edge) -> GraphBoxResult<()> {
        if !self.nodes.contains_key(&edge.source) {
            return Err(GraphBoxError::InvalidInput {
                message: format!("add_edge: unknown source {}", edge.source),
            });
        }
        if !self.nodes.contains_key(&edge.target) {
            return Err(GraphBoxError::InvalidInput {
                message: format!("add_edge: unknown target {}", edge.target),
            });
        }
        if self.edges.contains_key(&edge.id) {
            return Err(GraphBoxError::DuplicateEdge { id: edge.id });
        }

        let effective_directed = edge.directed_override.unwrap_or(self.directed);
        let is_loop = edge.is_self_loop();

        self.outgoing
            .get_mut(&edge.source)
            .expect("source validated above")
            .push(edge.id.clone());

        if effective_directed {
            self.adjacency
                .get_mut(&edge.source)
                .expect("source validated above")
                .insert(edge.target.clone());
        } else {
            self.adjacency
                .get_mut(&edge.source)
                .expect("source validated above")
                .insert(edge.target.clone());
            if !is_loop {
                self.adjacency
                    .get_mut(&edge.target)
                    .expect("target validated above")
                    .insert(edge.source.clone());
                self.outgoing
                    .get_mut(&edge.target)
                    .expect("target validated above")
                    .push(edge.id.clone());
            }
        }

        self.edges.insert(edge.id.clone(), edge);
        Ok(())
    }

    /// Removes an edge, updating adjacency consistently. Fails with
    /// [`GraphBoxError::InvalidInput`] if absent.
    pub fn remove_edge(&mut self, id: &str) -> GraphBoxResult<()> {
        let edge = self
            .edges
            .shift_remove(id)
            .ok_or_else(|| GraphBoxError::InvalidInput {
                message: format!("remove_edge: no such edge {id}"),
            })?;

        let effective_directed = edge.directed_override.unwrap_or(self.directed);
        let is_loop = edge.is_self_loop();

        if let Some(out) = self.outgoing.get_mut(&edge.source) {
            out.retain(|e| e != id);
        }
        if !effective_directed && !is_loop {
            if let Some(out) = self.outgoing.get_mut(&edge.target) {
                out.retain(|e| e != id);
            }
        }

        // An adjacency link `u -> v` survives removal of this edge iff
        // some other surviving edge still justifies it (parallel edges).
        self.recompute_adjacency_link(&edge.source, &edge.target);
        if !effective_directed && !is_loop {
            self.recompute_adjacency_link(&edge.target, &edge.source);
        }
        Ok(())
    }

    fn recompute_adjacency_link(&mut self, from: &str, to: &str) {
        let still_justified = self.edges.values().any(|e| {
            let eff_dir = e.directed_override.unwrap_or(self.directed);
            if eff_dir {
                e.source == from && e.target == to
            } else {
                (e.source == from && e.target == to) || (e.source == to && e.target == from)
            }
        });
        if !still_justified {
            if let Some(adj) = self.adjacency.get_mut(from) {
                adj.shift_remove(to);
            }
        }
    }

    /// Neighbours of `id`. For undirected graphs, returns the union of
    /// out/in neighbours (which is how adjacency is stored already).
    pub fn get_neighbors(&self, id: &str) -> GraphBoxResult<Vec<String>> {
        self.adjacency
            .get(id)
            .map(|set| set.iter().cloned().collect())
            .ok_or_else(|| GraphBoxError::NodeNotFound { id: id.to_string() })
    }

    /// Outgoing edges of `id`: for directed graphs, edges where
    /// `source == id`; for undirected graphs, edges where the node
    /// appears as either endpoint.
    pub fn get_outgoing_edges(&self, id: &str) -> GraphBoxResult<Vec<&Edge>> {
        if !self.nodes.contains_key(id) {
            return Err(GraphBoxError::NodeNotFound { id: id.to_string() });
        }
        let ids = self.outgoing.get(id).cloned().unwrap_or_default();
        Ok(ids.iter().filter_map(|eid| self.edges.get(eid)).collect())
    }

    /// Incoming edges of `id` (edges where `target == id`, regardless
    /// of the graph's overall directedness). Used by backward
    /// reachability and several validators.
    pub fn get_incoming_edges(&self, id: &str) -> GraphBoxResult<Vec<&Edge>> {
        if !self.nodes.contains_key(id) {
            return Err(GraphBoxError::NodeNotFound { id: id.to_string() });
        }
        Ok(self.edges.values().filter(|e| e.target == id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_query_nodes() {
        let mut g = Graph::new(false);
        g.add_node(Node::new("a")).unwrap();
        g.add_node(Node::new("b")).unwrap();
        assert!(g.has_node("a"));
        assert_eq!(g.node_count(), 2);
        assert!(matches!(
            g.add_node(Node::new("a")),
            Err(GraphBoxError::DuplicateNode { .. })
        ));
    }

    #[test]
    fn undirected_adjacency_is_symmetric() {
        let mut g = Graph::new(false);
        g.add_node(Node::new("a")).unwrap();
        g.add_node(Node::new("b")).unwrap();
        g.add_edge(Edge::new("e1", "a", "b")).unwrap();
        assert!(g.get_neighbors("a").unwrap().contains(&"b".to_string()));
        assert!(g.get_neighbors("b").unwrap().contains(&"a".to_string()));
    }

    #[test]
    fn remove_node_removes_incident_edges() {
        let mut g = Graph::new(true);
        g.add_node(Node::new("a")).unwrap();
        g.add_node(Node::new("b")).unwrap();
        g.add_edge(Edge::new("e1", "a", "b")).unwrap();
        g.remove_node("a").unwrap();
        assert!(!g.has_node("a"));
        assert!(g.get_edge("e1").is_none());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn add_edge_rejects_unknown_endpoint() {
        let mut g = Graph::new(true);
        g.add_node(Node::new("a")).unwrap();
        assert!(matches!(
            g.add_edge(Edge::new("e1", "a", "missing")),
            Err(GraphBoxError::InvalidInput { .. })
        ));
    }

    #[test]
    fn self_loop_stored_once_in_adjacency() {
        let mut g = Graph::new(false);
        g.add_node(Node::new("a")).unwrap();
        g.add_edge(Edge::new("e1", "a", "a")).unwrap();
        assert_eq!(g.get_neighbors("a").unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn directed_out_degree_sums_to_edge_count() {
        let mut g = Graph::new(true);
        for id in ["a", "b", "c"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("e1", "a", "b")).unwrap();
        g.add_edge(Edge::new("e2", "b", "c")).unwrap();
        g.add_edge(Edge::new("e3", "a", "c")).unwrap();
        let total_out_degree: usize = g
            .get_all_nodes()
            .map(|n| g.get_outgoing_edges(&n.id).unwrap().len())
            .sum();
        assert_eq!(total_out_degree, g.edge_count());
    }

    #[test]
    fn undirected_degree_sum_is_twice_edge_count_minus_self_loops() {
        let mut g = Graph::new(false);
        for id in ["a", "b", "c"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("e1", "a", "b")).unwrap();
        g.add_edge(Edge::new("e2", "b", "c")).unwrap();
        g.add_edge(Edge::new("loop", "a", "a")).unwrap();
        let total_degree: usize = g.get_all_nodes().map(|n| g.get_neighbors(&n.id).unwrap().len()).sum();
        let self_loops = g.get_all_edges().filter(|e| e.is_self_loop()).count();
        assert_eq!(total_degree, 2 * g.edge_count() - self_loops);
    }
}
