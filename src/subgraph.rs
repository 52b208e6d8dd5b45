//! Subgraph extraction: induced subgraph, ego-network, reachability
//! subgraph, and attribute-based filtering (spec.md §4.5).

use std::collections::{HashSet, VecDeque};

use crate::error::{GraphBoxError, GraphBoxResult};
use crate::graph::Graph;
use crate::model::AttrValue;

/// Direction used by [`reachability_subgraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow outgoing edges.
    Forward,
    /// Follow incoming edges.
    Backward,
}

/// Builds the subgraph induced by `vertices`: nodes = `vertices`,
/// edges = every edge of `graph` whose endpoints are both in
/// `vertices`. Preserves directedness and all attributes.
pub fn induced_subgraph(graph: &Graph, vertices: &HashSet<String>) -> GraphBoxResult<Graph> {
    for v in vertices {
        if !graph.has_node(v) {
            return Err(GraphBoxError::NodeNotFound { id: v.clone() });
        }
    }
    let mut out = Graph::new(graph.is_directed());
    for id in vertices {
        out.add_node(graph.get_node(id).expect("validated above").clone())?;
    }
    for edge in graph.get_all_edges() {
        if vertices.contains(&edge.source) && vertices.contains(&edge.target) {
            out.add_edge(edge.clone())?;
        }
    }
    Ok(out)
}

/// Multi-source ego-network: the induced subgraph on every vertex
/// within `radius` hops of any seed, via a bounded BFS started from
/// the whole seed set collectively.
///
/// Directed traversal follows outgoing edges only; undirected graphs
/// are traversed symmetrically (since `Graph::get_outgoing_edges`
/// already returns both-endpoint edges for undirected graphs).
pub fn ego_network(
    graph: &Graph,
    seeds: &HashSet<String>,
    radius: u32,
    include_seed: bool,
) -> GraphBoxResult<Graph> {
    if seeds.is_empty() {
        return Err(GraphBoxError::InvalidInput {
            message: "ego_network: seed set must not be empty".to_string(),
        });
    }
    for s in seeds {
        if !graph.has_node(s) {
            return Err(GraphBoxError::NodeNotFound { id: s.clone() });
        }
    }

    let mut depth: std::collections::HashMap<String, u32> = std::collections::HashMap::new();
    let mut queue = VecDeque::new();
    for s in seeds {
        depth.insert(s.clone(), 0);
        queue.push_back(s.clone());
    }

    while let Some(node) = queue.pop_front() {
        let d = depth[&node];
        if d >= radius {
            continue;
        }
        for edge in graph.get_outgoing_edges(&node)? {
            let neighbour = if edge.source == node {
                edge.target.clone()
            } else {
                edge.source.clone()
            };
            if !depth.contains_key(&neighbour) {
                depth.insert(neighbour.clone(), d + 1);
                queue.push_back(neighbour);
            }
        }
    }

    let mut vertices: HashSet<String> = depth.into_keys().collect();
    if !include_seed {
        for s in seeds {
            vertices.remove(s);
        }
    }
    induced_subgraph(graph, &vertices)
}

/// Reachability subgraph: BFS from `source` in `direction`, optionally
/// bounded by `max_depth`, returning the induced subgraph on the
/// reachable set.
pub fn reachability_subgraph(
    graph: &Graph,
    source: &str,
    direction: Direction,
    max_depth: Option<u32>,
) -> GraphBoxResult<Graph> {
    if !graph.has_node(source) {
        return Err(GraphBoxError::NodeNotFound { id: source.to_string() });
    }

    let mut depth: std::collections::HashMap<String, u32> = std::collections::HashMap::new();
    depth.insert(source.to_string(), 0);
    let mut queue = VecDeque::new();
    queue.push_back(source.to_string());

    while let Some(node) = queue.pop_front() {
        let d = depth[&node];
        if let Some(limit) = max_depth {
            if d >= limit {
                continue;
            }
        }
        let neighbours = match direction {
            Direction::Forward => graph
                .get_outgoing_edges(&node)?
                .into_iter()
                .filter(|e| e.source == node)
                .map(|e| e.target.clone())
                .collect::<Vec<_>>(),
            Direction::Backward => graph
                .get_incoming_edges(&node)?
                .into_iter()
                .map(|e| e.source.clone())
                .collect::<Vec<_>>(),
        };
        for neighbour in neighbours {
            if !depth.contains_key(&neighbour) {
                depth.insert(neighbour.clone(), d + 1);
                queue.push_back(neighbour);
            }
        }
    }

    let vertices: HashSet<String> = depth.into_keys().collect();
    induced_subgraph(graph, &vertices)
}

/// Combinator for [`AttributeFilter`]'s node/edge clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Both the node clause and the edge clause must hold.
    And,
    /// Either clause holding is sufficient.
    Or,
}

/// A pair of optional node/edge predicates plus optional allowed-value
/// sets, combined under [`FilterMode`]. Two-pass application: nodes
/// satisfying the node clause survive, then edges satisfying the edge
/// clause *and* having both endpoints survive.
pub struct AttributeFilter<'a> {
    /// Optional node predicate.
    pub node_predicate: Option<Box<dyn Fn(&crate::model::Node) -> bool + 'a>>,
    /// Optional edge predicate.
    pub edge_predicate: Option<Box<dyn Fn(&crate::model::Edge) -> bool + 'a>>,
    /// Optional set of allowed edge types.
    pub allowed_edge_types: Option<HashSet<String>>,
    /// Optional map of node attribute key -> allowed value.
    pub allowed_node_attributes: Option<std::collections::HashMap<String, AttrValue>>,
    /// How the node and edge clauses combine.
    pub mode: FilterMode,
}

impl<'a> AttributeFilter<'a> {
    /// An empty filter (everything passes) combined with [`FilterMode::And`].
    pub fn new() -> Self {
        AttributeFilter {
            node_predicate: None,
            edge_predicate: None,
            allowed_edge_types: None,
            allowed_node_attributes: None,
            mode: FilterMode::And,
        }
    }

    fn node_clause(&self, node: &crate::model::Node) -> bool {
        let predicate_ok = self.node_predicate.as_ref().map_or(true, |p| p(node));
        let attrs_ok = self.allowed_node_attributes.as_ref().map_or(true, |allowed| {
            allowed
                .iter()
                .all(|(k, v)| node.attributes.get(k) == Some(v))
        });
        match self.mode {
            FilterMode::And => predicate_ok && attrs_ok,
            FilterMode::Or => predicate_ok || attrs_ok,
        }
    }

    fn edge_clause(&self, edge: &crate::model::Edge) -> bool {
        let predicate_ok = self.edge_predicate.as_ref().map_or(true, |p| p(edge));
        let type_ok = self.allowed_edge_types.as_ref().map_or(true, |allowed| {
            edge.edge_type.as_ref().is_some_and(|t| allowed.contains(t))
        });
        match self.mode {
            FilterMode::And => predicate_ok && type_ok,
            FilterMode::Or => predicate_ok || type_ok,
        }
    }
}

impl Default for AttributeFilter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `filter` to `graph`: retain nodes satisfying the node
/// clause, then retain edges satisfying both the edge clause and
/// having both endpoints retained.
pub fn attribute_filter(graph: &Graph, filter: &AttributeFilter<'_>) -> GraphBoxResult<Graph> {
    let surviving_nodes: HashSet<String> = graph
        .get_all_nodes()
        .filter(|n| filter.node_clause(n))
        .map(|n| n.id.clone())
        .collect();

    let mut out = Graph::new(graph.is_directed());
    for id in &surviving_nodes {
        out.add_node(graph.get_node(id).expect("collected from graph").clone())?;
    }
    for edge in graph.get_all_edges() {
        if filter.edge_clause(edge)
            && surviving_nodes.contains(&edge.source)
            && surviving_nodes.contains(&edge.target)
        {
            out.add_edge(edge.clone())?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Node};

    fn chain() -> Graph {
        let mut g = Graph::new(true);
        for id in ["A", "B", "C", "D"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("ab", "A", "B")).unwrap();
        g.add_edge(Edge::new("bc", "B", "C")).unwrap();
        g.add_edge(Edge::new("cd", "C", "D")).unwrap();
        g
    }

    #[test]
    fn induced_subgraph_keeps_only_internal_edges() {
        let g = chain();
        let vertices: HashSet<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let sub = induced_subgraph(&g, &vertices).unwrap();
        assert_eq!(sub.node_count(), 3);
        assert_eq!(sub.edge_count(), 2);
    }

    #[test]
    fn ego_network_respects_radius() {
        let g = chain();
        let seeds: HashSet<String> = ["A"].iter().map(|s| s.to_string()).collect();
        let ego = ego_network(&g, &seeds, 1, true).unwrap();
        assert_eq!(ego.node_count(), 2);
    }

    #[test]
    fn ego_network_rejects_empty_seed_set() {
        let g = chain();
        assert!(matches!(
            ego_network(&g, &HashSet::new(), 1, true),
            Err(GraphBoxError::InvalidInput { .. })
        ));
    }

    #[test]
    fn reachability_follows_direction() {
        let g = chain();
        let forward = reachability_subgraph(&g, "B", Direction::Forward, None).unwrap();
        assert_eq!(forward.node_count(), 3);
        let backward = reachability_subgraph(&g, "B", Direction::Backward, None).unwrap();
        assert_eq!(backward.node_count(), 2);
    }
}
