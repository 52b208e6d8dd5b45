//! Unweighted shortest-path BFS over [`Graph`].

use std::collections::{HashMap, VecDeque};

use crate::error::{GraphBoxError, GraphBoxResult};
use crate::graph::Graph;
use crate::pathfinding::path::Path;

/// Breadth-first shortest path from `start` to `end`, treating every
/// edge as unit cost. Returns `Ok(None)` if `end` is unreachable.
pub fn bfs_shortest_path(graph: &Graph, start: &str, end: &str) -> GraphBoxResult<Option<Path>> {
    if !graph.has_node(start) {
        return Err(GraphBoxError::NodeNotFound { id: start.to_string() });
    }
    if !graph.has_node(end) {
        return Err(GraphBoxError::NodeNotFound { id: end.to_string() });
    }
    if start == end {
        return Ok(Some(Path::trivial(start)));
    }

    let mut parent: HashMap<String, (String, String)> = HashMap::new();
    let mut visited = std::collections::HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start.to_string());
    queue.push_back(start.to_string());

    'outer: while let Some(node) = queue.pop_front() {
        for edge in graph.get_outgoing_edges(&node)? {
            let neighbour = if edge.source == node {
                edge.target.clone()
            } else {
                edge.source.clone()
            };
            if visited.contains(&neighbour) {
                continue;
            }
            visited.insert(neighbour.clone());
            parent.insert(neighbour.clone(), (node.clone(), edge.id.clone()));
            if neighbour == end {
                break 'outer;
            }
            queue.push_back(neighbour);
        }
    }

    if !visited.contains(end) {
        return Ok(None);
    }

    let mut nodes = vec![end.to_string()];
    let mut edges = Vec::new();
    let mut cursor = end.to_string();
    while cursor != start {
        let (prev, edge_id) = parent.get(&cursor).expect("reachable implies recorded parent").clone();
        edges.push(edge_id);
        nodes.push(prev.clone());
        cursor = prev;
    }
    nodes.reverse();
    edges.reverse();

    Ok(Some(Path {
        total_weight: edges.len() as f64,
        nodes,
        edges,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Node};

    #[test]
    fn finds_minimum_hop_path() {
        let mut g = Graph::new(false);
        for id in ["A", "B", "C", "D"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("ab", "A", "B")).unwrap();
        g.add_edge(Edge::new("bc", "B", "C")).unwrap();
        g.add_edge(Edge::new("ad", "A", "D")).unwrap();
        g.add_edge(Edge::new("dc", "D", "C")).unwrap();
        let path = bfs_shortest_path(&g, "A", "C").unwrap().unwrap();
        assert_eq!(path.nodes.len(), 3);
    }
}
