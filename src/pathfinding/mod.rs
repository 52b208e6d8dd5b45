//! Pathfinding: Dijkstra (weighted), BFS (unweighted), and the public
//! `find_shortest_path` dispatcher (spec.md §4.4).

mod bfs;
mod dijkstra;
mod path;

pub use bfs::bfs_shortest_path;
pub use dijkstra::dijkstra;
pub use path::Path;

use crate::error::GraphBoxResult;
use crate::graph::Graph;

/// Picks BFS when every edge's weight is absent or equal to `1`
/// (cheaper, and equivalent to Dijkstra in that case); otherwise
/// dispatches to Dijkstra.
pub fn find_shortest_path(graph: &Graph, start: &str, end: &str) -> GraphBoxResult<Option<Path>> {
    let all_unit = graph
        .get_all_edges()
        .all(|e| e.weight.is_none() || e.weight == Some(1.0));
    if all_unit {
        bfs_shortest_path(graph, start, end)
    } else {
        dijkstra(graph, start, end, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Node};

    #[test]
    fn dispatches_to_bfs_when_unweighted() {
        let mut g = Graph::new(false);
        g.add_node(Node::new("a")).unwrap();
        g.add_node(Node::new("b")).unwrap();
        g.add_edge(Edge::new("e", "a", "b")).unwrap();
        let path = find_shortest_path(&g, "a", "b").unwrap().unwrap();
        assert_eq!(path.total_weight, 1.0);
    }

    #[test]
    fn same_node_path_has_zero_weight() {
        let mut g = Graph::new(false);
        g.add_node(Node::new("a")).unwrap();
        let path = find_shortest_path(&g, "a", "a").unwrap().unwrap();
        assert_eq!(path.nodes, vec!["a"]);
        assert_eq!(path.edges.len(), 0);
    }
}
