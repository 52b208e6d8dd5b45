//! Dijkstra/BFS dispatch and correctness over small hand-built graphs
//! (spec.md §4.4).

use graphbox::model::{Edge, Node};
use graphbox::pathfinding::find_shortest_path;
use graphbox::subgraph::{ego_network, reachability_subgraph, Direction};
use graphbox::Graph;
use std::collections::HashSet;

fn weighted_diamond() -> Graph {
    let mut g = Graph::new(true);
    for id in ["A", "B", "C", "D"] {
        g.add_node(Node::new(id)).unwrap();
    }
    g.add_edge(Edge::new("ab", "A", "B").with_weight(1.0)).unwrap();
    g.add_edge(Edge::new("ac", "A", "C").with_weight(4.0)).unwrap();
    g.add_edge(Edge::new("bc", "B", "C").with_weight(1.0)).unwrap();
    g.add_edge(Edge::new("cd", "C", "D").with_weight(1.0)).unwrap();
    g
}

#[test]
fn dijkstra_prefers_the_cheaper_route() {
    let g = weighted_diamond();
    let path = find_shortest_path(&g, "A", "D").unwrap().unwrap();
    assert_eq!(path.nodes, vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()]);
    assert_eq!(path.total_weight, 3.0);
}

#[test]
fn unweighted_graph_uses_bfs_hop_count() {
    let mut g = Graph::new(false);
    for id in ["A", "B", "C", "D"] {
        g.add_node(Node::new(id)).unwrap();
    }
    g.add_edge(Edge::new("ab", "A", "B")).unwrap();
    g.add_edge(Edge::new("bc", "B", "C")).unwrap();
    g.add_edge(Edge::new("cd", "C", "D")).unwrap();
    g.add_edge(Edge::new("ad", "A", "D")).unwrap(); // shortcut
    let path = find_shortest_path(&g, "A", "D").unwrap().unwrap();
    assert_eq!(path.nodes, vec!["A".to_string(), "D".to_string()]);
}

#[test]
fn no_path_returns_none() {
    let mut g = Graph::new(true);
    g.add_node(Node::new("A")).unwrap();
    g.add_node(Node::new("B")).unwrap();
    assert!(find_shortest_path(&g, "A", "B").unwrap().is_none());
}

#[test]
fn ego_network_and_reachability_agree_on_a_line_graph() {
    let mut g = Graph::new(true);
    for id in ["A", "B", "C", "D", "E"] {
        g.add_node(Node::new(id)).unwrap();
    }
    g.add_edge(Edge::new("ab", "A", "B")).unwrap();
    g.add_edge(Edge::new("bc", "B", "C")).unwrap();
    g.add_edge(Edge::new("cd", "C", "D")).unwrap();
    g.add_edge(Edge::new("de", "D", "E")).unwrap();

    let reach = reachability_subgraph(&g, "B", Direction::Forward, None).unwrap();
    assert_eq!(reach.node_count(), 4); // B, C, D, E

    let seeds: HashSet<String> = ["B".to_string()].into_iter().collect();
    let ego = ego_network(&g, &seeds, 2, true).unwrap();
    assert_eq!(ego.node_count(), 3); // B, C, D within 2 hops forward
}
