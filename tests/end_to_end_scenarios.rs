//! The six concrete end-to-end scenarios (spec.md §8's "Concrete
//! end-to-end scenarios").

use graphbox::generator::{generate_graph, GenerationConfig};
use graphbox::model::{Edge, Node};
use graphbox::orchestrator::validate_graph_properties;
use graphbox::pathfinding::find_shortest_path;
use graphbox::patterns::{has_induced_subgraph, library};
use graphbox::spec_model::{
    make_graph_spec, Completeness, Connectivity, Cycles, Density, Directionality, GraphSpecOverrides,
};
use graphbox::Graph;

#[test]
fn scenario_1_sparse_undirected_connected_acyclic_tree() {
    let spec = make_graph_spec(GraphSpecOverrides {
        directionality: Some(Directionality::Undirected),
        connectivity: Some(Connectivity::Connected),
        cycles: Some(Cycles::Acyclic),
        density: Some(Density::Sparse),
        ..Default::default()
    });
    let config = GenerationConfig {
        node_count: 10,
        seed: 42,
        ..Default::default()
    };
    let graph = generate_graph(&spec, &config).unwrap();
    assert_eq!(graph.edge_count(), 9);

    let everyone_reachable = graph
        .get_all_nodes()
        .all(|n| find_shortest_path(&graph, "n0", &n.id).unwrap().is_some());
    assert!(everyone_reachable);

    let result = validate_graph_properties(&graph, &spec);
    assert!(result.valid, "{:?}", result.properties.iter().filter(|p| !p.valid).collect::<Vec<_>>());
    let cycles = result.properties.iter().find(|p| p.property == "cycles").unwrap();
    assert!(cycles.valid);
    let connectivity = result.properties.iter().find(|p| p.property == "connectivity").unwrap();
    assert!(connectivity.valid);
}

#[test]
fn scenario_2_complete_undirected_graph_on_five_nodes() {
    let spec = make_graph_spec(GraphSpecOverrides {
        directionality: Some(Directionality::Undirected),
        completeness: Some(Completeness::Complete),
        cycles: Some(Cycles::CyclesAllowed),
        density: Some(Density::Dense),
        ..Default::default()
    });
    let config = GenerationConfig {
        node_count: 5,
        seed: 1,
        ..Default::default()
    };
    let graph = generate_graph(&spec, &config).unwrap();
    assert_eq!(graph.edge_count(), 10);

    let mut seen_pairs = std::collections::HashSet::new();
    for edge in graph.get_all_edges() {
        let key = if edge.source < edge.target {
            (edge.source.clone(), edge.target.clone())
        } else {
            (edge.target.clone(), edge.source.clone())
        };
        assert!(seen_pairs.insert(key), "unordered pair appeared more than once");
    }
    assert_eq!(seen_pairs.len(), 10);

    let result = validate_graph_properties(&graph, &spec);
    assert!(result.valid, "{:?}", result.properties.iter().filter(|p| !p.valid).collect::<Vec<_>>());
}

#[test]
fn scenario_3_directed_acyclic_moderate_connected() {
    let spec = make_graph_spec(GraphSpecOverrides {
        directionality: Some(Directionality::Directed),
        cycles: Some(Cycles::Acyclic),
        density: Some(Density::Moderate),
        completeness: Some(Completeness::Incomplete),
        connectivity: Some(Connectivity::Connected),
        ..Default::default()
    });
    let config = GenerationConfig {
        node_count: 10,
        seed: 42,
        ..Default::default()
    };
    let graph = generate_graph(&spec, &config).unwrap();
    let result = validate_graph_properties(&graph, &spec);
    let cycles = result.properties.iter().find(|p| p.property == "cycles").unwrap();
    assert!(cycles.valid, "directed graph must be acyclic");
    let connectivity = result.properties.iter().find(|p| p.property == "connectivity").unwrap();
    assert!(connectivity.valid, "underlying undirected graph must be weakly connected");
}

#[test]
fn scenario_4_self_loop_breaks_self_loops_validator() {
    let spec = make_graph_spec(GraphSpecOverrides {
        directionality: Some(Directionality::Undirected),
        connectivity: Some(Connectivity::Connected),
        cycles: Some(Cycles::Acyclic),
        density: Some(Density::Sparse),
        ..Default::default()
    });
    let config = GenerationConfig {
        node_count: 10,
        seed: 42,
        ..Default::default()
    };
    let mut graph = generate_graph(&spec, &config).unwrap();
    graph.add_edge(Edge::new("self-loop", "n0", "n0")).unwrap();

    let result = validate_graph_properties(&graph, &spec);
    let self_loops = result.properties.iter().find(|p| p.property == "selfLoops").unwrap();
    assert!(!self_loops.valid);
    assert!(!result.valid);
}

#[test]
fn scenario_5_dijkstra_finds_the_cheaper_two_hop_route() {
    let mut g = Graph::new(true);
    for id in ["A", "B", "C"] {
        g.add_node(Node::new(id)).unwrap();
    }
    g.add_edge(Edge::new("ab", "A", "B").with_weight(3.0)).unwrap();
    g.add_edge(Edge::new("bc", "B", "C").with_weight(4.0)).unwrap();
    g.add_edge(Edge::new("ac", "A", "C").with_weight(10.0)).unwrap();

    let path = find_shortest_path(&g, "A", "C").unwrap().unwrap();
    assert_eq!(path.nodes, vec!["A".to_string(), "B".to_string(), "C".to_string()]);
    assert_eq!(path.total_weight, 7.0);
}

#[test]
fn scenario_6_claw_detection_and_induced_requirement() {
    let mut g = Graph::new(false);
    for id in ["0", "1", "2", "3"] {
        g.add_node(Node::new(id)).unwrap();
    }
    g.add_edge(Edge::new("e0", "0", "1")).unwrap();
    g.add_edge(Edge::new("e1", "0", "2")).unwrap();
    g.add_edge(Edge::new("e2", "0", "3")).unwrap();
    assert!(has_induced_subgraph(&g, (&library::CLAW).into()));

    g.add_edge(Edge::new("e3", "1", "2")).unwrap();
    assert!(!has_induced_subgraph(&g, (&library::CLAW).into()));
}
