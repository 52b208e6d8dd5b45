//! Exercises the forbidden-subgraph engine end-to-end through the
//! `chordal`/`clawFree`/`cograph` validators (spec.md §4.6/§4.10).

use graphbox::generator::{generate_graph, GenerationConfig};
use graphbox::model::{Edge, Node};
use graphbox::orchestrator::validate_graph_properties;
use graphbox::patterns::{has_induced_subgraph, library};
use graphbox::spec_model::{make_graph_spec, AdvancedFacet, GraphSpecOverrides};
use graphbox::Graph;

fn cycle(n: usize) -> Graph {
    let mut g = Graph::new(false);
    for i in 0..n {
        g.add_node(Node::new(format!("n{i}"))).unwrap();
    }
    for i in 0..n {
        g.add_edge(Edge::new(format!("e{i}"), format!("n{i}"), format!("n{}", (i + 1) % n))).unwrap();
    }
    g
}

#[test]
fn c4_is_not_chordal() {
    let g = cycle(4);
    let spec = make_graph_spec(GraphSpecOverrides {
        advanced: vec![AdvancedFacet::Chordal],
        ..Default::default()
    });
    let result = validate_graph_properties(&g, &spec);
    let chordal = result.properties.iter().find(|p| p.property == "chordal").unwrap();
    assert!(!chordal.valid);
}

#[test]
fn c4_plus_chord_is_chordal() {
    let mut g = cycle(4);
    g.add_edge(Edge::new("chord", "n0", "n2")).unwrap();
    let spec = make_graph_spec(GraphSpecOverrides {
        advanced: vec![AdvancedFacet::Chordal],
        ..Default::default()
    });
    let result = validate_graph_properties(&g, &spec);
    let chordal = result.properties.iter().find(|p| p.property == "chordal").unwrap();
    assert!(chordal.valid);
}

#[test]
fn star_k13_is_not_claw_free() {
    let mut g = Graph::new(false);
    for id in ["hub", "a", "b", "c"] {
        g.add_node(Node::new(id)).unwrap();
    }
    g.add_edge(Edge::new("e0", "hub", "a")).unwrap();
    g.add_edge(Edge::new("e1", "hub", "b")).unwrap();
    g.add_edge(Edge::new("e2", "hub", "c")).unwrap();

    assert!(has_induced_subgraph(&g, (&library::CLAW).into()));

    let spec = make_graph_spec(GraphSpecOverrides {
        advanced: vec![AdvancedFacet::ClawFree],
        ..Default::default()
    });
    let result = validate_graph_properties(&g, &spec);
    let claw_free = result.properties.iter().find(|p| p.property == "clawFree").unwrap();
    assert!(!claw_free.valid);
}

#[test]
fn generated_tree_is_cograph_and_chordal() {
    let spec = make_graph_spec(GraphSpecOverrides {
        cycles: Some(graphbox::spec_model::Cycles::Acyclic),
        connectivity: Some(graphbox::spec_model::Connectivity::Connected),
        advanced: vec![AdvancedFacet::Chordal],
        ..Default::default()
    });
    let config = GenerationConfig {
        node_count: 10,
        seed: 3,
        ..Default::default()
    };
    let graph = generate_graph(&spec, &config).unwrap();
    // A tree has no cycles at all, so it trivially has no chordless C4..C6.
    let result = validate_graph_properties(&graph, &spec);
    let chordal = result.properties.iter().find(|p| p.property == "chordal").unwrap();
    assert!(chordal.valid);
}
