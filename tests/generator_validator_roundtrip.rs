//! The central round-trip claim (spec.md §8): for any satisfiable
//! spec, `generate_graph(spec, config)` followed by
//! `validate_graph_properties(graph, spec)` reports `valid == true`.

use graphbox::constraints::is_graph_spec_impossible;
use graphbox::generator::{generate_graph, GenerationConfig};
use graphbox::orchestrator::validate_graph_properties;
use graphbox::spec_model::{
    generate_core_spec_permutations, make_graph_spec, AdvancedFacet, Completeness, Connectivity, Cycles, Density,
    Directionality, EdgeMultiplicity, GraphSpecOverrides, Schema, SelfLoops, Weighting,
};

fn roundtrip(overrides: GraphSpecOverrides, node_count: usize, seed: u64) {
    let spec = make_graph_spec(overrides);
    if is_graph_spec_impossible(&spec) {
        return;
    }
    let config = GenerationConfig {
        node_count,
        seed,
        ..Default::default()
    };
    let graph = generate_graph(&spec, &config).expect("generation should succeed for a satisfiable spec");
    let result = validate_graph_properties(&graph, &spec);
    assert!(
        result.valid,
        "spec {spec:?} produced an invalid graph: {:?}",
        result.properties.iter().filter(|p| !p.valid).collect::<Vec<_>>()
    );
}

#[test]
fn default_spec_roundtrips() {
    roundtrip(GraphSpecOverrides::default(), 12, 1);
}

#[test]
fn directed_acyclic_connected_roundtrips() {
    roundtrip(
        GraphSpecOverrides {
            directionality: Some(Directionality::Directed),
            cycles: Some(Cycles::Acyclic),
            connectivity: Some(Connectivity::Connected),
            ..Default::default()
        },
        20,
        2,
    );
}

#[test]
fn undirected_tree_roundtrips() {
    roundtrip(
        GraphSpecOverrides {
            cycles: Some(Cycles::Acyclic),
            connectivity: Some(Connectivity::Connected),
            ..Default::default()
        },
        30,
        3,
    );
}

#[test]
fn bipartite_roundtrips() {
    roundtrip(
        GraphSpecOverrides {
            advanced: vec![AdvancedFacet::Bipartite],
            density: Some(Density::Moderate),
            ..Default::default()
        },
        20,
        4,
    );
}

#[test]
fn complete_graph_roundtrips() {
    roundtrip(
        GraphSpecOverrides {
            completeness: Some(Completeness::Complete),
            ..Default::default()
        },
        8,
        5,
    );
}

#[test]
fn disconnected_graph_roundtrips() {
    roundtrip(
        GraphSpecOverrides {
            connectivity: Some(Connectivity::Disconnected { components: 3 }),
            ..Default::default()
        },
        18,
        6,
    );
}

#[test]
fn weighted_numeric_multigraph_with_self_loops_roundtrips() {
    roundtrip(
        GraphSpecOverrides {
            weighting: Some(Weighting::WeightedNumeric { min: 1.0, max: 5.0 }),
            edge_multiplicity: Some(EdgeMultiplicity::Multi),
            self_loops: Some(SelfLoops::Allowed),
            density: Some(Density::Moderate),
            ..Default::default()
        },
        15,
        7,
    );
}

#[test]
fn heterogeneous_schema_roundtrips() {
    let spec = make_graph_spec(GraphSpecOverrides {
        schema: Some(Schema::Heterogeneous),
        density: Some(Density::Moderate),
        ..Default::default()
    });
    let config = GenerationConfig {
        node_count: 16,
        seed: 8,
        node_types: vec!["user".to_string(), "device".to_string(), "service".to_string()],
        ..Default::default()
    };
    let graph = generate_graph(&spec, &config).unwrap();
    let result = validate_graph_properties(&graph, &spec);
    assert!(result.valid, "{:?}", result.properties.iter().filter(|p| !p.valid).collect::<Vec<_>>());
}

#[test]
fn tournament_roundtrips() {
    roundtrip(
        GraphSpecOverrides {
            directionality: Some(Directionality::Directed),
            advanced: vec![AdvancedFacet::Tournament],
            ..Default::default()
        },
        7,
        9,
    );
}

#[test]
fn regular_graph_roundtrips() {
    roundtrip(
        GraphSpecOverrides {
            advanced: vec![AdvancedFacet::Regularity { k: 4 }],
            ..Default::default()
        },
        12,
        10,
    );
}

#[test]
fn complete_graph_is_also_split_and_threshold_and_k_colourable() {
    // A complete graph trivially satisfies several graph-class facets
    // at once: it's a (degenerate) split graph (clique + empty
    // independent set), threshold (every vertex added dominates the
    // rest), and k-colourable with k == n (every vertex its own colour
    // suffices, and the greedy witness uses exactly n since every pair
    // is adjacent).
    roundtrip(
        GraphSpecOverrides {
            completeness: Some(Completeness::Complete),
            advanced: vec![AdvancedFacet::Split, AdvancedFacet::Threshold, AdvancedFacet::KColourable { k: 6 }],
            ..Default::default()
        },
        6,
        11,
    );
}

#[test]
fn complete_graph_matches_its_own_strongly_regular_parameters() {
    roundtrip(
        GraphSpecOverrides {
            completeness: Some(Completeness::Complete),
            advanced: vec![AdvancedFacet::StronglyRegular { k: 4, lambda: 3, mu: 0 }],
            ..Default::default()
        },
        5,
        12,
    );
}

#[test]
fn core_spec_permutations_roundtrip() {
    // spec.md §8's coverage vehicle: every combination `generate_core_spec_permutations`
    // produces, skipping the ones `analyze_graph_spec_constraints` flags as
    // impossible outright, must actually round-trip.
    let config = GenerationConfig {
        node_count: 12,
        seed: 42,
        node_types: vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()],
        ..Default::default()
    };

    let perms = generate_core_spec_permutations();
    assert!(!perms.is_empty());

    let mut checked = 0;
    let mut skipped = 0;
    for spec in &perms {
        if is_graph_spec_impossible(spec) {
            skipped += 1;
            continue;
        }
        let graph = generate_graph(spec, &config).expect("generation should succeed for a satisfiable spec");
        let result = validate_graph_properties(&graph, spec);
        assert!(
            result.valid,
            "spec {spec:?} produced an invalid graph: {:?}",
            result.properties.iter().filter(|p| !p.valid).collect::<Vec<_>>()
        );
        checked += 1;
    }
    assert!(checked > 0);
    assert!(skipped < perms.len());
}

#[test]
fn bipartite_graph_is_2_partite_roundtrips() {
    roundtrip(
        GraphSpecOverrides {
            advanced: vec![AdvancedFacet::Bipartite, AdvancedFacet::KPartite { parts: 2 }],
            density: Some(Density::Moderate),
            ..Default::default()
        },
        10,
        13,
    );
}
