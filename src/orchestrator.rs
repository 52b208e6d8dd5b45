//! The validation orchestrator (spec.md §4.11): runs the constraint
//! analyser, computes validation adjustments, invokes every applicable
//! validator in a fixed order, and aggregates the results into one
//! [`GraphValidationResult`].

use tracing::{debug, trace};

use crate::constraints::{analyze_graph_spec_constraints, get_adjusted_validation_expectations, ConstraintFinding};
use crate::graph::Graph;
use crate::spec_model::GraphSpec;
use crate::validators::{
    self, PropertyValidation,
};

/// The aggregated outcome of validating every property a spec names
/// (core plus advanced) against a graph.
#[derive(Debug, Clone)]
pub struct GraphValidationResult {
    /// Conjunction of every [`PropertyValidation::valid`] plus the
    /// absence of any [`crate::constraints::Severity::Error`] finding.
    pub valid: bool,
    /// Per-property results, core properties first, then advanced
    /// facets in the order the spec listed them.
    pub properties: Vec<PropertyValidation>,
    /// Constraint-analysis findings (spec.md §4.8), surfaced alongside
    /// the per-property results rather than folded into them.
    pub constraint_findings: Vec<ConstraintFinding>,
}

/// Validates `graph` against every property `spec` names.
///
/// Order: the nine core properties (directionality, weighting,
/// connectivity, cycles, density, completeness, edgeMultiplicity,
/// selfLoops, schema), then every advanced facet `spec.advanced` lists,
/// in listed order. Each advanced-facet validator returns `None` when
/// the spec doesn't name that facet, so it's simply skipped rather than
/// appearing as a vacuous pass.
pub fn validate_graph_properties(graph: &Graph, spec: &GraphSpec) -> GraphValidationResult {
    let constraint_findings = analyze_graph_spec_constraints(spec);
    let adjustments = get_adjusted_validation_expectations(spec);
    debug!(
        node_count = graph.node_count(),
        edge_count = graph.edge_count(),
        constraint_findings = constraint_findings.len(),
        "starting property validation"
    );

    let mut properties = vec![
        validators::validate_directionality(graph, spec),
        validators::validate_weighting(graph, spec),
        validators::validate_connectivity(graph, spec),
        validators::validate_cycles(graph, spec, adjustments.skip_cycle_validation),
        validators::validate_density(graph, spec),
        validators::validate_completeness(graph, spec),
        validators::validate_edge_multiplicity(graph, spec),
        validators::validate_self_loops(graph, spec),
        validators::validate_schema(graph, spec),
    ];

    for result in [
        validators::validate_star(graph, spec),
        validators::validate_grid(graph, spec),
        validators::validate_complete_bipartite(graph, spec),
        validators::validate_tournament(graph, spec),
        validators::validate_regularity(graph, spec),
        validators::validate_chordal(graph, spec),
        validators::validate_claw_free(graph, spec),
        validators::validate_cograph(graph, spec),
        validators::validate_perfect(graph, spec),
        validators::validate_planar(graph, spec),
        validators::validate_eulerian(graph, spec),
        validators::validate_hamiltonian(graph, spec),
        validators::validate_traceable(graph, spec),
        validators::validate_diameter_bound(graph, spec),
        validators::validate_radius_bound(graph, spec),
        validators::validate_girth_bound(graph, spec),
        validators::validate_circumference_bound(graph, spec),
        validators::validate_bipartite(graph, spec),
        validators::validate_k_partite(graph, spec),
        validators::validate_split(graph, spec),
        validators::validate_threshold(graph, spec),
        validators::validate_interval(graph, spec),
        validators::validate_comparability(graph, spec),
        validators::validate_permutation(graph, spec),
        validators::validate_line(graph, spec),
        validators::validate_self_complementary(graph, spec),
        validators::validate_scale_free(graph, spec),
        validators::validate_small_world(graph, spec),
        validators::validate_modular(graph, spec),
        validators::validate_unit_disk(graph, spec),
        validators::validate_strongly_regular(graph, spec),
        validators::validate_vertex_transitive(graph, spec),
        validators::validate_treewidth_bound(graph, spec),
        validators::validate_k_colourable(graph, spec),
        validators::validate_minor_free(graph, spec),
        validators::validate_topological_minor_free(graph, spec),
    ] {
        if let Some(validation) = result {
            trace!(property = %validation.property, valid = validation.valid, "advanced facet validated");
            properties.push(validation);
        }
    }

    let properties_valid = properties.iter().all(|p| p.valid);
    let no_hard_errors = !constraint_findings
        .iter()
        .any(|f| f.severity == crate::constraints::Severity::Error);
    let valid = properties_valid && no_hard_errors;

    debug!(valid, properties = properties.len(), "property validation complete");

    GraphValidationResult {
        valid,
        properties,
        constraint_findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_graph, GenerationConfig};
    use crate::spec_model::{make_graph_spec, Connectivity, Cycles, GraphSpecOverrides};

    #[test]
    fn generated_tree_validates_as_acyclic_connected() {
        let spec = make_graph_spec(GraphSpecOverrides {
            cycles: Some(Cycles::Acyclic),
            connectivity: Some(Connectivity::Connected),
            ..Default::default()
        });
        let config = GenerationConfig {
            node_count: 15,
            seed: 7,
            ..Default::default()
        };
        let graph = generate_graph(&spec, &config).unwrap();
        let result = validate_graph_properties(&graph, &spec);
        assert!(result.valid, "unexpected failures: {:?}", result.properties.iter().filter(|p| !p.valid).collect::<Vec<_>>());
    }

    #[test]
    fn every_core_property_appears_exactly_once() {
        let spec = GraphSpec::default();
        let config = GenerationConfig {
            node_count: 8,
            seed: 1,
            ..Default::default()
        };
        let graph = generate_graph(&spec, &config).unwrap();
        let result = validate_graph_properties(&graph, &spec);
        let core_names = [
            "directionality", "weighting", "connectivity", "cycles", "density", "completeness", "edgeMultiplicity",
            "selfLoops", "schema",
        ];
        for name in core_names {
            assert_eq!(result.properties.iter().filter(|p| p.property == name).count(), 1);
        }
    }
}
