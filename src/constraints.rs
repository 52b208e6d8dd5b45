//! Constraint analysis over a [`GraphSpec`] (spec.md §4.8): detects
//! property combinations that are outright impossible (errors) or
//! merely unusual/expensive (warnings) before generation is attempted,
//! and adjusts what the validator battery should expect for specs that
//! are satisfiable but change another property's usual meaning (e.g. a
//! multigraph's "cycle" includes the trivial 2-cycle formed by a pair
//! of parallel edges).

use crate::spec_model::{
    AdvancedFacet, Completeness, Connectivity, Cycles, Density, Directionality, EdgeMultiplicity, GraphSpec, SelfLoops,
};

/// How serious a detected constraint issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The spec cannot be satisfied by any graph.
    Error,
    /// The spec is satisfiable but unusual, expensive to generate, or
    /// easy to misread.
    Warning,
}

/// One finding from [`analyze_graph_spec_constraints`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintFinding {
    /// Short machine-readable name of the property combination flagged.
    pub property: String,
    /// Error or warning.
    pub severity: Severity,
    /// Human-readable explanation.
    pub reason: String,
}

fn finding(property: &str, severity: Severity, reason: impl Into<String>) -> ConstraintFinding {
    ConstraintFinding {
        property: property.to_string(),
        severity,
        reason: reason.into(),
    }
}

/// Analyzes `spec` for contradictory or unusual property combinations.
///
/// Does not attempt generation; this is a pure, fast pre-check meant to
/// run before [`crate::generator::generate_graph`] so callers can fail
/// fast on a provably-impossible spec.
pub fn analyze_graph_spec_constraints(spec: &GraphSpec) -> Vec<ConstraintFinding> {
    let mut findings = Vec::new();

    if spec.cycles == Cycles::Acyclic && spec.density == Density::Dense {
        // Of the five acyclic dispatch paths, only `directed + unconstrained`
        // reaches `random_dag`'s ceiling (a full transitive tournament);
        // `connected` always builds a bare spanning tree (n-1 edges) even
        // when directed, and `disconnected` only shrinks the ceiling
        // further by splitting it across components.
        let reachable = spec.directionality == Directionality::Directed && spec.connectivity == Connectivity::Unconstrained;
        if reachable {
            findings.push(finding(
                "cycles+density",
                Severity::Warning,
                "a directed acyclic graph can only reach the dense band at its ceiling: every forward pair \
                 in a single topological order, i.e. a transitive tournament",
            ));
        } else {
            findings.push(finding(
                "cycles+density",
                Severity::Error,
                "an acyclic graph's edge ceiling falls short of the dense band for every generation path \
                 except an unconstrained directed DAG pushed to its ceiling: a spanning tree (connected, \
                 any directionality) is capped at n-1 edges, and splitting into multiple components only \
                 shrinks a DAG's ceiling further",
            ));
        }
    }

    if spec.cycles == Cycles::Acyclic && spec.completeness == Completeness::Complete {
        findings.push(finding(
            "cycles+completeness",
            Severity::Error,
            "a complete graph on 3 or more vertices always contains a triangle; acyclic and complete \
             are only simultaneously satisfiable for at most 2 vertices, which isn't a useful target",
        ));
    }

    if spec.completeness == Completeness::Complete && matches!(spec.density, Density::Sparse | Density::Moderate) {
        findings.push(finding(
            "completeness+density",
            Severity::Error,
            "a complete graph already has every possible edge, which is always dense; it cannot \
             simultaneously be sparse or moderate",
        ));
    }

    if spec.completeness == Completeness::Complete && matches!(spec.connectivity, Connectivity::Disconnected { components } if components >= 2)
    {
        findings.push(finding(
            "completeness+connectivity",
            Severity::Error,
            "a complete graph has an edge between every pair of vertices, so it is always a single \
             connected component; it cannot be split into multiple components",
        ));
    }

    if spec.completeness == Completeness::Complete && spec.edge_multiplicity == EdgeMultiplicity::Multi {
        findings.push(finding(
            "completeness+edgeMultiplicity",
            Severity::Warning,
            "a complete graph already has every possible edge; requesting multi edges on top is redundant \
             unless the intent is a complete multigraph with extra parallel edges",
        ));
    }

    if let Some(AdvancedFacet::Bipartite) = spec.advanced.iter().find(|f| matches!(f, AdvancedFacet::Bipartite)) {
        if spec.cycles == Cycles::CyclesAllowed {
            for facet in &spec.advanced {
                if let AdvancedFacet::GirthBound { min } = facet {
                    if *min < 4 {
                        findings.push(finding(
                            "bipartite+girthBound",
                            Severity::Error,
                            "bipartite graphs have no odd cycles, so girth cannot be below 4 \
                             (any cycle in a bipartite graph has even length >= 4)",
                        ));
                    }
                }
            }
        }
    }

    if spec.advanced.iter().any(|f| matches!(f, AdvancedFacet::Tournament)) {
        if spec.directionality == Directionality::Undirected {
            findings.push(finding(
                "tournament+directionality",
                Severity::Error,
                "a tournament is, by definition, a directed graph with exactly one directed edge \
                 between every pair of vertices; undirected tournaments do not exist",
            ));
        }
    }

    if spec.edge_multiplicity == EdgeMultiplicity::Simple
        && spec.cycles == Cycles::Acyclic
        && spec.advanced.iter().any(|f| matches!(f, AdvancedFacet::Regularity { k } if *k > 0))
    {
        findings.push(finding(
            "edgeMultiplicity+cycles+regularity",
            Severity::Warning,
            "a simple acyclic graph (forest) cannot be k-regular for k >= 2: every tree/forest has \
             at least two leaves of degree <= 1",
        ));
    }

    for facet in &spec.advanced {
        if let AdvancedFacet::MinorFree { name } = facet {
            if (name == "K5" || name == "K3,3") && spec.advanced.iter().any(|f| matches!(f, AdvancedFacet::Planar)) {
                findings.push(finding(
                    "planar+minorFree",
                    Severity::Warning,
                    "planar graphs are already K5-minor-free and K3,3-minor-free by Wagner's theorem; \
                     this minorFree facet is implied, not an additional constraint",
                ));
            }
        }
    }

    if spec.connectivity == Connectivity::Connected && spec.self_loops == SelfLoops::Allowed {
        // Not contradictory, just worth flagging: self-loops never contribute to connectivity.
        findings.push(finding(
            "connectivity+selfLoops",
            Severity::Warning,
            "self-loops never connect distinct vertices; connectivity must be established by \
             non-loop edges alone",
        ));
    }

    if let Connectivity::Disconnected { components } = spec.connectivity {
        if components < 2 {
            findings.push(finding(
                "connectivity",
                Severity::Error,
                "disconnected requires at least 2 components",
            ));
        }
    }

    findings
}

/// Whether `spec` has at least one [`Severity::Error`] finding, i.e.
/// cannot be satisfied by any graph.
pub fn is_graph_spec_impossible(spec: &GraphSpec) -> bool {
    analyze_graph_spec_constraints(spec)
        .iter()
        .any(|f| f.severity == Severity::Error)
}

/// Validation expectations adjusted away from each validator's naive
/// reading of the spec, because another property changes what
/// "correct" means for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjustedValidationExpectations {
    /// When `true`, the cycle validator should not flag the trivial
    /// 2-cycle formed by a pair of parallel edges between the same
    /// endpoints in a multigraph as violating `acyclic`.
    pub skip_cycle_validation: bool,
}

/// Computes [`AdjustedValidationExpectations`] for `spec`.
pub fn get_adjusted_validation_expectations(spec: &GraphSpec) -> AdjustedValidationExpectations {
    AdjustedValidationExpectations {
        skip_cycle_validation: spec.edge_multiplicity == EdgeMultiplicity::Multi && spec.cycles == Cycles::Acyclic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec_model::{GraphSpecOverrides, make_graph_spec};

    #[test]
    fn directed_acyclic_dense_is_a_warning_not_an_error() {
        // Only reachable at its ceiling (a transitive tournament), but
        // reachable, so this stays a warning rather than an error.
        let spec = make_graph_spec(GraphSpecOverrides {
            directionality: Some(Directionality::Directed),
            cycles: Some(Cycles::Acyclic),
            density: Some(Density::Dense),
            ..Default::default()
        });
        let findings = analyze_graph_spec_constraints(&spec);
        assert!(findings.iter().any(|f| f.property == "cycles+density" && f.severity == Severity::Warning));
        assert!(!is_graph_spec_impossible(&spec));
    }

    #[test]
    fn undirected_acyclic_dense_is_impossible() {
        let spec = make_graph_spec(GraphSpecOverrides {
            cycles: Some(Cycles::Acyclic),
            density: Some(Density::Dense),
            ..Default::default()
        });
        assert!(is_graph_spec_impossible(&spec));
    }

    #[test]
    fn disconnected_acyclic_dense_is_impossible_even_directed() {
        let spec = make_graph_spec(GraphSpecOverrides {
            directionality: Some(Directionality::Directed),
            cycles: Some(Cycles::Acyclic),
            density: Some(Density::Dense),
            connectivity: Some(Connectivity::Disconnected { components: 2 }),
            ..Default::default()
        });
        assert!(is_graph_spec_impossible(&spec));
    }

    #[test]
    fn directed_connected_acyclic_dense_is_impossible() {
        // `connected` always builds a bare spanning tree, even when
        // directed, so it never reaches the dense ceiling the way
        // `unconstrained` can via a full transitive-tournament DAG.
        let spec = make_graph_spec(GraphSpecOverrides {
            directionality: Some(Directionality::Directed),
            cycles: Some(Cycles::Acyclic),
            density: Some(Density::Dense),
            connectivity: Some(Connectivity::Connected),
            ..Default::default()
        });
        assert!(is_graph_spec_impossible(&spec));
    }

    #[test]
    fn complete_sparse_is_impossible() {
        let spec = make_graph_spec(GraphSpecOverrides {
            completeness: Some(Completeness::Complete),
            density: Some(Density::Sparse),
            ..Default::default()
        });
        assert!(is_graph_spec_impossible(&spec));
    }

    #[test]
    fn complete_disconnected_is_impossible() {
        let spec = make_graph_spec(GraphSpecOverrides {
            completeness: Some(Completeness::Complete),
            connectivity: Some(Connectivity::Disconnected { components: 2 }),
            ..Default::default()
        });
        assert!(is_graph_spec_impossible(&spec));
    }

    #[test]
    fn undirected_tournament_is_impossible() {
        let spec = make_graph_spec(GraphSpecOverrides {
            directionality: Some(Directionality::Undirected),
            advanced: vec![AdvancedFacet::Tournament],
            ..Default::default()
        });
        assert!(is_graph_spec_impossible(&spec));
    }

    #[test]
    fn disconnected_with_one_component_is_impossible() {
        let spec = make_graph_spec(GraphSpecOverrides {
            connectivity: Some(Connectivity::Disconnected { components: 1 }),
            ..Default::default()
        });
        assert!(is_graph_spec_impossible(&spec));
    }

    #[test]
    fn multigraph_acyclic_skips_cycle_validation() {
        let spec = make_graph_spec(GraphSpecOverrides {
            edge_multiplicity: Some(EdgeMultiplicity::Multi),
            cycles: Some(Cycles::Acyclic),
            ..Default::default()
        });
        assert!(get_adjusted_validation_expectations(&spec).skip_cycle_validation);
    }
}
