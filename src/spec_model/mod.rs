//! The graph specification model (spec.md §4.7): a closed, tagged
//! vocabulary of graph-theoretic properties plus the helpers used to
//! build, enumerate, and describe specs.
//!
//! Grounded on `petgraph`'s `EdgeType`/`Directed`/`Undirected` marker
//! pattern (closed, exhaustively-matched tags rather than open
//! strings) generalized across the nine core properties plus the
//! optional advanced facets spec.md §3 lists.

mod advanced;
mod describe;

pub use advanced::AdvancedFacet;
pub use describe::describe_spec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `directionality`: directed, undirected, or mixed (per-edge override).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Directionality {
    /// Every edge is directed.
    Directed,
    /// Every edge is undirected.
    Undirected,
    /// Individual edges may override the graph's overall mode.
    Mixed,
}

/// `weighting`: whether, and how, edges carry a weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Weighting {
    /// No edge carries a meaningful weight (absent, or `1.0`).
    Unweighted,
    /// Every edge's weight is drawn from `[min, max]`.
    WeightedNumeric {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Every edge's weight is one of a closed set of category labels.
    WeightedCategorical {
        /// The closed set of category labels.
        categories: Vec<String>,
    },
}

/// `connectivity`: whether the graph must be (dis)connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Connectivity {
    /// Exactly one (weakly, for directed graphs) connected component.
    Connected,
    /// Exactly `components` connected components.
    Disconnected {
        /// Required component count, `>= 2`.
        components: usize,
    },
    /// No constraint on component count.
    Unconstrained,
}

/// `cycles`: whether the graph may contain cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Cycles {
    /// No cycles (a forest, for undirected graphs; a DAG, for directed).
    Acyclic,
    /// Cycles are permitted (not required).
    CyclesAllowed,
}

/// `density`: the target band of `|E|` relative to `|V|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Density {
    /// `O(n)` edges.
    Sparse,
    /// `Theta(n log n)` edges.
    Moderate,
    /// `Theta(n^2)` edges.
    Dense,
    /// No density target.
    Unconstrained,
}

/// `completeness`: whether every distinct pair must be joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Completeness {
    /// An edge exists between every distinct pair of vertices.
    Complete,
    /// No completeness requirement.
    Incomplete,
}

/// `edgeMultiplicity`: whether parallel edges are required/forbidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum EdgeMultiplicity {
    /// No duplicate unordered endpoint pairs.
    Simple,
    /// At least one duplicate unordered endpoint pair.
    Multi,
}

/// `selfLoops`: whether self-loops are required/forbidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SelfLoops {
    /// Self-loops are permitted (the generator may emit a small fraction).
    Allowed,
    /// No self-loop may appear.
    Disallowed,
}

/// `schema`: whether node types must be uniform or mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Schema {
    /// All node types equal.
    Homogeneous,
    /// At least two distinct node types present.
    Heterogeneous,
}

/// A complete graph specification: the nine core properties (spec.md
/// §3's closed core vocabulary, every spec specifies all nine) plus
/// zero or more optional advanced facets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphSpec {
    /// directed / undirected / mixed.
    pub directionality: Directionality,
    /// unweighted / weighted_numeric / weighted_categorical.
    pub weighting: Weighting,
    /// connected / disconnected(k) / unconstrained.
    pub connectivity: Connectivity,
    /// acyclic / cycles_allowed.
    pub cycles: Cycles,
    /// sparse / moderate / dense / unconstrained.
    pub density: Density,
    /// complete / incomplete.
    pub completeness: Completeness,
    /// simple / multi.
    #[cfg_attr(feature = "serde", serde(rename = "edgeMultiplicity"))]
    pub edge_multiplicity: EdgeMultiplicity,
    /// allowed / disallowed.
    #[cfg_attr(feature = "serde", serde(rename = "selfLoops"))]
    pub self_loops: SelfLoops,
    /// homogeneous / heterogeneous.
    pub schema: Schema,
    /// Optional advanced facets (partiteness, tournament, chordal, ...).
    /// An empty vector means no advanced facet is required — the
    /// vocabulary's `unconstrained` for every advanced property.
    #[cfg_attr(feature = "serde", serde(default))]
    pub advanced: Vec<AdvancedFacet>,
}

impl Default for GraphSpec {
    /// The documented defaults (spec.md §4.7): `undirected`,
    /// `unweighted`, `cycles_allowed`, and `unconstrained` wherever the
    /// vocabulary offers that kind; `incomplete` / `simple` /
    /// `disallowed` / `homogeneous` elsewhere, as the least constraining
    /// choice for kinds without an `unconstrained` variant.
    fn default() -> Self {
        GraphSpec {
            directionality: Directionality::Undirected,
            weighting: Weighting::Unweighted,
            connectivity: Connectivity::Unconstrained,
            cycles: Cycles::CyclesAllowed,
            density: Density::Unconstrained,
            completeness: Completeness::Incomplete,
            edge_multiplicity: EdgeMultiplicity::Simple,
            self_loops: SelfLoops::Disallowed,
            schema: Schema::Homogeneous,
            advanced: Vec::new(),
        }
    }
}

/// Builds a spec from a partial set of overrides, filling every
/// unspecified core field from [`GraphSpec::default`].
///
/// Implemented as a plain builder rather than a stringly-typed map:
/// `overrides` is itself a `GraphSpec`-shaped set of `Option<_>`
/// fields, which keeps "unknown fields rejected" a property the Rust
/// type system enforces at compile time rather than at runtime.
#[derive(Debug, Clone, Default)]
pub struct GraphSpecOverrides {
    /// Override for `directionality`.
    pub directionality: Option<Directionality>,
    /// Override for `weighting`.
    pub weighting: Option<Weighting>,
    /// Override for `connectivity`.
    pub connectivity: Option<Connectivity>,
    /// Override for `cycles`.
    pub cycles: Option<Cycles>,
    /// Override for `density`.
    pub density: Option<Density>,
    /// Override for `completeness`.
    pub completeness: Option<Completeness>,
    /// Override for `edge_multiplicity`.
    pub edge_multiplicity: Option<EdgeMultiplicity>,
    /// Override for `self_loops`.
    pub self_loops: Option<SelfLoops>,
    /// Override for `schema`.
    pub schema: Option<Schema>,
    /// Advanced facets to attach.
    pub advanced: Vec<AdvancedFacet>,
}

/// Builds a [`GraphSpec`] from `overrides`, filling defaults for every
/// field the caller didn't set (spec.md §4.7).
pub fn make_graph_spec(overrides: GraphSpecOverrides) -> GraphSpec {
    let defaults = GraphSpec::default();
    GraphSpec {
        directionality: overrides.directionality.unwrap_or(defaults.directionality),
        weighting: overrides.weighting.unwrap_or(defaults.weighting),
        connectivity: overrides.connectivity.unwrap_or(defaults.connectivity),
        cycles: overrides.cycles.unwrap_or(defaults.cycles),
        density: overrides.density.unwrap_or(defaults.density),
        completeness: overrides.completeness.unwrap_or(defaults.completeness),
        edge_multiplicity: overrides.edge_multiplicity.unwrap_or(defaults.edge_multiplicity),
        self_loops: overrides.self_loops.unwrap_or(defaults.self_loops),
        schema: overrides.schema.unwrap_or(defaults.schema),
        advanced: overrides.advanced,
    }
}

/// Enumerates the Cartesian product over the nine core fields' kind
/// sets, using one representative parameterization for kinds that
/// carry payload (e.g. `Disconnected { components: 2 }`). Used for
/// coverage tests; spec.md §4.7 documents this as "~640 entries before
/// impossibility filtering" — the exact count depends on how many
/// representative parameterizations are chosen per payload-carrying
/// kind, so this implementation does not assert a fixed count.
pub fn generate_core_spec_permutations() -> Vec<GraphSpec> {
    let directionalities = [Directionality::Directed, Directionality::Undirected, Directionality::Mixed];
    let weightings = [
        Weighting::Unweighted,
        Weighting::WeightedNumeric { min: 0.0, max: 10.0 },
        Weighting::WeightedCategorical {
            categories: vec!["light".to_string(), "heavy".to_string()],
        },
    ];
    let connectivities = [
        Connectivity::Connected,
        Connectivity::Disconnected { components: 2 },
        Connectivity::Unconstrained,
    ];
    let cycles_options = [Cycles::Acyclic, Cycles::CyclesAllowed];
    let densities = [Density::Sparse, Density::Moderate, Density::Dense, Density::Unconstrained];
    let completenesses = [Completeness::Complete, Completeness::Incomplete];
    let multiplicities = [EdgeMultiplicity::Simple, EdgeMultiplicity::Multi];
    let self_loop_options = [SelfLoops::Allowed, SelfLoops::Disallowed];
    let schemas = [Schema::Homogeneous, Schema::Heterogeneous];

    let mut out = Vec::new();
    for &directionality in &directionalities {
        for weighting in &weightings {
            for &connectivity in &connectivities {
                for &cycles in &cycles_options {
                    for &density in &densities {
                        for &completeness in &completenesses {
                            for &edge_multiplicity in &multiplicities {
                                for &self_loops in &self_loop_options {
                                    for &schema in &schemas {
                                        out.push(GraphSpec {
                                            directionality,
                                            weighting: weighting.clone(),
                                            connectivity,
                                            cycles,
                                            density,
                                            completeness,
                                            edge_multiplicity,
                                            self_loops,
                                            schema,
                                            advanced: Vec::new(),
                                        });
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_graph_spec_fills_defaults() {
        let spec = make_graph_spec(GraphSpecOverrides {
            directionality: Some(Directionality::Directed),
            ..Default::default()
        });
        assert_eq!(spec.directionality, Directionality::Directed);
        assert_eq!(spec.weighting, Weighting::Unweighted);
        assert_eq!(spec.schema, Schema::Homogeneous);
    }

    #[test]
    fn permutations_are_non_empty_and_cover_directed() {
        let perms = generate_core_spec_permutations();
        assert!(!perms.is_empty());
        assert!(perms.iter().any(|s| s.directionality == Directionality::Directed));
    }
}
