//! Spec-driven graph generation (spec.md §4.9).
//!
//! `generate_graph` dispatches to one of several concrete strategies
//! based on which properties `spec` requests, trying the most specific
//! (and cheapest-to-satisfy-exactly) strategy first and falling back to
//! an unconstrained Erdos-Renyi-style construction plus post-hoc
//! trimming when nothing more specific applies. Every strategy consumes
//! the same seeded [`Mulberry32`](crate::rng::Mulberry32) so a fixed
//! `(spec, config, seed)` triple always reproduces the same graph,
//! which is what the determinism contract in spec.md §8 requires.

mod shapes;
mod strategies;

use crate::error::GraphBoxResult;
use crate::graph::Graph;
use crate::rng::Mulberry32;
use crate::spec_model::{AdvancedFacet, Connectivity, Cycles, Density, Directionality, GraphSpec};

pub use shapes::{complete_bipartite, grid, star, tournament};

/// Parameters that are not part of the spec's property vocabulary but
/// still shape a concrete generated graph: how many nodes, which
/// pseudo-random stream to draw from, what node-type labels to use for
/// a `heterogeneous` schema, and what range numeric weights are drawn
/// from.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Seed for the deterministic PRNG. Same seed, same spec, same
    /// config always produces the same graph.
    pub seed: u64,
    /// Node type labels to cycle through for a `heterogeneous` schema.
    /// Ignored for `homogeneous` specs.
    pub node_types: Vec<String>,
    /// Inclusive range numeric edge weights are drawn from.
    pub weight_range: (f64, f64),
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            node_count: 10,
            seed: 0,
            node_types: Vec::new(),
            weight_range: (1.0, 10.0),
        }
    }
}

/// Generates a graph satisfying `spec` as closely as the dispatcher's
/// strategies allow, using `config` for size/seed/labelling.
///
/// Strategy priority (spec.md §4.9), most specific first:
/// 1. `node_count == 0` — the empty graph.
/// 2. An explicit shape facet (`star`, `grid`, `completeBipartite`,
///    `tournament`) or `completeness = complete` or a `regularity`
///    facet — exact constructions.
/// 3. `bipartite` (without an explicit part-size pair).
/// 4. `cycles = acyclic` — routed by `connectivity` rather than only
///    when it's `connected`, so every acyclic spec gets a genuinely
///    acyclic graph regardless of its connectivity facet: a random
///    spanning tree for `connected`, `components` independent trees (or
///    DAGs, if `directed`) for `disconnected(components)`, and a single
///    tree (undirected) or DAG (`directed`) for `unconstrained`.
/// 5. `connectivity = connected` — a random spanning structure plus
///    extra edges up to the density target.
/// 6. `connectivity = disconnected(components)` — `components`
///    independent connected random graphs.
/// 7. Otherwise — an unconstrained Erdos-Renyi-style random graph.
pub fn generate_graph(spec: &GraphSpec, config: &GenerationConfig) -> GraphBoxResult<Graph> {
    let directed = spec.directionality == Directionality::Directed;
    let mut rng = Mulberry32::new(config.seed);

    if config.node_count == 0 {
        return Ok(Graph::new(directed));
    }

    for facet in &spec.advanced {
        match facet {
            AdvancedFacet::Star { leaves } => return shapes::star(directed, *leaves),
            AdvancedFacet::Grid { rows, cols } => return shapes::grid(directed, *rows, *cols),
            AdvancedFacet::CompleteBipartite { m, n } => return shapes::complete_bipartite(directed, *m, *n),
            AdvancedFacet::Tournament => return shapes::tournament(config.node_count, &mut rng),
            _ => {}
        }
    }
    if spec.completeness == crate::spec_model::Completeness::Complete {
        return strategies::complete_graph(directed, config.node_count, spec, config, &mut rng);
    }
    if let Some(AdvancedFacet::Regularity { k }) = find_facet(spec, |f| matches!(f, AdvancedFacet::Regularity { .. })) {
        return strategies::regular_graph(config.node_count, *k, spec, config, &mut rng);
    }

    if spec.advanced.iter().any(|f| matches!(f, AdvancedFacet::Bipartite)) {
        return strategies::bipartite_graph(spec, config, &mut rng);
    }

    if spec.cycles == Cycles::Acyclic {
        return match spec.connectivity {
            Connectivity::Connected => strategies::random_tree(spec, config, &mut rng),
            Connectivity::Disconnected { components } if directed => {
                strategies::disconnected_random_dag(spec, config, components.max(2), &mut rng)
            }
            Connectivity::Disconnected { components } => {
                strategies::disconnected_forest(spec, config, components.max(2), &mut rng)
            }
            Connectivity::Unconstrained if directed => strategies::random_dag(spec, config, &mut rng),
            Connectivity::Unconstrained => strategies::random_tree(spec, config, &mut rng),
        };
    }

    if spec.connectivity == Connectivity::Connected {
        return strategies::connected_random_graph(spec, config, &mut rng);
    }

    if let Connectivity::Disconnected { components } = spec.connectivity {
        return strategies::disconnected_random_graph(spec, config, components.max(2), &mut rng);
    }

    strategies::unconstrained_random_graph(spec, config, &mut rng)
}

fn find_facet<'a>(spec: &'a GraphSpec, predicate: impl Fn(&AdvancedFacet) -> bool) -> Option<&'a AdvancedFacet> {
    spec.advanced.iter().find(|f| predicate(f))
}

/// The documented edge-count target for `density` over `n` nodes
/// (spec.md §4.9): `sparse` ~ `O(n)`, `moderate` ~ `Theta(n log n)`,
/// `dense` ~ `Theta(n^2)`, capped at the maximum possible for the
/// graph's directedness and self-loop policy.
pub(crate) fn density_target_edges(density: Density, n: usize, max_possible: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let target = match density {
        Density::Sparse => n,
        Density::Moderate => ((n as f64) * (n as f64).max(2.0).log2()).round() as usize,
        Density::Dense => (max_possible as f64 * 0.85).round() as usize,
        Density::Unconstrained => ((n as f64) * 1.5).round() as usize,
    };
    target.min(max_possible)
}

pub(crate) fn max_possible_edges(n: usize, directed: bool, self_loops_allowed: bool) -> usize {
    let pairs = if n < 2 { 0 } else { n * (n - 1) / (if directed { 1 } else { 2 }) };
    pairs + if self_loops_allowed { n } else { 0 }
}
