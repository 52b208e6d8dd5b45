//! Optional advanced facets (spec.md §3's extended vocabulary): shape,
//! structural-class, and bound constraints layered on top of the nine
//! core properties. A [`GraphSpec`](super::GraphSpec) with an empty
//! `advanced` vector requests none of these; each variant present in
//! the vector is an additional requirement the generator should try to
//! satisfy and the orchestrator should validate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One advanced structural facet a [`GraphSpec`](super::GraphSpec) may
/// request in addition to its nine core properties.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum AdvancedFacet {
    /// Bipartite (2-partite).
    Bipartite,
    /// k-partite for `k >= 2`.
    KPartite {
        /// Number of parts.
        parts: usize,
    },
    /// Every pair of vertices joined by exactly one directed edge.
    Tournament,
    /// Complete bipartite `K_{m,n}`.
    CompleteBipartite {
        /// Size of the first part.
        m: usize,
        /// Size of the second part.
        n: usize,
    },
    /// A star `K_{1,n}`.
    Star {
        /// Number of leaves.
        leaves: usize,
    },
    /// A rectangular grid (lattice) graph.
    Grid {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
    /// k-regular: every vertex has degree exactly `k`.
    Regularity {
        /// Required degree.
        k: usize,
    },
    /// Planar (embeddable in the plane without edge crossings).
    Planar,
    /// Chordal: every cycle of length `>= 4` has a chord.
    Chordal,
    /// Perfect: chromatic number equals clique number in every induced subgraph.
    Perfect,
    /// Split: vertex set partitions into a clique and an independent set.
    Split,
    /// Cograph: `P4`-free.
    Cograph,
    /// Interval graph: intersection graph of intervals on a line.
    Interval,
    /// Permutation graph.
    Permutation,
    /// Comparability graph: edges orientable as a transitive relation.
    Comparability,
    /// Threshold graph.
    Threshold,
    /// Line graph of some underlying graph.
    Line,
    /// Isomorphic to its own complement.
    SelfComplementary,
    /// Claw-free: no induced `K_{1,3}`.
    ClawFree,
    /// Scale-free: approximately power-law degree distribution.
    ScaleFree {
        /// Power-law exponent target.
        exponent: f64,
    },
    /// Small-world: high clustering, low average path length.
    SmallWorld,
    /// Modular: admits a noticeable community/module structure.
    Modular {
        /// Target module (community) count.
        modules: usize,
    },
    /// Unit-disk graph: vertices as points, edges iff within a fixed radius.
    UnitDisk,
    /// Contains an Eulerian circuit (visits every edge exactly once and
    /// returns to its start).
    Eulerian,
    /// Contains a Hamiltonian cycle.
    Hamiltonian,
    /// Contains a Hamiltonian path (weaker than [`Self::Hamiltonian`]).
    Traceable,
    /// Strongly regular with parameters `(k, lambda, mu)`.
    StronglyRegular {
        /// Common degree.
        k: usize,
        /// Common number of shared neighbours for adjacent pairs.
        lambda: usize,
        /// Common number of shared neighbours for non-adjacent pairs.
        mu: usize,
    },
    /// Vertex-transitive: the automorphism group acts transitively on vertices.
    VertexTransitive,
    /// Upper bound on the graph's diameter.
    DiameterBound {
        /// Maximum allowed diameter.
        max: u32,
    },
    /// Upper bound on the graph's radius.
    RadiusBound {
        /// Maximum allowed radius.
        max: u32,
    },
    /// Lower bound on the graph's girth (shortest cycle length).
    GirthBound {
        /// Minimum allowed girth.
        min: u32,
    },
    /// Upper bound on the graph's circumference (longest cycle length).
    CircumferenceBound {
        /// Maximum allowed circumference.
        max: u32,
    },
    /// Upper bound on treewidth.
    TreewidthBound {
        /// Maximum allowed treewidth.
        max: u32,
    },
    /// Proper coloring exists with at most `k` colors.
    KColourable {
        /// Maximum color count.
        k: usize,
    },
    /// Forbidden minor: the graph must not contain `name` as a minor.
    MinorFree {
        /// Name of the forbidden minor (e.g. `"K5"`, `"K3,3"`).
        name: String,
    },
    /// Forbidden topological minor.
    TopologicalMinorFree {
        /// Name of the forbidden topological minor.
        name: String,
    },
}
