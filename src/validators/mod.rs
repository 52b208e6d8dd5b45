//! The property validator battery (spec.md §4.10): one function per
//! property in the closed vocabulary, each inspecting an already-built
//! [`Graph`] against a [`GraphSpec`] and reporting whether the graph
//! actually has that property.
//!
//! Grounded on petgraph's `algo` module layout: many small, focused
//! algorithm functions rather than one monolithic validator, so
//! [`crate::orchestrator`] can run (and report on) each independently.

mod classes;
mod core;
mod distance;
mod shape;
mod structure;
mod traversal;

pub use classes::{
    validate_bipartite, validate_comparability, validate_interval, validate_k_colourable, validate_k_partite,
    validate_line, validate_minor_free, validate_modular, validate_permutation, validate_scale_free,
    validate_self_complementary, validate_small_world, validate_split, validate_strongly_regular,
    validate_threshold, validate_topological_minor_free, validate_treewidth_bound, validate_unit_disk,
    validate_vertex_transitive,
};
pub use core::{
    validate_completeness, validate_connectivity, validate_cycles, validate_density, validate_directionality,
    validate_edge_multiplicity, validate_schema, validate_self_loops, validate_weighting,
};
pub use distance::{validate_circumference_bound, validate_diameter_bound, validate_girth_bound, validate_radius_bound};
pub use shape::{
    validate_complete_bipartite, validate_grid, validate_regularity, validate_star, validate_tournament,
};
pub use structure::{validate_chordal, validate_claw_free, validate_cograph, validate_perfect, validate_planar};
pub use traversal::{validate_eulerian, validate_hamiltonian, validate_traceable};

/// The outcome of validating one property against one graph.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValidation {
    /// Machine-readable property name, matching the spec vocabulary
    /// (e.g. `"directionality"`, `"cycles"`, `"chordal"`).
    pub property: String,
    /// Whether the graph has the property the spec requested.
    pub valid: bool,
    /// Human-readable description of what was required.
    pub expected: String,
    /// Human-readable description of what was observed.
    pub actual: String,
    /// Optional extra detail (e.g. which vertex/cycle broke the property).
    pub message: Option<String>,
}

impl PropertyValidation {
    pub(crate) fn new(property: &str, valid: bool, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        PropertyValidation {
            property: property.to_string(),
            valid,
            expected: expected.into(),
            actual: actual.into(),
            message: None,
        }
    }

    pub(crate) fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
