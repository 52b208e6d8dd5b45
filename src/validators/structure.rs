//! Validators built on the forbidden-subgraph engine (spec.md §4.10's
//! structural-class facets): chordal, claw-free, cograph, perfect, and
//! a heuristic planarity check.
//!
//! Chordal/claw-free/cograph/perfect are all characterized by forbidden
//! induced subgraphs, which is exactly what [`crate::patterns`]
//! provides. The engine's tractability bound
//! ([`crate::patterns::MAX_PATTERN_SIZE`], 6 vertices) means the
//! `perfect` check here is an approximation: the Strong Perfect Graph
//! Theorem forbids *all* odd holes and odd antiholes of any length
//! `>= 5`, but this validator can only test the ones that fit within 6
//! vertices (the length-5 hole/antihole, which coincide).

use crate::graph::Graph;
use crate::patterns::{has_induced_subgraph, library};
use crate::spec_model::{AdvancedFacet, GraphSpec};

use super::PropertyValidation;

fn requests(spec: &GraphSpec, facet: impl Fn(&AdvancedFacet) -> bool) -> bool {
    spec.advanced.iter().any(facet)
}

/// Checks `chordal`: no induced cycle of length `>= 4` lacks a chord.
/// Tests `C4..=C6` directly (the engine's tractability bound); longer
/// chordless cycles are out of scope and not flagged.
pub fn validate_chordal(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::Chordal)) {
        return None;
    }
    let mut offending = None;
    for k in 4..=6 {
        if let Some(pattern) = library::cycle_pattern(k) {
            if has_induced_subgraph(graph, pattern.as_ref()) {
                offending = Some(k);
                break;
            }
        }
    }
    Some(PropertyValidation::new(
        "chordal",
        offending.is_none(),
        "no chordless C4..=C6",
        match offending {
            Some(k) => format!("induced C{k} found"),
            None => "no induced C4..=C6 found".to_string(),
        },
    ))
}

/// Checks `clawFree`: no vertex has three pairwise non-adjacent
/// neighbours (no induced `K_{1,3}`).
pub fn validate_claw_free(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::ClawFree)) {
        return None;
    }
    let found = has_induced_subgraph(graph, (&library::CLAW).into());
    Some(PropertyValidation::new(
        "clawFree",
        !found,
        "no induced claw (K_1,3)",
        if found { "induced claw found" } else { "no induced claw" },
    ))
}

/// Checks `cograph`: `P4`-free (no induced path on 4 vertices).
pub fn validate_cograph(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::Cograph)) {
        return None;
    }
    let found = has_induced_subgraph(graph, (&library::P4).into());
    Some(PropertyValidation::new(
        "cograph",
        !found,
        "P4-free",
        if found { "induced P4 found" } else { "no induced P4" },
    ))
}

/// Checks `perfect` (approximately, per this module's doc comment): no
/// induced `C5` (the only odd hole/antihole pair reachable within the
/// engine's 6-vertex bound).
pub fn validate_perfect(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::Perfect)) {
        return None;
    }
    let found = has_induced_subgraph(graph, (&library::C5).into());
    Some(
        PropertyValidation::new(
            "perfect",
            !found,
            "no induced C5 (odd hole/antihole)",
            if found { "induced C5 found" } else { "no induced C5" },
        )
        .with_message("approximate: only odd holes/antiholes of length 5 are tested, per the pattern engine's 6-vertex bound".to_string()),
    )
}

/// Checks `planar` heuristically: for simple graphs with `>= 3`
/// vertices, a planar graph must satisfy `|E| <= 3|V| - 6` (a necessary
/// but not sufficient condition); additionally rejects graphs
/// containing an induced `K5` (a sufficient non-planarity witness, by
/// Kuratowski's theorem, though not an exhaustive one — subdivisions of
/// `K5`/`K3,3` are not tested). Graphs that pass both checks are
/// reported valid but not exhaustively proven planar.
pub fn validate_planar(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::Planar)) {
        return None;
    }
    let v = graph.node_count();
    let e = graph.edge_count();
    if v >= 3 && e > 3 * v - 6 {
        return Some(PropertyValidation::new(
            "planar",
            false,
            "|E| <= 3|V| - 6",
            format!("{e} edges over {v} vertices violates the edge bound"),
        ));
    }
    let has_k5 = has_induced_subgraph(graph, (&library::K5).into());
    Some(
        PropertyValidation::new(
            "planar",
            !has_k5,
            "no K5/K3,3 (minor or subdivision)",
            if has_k5 { "induced K5 found" } else { "necessary edge bound satisfied, no induced K5" },
        )
        .with_message("heuristic: full Kuratowski subdivision testing is not implemented".to_string()),
    )
}
