//! Human-readable rendering of a [`GraphSpec`](super::GraphSpec),
//! grounded on petgraph's `Dot` formatter's philosophy of a small,
//! dependency-free textual view used mostly for test failure messages
//! and logging, not as a machine format (that's `serde`'s job).

use super::{
    Completeness, Connectivity, Cycles, Density, Directionality, EdgeMultiplicity, GraphSpec, Schema, SelfLoops,
    Weighting,
};

/// Renders `spec` as a short, comma-separated description, e.g.
/// `"directed, acyclic, sparse, incomplete, simple, no-self-loops,
/// homogeneous, unweighted, connectivity:unconstrained"`.
pub fn describe_spec(spec: &GraphSpec) -> String {
    let mut parts = Vec::new();

    parts.push(
        match spec.directionality {
            Directionality::Directed => "directed",
            Directionality::Undirected => "undirected",
            Directionality::Mixed => "mixed",
        }
        .to_string(),
    );

    parts.push(match &spec.weighting {
        Weighting::Unweighted => "unweighted".to_string(),
        Weighting::WeightedNumeric { min, max } => format!("weighted_numeric[{min},{max}]"),
        Weighting::WeightedCategorical { categories } => {
            format!("weighted_categorical[{}]", categories.join("|"))
        }
    });

    parts.push(match spec.connectivity {
        Connectivity::Connected => "connected".to_string(),
        Connectivity::Disconnected { components } => format!("disconnected[{components}]"),
        Connectivity::Unconstrained => "connectivity:unconstrained".to_string(),
    });

    parts.push(
        match spec.cycles {
            Cycles::Acyclic => "acyclic",
            Cycles::CyclesAllowed => "cycles_allowed",
        }
        .to_string(),
    );

    parts.push(
        match spec.density {
            Density::Sparse => "sparse",
            Density::Moderate => "moderate",
            Density::Dense => "dense",
            Density::Unconstrained => "density:unconstrained",
        }
        .to_string(),
    );

    parts.push(
        match spec.completeness {
            Completeness::Complete => "complete",
            Completeness::Incomplete => "incomplete",
        }
        .to_string(),
    );

    parts.push(
        match spec.edge_multiplicity {
            EdgeMultiplicity::Simple => "simple",
            EdgeMultiplicity::Multi => "multi",
        }
        .to_string(),
    );

    parts.push(
        match spec.self_loops {
            SelfLoops::Allowed => "self-loops-allowed",
            SelfLoops::Disallowed => "no-self-loops",
        }
        .to_string(),
    );

    parts.push(
        match spec.schema {
            Schema::Homogeneous => "homogeneous",
            Schema::Heterogeneous => "heterogeneous",
        }
        .to_string(),
    );

    if !spec.advanced.is_empty() {
        parts.push(format!("+{} advanced facet(s)", spec.advanced.len()));
    }

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_default_spec() {
        let spec = GraphSpec::default();
        let description = describe_spec(&spec);
        assert!(description.contains("undirected"));
        assert!(description.contains("unweighted"));
        assert!(description.contains("cycles_allowed"));
    }
}
