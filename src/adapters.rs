//! Graph-type adapters and the portable JSON interfaces (spec.md
//! §4.12/§5/§6), gated behind the `serde` feature the same way
//! petgraph gates its own `serde-1` feature on `EdgeIndex`/`NodeIndex`
//! (de)serialization.

use crate::graph::Graph;
use crate::spec_model::GraphSpec;

/// A graph paired with the spec it was generated from (or is being
/// validated against). The pairing itself carries no behavior beyond
/// grouping the two for callers that want to pass both around together.
#[derive(Debug, Clone)]
pub struct SpecifiedGraph {
    /// The graph.
    pub graph: Graph,
    /// The spec it is associated with.
    pub spec: GraphSpec,
}

/// Free-form metadata accompanying a graph, independent of any spec
/// (a title, a generation timestamp label, provenance notes, ...).
#[derive(Debug, Clone, Default)]
pub struct GraphMetadata {
    /// Optional human-readable title.
    pub title: Option<String>,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

/// A graph paired with free-form [`GraphMetadata`] rather than a spec.
#[derive(Debug, Clone)]
pub struct DocumentedGraph {
    /// The graph.
    pub graph: Graph,
    /// Its metadata.
    pub meta: GraphMetadata,
}

#[cfg(feature = "serde")]
mod json {
    use serde::{Deserialize, Serialize};

    use crate::error::{GraphBoxError, GraphBoxResult};
    use crate::graph::Graph;
    use crate::model::{Edge, Node};

    use super::GraphMetadata;

    /// The portable graph JSON schema (spec.md §6): a `meta` block plus
    /// flat `nodes`/`edges` arrays, independent of any `GraphSpec`.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct PortableGraphDocument {
        /// Whether the graph is directed.
        pub directed: bool,
        /// Free-form metadata.
        #[serde(default)]
        pub meta: PortableMeta,
        /// Every node.
        pub nodes: Vec<Node>,
        /// Every edge.
        pub edges: Vec<Edge>,
    }

    /// The `meta` block of a [`PortableGraphDocument`].
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct PortableMeta {
        /// Optional title.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        /// Optional notes.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub notes: Option<String>,
    }

    impl From<GraphMetadata> for PortableMeta {
        fn from(meta: GraphMetadata) -> Self {
            PortableMeta {
                title: meta.title,
                notes: meta.notes,
            }
        }
    }

    impl From<PortableMeta> for GraphMetadata {
        fn from(meta: PortableMeta) -> Self {
            GraphMetadata {
                title: meta.title,
                notes: meta.notes,
            }
        }
    }

    /// Serializes `graph` (with `meta`) to the portable JSON document.
    pub fn graph_to_json(graph: &Graph, meta: GraphMetadata) -> PortableGraphDocument {
        PortableGraphDocument {
            directed: graph.is_directed(),
            meta: meta.into(),
            nodes: graph.get_all_nodes().cloned().collect(),
            edges: graph.get_all_edges().cloned().collect(),
        }
    }

    /// Reconstructs a [`Graph`] plus its [`GraphMetadata`] from a
    /// [`PortableGraphDocument`]. Fails if any edge references an
    /// unknown node, or a node/edge id is duplicated.
    pub fn graph_from_json(doc: PortableGraphDocument) -> GraphBoxResult<(Graph, GraphMetadata)> {
        let mut graph = Graph::new(doc.directed);
        for node in doc.nodes {
            graph.add_node(node)?;
        }
        for edge in doc.edges {
            graph.add_edge(edge)?;
        }
        Ok((graph, doc.meta.into()))
    }

    /// Serializes a [`crate::spec_model::GraphSpec`] to its JSON schema
    /// (spec.md §5): one tagged object per core property, plus an
    /// `advanced` array.
    pub fn spec_to_json(spec: &crate::spec_model::GraphSpec) -> GraphBoxResult<String> {
        serde_json::to_string_pretty(spec).map_err(|e| GraphBoxError::InvalidInput {
            message: format!("failed to serialize GraphSpec: {e}"),
        })
    }

    /// Deserializes a [`crate::spec_model::GraphSpec`] from its JSON
    /// schema.
    pub fn spec_from_json(text: &str) -> GraphBoxResult<crate::spec_model::GraphSpec> {
        serde_json::from_str(text).map_err(|e| GraphBoxError::InvalidInput {
            message: format!("failed to parse GraphSpec: {e}"),
        })
    }
}

#[cfg(feature = "serde")]
pub use json::{graph_from_json, graph_to_json, spec_from_json, spec_to_json, PortableGraphDocument, PortableMeta};

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::model::{Edge, Node};
    use crate::spec_model::{make_graph_spec, Directionality, GraphSpecOverrides};

    #[test]
    fn portable_json_round_trips() {
        let mut g = Graph::new(true);
        g.add_node(Node::new("a")).unwrap();
        g.add_node(Node::new("b")).unwrap();
        g.add_edge(Edge::new("e1", "a", "b").with_weight(2.5)).unwrap();

        let meta = GraphMetadata {
            title: Some("demo".to_string()),
            notes: None,
        };
        let doc = graph_to_json(&g, meta);
        let json = serde_json::to_string(&doc).unwrap();
        let parsed: PortableGraphDocument = serde_json::from_str(&json).unwrap();
        let (rebuilt, rebuilt_meta) = graph_from_json(parsed).unwrap();
        assert_eq!(rebuilt.node_count(), 2);
        assert_eq!(rebuilt.edge_count(), 1);
        assert_eq!(rebuilt_meta.title.as_deref(), Some("demo"));
    }

    #[test]
    fn graph_spec_json_round_trips() {
        let spec = make_graph_spec(GraphSpecOverrides {
            directionality: Some(Directionality::Directed),
            ..Default::default()
        });
        let text = spec_to_json(&spec).unwrap();
        let parsed = spec_from_json(&text).unwrap();
        assert_eq!(parsed.directionality, Directionality::Directed);
    }
}
