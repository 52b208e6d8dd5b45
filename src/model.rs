//! Core entities: [`Node`], [`Edge`], and the open attribute value type
//! they carry. See the `Graph` type in [`crate::graph`] for the store
//! that owns them.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value in a node's or edge's open attribute map.
///
/// Mirrors the "primitive/nested" attribute payload described for
/// [`Node`] and [`Edge`]: scalars plus a recursive list for nested data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    /// Absence of a value, distinct from the key being unset.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar. All GraphBox arithmetic treats attribute
    /// numbers as `f64`; integral attributes round-trip exactly for
    /// any value representable without loss in an `f64`.
    Number(f64),
    /// A text scalar.
    Text(String),
    /// A nested, ordered list of attribute values.
    List(Vec<AttrValue>),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

/// Open attribute map shared by [`Node`] and [`Edge`].
///
/// A `BTreeMap` is used (rather than a hash map) so that two nodes/edges
/// with the same attributes compare and iterate identically regardless
/// of insertion order, which keeps generator output byte-identical
/// across replays (see the determinism contract in `spec.md` §8).
pub type AttrMap = BTreeMap<String, AttrValue>;

/// A graph vertex.
///
/// Two nodes are equal iff their `id`s match; all other fields are
/// metadata carried alongside the identity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// Unique identifier. Stable for the node's lifetime in a graph.
    pub id: String,
    /// Optional human-readable label.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
    /// Optional type tag, used by the `schema` property (homogeneous vs
    /// heterogeneous) and by heterogeneous generation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub node_type: Option<String>,
    /// Optional bipartition label ("left"/"right" or similar), used by
    /// bipartite generation and validation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub partition: Option<String>,
    /// Open attribute map.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: AttrMap,
}

impl Node {
    /// Creates a node with only an id; all other fields default.
    pub fn new(id: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            label: None,
            node_type: None,
            partition: None,
            attributes: AttrMap::new(),
        }
    }

    /// Builder-style setter for `node_type`.
    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    /// Builder-style setter for `partition`.
    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }

    /// Builder-style setter for `label`.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Eq for Node {}

/// A graph edge.
///
/// Invariant (enforced by [`crate::graph::Graph::add_edge`]): `source`
/// and `target` must reference nodes already present in the owning
/// graph. Removing a node removes every edge incident to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Unique identifier.
    pub id: String,
    /// Source endpoint node id.
    pub source: String,
    /// Target endpoint node id.
    pub target: String,
    /// Optional type tag.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub edge_type: Option<String>,
    /// Optional numeric weight. Algorithms that require non-negative,
    /// finite weights validate this themselves (see
    /// [`crate::pathfinding`]); the store itself places no constraint
    /// on the value.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub weight: Option<f64>,
    /// Per-edge directionality override, used to express a mixed graph
    /// (`directionality = mixed`) where individual edges opt out of the
    /// graph's overall directed/undirected mode.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none", rename = "directed"))]
    pub directed_override: Option<bool>,
    /// Open attribute map.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: AttrMap,
}

impl Edge {
    /// Creates a simple, unweighted edge between `source` and `target`.
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            edge_type: None,
            weight: None,
            directed_override: None,
            attributes: AttrMap::new(),
        }
    }

    /// Builder-style setter for `weight`.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Builder-style setter for `edge_type`.
    pub fn with_type(mut self, edge_type: impl Into<String>) -> Self {
        self.edge_type = Some(edge_type.into());
        self
    }

    /// Whether `self` is a self-loop (source equals target).
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// The effective weight used by algorithms that default absent
    /// weights to `1.0` (spec.md §4.4: `edge.weight ?? 1`).
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

impl Eq for Edge {}
