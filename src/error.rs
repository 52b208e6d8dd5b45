//! The closed error taxonomy shared by every fallible API in the crate.
//!
//! Every mutator and algorithm returns a [`GraphBoxResult`] rather than
//! panicking or using an in-band sentinel value. Variants are kept
//! deliberately small and string-keyed (node/edge ids are `String`s
//! throughout the crate, see [`crate::model`]) so that callers can
//! pattern-match on the failure kind without losing context.

use thiserror::Error;

/// Closed set of failure kinds produced by GraphBox's core APIs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphBoxError {
    /// Attempted to insert a node id that already exists.
    #[error("duplicate node: {id}")]
    DuplicateNode {
        /// The id that was already present.
        id: String,
    },

    /// A referenced id was absent, or an argument was otherwise malformed.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human-readable explanation.
        message: String,
    },

    /// Specialisation of [`GraphBoxError::InvalidInput`] used where the
    /// offending id is the central subject of the failure.
    #[error("node not found: {id}")]
    NodeNotFound {
        /// The missing node id.
        id: String,
    },

    /// Dijkstra's precondition (all weights non-negative) was violated.
    #[error("negative weight on edge {edge_id}")]
    NegativeWeight {
        /// The offending edge.
        edge_id: String,
    },

    /// An edge weight was NaN or non-finite.
    #[error("invalid weight {weight} on edge {edge_id}")]
    InvalidWeight {
        /// The offending edge.
        edge_id: String,
        /// The invalid value.
        weight: f64,
    },

    /// An algorithm that requires acyclicity discovered a cycle.
    #[error("cycle detected: {path:?}")]
    CycleDetected {
        /// The discovered cycle, as a sequence of node ids.
        path: Vec<String>,
    },

    /// Invalid radius argument to an extraction utility (e.g. ego-network).
    #[error("invalid radius: {message}")]
    InvalidRadius {
        /// Human-readable explanation.
        message: String,
    },

    /// Invalid attribute/edge filter predicate combination.
    #[error("invalid filter: {message}")]
    InvalidFilter {
        /// Human-readable explanation.
        message: String,
    },

    /// Invalid truss-extraction argument (reserved for future extraction
    /// utilities; surfaced today only for forward-compatible parity with
    /// the documented taxonomy).
    #[error("invalid truss parameter: {message}")]
    InvalidTruss {
        /// Human-readable explanation.
        message: String,
    },

    /// A store that enforces the simple-graph invariant rejected a
    /// parallel edge.
    #[error("duplicate edge: {id}")]
    DuplicateEdge {
        /// The id that collided.
        id: String,
    },

    /// A CSR snapshot would require more positions than the index type
    /// can represent.
    #[error("index overflow: {message}")]
    IndexOverflow {
        /// Human-readable explanation.
        message: String,
    },
}

/// Result alias used throughout the crate's fallible APIs.
pub type GraphBoxResult<T> = Result<T, GraphBoxError>;
