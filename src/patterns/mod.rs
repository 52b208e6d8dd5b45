//! Forbidden-subgraph detection engine (spec.md §4.6): a small pattern
//! library plus a shared induced-subgraph matcher used by many
//! validators (chordal, claw-free, cograph, perfect, bull-free, ...).

pub mod library;
pub mod matcher;

pub use library::{Pattern, PatternRef, ALL_PATTERNS};
pub use matcher::{detect_multiple_subgraphs, has_induced_subgraph, MAX_PATTERN_SIZE};
