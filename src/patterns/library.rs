//! The forbidden-subgraph pattern library (spec.md §4.6): small,
//! constant patterns named by the chordal/perfect/claw-free/cograph/etc.
//! validators.

/// A named pattern: `vertex_count` vertices `0..vertex_count`, and an
/// unordered edge list over them. `vertex_count` must be `<= 6`
/// (spec.md §4.6's tractability bound); callers that would build a
/// larger pattern should refuse or log and skip, not construct one.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    /// Human-readable name, also used as the key in
    /// [`super::matcher::detect_multiple_subgraphs`]'s result map.
    pub name: &'static str,
    /// Number of vertices, `0..vertex_count`.
    pub vertex_count: usize,
    /// Unordered edges over `0..vertex_count`.
    pub edges: &'static [(usize, usize)],
}

impl Pattern {
    /// Whether the pattern has an edge between `a` and `b` (order-independent).
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges.iter().any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}

/// Path on 3 vertices.
pub const P3: Pattern = Pattern { name: "P3", vertex_count: 3, edges: &[(0, 1), (1, 2)] };
/// Path on 4 vertices (the cograph-defining forbidden pattern).
pub const P4: Pattern = Pattern { name: "P4", vertex_count: 4, edges: &[(0, 1), (1, 2), (2, 3)] };
/// Path on 5 vertices.
pub const P5: Pattern = Pattern { name: "P5", vertex_count: 5, edges: &[(0, 1), (1, 2), (2, 3), (3, 4)] };

/// Cycle on 4 vertices.
pub const C4: Pattern = Pattern { name: "C4", vertex_count: 4, edges: &[(0, 1), (1, 2), (2, 3), (3, 0)] };
/// Cycle on 5 vertices (odd hole).
pub const C5: Pattern = Pattern { name: "C5", vertex_count: 5, edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)] };
/// Cycle on 6 vertices.
pub const C6: Pattern = Pattern {
    name: "C6",
    vertex_count: 6,
    edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)],
};

/// Complete graph on 3 vertices (triangle).
pub const K3: Pattern = Pattern { name: "K3", vertex_count: 3, edges: &[(0, 1), (1, 2), (0, 2)] };
/// Complete graph on 4 vertices.
pub const K4: Pattern = Pattern {
    name: "K4",
    vertex_count: 4,
    edges: &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
};
/// Complete graph on 5 vertices.
pub const K5: Pattern = Pattern {
    name: "K5",
    vertex_count: 5,
    edges: &[
        (0, 1), (0, 2), (0, 3), (0, 4),
        (1, 2), (1, 3), (1, 4),
        (2, 3), (2, 4),
        (3, 4),
    ],
};

/// Claw: `K_{1,3}`, the star with 3 leaves. Forbidden pattern for claw-free.
pub const CLAW: Pattern = Pattern { name: "claw", vertex_count: 4, edges: &[(0, 1), (0, 2), (0, 3)] };

/// Diamond: `K4` minus one edge.
pub const DIAMOND: Pattern = Pattern {
    name: "diamond",
    vertex_count: 4,
    edges: &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3)],
};

/// Bull: a triangle with two pendant edges on distinct vertices.
pub const BULL: Pattern = Pattern {
    name: "bull",
    vertex_count: 5,
    edges: &[(0, 1), (1, 2), (0, 2), (0, 3), (1, 4)],
};

/// Gem: `P4` plus a fifth vertex adjacent to all four path vertices.
pub const GEM: Pattern = Pattern {
    name: "gem",
    vertex_count: 5,
    edges: &[(0, 1), (1, 2), (2, 3), (4, 0), (4, 1), (4, 2), (4, 3)],
};

/// Net: a triangle with a pendant edge on each of its three vertices.
pub const NET: Pattern = Pattern {
    name: "net",
    vertex_count: 6,
    edges: &[(0, 1), (1, 2), (0, 2), (0, 3), (1, 4), (2, 5)],
};

/// House: `C5` plus one chord closing a triangle "roof".
pub const HOUSE: Pattern = Pattern {
    name: "house",
    vertex_count: 5,
    edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2)],
};

/// Fork (chair's sibling): a path with an extra pendant on the second vertex.
pub const FORK: Pattern = Pattern {
    name: "fork",
    vertex_count: 5,
    edges: &[(0, 1), (1, 2), (2, 3), (1, 4)],
};

/// Chair: `P4` with a pendant on the second vertex.
pub const CHAIR: Pattern = Pattern {
    name: "chair",
    vertex_count: 5,
    edges: &[(0, 1), (1, 2), (2, 3), (0, 4)],
};

/// Dart: `diamond` plus a pendant vertex attached to one of its degree-3 vertices.
pub const DART: Pattern = Pattern {
    name: "dart",
    vertex_count: 5,
    edges: &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (3, 4)],
};

/// Kite: `diamond` plus a pendant vertex attached to a degree-2 vertex.
pub const KITE: Pattern = Pattern {
    name: "kite",
    vertex_count: 5,
    edges: &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 4)],
};

/// Banner: `C4` plus a pendant vertex.
pub const BANNER: Pattern = Pattern {
    name: "banner",
    vertex_count: 5,
    edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 4)],
};

/// `C4` with one chord (making one triangle inside the 4-cycle).
pub const C4_WITH_CHORD: Pattern = Pattern {
    name: "c4_with_chord",
    vertex_count: 4,
    edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
};

/// Every pattern in the library, for batch detection.
pub const ALL_PATTERNS: &[Pattern] = &[
    P3, P4, P5, C4, C5, C6, K3, K4, K5, CLAW, DIAMOND, BULL, GEM, NET, HOUSE, FORK, CHAIR, DART, KITE, BANNER,
    C4_WITH_CHORD,
];

/// Builds a cycle pattern `C_k` for arbitrary `k` (spec.md §4.10's
/// chordal validator needs `C_k` for a range of `k`, not just the
/// fixed small cycles above). Returns `None` for `k > 6` per the
/// engine's tractability bound, and for `k < 3` (not a simple cycle).
pub fn cycle_pattern(k: usize) -> Option<OwnedPattern> {
    if !(3..=6).contains(&k) {
        return None;
    }
    let mut edges = Vec::with_capacity(k);
    for i in 0..k {
        edges.push((i, (i + 1) % k));
    }
    Some(OwnedPattern {
        name: "C_k",
        vertex_count: k,
        edges,
    })
}

/// Owned counterpart of [`Pattern`], for patterns built at runtime
/// (e.g. [`cycle_pattern`]) rather than declared as `'static` constants.
#[derive(Debug, Clone)]
pub struct OwnedPattern {
    /// Human-readable name.
    pub name: &'static str,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Unordered edges.
    pub edges: Vec<(usize, usize)>,
}

impl OwnedPattern {
    /// Borrows `self` as the shape [`super::matcher`] operates on.
    pub fn as_ref(&self) -> PatternRef<'_> {
        PatternRef {
            name: self.name,
            vertex_count: self.vertex_count,
            edges: &self.edges,
        }
    }
}

/// A borrowed view over either a `'static` [`Pattern`] or an
/// [`OwnedPattern`], so the matcher can operate over both uniformly.
#[derive(Debug, Clone, Copy)]
pub struct PatternRef<'a> {
    /// Human-readable name.
    pub name: &'static str,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Unordered edges.
    pub edges: &'a [(usize, usize)],
}

impl<'a> PatternRef<'a> {
    /// Whether the pattern has an edge between `a` and `b`.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges.iter().any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}

impl From<&Pattern> for PatternRef<'static> {
    fn from(p: &Pattern) -> Self {
        PatternRef {
            name: p.name,
            vertex_count: p.vertex_count,
            edges: p.edges,
        }
    }
}
