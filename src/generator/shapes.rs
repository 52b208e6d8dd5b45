//! Exact constructions for explicitly named shapes (spec.md §4.9
//! step 2): star, grid, complete bipartite, and tournament. These are
//! deterministic given their parameters — no PRNG draw changes their
//! structure — except tournament, whose edge orientations are randomized.

use crate::error::GraphBoxResult;
use crate::graph::Graph;
use crate::model::{Edge, Node};
use crate::rng::Mulberry32;

/// `K_{1,leaves}`: one hub connected to `leaves` distinct leaves.
pub fn star(directed: bool, leaves: usize) -> GraphBoxResult<Graph> {
    let mut g = Graph::new(directed);
    g.add_node(Node::new("hub"))?;
    for i in 0..leaves {
        let id = format!("leaf{i}");
        g.add_node(Node::new(&id))?;
        g.add_edge(Edge::new(format!("e{i}"), "hub", &id))?;
    }
    Ok(g)
}

/// A `rows x cols` rectangular grid (lattice): vertex `(r, c)` adjacent
/// to its orthogonal neighbours.
pub fn grid(directed: bool, rows: usize, cols: usize) -> GraphBoxResult<Graph> {
    let mut g = Graph::new(directed);
    let id_of = |r: usize, c: usize| format!("r{r}c{c}");
    for r in 0..rows {
        for c in 0..cols {
            g.add_node(Node::new(id_of(r, c)))?;
        }
    }
    let mut edge_seq = 0usize;
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                g.add_edge(Edge::new(format!("e{edge_seq}"), id_of(r, c), id_of(r, c + 1)))?;
                edge_seq += 1;
            }
            if r + 1 < rows {
                g.add_edge(Edge::new(format!("e{edge_seq}"), id_of(r, c), id_of(r + 1, c)))?;
                edge_seq += 1;
            }
        }
    }
    Ok(g)
}

/// `K_{m,n}`: every left vertex joined to every right vertex, and no
/// edges within a part.
pub fn complete_bipartite(directed: bool, m: usize, n: usize) -> GraphBoxResult<Graph> {
    let mut g = Graph::new(directed);
    for i in 0..m {
        g.add_node(Node::new(format!("l{i}")).with_partition("left"))?;
    }
    for j in 0..n {
        g.add_node(Node::new(format!("r{j}")).with_partition("right"))?;
    }
    let mut edge_seq = 0usize;
    for i in 0..m {
        for j in 0..n {
            g.add_edge(Edge::new(format!("e{edge_seq}"), format!("l{i}"), format!("r{j}")))?;
            edge_seq += 1;
        }
    }
    Ok(g)
}

/// A random tournament on `node_count` vertices: exactly one directed
/// edge between every distinct pair, oriented by a coin flip from `rng`.
pub fn tournament(node_count: usize, rng: &mut Mulberry32) -> GraphBoxResult<Graph> {
    let mut g = Graph::new(true);
    for i in 0..node_count {
        g.add_node(Node::new(format!("n{i}")))?;
    }
    let mut edge_seq = 0usize;
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            let (src, dst) = if rng.next_f64() < 0.5 { (i, j) } else { (j, i) };
            g.add_edge(Edge::new(format!("e{edge_seq}"), format!("n{src}"), format!("n{dst}")))?;
            edge_seq += 1;
        }
    }
    Ok(g)
}
