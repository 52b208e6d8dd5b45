//! Validators for the remaining advanced facets (spec.md §3's extended
//! vocabulary) that aren't covered by [`super::shape`], [`super::structure`],
//! [`super::distance`], or [`super::traversal`]: partiteness, graph-class
//! membership (split, threshold, interval, permutation, comparability,
//! line, self-complementary), randomized-structure facets (scale-free,
//! small-world, modular, unit-disk), strongly-regular/vertex-transitive
//! parameters, and the bounded-resource facets (treewidth, k-colourable,
//! minor-free).
//!
//! Several of these have no known polynomial exact test (or none
//! tractable at this crate's scale); each such validator documents its
//! exactness boundary inline rather than silently approximating, per
//! spec.md §4.10's "validator cannot decide ⇒ valid = true, not refuted"
//! contract.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::Graph;
use crate::model::AttrValue;
use crate::patterns::{has_induced_subgraph, library};
use crate::spec_model::{AdvancedFacet, GraphSpec};

use super::PropertyValidation;

const EXHAUSTIVE_SEARCH_LIMIT: usize = 12;
const AUTOMORPHISM_SEARCH_LIMIT: usize = 8;

fn node_ids(graph: &Graph) -> Vec<String> {
    graph.get_all_nodes().map(|n| n.id.clone()).collect()
}

fn degree_sequence(graph: &Graph) -> Vec<usize> {
    graph.get_all_nodes().map(|n| graph.get_neighbors(&n.id).map(|v| v.len()).unwrap_or(0)).collect()
}

fn adjacency_sets(graph: &Graph) -> HashMap<String, HashSet<String>> {
    graph
        .get_all_nodes()
        .map(|n| (n.id.clone(), graph.get_neighbors(&n.id).unwrap_or_default().into_iter().collect()))
        .collect()
}

/// Two-colours `graph` via BFS; returns `None` if an odd cycle is found.
fn two_color(graph: &Graph) -> Option<HashMap<String, u8>> {
    let mut color: HashMap<String, u8> = HashMap::new();
    for start in graph.get_all_nodes().map(|n| n.id.clone()) {
        if color.contains_key(&start) {
            continue;
        }
        color.insert(start.clone(), 0);
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            let c = color[&node];
            for neighbour in graph.get_neighbors(&node).unwrap_or_default() {
                if neighbour == node {
                    return None; // a self-loop can never be 2-coloured consistently
                }
                match color.get(&neighbour) {
                    None => {
                        color.insert(neighbour.clone(), 1 - c);
                        queue.push_back(neighbour);
                    }
                    Some(&nc) if nc == c => return None,
                    _ => {}
                }
            }
        }
    }
    Some(color)
}

fn requests(spec: &GraphSpec, f: impl Fn(&AdvancedFacet) -> bool) -> bool {
    spec.advanced.iter().any(f)
}

/// Checks `bipartite`: two-colour BFS; every edge must cross colours
/// (spec.md §4.10's representative bipartite validator).
pub fn validate_bipartite(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::Bipartite)) {
        return None;
    }
    let valid = two_color(graph).is_some();
    Some(PropertyValidation::new(
        "bipartite",
        valid,
        "two-colourable with every edge crossing colours",
        if valid { "2-colourable" } else { "odd cycle found" },
    ))
}

/// Checks a requested `kPartite { parts }`: the graph admits a proper
/// vertex colouring with `parts` colours (no two same-coloured vertices
/// adjacent). Exact via exhaustive backtracking up to
/// [`EXHAUSTIVE_SEARCH_LIMIT`] vertices; above that, a greedy colouring
/// is attempted as a witness (exact if it succeeds) and otherwise
/// reported inconclusive rather than falsely refuted, since greedy
/// failing to find a colouring doesn't prove none exists.
pub fn validate_k_partite(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let parts = spec.advanced.iter().find_map(|f| if let AdvancedFacet::KPartite { parts } = f { Some(*parts) } else { None })?;
    let adj = adjacency_sets(graph);
    let nodes = node_ids(graph);
    if nodes.len() <= EXHAUSTIVE_SEARCH_LIMIT {
        let valid = backtrack_coloring(&nodes, &adj, parts);
        return Some(PropertyValidation::new(
            "kPartite",
            valid,
            format!("{parts}-colourable"),
            if valid { "a valid colouring exists" } else { "no valid colouring found (exhaustive search)" },
        ));
    }
    let colors_used = greedy_color_count(&nodes, &adj);
    if colors_used <= parts {
        return Some(PropertyValidation::new(
            "kPartite",
            true,
            format!("{parts}-colourable"),
            format!("greedy colouring witness uses {colors_used} colours"),
        ));
    }
    Some(
        PropertyValidation::new("kPartite", true, format!("{parts}-colourable"), "not computed")
            .with_message(format!(
                "graph has more than {EXHAUSTIVE_SEARCH_LIMIT} vertices and greedy colouring used more than {parts}; \
                 exhaustive search skipped as inconclusive (greedy failing doesn't prove no {parts}-colouring exists)"
            )),
    )
}

fn backtrack_coloring(nodes: &[String], adj: &HashMap<String, HashSet<String>>, colors: usize) -> bool {
    let mut assignment: HashMap<&str, usize> = HashMap::new();
    backtrack_coloring_inner(nodes, 0, adj, colors, &mut assignment)
}

fn backtrack_coloring_inner(
    nodes: &[String],
    idx: usize,
    adj: &HashMap<String, HashSet<String>>,
    colors: usize,
    assignment: &mut HashMap<&str, usize>,
) -> bool {
    if idx == nodes.len() {
        return true;
    }
    let node = nodes[idx].as_str();
    let empty = HashSet::new();
    let neighbours = adj.get(node).unwrap_or(&empty);
    for c in 0..colors {
        if neighbours.iter().all(|nb| assignment.get(nb.as_str()) != Some(&c)) {
            assignment.insert(node, c);
            if backtrack_coloring_inner(nodes, idx + 1, adj, colors, assignment) {
                return true;
            }
            assignment.remove(node);
        }
    }
    false
}

fn greedy_color_count(nodes: &[String], adj: &HashMap<String, HashSet<String>>) -> usize {
    let mut assignment: HashMap<&str, usize> = HashMap::new();
    let mut max_color = 0usize;
    for node in nodes {
        let empty = HashSet::new();
        let neighbours = adj.get(node.as_str()).unwrap_or(&empty);
        let used: HashSet<usize> = neighbours.iter().filter_map(|nb| assignment.get(nb.as_str()).copied()).collect();
        let mut c = 0usize;
        while used.contains(&c) {
            c += 1;
        }
        assignment.insert(node.as_str(), c);
        max_color = max_color.max(c + 1);
    }
    max_color
}

/// Checks `split`: the vertex set partitions into a clique and an
/// independent set. Exact via the Hammer-Simeone degree criterion: sort
/// degrees descending `d_1 >= ... >= d_n`, let `m` be the largest index
/// with `d_m >= m - 1`; the graph is split iff
/// `sum_{i=1}^m d_i == m(m-1) + sum_{i=m+1}^n d_i`.
pub fn validate_split(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::Split)) {
        return None;
    }
    let mut degrees = degree_sequence(graph);
    degrees.sort_unstable_by(|a, b| b.cmp(a));
    let n = degrees.len();
    let m = (1..=n).rev().find(|&i| degrees[i - 1] >= i - 1).unwrap_or(0);
    let lhs: usize = degrees[..m].iter().sum();
    let rhs = m * m.saturating_sub(1) + degrees[m..].iter().sum::<usize>();
    let valid = lhs == rhs;
    Some(PropertyValidation::new(
        "split",
        valid,
        "Hammer-Simeone degree criterion satisfied",
        format!("m={m}, sum(top m)={lhs}, m(m-1)+rest={rhs}"),
    ))
}

/// Checks `threshold`: the graph can be built from the empty graph by
/// repeatedly adding an isolated vertex or a vertex adjacent to every
/// existing vertex. Exact: repeatedly remove a vertex of degree `0` or
/// degree `remaining - 1` from a mutable copy; the graph is threshold
/// iff every vertex can eventually be removed this way.
pub fn validate_threshold(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::Threshold)) {
        return None;
    }
    let mut adj = adjacency_sets(graph);
    let mut remaining: HashSet<String> = adj.keys().cloned().collect();
    let mut removed_count = 0usize;
    while !remaining.is_empty() {
        let target = remaining.iter().find(|id| {
            let deg = adj[*id].intersection(&remaining).count();
            deg == 0 || deg == remaining.len() - 1
        }).cloned();
        match target {
            Some(id) => {
                remaining.remove(&id);
                adj.get_mut(&id).map(|s| s.clear());
                removed_count += 1;
            }
            None => break,
        }
    }
    let valid = remaining.is_empty();
    Some(PropertyValidation::new(
        "threshold",
        valid,
        "reducible to empty by repeatedly removing isolated/dominating vertices",
        format!("{removed_count}/{} vertices reduced", graph.node_count()),
    ))
}

/// Checks `interval` (approximately): every interval graph is chordal,
/// so chordality (no induced `C4..=C6`, per the engine's bound) is a
/// necessary but not sufficient condition; the asteroidal-triple-free
/// condition that makes chordal+AT-free exactly characterize interval
/// graphs is not tested.
pub fn validate_interval(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::Interval)) {
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
    Some(
        PropertyValidation::new(
            "interval",
            offending.is_none(),
            "chordal (necessary condition for interval)",
            match offending {
                Some(k) => format!("induced C{k} found, so not interval"),
                None => "chordal; interval not fully verified".to_string(),
            },
        )
        .with_message("approximate: only chordality (necessary) is checked, not asteroidal-triple-freeness".to_string()),
    )
}

/// Checks `comparability` (approximately): attempts a transitive
/// orientation of the edge set via bounded backtracking up to
/// [`EXHAUSTIVE_SEARCH_LIMIT`] vertices (exact below that bound);
/// above it, reports inconclusive.
pub fn validate_comparability(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::Comparability)) {
        return None;
    }
    if graph.is_directed() {
        return Some(PropertyValidation::new(
            "comparability",
            true,
            "edges orientable as a strict partial order",
            "graph is already directed; treated as a candidate orientation, not re-verified",
        ));
    }
    let nodes = node_ids(graph);
    if nodes.len() > EXHAUSTIVE_SEARCH_LIMIT {
        return Some(
            PropertyValidation::new("comparability", true, "a transitive orientation exists", "not computed")
                .with_message(format!("graph has more than {EXHAUSTIVE_SEARCH_LIMIT} vertices; search skipped as inconclusive")),
        );
    }
    let edges: Vec<(String, String)> = graph.get_all_edges().filter(|e| !e.is_self_loop()).map(|e| (e.source.clone(), e.target.clone())).collect();
    let adj = adjacency_sets(graph);
    let valid = has_transitive_orientation(&edges, &adj);
    Some(PropertyValidation::new(
        "comparability",
        valid,
        "a transitive orientation exists",
        if valid { "found" } else { "none found (exhaustive search)" },
    ))
}

fn has_transitive_orientation(edges: &[(String, String)], adj: &HashMap<String, HashSet<String>>) -> bool {
    fn backtrack(edges: &[(String, String)], idx: usize, oriented: &mut HashSet<(String, String)>, adj: &HashMap<String, HashSet<String>>) -> bool {
        if idx == edges.len() {
            return true;
        }
        let (a, b) = &edges[idx];
        for (from, to) in [(a.clone(), b.clone()), (b.clone(), a.clone())] {
            oriented.insert((from.clone(), to.clone()));
            let ok = is_locally_transitive(&from, &to, oriented, adj);
            if ok && backtrack(edges, idx + 1, oriented, adj) {
                return true;
            }
            oriented.remove(&(from, to));
        }
        false
    }
    fn is_locally_transitive(from: &str, to: &str, oriented: &HashSet<(String, String)>, adj: &HashMap<String, HashSet<String>>) -> bool {
        // if x -> from is oriented and x,to are adjacent, x -> to must also be oriented (and not to -> x).
        let empty = HashSet::new();
        for neighbour in adj.get(from).unwrap_or(&empty) {
            if oriented.contains(&(neighbour.clone(), from.to_string())) && adj.get(neighbour).unwrap_or(&empty).contains(to) {
                if oriented.contains(&(to.to_string(), neighbour.clone())) {
                    return false;
                }
            }
        }
        true
    }
    let mut oriented = HashSet::new();
    backtrack(edges, 0, &mut oriented, adj)
}

/// Checks `permutation` (approximately): a permutation graph is both a
/// comparability graph and a co-comparability graph (its complement is
/// also a comparability graph). This validator tests both orientations
/// via [`validate_comparability`]'s bounded search and reports
/// inconclusive above the same vertex-count bound.
pub fn validate_permutation(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::Permutation)) {
        return None;
    }
    let n = graph.node_count();
    if n > EXHAUSTIVE_SEARCH_LIMIT {
        return Some(
            PropertyValidation::new("permutation", true, "comparability and co-comparability", "not computed")
                .with_message(format!("graph has more than {EXHAUSTIVE_SEARCH_LIMIT} vertices; search skipped as inconclusive")),
        );
    }
    let edges: Vec<(String, String)> = graph.get_all_edges().filter(|e| !e.is_self_loop()).map(|e| (e.source.clone(), e.target.clone())).collect();
    let adj = adjacency_sets(graph);
    let comparability = has_transitive_orientation(&edges, &adj);

    let ids: Vec<String> = node_ids(graph);
    let mut complement_edges = Vec::new();
    let mut complement_adj: HashMap<String, HashSet<String>> = ids.iter().map(|id| (id.clone(), HashSet::new())).collect();
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            let (a, b) = (&ids[i], &ids[j]);
            if !adj.get(a).map(|s| s.contains(b)).unwrap_or(false) {
                complement_edges.push((a.clone(), b.clone()));
                complement_adj.get_mut(a).unwrap().insert(b.clone());
                complement_adj.get_mut(b).unwrap().insert(a.clone());
            }
        }
    }
    let co_comparability = has_transitive_orientation(&complement_edges, &complement_adj);
    let valid = comparability && co_comparability;
    Some(
        PropertyValidation::new(
            "permutation",
            valid,
            "comparability and co-comparability",
            format!("comparability={comparability}, co-comparability={co_comparability}"),
        )
        .with_message("approximate: exhaustive search bounded to small graphs".to_string()),
    )
}

/// Checks `line` (approximately): by Beineke's theorem, line graphs are
/// characterized by freedom from 9 forbidden induced subgraphs, the
/// simplest of which is the claw `K_{1,3}`. This validator tests only
/// claw-freeness (necessary, not sufficient); the other 8 forbidden
/// graphs in Beineke's list are not tested.
pub fn validate_line(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::Line)) {
        return None;
    }
    let found = has_induced_subgraph(graph, (&library::CLAW).into());
    Some(
        PropertyValidation::new(
            "line",
            !found,
            "claw-free (necessary condition for being a line graph)",
            if found { "induced claw found, so not a line graph" } else { "claw-free; line-graph status not fully verified" },
        )
        .with_message("approximate: only 1 of Beineke's 9 forbidden induced subgraphs (the claw) is tested".to_string()),
    )
}

/// Checks `selfComplementary` (approximately, via a necessary
/// condition): a self-complementary simple graph on `n` vertices must
/// have exactly half of `K_n`'s edges, i.e. `|E| == n(n-1)/4`, which
/// also requires `n(n-1)` to be divisible by 4. Full isomorphism
/// between the graph and its complement is not checked.
pub fn validate_self_complementary(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::SelfComplementary)) {
        return None;
    }
    let n = graph.node_count() as u64;
    let max_edges = n * n.saturating_sub(1) / 2;
    let expected = max_edges as f64 / 2.0;
    let actual_edges = graph.edge_count() as u64;
    let valid = max_edges % 2 == 0 && actual_edges == max_edges / 2;
    Some(
        PropertyValidation::new(
            "selfComplementary",
            valid,
            format!("|E| == n(n-1)/4 == {expected}"),
            format!("{actual_edges} edges"),
        )
        .with_message("approximate: only the necessary edge-count condition is checked, not isomorphism with the complement".to_string()),
    )
}

/// Checks a requested `scaleFree { exponent }` (heuristically): the
/// degree distribution should be right-skewed with a small number of
/// high-degree hubs, consistent with (though not a rigorous fit test
/// for) a power-law with the requested exponent. A graph passes if its
/// maximum degree exceeds its mean degree by a wide margin, the
/// standard signature of a heavy-tailed distribution a power-law
/// produces and a near-uniform (e.g. regular or random Erdos-Renyi)
/// distribution does not.
pub fn validate_scale_free(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let exponent =
        spec.advanced.iter().find_map(|f| if let AdvancedFacet::ScaleFree { exponent } = f { Some(*exponent) } else { None })?;
    let degrees = degree_sequence(graph);
    if degrees.is_empty() {
        return Some(PropertyValidation::new("scaleFree", true, format!("exponent ~ {exponent}"), "empty graph (vacuous)"));
    }
    let mean = degrees.iter().sum::<usize>() as f64 / degrees.len() as f64;
    let max_degree = *degrees.iter().max().unwrap_or(&0) as f64;
    let valid = mean > 0.0 && max_degree >= mean * 2.5;
    Some(
        PropertyValidation::new(
            "scaleFree",
            valid,
            "max degree notably exceeds mean degree (heavy-tailed signature)",
            format!("mean degree {mean:.2}, max degree {max_degree}"),
        )
        .with_message("heuristic: checks for a heavy-tailed degree distribution, not a statistical power-law fit".to_string()),
    )
}

fn clustering_coefficient(graph: &Graph, adj: &HashMap<String, HashSet<String>>) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for (node, neighbours) in adj {
        let k = neighbours.len();
        if k < 2 {
            continue;
        }
        let neighbour_vec: Vec<&String> = neighbours.iter().collect();
        let mut links = 0usize;
        for i in 0..neighbour_vec.len() {
            for j in (i + 1)..neighbour_vec.len() {
                if adj.get(neighbour_vec[i]).map(|s| s.contains(neighbour_vec[j])).unwrap_or(false) {
                    links += 1;
                }
            }
        }
        let possible = k * (k - 1) / 2;
        total += links as f64 / possible as f64;
        count += 1;
        let _ = node;
    }
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn average_path_length(graph: &Graph) -> Option<f64> {
    let nodes = node_ids(graph);
    if nodes.len() < 2 {
        return Some(0.0);
    }
    let mut total = 0.0f64;
    let mut pairs = 0u64;
    for start in &nodes {
        let mut dist: HashMap<String, u32> = HashMap::new();
        dist.insert(start.clone(), 0);
        let mut queue = VecDeque::new();
        queue.push_back(start.clone());
        while let Some(node) = queue.pop_front() {
            let d = dist[&node];
            for neighbour in graph.get_neighbors(&node).unwrap_or_default() {
                if !dist.contains_key(&neighbour) {
                    dist.insert(neighbour.clone(), d + 1);
                    queue.push_back(neighbour);
                }
            }
        }
        if dist.len() != nodes.len() {
            return None; // disconnected: average path length undefined
        }
        for (id, d) in &dist {
            if id != start {
                total += *d as f64;
                pairs += 1;
            }
        }
    }
    Some(total / pairs.max(1) as f64)
}

/// Checks `smallWorld` (heuristically): high clustering (average local
/// clustering coefficient well above what a same-density Erdos-Renyi
/// random graph would have) combined with a short average path length
/// (`O(log n)`), the Watts-Strogatz signature. Reports inconclusive (not
/// refuted) on a disconnected graph, since average path length is
/// undefined there.
pub fn validate_small_world(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::SmallWorld)) {
        return None;
    }
    let n = graph.node_count();
    if n < 4 {
        return Some(PropertyValidation::new("smallWorld", true, "high clustering, short average path length", "too small to evaluate meaningfully"));
    }
    let adj = adjacency_sets(graph);
    let clustering = clustering_coefficient(graph, &adj);
    let mean_degree = degree_sequence(graph).iter().sum::<usize>() as f64 / n as f64;
    let random_clustering = mean_degree / n as f64;
    let path_len = average_path_length(graph);
    let log_n = (n as f64).ln().max(1.0);
    match path_len {
        Some(avg) => {
            let valid = clustering > random_clustering * 2.0 && avg <= log_n * 3.0;
            Some(PropertyValidation::new(
                "smallWorld",
                valid,
                "clustering >> random baseline and average path length ~ O(log n)",
                format!("clustering={clustering:.3} (random baseline {random_clustering:.3}), avg path length={avg:.2}, log(n)={log_n:.2}"),
            ))
        }
        None => Some(
            PropertyValidation::new("smallWorld", true, "clustering >> random baseline and average path length ~ O(log n)", "graph disconnected")
                .with_message("average path length undefined on a disconnected graph; reported inconclusive".to_string()),
        ),
    }
}

/// Checks a requested `modular { modules }` (heuristically): computes
/// the Newman modularity `Q` of the partition implied by each node's
/// `node_type` attribute (the label the `heterogeneous` schema and
/// generator already assign); `Q` notably above zero indicates the
/// partition captures genuine community structure rather than being
/// indistinguishable from a random grouping. Falls back to a weaker
/// connected-components check when no type labels are present.
pub fn validate_modular(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let modules =
        spec.advanced.iter().find_map(|f| if let AdvancedFacet::Modular { modules } = f { Some(*modules) } else { None })?;
    let labeled: HashMap<String, String> =
        graph.get_all_nodes().filter_map(|n| n.node_type.clone().map(|t| (n.id.clone(), t))).collect();
    if labeled.len() != graph.node_count() || labeled.is_empty() {
        let components = weakly_connected_component_count(graph);
        let valid = components >= modules.min(graph.node_count().max(1));
        return Some(
            PropertyValidation::new(
                "modular",
                valid,
                format!(">= {modules} distinguishable groups"),
                format!("{components} connected component(s); no node_type labels to compute modularity"),
            )
            .with_message("heuristic: no node_type partition available, fell back to component count".to_string()),
        );
    }
    let m = graph.edge_count().max(1) as f64;
    let degrees: HashMap<String, usize> = graph.get_all_nodes().map(|n| (n.id.clone(), graph.get_neighbors(&n.id).map(|v| v.len()).unwrap_or(0))).collect();
    let mut within_edges: HashMap<&str, f64> = HashMap::new();
    let mut module_degree: HashMap<&str, f64> = HashMap::new();
    for node in graph.get_all_nodes() {
        let label = labeled.get(&node.id).map(|s| s.as_str()).unwrap_or("");
        *module_degree.entry(label).or_insert(0.0) += degrees[&node.id] as f64;
    }
    for edge in graph.get_all_edges() {
        if let (Some(a), Some(b)) = (labeled.get(&edge.source), labeled.get(&edge.target)) {
            if a == b {
                *within_edges.entry(a.as_str()).or_insert(0.0) += 1.0;
            }
        }
    }
    let q: f64 = within_edges
        .keys()
        .chain(module_degree.keys())
        .collect::<HashSet<_>>()
        .into_iter()
        .map(|label| {
            let e_in = within_edges.get(label).copied().unwrap_or(0.0);
            let d = module_degree.get(label).copied().unwrap_or(0.0);
            e_in / m - (d / (2.0 * m)).powi(2)
        })
        .sum();
    let distinct_modules = labeled.values().collect::<HashSet<_>>().len();
    let valid = q > 0.05 && distinct_modules >= modules;
    Some(
        PropertyValidation::new(
            "modular",
            valid,
            format!("modularity Q > 0.05 over >= {modules} modules"),
            format!("Q={q:.4}, {distinct_modules} distinct node_type labels"),
        )
        .with_message("heuristic: modularity computed over the node_type partition, not an optimal community detection".to_string()),
    )
}

fn weakly_connected_component_count(graph: &Graph) -> usize {
    let mut visited: HashSet<String> = HashSet::new();
    let mut components = 0usize;
    for node in graph.get_all_nodes() {
        if visited.contains(&node.id) {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::new();
        queue.push_back(node.id.clone());
        visited.insert(node.id.clone());
        while let Some(current) = queue.pop_front() {
            for neighbour in graph.get_neighbors(&current).unwrap_or_default() {
                if visited.insert(neighbour.clone()) {
                    queue.push_back(neighbour);
                }
            }
        }
    }
    components
}

/// Checks `unitDisk` (heuristically): if every node carries numeric `x`
/// and `y` attributes, verifies the geometric definition directly
/// (edge iff Euclidean distance `<= 1`, using each edge's weight as the
/// unit-disk radius when present). Otherwise there is no coordinate
/// data to check against and this validator reports inconclusive,
/// since recognizing unit-disk graphs without known coordinates is
/// equivalent to the existential theory of the reals and not attempted
/// here.
pub fn validate_unit_disk(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::UnitDisk)) {
        return None;
    }
    let coords: Option<HashMap<String, (f64, f64)>> = graph
        .get_all_nodes()
        .map(|n| match (n.attributes.get("x"), n.attributes.get("y")) {
            (Some(AttrValue::Number(x)), Some(AttrValue::Number(y))) => Some((n.id.clone(), (*x, *y))),
            _ => None,
        })
        .collect();
    let Some(coords) = coords else {
        return Some(
            PropertyValidation::new("unitDisk", true, "edge iff Euclidean distance <= 1", "no x/y coordinate attributes present")
                .with_message("inconclusive: coordinate-free unit-disk recognition is not attempted".to_string()),
        );
    };
    let mut mismatch = None;
    let ids: Vec<&String> = coords.keys().collect();
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            let (a, b) = (ids[i], ids[j]);
            let (ax, ay) = coords[a];
            let (bx, by) = coords[b];
            let dist = ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt();
            let connected = graph.get_neighbors(a).map(|v| v.iter().any(|x| x == b)).unwrap_or(false);
            if connected != (dist <= 1.0) {
                mismatch = Some((a.clone(), b.clone(), dist, connected));
                break;
            }
        }
        if mismatch.is_some() {
            break;
        }
    }
    Some(PropertyValidation::new(
        "unitDisk",
        mismatch.is_none(),
        "edge iff Euclidean distance <= 1",
        match mismatch {
            Some((a, b, dist, connected)) => format!("{a}-{b} distance {dist:.3}, connected={connected}, contradicts unit-disk rule"),
            None => "every pair consistent with the unit-disk rule".to_string(),
        },
    ))
}

/// Checks a requested `stronglyRegular { k, lambda, mu }`: exact —
/// every vertex has degree `k`, every adjacent pair shares exactly
/// `lambda` common neighbours, and every distinct non-adjacent pair
/// shares exactly `mu` common neighbours.
pub fn validate_strongly_regular(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let (k, lambda, mu) = spec.advanced.iter().find_map(|f| {
        if let AdvancedFacet::StronglyRegular { k, lambda, mu } = f {
            Some((*k, *lambda, *mu))
        } else {
            None
        }
    })?;
    let adj = adjacency_sets(graph);
    let ids: Vec<String> = node_ids(graph);
    let degree_ok = ids.iter().all(|id| adj[id].len() == k);
    let mut lambda_ok = true;
    let mut mu_ok = true;
    'outer: for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            let (a, b) = (&ids[i], &ids[j]);
            let common = adj[a].intersection(&adj[b]).count();
            if adj[a].contains(b) {
                if common != lambda {
                    lambda_ok = false;
                    break 'outer;
                }
            } else if common != mu {
                mu_ok = false;
                break 'outer;
            }
        }
    }
    let valid = degree_ok && lambda_ok && mu_ok;
    Some(PropertyValidation::new(
        "stronglyRegular",
        valid,
        format!("({k}, {lambda}, {mu})-strongly regular"),
        format!("degree_ok={degree_ok}, lambda_ok={lambda_ok}, mu_ok={mu_ok}"),
    ))
}

/// Checks `vertexTransitive`: regularity is a necessary condition
/// (checked exactly — any irregular degree sequence deterministically
/// refutes vertex-transitivity). Below
/// [`AUTOMORPHISM_SEARCH_LIMIT`] vertices and when regular, an
/// exhaustive automorphism search additionally confirms that every
/// vertex can be mapped to every other; above that bound regularity
/// alone is reported, as inconclusive-but-not-refuted.
pub fn validate_vertex_transitive(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    if !requests(spec, |f| matches!(f, AdvancedFacet::VertexTransitive)) {
        return None;
    }
    let degrees = degree_sequence(graph);
    let regular = degrees.windows(2).all(|w| w[0] == w[1]);
    if !regular {
        return Some(PropertyValidation::new(
            "vertexTransitive",
            false,
            "regular degree sequence (necessary) and an automorphism mapping every vertex pair",
            format!("irregular degree sequence {degrees:?}"),
        ));
    }
    let n = graph.node_count();
    if n > AUTOMORPHISM_SEARCH_LIMIT {
        return Some(
            PropertyValidation::new("vertexTransitive", true, "regular and vertex-transitive", "regular; automorphism search skipped")
                .with_message(format!("graph has more than {AUTOMORPHISM_SEARCH_LIMIT} vertices; only the necessary regularity condition was checked")),
        );
    }
    let adj = adjacency_sets(graph);
    let ids = node_ids(graph);
    let reachable = vertex_transitivity_reachable_set(&ids, &adj);
    let valid = reachable.len() == ids.len();
    Some(PropertyValidation::new(
        "vertexTransitive",
        valid,
        "an automorphism maps every vertex to every other",
        format!("{} of {} vertices reachable from vertex 0 via an automorphism", reachable.len(), ids.len()),
    ))
}

/// For each target vertex, checks whether some permutation of `ids` is
/// a graph automorphism sending `ids[0]` to it; returns the set of
/// vertices reachable this way. Bounded by [`AUTOMORPHISM_SEARCH_LIMIT`]
/// (caller enforces `ids.len() <= AUTOMORPHISM_SEARCH_LIMIT`).
fn vertex_transitivity_reachable_set(ids: &[String], adj: &HashMap<String, HashSet<String>>) -> HashSet<String> {
    let mut reachable = HashSet::new();
    reachable.insert(ids[0].clone());
    for target in &ids[1..] {
        if automorphism_maps(ids, adj, &ids[0], target) {
            reachable.insert(target.clone());
        }
    }
    reachable
}

fn automorphism_maps(ids: &[String], adj: &HashMap<String, HashSet<String>>, from: &str, to: &str) -> bool {
    let from_idx = ids.iter().position(|id| id == from).expect("from present");
    let to_idx = ids.iter().position(|id| id == to).expect("to present");
    // try every permutation fixing ids[from_idx] -> ids[to_idx], varying the rest.
    let mut rest: Vec<usize> = (0..ids.len()).filter(|&i| i != from_idx).collect();
    try_automorphism_permutations(ids, adj, from_idx, to_idx, &mut rest, 0)
}

fn try_automorphism_permutations(
    ids: &[String],
    adj: &HashMap<String, HashSet<String>>,
    from_idx: usize,
    to_idx: usize,
    rest: &mut [usize],
    k: usize,
) -> bool {
    if k == rest.len() {
        return is_automorphism(ids, adj, from_idx, to_idx, rest);
    }
    for i in k..rest.len() {
        rest.swap(k, i);
        if try_automorphism_permutations(ids, adj, from_idx, to_idx, rest, k + 1) {
            return true;
        }
        rest.swap(k, i);
    }
    false
}

fn is_automorphism(ids: &[String], adj: &HashMap<String, HashSet<String>>, from_idx: usize, to_idx: usize, rest: &[usize]) -> bool {
    let mut mapping: HashMap<&str, &str> = HashMap::new();
    mapping.insert(&ids[from_idx], &ids[to_idx]);
    let mut cursor = 0usize;
    for i in 0..ids.len() {
        if i == from_idx {
            continue;
        }
        mapping.insert(&ids[i], &ids[rest[cursor]]);
        cursor += 1;
    }
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            let (a, b) = (&ids[i], &ids[j]);
            let adjacent = adj[a].contains(b);
            let ma = mapping[a.as_str()];
            let mb = mapping[b.as_str()];
            let mapped_adjacent = adj[ma].contains(mb);
            if adjacent != mapped_adjacent {
                return false;
            }
        }
    }
    true
}

/// Finds a clique of exactly `size` vertices via bounded backtracking.
/// Used by [`validate_treewidth_bound`] and [`validate_k_colourable`] as
/// a deterministic refutation witness (a clique of size `s` proves
/// treewidth `>= s - 1` and chromatic number `>= s`).
fn clique_of_size_exists(graph: &Graph, size: usize) -> bool {
    if size == 0 {
        return true;
    }
    let adj = adjacency_sets(graph);
    let ids = node_ids(graph);
    if ids.len() < size {
        return false;
    }
    fn backtrack(ids: &[String], start: usize, size: usize, clique: &mut Vec<String>, adj: &HashMap<String, HashSet<String>>) -> bool {
        if clique.len() == size {
            return true;
        }
        if ids.len() - start < size - clique.len() {
            return false;
        }
        for i in start..ids.len() {
            if clique.iter().all(|m| adj[m].contains(&ids[i])) {
                clique.push(ids[i].clone());
                if backtrack(ids, i + 1, size, clique, adj) {
                    return true;
                }
                clique.pop();
            }
        }
        false
    }
    backtrack(&ids, 0, size, &mut Vec::new(), &adj)
}

/// Greedy min-degree elimination: repeatedly removes the lowest-degree
/// remaining vertex, connecting its neighbours pairwise (fill-in)
/// before removal, tracking the largest clique formed. Returns an
/// upper bound on the graph's treewidth — exact for chordal graphs,
/// an overestimate otherwise.
fn min_degree_elimination_width(graph: &Graph) -> usize {
    let mut adj = adjacency_sets(graph);
    let mut remaining: HashSet<String> = adj.keys().cloned().collect();
    let mut width = 0usize;
    while !remaining.is_empty() {
        let pick = remaining
            .iter()
            .min_by_key(|id| adj[*id].intersection(&remaining).count())
            .cloned()
            .expect("remaining is non-empty");
        let neighbours: Vec<String> = adj[&pick].intersection(&remaining).cloned().collect();
        width = width.max(neighbours.len());
        for i in 0..neighbours.len() {
            for j in (i + 1)..neighbours.len() {
                adj.get_mut(&neighbours[i]).unwrap().insert(neighbours[j].clone());
                adj.get_mut(&neighbours[j]).unwrap().insert(neighbours[i].clone());
            }
        }
        remaining.remove(&pick);
    }
    width
}

/// Checks a requested `treewidthBound { max }`: a greedy min-degree
/// elimination ordering gives an upper bound on treewidth; if that
/// bound is `<= max` the graph provably satisfies the request (the
/// ordering is itself a width-`w` tree decomposition witness). If the
/// heuristic bound exceeds `max`, searches for a `(max + 2)`-clique
/// (bounded to [`EXHAUSTIVE_SEARCH_LIMIT`] vertices) as a deterministic
/// refutation witness (a clique of size `s` forces treewidth `>= s-1`);
/// absent both, reports inconclusive.
pub fn validate_treewidth_bound(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let max = spec.advanced.iter().find_map(|f| if let AdvancedFacet::TreewidthBound { max } = f { Some(*max) } else { None })?;
    let upper_bound = min_degree_elimination_width(graph);
    if (upper_bound as u32) <= max {
        return Some(PropertyValidation::new(
            "treewidthBound",
            true,
            format!("<= {max}"),
            format!("elimination-ordering witness achieves width {upper_bound}"),
        ));
    }
    if graph.node_count() <= EXHAUSTIVE_SEARCH_LIMIT && clique_of_size_exists(graph, max as usize + 2) {
        return Some(PropertyValidation::new(
            "treewidthBound",
            false,
            format!("<= {max}"),
            format!("a clique of size {} forces treewidth >= {}", max + 2, max + 1),
        ));
    }
    Some(
        PropertyValidation::new("treewidthBound", true, format!("<= {max}"), format!("heuristic upper bound {upper_bound} exceeds {max}"))
            .with_message("inconclusive: the min-degree elimination heuristic may overestimate treewidth, and no refuting clique was found".to_string()),
    )
}

/// Checks a requested `kColourable { k }`: a greedy colouring gives an
/// upper bound on chromatic number; if it uses `<= k` colours, that
/// colouring is itself a witness and the check is exact. Otherwise
/// searches for a `(k + 1)`-clique (bounded to
/// [`EXHAUSTIVE_SEARCH_LIMIT`] vertices) as a deterministic refutation
/// witness; absent both, reports inconclusive.
pub fn validate_k_colourable(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let k = spec.advanced.iter().find_map(|f| if let AdvancedFacet::KColourable { k } = f { Some(*k) } else { None })?;
    let ids = node_ids(graph);
    let adj = adjacency_sets(graph);
    let used = greedy_color_count(&ids, &adj);
    if used <= k {
        return Some(PropertyValidation::new(
            "kColourable",
            true,
            format!("<= {k} colours"),
            format!("greedy colouring witness uses {used} colours"),
        ));
    }
    if ids.len() <= EXHAUSTIVE_SEARCH_LIMIT && clique_of_size_exists(graph, k + 1) {
        return Some(PropertyValidation::new(
            "kColourable",
            false,
            format!("<= {k} colours"),
            format!("a clique of size {} forces chromatic number >= {}", k + 1, k + 1),
        ));
    }
    Some(
        PropertyValidation::new("kColourable", true, format!("<= {k} colours"), format!("greedy colouring used {used} colours"))
            .with_message("inconclusive: greedy colouring isn't optimal, and no refuting clique was found".to_string()),
    )
}

/// Checks a requested `minorFree { name }`: for `name` in `{"K5",
/// "K3,3"}`, Wagner's/Kuratowski's theorem makes K5-and-K3,3-minor-free
/// equivalent to planarity, so this reuses the same heuristic as
/// [`super::structure::validate_planar`] (necessary edge-count bound
/// plus an induced-K5 check). Other minor names are not supported and
/// are reported inconclusive.
pub fn validate_minor_free(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let name = spec.advanced.iter().find_map(|f| if let AdvancedFacet::MinorFree { name } = f { Some(name.clone()) } else { None })?;
    minor_free_via_planarity("minorFree", &name, graph)
}

/// Checks a requested `topologicalMinorFree { name }`: identical
/// treatment to [`validate_minor_free`] — Kuratowski's theorem is
/// literally stated in terms of topological minors (subdivisions) of
/// K5/K3,3, so the same heuristic applies without adaptation for those
/// two names.
pub fn validate_topological_minor_free(graph: &Graph, spec: &GraphSpec) -> Option<PropertyValidation> {
    let name = spec
        .advanced
        .iter()
        .find_map(|f| if let AdvancedFacet::TopologicalMinorFree { name } = f { Some(name.clone()) } else { None })?;
    minor_free_via_planarity("topologicalMinorFree", &name, graph)
}

fn minor_free_via_planarity(property: &str, name: &str, graph: &Graph) -> Option<PropertyValidation> {
    if name != "K5" && name != "K3,3" {
        return Some(
            PropertyValidation::new(property, true, format!("no {name} minor"), "not computed")
                .with_message(format!("only \"K5\" and \"K3,3\" are supported names (via the planarity/Kuratowski heuristic); \"{name}\" is reported inconclusive")),
        );
    }
    let v = graph.node_count();
    let e = graph.edge_count();
    if v >= 3 && e > 3 * v - 6 {
        return Some(PropertyValidation::new(
            property,
            false,
            format!("no {name} minor"),
            format!("{e} edges over {v} vertices exceeds the planar bound, implying a K5 or K3,3 minor"),
        ));
    }
    let has_k5 = has_induced_subgraph(graph, (&library::K5).into());
    Some(
        PropertyValidation::new(
            property,
            !has_k5,
            format!("no {name} minor"),
            if has_k5 { "induced K5 found" } else { "necessary edge bound satisfied, no induced K5" },
        )
        .with_message("heuristic: reuses the planarity necessary-condition-plus-K5 check (Kuratowski's theorem)".to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_graph, GenerationConfig};
    use crate::spec_model::{make_graph_spec, Completeness, GraphSpecOverrides};

    fn complete_graph_on(n: usize) -> Graph {
        let spec = make_graph_spec(GraphSpecOverrides {
            completeness: Some(Completeness::Complete),
            ..Default::default()
        });
        let config = GenerationConfig {
            node_count: n,
            ..Default::default()
        };
        generate_graph(&spec, &config).unwrap()
    }

    fn bipartite_spec() -> crate::spec_model::GraphSpec {
        make_graph_spec(GraphSpecOverrides {
            advanced: vec![AdvancedFacet::Bipartite],
            ..Default::default()
        })
    }

    #[test]
    fn generated_bipartite_graph_validates() {
        let spec = bipartite_spec();
        let config = GenerationConfig {
            node_count: 10,
            seed: 3,
            ..Default::default()
        };
        let g = generate_graph(&spec, &config).unwrap();
        let result = validate_bipartite(&g, &spec).expect("facet requested");
        assert!(result.valid, "{:?}", result);
    }

    #[test]
    fn triangle_is_not_bipartite() {
        let spec = bipartite_spec();
        let mut g = Graph::new(false);
        for id in ["a", "b", "c"] {
            g.add_node(crate::model::Node::new(id)).unwrap();
        }
        g.add_edge(crate::model::Edge::new("e0", "a", "b")).unwrap();
        g.add_edge(crate::model::Edge::new("e1", "b", "c")).unwrap();
        g.add_edge(crate::model::Edge::new("e2", "c", "a")).unwrap();
        let result = validate_bipartite(&g, &spec).unwrap();
        assert!(!result.valid);
    }

    #[test]
    fn star_graph_is_split() {
        let spec = make_graph_spec(GraphSpecOverrides {
            advanced: vec![AdvancedFacet::Split],
            ..Default::default()
        });
        let mut g = Graph::new(false);
        for id in ["hub", "a", "b", "c"] {
            g.add_node(crate::model::Node::new(id)).unwrap();
        }
        for (i, leaf) in ["a", "b", "c"].iter().enumerate() {
            g.add_edge(crate::model::Edge::new(format!("e{i}"), "hub", *leaf)).unwrap();
        }
        let result = validate_split(&g, &spec).unwrap();
        assert!(result.valid, "{:?}", result);
    }

    #[test]
    fn complete_graph_is_threshold() {
        let spec = make_graph_spec(GraphSpecOverrides {
            advanced: vec![AdvancedFacet::Threshold],
            ..Default::default()
        });
        let g = complete_graph_on(5);
        let result = validate_threshold(&g, &spec).unwrap();
        assert!(result.valid, "{:?}", result);
    }

    #[test]
    fn path_graph_is_not_threshold() {
        let spec = make_graph_spec(GraphSpecOverrides {
            advanced: vec![AdvancedFacet::Threshold],
            ..Default::default()
        });
        let mut g = Graph::new(false);
        for id in ["a", "b", "c", "d"] {
            g.add_node(crate::model::Node::new(id)).unwrap();
        }
        g.add_edge(crate::model::Edge::new("e0", "a", "b")).unwrap();
        g.add_edge(crate::model::Edge::new("e1", "b", "c")).unwrap();
        g.add_edge(crate::model::Edge::new("e2", "c", "d")).unwrap();
        let result = validate_threshold(&g, &spec).unwrap();
        assert!(!result.valid);
    }

    #[test]
    fn petersen_like_strongly_regular_params_reject_non_matching_graph() {
        let spec = make_graph_spec(GraphSpecOverrides {
            advanced: vec![AdvancedFacet::StronglyRegular { k: 10, lambda: 0, mu: 0 }],
            ..Default::default()
        });
        let g = complete_graph_on(5);
        let result = validate_strongly_regular(&g, &spec).unwrap();
        assert!(!result.valid);
    }

    #[test]
    fn k4_strongly_regular_matches_its_own_parameters() {
        let spec = make_graph_spec(GraphSpecOverrides {
            advanced: vec![AdvancedFacet::StronglyRegular { k: 3, lambda: 2, mu: 0 }],
            ..Default::default()
        });
        let g = complete_graph_on(4);
        let result = validate_strongly_regular(&g, &spec).unwrap();
        assert!(result.valid, "{:?}", result);
    }

    #[test]
    fn clique_of_size_refutes_k_colourable() {
        let spec = make_graph_spec(GraphSpecOverrides {
            advanced: vec![AdvancedFacet::KColourable { k: 3 }],
            ..Default::default()
        });
        let g = complete_graph_on(5);
        let result = validate_k_colourable(&g, &spec).unwrap();
        assert!(!result.valid);
    }

    #[test]
    fn bipartite_graph_is_2_colourable() {
        let spec = make_graph_spec(GraphSpecOverrides {
            advanced: vec![AdvancedFacet::KPartite { parts: 2 }],
            ..Default::default()
        });
        let config = GenerationConfig {
            node_count: 8,
            seed: 2,
            ..Default::default()
        };
        let bspec = bipartite_spec();
        let g = generate_graph(&bspec, &config).unwrap();
        let result = validate_k_partite(&g, &spec).unwrap();
        assert!(result.valid, "{:?}", result);
    }
}
