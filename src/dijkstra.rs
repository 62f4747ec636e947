//! Single-source shortest paths with a dense O(V²) Dijkstra scan.
//!
//! The graph is an adjacency matrix, so the next vertex is picked by scanning
//! every unvisited vertex rather than through a priority queue. Ties go to the
//! lowest index and edges are relaxed in ascending order, which keeps results
//! reproducible.

use crate::{Graph, Result, VertexId, Weight};
use std::fmt;
use tracing::{debug, trace, warn};

/// Tentative or final distance from the source.
///
/// Every finite distance orders below `Unreached`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Unreached,
}

impl Distance {
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreached => None,
        }
    }

    /// Extend this distance by one edge. `None` when unreached or on overflow.
    fn extend(self, weight: Weight) -> Option<u64> {
        self.finite().and_then(|d| d.checked_add(weight))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreached => write!(f, "unreached"),
        }
    }
}

/// Distances and predecessor links produced by [`solve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    source: VertexId,
    distance: Vec<Distance>,
    parent: Vec<Option<VertexId>>,
    visited: Vec<bool>,
    visit_order: Vec<VertexId>,
}

impl ShortestPathResult {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.distance.len()
    }

    /// Distance to `v`; out-of-range ids are reported as unreached
    pub fn distance_to(&self, v: VertexId) -> Distance {
        self.distance.get(v).copied().unwrap_or(Distance::Unreached)
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distance
    }

    pub fn parent_of(&self, v: VertexId) -> Option<VertexId> {
        self.parent.get(v).copied().flatten()
    }

    pub fn is_visited(&self, v: VertexId) -> bool {
        self.visited.get(v).copied().unwrap_or(false)
    }

    /// Vertices in the order they were finalised
    pub fn visit_order(&self) -> &[VertexId] {
        &self.visit_order
    }
}

/// Run Dijkstra's algorithm from `source` over every vertex of `graph`.
///
/// Fails with `InvalidArgument` if `source` is not a vertex of the graph.
pub fn solve(graph: &Graph, source: VertexId) -> Result<ShortestPathResult> {
    graph.check_vertex(source)?;
    let n = graph.num_vertices();

    let mut distance = vec![Distance::Unreached; n];
    let mut parent = vec![None; n];
    let mut visited = vec![false; n];
    let mut visit_order = Vec::with_capacity(n);

    distance[source] = Distance::Finite(0);

    for _ in 0..n.saturating_sub(1) {
        let Some(u) = min_distance(&distance, &visited) else {
            break;
        };
        visited[u] = true;
        visit_order.push(u);
        debug!(vertex = u, distance = %distance[u], "finalised");

        for (v, w) in graph.neighbors(u) {
            if visited[v] {
                continue;
            }
            if let Some(candidate) = distance[u].extend(w) {
                if Distance::Finite(candidate) < distance[v] {
                    trace!(from = u, to = v, distance = candidate, "relaxed");
                    distance[v] = Distance::Finite(candidate);
                    parent[v] = Some(u);
                }
            }
        }
    }

    let unreached = distance.iter().filter(|d| !d.is_finite()).count();
    if unreached > 0 {
        warn!(source, unreached, "some vertices are unreachable from the source");
    }

    Ok(ShortestPathResult {
        source,
        distance,
        parent,
        visited,
        visit_order,
    })
}

/// Unvisited vertex with the smallest finite distance, lowest index on ties
fn min_distance(distance: &[Distance], visited: &[bool]) -> Option<VertexId> {
    distance
        .iter()
        .enumerate()
        .filter(|&(v, d)| !visited[v] && d.is_finite())
        .min_by_key(|&(v, &d)| (d, v))
        .map(|(v, _)| v)
}

/// Vertices from the source to `destination`, both inclusive.
///
/// Returns `None` when `destination` is out of range or unreachable.
pub fn reconstruct_path(result: &ShortestPathResult, destination: VertexId) -> Option<Vec<VertexId>> {
    if !result.distance_to(destination).is_finite() {
        return None;
    }

    let mut path = vec![destination];
    let mut current = destination;
    while let Some(p) = result.parent_of(current) {
        path.push(p);
        current = p;
    }
    path.reverse();

    debug_assert_eq!(path.first(), Some(&result.source));
    Some(path)
}
