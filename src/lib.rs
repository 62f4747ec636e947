use tracing::debug;

/// Dense vertex index in `[0, vertex_count)`
pub type VertexId = usize;

/// Edge weight. Zero is reserved for "no edge".
pub type Weight = u64;

/// Represents a directed weighted graph with adjacency matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Number of vertices
    n: usize,
    /// Adjacency matrix: adj[i][j] = weight of the edge from vertex i to vertex j, 0 if absent
    adj: Vec<Vec<Weight>>,
}

impl Graph {
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "graph must have at least one vertex".to_string(),
            ));
        }
        debug!(vertices = n, "created empty graph");
        Ok(Graph {
            n,
            adj: vec![vec![0; n]; n],
        })
    }

    pub fn from_adjacency_matrix(adj: Vec<Vec<Weight>>) -> Result<Self> {
        let n = adj.len();
        if n == 0 {
            return Err(Error::InvalidArgument(
                "adjacency matrix must not be empty".to_string(),
            ));
        }
        if let Some((i, row)) = adj.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(Error::InvalidArgument(format!(
                "adjacency matrix is not square: row {} has {} entries, expected {}",
                i,
                row.len(),
                n
            )));
        }
        Ok(Graph { n, adj })
    }

    /// Set the weight of the directed edge `source -> destination`.
    ///
    /// Overwrites any earlier weight for the same ordered pair.
    pub fn add_edge(&mut self, source: VertexId, destination: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;
        if weight == 0 {
            return Err(Error::InvalidArgument(format!(
                "edge {} -> {} has weight 0; weights must be positive",
                source, destination
            )));
        }
        debug!(source, destination, weight, "add edge");
        self.adj[source][destination] = weight;
        Ok(())
    }

    pub fn num_vertices(&self) -> usize {
        self.n
    }

    pub fn num_edges(&self) -> usize {
        self.adj.iter().flatten().filter(|&&w| w != 0).count()
    }

    /// Weight of `u -> v`, or `None` if there is no such edge or either id is out of range
    pub fn weight(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.adj
            .get(u)
            .and_then(|row| row.get(v))
            .copied()
            .filter(|&w| w != 0)
    }

    /// Outgoing edges of `u` as `(v, weight)` pairs in ascending order of `v`.
    ///
    /// Yields nothing for an out-of-range `u`.
    pub fn neighbors(&self, u: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.adj
            .get(u)
            .into_iter()
            .flat_map(|row| row.iter().copied().enumerate())
            .filter(|&(_, w)| w != 0)
    }

    pub fn adjacency(&self) -> &[Vec<Weight>] {
        &self.adj
    }

    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v >= self.n {
            return Err(Error::InvalidArgument(format!(
                "vertex {} is out of range for a graph of {} vertices",
                v, self.n
            )));
        }
        Ok(())
    }
}

// Module declarations
pub mod error;
pub mod dijkstra;
pub mod cost;
pub mod labels;
pub mod parser;

pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_creation() {
        let g = Graph::new(3).unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.weight(0, 0), None);
    }

    #[test]
    fn test_zero_vertices_rejected() {
        assert!(matches!(Graph::new(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            Graph::from_adjacency_matrix(vec![]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_non_square_matrix_rejected() {
        let result = Graph::from_adjacency_matrix(vec![vec![0, 1], vec![0]]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_add_edge_last_write_wins() {
        let mut g = Graph::new(2).unwrap();
        g.add_edge(0, 1, 7).unwrap();
        g.add_edge(0, 1, 3).unwrap();
        assert_eq!(g.weight(0, 1), Some(3));
        assert_eq!(g.weight(1, 0), None);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_add_edge_rejects_bad_input() {
        let mut g = Graph::new(2).unwrap();
        assert!(matches!(g.add_edge(2, 0, 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(g.add_edge(0, 5, 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(g.add_edge(0, 1, 0), Err(Error::InvalidArgument(_))));
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn test_neighbors_ascending_and_restartable() {
        let mut g = Graph::new(4).unwrap();
        g.add_edge(1, 3, 5).unwrap();
        g.add_edge(1, 0, 2).unwrap();
        g.add_edge(1, 1, 9).unwrap();

        let first: Vec<_> = g.neighbors(1).collect();
        let second: Vec<_> = g.neighbors(1).collect();
        assert_eq!(first, vec![(0, 2), (1, 9), (3, 5)]);
        assert_eq!(first, second);
        assert_eq!(g.neighbors(0).count(), 0);
        assert_eq!(g.neighbors(42).count(), 0);
    }

    #[test]
    fn test_from_adjacency_matrix() {
        let g = Graph::from_adjacency_matrix(vec![vec![0, 4], vec![1, 0]]).unwrap();
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.weight(0, 1), Some(4));
        assert_eq!(g.weight(1, 0), Some(1));
        assert_eq!(g.adjacency()[0], vec![0, 4]);
    }
}
