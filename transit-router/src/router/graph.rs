//! Directed weighted graph with integer vertices.

/// Index of a vertex in a [`DirectedWeightedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// Index of an edge in a [`DirectedWeightedGraph`], in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    /// Travel time in minutes.
    pub weight: f64,
}

/// Adjacency-list graph. Vertices are fixed at construction; edges are
/// appended and never removed.
#[derive(Debug, Clone, Default)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Append an edge and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `edge.from` is not a vertex of this graph.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.incidence[edge.from.0].push(id);
        self.edges.push(edge);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Edges leaving `vertex`, in insertion order. Empty for unknown vertices.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence
            .get(vertex.0)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }
}
