//! Graph capability consumed by the search.
//!
//! The search never sees a graph's representation, only ordered sequences
//! of `(neighbor, weight)` pairs. Any vertex store that can enumerate
//! edges in both orientations can implement [`Graph`];
//! [`AdjacencyGraph`] is the provided list-based implementation.

use fnv::FnvHashMap;

use std::fmt;
use std::hash::Hash;
use std::slice;

/// A weighted graph the search can walk.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Both orientations**: edges leaving and edges arriving at a vertex,
///   so undirected traversal never has to enumerate the vertex set
/// - **Stable enumeration order**: repeated calls on an unchanged graph
///   yield the same sequence
/// - **Read-only queries**: enumeration must not mutate the graph
///
/// Edge weights travel with the neighbor; negative weights are not
/// rejected here, but the search's results are undefined under them.
pub trait Graph {
    /// Vertex identifier.
    type Vertex: Clone + Eq + Hash;

    /// Error reported when the graph cannot answer a query.
    type Error;

    /// Iterator over one vertex's `(neighbor, weight)` pairs.
    type Edges<'a>: Iterator<Item = (Self::Vertex, f64)>
    where
        Self: 'a;

    /// Returns the edges leaving `vertex`, in the graph's stored order.
    ///
    /// # Errors
    ///
    /// Implementation-defined; [`AdjacencyGraph`] reports
    /// [`UnknownVertex`] for a vertex it has never seen.
    fn edges_from(&self, vertex: &Self::Vertex) -> Result<Self::Edges<'_>, Self::Error>;

    /// Returns the edges arriving at `vertex`, in the graph's stored
    /// order.
    ///
    /// # Errors
    ///
    /// Implementation-defined, as for
    /// [`edges_from`](Graph::edges_from).
    fn edges_into(&self, vertex: &Self::Vertex) -> Result<Self::Edges<'_>, Self::Error>;
}

/// Error returned when a graph is asked about a vertex it has never seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownVertex<V>(
    /// The vertex the graph was asked about.
    pub V,
);

impl<V: fmt::Debug> fmt::Display for UnknownVertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown vertex {:?}", self.0)
    }
}

impl<V: fmt::Debug> std::error::Error for UnknownVertex<V> {}

/// A directed weighted graph stored as dual adjacency lists.
///
/// Every edge is recorded under both endpoints, once by orientation, so
/// reverse walks cost the same as forward ones. Edges enumerate in
/// insertion order; parallel edges are kept, each with its own weight.
///
/// # Example
///
/// ```
/// use cairn_graph::{AdjacencyGraph, Graph};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge("A", "B", 1.0);
/// graph.add_edge("A", "C", 2.5);
///
/// let out: Vec<_> = graph.edges_from(&"A").unwrap().collect();
/// assert_eq!(out, [("B", 1.0), ("C", 2.5)]);
///
/// // Both orientations are kept, so reverse walks are cheap.
/// let into: Vec<_> = graph.edges_into(&"B").unwrap().collect();
/// assert_eq!(into, [("A", 1.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V>
where
    V: Clone + Eq + Hash,
{
    outgoing: FnvHashMap<V, Vec<(V, f64)>>,
    incoming: FnvHashMap<V, Vec<(V, f64)>>,
    edges: usize,
}

impl<V> AdjacencyGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            outgoing: FnvHashMap::default(),
            incoming: FnvHashMap::default(),
            edges: 0,
        }
    }

    /// Creates an empty graph with capacity for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            outgoing: FnvHashMap::with_capacity_and_hasher(vertices, Default::default()),
            incoming: FnvHashMap::with_capacity_and_hasher(vertices, Default::default()),
            edges: 0,
        }
    }

    /// Registers `vertex` with no edges.
    ///
    /// Returns `false` if it was already present. Vertices are also
    /// registered implicitly by [`add_edge`](AdjacencyGraph::add_edge).
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing.contains_key(&vertex) {
            return false;
        }
        self.outgoing.insert(vertex.clone(), Vec::new());
        self.incoming.insert(vertex, Vec::new());
        true
    }

    /// Adds a directed edge from `from` to `to`, registering both
    /// endpoints as needed.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        // Both endpoints exist now.
        self.outgoing.get_mut(&from).unwrap().push((to.clone(), weight));
        self.incoming.get_mut(&to).unwrap().push((from, weight));
        self.edges += 1;
    }

    /// Returns `true` if `vertex` has been registered.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.outgoing.contains_key(vertex)
    }

    /// Returns an iterator over the registered vertices, in arbitrary
    /// order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.outgoing.keys()
    }

    /// Returns the number of registered vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }
}

impl<V> Default for AdjacencyGraph<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph for AdjacencyGraph<V>
where
    V: Clone + Eq + Hash,
{
    type Vertex = V;
    type Error = UnknownVertex<V>;
    type Edges<'a> = Edges<'a, V> where Self: 'a;

    fn edges_from(&self, vertex: &V) -> Result<Self::Edges<'_>, Self::Error> {
        match self.outgoing.get(vertex) {
            Some(list) => Ok(Edges { inner: list.iter() }),
            None => Err(UnknownVertex(vertex.clone())),
        }
    }

    fn edges_into(&self, vertex: &V) -> Result<Self::Edges<'_>, Self::Error> {
        match self.incoming.get(vertex) {
            Some(list) => Ok(Edges { inner: list.iter() }),
            None => Err(UnknownVertex(vertex.clone())),
        }
    }
}

/// Iterator over one vertex's `(neighbor, weight)` pairs.
///
/// Created by [`AdjacencyGraph`]'s [`Graph`] implementation.
#[derive(Debug, Clone)]
pub struct Edges<'a, V> {
    inner: slice::Iter<'a, (V, f64)>,
}

impl<'a, V: Clone> Iterator for Edges<'a, V> {
    type Item = (V, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let (vertex, weight) = self.inner.next()?;
        Some((vertex.clone(), *weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V: Clone> ExactSizeIterator for Edges<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
