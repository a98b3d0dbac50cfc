//! Single-source shortest path over non-negative edge weights.
//!
//! Classic Dijkstra driven by an [`IndexedPriorityQueue`]: the queue
//! holds each frontier vertex exactly once, keyed by the vertex itself,
//! with its tentative distance *negated* so the max-priority queue
//! surfaces the nearest vertex first. Finding a cheaper route to a
//! queued vertex is a [`relax`](PriorityQueue::relax) on its entry
//! rather than a duplicate insertion, so the frontier never grows past
//! the vertex count.
//!
//! Extraction settles a vertex: its recorded distance is final and no
//! later edge may revise it. This is only sound when no edge weight is
//! negative.
//!
//! # Example
//!
//! ```
//! use cairn_graph::{shortest_path, AdjacencyGraph, Direction};
//!
//! let mut graph = AdjacencyGraph::new();
//! graph.add_edge("A", "B", 1.0);
//! graph.add_edge("B", "C", 2.0);
//! graph.add_edge("A", "C", 5.0);
//!
//! let found = shortest_path(&graph, &"A", &"C", Direction::Directed)
//!     .unwrap()
//!     .expect("C is reachable");
//! assert_eq!(found.vertices(), ["A", "B", "C"]);
//! assert_eq!(found.distance(), 3.0);
//! ```

use crate::graph::Graph;

use cairn_collections::{IndexedPriorityQueue, PriorityQueue, Unordered};
use fnv::{FnvBuildHasher, FnvHashMap, FnvHashSet};

/// Which way edges may be traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow edges only in their stored orientation.
    Directed,
    /// Follow every edge in both orientations.
    Undirected,
}

/// A path found by [`shortest_path`], with its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<V> {
    vertices: Vec<V>,
    distance: f64,
}

impl<V> ShortestPath<V> {
    /// The vertices along the path, source first, target last.
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// The sum of the traversed edge weights.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Consumes the path, returning its vertex sequence.
    #[inline]
    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

/// Finds a minimum-weight path from `source` to `target`.
///
/// Returns `Ok(None)` when `target` cannot be reached, including when
/// the graph has never seen it. A `source` equal to `target` is a
/// zero-length path, answered without consulting the graph at all.
///
/// Weights must be non-negative; the result is undefined otherwise.
/// When several paths share the minimum weight, which one is returned
/// is unspecified.
///
/// # Errors
///
/// Any error the graph reports while its edges are enumerated is
/// returned as-is.
pub fn shortest_path<G: Graph>(
    graph: &G,
    source: &G::Vertex,
    target: &G::Vertex,
    direction: Direction,
) -> Result<Option<ShortestPath<G::Vertex>>, G::Error> {
    if source == target {
        return Ok(Some(ShortestPath {
            vertices: vec![source.clone()],
            distance: 0.0,
        }));
    }
    Search::new(graph, direction).run(source, target)
}

struct Search<'a, G: Graph> {
    graph: &'a G,
    direction: Direction,
    queue: IndexedPriorityQueue<G::Vertex, Unordered, FnvBuildHasher>,
    distance: FnvHashMap<G::Vertex, f64>,
    predecessor: FnvHashMap<G::Vertex, G::Vertex>,
    settled: FnvHashSet<G::Vertex>,
}

impl<'a, G: Graph> Search<'a, G> {
    fn new(graph: &'a G, direction: Direction) -> Self {
        Self {
            graph,
            direction,
            queue: IndexedPriorityQueue::default(),
            distance: FnvHashMap::default(),
            predecessor: FnvHashMap::default(),
            settled: FnvHashSet::default(),
        }
    }

    fn run(
        mut self,
        source: &G::Vertex,
        target: &G::Vertex,
    ) -> Result<Option<ShortestPath<G::Vertex>>, G::Error> {
        self.queue.add_with_priority(source.clone(), 0.0);
        self.distance.insert(source.clone(), 0.0);

        while let Ok(vertex) = self.queue.extract_first() {
            if vertex == *target {
                return Ok(Some(self.reconstruct(target)));
            }
            self.settled.insert(vertex.clone());
            self.expand(&vertex)?;
        }

        Ok(None)
    }

    fn expand(&mut self, vertex: &G::Vertex) -> Result<(), G::Error> {
        // Extracted vertices always have a recorded distance.
        let base = self.distance[vertex];
        let graph = self.graph;

        for (next, weight) in graph.edges_from(vertex)? {
            self.relax_edge(vertex, next, base + weight);
        }
        if self.direction == Direction::Undirected {
            for (next, weight) in graph.edges_into(vertex)? {
                self.relax_edge(vertex, next, base + weight);
            }
        }
        Ok(())
    }

    /// Offers `candidate` as the distance to `next`, reached via `from`.
    fn relax_edge(&mut self, from: &G::Vertex, next: G::Vertex, candidate: f64) {
        if self.settled.contains(&next) {
            return;
        }
        // Nearest-first means the greatest negated distance.
        if !self.queue.contains(&next) {
            self.queue.add_with_priority(next.clone(), -candidate);
            self.distance.insert(next.clone(), candidate);
            self.predecessor.insert(next, from.clone());
        } else if self.queue.relax(&next, -candidate).unwrap() {
            // Membership was checked just above.
            self.distance.insert(next.clone(), candidate);
            self.predecessor.insert(next, from.clone());
        }
    }

    fn reconstruct(&self, target: &G::Vertex) -> ShortestPath<G::Vertex> {
        let mut vertices = vec![target.clone()];
        let mut cursor = target;
        while let Some(previous) = self.predecessor.get(cursor) {
            vertices.push(previous.clone());
            cursor = previous;
        }
        vertices.reverse();

        ShortestPath {
            vertices,
            // The target was extracted, so its distance is final.
            distance: self.distance[target],
        }
    }
}
