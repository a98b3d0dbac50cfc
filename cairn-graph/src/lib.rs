//! Shortest-path search over weighted graphs.
//!
//! This crate pairs a minimal [`Graph`] capability with a Dijkstra
//! search built on `cairn-collections`' indexed priority queue. The
//! queue's in-place [`relax`](cairn_collections::PriorityQueue::relax)
//! keeps the search frontier at one entry per vertex, so there is no
//! duplicate-entry bookkeeping to get wrong.
//!
//! [`AdjacencyGraph`] is the bundled graph: dual adjacency lists, edges
//! in insertion order, reverse walks as cheap as forward ones. Anything
//! else that can enumerate `(neighbor, weight)` pairs in both
//! orientations can implement [`Graph`] and be searched the same way.
//!
//! # Quick Start
//!
//! ```
//! use cairn_graph::{shortest_path, AdjacencyGraph, Direction};
//!
//! let mut graph = AdjacencyGraph::new();
//! graph.add_edge("A", "B", 1.0);
//! graph.add_edge("B", "C", 2.0);
//! graph.add_edge("A", "C", 5.0);
//! graph.add_edge("C", "D", 1.0);
//!
//! // The direct A -> C edge loses to the detour through B.
//! let found = shortest_path(&graph, &"A", &"D", Direction::Directed)
//!     .unwrap()
//!     .expect("D is reachable");
//! assert_eq!(found.vertices(), ["A", "B", "C", "D"]);
//! assert_eq!(found.distance(), 4.0);
//!
//! // Against the arrows, only an undirected walk gets home.
//! let back = shortest_path(&graph, &"D", &"A", Direction::Directed).unwrap();
//! assert!(back.is_none());
//! let back = shortest_path(&graph, &"D", &"A", Direction::Undirected)
//!     .unwrap()
//!     .expect("every edge works both ways now");
//! assert_eq!(back.distance(), 4.0);
//! ```

#![warn(missing_docs)]

pub mod graph;
pub mod search;

pub use graph::{AdjacencyGraph, Edges, Graph, UnknownVertex};
pub use search::{shortest_path, Direction, ShortestPath};
