//! Two small graph data structures with the classic algorithms on top.
//!
//! - [`DirectedWeightedGraph`](matrixdigraph::DirectedWeightedGraph) stores a digraph on the
//!   vertices $0,\ldots,n-1$ as a dense adjacency matrix of positive integer weights. It supports
//!   traversals, cycle detection and shortest paths.
//! - [`UndirectedGraph`](listgraph::UndirectedGraph) stores an undirected graph on string
//!   labels as adjacency lists. It supports traversals, cycle detection and connected components.
//!
//! Both types reject invalid edits (loops, duplicate edges, unknown vertices, zero weights) by
//! leaving the graph unchanged and returning `false`. The `try_*` variants report the reason as a
//! [`GraphError`](error::GraphError).
//!
//! ```rust
//! use graphadt::graph::*;
//! use graphadt::algorithms::Traversal;
//! use graphadt::listgraph::UndirectedGraph;
//!
//! let graph = UndirectedGraph::from_edges(vec![("A","C"), ("A","B"), ("B","D"), ("X","Y")]);
//! let start = "A".to_string();
//! assert_eq!(graph.dfs(&start, None), vec!["A", "B", "D", "C"]);
//! assert_eq!(graph.bfs(&start, None), vec!["A", "B", "C", "D"]);
//! assert_eq!(graph.count_connected_components(), 2);
//! assert!(!graph.has_cycle());
//! ```
#![allow(non_snake_case)]

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod iterators;
pub mod listgraph;
pub mod matrixdigraph;

pub use error::{GraphError, Result};
pub use listgraph::UndirectedGraph;
pub use matrixdigraph::DirectedWeightedGraph;
