//! Rejection reasons for graph mutations.
//!
//! The plain mutators (`add_edge`, `remove_edge`, ...) never fail: they leave the
//! graph untouched and return `false`. Their `try_*` counterparts report *why* a
//! mutation was rejected through [`GraphError`].

use crate::graph::Vertex;

/// Reasons a mutation can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Index outside `[0, count)` in a matrix digraph.
    #[error("vertex {vertex} out of range for graph with {count} vertices")]
    VertexOutOfRange { vertex: Vertex, count: usize },

    /// Arc weights must be strictly positive.
    #[error("arc weight must be positive")]
    NonPositiveWeight,

    /// Loops are not allowed.
    #[error("self-loop on vertex {0}")]
    SelfLoop(String),

    /// Vertex not contained in the graph.
    #[error("vertex {0} not contained in graph")]
    MissingVertex(String),

    /// The edge is already present.
    #[error("edge {0} -- {1} already present")]
    DuplicateEdge(String, String),

    /// The edge is not present.
    #[error("edge {0} -- {1} not present")]
    MissingEdge(String, String),
}

/// Result type for graph mutations.
pub type Result<T> = std::result::Result<T, GraphError>;
