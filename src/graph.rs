use std::fmt;
use std::hash::Hash;

use itertools::Itertools;

/// Vertex of a [`DirectedWeightedGraph`](crate::matrixdigraph::DirectedWeightedGraph): an index into the matrix.
pub type Vertex = usize;
/// Arc weight. Zero is reserved for "no arc".
pub type Weight = u32;
/// Weighted arc `(src, dst, weight)`.
pub type Arc = (Vertex, Vertex, Weight);

/// Vertex of an [`UndirectedGraph`](crate::listgraph::UndirectedGraph).
pub type Label = String;
/// Undirected edge, normalised so that the first label is the smaller one.
pub type Edge = (Label, Label);

/// Length of a shortest path. [`Distance::INFINITY`] marks unreachable vertices
/// and compares greater than every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Distance(pub u64);

impl Distance {
    /// Unreachable.
    pub const INFINITY: Distance = Distance(u64::MAX);

    /// Distance of the source to itself.
    pub const ZERO: Distance = Distance(0);

    pub const fn new(d: u64) -> Self {
        Distance(d)
    }

    pub const fn is_reachable(&self) -> bool {
        self.0 != u64::MAX
    }

    /// The finite distance, or `None` if unreachable.
    pub const fn finite(&self) -> Option<u64> {
        if self.is_reachable() {
            Some(self.0)
        } else {
            None
        }
    }

    /// Extends the distance by `w`. Infinity stays infinity.
    pub fn extend(&self, w: Weight) -> Distance {
        if self.is_reachable() {
            Distance(self.0.saturating_add(w as u64))
        } else {
            Distance::INFINITY
        }
    }
}

impl From<u64> for Distance {
    fn from(d: u64) -> Self {
        Distance(d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.finite() {
            Some(d) => write!(f, "{}", d),
            None => write!(f, "inf"),
        }
    }
}

/// Read-only queries shared by both graph representations.
///
/// Vertices are handed out by value: the matrix digraph has no stored vertex
/// objects to borrow from. The `Ord` bound on `V` is what the traversals in
/// [`algorithms`](crate::algorithms) use for tie-breaking.
pub trait Graph<V> where V: Ord + Hash + Clone {
    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;

    fn len(&self) -> usize {
        self.num_vertices()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    fn contains(&self, u:&V) -> bool;

    /// Whether `v` is recorded as a neighbour of `u`. For digraphs this is the
    /// arc `u -> v`.
    fn adjacent(&self, u:&V, v:&V) -> bool;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=V> + 'a>;

    /// Out-neighbours of `u`. Empty if `u` is not contained in the graph.
    fn neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=V> + 'a>;

    /// Returns whether `path` can be walked along edges of the graph.
    ///
    /// The empty path is valid. A path that names a vertex outside of the graph
    /// is invalid, even if it consists of that vertex alone.
    fn is_valid_path(&self, path:&[V]) -> bool {
        if !path.iter().all(|u| self.contains(u)) {
            return false
        }
        path.iter().tuple_windows().all(|(u,v)| self.adjacent(u, v))
    }
}
