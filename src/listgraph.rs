//!
//! An undirected, unweighted graph on string labels. Adjacency lists are stored in a hash map
//! and keep their neighbours in insertion order. Loops and parallel edges are never stored.
//!
//! Vertices are created either explicitly or implicitly by adding an edge:
//!
//! ```rust
//! use graphadt::graph::*;
//! use graphadt::listgraph::UndirectedGraph;
//!
//! let mut graph = UndirectedGraph::new();
//! graph.add_vertex("A");
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "C");
//! assert!(!graph.add_edge("C", "B")); // already present
//! assert!(!graph.add_edge("C", "C")); // loops are rejected
//!
//! assert_eq!(graph.num_vertices(), 3);
//! assert_eq!(graph.num_edges(), 2);
//! assert!(graph.is_valid_path(&["A".to_string(), "B".to_string(), "C".to_string()]));
//! ```
//!
//! ## Editing operations
//!
//! Removing a vertex removes all of its edges. Removing an edge never removes a vertex.
//!
//! ```rust
//! use graphadt::graph::*;
//! use graphadt::listgraph::UndirectedGraph;
//!
//! let mut graph = UndirectedGraph::from_edges(vec![("A","B"), ("A","C"), ("B","C"), ("C","D")]);
//! graph.remove_edge("A", "B");
//! graph.remove_vertex("C");
//! assert_eq!(graph.num_vertices(), 3);
//! assert_eq!(graph.num_edges(), 0);
//! assert_eq!(graph.count_connected_components(), 3);
//! ```

use std::fmt;

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use tracing::{debug, trace};

use crate::algorithms::Traversal;
use crate::error::{GraphError, Result};
use crate::graph::*;
use crate::iterators::EdgeIterator;

/// Adjacency-list graph with labelled vertices.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    adj: FxHashMap<Label, Vec<Label>>,
    m: usize
}

impl PartialEq for UndirectedGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() {
            return false
        }
        if self.num_edges() != other.num_edges() {
            return false
        }
        // Neighbour order is an artifact of insertion order
        self.adj.iter().all(|(v, N)| match other.adj.get(v) {
            Some(M) => N.iter().sorted().eq(M.iter().sorted()),
            None => false
        })
    }
}
impl Eq for UndirectedGraph {}

impl Graph<Label> for UndirectedGraph {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.m
    }

    fn contains(&self, u:&Label) -> bool {
        self.adj.contains_key(u)
    }

    fn adjacent(&self, u:&Label, v:&Label) -> bool {
        self.has_neighbour(u, v)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=Label> + 'a> {
        Box::new(self.adj.keys().cloned())
    }

    fn neighbours<'a>(&'a self, u:&Label) -> Box<dyn Iterator<Item=Label> + 'a> {
        match self.adj.get(u) {
            Some(N) => Box::new(N.iter().cloned()),
            None => Box::new(std::iter::empty())
        }
    }
}

impl<L> FromIterator<(L, L)> for UndirectedGraph where L: AsRef<str> {
    fn from_iter<T: IntoIterator<Item = (L, L)>>(iter: T) -> Self {
        let mut res = UndirectedGraph::new();
        for (u,v) in iter {
            res.add_edge(u.as_ref(), v.as_ref());
        }
        res
    }
}

impl UndirectedGraph {
    pub fn new() -> Self {
        UndirectedGraph { adj: FxHashMap::default(), m: 0 }
    }

    /// Creates an empty graph with room for `n_guess` vertices.
    pub fn with_capacity(n_guess:usize) -> Self {
        UndirectedGraph {
            adj: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            m: 0
        }
    }

    /// Creates a graph by adding `edges` in order. Endpoints are created as needed.
    pub fn from_edges<I, L>(edges:I) -> Self where I: IntoIterator<Item=(L, L)>, L: AsRef<str> {
        edges.into_iter().collect()
    }

    fn has_neighbour(&self, u:&str, v:&str) -> bool {
        match self.adj.get(u) {
            Some(N) => N.iter().any(|x| x == v),
            None => false
        }
    }

    /// Adds the vertex `u` without neighbours. Returns `false` if it already exists.
    pub fn add_vertex(&mut self, u:&str) -> bool {
        if !self.adj.contains_key(u) {
            self.adj.insert(u.to_string(), Vec::new());
            true
        } else {
            false
        }
    }

    /// Adds the edge $uv$, creating missing endpoints first. Returns `false` if $u = v$ or
    /// if the edge already exists.
    pub fn add_edge(&mut self, u:&str, v:&str) -> bool {
        match self.try_add_edge(u, v) {
            Ok(()) => true,
            Err(err) => {
                debug!(u, v, %err, "edge rejected");
                false
            }
        }
    }

    pub fn try_add_edge(&mut self, u:&str, v:&str) -> Result<()> {
        if u == v {
            return Err(GraphError::SelfLoop(u.to_string()))
        }

        self.add_vertex(u);
        self.add_vertex(v);
        if self.has_neighbour(u, v) || self.has_neighbour(v, u) {
            return Err(GraphError::DuplicateEdge(u.to_string(), v.to_string()))
        }

        if let Some(N) = self.adj.get_mut(u) {
            N.push(v.to_string());
        }
        if let Some(N) = self.adj.get_mut(v) {
            N.push(u.to_string());
        }
        self.m += 1;
        Ok(())
    }

    /// Removes the edge $uv$. Returns `false` if there is no such edge.
    pub fn remove_edge(&mut self, u:&str, v:&str) -> bool {
        match self.try_remove_edge(u, v) {
            Ok(()) => true,
            Err(err) => {
                debug!(u, v, %err, "edge removal rejected");
                false
            }
        }
    }

    pub fn try_remove_edge(&mut self, u:&str, v:&str) -> Result<()> {
        for x in [u, v].iter() {
            if !self.adj.contains_key(*x) {
                return Err(GraphError::MissingVertex(x.to_string()))
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop(u.to_string()))
        }
        if !self.has_neighbour(u, v) || !self.has_neighbour(v, u) {
            return Err(GraphError::MissingEdge(u.to_string(), v.to_string()))
        }

        if let Some(N) = self.adj.get_mut(u) {
            N.retain(|x| x != v);
        }
        if let Some(N) = self.adj.get_mut(v) {
            N.retain(|x| x != u);
        }
        self.m -= 1;
        Ok(())
    }

    /// Removes `u` together with all its edges. Returns `false` if `u` does not exist.
    pub fn remove_vertex(&mut self, u:&str) -> bool {
        let N = match self.adj.get(u) {
            Some(N) => N.clone(),
            None => {
                debug!(u, "vertex removal rejected: not contained in graph");
                return false
            }
        };

        for v in &N {
            self.remove_edge(u, v);
        }
        self.adj.remove(u);
        true
    }

    /// Number of neighbours of `u`, zero if `u` does not exist.
    pub fn degree(&self, u:&str) -> usize {
        self.adj.get(u).map_or(0, |N| N.len())
    }

    /// Every edge exactly once, as a pair with the smaller label first. No particular order.
    pub fn edges(&self) -> EdgeIterator<'_> {
        EdgeIterator::new(&self.adj)
    }

    /// Returns whether the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        let mut visited:FxHashSet<&str> = FxHashSet::default();

        for root in self.adj.keys() {
            if visited.contains(root.as_str()) {
                continue;
            }

            // Each frame is (vertex, parent, next neighbour to inspect)
            let mut stack:Vec<(&str, Option<&str>, usize)> = vec![(root.as_str(), None, 0)];
            visited.insert(root.as_str());

            while let Some(frame) = stack.last_mut() {
                let (u, parent, i) = *frame;
                let N = &self.adj[u];
                if i >= N.len() {
                    stack.pop();
                    continue;
                }
                frame.2 += 1;

                let v = N[i].as_str();
                if parent == Some(v) {
                    continue;
                }
                if !visited.insert(v) {
                    trace!(u, v, "cycle closed");
                    return true
                }
                stack.push((v, Some(u), 0));
            }
        }

        false
    }

    /// Returns the vertex sets of the connected components, each sorted.
    ///
    /// Computed as the distinct sets reached by a breadth-first search; a search is started
    /// from every vertex not yet covered by an earlier one.
    pub fn components(&self) -> Vec<Vec<Label>> {
        let mut covered:FxHashSet<&str> = FxHashSet::default();
        let mut res = Vec::new();

        for v in self.adj.keys().sorted() {
            if covered.contains(v.as_str()) {
                continue;
            }
            let mut comp = self.bfs(v, None);
            comp.sort_unstable();
            for u in &comp {
                if let Some((key, _)) = self.adj.get_key_value(u) {
                    covered.insert(key.as_str());
                }
            }
            res.push(comp);
        }

        trace!(components = res.len(), "components computed");
        res
    }

    pub fn count_connected_components(&self) -> usize {
        self.components().len()
    }

    /// Generates a path through `labels` in the given order.
    pub fn path<I, L>(labels:I) -> UndirectedGraph where I: IntoIterator<Item=L>, L: AsRef<str> {
        let labels:Vec<String> = labels.into_iter().map(|l| l.as_ref().to_string()).collect();
        let mut res = UndirectedGraph::with_capacity(labels.len());
        for u in &labels {
            res.add_vertex(u);
        }
        for (u, v) in labels.iter().tuple_windows() {
            res.add_edge(u, v);
        }
        res
    }

    /// Generates a cycle through `labels`, closing the path from the last label to the first.
    pub fn cycle<I, L>(labels:I) -> UndirectedGraph where I: IntoIterator<Item=L>, L: AsRef<str> {
        let labels:Vec<String> = labels.into_iter().map(|l| l.as_ref().to_string()).collect();
        let mut res = UndirectedGraph::path(&labels);
        if let (Some(first), Some(last)) = (labels.first(), labels.last()) {
            res.add_edge(last, first);
        }
        res
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries:Vec<String> = self.adj.iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(v, N)| format!("{}: [{}]", v, N.iter().map(|u| format!("'{}'", u)).join(", ")))
            .collect();

        let out = entries.join("\n  ");
        if out.len() < 70 {
            write!(f, "GRAPH: {{{}}}", entries.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {}}}", out)
        }
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
