//!
//! A weighted digraph on the vertices $0,\ldots,n-1$, stored as a dense $n \times n$ adjacency
//! matrix. Cell $(i,j)$ holds the weight of the arc $i \to j$ or $0$ if there is no such arc.
//! Loops and non-positive weights are never stored, and vertices can only be appended.
//!
//! ```rust
//! use graphadt::graph::*;
//! use graphadt::matrixdigraph::DirectedWeightedGraph;
//!
//! let mut graph = DirectedWeightedGraph::new();
//! for _ in 0..3 {
//!     graph.add_vertex();
//! }
//! assert!(graph.add_edge(0, 1, 4));
//! assert!(graph.add_edge(1, 2, 3));
//! assert!(!graph.add_edge(2, 2, 1)); // loops are rejected
//! assert!(!graph.add_edge(0, 3, 1)); // so are unknown vertices
//!
//! assert_eq!(graph.arcs().collect::<Vec<_>>(), vec![(0,1,4), (1,2,3)]);
//! assert_eq!(graph.dijkstra(0), vec![Distance(0), Distance(4), Distance(7)]);
//! assert!(graph.is_valid_path(&[0,1,2]));
//! ```
//!
//! Every mutator comes in two flavours: the plain one returns whether the graph changed,
//! the `try_` one explains a rejection.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::*;
use crate::iterators::ArcIterator;

/// Dense adjacency-matrix digraph with positive integer weights.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectedWeightedGraph {
    adj: Vec<Vec<Weight>>,
    m: usize
}

impl Graph<Vertex> for DirectedWeightedGraph {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.m
    }

    fn contains(&self, u:&Vertex) -> bool {
        *u < self.adj.len()
    }

    fn adjacent(&self, u:&Vertex, v:&Vertex) -> bool {
        self.weight(*u, *v).is_some()
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=Vertex> + 'a> {
        Box::new(0..self.adj.len())
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=Vertex> + 'a> {
        match self.adj.get(*u) {
            Some(row) => Box::new(row.iter().enumerate().filter(|(_, w)| **w > 0).map(|(v, _)| v)),
            None => Box::new(std::iter::empty())
        }
    }
}

impl FromIterator<Arc> for DirectedWeightedGraph {
    fn from_iter<T: IntoIterator<Item = Arc>>(iter: T) -> Self {
        let arcs:Vec<Arc> = iter.into_iter().collect();
        let n = arcs.iter().map(|(u,v,_)| std::cmp::max(*u, *v) + 1).max().unwrap_or(0);

        let mut res = DirectedWeightedGraph::with_capacity(n);
        for _ in 0..n {
            res.add_vertex();
        }
        for (u,v,w) in arcs {
            res.add_edge(u, v, w);
        }
        res
    }
}

impl DirectedWeightedGraph {
    pub fn new() -> Self {
        DirectedWeightedGraph { adj: Vec::new(), m: 0 }
    }

    /// Creates an empty graph with room for `n_guess` vertices.
    pub fn with_capacity(n_guess:usize) -> Self {
        DirectedWeightedGraph { adj: Vec::with_capacity(n_guess), m: 0 }
    }

    /// Creates a graph just large enough to hold every vertex mentioned in `arcs`
    /// and inserts the arcs in order. Arcs that [`add_edge`](Self::add_edge) rejects are skipped.
    pub fn from_arcs<I>(arcs:I) -> Self where I: IntoIterator<Item=Arc> {
        arcs.into_iter().collect()
    }

    /// Appends a new vertex and returns the number of vertices afterwards.
    pub fn add_vertex(&mut self) -> usize {
        let n = self.adj.len() + 1;
        for row in self.adj.iter_mut() {
            row.push(0);
        }
        self.adj.push(vec![0; n]);
        n
    }

    /// Sets the weight of the arc `src -> dst`, replacing any previous weight.
    ///
    /// Returns `false` and leaves the graph untouched if either vertex does not exist,
    /// if `weight` is zero or if `src == dst`.
    pub fn add_edge(&mut self, src:Vertex, dst:Vertex, weight:Weight) -> bool {
        match self.try_add_edge(src, dst, weight) {
            Ok(()) => true,
            Err(err) => {
                debug!(src, dst, weight, %err, "arc rejected");
                false
            }
        }
    }

    pub fn try_add_edge(&mut self, src:Vertex, dst:Vertex, weight:Weight) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        if weight == 0 {
            return Err(GraphError::NonPositiveWeight)
        }
        if src == dst {
            return Err(GraphError::SelfLoop(src.to_string()))
        }

        let cell = &mut self.adj[src][dst];
        if *cell == 0 {
            self.m += 1;
        }
        *cell = weight;
        Ok(())
    }

    /// Removes the arc `src -> dst`. Returns `true` if there was an arc to remove.
    pub fn remove_edge(&mut self, src:Vertex, dst:Vertex) -> bool {
        match self.try_remove_edge(src, dst) {
            Ok(removed) => removed.is_some(),
            Err(err) => {
                debug!(src, dst, %err, "arc removal rejected");
                false
            }
        }
    }

    /// Clears the cell `src -> dst` and returns the weight it held, if any.
    /// Only out-of-range vertices are an error; clearing an empty cell is not.
    pub fn try_remove_edge(&mut self, src:Vertex, dst:Vertex) -> Result<Option<Weight>> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        let old = std::mem::replace(&mut self.adj[src][dst], 0);
        if old == 0 {
            Ok(None)
        } else {
            self.m -= 1;
            Ok(Some(old))
        }
    }

    /// Weight of the arc `src -> dst`, if present.
    pub fn weight(&self, src:Vertex, dst:Vertex) -> Option<Weight> {
        self.adj.get(src)
            .and_then(|row| row.get(dst))
            .filter(|w| **w > 0)
            .cloned()
    }

    /// All arcs in row-major order, i.e. sorted by source and then by target.
    pub fn arcs(&self) -> ArcIterator<'_> {
        ArcIterator::new(&self.adj)
    }

    fn check_vertex(&self, u:Vertex) -> Result<()> {
        if u < self.adj.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange { vertex: u, count: self.adj.len() })
        }
    }

    /// Returns whether the digraph contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        let n = self.adj.len();
        let mut visited = vec![false; n];
        let mut on_stack = vec![false; n];

        for root in 0..n {
            if visited[root] {
                continue;
            }

            // Each frame is (vertex, next column to inspect)
            let mut stack:Vec<(Vertex, Vertex)> = vec![(root, 0)];
            visited[root] = true;
            on_stack[root] = true;

            while let Some(frame) = stack.last_mut() {
                let (u, col) = *frame;
                let next = (col..n).find(|&v| self.adj[u][v] > 0);
                match next {
                    Some(v) => {
                        frame.1 = v + 1;
                        if on_stack[v] {
                            trace!(u, v, "back arc found");
                            return true
                        }
                        if !visited[v] {
                            visited[v] = true;
                            on_stack[v] = true;
                            stack.push((v, 0));
                        }
                    }
                    None => {
                        on_stack[u] = false;
                        stack.pop();
                    }
                }
            }
        }

        false
    }

    /// Computes the length of a shortest path from `src` to every vertex.
    ///
    /// The result has one entry per vertex; vertices that cannot be reached (and every vertex,
    /// if `src` does not exist) are at [`Distance::INFINITY`]. Among equally distant candidates
    /// the vertex with the lowest index is settled first.
    pub fn dijkstra(&self, src:Vertex) -> Vec<Distance> {
        let n = self.adj.len();
        let mut dist = vec![Distance::INFINITY; n];
        if src >= n {
            return dist
        }
        dist[src] = Distance::ZERO;
        let mut settled = vec![false; n];

        for _ in 0..n {
            // Unsettled vertex with strictly smallest distance, lowest index wins ties
            let mut closest:Option<Vertex> = None;
            for v in 0..n {
                if settled[v] || !dist[v].is_reachable() {
                    continue;
                }
                if closest.map_or(true, |c| dist[v] < dist[c]) {
                    closest = Some(v);
                }
            }
            let u = match closest {
                Some(u) => u,
                None => break, // everything left is unreachable
            };
            settled[u] = true;

            for (v, &w) in self.adj[u].iter().enumerate() {
                if w == 0 || settled[v] {
                    continue;
                }
                let alt = dist[u].extend(w);
                if alt < dist[v] {
                    dist[v] = alt;
                }
            }
        }

        trace!(src, reached = dist.iter().filter(|d| d.is_reachable()).count(), "dijkstra finished");
        dist
    }

    /// Generates a directed path $0 \to 1 \to \cdots \to n-1$ with all weights set to `weight`.
    pub fn path(n:usize, weight:Weight) -> DirectedWeightedGraph {
        DirectedWeightedGraph::from_arcs((1..n).map(|v| (v-1, v, weight)))
    }

    /// Generates a directed cycle on `n` vertices with all weights set to `weight`.
    pub fn cycle(n:usize, weight:Weight) -> DirectedWeightedGraph {
        DirectedWeightedGraph::from_arcs((0..n).map(|u| (u, (u+1) % n, weight)))
    }
}

impl fmt::Display for DirectedWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.adj.len();
        if n == 0 {
            return writeln!(f, "EMPTY GRAPH")
        }

        writeln!(f, "GRAPH ({} vertices):", n)?;
        let header:Vec<String> = (0..n).map(|i| format!("{:2}", i)).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(n * 3 + 3))?;
        for (i, row) in self.adj.iter().enumerate() {
            let cells:Vec<String> = row.iter().map(|w| format!("{:2}", w)).collect();
            writeln!(f, "{:2} |{}", i, cells.join(" "))?;
        }
        Ok(())
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####


#[cfg(test)]
mod test {
    use super::*;

    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn sample() -> DirectedWeightedGraph {
        DirectedWeightedGraph::from_arcs(vec![(0,1,10), (4,0,12), (1,4,15), (4,3,3),
                                              (3,1,5), (2,1,23), (3,2,7)])
    }

    fn dists(ds:&[u64]) -> Vec<Distance> {
        ds.iter().map(|&d| if d == u64::MAX { Distance::INFINITY } else { Distance(d) }).collect()
    }

    const INF:u64 = u64::MAX;

    #[test]
    fn add_vertices() {
        let mut G = DirectedWeightedGraph::new();
        assert!(G.is_empty());
        assert_eq!(G.add_vertex(), 1);
        assert_eq!(G.add_vertex(), 2);
        assert_eq!(G.add_vertex(), 3);
        assert_eq!(G.vertices().collect::<Vec<_>>(), vec![0,1,2]);
        assert_eq!(G.num_edges(), 0);

        G.add_edge(0, 2, 5);
        assert_eq!(G.add_vertex(), 4);
        assert_eq!(G.weight(0, 2), Some(5));
        assert_eq!(G.weight(0, 3), None);
        assert_eq!(G.weight(3, 0), None);
    }

    #[test]
    fn add_remove_arcs() {
        let mut G = DirectedWeightedGraph::new();
        for _ in 0..3 {
            G.add_vertex();
        }

        assert!(G.add_edge(0, 1, 3));
        assert!(G.add_edge(0, 1, 8));
        assert_eq!(G.weight(0, 1), Some(8));
        assert_eq!(G.num_edges(), 1);
        assert!(!G.adjacent(&1, &0));

        assert_eq!(G.try_add_edge(0, 3, 1), Err(GraphError::VertexOutOfRange { vertex: 3, count: 3 }));
        assert_eq!(G.try_add_edge(7, 0, 1), Err(GraphError::VertexOutOfRange { vertex: 7, count: 3 }));
        assert_eq!(G.try_add_edge(0, 2, 0), Err(GraphError::NonPositiveWeight));
        assert_eq!(G.try_add_edge(2, 2, 4), Err(GraphError::SelfLoop("2".to_string())));
        assert_eq!(G.weight(2, 2), None);
        assert_eq!(G.num_edges(), 1);

        assert!(G.remove_edge(0, 1));
        assert!(!G.remove_edge(0, 1));
        assert!(!G.remove_edge(0, 5));
        assert_eq!(G.try_remove_edge(1, 2), Ok(None));
        assert_eq!(G.try_remove_edge(3, 2), Err(GraphError::VertexOutOfRange { vertex: 3, count: 3 }));
        assert_eq!(G.num_edges(), 0);
    }

    #[test]
    fn self_loops_never_stored() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut G = DirectedWeightedGraph::new();
        for _ in 0..8 {
            G.add_vertex();
        }
        for _ in 0..200 {
            let u = rng.gen_range(0..8);
            let v = if rng.gen_bool(0.3) { u } else { rng.gen_range(0..8) };
            G.add_edge(u, v, rng.gen_range(0..20));
        }
        for v in 0..8 {
            assert_eq!(G.weight(v, v), None);
        }
        assert!(G.arcs().all(|(u,v,w)| u != v && w > 0));
        assert_eq!(G.arcs().count(), G.num_edges());
    }

    #[test]
    fn from_arcs() {
        let G = DirectedWeightedGraph::from_arcs(vec![]);
        assert_eq!(G.num_vertices(), 0);
        assert_eq!(G.arcs().count(), 0);

        let G = sample();
        assert_eq!(G.num_vertices(), 5);
        assert_eq!(G.arcs().collect::<Vec<_>>(),
                   vec![(0,1,10), (1,4,15), (2,1,23), (3,1,5), (3,2,7), (4,0,12), (4,3,3)]);

        // Rejected arcs still size the graph
        let G = DirectedWeightedGraph::from_arcs(vec![(0,1,1), (3,3,2)]);
        assert_eq!(G.num_vertices(), 4);
        assert_eq!(G.num_edges(), 1);
    }

    #[test]
    fn valid_paths() {
        let G = sample();
        assert!(G.is_valid_path(&[0,1,4,3]));
        assert!(!G.is_valid_path(&[1,3,2,1]));
        assert!(!G.is_valid_path(&[0,4]));
        assert!(G.is_valid_path(&[4,0]));
        assert!(G.is_valid_path(&[]));
        assert!(G.is_valid_path(&[2]));
        assert!(!G.is_valid_path(&[7]));
        assert!(!G.is_valid_path(&[0,1,9]));

        assert!(DirectedWeightedGraph::new().is_valid_path(&[]));
    }

    #[test]
    fn cycles() {
        let mut G = sample();
        assert!(G.has_cycle());

        let expected = [((3,1), true), ((4,0), true), ((3,2), false)];
        for ((u,v), cyclic) in expected.iter() {
            G.remove_edge(*u, *v);
            assert_eq!(G.has_cycle(), *cyclic);
        }

        let expected = [((4,3), false), ((2,3), false), ((1,3), false), ((4,0), true)];
        for ((u,v), cyclic) in expected.iter() {
            G.add_edge(*u, *v, 1);
            assert_eq!(G.has_cycle(), *cyclic);
        }
    }

    #[test]
    fn cycle_after_removal() {
        let mut G = sample();
        G.remove_edge(4, 3);
        // 0 -> 1 -> 4 -> 0 remains
        assert!(G.has_cycle());
        G.remove_edge(4, 0);
        assert!(!G.has_cycle());
    }

    #[test]
    fn generated_cycles() {
        assert!(DirectedWeightedGraph::cycle(5, 1).has_cycle());
        assert!(!DirectedWeightedGraph::path(5, 1).has_cycle());
        assert!(!DirectedWeightedGraph::new().has_cycle());

        // Deep enough that a recursive search would be risky
        let G = DirectedWeightedGraph::path(2000, 2);
        assert!(!G.has_cycle());
        assert_eq!(G.dijkstra(0)[1999], Distance(2 * 1999));
    }

    #[test]
    fn shortest_paths() {
        let G = sample();
        let expected = [
            vec![0, 10, 35, 28, 25],
            vec![27, 0, 25, 18, 15],
            vec![50, 23, 0, 41, 38],
            vec![32, 5, 7, 0, 20],
            vec![12, 8, 10, 3, 0],
        ];
        for (src, ds) in expected.iter().enumerate() {
            assert_eq!(G.dijkstra(src), dists(ds), "dijkstra from {}", src);
        }
    }

    #[test]
    fn shortest_paths_unreachable() {
        let mut G = sample();
        G.remove_edge(4, 3);
        let expected = [
            vec![0, 10, INF, INF, 25],
            vec![27, 0, INF, INF, 15],
            vec![50, 23, 0, INF, 38],
            vec![32, 5, 7, 0, 20],
            vec![12, 22, INF, INF, 0],
        ];
        for (src, ds) in expected.iter().enumerate() {
            assert_eq!(G.dijkstra(src), dists(ds), "dijkstra from {}", src);
        }

        assert_eq!(G.dijkstra(5), vec![Distance::INFINITY; 5]);
        assert_eq!(G.dijkstra(0)[2].finite(), None);
        assert_eq!(G.dijkstra(0)[4].finite(), Some(25));
    }

    #[test]
    fn display() {
        assert_eq!(DirectedWeightedGraph::new().to_string(), "EMPTY GRAPH\n");

        let mut G = DirectedWeightedGraph::from_arcs(vec![(0,1,10), (1,2,1), (2,0,7)]);
        G.add_vertex();
        let expected = "GRAPH (4 vertices):\n   | 0  1  2  3\n---------------\n 0 | 0 10  0  0\n 1 | 0  0  1  0\n 2 | 7  0  0  0\n 3 | 0  0  0  0\n";
        assert_eq!(G.to_string(), expected);
    }
}
