//! Traversals shared by every [`Graph`].
//!
//! Both searches break ties by the order on vertices: lowest index first for
//! matrix digraphs, alphabetical for labelled graphs. A search started at a
//! vertex that is not in the graph visits nothing.
//!
//! ```rust
//! use graphadt::algorithms::Traversal;
//! use graphadt::matrixdigraph::DirectedWeightedGraph;
//!
//! let graph = DirectedWeightedGraph::from_arcs(vec![(0,2,1), (0,1,1), (1,3,1), (2,3,1)]);
//! assert_eq!(graph.dfs(&0, None), vec![0,1,3,2]);
//! assert_eq!(graph.bfs(&0, None), vec![0,1,2,3]);
//! assert_eq!(graph.bfs(&0, Some(&2)), vec![0,1,2]);
//! ```
use std::collections::VecDeque;
use std::hash::Hash;

use fxhash::FxHashSet;
use tracing::trace;

use crate::graph::Graph;

pub trait Traversal<V> {
    /// Depth-first search from `start`. Returns the vertices in the order they
    /// were first visited, stopping as soon as `end` is visited.
    fn dfs(&self, start:&V, end:Option<&V>) -> Vec<V>;

    /// Breadth-first search from `start`. Returns the vertices in the order they
    /// were first visited, stopping as soon as `end` is visited.
    fn bfs(&self, start:&V, end:Option<&V>) -> Vec<V>;
}

impl<G, V> Traversal<V> for G where G: Graph<V>, V: Ord + Hash + Clone {
    fn dfs(&self, start:&V, end:Option<&V>) -> Vec<V> {
        let mut order = Vec::new();
        if !self.contains(start) {
            return order
        }

        let mut visited:FxHashSet<V> = FxHashSet::default();
        let mut stack = vec![start.clone()];

        while let Some(v) = stack.pop() {
            if !visited.insert(v.clone()) {
                continue;
            }
            order.push(v.clone());
            if end == Some(&v) {
                break;
            }

            // Pushed largest first so the smallest is popped next
            let N = unvisited_neighbours(self, &v, &visited);
            stack.extend(N.into_iter().rev());
        }

        trace!(visited = order.len(), "dfs finished");
        order
    }

    fn bfs(&self, start:&V, end:Option<&V>) -> Vec<V> {
        let mut order = Vec::new();
        if !self.contains(start) {
            return order
        }

        let mut visited:FxHashSet<V> = FxHashSet::default();
        let mut queue = VecDeque::new();
        queue.push_back(start.clone());

        while let Some(v) = queue.pop_front() {
            if !visited.insert(v.clone()) {
                continue;
            }
            order.push(v.clone());
            if end == Some(&v) {
                break;
            }

            queue.extend(unvisited_neighbours(self, &v, &visited));
        }

        trace!(visited = order.len(), "bfs finished");
        order
    }
}

fn unvisited_neighbours<G, V>(graph:&G, v:&V, visited:&FxHashSet<V>) -> Vec<V>
        where G: Graph<V> + ?Sized, V: Ord + Hash + Clone {
    let mut N:Vec<V> = graph.neighbours(v).filter(|u| !visited.contains(u)).collect();
    N.sort_unstable();
    N
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
