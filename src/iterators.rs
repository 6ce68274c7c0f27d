use fxhash::FxHashMap;

use crate::graph::{Arc, Edge, Label, Vertex, Weight};

type NIterator<'a> = std::collections::hash_map::Iter<'a, Label, Vec<Label>>;
type NVertexIterator<'a> = std::slice::Iter<'a, Label>;

/*
    Arc iterator for matrix digraphs. Scans the matrix in row-major
    order and returns every non-zero cell as (src, dst, weight).
*/
pub struct ArcIterator<'a> {
    adj: &'a [Vec<Weight>],
    row: Vertex,
    col: Vertex,
}

impl<'a> ArcIterator<'a> {
    pub fn new(adj: &'a [Vec<Weight>]) -> ArcIterator<'a> {
        ArcIterator { adj, row: 0, col: 0 }
    }
}

impl<'a> Iterator for ArcIterator<'a> {
    type Item = Arc;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.adj.len() {
            let row = &self.adj[self.row];
            while self.col < row.len() {
                let (src, dst, w) = (self.row, self.col, row[self.col]);
                self.col += 1;
                if w > 0 {
                    return Some((src, dst, w));
                }
            }
            self.row += 1;
            self.col = 0;
        }

        None
    }
}

/*
    Edge iterator for adjacency-list graphs. Every edge is stored
    twice, so only the copy with the smaller label first is returned.
*/
pub struct EdgeIterator<'a> {
    N_it: NIterator<'a>,
    curr_v: Option<&'a Label>,
    curr_it: Option<NVertexIterator<'a>>,
}

impl<'a> EdgeIterator<'a> {
    pub fn new(adj: &'a FxHashMap<Label, Vec<Label>>) -> EdgeIterator<'a> {
        let mut res = EdgeIterator {
            N_it: adj.iter(),
            curr_v: None,
            curr_it: None,
        };
        res.advance();
        res
    }

    fn advance(&mut self) {
        if let Some((v, N)) = self.N_it.next() {
            self.curr_v = Some(v);
            self.curr_it = Some(N.iter());
        } else {
            self.curr_v = None;
            self.curr_it = None;
        }
    }
}

impl<'a> Iterator for EdgeIterator<'a> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while let (Some(v), Some(it)) = (self.curr_v, self.curr_it.as_mut()) {
            let u = match it.next() {
                Some(u) => u,
                None => {
                    self.advance();
                    continue;
                }
            };

            // Tie-breaking so we only return every edge once
            if v > u {
                continue;
            }
            return Some((v.clone(), u.clone()));
        }

        None
    }
}
