//! Graph isomorphism testing.
//!
//! The rigid-subgraph enumeration only needs a boolean oracle, so this is
//! a compact matcher: cheap invariants first (order, size, degree
//! sequence), then a backtracking search for a degree-compatible,
//! adjacency-preserving bijection over adjacency bitmaps.

use fixedbitset::FixedBitSet;

use crate::graph::{Graph, NodeTrait};

/// Return `true` if the two graphs are isomorphic.
///
/// ```
/// use rigidity::algo::is_isomorphic;
/// use rigidity::Graph;
///
/// let a = Graph::from_vertices_and_edges(0..4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let b = Graph::from_vertices_and_edges(['w', 'x', 'y', 'z'],
///     [('w', 'y'), ('y', 'x'), ('x', 'z'), ('z', 'w')]).unwrap();
/// assert!(is_isomorphic(&a, &b));
/// ```
pub fn is_isomorphic<N: NodeTrait, M: NodeTrait>(a: &Graph<N>, b: &Graph<M>) -> bool {
    let n = a.node_count();
    if n != b.node_count() || a.edge_count() != b.edge_count() {
        return false;
    }
    if n == 0 {
        return true;
    }

    let a_matrix = adjacency_matrix(a);
    let b_matrix = adjacency_matrix(b);
    let a_degrees: Vec<usize> = a_matrix.iter().map(|row| row.count_ones(..)).collect();
    let b_degrees: Vec<usize> = b_matrix.iter().map(|row| row.count_ones(..)).collect();

    let mut a_sorted = a_degrees.clone();
    let mut b_sorted = b_degrees.clone();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    if a_sorted != b_sorted {
        return false;
    }

    // Assign high-degree vertices first; they constrain the most.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| a_degrees[j].cmp(&a_degrees[i]));

    let mut state = Matcher {
        a_matrix: &a_matrix,
        b_matrix: &b_matrix,
        a_degrees: &a_degrees,
        b_degrees: &b_degrees,
        order: &order,
        mapping: vec![usize::MAX; n],
        used: FixedBitSet::with_capacity(n),
    };
    state.extend(0)
}

struct Matcher<'a> {
    a_matrix: &'a [FixedBitSet],
    b_matrix: &'a [FixedBitSet],
    a_degrees: &'a [usize],
    b_degrees: &'a [usize],
    order: &'a [usize],
    mapping: Vec<usize>,
    used: FixedBitSet,
}

impl Matcher<'_> {
    fn extend(&mut self, position: usize) -> bool {
        if position == self.order.len() {
            return true;
        }
        let i = self.order[position];
        for j in 0..self.mapping.len() {
            if self.used.contains(j) || self.b_degrees[j] != self.a_degrees[i] {
                continue;
            }
            if !self.consistent(position, i, j) {
                continue;
            }
            self.mapping[i] = j;
            self.used.insert(j);
            if self.extend(position + 1) {
                return true;
            }
            self.mapping[i] = usize::MAX;
            self.used.set(j, false);
        }
        false
    }

    /// Adjacency to every already-mapped vertex must carry over exactly.
    fn consistent(&self, position: usize, i: usize, j: usize) -> bool {
        self.order[..position].iter().all(|&p| {
            self.a_matrix[i].contains(p) == self.b_matrix[j].contains(self.mapping[p])
        })
    }
}

fn adjacency_matrix<N: NodeTrait>(graph: &Graph<N>) -> Vec<FixedBitSet> {
    let n = graph.node_count();
    let order: Vec<N> = graph.vertices().collect();
    let mut matrix = vec![FixedBitSet::with_capacity(n); n];
    for (i, &v) in order.iter().enumerate() {
        for (j, &w) in order.iter().enumerate() {
            if graph.contains_edge(v, w) {
                matrix[i].insert(j);
            }
        }
    }
    matrix
}
