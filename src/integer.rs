//! Integer representation of a graph.
//!
//! The canonical form concatenates the strictly upper triangle of the
//! adjacency matrix under the sorted vertex order, row-major, into the
//! binary expansion of a non-negative integer; the bit for the earliest
//! pair is the most significant. The empty triangle prefix of leading
//! zeros is recovered on decode from the unique order `m` whose triangle
//! is just large enough for the bit length.

use num_bigint::BigUint;

use crate::error::GraphError;
use crate::graph::{Graph, NodeTrait};

impl<N: NodeTrait> Graph<N> {
    /// Encode the adjacency structure as one integer.
    ///
    /// ```
    /// use rigidity::Graph;
    ///
    /// // The triangle: all three bits set.
    /// let g = Graph::from_vertices_and_edges(0..3, [(0, 1), (1, 2), (0, 2)]).unwrap();
    /// assert_eq!(g.to_integer().unwrap(), 7u32.into());
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::EmptyGraph`] when the graph has no
    /// vertices; the empty graph has no adjacency bits.
    pub fn to_integer(&self) -> Result<BigUint, GraphError> {
        let mut order: Vec<N> = self.vertices().collect();
        order.sort_unstable();
        if order.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let n = order.len();
        let total_bits = (n * (n - 1) / 2) as u64;
        let mut value = BigUint::default();
        let mut pair = 0u64;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.contains_edge(order[i], order[j]) {
                    value.set_bit(total_bits - 1 - pair, true);
                }
                pair += 1;
            }
        }
        Ok(value)
    }
}

impl Graph<usize> {
    /// Decode an integer representation into a graph on `{0, .., m-1}`,
    /// where `m` is the smallest order whose strictly upper triangle holds
    /// the integer's bits.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::NonPositiveInteger`] when `value` is zero.
    pub fn from_integer(value: &BigUint) -> Result<Graph<usize>, GraphError> {
        let bits = value.bits();
        if bits == 0 {
            return Err(GraphError::NonPositiveInteger);
        }

        let mut m = 2u64;
        while m * (m - 1) / 2 < bits {
            m += 1;
        }
        let total_bits = m * (m - 1) / 2;

        let mut graph = Graph::with_capacity(m as usize, bits as usize);
        for v in 0..m as usize {
            graph.add_vertex(v);
        }
        let mut pair = 0u64;
        for i in 0..m as usize {
            for j in (i + 1)..m as usize {
                if value.bit(total_bits - 1 - pair) {
                    graph.add_edge(i, j)?;
                }
                pair += 1;
            }
        }
        Ok(graph)
    }
}
