//! The (K, L)-sparsity oracle.
//!
//! Two deciders are provided: a brute-force check straight from the
//! definition, kept as the ground-truth reference, and the pebble-game
//! decider that feeds the edge list through a fresh [`PebbleDigraph`].
//! They agree on every input; the pebble decider is the one to use.

use hashbrown::HashSet;
use itertools::Itertools;

use crate::error::{check_k_l, InvalidParameters};
use crate::graph::{Graph, NodeTrait};
use crate::pebble::PebbleDigraph;

/// Decide (K, L)-sparsity by the definition: every vertex subset `S` with
/// `|S| >= K` induces at most `K * |S| - L` edges.
///
/// Exponential in the number of vertices; use
/// [`is_sparse_pebble`] for anything but small reference checks.
///
/// # Errors
///
/// Fails with [`InvalidParameters`] unless `K >= 1` and `L < 2K`.
pub fn is_sparse<N: NodeTrait>(
    graph: &Graph<N>,
    k: usize,
    l: usize,
) -> Result<bool, InvalidParameters> {
    check_k_l(k, l)?;
    let vertices: Vec<N> = graph.vertices().collect();
    for size in k..=vertices.len() {
        for subset in vertices.iter().copied().combinations(size) {
            let members: HashSet<N> = subset.into_iter().collect();
            let induced = graph
                .edges()
                .filter(|&(a, b)| members.contains(&a) && members.contains(&b))
                .count();
            // size >= k makes k * size - l non-negative for valid (K, L).
            if induced > k * size - l {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Decide (K, L)-sparsity with the pebble game.
///
/// Feeds the graph's edges, in stored order, through a fresh
/// [`PebbleDigraph`]; the graph is sparse iff every edge is admitted.
///
/// ```
/// use rigidity::algo::is_sparse_pebble;
/// use rigidity::generators;
///
/// assert!(is_sparse_pebble(&generators::three_prism(), 2, 3).unwrap());
/// assert!(!is_sparse_pebble(&generators::complete(4), 2, 3).unwrap());
/// ```
///
/// # Errors
///
/// Fails with [`InvalidParameters`] unless `K >= 1` and `L < 2K`.
pub fn is_sparse_pebble<N: NodeTrait>(
    graph: &Graph<N>,
    k: usize,
    l: usize,
) -> Result<bool, InvalidParameters> {
    let mut digraph = PebbleDigraph::new(k, l)?;
    for (u, v) in graph.edges() {
        if !digraph.add_edge_maintaining_digraph(u, v) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Decide (K, L)-tightness: sparse with exactly `K * |V| - L` edges.
///
/// # Errors
///
/// Fails with [`InvalidParameters`] unless `K >= 1` and `L < 2K`.
pub fn is_tight<N: NodeTrait>(
    graph: &Graph<N>,
    k: usize,
    l: usize,
) -> Result<bool, InvalidParameters> {
    check_k_l(k, l)?;
    let target = match (k * graph.node_count()).checked_sub(l) {
        Some(target) => target,
        // Fewer vertices than the offset allows: no edge count fits.
        None => return Ok(false),
    };
    if graph.edge_count() != target {
        return Ok(false);
    }
    is_sparse_pebble(graph, k, l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;

    #[test]
    fn parameters_are_validated() {
        let g = generators::complete(3);
        assert!(is_sparse(&g, 0, 0).is_err());
        assert!(is_sparse_pebble(&g, 1, 2).is_err());
        assert!(is_tight(&g, 2, 4).is_err());
    }

    #[test]
    fn triangle_is_2_3_tight() {
        let g = generators::complete(3);
        assert_eq!(is_sparse(&g, 2, 3), Ok(true));
        assert_eq!(is_sparse_pebble(&g, 2, 3), Ok(true));
        assert_eq!(is_tight(&g, 2, 3), Ok(true));
    }

    #[test]
    fn four_cycle_is_sparse_not_tight() {
        let g = generators::cycle(4);
        assert_eq!(is_sparse_pebble(&g, 2, 3), Ok(true));
        assert_eq!(is_tight(&g, 2, 3), Ok(false));
    }

    #[test]
    fn spanning_trees_are_1_1_tight() {
        let g = generators::path(5);
        assert_eq!(is_tight(&g, 1, 1), Ok(true));
        assert_eq!(is_tight(&generators::cycle(5), 1, 1), Ok(false));
    }
}
