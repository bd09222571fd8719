//! Vertex-maximal and vertex-minimal rigid subgraph enumeration.
//!
//! Both searches recurse over the induced subgraphs obtained by dropping
//! one vertex at a time, then collapse the results to one representative
//! per isomorphism class. They are exponential in the number of vertices.

use itertools::Itertools;

use crate::algo::isomorphism::is_isomorphic;
use crate::algo::rigidity::{ensure_predicate_input, is_rigid};
use crate::error::RigidityError;
use crate::graph::{Graph, NodeTrait};

/// List the vertex-maximal rigid induced subgraphs with more than two
/// vertices, one per isomorphism class.
///
/// # Errors
///
/// Same conditions as [`is_rigid`].
pub fn maximal_rigid_subgraphs<N: NodeTrait>(
    graph: &Graph<N>,
    dim: usize,
) -> Result<Vec<Graph<N>>, RigidityError> {
    ensure_predicate_input(graph, dim)?;
    collect_maximal(graph, dim)
}

fn collect_maximal<N: NodeTrait>(
    graph: &Graph<N>,
    dim: usize,
) -> Result<Vec<Graph<N>>, RigidityError> {
    if graph.node_count() <= 2 {
        return Ok(Vec::new());
    }
    if is_rigid(graph, dim)? {
        return Ok(vec![graph.clone()]);
    }

    let vertices: Vec<N> = graph.vertices().collect();
    let mut found = Vec::new();
    for subset in vertices.iter().copied().combinations(vertices.len() - 1) {
        found.extend(collect_maximal(&graph.induced_subgraph(subset), dim)?);
    }
    dedup_isomorphic(&mut found);
    Ok(found)
}

/// List the vertex-minimal non-trivial rigid induced subgraphs, one per
/// isomorphism class.
///
/// # Errors
///
/// Same conditions as [`is_rigid`].
pub fn minimal_rigid_subgraphs<N: NodeTrait>(
    graph: &Graph<N>,
    dim: usize,
) -> Result<Vec<Graph<N>>, RigidityError> {
    ensure_predicate_input(graph, dim)?;
    collect_minimal(graph, dim)
}

fn collect_minimal<N: NodeTrait>(
    graph: &Graph<N>,
    dim: usize,
) -> Result<Vec<Graph<N>>, RigidityError> {
    let n = graph.node_count();
    if n <= 2 {
        return Ok(Vec::new());
    }
    if n == 3 {
        return Ok(if is_rigid(graph, dim)? {
            vec![graph.clone()]
        } else {
            Vec::new()
        });
    }

    let vertices: Vec<N> = graph.vertices().collect();
    let mut found = Vec::new();
    for subset in vertices.iter().copied().combinations(n - 1) {
        let sub = graph.induced_subgraph(subset);
        let smaller = collect_minimal(&sub, dim)?;
        if smaller.is_empty() && is_rigid(&sub, dim)? {
            // No rigid subgraph strictly inside: this one is minimal.
            found.push(sub);
        } else {
            found.extend(smaller);
        }
    }
    dedup_isomorphic(&mut found);
    Ok(found)
}

/// Keep the first representative of every isomorphism class.
fn dedup_isomorphic<N: NodeTrait>(graphs: &mut Vec<Graph<N>>) {
    let mut kept: Vec<Graph<N>> = Vec::new();
    for g in graphs.drain(..) {
        if !kept.iter().any(|h| is_isomorphic(h, &g)) {
            kept.push(g);
        }
    }
    *graphs = kept;
}
