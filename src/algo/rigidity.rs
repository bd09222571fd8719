//! Generic rigidity predicates for dimensions 1 and 2.
//!
//! Dimension 1 reduces to connectivity: a framework of bars on a line is
//! rigid iff its graph is connected, minimally rigid iff it is a tree,
//! globally rigid iff it is 2-connected. Dimension 2 is decided
//! combinatorially through the (2, 3)-matroid: minimal rigidity is
//! (2, 3)-tightness, rigidity is the existence of a spanning (2, 3)-tight
//! subgraph, and global rigidity combines redundant rigidity with
//! 3-connectivity. Higher dimensions need matrix methods and are not part
//! of this core.

use hashbrown::HashSet;
use itertools::Itertools;
use log::trace;

use crate::algo::connectivity::{is_connected, is_tree, vertex_connectivity};
use crate::algo::sparsity::is_tight;
use crate::error::RigidityError;
use crate::graph::{Graph, NodeTrait};

/// Shared entry validation: a positive supported dimension and no
/// self-loops.
pub(crate) fn ensure_predicate_input<N: NodeTrait>(
    graph: &Graph<N>,
    dim: usize,
) -> Result<(), RigidityError> {
    if dim == 0 {
        return Err(RigidityError::ZeroDimension);
    }
    if graph.has_self_loop() {
        return Err(RigidityError::LoopsPresent);
    }
    if dim > 2 {
        return Err(RigidityError::UnsupportedDimension(dim));
    }
    Ok(())
}

/// Check whether the graph is generically `dim`-rigid.
///
/// ```
/// use rigidity::algo::is_rigid;
/// use rigidity::generators;
///
/// assert!(is_rigid(&generators::complete(4), 2).unwrap());
/// assert!(!is_rigid(&generators::cycle(4), 2).unwrap());
/// ```
///
/// # Errors
///
/// [`RigidityError::ZeroDimension`] for `dim = 0`,
/// [`RigidityError::UnsupportedDimension`] for `dim > 2`, and
/// [`RigidityError::LoopsPresent`] when the graph has a self-loop.
pub fn is_rigid<N: NodeTrait>(graph: &Graph<N>, dim: usize) -> Result<bool, RigidityError> {
    ensure_predicate_input(graph, dim)?;
    match dim {
        1 => Ok(is_connected(graph)),
        _ => is_rigid_d2(graph),
    }
}

/// Rigidity in the plane: some `deficiency`-subset of edges can be
/// removed so that a (2, 3)-tight graph remains.
fn is_rigid_d2<N: NodeTrait>(graph: &Graph<N>) -> Result<bool, RigidityError> {
    let n = graph.node_count();
    if n < 2 {
        // The 2n - 3 edge count is unreachable below two vertices.
        return Ok(false);
    }
    if n == 2 {
        // A single bar is rigid, two disconnected points are not.
        return Ok(graph.is_complete());
    }

    let required = 2 * n - 3;
    if graph.edge_count() < required {
        return Ok(false);
    }
    let deficiency = graph.edge_count() - required;
    trace!("rigidity check on {n} vertices, deficiency {deficiency}");

    let edges: Vec<(N, N)> = graph.edges().collect();
    for removal in edges.iter().copied().combinations(deficiency) {
        let removal: HashSet<(N, N)> = removal.into_iter().collect();
        let mut candidate = Graph::with_capacity(n, required);
        for v in graph.vertices() {
            candidate.add_vertex(v);
        }
        for (a, b) in graph.edges().filter(|e| !removal.contains(e)) {
            candidate.add_edge_unchecked(a, b);
        }
        if is_tight(&candidate, 2, 3)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Check whether the graph is minimally generically `dim`-rigid: rigid,
/// and no proper spanning subgraph is.
///
/// # Errors
///
/// Same conditions as [`is_rigid`].
pub fn is_min_rigid<N: NodeTrait>(graph: &Graph<N>, dim: usize) -> Result<bool, RigidityError> {
    ensure_predicate_input(graph, dim)?;
    match dim {
        1 => Ok(is_tree(graph)),
        _ => Ok(is_tight(graph, 2, 3)?),
    }
}

/// Check whether the graph stays rigid after deleting any single edge.
///
/// # Errors
///
/// Same conditions as [`is_rigid`].
pub fn is_redundantly_rigid<N: NodeTrait>(
    graph: &Graph<N>,
    dim: usize,
) -> Result<bool, RigidityError> {
    is_k_redundantly_rigid(graph, 1, dim)
}

/// Check whether the graph stays rigid after deleting any `k` edges.
///
/// # Errors
///
/// Same conditions as [`is_rigid`].
pub fn is_k_redundantly_rigid<N: NodeTrait>(
    graph: &Graph<N>,
    k: usize,
    dim: usize,
) -> Result<bool, RigidityError> {
    ensure_predicate_input(graph, dim)?;
    let edges: Vec<(N, N)> = graph.edges().collect();
    for removal in edges.iter().copied().combinations(k) {
        let removal: HashSet<(N, N)> = removal.into_iter().collect();
        let mut candidate = Graph::with_capacity(graph.node_count(), edges.len() - k);
        for v in graph.vertices() {
            candidate.add_vertex(v);
        }
        for (a, b) in graph.edges().filter(|e| !removal.contains(e)) {
            candidate.add_edge_unchecked(a, b);
        }
        if !is_rigid(&candidate, dim)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Check whether the graph stays rigid after deleting any single vertex.
///
/// # Errors
///
/// Same conditions as [`is_rigid`].
pub fn is_vertex_redundantly_rigid<N: NodeTrait>(
    graph: &Graph<N>,
    dim: usize,
) -> Result<bool, RigidityError> {
    is_k_vertex_redundantly_rigid(graph, 1, dim)
}

/// Check whether the graph stays rigid after deleting any `k` vertices.
///
/// # Errors
///
/// Same conditions as [`is_rigid`].
pub fn is_k_vertex_redundantly_rigid<N: NodeTrait>(
    graph: &Graph<N>,
    k: usize,
    dim: usize,
) -> Result<bool, RigidityError> {
    ensure_predicate_input(graph, dim)?;
    let vertices: Vec<N> = graph.vertices().collect();
    for removal in vertices.iter().copied().combinations(k) {
        let removal: HashSet<N> = removal.into_iter().collect();
        let keep = vertices.iter().copied().filter(|v| !removal.contains(v));
        if !is_rigid(&graph.induced_subgraph(keep), dim)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Check whether the graph is globally generically `dim`-rigid: every
/// generic realization is determined by its edge lengths up to isometry.
///
/// Dimension 1: 2-connectivity. Dimension 2: redundant rigidity together
/// with 3-connectivity; on exactly `dim + 1` vertices, global rigidity is
/// equivalent to completeness, and below 2 vertices it fails.
///
/// # Errors
///
/// Same conditions as [`is_rigid`].
pub fn is_globally_rigid<N: NodeTrait>(
    graph: &Graph<N>,
    dim: usize,
) -> Result<bool, RigidityError> {
    ensure_predicate_input(graph, dim)?;
    let n = graph.node_count();
    if n <= 1 {
        return Ok(false);
    }
    if n == dim + 1 {
        return Ok(graph.is_complete());
    }
    match dim {
        1 => Ok(vertex_connectivity(graph) >= 2),
        _ => Ok(is_redundantly_rigid(graph, 2)? && vertex_connectivity(graph) >= 3),
    }
}
