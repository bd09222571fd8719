//! Error types shared across the crate.

use thiserror::Error;

/// Error raised by [`Graph`](crate::Graph) construction, mutation and the
/// integer codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge connects a vertex to itself; the graph type is simple.
    #[error("self-loops are not allowed in a simple graph")]
    SelfLoop,
    /// A vertex lookup missed.
    #[error("the vertex is not part of the graph")]
    UnknownVertex,
    /// An edge lookup missed.
    #[error("the edge is not part of the graph")]
    UnknownEdge,
    /// An edge in a constructor referenced a vertex outside the given
    /// vertex list.
    #[error("an edge endpoint is not among the given vertices")]
    UnknownEndpoint,
    /// The empty graph has no adjacency bits to encode.
    #[error("the empty graph has no integer representation")]
    EmptyGraph,
    /// Integer representations are positive by definition.
    #[error("the integer representation of a graph must be positive")]
    NonPositiveInteger,
}

/// The pebble game parameters are out of range.
///
/// `K >= 1` and `0 <= L < 2K` must hold; `L >= 0` is structural for the
/// unsigned parameter type, the remaining two conditions are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid pebble game parameters (K, L) = ({k}, {l}): K >= 1 and L < 2K must hold")]
pub struct InvalidParameters {
    pub k: usize,
    pub l: usize,
}

/// Check the pebble game parameter conditions.
pub(crate) fn check_k_l(k: usize, l: usize) -> Result<(), InvalidParameters> {
    if k < 1 || l >= 2 * k {
        return Err(InvalidParameters { k, l });
    }
    Ok(())
}

/// Error raised by the rigidity predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RigidityError {
    /// Pebble game parameters handed to an underlying sparsity check were
    /// out of range.
    #[error(transparent)]
    InvalidParameters(#[from] InvalidParameters),
    /// The dimension must be a positive integer.
    #[error("the dimension must be a positive integer")]
    ZeroDimension,
    /// Dimensions above 2 need matrix methods, which are outside this
    /// combinatorial core.
    #[error("combinatorial rigidity is only implemented for dimensions 1 and 2, got {0}")]
    UnsupportedDimension(usize),
    /// Rigidity predicates are undefined on graphs with self-loops.
    #[error("the graph contains a self-loop")]
    LoopsPresent,
}
