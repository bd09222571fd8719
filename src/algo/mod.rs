//! Graph algorithms: the sparsity oracle, connectivity queries,
//! isomorphism testing, and the rigidity predicates built on top of the
//! pebble game.

pub mod connectivity;
pub mod isomorphism;
pub mod rigidity;
pub mod sparsity;
pub mod subgraphs;

pub use connectivity::{is_connected, is_tree, vertex_connectivity};
pub use isomorphism::is_isomorphic;
pub use rigidity::{
    is_globally_rigid, is_k_redundantly_rigid, is_k_vertex_redundantly_rigid, is_min_rigid,
    is_redundantly_rigid, is_rigid, is_vertex_redundantly_rigid,
};
pub use sparsity::{is_sparse, is_sparse_pebble, is_tight};
pub use subgraphs::{maximal_rigid_subgraphs, minimal_rigid_subgraphs};
