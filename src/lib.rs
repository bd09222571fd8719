//! **rigidity** is a combinatorial rigidity library.
//!
//! The core is an incremental **(K, L)-pebble game**: [`PebbleDigraph`]
//! decides, edge by edge, whether a set of edges is independent in the
//! (K, L)-sparsity matroid, maintaining an oriented witness in which
//! every vertex keeps at most K outgoing edges. Pebbles are moved by
//! reversing directed paths, and the failed search for a free pebble
//! yields the fundamental circuit of a rejected edge.
//!
//! On top of the engine, [`algo`] answers the classical questions of
//! plane rigidity theory for an undirected simple [`Graph`]:
//! (K, L)-sparsity and tightness, generic rigidity and minimal rigidity
//! for dimensions 1 and 2, redundant and global rigidity, and the
//! enumeration of maximal and minimal rigid subgraphs.
//!
//! ```
//! use rigidity::algo::{is_globally_rigid, is_min_rigid, is_tight};
//! use rigidity::generators;
//!
//! let prism = generators::three_prism();
//! assert!(is_tight(&prism, 2, 3).unwrap());
//! assert!(is_min_rigid(&prism, 2).unwrap());
//! assert!(!is_globally_rigid(&prism, 2).unwrap());
//! ```

pub mod algo;
pub mod error;
pub mod generators;
pub mod graph;
mod integer;
pub mod pebble;

pub use crate::graph::{Graph, NodeTrait};
pub use crate::pebble::PebbleDigraph;
