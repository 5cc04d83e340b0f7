//! The simplex tree.
//!
//! Storage ([`Node`], [`Siblings`], [`SimplexHandle`]) and the aggregate
//! [`SimplexTree`]. Each algorithm adds its own `impl` block from a
//! separate file:
//! - `insert`: insertion with and without faces, lookup
//! - `iter`: vertex, simplex, skeleton and boundary ranges
//! - `filtration`: the cached filtration index
//! - `cofaces`: star and coface queries
//! - `contraction`: edge contraction
//! - `removal`: maximal-simplex removal and filtration pruning
//! - `expansion`: flag complexes
//! - `snapshot`: serde support

pub mod cofaces;
pub mod contraction;
pub mod expansion;
pub mod filtration;
pub mod handle;
pub mod insert;
pub mod iter;
pub mod node;
pub mod removal;
pub mod siblings;
pub mod simplex_tree;
pub mod snapshot;

pub use handle::SimplexHandle;
pub use iter::{ComplexSimplexIter, VerticesUpward};
pub use node::Node;
pub use siblings::{Siblings, SiblingsKey};
pub use simplex_tree::SimplexTree;

#[cfg(test)]
mod tests;
