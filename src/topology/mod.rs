//! Top-level module for simplicial complex topology.
//!
//! This module provides the core types for representing filtered simplicial
//! complexes with a simplex tree.
//! It includes:
//! - Bound traits for vertex, filtration and payload types
//! - Canonical simplex form and the `FilteredSimplex` record
//! - The `SimplexTree` and its algorithms
//!
//! Most users will interact with [`tree::SimplexTree`] directly.

pub mod bounds;
pub mod cache;
pub mod simplex;
pub mod tree;

pub use cache::InvalidateCache;
pub use simplex::{FilteredSimplex, canonicalize};
pub use tree::{SimplexHandle, SimplexTree};
