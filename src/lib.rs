#![cfg_attr(docsrs, feature(doc_cfg))]
//! # simplex-tree
//!
//! simplex-tree is a Rust library for storing and querying large filtered
//! simplicial complexes, the input of persistent homology. A complex is kept
//! as a trie of descending vertex paths: every simplex maps to exactly one
//! node, lookups are one binary search per vertex, and cofaces are found
//! without scanning the whole complex.
//!
//! ## Features
//! - Insertion of single simplices or of a simplex with all of its faces
//! - Filtration-ordered traversal (value, then dimension, then vertices)
//! - Star and coface queries, boundaries, skeleta
//! - Edge contraction, maximal-simplex removal, filtration pruning
//! - Flag complex expansion from a weighted graph
//! - Text and serde serialization
//!
//! ## Determinism
//!
//! Every traversal is deterministic: siblings are sorted by label and the
//! filtration order is total. Random test complexes come from seeded
//! `SmallRng`s.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! simplex-tree = "0.1"
//! # Optional features:
//! # features = ["rayon", "strict-invariants"]
//! ```
//!
//! ```
//! use simplex_tree::prelude::*;
//!
//! let mut st = SimplexTree::<u32, f64>::new();
//! st.insert_simplex_and_subfaces([0, 1, 2], 0.4);
//! st.insert_simplex_and_subfaces([2, 3], 0.2);
//! let edge = st.find([3, 2]).unwrap();
//! assert_eq!(st.filtration_of(edge), 0.2);
//! assert_eq!(st.dimension(), Some(2));
//! ```

// Re-export our major subsystems:
pub mod debug_invariants;
pub mod io;
pub mod simplex_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::io::{SimplexTreeReader, SimplexTreeWriter, TextFormat, TextReader, TextWriter};
    pub use crate::simplex_error::SimplexTreeError;
    pub use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};
    pub use crate::topology::cache::InvalidateCache;
    pub use crate::topology::simplex::{FilteredSimplex, canonicalize};
    pub use crate::topology::tree::{SimplexHandle, SimplexTree};
}
