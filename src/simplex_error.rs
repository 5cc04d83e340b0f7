//! SimplexTreeError: Unified error type for simplex-tree public APIs
//!
//! Queries and structural edits on a [`SimplexTree`](crate::topology::tree::SimplexTree)
//! are permissive and never fail; this type covers the fallible edges of the
//! crate: text I/O and invariant validation.

use thiserror::Error;

/// Unified error type for simplex-tree operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimplexTreeError {
    /// A line of serialized input could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(String),
    /// A siblings list is not strictly increasing by vertex label.
    #[error("Invariant error: siblings under `{parent}` are not strictly sorted")]
    UnsortedSiblings { parent: String },
    /// A child label is not smaller than the label of its parent node.
    #[error("Invariant error: child `{child}` is not smaller than its parent `{parent}`")]
    ChildNotSmaller { parent: String, child: String },
    /// A child siblings list does not point back at the node that owns it.
    #[error("Invariant error: siblings under `{parent}` have a broken back-reference")]
    BrokenBackReference { parent: String },
    /// A node owns a child siblings list with no members.
    #[error("Invariant error: node `{parent}` owns an empty children list")]
    EmptyChildSiblings { parent: String },
    /// The dimension tracker is lower than the deepest simplex in the tree.
    #[error("Invariant error: tracked dimension {tracked:?} is below actual dimension {actual}")]
    DimensionTooSmall { tracked: Option<usize>, actual: usize },
    /// A siblings list in the arena is not reachable from the root.
    #[error("Invariant error: {0} siblings list(s) unreachable from the root")]
    DanglingSiblings(usize),
}

impl From<std::io::Error> for SimplexTreeError {
    fn from(e: std::io::Error) -> Self {
        SimplexTreeError::Io(e.to_string())
    }
}
