//! Simplices as vertex sets, and their canonical form.
//!
//! A simplex is identified inside the tree by its vertices sorted in strictly
//! descending order: the path from the root spells the largest vertex first.

use serde::{Deserialize, Serialize};

use crate::topology::bounds::VertexLike;

/// Sort `vertices` into canonical (strictly descending) order, dropping duplicates.
///
/// # Example
/// ```
/// use simplex_tree::topology::simplex::canonicalize;
/// assert_eq!(canonicalize([1u32, 7, 3, 7]), vec![7, 3, 1]);
/// ```
pub fn canonicalize<V, I>(vertices: I) -> Vec<V>
where
    V: VertexLike,
    I: IntoIterator<Item = V>,
{
    let mut out: Vec<V> = vertices.into_iter().collect();
    out.sort_unstable_by(|a, b| b.cmp(a));
    out.dedup();
    out
}

/// `true` if `vertices` is already strictly descending.
#[inline]
pub fn is_canonical<V: Ord>(vertices: &[V]) -> bool {
    vertices.windows(2).all(|w| w[0] > w[1])
}

/// Dimension of a simplex with `n` vertices; `None` for the empty simplex.
#[inline]
pub fn dimension_of_len(n: usize) -> Option<usize> {
    n.checked_sub(1)
}

/// A simplex together with its filtration value.
///
/// This is the unit exchanged with readers, writers and serde snapshots.
/// [`FilteredSimplex::new`] canonicalizes; a record built through the public
/// fields or by serde keeps its vertices as given, and tree insertion
/// canonicalizes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilteredSimplex<V, F> {
    /// Vertices, highest first when built with `new`.
    pub vertices: Vec<V>,
    pub filtration: F,
}

impl<V: VertexLike, F> FilteredSimplex<V, F> {
    /// Builds a record from vertices in any order.
    pub fn new<I: IntoIterator<Item = V>>(vertices: I, filtration: F) -> Self {
        Self {
            vertices: canonicalize(vertices),
            filtration,
        }
    }

    /// Dimension of the simplex, `None` if it is empty.
    pub fn dimension(&self) -> Option<usize> {
        dimension_of_len(self.vertices.len())
    }
}
