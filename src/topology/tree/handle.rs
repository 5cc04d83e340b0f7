//! `SimplexHandle`: a stable reference to one simplex of a tree.

use super::siblings::SiblingsKey;

/// Addresses a node by the siblings list that holds it and its label.
///
/// A handle stays valid until its node is removed (edge contraction,
/// [`remove_maximal_simplex`](super::SimplexTree::remove_maximal_simplex),
/// [`prune_above_filtration`](super::SimplexTree::prune_above_filtration)).
/// Two handles are equal iff they address the same node. "Not found" is
/// `None` wherever a handle is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimplexHandle<V> {
    pub(crate) siblings: SiblingsKey,
    pub(crate) vertex: V,
}

impl<V: Copy> SimplexHandle<V> {
    #[inline]
    pub(crate) fn new(siblings: SiblingsKey, vertex: V) -> Self {
        Self { siblings, vertex }
    }

    /// Label of the node, i.e. the smallest vertex of the simplex.
    #[inline]
    pub fn vertex(self) -> V {
        self.vertex
    }

    /// Key of the siblings list holding the node.
    #[inline]
    pub fn siblings(self) -> SiblingsKey {
        self.siblings
    }
}
