//! A single trie entry: one simplex.

use super::siblings::SiblingsKey;

/// One entry of a [`Siblings`](super::siblings::Siblings) list.
///
/// The vertex label that leads to a node is the key under which its siblings
/// list stores it; the node itself only carries the filtration value, the
/// payload and, when the simplex has cofaces obtained by appending smaller
/// vertices, the key of its child siblings list.
#[derive(Clone, Debug)]
pub struct Node<F, D = ()> {
    pub(crate) filtration: F,
    pub(crate) children: Option<SiblingsKey>,
    pub(crate) payload: D,
}

impl<F, D: Default> Node<F, D> {
    #[inline]
    pub(crate) fn new(filtration: F) -> Self {
        Self {
            filtration,
            children: None,
            payload: D::default(),
        }
    }
}

impl<F: Copy, D> Node<F, D> {
    #[inline]
    pub fn filtration(&self) -> F {
        self.filtration
    }

    /// Key of the child siblings list, if this simplex has children in the trie.
    #[inline]
    pub fn children(&self) -> Option<SiblingsKey> {
        self.children
    }

    #[inline]
    pub fn payload(&self) -> &D {
        &self.payload
    }
}
