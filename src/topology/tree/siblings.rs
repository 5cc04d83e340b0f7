//! Sorted children lists of the simplex tree.
//!
//! All nodes sharing the same parent path live in one [`Siblings`] list,
//! sorted by vertex label so that lookups are a binary search. The list keeps
//! two non-owning back-references, the key of the list holding its parent
//! node (`oncles`) and the parent's label, which are enough to walk from any
//! node back to the root.

use slotmap::new_key_type;

use super::node::Node;
use crate::topology::bounds::VertexLike;

new_key_type! {
    /// Key type for siblings lists in the tree's arena.
    ///
    /// Keys are generational: a key to a removed list never aliases a list
    /// created later.
    pub struct SiblingsKey;
}

/// All children of one node (or the vertices, for the root list).
#[derive(Clone, Debug)]
pub struct Siblings<V, F, D = ()> {
    pub(crate) oncles: Option<SiblingsKey>,
    pub(crate) parent: V,
    pub(crate) members: Vec<(V, Node<F, D>)>,
}

impl<V: VertexLike, F, D> Siblings<V, F, D> {
    pub(crate) fn new(oncles: Option<SiblingsKey>, parent: V) -> Self {
        Self {
            oncles,
            parent,
            members: Vec::new(),
        }
    }

    /// The root list: no parent, labelled by the null vertex.
    pub(crate) fn root() -> Self {
        Self::new(None, V::null_vertex())
    }

    /// Key of the list that holds the parent node; `None` for the root list.
    #[inline]
    pub fn oncles(&self) -> Option<SiblingsKey> {
        self.oncles
    }

    /// Label of the parent node; the null vertex for the root list.
    #[inline]
    pub fn parent(&self) -> V {
        self.parent
    }

    /// Members in increasing label order.
    #[inline]
    pub fn members(&self) -> &[(V, Node<F, D>)] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub(crate) fn position(&self, v: V) -> Result<usize, usize> {
        self.members.binary_search_by(|(u, _)| u.cmp(&v))
    }

    #[inline]
    pub fn get(&self, v: V) -> Option<&Node<F, D>> {
        self.position(v).ok().map(|i| &self.members[i].1)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, v: V) -> Option<&mut Node<F, D>> {
        self.position(v).ok().map(move |i| &mut self.members[i].1)
    }

    /// Position of `v`, creating its node with `make` if absent.
    /// Returns `(position, created)`.
    pub(crate) fn get_or_insert_with(
        &mut self,
        v: V,
        make: impl FnOnce() -> Node<F, D>,
    ) -> (usize, bool) {
        match self.position(v) {
            Ok(i) => (i, false),
            Err(i) => {
                self.members.insert(i, (v, make()));
                (i, true)
            }
        }
    }

    pub(crate) fn remove(&mut self, v: V) -> Option<Node<F, D>> {
        self.position(v).ok().map(|i| self.members.remove(i).1)
    }
}
