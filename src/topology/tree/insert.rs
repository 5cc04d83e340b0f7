//! Insertion and lookup.
//!
//! Every operation canonicalizes its input first, so any permutation of a
//! vertex set reaches the same node.

use super::handle::SimplexHandle;
use super::node::Node;
use super::siblings::{Siblings, SiblingsKey};
use super::simplex_tree::SimplexTree;
use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};
use crate::topology::cache::InvalidateCache;
use crate::topology::simplex::{canonicalize, is_canonical};

impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> SimplexTree<V, F, D> {
    /// Inserts one simplex, creating any missing node along its path.
    ///
    /// Returns `(Some(handle), true)` if the simplex is new and `(None, false)`
    /// if it was already present; an existing simplex keeps its filtration
    /// value. The empty simplex is a no-op reported as `(None, true)`.
    ///
    /// Faces are not inserted; use
    /// [`insert_simplex_and_subfaces`](Self::insert_simplex_and_subfaces) to
    /// keep the complex closed.
    ///
    /// # Example
    /// ```
    /// use simplex_tree::topology::tree::SimplexTree;
    /// let mut st = SimplexTree::<u32, f64>::new();
    /// let (sh, inserted) = st.insert_simplex([0, 1], 0.2);
    /// assert!(inserted && sh.is_some());
    /// assert_eq!(st.insert_simplex([1, 0], 0.9), (None, false));
    /// ```
    pub fn insert_simplex<I>(
        &mut self,
        vertices: I,
        filtration: F,
    ) -> (Option<SimplexHandle<V>>, bool)
    where
        I: IntoIterator<Item = V>,
    {
        let simplex = canonicalize(vertices);
        self.insert_sorted(&simplex, filtration)
    }

    pub(crate) fn insert_sorted(
        &mut self,
        simplex: &[V],
        filtration: F,
    ) -> (Option<SimplexHandle<V>>, bool) {
        let Some((&last, prefix)) = simplex.split_last() else {
            return (None, true);
        };
        debug_assert!(is_canonical(simplex));
        debug_assert!(
            !simplex.contains(&V::null_vertex()),
            "the null vertex cannot be inserted"
        );

        let mut sib = self.root;
        for (depth, &v) in prefix.iter().enumerate() {
            sib = self.child_siblings_or_create(sib, v, filtration, depth + 1);
        }
        let (_, created) = self.siblings[sib].get_or_insert_with(last, || Node::new(filtration));
        if !created {
            return (None, false);
        }
        self.note_insertion(simplex.len(), filtration);
        self.invalidate_cache();
        (Some(SimplexHandle::new(sib, last)), true)
    }

    /// Inserts a simplex and every one of its non-empty faces.
    ///
    /// Faces that are created get `filtration`; faces already present keep
    /// their value. Returns the handle of the full simplex when it was
    /// created, in the same shape as [`insert_simplex`](Self::insert_simplex).
    ///
    /// # Example
    /// ```
    /// use simplex_tree::topology::tree::SimplexTree;
    /// let mut st = SimplexTree::<u32, f64>::new();
    /// st.insert_simplex_and_subfaces([2, 1, 0], 0.0);
    /// for face in [vec![2, 1], vec![1, 0], vec![2, 0], vec![2], vec![1], vec![0]] {
    ///     assert!(st.find(face).is_some());
    /// }
    /// ```
    pub fn insert_simplex_and_subfaces<I>(
        &mut self,
        vertices: I,
        filtration: F,
    ) -> (Option<SimplexHandle<V>>, bool)
    where
        I: IntoIterator<Item = V>,
    {
        let simplex = canonicalize(vertices);
        let Some((&first, rest)) = simplex.split_first() else {
            return (None, true);
        };
        debug_assert!(
            !simplex.contains(&V::null_vertex()),
            "the null vertex cannot be inserted"
        );
        let (sh, created) = self.rec_insert_subfaces(self.root, first, rest, filtration, 1);
        self.invalidate_cache();
        (created.then_some(sh), created)
    }

    /// Inserts `{first} ∪ rest` and all of its faces whose largest vertex is
    /// `first` below `sib`, then the faces of `rest` alongside it.
    fn rec_insert_subfaces(
        &mut self,
        sib: SiblingsKey,
        first: V,
        rest: &[V],
        filtration: F,
        depth: usize,
    ) -> (SimplexHandle<V>, bool) {
        let (_, created) = self.siblings[sib].get_or_insert_with(first, || Node::new(filtration));
        if created {
            self.note_insertion(depth, filtration);
        }
        let Some((&next, tail)) = rest.split_first() else {
            return (SimplexHandle::new(sib, first), created);
        };
        let child = self.child_siblings_or_create(sib, first, filtration, depth);
        let full = self.rec_insert_subfaces(child, next, tail, filtration, depth + 1);
        self.rec_insert_subfaces(sib, next, tail, filtration, depth);
        full
    }

    /// Children list of `v` in `sib`, creating the node (at `depth` vertices)
    /// and an empty list when missing. Callers fill the list before returning.
    pub(crate) fn child_siblings_or_create(
        &mut self,
        sib: SiblingsKey,
        v: V,
        filtration: F,
        depth: usize,
    ) -> SiblingsKey {
        let (pos, created) = self.siblings[sib].get_or_insert_with(v, || Node::new(filtration));
        if created {
            self.note_insertion(depth, filtration);
        }
        if let Some(c) = self.siblings[sib].members[pos].1.children {
            return c;
        }
        let child = self.siblings.insert(Siblings::new(Some(sib), v));
        self.siblings[sib].members[pos].1.children = Some(child);
        child
    }

    /// Looks a simplex up by its vertices, in any order.
    ///
    /// Walks one siblings list per vertex and stops at the first missing
    /// label, so lookups deeper than the tree fail without further work.
    pub fn find<I>(&self, vertices: I) -> Option<SimplexHandle<V>>
    where
        I: IntoIterator<Item = V>,
    {
        let simplex = canonicalize(vertices);
        self.find_sorted(&simplex)
    }

    pub(crate) fn find_sorted(&self, simplex: &[V]) -> Option<SimplexHandle<V>> {
        debug_assert!(is_canonical(simplex));
        let (&last, prefix) = simplex.split_last()?;
        let mut sib = self.root;
        for &v in prefix {
            sib = self.siblings[sib].get(v)?.children?;
        }
        self.siblings[sib].get(last)?;
        Some(SimplexHandle::new(sib, last))
    }

    /// Handle of the 0-simplex `{v}`.
    #[inline]
    pub fn find_vertex(&self, v: V) -> Option<SimplexHandle<V>> {
        self.siblings[self.root]
            .get(v)
            .map(|_| SimplexHandle::new(self.root, v))
    }
}
