//! Coface and star queries.
//!
//! A coface of `σ`, written in canonical order, embeds the vertices of `σ` in
//! the same order. The search walks the trie from the root matching the
//! still-unmatched vertices of `σ` against each siblings list, visited from
//! the largest label down: a label above the next needed vertex may precede
//! it in a coface, so its subtree is searched; a label below it cannot, and
//! neither can anything after it in the list, so the scan stops there.

use std::cmp::Ordering;

use super::handle::SimplexHandle;
use super::siblings::SiblingsKey;
use super::simplex_tree::SimplexTree;
use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};

impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> SimplexTree<V, F, D> {
    /// Every simplex containing `sh`, including `sh` itself.
    ///
    /// # Example
    /// ```
    /// use simplex_tree::topology::tree::SimplexTree;
    /// let mut st = SimplexTree::<u32, f64>::new();
    /// st.insert_simplex_and_subfaces([2, 1, 0], 0.0);
    /// st.insert_simplex_and_subfaces([3, 0], 0.0);
    /// let v0 = st.find([0]).unwrap();
    /// // {0}, {1,0}, {2,0}, {2,1,0}, {3,0}
    /// assert_eq!(st.star_simplex_range(v0).len(), 5);
    /// ```
    pub fn star_simplex_range(&self, sh: SimplexHandle<V>) -> Vec<SimplexHandle<V>> {
        self.collect_cofaces(sh, None)
    }

    /// Cofaces of `sh` with exactly `codimension` more vertices.
    ///
    /// `codimension == 0` is the whole star, as in
    /// [`star_simplex_range`](Self::star_simplex_range). A codimension that
    /// would exceed the tracked dimension of the tree gives an empty result.
    pub fn cofaces_simplex_range(
        &self,
        sh: SimplexHandle<V>,
        codimension: usize,
    ) -> Vec<SimplexHandle<V>> {
        if codimension == 0 {
            return self.star_simplex_range(sh);
        }
        let len = self.dimension_of(sh) + 1;
        let target = len.saturating_add(codimension);
        if self.dimension.is_none_or(|d| target > d + 1) {
            return Vec::new();
        }
        self.collect_cofaces(sh, Some(target))
    }

    /// `target` is the vertex count of the wanted cofaces; `None` takes all.
    fn collect_cofaces(
        &self,
        sh: SimplexHandle<V>,
        target: Option<usize>,
    ) -> Vec<SimplexHandle<V>> {
        let simplex: Vec<V> = self.simplex_vertex_range(sh).collect();
        let mut out = Vec::new();
        self.rec_coface(self.root, &simplex, 1, target, &mut out);
        out
    }

    /// Scans `sib`, whose members spell simplices of `depth` vertices, for
    /// cofaces still missing the canonical tail `remaining`.
    fn rec_coface(
        &self,
        sib: SiblingsKey,
        remaining: &[V],
        depth: usize,
        target: Option<usize>,
        out: &mut Vec<SimplexHandle<V>>,
    ) {
        // Shortest coface reachable below a member once `left` vertices of
        // the query are still unmatched.
        let reachable = |left: usize| target.is_none_or(|t| depth + left.max(1) <= t);

        for (v, node) in self.siblings[sib].members.iter().rev() {
            let left = match remaining.split_first() {
                None => remaining,
                Some((&need, rest)) => match v.cmp(&need) {
                    Ordering::Less => break,
                    Ordering::Greater => remaining,
                    Ordering::Equal => rest,
                },
            };
            if left.is_empty() && target.is_none_or(|t| t == depth) {
                out.push(SimplexHandle::new(sib, *v));
            }
            if let Some(c) = node.children {
                if reachable(left.len()) {
                    self.rec_coface(c, left, depth + 1, target, out);
                }
            }
        }
    }
}
