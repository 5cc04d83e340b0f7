//! Node removal.
//!
//! Cleanup always runs top-down from the removed node: its subtree's
//! siblings lists leave the arena, then the list that held it is dropped if
//! it became empty. Back-references are never followed to free anything.

use std::cmp::Ordering;

use super::handle::SimplexHandle;
use super::siblings::SiblingsKey;
use super::simplex_tree::SimplexTree;
use crate::debug_invariants;
use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};
use crate::topology::cache::InvalidateCache;

impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> SimplexTree<V, F, D> {
    /// Removes `sh` if it is a maximal simplex (it has no cofaces stored
    /// below it). Returns `false` and leaves the tree untouched otherwise.
    ///
    /// Trackers are not lowered; see [`recompute_dimension`](Self::recompute_dimension).
    pub fn remove_maximal_simplex(&mut self, sh: SimplexHandle<V>) -> bool {
        if !self.contains(sh) || self.has_children(sh) {
            return false;
        }
        self.remove_node(sh);
        self.invalidate_cache();
        debug_invariants!(&*self, "remove_maximal_simplex");
        true
    }

    /// Removes every simplex whose filtration value is above `filtration`.
    ///
    /// With a monotone filtration the result is still closed under faces.
    /// Returns `true` if anything was removed. Trackers are not lowered.
    pub fn prune_above_filtration(&mut self, filtration: F) -> bool {
        let before = self.num_simplices();
        let modified = self.rec_prune(self.root, filtration);
        if modified {
            self.invalidate_cache();
            log::debug!(
                "pruned {} simplices above filtration {}",
                before - self.num_simplices(),
                filtration
            );
            debug_invariants!(&*self, "prune_above_filtration");
        }
        modified
    }

    /// Rebuilds the members of `key` without the nodes above `filtration`,
    /// then swaps the result in.
    fn rec_prune(&mut self, key: SiblingsKey, filtration: F) -> bool {
        let members = std::mem::take(&mut self.siblings[key].members);
        let mut kept = Vec::with_capacity(members.len());
        let mut modified = false;
        for (v, mut node) in members {
            if node.filtration.cmp_filtration(&filtration) == Ordering::Greater {
                if let Some(c) = node.children {
                    self.drop_subtree(c);
                }
                modified = true;
                continue;
            }
            if let Some(c) = node.children {
                modified |= self.rec_prune(c, filtration);
                if self.siblings[c].is_empty() {
                    self.siblings.remove(c);
                    node.children = None;
                }
            }
            kept.push((v, node));
        }
        self.siblings[key].members = kept;
        modified
    }

    /// Unlinks the node behind `sh` with its whole subtree.
    ///
    /// Leaves the cache and the invariant check to the caller.
    pub(crate) fn remove_node(&mut self, sh: SimplexHandle<V>) {
        let Some(node) = self.siblings[sh.siblings].remove(sh.vertex) else {
            return;
        };
        if let Some(c) = node.children {
            self.drop_subtree(c);
        }
        self.drop_if_empty(sh.siblings);
    }

    /// Removes `key` and every siblings list below it from the arena.
    pub(crate) fn drop_subtree(&mut self, key: SiblingsKey) {
        let mut stack = vec![key];
        while let Some(k) = stack.pop() {
            if let Some(sib) = self.siblings.remove(k) {
                stack.extend(sib.members.iter().filter_map(|(_, n)| n.children));
            }
        }
    }

    /// Drops a non-root list that lost its last member and clears the
    /// parent's link to it.
    fn drop_if_empty(&mut self, key: SiblingsKey) {
        if key == self.root || !self.siblings[key].is_empty() {
            return;
        }
        let Some(sib) = self.siblings.remove(key) else {
            return;
        };
        if let Some(oncles) = sib.oncles {
            if let Some(parent) = self.siblings[oncles].get_mut(sib.parent) {
                parent.children = None;
            }
        }
    }
}
