//! Ranges over the tree: vertices of one simplex, all vertices, all
//! simplices (optionally cut at a dimension) and boundaries.
//!
//! Everything here is a read-only walk; none of it touches the filtration
//! index.

use super::handle::SimplexHandle;
use super::siblings::SiblingsKey;
use super::simplex_tree::SimplexTree;
use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};

/// Vertices of one simplex, lowest first, obtained by following the
/// `oncles`/`parent` back-references up to the root.
pub struct VerticesUpward<'a, V, F, D> {
    tree: &'a SimplexTree<V, F, D>,
    next: Option<(SiblingsKey, V)>,
}

impl<V: VertexLike, F, D> Iterator for VerticesUpward<'_, V, F, D> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let (key, v) = self.next.take()?;
        let sib = &self.tree.siblings[key];
        self.next = sib.oncles.map(|o| (o, sib.parent));
        Some(v)
    }
}

/// Depth-first, pre-order walk of the trie.
///
/// Within one siblings list members come in increasing label order and each
/// node is followed by its subtree, so a simplex is always yielded after its
/// prefix faces. Nodes deeper than `max_depth` vertices are skipped.
pub struct ComplexSimplexIter<'a, V, F, D> {
    tree: &'a SimplexTree<V, F, D>,
    stack: Vec<(SiblingsKey, usize, usize)>,
    max_depth: usize,
}

impl<'a, V: VertexLike, F, D> ComplexSimplexIter<'a, V, F, D> {
    fn new(tree: &'a SimplexTree<V, F, D>, max_depth: usize) -> Self {
        let stack = if max_depth == 0 {
            Vec::new()
        } else {
            vec![(tree.root, 0, 1)]
        };
        Self {
            tree,
            stack,
            max_depth,
        }
    }
}

impl<V: VertexLike, F, D> Iterator for ComplexSimplexIter<'_, V, F, D> {
    type Item = SimplexHandle<V>;

    fn next(&mut self) -> Option<SimplexHandle<V>> {
        let tree = self.tree;
        loop {
            let top = self.stack.last_mut()?;
            let (key, idx, depth) = *top;
            let members = &tree.siblings[key].members;
            if idx >= members.len() {
                self.stack.pop();
                continue;
            }
            top.1 += 1;
            let (v, node) = &members[idx];
            if depth < self.max_depth {
                if let Some(c) = node.children {
                    self.stack.push((c, 0, depth + 1));
                }
            }
            return Some(SimplexHandle::new(key, *v));
        }
    }
}

impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> SimplexTree<V, F, D> {
    /// Vertices of `sh`, lowest first.
    pub fn vertices_upward(&self, sh: SimplexHandle<V>) -> VerticesUpward<'_, V, F, D> {
        VerticesUpward {
            tree: self,
            next: Some((sh.siblings, sh.vertex)),
        }
    }

    /// Vertices of `sh` in canonical order, highest first.
    pub fn simplex_vertex_range(&self, sh: SimplexHandle<V>) -> std::vec::IntoIter<V> {
        let mut vertices: Vec<V> = self.vertices_upward(sh).collect();
        vertices.reverse();
        vertices.into_iter()
    }

    /// All vertices of the complex, ascending.
    pub fn complex_vertex_range(&self) -> impl Iterator<Item = V> + '_ {
        self.siblings[self.root].members.iter().map(|(v, _)| *v)
    }

    /// Every simplex, in tree order.
    pub fn complex_simplex_range(&self) -> ComplexSimplexIter<'_, V, F, D> {
        ComplexSimplexIter::new(self, usize::MAX)
    }

    /// Every simplex of dimension at most `k`, in tree order.
    pub fn skeleton_simplex_range(&self, k: usize) -> ComplexSimplexIter<'_, V, F, D> {
        ComplexSimplexIter::new(self, k.saturating_add(1))
    }

    /// Codimension-1 faces of `sh`.
    ///
    /// Face `i` drops the `i`-th vertex of the canonical form, so the first
    /// face drops the highest vertex. Faces absent from a tree that was not
    /// built closed are skipped. A vertex has an empty boundary.
    pub fn boundary_simplex_range(&self, sh: SimplexHandle<V>) -> Vec<SimplexHandle<V>> {
        let vertices: Vec<V> = self.simplex_vertex_range(sh).collect();
        if vertices.len() < 2 {
            return Vec::new();
        }
        let mut face = Vec::with_capacity(vertices.len() - 1);
        (0..vertices.len())
            .filter_map(|skip| {
                face.clear();
                face.extend(
                    vertices
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != skip)
                        .map(|(_, v)| *v),
                );
                self.find_sorted(&face)
            })
            .collect()
    }
}
