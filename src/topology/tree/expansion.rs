//! Flag complexes: weighted graphs and their clique expansion.

use itertools::{EitherOrBoth, Itertools};

use super::node::Node;
use super::siblings::{Siblings, SiblingsKey};
use super::simplex_tree::SimplexTree;
use crate::debug_invariants;
use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};
use crate::topology::cache::InvalidateCache;

impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> SimplexTree<V, F, D> {
    /// Inserts a weighted 1-skeleton.
    ///
    /// Vertices come with their own value. An edge whose endpoint is missing
    /// inserts that endpoint with the edge's value; self-loops insert just
    /// the vertex.
    pub fn insert_graph<IV, IE>(&mut self, vertices: IV, edges: IE)
    where
        IV: IntoIterator<Item = (V, F)>,
        IE: IntoIterator<Item = (V, V, F)>,
    {
        for (v, f) in vertices {
            self.insert_simplex([v], f);
        }
        for (u, v, f) in edges {
            self.insert_simplex_and_subfaces([u, v], f);
        }
    }

    /// Adds every clique of the 1-skeleton up to dimension `max_dim`.
    ///
    /// A clique enters at the largest value among its edges and vertices.
    /// The tree is expected to hold a graph: a node above dimension 1 that
    /// already has children is skipped.
    ///
    /// # Example
    /// ```
    /// use simplex_tree::topology::tree::SimplexTree;
    /// let mut st = SimplexTree::<u32, f64>::new();
    /// st.insert_graph(
    ///     [(0, 0.0), (1, 0.0), (2, 0.0)],
    ///     [(0, 1, 0.1), (1, 2, 0.2), (0, 2, 0.3)],
    /// );
    /// st.expansion(2);
    /// let t = st.find([0, 1, 2]).unwrap();
    /// assert_eq!(st.filtration_of(t), 0.3);
    /// ```
    pub fn expansion(&mut self, max_dim: usize) {
        let before = self.num_simplices();
        let starts: Vec<SiblingsKey> = self.siblings[self.root]
            .members
            .iter()
            .filter_map(|(_, n)| n.children)
            .collect();
        for c in starts {
            self.siblings_expansion(c, 2, max_dim);
        }
        log::debug!(
            "expansion up to dimension {max_dim}: added {} simplices",
            self.num_simplices() - before
        );
        self.invalidate_cache();
        debug_invariants!(&*self, "expansion");
    }

    /// Grows children for the members of `key`, which spell simplices of
    /// `depth` vertices.
    fn siblings_expansion(&mut self, key: SiblingsKey, depth: usize, max_dim: usize) {
        if depth > max_dim {
            return;
        }
        for i in 0..self.siblings[key].len() {
            let (s, s_filtration, has_children) = {
                let (s, node) = &self.siblings[key].members[i];
                (*s, node.filtration, node.children.is_some())
            };
            if has_children {
                log::warn!("expansion: simplex ending in {s} already has cofaces, skipped");
                continue;
            }
            let Some(neighbours) = self.siblings[self.root].get(s).and_then(|n| n.children)
            else {
                continue;
            };

            // w joins the clique iff it precedes s here and is adjacent to s.
            let common: Vec<(V, F)> = self.siblings[key].members[..i]
                .iter()
                .merge_join_by(self.siblings[neighbours].members.iter(), |x, y| {
                    x.0.cmp(&y.0)
                })
                .filter_map(|e| match e {
                    EitherOrBoth::Both((w, here), (_, edge)) => Some((
                        *w,
                        s_filtration
                            .max_filtration(here.filtration)
                            .max_filtration(edge.filtration),
                    )),
                    _ => None,
                })
                .collect();
            if common.is_empty() {
                continue;
            }

            let child = self.siblings.insert(Siblings::new(Some(key), s));
            for &(_, f) in &common {
                self.note_insertion(depth + 1, f);
            }
            self.siblings[child].members = common
                .into_iter()
                .map(|(w, f)| (w, Node::new(f)))
                .collect();
            self.siblings[key].members[i].1.children = Some(child);
            self.siblings_expansion(child, depth + 1, max_dim);
        }
    }
}
