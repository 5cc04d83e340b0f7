//! Edge contraction.
//!
//! `edge_contraction(a, b)` with `a < b` merges vertex `b` into `a`: every
//! simplex containing `b` is replaced by its image under `b ↦ a`. The edit is
//! done as snapshot, remove, merge: the star of `b` is copied out, its nodes
//! are unlinked, and the images are inserted back, so no siblings list is
//! mutated while it is being walked.

use super::node::Node;
use super::simplex_tree::SimplexTree;
use crate::debug_invariants;
use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};
use crate::topology::cache::InvalidateCache;
use crate::topology::simplex::canonicalize;

/// Image of one simplex of the star of `b`.
struct Image<V, F, D> {
    vertices: Vec<V>,
    filtration: F,
    payload: D,
}

impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> SimplexTree<V, F, D> {
    /// Contracts the edge `{a, b}` into the vertex `a`.
    ///
    /// Each simplex `σ ∋ b` becomes `σ \ {b} ∪ {a}`. When the image already
    /// exists, or several simplices share an image, the image keeps the
    /// smallest filtration value among them; a new image takes the value and
    /// payload of the simplex it came from.
    ///
    /// The call is a no-op when `a` or `b` is not a vertex of the tree or
    /// when `a >= b`. Trackers are left as they were.
    ///
    /// # Example
    /// ```
    /// use simplex_tree::topology::tree::SimplexTree;
    /// let mut st = SimplexTree::<u32, f64>::new();
    /// st.insert_simplex_and_subfaces([0, 1, 2], 0.1);
    /// st.edge_contraction(0, 2);
    /// assert!(st.find([2]).is_none());
    /// assert_eq!(st.num_simplices(), 3); // {0}, {1}, {1,0}
    /// ```
    pub fn edge_contraction(&mut self, a: V, b: V) {
        if a >= b {
            log::warn!("edge_contraction({a}, {b}): first vertex must be the smaller one, ignored");
            return;
        }
        let Some(vb) = self.find_vertex(b) else {
            log::warn!("edge_contraction({a}, {b}): {b} is not a vertex, ignored");
            return;
        };
        if self.find_vertex(a).is_none() {
            log::warn!("edge_contraction({a}, {b}): {a} is not a vertex, ignored");
            return;
        }

        let star = self.star_simplex_range(vb);
        let mut images: Vec<Image<V, F, D>> = star
            .iter()
            .map(|&sh| {
                let node = self.node(sh);
                Image {
                    vertices: canonicalize(
                        self.vertices_upward(sh).map(|v| if v == b { a } else { v }),
                    ),
                    filtration: node.filtration,
                    payload: node.payload.clone(),
                }
            })
            .collect();

        // Every simplex through `b` sits below exactly one `b`-labelled node,
        // and those nodes never nest.
        for sh in star.into_iter().filter(|sh| sh.vertex == b) {
            self.remove_node(sh);
        }

        images.sort_by_key(|img| img.vertices.len());
        let rehomed = images.len();
        for img in images {
            self.merge_image(img);
        }

        log::debug!("edge_contraction({a}, {b}): re-homed {rehomed} simplices");
        self.invalidate_cache();
        debug_invariants!(&*self, "edge_contraction");
    }

    fn merge_image(&mut self, img: Image<V, F, D>) {
        let Image {
            vertices,
            filtration,
            payload,
        } = img;
        let Some((&last, prefix)) = vertices.split_last() else {
            return;
        };
        let mut sib = self.root;
        for (depth, &v) in prefix.iter().enumerate() {
            sib = self.child_siblings_or_create(sib, v, filtration, depth + 1);
        }
        let (pos, created) = self.siblings[sib].get_or_insert_with(last, || Node {
            filtration,
            children: None,
            payload,
        });
        if created {
            self.note_insertion(vertices.len(), filtration);
        } else {
            let node = &mut self.siblings[sib].members[pos].1;
            node.filtration = node.filtration.min_filtration(filtration);
        }
    }
}
