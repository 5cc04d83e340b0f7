//! The [`SimplexTree`] aggregate: arena, trackers and per-simplex accessors.
//!
//! Insertion, traversal, filtration ordering, coface queries and structural
//! edits live in sibling modules as further `impl` blocks.

use std::cmp::Ordering;

use once_cell::sync::OnceCell;
use slotmap::SlotMap;

use super::handle::SimplexHandle;
use super::node::Node;
use super::siblings::{Siblings, SiblingsKey};
use crate::debug_invariants::DebugInvariants;
use crate::simplex_error::SimplexTreeError;
use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};
use crate::topology::cache::InvalidateCache;
use crate::topology::simplex::FilteredSimplex;

/// A filtered simplicial complex stored as a trie of descending vertex paths.
///
/// # Type Parameters
/// - `V`: vertex handle type (any primitive integer; its max value is reserved).
/// - `F`: filtration value type.
/// - `D`: per-simplex payload, e.g. a persistence key. Defaults to `()`.
///
/// The root [`Siblings`] list holds the vertices. A node labelled `v` whose
/// path spells the simplex `σ` owns, if any, a children list holding the
/// labels `u < v` such that `σ ∪ {u}` is in the complex.
///
/// # Example
/// ```
/// use simplex_tree::topology::tree::SimplexTree;
/// let mut st = SimplexTree::<u32, f64>::new();
/// st.insert_simplex_and_subfaces([2, 1, 0], 0.3);
/// assert_eq!(st.num_vertices(), 3);
/// assert_eq!(st.num_simplices(), 7);
/// assert_eq!(st.dimension(), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct SimplexTree<V = u32, F = f64, D = ()> {
    pub(crate) siblings: SlotMap<SiblingsKey, Siblings<V, F, D>>,
    pub(crate) root: SiblingsKey,
    pub(crate) dimension: Option<usize>,
    pub(crate) filtration: F,
    pub(crate) filtration_index: OnceCell<Vec<SimplexHandle<V>>>,
}

impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> Default for SimplexTree<V, F, D> {
    fn default() -> Self {
        let mut siblings = SlotMap::with_key();
        let root = siblings.insert(Siblings::root());
        Self {
            siblings,
            root,
            dimension: None,
            filtration: F::default(),
            filtration_index: OnceCell::new(),
        }
    }
}

impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> SimplexTree<V, F, D> {
    /// Creates a new, empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree by inserting each record with [`insert_simplex`](Self::insert_simplex).
    pub fn from_simplices<I>(simplices: I) -> Self
    where
        I: IntoIterator<Item = FilteredSimplex<V, F>>,
    {
        let mut st = Self::default();
        for s in simplices {
            st.insert_simplex(s.vertices, s.filtration);
        }
        st
    }

    #[inline]
    pub fn null_vertex(&self) -> V {
        V::null_vertex()
    }

    /// Key of the root siblings list (the vertices).
    #[inline]
    pub fn root(&self) -> SiblingsKey {
        self.root
    }

    /// The siblings list stored under `key`, if it is still live.
    #[inline]
    pub fn siblings(&self, key: SiblingsKey) -> Option<&Siblings<V, F, D>> {
        self.siblings.get(key)
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.siblings[self.root].len()
    }

    /// Number of simplices; every node lives in exactly one live siblings list.
    pub fn num_simplices(&self) -> usize {
        self.siblings.values().map(Siblings::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.siblings[self.root].is_empty()
    }

    /// Tracked dimension; `None` for a tree that never held a simplex.
    ///
    /// Insertions raise it; removals and contractions leave it as is until
    /// [`recompute_dimension`](Self::recompute_dimension) is called.
    #[inline]
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    #[inline]
    pub fn set_dimension(&mut self, dimension: Option<usize>) {
        self.dimension = dimension;
    }

    /// Tracked maximal filtration value.
    #[inline]
    pub fn filtration(&self) -> F {
        self.filtration
    }

    #[inline]
    pub fn set_filtration(&mut self, filtration: F) {
        self.filtration = filtration;
    }

    /// Resets the dimension tracker to the depth of the deepest simplex.
    pub fn recompute_dimension(&mut self) -> Option<usize> {
        let mut max_len = 0usize;
        self.for_each_simplex(|path, _| max_len = max_len.max(path.len()));
        self.dimension = max_len.checked_sub(1);
        self.dimension
    }

    /// Resets the filtration tracker to the largest value present
    /// (the default value for an empty tree).
    pub fn recompute_filtration(&mut self) -> F {
        let max = self
            .siblings
            .values()
            .flat_map(|s| s.members.iter().map(|(_, n)| n.filtration))
            .reduce(F::max_filtration);
        self.filtration = max.unwrap_or_default();
        self.filtration
    }

    /// `true` if `sh` still addresses a node of this tree.
    pub fn contains(&self, sh: SimplexHandle<V>) -> bool {
        self.siblings
            .get(sh.siblings)
            .is_some_and(|s| s.get(sh.vertex).is_some())
    }

    /// # Panics
    /// Panics if `sh` no longer addresses a node of this tree.
    #[inline]
    pub(crate) fn node(&self, sh: SimplexHandle<V>) -> &Node<F, D> {
        let sib = &self.siblings[sh.siblings];
        match sib.position(sh.vertex) {
            Ok(i) => &sib.members[i].1,
            Err(_) => panic!("stale simplex handle: vertex {:?} was removed", sh.vertex),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, sh: SimplexHandle<V>) -> &mut Node<F, D> {
        match self.siblings[sh.siblings].get_mut(sh.vertex) {
            Some(n) => n,
            None => panic!("stale simplex handle: vertex {:?} was removed", sh.vertex),
        }
    }

    /// Filtration value of `sh`.
    ///
    /// # Panics
    /// Panics if `sh` is stale (see [`contains`](Self::contains)).
    #[inline]
    pub fn filtration_of(&self, sh: SimplexHandle<V>) -> F {
        self.node(sh).filtration
    }

    /// Overwrites the filtration value of `sh`. Monotonicity along faces is
    /// left to the caller; the filtration index is rebuilt on next use.
    pub fn assign_filtration(&mut self, sh: SimplexHandle<V>, filtration: F) {
        self.node_mut(sh).filtration = filtration;
        self.invalidate_cache();
    }

    #[inline]
    pub fn payload(&self, sh: SimplexHandle<V>) -> &D {
        &self.node(sh).payload
    }

    /// Mutable payload access. Payloads do not take part in the filtration
    /// order, so the cached index survives.
    #[inline]
    pub fn payload_mut(&mut self, sh: SimplexHandle<V>) -> &mut D {
        &mut self.node_mut(sh).payload
    }

    #[inline]
    pub fn has_children(&self, sh: SimplexHandle<V>) -> bool {
        self.node(sh).children.is_some()
    }

    /// Dimension of `sh`: the length of its path from the root, minus one.
    pub fn dimension_of(&self, sh: SimplexHandle<V>) -> usize {
        self.vertices_upward(sh).count() - 1
    }

    /// `sh` as a record, vertices highest first.
    pub fn filtered_simplex(&self, sh: SimplexHandle<V>) -> FilteredSimplex<V, F> {
        FilteredSimplex {
            vertices: self.simplex_vertex_range(sh).collect(),
            filtration: self.filtration_of(sh),
        }
    }

    /// Raises the trackers after a new simplex with `len` vertices appeared.
    #[inline]
    pub(crate) fn note_insertion(&mut self, len: usize, filtration: F) {
        let dim = len - 1;
        if self.dimension.is_none_or(|d| d < dim) {
            self.dimension = Some(dim);
        }
        if filtration.cmp_filtration(&self.filtration) == Ordering::Greater {
            self.filtration = filtration;
        }
    }

    /// Pre-order walk over every simplex, handing out the canonical vertex
    /// path (highest first) and the node.
    pub(crate) fn for_each_simplex(&self, mut f: impl FnMut(&[V], SimplexHandle<V>)) {
        fn rec<V: VertexLike, F, D>(
            tree: &SimplexTree<V, F, D>,
            key: SiblingsKey,
            path: &mut Vec<V>,
            f: &mut impl FnMut(&[V], SimplexHandle<V>),
        ) {
            for (v, node) in &tree.siblings[key].members {
                path.push(*v);
                f(path, SimplexHandle::new(key, *v));
                if let Some(c) = node.children {
                    rec(tree, c, path, f);
                }
                path.pop();
            }
        }
        let mut path = Vec::new();
        rec(self, self.root, &mut path, &mut f);
    }

    fn rec_equal(&self, a: SiblingsKey, other: &Self, b: SiblingsKey) -> bool
    where
        D: PartialEq,
    {
        let (ma, mb) = (&self.siblings[a].members, &other.siblings[b].members);
        ma.len() == mb.len()
            && ma.iter().zip(mb).all(|((va, na), (vb, nb))| {
                va == vb
                    && na.filtration.cmp_filtration(&nb.filtration) == Ordering::Equal
                    && na.payload == nb.payload
                    && match (na.children, nb.children) {
                        (None, None) => true,
                        (Some(ca), Some(cb)) => self.rec_equal(ca, other, cb),
                        _ => false,
                    }
            })
    }
}

/// Structural equality: trackers, labels, filtration values, payloads and
/// child structure. Arena keys and the filtration cache are ignored.
impl<V: VertexLike, F: FiltrationLike, D: PayloadLike + PartialEq> PartialEq
    for SimplexTree<V, F, D>
{
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
            && self.filtration.cmp_filtration(&other.filtration) == Ordering::Equal
            && self.rec_equal(self.root, other, other.root)
    }
}

impl<V, F, D> InvalidateCache for SimplexTree<V, F, D> {
    #[inline]
    fn invalidate_cache(&mut self) {
        self.filtration_index.take();
    }
}

impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> DebugInvariants for SimplexTree<V, F, D> {
    fn validate_invariants(&self) -> Result<(), SimplexTreeError> {
        let root = &self.siblings[self.root];
        if root.oncles.is_some() || root.parent != V::null_vertex() {
            return Err(SimplexTreeError::BrokenBackReference {
                parent: "<root>".to_string(),
            });
        }

        let mut reachable = 0usize;
        let mut max_depth = 0usize;
        let mut stack = vec![(self.root, 1usize)];
        while let Some((key, depth)) = stack.pop() {
            reachable += 1;
            let sib = &self.siblings[key];
            let parent = format!("{:?}", sib.parent);
            if !sib.members.windows(2).all(|w| w[0].0 < w[1].0) {
                return Err(SimplexTreeError::UnsortedSiblings { parent });
            }
            if key != self.root {
                if let Some((v, _)) = sib.members.iter().find(|(v, _)| *v >= sib.parent) {
                    return Err(SimplexTreeError::ChildNotSmaller {
                        parent,
                        child: format!("{v:?}"),
                    });
                }
            }
            if !sib.members.is_empty() {
                max_depth = max_depth.max(depth);
            }
            for (v, node) in &sib.members {
                let Some(c) = node.children else { continue };
                let label = format!("{v:?}");
                let Some(child) = self.siblings.get(c) else {
                    return Err(SimplexTreeError::BrokenBackReference { parent: label });
                };
                if child.oncles != Some(key) || child.parent != *v {
                    return Err(SimplexTreeError::BrokenBackReference { parent: label });
                }
                if child.members.is_empty() {
                    return Err(SimplexTreeError::EmptyChildSiblings { parent: label });
                }
                stack.push((c, depth + 1));
            }
        }

        if reachable != self.siblings.len() {
            return Err(SimplexTreeError::DanglingSiblings(
                self.siblings.len() - reachable,
            ));
        }
        if let Some(actual) = max_depth.checked_sub(1) {
            if self.dimension.is_none_or(|d| d < actual) {
                return Err(SimplexTreeError::DimensionTooSmall {
                    tracked: self.dimension,
                    actual,
                });
            }
        }
        Ok(())
    }
}
