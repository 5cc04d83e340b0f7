//! The filtration index: every simplex, ordered for persistence.
//!
//! Order: filtration value, then dimension, then the canonical (descending)
//! vertex sequence compared lexicographically. The dimension key puts every
//! face ahead of its cofaces when they share a value, and the last key makes
//! the order total.
//!
//! The index is built on first use and cached until the next mutation
//! (see [`InvalidateCache`](crate::topology::cache::InvalidateCache)).

use std::cmp::Ordering;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::handle::SimplexHandle;
use super::simplex_tree::SimplexTree;
use crate::topology::bounds::{FiltrationLike, PayloadLike, VertexLike};
use crate::topology::cache::InvalidateCache;

type Entry<V, F> = (F, Vec<V>, SimplexHandle<V>);

fn cmp_entries<V: VertexLike, F: FiltrationLike>(a: &Entry<V, F>, b: &Entry<V, F>) -> Ordering {
    a.0.cmp_filtration(&b.0)
        .then(a.1.len().cmp(&b.1.len()))
        .then_with(|| a.1.cmp(&b.1))
}

impl<V: VertexLike, F: FiltrationLike, D: PayloadLike> SimplexTree<V, F, D> {
    /// All simplices in filtration order.
    ///
    /// The slice is borrowed from the cache; iterate it as many times as
    /// needed. Building it costs one traversal plus one sort.
    ///
    /// # Example
    /// ```
    /// use simplex_tree::topology::tree::SimplexTree;
    /// let mut st = SimplexTree::<u32, f64>::new();
    /// st.insert_simplex_and_subfaces([1, 0], 0.5);
    /// st.insert_simplex([2], 0.1);
    /// let order: Vec<Vec<u32>> = st
    ///     .filtration_simplex_range()
    ///     .iter()
    ///     .map(|&sh| st.simplex_vertex_range(sh).collect())
    ///     .collect();
    /// assert_eq!(order, vec![vec![2], vec![0], vec![1], vec![1, 0]]);
    /// ```
    pub fn filtration_simplex_range(&self) -> &[SimplexHandle<V>] {
        self.filtration_index
            .get_or_init(|| self.build_filtration_index())
    }

    /// Rebuilds the filtration index now instead of on next use.
    pub fn initialize_filtration(&mut self) {
        self.invalidate_cache();
        let index = self.build_filtration_index();
        let _ = self.filtration_index.set(index);
    }

    /// `true` if the cached index is present.
    #[inline]
    pub fn is_filtration_initialized(&self) -> bool {
        self.filtration_index.get().is_some()
    }

    fn build_filtration_index(&self) -> Vec<SimplexHandle<V>> {
        let mut entries: Vec<Entry<V, F>> = Vec::with_capacity(self.num_simplices());
        self.for_each_simplex(|path, sh| {
            entries.push((self.filtration_of(sh), path.to_vec(), sh));
        });

        #[cfg(feature = "rayon")]
        entries.par_sort_unstable_by(cmp_entries);
        #[cfg(not(feature = "rayon"))]
        entries.sort_unstable_by(cmp_entries);

        log::debug!("filtration index rebuilt over {} simplices", entries.len());
        entries.into_iter().map(|(_, _, sh)| sh).collect()
    }

    /// Writes each simplex's position in the filtration order into its payload.
    ///
    /// Persistence algorithms use this position as the simplex key.
    pub fn assign_keys(&mut self)
    where
        D: From<usize>,
    {
        let order = self.filtration_simplex_range().to_vec();
        for (key, sh) in order.into_iter().enumerate() {
            self.node_mut(sh).payload = D::from(key);
        }
    }
}
