#![allow(dead_code)]
use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use simplex_tree::prelude::*;

pub type St = SimplexTree<u32, f64>;

/// Canonical vertex list -> filtration value.
pub type Model = BTreeMap<Vec<u32>, f64>;

/// Every simplex of `st` as a model entry.
pub fn records(st: &St) -> Model {
    st.complex_simplex_range()
        .map(|sh| (st.simplex_vertex_range(sh).collect(), st.filtration_of(sh)))
        .collect()
}

/// Non-empty subsets of a canonical simplex, each still canonical.
pub fn faces(simplex: &[u32]) -> Vec<Vec<u32>> {
    (1u32..(1 << simplex.len()))
        .map(|mask| {
            simplex
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, v)| *v)
                .collect()
        })
        .collect()
}

/// What `insert_simplex_and_subfaces` should produce for `facets`, in order.
pub fn closure_model(facets: &[(Vec<u32>, f64)]) -> Model {
    let mut model = Model::new();
    for (facet, f) in facets {
        for face in faces(&canonicalize(facet.iter().copied())) {
            model.entry(face).or_insert(*f);
        }
    }
    model
}

pub fn tree_from(facets: &[(Vec<u32>, f64)]) -> St {
    let mut st = St::new();
    for (facet, f) in facets {
        st.insert_simplex_and_subfaces(facet.iter().copied(), *f);
    }
    st
}

/// Random facets over `n_vertices` vertices with filtration values on a
/// coarse grid, so ties are common. Facets come sorted by value, which makes
/// the closure a monotone filtration.
pub fn random_facets(
    seed: u64,
    n_vertices: u32,
    n_facets: usize,
    max_len: usize,
) -> Vec<(Vec<u32>, f64)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut facets: Vec<(Vec<u32>, f64)> = (0..n_facets)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            let facet = (0..len).map(|_| rng.gen_range(0..n_vertices)).collect();
            let f = f64::from(rng.gen_range(0u8..5)) / 4.0;
            (facet, f)
        })
        .collect();
    facets.sort_by(|a, b| a.1.total_cmp(&b.1));
    facets
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Clone + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
