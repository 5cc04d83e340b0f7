mod util;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use proptest::prelude::*;
use simplex_tree::prelude::*;
use util::{Model, closure_model, records, tree_from};

fn facets_strategy() -> impl Strategy<Value = Vec<(Vec<u32>, f64)>> {
    prop::collection::vec(
        (
            prop::collection::vec(0u32..9, 1..5),
            (0u8..5).prop_map(|k| f64::from(k) / 4.0),
        ),
        1..10,
    )
}

/// Image of `model` under `b ↦ a`, keeping the smallest value per image.
fn contract_model(model: &Model, a: u32, b: u32) -> Model {
    let mut out = Model::new();
    for (simplex, &f) in model {
        let image = canonicalize(simplex.iter().map(|&v| if v == b { a } else { v }));
        out.entry(image)
            .and_modify(|g: &mut f64| *g = g.min(f))
            .or_insert(f);
    }
    out
}

proptest! {
    #[test]
    fn closure_matches_model(facets in facets_strategy()) {
        let st = tree_from(&facets);
        prop_assert_eq!(records(&st), closure_model(&facets));
        prop_assert!(st.validate_invariants().is_ok());
        let max_len = facets
            .iter()
            .map(|(f, _)| canonicalize(f.iter().copied()).len())
            .max()
            .unwrap_or(0);
        prop_assert_eq!(st.dimension(), max_len.checked_sub(1));
    }

    #[test]
    fn find_ignores_vertex_order(facets in facets_strategy()) {
        let st = tree_from(&facets);
        for sh in st.complex_simplex_range() {
            let mut vs: Vec<u32> = st.simplex_vertex_range(sh).collect();
            prop_assert_eq!(st.find(vs.iter().copied()), Some(sh));
            vs.reverse();
            prop_assert_eq!(st.find(vs.iter().copied()), Some(sh));
        }
    }

    #[test]
    fn filtration_order_is_sorted(facets in facets_strategy()) {
        let st = tree_from(&facets);
        let order = st.filtration_simplex_range();
        prop_assert_eq!(order.len(), st.num_simplices());
        let unique: BTreeSet<_> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
        for w in order.windows(2) {
            let (a, b) = (w[0], w[1]);
            match st.filtration_of(a).total_cmp(&st.filtration_of(b)) {
                Ordering::Less => {}
                Ordering::Equal => prop_assert!(st.dimension_of(a) <= st.dimension_of(b)),
                Ordering::Greater => prop_assert!(false, "filtration decreased"),
            }
        }
    }

    #[test]
    fn star_matches_brute_force(facets in facets_strategy(), pick in any::<prop::sample::Index>()) {
        let st = tree_from(&facets);
        let all: Vec<SimplexHandle<u32>> = st.complex_simplex_range().collect();
        let sigma = all[pick.index(all.len())];
        let sv: BTreeSet<u32> = st.simplex_vertex_range(sigma).collect();

        let brute: BTreeSet<SimplexHandle<u32>> = all
            .iter()
            .copied()
            .filter(|&sh| {
                let tv: BTreeSet<u32> = st.simplex_vertex_range(sh).collect();
                sv.is_subset(&tv)
            })
            .collect();
        let star: BTreeSet<_> = st.star_simplex_range(sigma).into_iter().collect();
        prop_assert_eq!(&star, &brute);

        for codim in 1..4 {
            let want: BTreeSet<_> = brute
                .iter()
                .copied()
                .filter(|&sh| st.dimension_of(sh) == st.dimension_of(sigma) + codim)
                .collect();
            let got: BTreeSet<_> = st.cofaces_simplex_range(sigma, codim).into_iter().collect();
            prop_assert_eq!(got, want);
        }
    }

    #[test]
    fn contraction_matches_model(facets in facets_strategy(), a in 0u32..9, b in 0u32..9) {
        let mut st = tree_from(&facets);
        let model = records(&st);
        let applies = a < b && st.find_vertex(a).is_some() && st.find_vertex(b).is_some();
        let expected = if applies { contract_model(&model, a, b) } else { model };

        st.edge_contraction(a, b);
        prop_assert_eq!(records(&st), expected);
        prop_assert!(st.validate_invariants().is_ok());
        prop_assert_eq!(st.filtration_simplex_range().len(), st.num_simplices());
    }

    #[test]
    fn pruning_matches_model(facets in facets_strategy(), cut in 0u8..5) {
        let cut = f64::from(cut) / 4.0;
        // facets by value make the closure a monotone filtration
        let mut facets = facets;
        facets.sort_by(|a, b| a.1.total_cmp(&b.1));
        let mut st = tree_from(&facets);
        let expected: Model = records(&st).into_iter().filter(|(_, f)| *f <= cut).collect();
        st.prune_above_filtration(cut);
        prop_assert_eq!(records(&st), expected);
        prop_assert!(st.validate_invariants().is_ok());
    }
}
