use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use simplex_tree::topology::tree::SimplexTree;

/// Flag complex of random points in the unit square, edges up to `radius`.
fn build_rips(n: u32, radius: f64, max_dim: usize) -> SimplexTree<u32, f64> {
    let mut rng = SmallRng::seed_from_u64(42);
    let pts: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            let (a, b) = (pts[u as usize], pts[v as usize]);
            let d = ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt();
            if d <= radius {
                edges.push((u, v, d));
            }
        }
    }
    let mut st = SimplexTree::new();
    st.insert_graph((0..n).map(|v| (v, 0.0)), edges);
    st.expansion(max_dim);
    st
}

fn bench_filtration(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplex_tree");

    for &n in &[200u32, 400u32] {
        let st = build_rips(n, 0.15, 3);

        group.bench_with_input(BenchmarkId::new("filtration_index", n), &n, |b, _| {
            let mut st = st.clone();
            b.iter(|| {
                st.initialize_filtration();
                black_box(st.filtration_simplex_range().len());
            });
        });

        group.bench_with_input(BenchmarkId::new("star_all_vertices", n), &n, |b, _| {
            b.iter(|| {
                let mut total = 0usize;
                for v in st.complex_vertex_range() {
                    if let Some(sh) = st.find_vertex(v) {
                        total += st.star_simplex_range(sh).len();
                    }
                }
                black_box(total);
            });
        });

        group.bench_with_input(BenchmarkId::new("rips_build", n), &n, |b, &n| {
            b.iter(|| black_box(build_rips(n, 0.15, 3).num_simplices()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filtration);
criterion_main!(benches);
