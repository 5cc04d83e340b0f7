// Removal and pruning tests for SimplexTree
use crate::debug_invariants::DebugInvariants;
use crate::topology::tree::SimplexTree;

type St = SimplexTree<u32, f64>;

fn graded_triangle() -> St {
    let mut st = St::new();
    for v in 0..3 {
        st.insert_simplex([v], 0.1);
    }
    for e in [[1, 0], [2, 0], [2, 1]] {
        st.insert_simplex(e, 0.2);
    }
    st.insert_simplex([2, 1, 0], 0.3);
    st
}

#[test]
fn remove_maximal_simplex() {
    let mut st = graded_triangle();
    let edge = st.find([2, 1]).unwrap();
    assert!(!st.remove_maximal_simplex(edge), "edge still has a coface");
    let top = st.find([2, 1, 0]).unwrap();
    assert!(st.remove_maximal_simplex(top));
    assert!(!st.contains(top));
    assert!(!st.remove_maximal_simplex(top));
    assert!(!st.has_children(edge));
    assert_eq!(st.num_simplices(), 6);
    assert_eq!(st.dimension(), Some(2));
    assert_eq!(st.recompute_dimension(), Some(1));
    st.validate_invariants().unwrap();

    assert!(st.remove_maximal_simplex(edge));
    assert!(st.find([2, 1]).is_none());
    st.validate_invariants().unwrap();
}

#[test]
fn remove_last_child_drops_its_list() {
    let mut st = St::new();
    st.insert_simplex_and_subfaces([1, 0], 0.0);
    let e = st.find([1, 0]).unwrap();
    let list = e.siblings();
    assert!(st.remove_maximal_simplex(e));
    assert!(st.siblings(list).is_none());
    assert!(!st.has_children(st.find([1]).unwrap()));
}

#[test]
fn prune_above_filtration() {
    let mut st = graded_triangle();
    assert!(!st.prune_above_filtration(0.3));
    assert!(st.prune_above_filtration(0.2));
    assert!(st.find([2, 1, 0]).is_none());
    assert_eq!(st.num_simplices(), 6);
    assert!(!st.prune_above_filtration(0.2));

    assert!(st.prune_above_filtration(0.1));
    assert_eq!(st.num_simplices(), 3);
    assert!(st.complex_simplex_range().all(|sh| !st.has_children(sh)));
    st.validate_invariants().unwrap();

    assert!(st.prune_above_filtration(0.0));
    assert!(st.is_empty());
    assert_eq!(st.dimension(), Some(2));
    st.validate_invariants().unwrap();
}

#[test]
fn prune_drops_whole_subtrees() {
    let mut st = St::new();
    st.insert_simplex_and_subfaces([3, 2, 1, 0], 0.0);
    let v3 = st.find([3]).unwrap();
    st.assign_filtration(v3, 1.0);
    assert!(st.prune_above_filtration(0.5));
    assert_eq!(st.num_simplices(), 7);
    assert!(st.find([3, 0]).is_none());
    st.validate_invariants().unwrap();
}
