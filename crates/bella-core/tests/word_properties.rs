//! Property tests over words in a free two-generator group.
//!
//! The generators have small integer entries, so products of short words
//! stay exact in `f64`.

use std::collections::HashSet;

use bella_core::{seeded_rng, GroupCache, Word};
use bella_linalg::Matrix2;
use bella_types::Side;
use proptest::prelude::*;

fn free_two() -> GroupCache<f64> {
    let a = Matrix2::from_rows([[1.0, 2.0], [0.0, 1.0]]);
    let b = Matrix2::from_rows([[1.0, 0.0], [2.0, 1.0]]);
    GroupCache::new(vec![a, b], vec![]).unwrap()
}

fn with_relator() -> GroupCache<f64> {
    let a = Matrix2::from_rows([[0.0, -1.0], [1.0, 0.0]]);
    let b = Matrix2::from_rows([[1.0, 1.0], [0.0, 1.0]]);
    GroupCache::new(vec![a, b], vec![vec![0, 0, 0, 0], vec![0, 1, 0, 1]]).unwrap()
}

fn word_strategy(max_len: usize) -> impl Strategy<Value = Word> {
    prop::collection::vec(0usize..4, 0..=max_len)
}

proptest! {
    #[test]
    fn test_inv_is_involution(n in 1usize..6) {
        let gens = vec![Matrix2::from_rows([[1.0, 1.0], [0.0, 1.0]]); n];
        let g = GroupCache::new(gens, vec![]).unwrap();
        for x in 0..g.alphabet_size() {
            prop_assert_eq!(g.inv(g.inv(x)), x);
            prop_assert_ne!(g.inv(x), x);
        }
    }

    #[test]
    fn test_inv_word_is_involution(w in word_strategy(10)) {
        let g = free_two();
        prop_assert_eq!(g.inv_word(&g.inv_word(&w)), w);
    }

    #[test]
    fn test_word_times_inverse_is_identity(w in word_strategy(8)) {
        let g = free_two();
        let prod = &g.evaluate(&w) * &g.evaluate(&g.inv_word(&w));
        prop_assert!(prod.approx_eq(&Matrix2::identity(), 1e-9), "{:?}", prod);
    }

    #[test]
    fn test_evaluate_is_multiplicative(u in word_strategy(5), v in word_strategy(5)) {
        let g = free_two();
        let mut uv = u.clone();
        uv.extend_from_slice(&v);
        let expected = &g.evaluate(&u) * &g.evaluate(&v);
        prop_assert!(g.evaluate(&uv).approx_eq(&expected, 1e-9));
    }

    #[test]
    fn test_free_neighbour_count(w in word_strategy(8)) {
        let g = free_two();
        let expected = if w.is_empty() { 4 } else { 3 };
        for side in [Side::Left, Side::Right] {
            let n: HashSet<Word> = g.free_cayley_graph_locally(&w, side).collect();
            prop_assert_eq!(n.len(), expected);
        }
    }

    #[test]
    fn test_reduced_neighbours_subset_of_free(w in word_strategy(6)) {
        let g = with_relator();
        let free: HashSet<Word> = g.free_cayley_graph_locally(&w, Side::Left).collect();
        let reduced: HashSet<Word> = g.cayley_graph_locally(&w).collect();
        prop_assert!(reduced.is_subset(&free));
    }

    #[test]
    fn test_backtrack_prefix_never_reduced(x in 0usize..4, w in word_strategy(6)) {
        let g = free_two();
        let mut word = vec![x, g.inv(x)];
        word.extend_from_slice(&w);
        prop_assert!(!g.is_reduced_from_left(&word));
    }

    #[test]
    fn test_free_mc_yields_count_times_depth(depth in 1usize..12, count in 1usize..20, seed in any::<u64>()) {
        let g = free_two();
        let words: Vec<Word> = g
            .free_cayley_graph_mc(depth, count, Side::Left, seeded_rng(seed))
            .collect();
        prop_assert_eq!(words.len(), depth * count);
        prop_assert!(words.iter().all(|w| !w.is_empty() && w.len() <= depth));
    }
}

#[test]
fn test_reduced_bfs_subset_of_free_bfs() {
    let g = with_relator();
    let free: HashSet<Word> = g.free_cayley_graph_bfs(5).collect();
    let reduced: Vec<Word> = g.cayley_graph_bfs(5).collect();
    assert!(reduced.iter().all(|w| free.contains(w)));
    assert!(reduced.len() < free.len());
    assert!(!reduced.contains(&vec![0, 0, 0, 0]));
}

#[test]
fn test_mc_is_reproducible_from_seed() {
    let g = free_two();
    let run = |seed| -> Vec<Word> { g.cayley_graph_mc(10, 5, true, seeded_rng(seed)).collect() };
    assert_eq!(run(9), run(9));
}
