use proptest::prelude::*;
use proptest::strategy::Strategy as _;
use shortcut::{compute, compute_with, transpose, DistanceMatrix, StepConfig, Strategy};

const INF: f32 = f32::INFINITY;

fn all_strategies() -> Vec<Strategy> {
    let mut strategies = Strategy::ALL.to_vec();
    for width in [1, 2, 8, 12, 16] {
        strategies.push(Strategy::Ilp { width });
        strategies.push(Strategy::Parallel { width });
    }
    strategies
}

fn assert_same(expected: &DistanceMatrix, actual: &DistanceMatrix, name: &str) {
    assert_eq!(expected.n(), actual.n(), "{}: size mismatch", name);
    for (idx, (x, y)) in expected.as_slice().iter().zip(actual.as_slice()).enumerate() {
        assert!(
            x == y,
            "{}: mismatch at ({}, {}): expected {}, got {}",
            name,
            idx / expected.n(),
            idx % expected.n(),
            x,
            y
        );
    }
}

// ============================================================
// Fixed scenarios
// ============================================================

#[test]
fn test_three_node_example() {
    let d = DistanceMatrix::from_vec(3, vec![0., 8., 2., 1., 0., 9., 4., 5., 0.]).unwrap();
    let expected = DistanceMatrix::from_vec(3, vec![0., 7., 2., 1., 0., 3., 4., 5., 0.]).unwrap();
    for strategy in all_strategies() {
        assert_same(&expected, &compute(&d, strategy).unwrap(), &strategy.to_string());
    }
}

#[test]
fn test_single_node() {
    let d = DistanceMatrix::from_vec(1, vec![0.0]).unwrap();
    for strategy in all_strategies() {
        assert_eq!(compute(&d, strategy).unwrap().as_slice(), &[0.0]);
    }
}

#[test]
fn test_padding_sizes_match_baseline() {
    for n in [1, 7, 8, 9, 10, 15, 16, 17] {
        let d = DistanceMatrix::random_seeded(n, 1.0..20.0, n as u64).unwrap();
        let expected = compute(&d, Strategy::Baseline).unwrap();
        for strategy in all_strategies() {
            assert_same(&expected, &compute(&d, strategy).unwrap(), &format!("{} n={}", strategy, n));
        }
    }
}

#[test]
fn test_larger_random_inputs() {
    for n in [63, 100, 129] {
        let d = DistanceMatrix::random_seeded(n, 1.0..20.0, 1000 + n as u64).unwrap();
        let expected = compute(&d, Strategy::Baseline).unwrap();
        for strategy in Strategy::ALL {
            assert_same(&expected, &compute(&d, strategy).unwrap(), &format!("{} n={}", strategy, n));
        }
    }
}

#[test]
fn test_isolated_node_stays_unreachable() {
    let n = 11;
    let mut d = DistanceMatrix::random_seeded(n, 1.0..20.0, 3).unwrap();
    for k in 0..n {
        if k != 5 {
            d[(5, k)] = INF;
            d[(k, 5)] = INF;
        }
    }
    for strategy in all_strategies() {
        let r = compute(&d, strategy).unwrap();
        for k in 0..n {
            let expected = if k == 5 { 0.0 } else { INF };
            assert_eq!(r[(5, k)], expected, "{}", strategy);
            assert_eq!(r[(k, 5)], expected, "{}", strategy);
        }
    }
}

#[test]
fn test_thread_count_invariance() {
    let n = 97;
    let d = DistanceMatrix::random_seeded(n, 1.0..20.0, 9).unwrap();
    for strategy in [Strategy::Parallel { width: 4 }, Strategy::Parallel { width: 12 }, Strategy::Simd] {
        let single = compute_with(&d, strategy, &StepConfig::with_threads(1)).unwrap();
        for threads in [2, 4, 7] {
            let many = compute_with(&d, strategy, &StepConfig::with_threads(threads)).unwrap();
            assert_same(&single, &many, &format!("{} threads={}", strategy, threads));
        }
    }
}

#[test]
fn test_slice_interface_rejects_mismatched_buffers() {
    let d = vec![0.0f32; 9];
    let mut r = vec![0.0f32; 10];
    for strategy in all_strategies() {
        assert!(strategy.step(&mut r, &d, 3).is_err(), "{}", strategy);
    }
}

// ============================================================
// Properties
// ============================================================

fn weight() -> impl proptest::strategy::Strategy<Value = f32> {
    prop_oneof![
        4 => (0u32..10_000).prop_map(|x| x as f32 / 100.0),
        1 => Just(INF),
    ]
}

/// Square matrix with a zero diagonal
fn distance_matrix(max_n: usize) -> impl proptest::strategy::Strategy<Value = DistanceMatrix> {
    (1..=max_n)
        .prop_flat_map(|n| (Just(n), proptest::collection::vec(weight(), n * n)))
        .prop_map(|(n, data)| {
            let mut d = DistanceMatrix::from_vec(n, data).unwrap();
            for i in 0..n {
                d[(i, i)] = 0.0;
            }
            d
        })
}

/// Mirror the upper triangle into the lower one
fn symmetrize(mut d: DistanceMatrix) -> DistanceMatrix {
    for i in 0..d.n() {
        for j in 0..i {
            d[(i, j)] = d[(j, i)];
        }
    }
    d
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_every_strategy_matches_baseline(d in distance_matrix(24)) {
        let expected = compute(&d, Strategy::Baseline).unwrap();
        for strategy in all_strategies() {
            let r = compute(&d, strategy).unwrap();
            prop_assert_eq!(r.as_slice(), expected.as_slice(), "{}", strategy);
        }
    }

    #[test]
    fn prop_transpose_is_an_involution(d in distance_matrix(24)) {
        prop_assert_eq!(transpose(&transpose(&d).unwrap()).unwrap(), d);
    }

    #[test]
    fn prop_shortcut_never_worse_than_direct_edge(d in distance_matrix(24)) {
        let n = d.n();
        let r = compute(&d, Strategy::Simd).unwrap();
        for i in 0..n {
            for j in 0..n {
                prop_assert!(r[(i, j)] <= d[(i, j)]);
            }
        }
    }

    #[test]
    fn prop_symmetric_input_gives_symmetric_output(d in distance_matrix(24).prop_map(symmetrize)) {
        prop_assert!(d.is_symmetric());
        for strategy in Strategy::ALL {
            prop_assert!(compute(&d, strategy).unwrap().is_symmetric(), "{}", strategy);
        }
    }
}
