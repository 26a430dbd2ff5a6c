//! Cross-algorithm properties on random instances.

use proptest::prelude::*;
use u_knapsack::brute_force::BruteForceRunner;
use u_knapsack::counterexample::GreedyCounterexample;
use u_knapsack::dp::{DpRunner, MemoRunner};
use u_knapsack::greedy::GreedyRunner;
use u_knapsack::instance::{InstanceGenerator, KnapsackInstance};
use u_knapsack::solver::{solve, Algorithm, KnapsackSolver, Solution};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn instance_strategy() -> impl Strategy<Value = KnapsackInstance> {
    (0usize..=10)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(1u64..=20, n),
                prop::collection::vec(0u64..=50, n),
                0u64..=100,
            )
        })
        .prop_map(|(weights, values, capacity)| {
            KnapsackInstance::new(&weights, &values, capacity).unwrap()
        })
}

proptest! {
    #[test]
    fn exact_algorithms_agree(instance in instance_strategy()) {
        let brute = BruteForceRunner::run(&instance).unwrap();
        let dp = DpRunner::run(&instance).unwrap();
        let memo = MemoRunner::run(&instance);
        prop_assert_eq!(brute.value, dp.value);
        prop_assert_eq!(dp.value, memo.value);
        prop_assert_eq!(&dp.selection, &memo.selection);
    }

    #[test]
    fn selections_are_feasible_and_consistent(instance in instance_strategy()) {
        let results = [
            GreedyRunner::zero_one(&instance),
            BruteForceRunner::run(&instance).unwrap(),
            DpRunner::run(&instance).unwrap(),
            MemoRunner::run(&instance),
        ];
        for result in &results {
            prop_assert!(result.selection.is_feasible(&instance));
            prop_assert!(result.total_weight <= instance.capacity());
            prop_assert_eq!(result.value, result.selection.value(&instance));
            prop_assert_eq!(result.total_weight, result.selection.weight(&instance));
        }
    }

    #[test]
    fn fractional_is_upper_bound(instance in instance_strategy()) {
        let fractional = GreedyRunner::fractional(&instance);
        let dp = DpRunner::run(&instance).unwrap();
        prop_assert!(
            fractional.value + 1e-9 >= dp.value as f64,
            "relaxation {} below integer optimum {}",
            fractional.value,
            dp.value
        );
    }

    #[test]
    fn greedy_is_lower_bound(instance in instance_strategy()) {
        let greedy = GreedyRunner::zero_one(&instance);
        let dp = DpRunner::run(&instance).unwrap();
        prop_assert!(greedy.value <= dp.value);
    }

    #[test]
    fn fractional_selection_shape(instance in instance_strategy()) {
        let result = GreedyRunner::fractional(&instance);
        let entries = result.selection.entries();
        for (k, &(index, fraction)) in entries.iter().enumerate() {
            prop_assert!(index < instance.len());
            prop_assert!(fraction > 0.0 && fraction <= 1.0);
            if k + 1 < entries.len() {
                prop_assert_eq!(fraction, 1.0);
            }
        }
        prop_assert!(result.selection.weight(&instance) <= instance.capacity() as f64 + 1e-9);
        let value: f64 = entries
            .iter()
            .map(|&(i, f)| instance.item(i).value as f64 * f)
            .sum();
        prop_assert!((value - result.value).abs() < 1e-6);
    }

    #[test]
    fn repeated_solves_are_identical(instance in instance_strategy()) {
        let solver = KnapsackSolver::new(instance);
        for algorithm in Algorithm::ALL {
            let first = solver.solve(algorithm).unwrap();
            let second = solver.solve(algorithm).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}

#[test]
fn textbook_scenario() {
    init_logger();
    let weights = [10, 20, 30];
    let values = [60, 100, 120];

    for algorithm in [Algorithm::ZeroOneBruteForce, Algorithm::ZeroOneDp, Algorithm::ZeroOneMemo] {
        let solution = solve(&weights, &values, 50, algorithm).unwrap();
        let result = solution.as_zero_one().unwrap();
        assert_eq!(result.value, 220, "{algorithm}");
        assert_eq!(result.selection.indices(), vec![1, 2], "{algorithm}");
    }

    let fractional = solve(&weights, &values, 50, Algorithm::Fractional).unwrap();
    assert!((fractional.value() - 240.0).abs() < 1e-9);

    let greedy = solve(&weights, &values, 50, Algorithm::ZeroOneGreedy).unwrap();
    assert_eq!(greedy.value(), 160.0);
}

#[test]
fn single_item_heavier_than_capacity() {
    init_logger();
    for algorithm in Algorithm::ALL {
        match solve(&[8], &[40], 2, algorithm).unwrap() {
            Solution::ZeroOne(result) => {
                assert_eq!(result.value, 0, "{algorithm}");
                assert!(result.selection.is_empty(), "{algorithm}");
            }
            Solution::Fractional(result) => {
                assert_eq!(result.selection.entries(), &[(0, 0.25)]);
                assert!((result.value - 10.0).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn canonical_counterexample_gap() {
    init_logger();
    let example = GreedyCounterexample::canonical();
    assert_eq!(example.greedy.value, 5);
    assert_eq!(example.optimal.value, 6);
    assert!(example.greedy.value < example.optimal.value);

    let memo = MemoRunner::run(&example.instance);
    let brute = BruteForceRunner::run(&example.instance).unwrap();
    assert_eq!(memo.value, 6);
    assert_eq!(brute.value, 6);
}

#[test]
fn generated_instances_cross_validate() {
    init_logger();
    for seed in 0..20 {
        let instance = InstanceGenerator::default()
            .with_num_items(14)
            .with_seed(seed)
            .generate()
            .unwrap();
        let brute = BruteForceRunner::run(&instance).unwrap();
        let dp = DpRunner::run(&instance).unwrap();
        let memo = MemoRunner::run(&instance);
        assert_eq!(brute.value, dp.value, "seed {seed}");
        assert_eq!(dp.value, memo.value, "seed {seed}");
        assert!(memo.evaluations <= dp.evaluations, "seed {seed}");
    }
}
