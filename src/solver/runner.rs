//! Solver facade: one entry point per algorithm over a single instance.

use log::warn;

use super::config::{GuardPolicy, SolverConfig};
use super::types::{Algorithm, ResourceAdvisory, Solution};
use crate::brute_force::BruteForceRunner;
use crate::dp::{DpRunner, DpTable, MemoRunner};
use crate::greedy::{FractionalResult, GreedyRunner};
use crate::instance::{KnapsackError, KnapsackInstance, ZeroOneResult};

/// Holds a validated instance and dispatches to the algorithms.
///
/// The solver keeps no state between calls: every DP table and memo cache
/// is allocated by the call that uses it and dropped on return, so
/// repeated calls are deterministic and independent.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::KnapsackInstance;
/// use u_knapsack::solver::{Algorithm, KnapsackSolver};
///
/// let instance = KnapsackInstance::new(&[10, 20, 30], &[60, 100, 120], 50).unwrap();
/// let solver = KnapsackSolver::new(instance);
///
/// let optimal = solver.solve(Algorithm::ZeroOneDp).unwrap();
/// let greedy = solver.solve(Algorithm::ZeroOneGreedy).unwrap();
/// assert_eq!(optimal.value(), 220.0);
/// assert_eq!(greedy.value(), 160.0);
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackSolver {
    instance: KnapsackInstance,
    config: SolverConfig,
}

impl KnapsackSolver {
    /// A solver with the default configuration.
    pub fn new(instance: KnapsackInstance) -> Self {
        Self {
            instance,
            config: SolverConfig::default(),
        }
    }

    /// Validates signed front-end input and builds a solver.
    pub fn from_parts(
        weights: &[i64],
        values: &[i64],
        capacity: i64,
    ) -> Result<Self, KnapsackError> {
        KnapsackInstance::from_signed(weights, values, capacity).map(Self::new)
    }

    /// Replaces the configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        config.validate().expect("invalid SolverConfig");
        self.config = config;
        self
    }

    pub fn instance(&self) -> &KnapsackInstance {
        &self.instance
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Checks `algorithm` against the configured limits without running it.
    pub fn advisory(&self, algorithm: Algorithm) -> Option<ResourceAdvisory> {
        let (estimated, limit) = match algorithm {
            Algorithm::Fractional | Algorithm::ZeroOneGreedy => return None,
            Algorithm::ZeroOneBruteForce => (
                self.instance.len() as u128,
                self.config.brute_force_item_limit as u128,
            ),
            Algorithm::ZeroOneDp => (
                DpTable::cell_count(&self.instance),
                self.config.dp_cell_limit as u128,
            ),
            Algorithm::ZeroOneMemo => (
                MemoRunner::state_bound(&self.instance),
                self.config.dp_cell_limit as u128,
            ),
        };
        (estimated > limit).then_some(ResourceAdvisory {
            algorithm,
            estimated,
            limit,
        })
    }

    fn guard(&self, algorithm: Algorithm) -> Result<(), KnapsackError> {
        let Some(advisory) = self.advisory(algorithm) else {
            return Ok(());
        };
        match self.config.guard {
            GuardPolicy::Warn => {
                warn!("{advisory}");
                Ok(())
            }
            GuardPolicy::Block => Err(match algorithm {
                Algorithm::ZeroOneBruteForce => KnapsackError::TooManyItems {
                    items: self.instance.len(),
                    limit: self.config.brute_force_item_limit,
                },
                _ => KnapsackError::TableTooLarge {
                    cells: advisory.estimated,
                    limit: advisory.limit,
                },
            }),
        }
    }

    /// Fractional greedy (optimal for the relaxation).
    pub fn fractional(&self) -> FractionalResult {
        GreedyRunner::fractional(&self.instance)
    }

    /// 0/1 greedy approximation. Not optimal.
    pub fn zero_one_greedy(&self) -> ZeroOneResult {
        GreedyRunner::zero_one(&self.instance)
    }

    /// Exact 0/1 optimum by subset enumeration.
    pub fn brute_force(&self) -> Result<ZeroOneResult, KnapsackError> {
        self.guard(Algorithm::ZeroOneBruteForce)?;
        BruteForceRunner::run(&self.instance)
    }

    /// Exact 0/1 optimum by bottom-up DP.
    pub fn dynamic_programming(&self) -> Result<ZeroOneResult, KnapsackError> {
        self.guard(Algorithm::ZeroOneDp)?;
        DpRunner::run(&self.instance)
    }

    /// Exact 0/1 optimum by memoized top-down DP.
    pub fn memoized(&self) -> Result<ZeroOneResult, KnapsackError> {
        self.guard(Algorithm::ZeroOneMemo)?;
        Ok(MemoRunner::run(&self.instance))
    }

    /// Runs `algorithm`.
    pub fn solve(&self, algorithm: Algorithm) -> Result<Solution, KnapsackError> {
        Ok(match algorithm {
            Algorithm::Fractional => Solution::Fractional(self.fractional()),
            Algorithm::ZeroOneGreedy => Solution::ZeroOne(self.zero_one_greedy()),
            Algorithm::ZeroOneBruteForce => Solution::ZeroOne(self.brute_force()?),
            Algorithm::ZeroOneDp => Solution::ZeroOne(self.dynamic_programming()?),
            Algorithm::ZeroOneMemo => Solution::ZeroOne(self.memoized()?),
        })
    }
}

/// Validates the input and runs `algorithm` with the default configuration.
///
/// # Errors
///
/// Any input violation is reported before an algorithm starts:
/// mismatched lengths, a weight `<= 0`, a negative value or a negative
/// capacity.
///
/// # Examples
///
/// ```
/// use u_knapsack::solver::{solve, Algorithm};
///
/// let solution = solve(&[3, 2, 2], &[5, 3, 3], 4, Algorithm::ZeroOneMemo).unwrap();
/// assert_eq!(solution.value(), 6.0);
/// assert!(solve(&[1], &[1], -1, Algorithm::ZeroOneDp).is_err());
/// ```
pub fn solve(
    weights: &[i64],
    values: &[i64],
    capacity: i64,
    algorithm: Algorithm,
) -> Result<Solution, KnapsackError> {
    KnapsackSolver::from_parts(weights, values, capacity)?.solve(algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> KnapsackSolver {
        KnapsackSolver::from_parts(&[10, 20, 30], &[60, 100, 120], 50).unwrap()
    }

    #[test]
    fn test_textbook_all_algorithms() {
        let solver = textbook();
        let values: Vec<f64> = Algorithm::ALL
            .iter()
            .map(|&a| solver.solve(a).unwrap().value())
            .collect();
        assert!((values[0] - 240.0).abs() < 1e-9, "fractional {}", values[0]);
        assert_eq!(&values[1..], &[160.0, 220.0, 220.0, 220.0]);
    }

    #[test]
    fn test_exact_selections_agree() {
        let solver = textbook();
        let brute = solver.brute_force().unwrap();
        let dp = solver.dynamic_programming().unwrap();
        let memo = solver.memoized().unwrap();
        assert_eq!(brute.selection.indices(), vec![1, 2]);
        assert_eq!(dp.selection, brute.selection);
        assert_eq!(memo.selection, brute.selection);
    }

    #[test]
    fn test_solution_accessors() {
        let solver = textbook();
        let fractional = solver.solve(Algorithm::Fractional).unwrap();
        assert!(fractional.as_fractional().is_some());
        assert!(fractional.as_zero_one().is_none());
        let dp = solver.solve(Algorithm::ZeroOneDp).unwrap();
        assert_eq!(dp.as_zero_one().map(|r| r.total_weight), Some(50));
    }

    #[test]
    fn test_capacity_zero_all_algorithms() {
        let solver = KnapsackSolver::from_parts(&[1, 2, 3], &[4, 5, 6], 0).unwrap();
        for algorithm in Algorithm::ALL {
            let solution = solver.solve(algorithm).unwrap();
            assert_eq!(solution.value(), 0.0, "{algorithm}");
            match solution {
                Solution::Fractional(r) => assert!(r.selection.is_empty()),
                Solution::ZeroOne(r) => assert!(r.selection.is_empty(), "{algorithm}"),
            }
        }
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(matches!(
            solve(&[1, 2], &[1], 5, Algorithm::ZeroOneDp),
            Err(KnapsackError::LengthMismatch { .. })
        ));
        assert!(matches!(
            solve(&[0], &[1], 5, Algorithm::Fractional),
            Err(KnapsackError::NonPositiveWeight { .. })
        ));
        assert!(matches!(
            solve(&[1], &[-1], 5, Algorithm::ZeroOneGreedy),
            Err(KnapsackError::NegativeValue { .. })
        ));
        assert!(matches!(
            solve(&[1], &[1], -5, Algorithm::ZeroOneMemo),
            Err(KnapsackError::NegativeCapacity(-5))
        ));
    }

    #[test]
    fn test_advisory_thresholds() {
        let solver = KnapsackSolver::from_parts(&[1; 5], &[1; 5], 100)
            .unwrap()
            .with_config(
                SolverConfig::default()
                    .with_brute_force_item_limit(4)
                    .with_dp_cell_limit(500),
            );
        assert!(solver.advisory(Algorithm::Fractional).is_none());
        assert!(solver.advisory(Algorithm::ZeroOneGreedy).is_none());

        let brute = solver.advisory(Algorithm::ZeroOneBruteForce).unwrap();
        assert_eq!((brute.estimated, brute.limit), (5, 4));

        let dp = solver.advisory(Algorithm::ZeroOneDp).unwrap();
        assert_eq!((dp.estimated, dp.limit), (606, 500));

        // at most 2^6 - 1 tree nodes
        assert!(solver.advisory(Algorithm::ZeroOneMemo).is_none());
    }

    #[test]
    fn test_warn_policy_still_runs() {
        let solver = KnapsackSolver::from_parts(&[1, 2, 3], &[1, 2, 3], 3)
            .unwrap()
            .with_config(SolverConfig::default().with_brute_force_item_limit(1));
        let result = solver.brute_force().unwrap();
        assert_eq!(result.value, 3);
    }

    #[test]
    fn test_block_policy_refuses() {
        let solver = KnapsackSolver::from_parts(&[1, 2, 3], &[1, 2, 3], 1000)
            .unwrap()
            .with_config(
                SolverConfig::default()
                    .with_brute_force_item_limit(2)
                    .with_dp_cell_limit(100)
                    .with_guard(GuardPolicy::Block),
            );
        assert_eq!(
            solver.brute_force().unwrap_err(),
            KnapsackError::TooManyItems { items: 3, limit: 2 }
        );
        assert_eq!(
            solver.dynamic_programming().unwrap_err(),
            KnapsackError::TableTooLarge {
                cells: 4004,
                limit: 100
            }
        );
        assert!(solver.memoized().is_ok());
        assert!(solver.solve(Algorithm::ZeroOneGreedy).is_ok());
    }

    #[test]
    fn test_block_policy_refuses_memo() {
        // table 5 * 101 = 505 cells, recursion tree 2^5 - 1 = 31 states
        let solver = KnapsackSolver::from_parts(&[1; 4], &[1; 4], 100)
            .unwrap()
            .with_config(
                SolverConfig::default()
                    .with_dp_cell_limit(10)
                    .with_guard(GuardPolicy::Block),
            );
        let advisory = solver.advisory(Algorithm::ZeroOneMemo).unwrap();
        assert_eq!(advisory.estimated, 31);
        assert_eq!(advisory.limit, 10);
        assert_eq!(
            solver.memoized().unwrap_err(),
            KnapsackError::TableTooLarge {
                cells: 31,
                limit: 10
            }
        );
        assert!(solver.solve(Algorithm::ZeroOneMemo).is_err());
    }

    #[test]
    #[should_panic(expected = "invalid SolverConfig")]
    fn test_invalid_config_panics() {
        let _ = textbook().with_config(SolverConfig::default().with_dp_cell_limit(0));
    }
}
