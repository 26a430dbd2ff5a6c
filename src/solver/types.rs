//! Algorithm selection, solutions and resource advisories.

use std::fmt;

use crate::greedy::FractionalResult;
use crate::instance::ZeroOneResult;

/// The five solving algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Greedy on the fractional relaxation (optimal for that relaxation).
    Fractional,
    /// Greedy 0/1 approximation (not optimal).
    ZeroOneGreedy,
    /// Exhaustive 0/1 enumeration (exact, exponential).
    ZeroOneBruteForce,
    /// Bottom-up 0/1 dynamic programming (exact, pseudo-polynomial).
    ZeroOneDp,
    /// Memoized top-down 0/1 dynamic programming (exact, pseudo-polynomial).
    ZeroOneMemo,
}

impl Algorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fractional,
        Algorithm::ZeroOneGreedy,
        Algorithm::ZeroOneBruteForce,
        Algorithm::ZeroOneDp,
        Algorithm::ZeroOneMemo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fractional => "fractional greedy",
            Algorithm::ZeroOneGreedy => "0/1 greedy",
            Algorithm::ZeroOneBruteForce => "0/1 brute force",
            Algorithm::ZeroOneDp => "0/1 dynamic programming",
            Algorithm::ZeroOneMemo => "0/1 memoized dynamic programming",
        }
    }

    /// Whether the algorithm is guaranteed optimal for the problem it solves.
    /// Only the 0/1 greedy is not.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::ZeroOneGreedy)
    }

    /// Whether the algorithm solves the 0/1 problem (whole items only).
    pub fn is_zero_one(self) -> bool {
        !matches!(self, Algorithm::Fractional)
    }

    /// Asymptotic running time.
    pub fn time_complexity(self) -> &'static str {
        match self {
            Algorithm::Fractional | Algorithm::ZeroOneGreedy => "O(n log n)",
            Algorithm::ZeroOneBruteForce => "O(2^n)",
            Algorithm::ZeroOneDp | Algorithm::ZeroOneMemo => "O(n * capacity)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of [`KnapsackSolver::solve`](super::KnapsackSolver::solve).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Solution {
    Fractional(FractionalResult),
    ZeroOne(ZeroOneResult),
}

impl Solution {
    /// Total value as a real number, for display and comparison across
    /// variants. 0/1 values above `2^53` are rounded; read
    /// `as_zero_one().map(|r| r.value)` for the exact integer.
    pub fn value(&self) -> f64 {
        match self {
            Solution::Fractional(r) => r.value,
            Solution::ZeroOne(r) => r.value as f64,
        }
    }

    pub fn as_fractional(&self) -> Option<&FractionalResult> {
        match self {
            Solution::Fractional(r) => Some(r),
            Solution::ZeroOne(_) => None,
        }
    }

    pub fn as_zero_one(&self) -> Option<&ZeroOneResult> {
        match self {
            Solution::ZeroOne(r) => Some(r),
            Solution::Fractional(_) => None,
        }
    }
}

/// A prediction that a run will exceed the configured limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceAdvisory {
    pub algorithm: Algorithm,
    /// Items (brute force) or table cells / memo states (DP variants).
    pub estimated: u128,
    /// The configured limit that `estimated` exceeds.
    pub limit: u128,
}

impl fmt::Display for ResourceAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.algorithm {
            Algorithm::ZeroOneBruteForce => "items",
            _ => "states",
        };
        write!(
            f,
            "{} on {} {unit} exceeds the limit of {}; runtime is {}",
            self.algorithm,
            self.estimated,
            self.limit,
            self.algorithm.time_complexity()
        )
    }
}
