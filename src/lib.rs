//! Knapsack problem solving engine.
//!
//! Five interchangeable algorithms over the same [`instance::KnapsackInstance`]:
//!
//! - **Fractional greedy**: optimal for the fractional relaxation, where
//!   items may be split. Sorts by unit value and takes a fraction of the
//!   first item that does not fit whole.
//! - **0/1 greedy**: the same sweep without splitting. An approximation
//!   only; see [`counterexample`] for an instance where it loses.
//! - **0/1 brute force**: enumerates all `2^n` subsets. Exact, exponential.
//! - **0/1 dynamic programming**: bottom-up table over `(item, capacity)`
//!   with backtracking reconstruction. Exact, `O(n * capacity)`.
//! - **0/1 memoized DP**: the same recurrence top-down, evaluating only
//!   reachable states.
//!
//! # Architecture
//!
//! Inputs are validated once, when the instance is built; algorithms never
//! see invalid data. Every algorithm is synchronous and deterministic, and
//! each call owns whatever table or cache it allocates. The [`solver`]
//! module ties the algorithms to a single entry point and guards runs that
//! are predicted to be expensive.
//!
//! The crate logs through the `log` facade and installs no logger.

pub mod brute_force;
pub mod counterexample;
pub mod dp;
pub mod greedy;
pub mod instance;
pub mod solver;
