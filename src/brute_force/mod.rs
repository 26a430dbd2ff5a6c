//! Exhaustive 0/1 enumeration.
//!
//! Examines all `2^n` subsets through an `n`-bit mask and keeps the first
//! feasible subset with the highest value. Exact, but exponential: callers
//! should guard large `n` (see [`crate::solver::SolverConfig`]).

mod runner;

pub use runner::{BruteForceRunner, MAX_ENUMERABLE_ITEMS};
