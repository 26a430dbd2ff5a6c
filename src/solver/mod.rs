//! Unified solving interface.
//!
//! [`KnapsackSolver`] holds one validated instance and exposes one entry
//! point per [`Algorithm`], plus [`KnapsackSolver::solve`] to dispatch by
//! value. The free function [`solve`] is the boundary used by front ends:
//! it validates signed input, then runs the chosen algorithm.
//!
//! Expensive runs are detected before they start (see [`SolverConfig`]):
//! brute force above an item-count limit, DP above a table-size limit.
//! Depending on [`GuardPolicy`] the solver logs a warning or refuses.

mod config;
mod runner;
mod types;

pub use config::{GuardPolicy, SolverConfig};
pub use runner::{solve, KnapsackSolver};
pub use types::{Algorithm, ResourceAdvisory, Solution};
