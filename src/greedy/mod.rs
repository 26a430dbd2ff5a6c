//! Greedy knapsack algorithms.
//!
//! Both variants sweep the items in descending unit value
//! (`value / weight`), ties broken by ascending index.
//!
//! - [`GreedyRunner::fractional`] solves the fractional relaxation
//!   optimally: whole items are taken while they fit, then a fraction of
//!   the first item that does not.
//! - [`GreedyRunner::zero_one`] is only an **approximation** for the 0/1
//!   problem. Items that do not fit are skipped and never revisited, so the
//!   result can be arbitrarily far from optimal
//!   (see [`crate::counterexample`]).
//!
//! # References
//!
//! - Dantzig, G. B. (1957). "Discrete-Variable Extremum Problems",
//!   *Operations Research* 5(2), 266-288.

mod runner;
mod types;

pub use runner::{unit_value_order, GreedyRunner};
pub use types::{FractionalResult, FractionalSelection};
