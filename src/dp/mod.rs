//! Exact 0/1 knapsack by dynamic programming.
//!
//! Both solvers evaluate the same recurrence over `(i, w)`, the best value
//! using only the first `i` items under capacity `w`:
//!
//! ```text
//! dp[0][w] = dp[i][0] = 0
//! dp[i][w] = dp[i-1][w]                                         if w < weight[i-1]
//!          = max(dp[i-1][w], dp[i-1][w - weight[i-1]] + value[i-1])  otherwise
//! ```
//!
//! - [`DpRunner`] fills the whole [`DpTable`] bottom-up.
//! - [`MemoRunner`] evaluates it top-down through a [`MemoCache`], touching
//!   only states reachable from `(n, capacity)`.
//!
//! Both reconstruct the selection by walking back from `(n, capacity)`:
//! item `i-1` is chosen exactly when `dp[i][w] != dp[i-1][w]`. Ties between
//! excluding and including an item therefore resolve to *exclusion*; a
//! zero-value item is never reported as chosen.
//!
//! # References
//!
//! - Bellman, R. (1957). *Dynamic Programming*, Princeton University Press.
//! - Kellerer, Pferschy & Pisinger (2004). *Knapsack Problems*, Springer, ch. 2.

mod memo;
mod runner;
mod table;

pub use memo::{MemoCache, MemoRunner};
pub use runner::DpRunner;
pub use table::DpTable;

use crate::instance::{KnapsackInstance, ZeroOneSelection};

/// Walks the recurrence backwards from `(n, capacity)` with an explicit
/// cursor. `value_at(i, w)` must return the optimal value of state `(i, w)`.
pub(crate) fn backtrack<F>(instance: &KnapsackInstance, mut value_at: F) -> ZeroOneSelection
where
    F: FnMut(usize, u64) -> u64,
{
    let mut selection = ZeroOneSelection::empty(instance.len());
    let mut w = instance.capacity();
    for i in (1..=instance.len()).rev() {
        if value_at(i, w) != value_at(i - 1, w) {
            selection.insert(i - 1);
            w -= instance.item(i - 1).weight;
        }
    }
    selection
}
