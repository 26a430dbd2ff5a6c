//! Bottom-up dynamic programming.

use log::debug;

use super::backtrack;
use super::table::DpTable;
use crate::instance::{KnapsackError, KnapsackInstance, ZeroOneResult};

/// Bottom-up DP runner. `O(n * capacity)` time and space.
pub struct DpRunner;

impl DpRunner {
    /// Builds the full [`DpTable`], then backtracks the selection from
    /// `(n, capacity)`.
    ///
    /// # Errors
    ///
    /// [`KnapsackError::TableTooLarge`] if the table cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::dp::DpRunner;
    /// use u_knapsack::instance::KnapsackInstance;
    ///
    /// let instance = KnapsackInstance::new(&[3, 2, 2], &[5, 3, 3], 4).unwrap();
    /// let result = DpRunner::run(&instance).unwrap();
    /// assert_eq!(result.value, 6);
    /// assert_eq!(result.selection.indices(), vec![1, 2]);
    /// ```
    pub fn run(instance: &KnapsackInstance) -> Result<ZeroOneResult, KnapsackError> {
        debug!(
            "dp: n={} capacity={} cells={}",
            instance.len(),
            instance.capacity(),
            DpTable::cell_count(instance)
        );
        let table = DpTable::build(instance)?;
        // Every w visited while backtracking is <= capacity, which fits in a column.
        let selection = backtrack(instance, |i, w| table.get(i, w as usize));
        let result = ZeroOneResult::new(instance, selection, (table.rows() * table.columns()) as u64);
        debug_assert_eq!(result.value, table.optimal_value());
        debug!("dp: value={}", result.value);
        Ok(result)
    }
}
