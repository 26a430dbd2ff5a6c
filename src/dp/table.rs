//! Materialized DP table.

use crate::instance::{KnapsackError, KnapsackInstance};

/// `(n + 1) x (capacity + 1)` table of optimal sub-problem values, stored
/// row-major.
///
/// Owned by a single solve; never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    columns: usize,
    cells: Vec<u64>,
}

impl DpTable {
    /// Number of cells a table for `instance` needs.
    pub fn cell_count(instance: &KnapsackInstance) -> u128 {
        (instance.len() as u128 + 1).saturating_mul(instance.capacity() as u128 + 1)
    }

    /// Fills the table row by row, column by column.
    ///
    /// # Errors
    ///
    /// [`KnapsackError::TableTooLarge`] if the table cannot be addressed or
    /// allocated on this platform.
    pub fn build(instance: &KnapsackInstance) -> Result<Self, KnapsackError> {
        let cell_count = Self::cell_count(instance);
        let too_large = || KnapsackError::TableTooLarge {
            cells: cell_count,
            limit: usize::MAX as u128,
        };
        let len = usize::try_from(cell_count).map_err(|_| too_large())?;
        let columns = usize::try_from(instance.capacity())
            .ok()
            .and_then(|c| c.checked_add(1))
            .ok_or_else(too_large)?;
        let rows = instance.len() + 1;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, 0);
        let mut table = Self {
            rows,
            columns,
            cells,
        };

        for i in 1..rows {
            let item = instance.item(i - 1);
            let (prev, cur) = table.cells.split_at_mut(i * columns);
            let prev = &prev[(i - 1) * columns..];
            let cur = &mut cur[..columns];
            for w in 0..columns {
                cur[w] = prev[w];
                if item.weight <= w as u64 {
                    let include = prev[w - item.weight as usize] + item.value;
                    if include > cur[w] {
                        cur[w] = include;
                    }
                }
            }
        }
        Ok(table)
    }

    /// `dp[i][w]`.
    pub fn get(&self, i: usize, w: usize) -> u64 {
        self.cells[i * self.columns + w]
    }

    /// Row `i` (all capacities).
    pub fn row(&self, i: usize) -> &[u64] {
        &self.cells[i * self.columns..(i + 1) * self.columns]
    }

    /// `n + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `capacity + 1`.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `dp[n][capacity]`.
    pub fn optimal_value(&self) -> u64 {
        self.cells[self.cells.len() - 1]
    }
}
