//! Solver configuration and resource guards.

use crate::brute_force::MAX_ENUMERABLE_ITEMS;

/// What to do when a run is predicted to be expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuardPolicy {
    /// Log a warning and run anyway.
    #[default]
    Warn,
    /// Refuse to run and return an error.
    Block,
}

/// Configuration for [`KnapsackSolver`](super::KnapsackSolver).
///
/// The limits are usability guards, not correctness conditions: every
/// algorithm terminates on any valid instance, but brute force is
/// exponential in `n` and the DP variants are linear in `capacity`.
///
/// # Examples
///
/// ```
/// use u_knapsack::solver::{GuardPolicy, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_brute_force_item_limit(16)
///     .with_dp_cell_limit(1_000_000)
///     .with_guard(GuardPolicy::Block);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Item count above which brute force is considered expensive.
    pub brute_force_item_limit: usize,

    /// DP table cells (or memoized states) above which a DP run is
    /// considered expensive.
    pub dp_cell_limit: u64,

    /// Reaction to an expensive run.
    pub guard: GuardPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            brute_force_item_limit: 20,
            dp_cell_limit: 50_000_000,
            guard: GuardPolicy::Warn,
        }
    }
}

impl SolverConfig {
    pub fn with_brute_force_item_limit(mut self, n: usize) -> Self {
        self.brute_force_item_limit = n;
        self
    }

    pub fn with_dp_cell_limit(mut self, cells: u64) -> Self {
        self.dp_cell_limit = cells;
        self
    }

    pub fn with_guard(mut self, guard: GuardPolicy) -> Self {
        self.guard = guard;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.brute_force_item_limit > MAX_ENUMERABLE_ITEMS {
            return Err(format!(
                "brute_force_item_limit must be at most {MAX_ENUMERABLE_ITEMS}, got {}",
                self.brute_force_item_limit
            ));
        }
        if self.dp_cell_limit == 0 {
            return Err("dp_cell_limit must be positive".into());
        }
        Ok(())
    }
}
