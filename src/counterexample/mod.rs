//! A fixed instance on which the 0/1 greedy is strictly suboptimal.
//!
//! Items `(weight, value)`: `(3, 5)`, `(2, 3)`, `(2, 3)`; capacity 4.
//!
//! The greedy takes item 0 first (unit value 5/3 beats 3/2), after which
//! neither remaining item fits: value 5. The optimum skips item 0 and packs
//! items 1 and 2: value 6.

use crate::dp::DpRunner;
use crate::greedy::GreedyRunner;
use crate::instance::{KnapsackError, KnapsackInstance, ZeroOneResult};

/// Weights of the canonical counterexample.
pub const WEIGHTS: [u64; 3] = [3, 2, 2];
/// Values of the canonical counterexample.
pub const VALUES: [u64; 3] = [5, 3, 3];
/// Capacity of the canonical counterexample.
pub const CAPACITY: u64 = 4;

/// Greedy and optimal results on the same instance, side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyCounterexample {
    pub instance: KnapsackInstance,
    /// 0/1 greedy result.
    pub greedy: ZeroOneResult,
    /// Exact optimum from bottom-up DP.
    pub optimal: ZeroOneResult,
}

impl GreedyCounterexample {
    /// The canonical instance: greedy 5, optimal 6.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::counterexample::GreedyCounterexample;
    ///
    /// let example = GreedyCounterexample::canonical();
    /// assert_eq!(example.greedy.value, 5);
    /// assert_eq!(example.optimal.value, 6);
    /// assert!(example.demonstrates_gap());
    /// ```
    pub fn canonical() -> Self {
        let instance = KnapsackInstance::new(&WEIGHTS, &VALUES, CAPACITY)
            .expect("canonical counterexample is a valid instance");
        Self::evaluate(instance).expect("canonical counterexample fits in a DP table")
    }

    /// Runs the 0/1 greedy and DP on any instance for comparison.
    pub fn evaluate(instance: KnapsackInstance) -> Result<Self, KnapsackError> {
        let greedy = GreedyRunner::zero_one(&instance);
        let optimal = DpRunner::run(&instance)?;
        Ok(Self {
            instance,
            greedy,
            optimal,
        })
    }

    /// True if greedy is strictly worse than the optimum.
    pub fn demonstrates_gap(&self) -> bool {
        self.greedy.value < self.optimal.value
    }

    /// `optimal - greedy`.
    pub fn gap(&self) -> u64 {
        self.optimal.value.saturating_sub(self.greedy.value)
    }
}
