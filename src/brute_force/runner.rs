//! Subset enumeration.
//!
//! # Algorithm
//!
//! 1. For each mask in `0..2^n`, sum the weights of the set bits in
//!    ascending item order, abandoning the subset as soon as the running
//!    weight exceeds capacity
//! 2. If the subset fits, sum its value
//! 3. Replace the incumbent only on a strictly greater value, so the
//!    lowest mask among tied optima wins

use log::debug;

use crate::instance::{KnapsackError, KnapsackInstance, ZeroOneResult, ZeroOneSelection};

/// Largest item count the 64-bit subset mask can enumerate.
pub const MAX_ENUMERABLE_ITEMS: usize = 63;

/// Brute-force runner.
pub struct BruteForceRunner;

impl BruteForceRunner {
    /// Finds an optimal 0/1 selection by enumerating every subset.
    ///
    /// # Errors
    ///
    /// [`KnapsackError::TooManyItems`] if `n > 63`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::brute_force::BruteForceRunner;
    /// use u_knapsack::instance::KnapsackInstance;
    ///
    /// let instance = KnapsackInstance::new(&[10, 20, 30], &[60, 100, 120], 50).unwrap();
    /// let result = BruteForceRunner::run(&instance).unwrap();
    /// assert_eq!(result.value, 220);
    /// assert_eq!(result.selection.indices(), vec![1, 2]);
    /// ```
    pub fn run(instance: &KnapsackInstance) -> Result<ZeroOneResult, KnapsackError> {
        let n = instance.len();
        if n > MAX_ENUMERABLE_ITEMS {
            return Err(KnapsackError::TooManyItems {
                items: n,
                limit: MAX_ENUMERABLE_ITEMS,
            });
        }
        debug!("brute force: n={n} capacity={}", instance.capacity());

        let items = instance.items();
        let capacity = instance.capacity();
        let subsets = 1u64 << n;

        let mut best_mask = 0u64;
        let mut best_value = 0u64;

        for mask in 0..subsets {
            let mut bits = mask;
            let mut weight = 0u64;
            let mut value = 0u64;
            let mut fits = true;
            while bits != 0 {
                let i = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                weight += items[i].weight;
                if weight > capacity {
                    fits = false;
                    break;
                }
                value += items[i].value;
            }
            if fits && value > best_value {
                best_value = value;
                best_mask = mask;
            }
        }

        let result = ZeroOneResult::new(instance, ZeroOneSelection::from_mask(n, best_mask), subsets);
        debug!("brute force: value={} subsets={subsets}", result.value);
        Ok(result)
    }
}
