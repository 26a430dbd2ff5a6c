//! Greedy sweeps over the unit-value order.

use log::debug;

use super::types::{FractionalResult, FractionalSelection};
use crate::instance::{KnapsackInstance, ZeroOneResult, ZeroOneSelection};

/// Item indices sorted by descending unit value, ties by ascending index.
///
/// Unit values are compared exactly by cross-multiplication
/// (`v_a * w_b` vs `v_b * w_a`), so equal ratios such as `6/3` and `4/2`
/// always tie and fall back to index order.
pub fn unit_value_order(instance: &KnapsackInstance) -> Vec<usize> {
    let items = instance.items();
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        let lhs = items[b].value as u128 * items[a].weight as u128;
        let rhs = items[a].value as u128 * items[b].weight as u128;
        lhs.cmp(&rhs).then(a.cmp(&b))
    });
    order
}

/// Greedy runner for the fractional and 0/1 variants.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Optimal solution of the fractional relaxation.
    ///
    /// Runs in `O(n log n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::greedy::GreedyRunner;
    /// use u_knapsack::instance::KnapsackInstance;
    ///
    /// let instance = KnapsackInstance::new(&[10, 20, 30], &[60, 100, 120], 50).unwrap();
    /// let result = GreedyRunner::fractional(&instance);
    /// assert!((result.value - 240.0).abs() < 1e-9);
    /// ```
    pub fn fractional(instance: &KnapsackInstance) -> FractionalResult {
        debug!(
            "fractional greedy: n={} capacity={}",
            instance.len(),
            instance.capacity()
        );
        let mut remaining = instance.capacity();
        let mut value = 0.0;
        let mut selection = FractionalSelection::default();

        for idx in unit_value_order(instance) {
            if remaining == 0 {
                break;
            }
            let item = instance.item(idx);
            if item.weight <= remaining {
                selection.push(idx, 1.0);
                value += item.value as f64;
                remaining -= item.weight;
            } else {
                let fraction = remaining as f64 / item.weight as f64;
                selection.push(idx, fraction);
                value += item.value as f64 * fraction;
                break;
            }
        }

        debug!("fractional greedy: value={value:.4} entries={}", selection.len());
        FractionalResult { value, selection }
    }

    /// Greedy **approximation** for the 0/1 problem.
    ///
    /// Takes each item in unit-value order if it fits whole; skipped items
    /// are never reconsidered. Not optimal in general.
    pub fn zero_one(instance: &KnapsackInstance) -> ZeroOneResult {
        debug!(
            "0/1 greedy: n={} capacity={}",
            instance.len(),
            instance.capacity()
        );
        let mut remaining = instance.capacity();
        let mut selection = ZeroOneSelection::empty(instance.len());
        let mut evaluations = 0u64;

        for idx in unit_value_order(instance) {
            if remaining == 0 {
                break;
            }
            evaluations += 1;
            let weight = instance.item(idx).weight;
            if weight <= remaining {
                selection.insert(idx);
                remaining -= weight;
            }
        }

        let result = ZeroOneResult::new(instance, selection, evaluations);
        debug!("0/1 greedy: value={}", result.value);
        result
    }
}
