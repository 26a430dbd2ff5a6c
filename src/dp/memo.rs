//! Top-down dynamic programming with memoization.
//!
//! The recurrence is evaluated on demand with an explicit work stack instead
//! of native recursion, so deep instances cannot overflow the call stack.

use std::collections::HashMap;

use log::debug;

use super::backtrack;
use super::table::DpTable;
use crate::instance::{KnapsackInstance, ZeroOneResult};

/// Lazily populated `(i, w) -> optimal value` cache.
///
/// Borrows the instance it was built for, so a cache can never outlive or
/// be reused across instances. Base states (`i == 0` or `w == 0`) are never
/// stored.
#[derive(Debug)]
pub struct MemoCache<'a> {
    instance: &'a KnapsackInstance,
    values: HashMap<(usize, u64), u64>,
}

impl<'a> MemoCache<'a> {
    /// An empty cache for `instance`.
    pub fn new(instance: &'a KnapsackInstance) -> Self {
        Self {
            instance,
            values: HashMap::new(),
        }
    }

    /// Cached value of `(i, w)`, without evaluating anything.
    pub fn get(&self, i: usize, w: u64) -> Option<u64> {
        if i == 0 || w == 0 {
            return Some(0);
        }
        self.values.get(&(i, w)).copied()
    }

    /// Number of memoized states.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Optimal value of `(i, w)`, evaluating and caching every state it
    /// depends on that is not cached yet.
    ///
    /// # Panics
    ///
    /// Panics if `i > n`.
    pub fn value(&mut self, i: usize, w: u64) -> u64 {
        assert!(i <= self.instance.len(), "item index {i} out of range");
        if let Some(v) = self.get(i, w) {
            return v;
        }

        let mut stack = vec![(i, w)];
        while let Some(&(i, w)) = stack.last() {
            if self.values.contains_key(&(i, w)) {
                stack.pop();
                continue;
            }
            let item = self.instance.item(i - 1);
            let mut ready = true;

            let exclude = self.get(i - 1, w);
            if exclude.is_none() {
                stack.push((i - 1, w));
                ready = false;
            }
            let include = if item.weight <= w {
                let rest = self.get(i - 1, w - item.weight);
                if rest.is_none() {
                    stack.push((i - 1, w - item.weight));
                    ready = false;
                }
                rest.map(|v| v + item.value)
            } else {
                // does not fit; never beats exclusion
                Some(0)
            };

            if let (true, Some(exclude), Some(include)) = (ready, exclude, include) {
                stack.pop();
                self.values.insert((i, w), exclude.max(include));
            }
        }
        self.values[&(i, w)]
    }
}

/// Memoized DP runner.
///
/// Same outputs as [`DpRunner`](super::DpRunner), but only evaluates states
/// reachable from `(n, capacity)`. When capacity is large compared to the
/// achievable weight sums this is far fewer than the full table; the worst
/// case matches it.
pub struct MemoRunner;

impl MemoRunner {
    /// Upper bound on the states a memoized solve can store: the smaller of
    /// the full table size and the `2^(n+1) - 1` nodes of the binary
    /// include/exclude tree.
    pub fn state_bound(instance: &KnapsackInstance) -> u128 {
        let tree = u32::try_from(instance.len() + 1)
            .ok()
            .and_then(|shift| 1u128.checked_shl(shift))
            .map_or(u128::MAX, |nodes| nodes - 1);
        DpTable::cell_count(instance).min(tree)
    }

    /// Solves with a fresh cache, then backtracks through the same cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::dp::MemoRunner;
    /// use u_knapsack::instance::KnapsackInstance;
    ///
    /// let instance = KnapsackInstance::new(&[10, 20, 30], &[60, 100, 120], 50).unwrap();
    /// let result = MemoRunner::run(&instance);
    /// assert_eq!(result.value, 220);
    /// ```
    pub fn run(instance: &KnapsackInstance) -> ZeroOneResult {
        debug!(
            "memo: n={} capacity={} state_bound={}",
            instance.len(),
            instance.capacity(),
            Self::state_bound(instance)
        );
        let mut cache = MemoCache::new(instance);
        let optimal = cache.value(instance.len(), instance.capacity());
        let selection = backtrack(instance, |i, w| cache.value(i, w));
        let result = ZeroOneResult::new(instance, selection, cache.len() as u64);
        debug_assert_eq!(result.value, optimal);
        debug!("memo: value={} states={}", result.value, result.evaluations);
        result
    }
}
