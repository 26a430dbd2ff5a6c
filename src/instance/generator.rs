//! Seeded random instance generation for tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::KnapsackError;
use super::types::{Item, KnapsackInstance};

/// Generates random knapsack instances.
///
/// Weights are drawn uniformly from `[1, max_weight]`, values from
/// `[0, max_value]`. Capacity is `budget_percent`% of the total weight.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::InstanceGenerator;
///
/// let instance = InstanceGenerator::default()
///     .with_num_items(12)
///     .with_seed(7)
///     .generate()
///     .unwrap();
/// assert_eq!(instance.len(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    /// Number of items.
    pub num_items: usize,
    /// Largest item weight (inclusive, >= 1).
    pub max_weight: u64,
    /// Largest item value (inclusive).
    pub max_value: u64,
    /// Capacity as a percentage of total weight, in [0, 100].
    pub budget_percent: u32,
    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for InstanceGenerator {
    fn default() -> Self {
        Self {
            num_items: 10,
            max_weight: 20,
            max_value: 50,
            budget_percent: 50,
            seed: 42,
        }
    }
}

impl InstanceGenerator {
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    pub fn with_max_weight(mut self, w: u64) -> Self {
        self.max_weight = w;
        self
    }

    pub fn with_max_value(mut self, v: u64) -> Self {
        self.max_value = v;
        self
    }

    pub fn with_budget_percent(mut self, percent: u32) -> Self {
        self.budget_percent = percent;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_weight == 0 {
            return Err("max_weight must be positive".into());
        }
        if self.budget_percent > 100 {
            return Err(format!(
                "budget_percent must be in [0, 100], got {}",
                self.budget_percent
            ));
        }
        Ok(())
    }

    /// Generates an instance. The same configuration always yields the
    /// same instance.
    ///
    /// # Errors
    ///
    /// [`KnapsackError::InvalidConfig`] if [`validate`](Self::validate) fails.
    pub fn generate(&self) -> Result<KnapsackInstance, KnapsackError> {
        self.validate().map_err(KnapsackError::InvalidConfig)?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let items: Vec<Item> = (0..self.num_items)
            .map(|_| {
                let weight = rng.random_range(1..=self.max_weight);
                let value = rng.random_range(0..=self.max_value);
                Item::new(weight, value)
            })
            .collect();
        let total_weight = items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.weight))
            .ok_or(KnapsackError::SumOverflow("weight"))?;
        let capacity = (total_weight as u128 * self.budget_percent as u128 / 100) as u64;
        KnapsackInstance::from_items(items, capacity)
    }
}
