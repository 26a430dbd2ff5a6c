//! Items, instances and 0/1 selections.

use super::error::KnapsackError;

/// A single item: positive weight, non-negative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight, always > 0 inside a validated instance.
    pub weight: u64,
    /// Value.
    pub value: u64,
}

impl Item {
    pub fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }

    /// `value / weight` as a float, for display. Greedy ordering compares
    /// ratios exactly instead (see [`crate::greedy::unit_value_order`]).
    pub fn unit_value(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }
}

/// A validated knapsack instance.
///
/// Invariants: every weight is positive, and the sum of all weights and the
/// sum of all values fit in a `u64`, so no subset sum can overflow.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::KnapsackInstance;
///
/// let instance = KnapsackInstance::new(&[10, 20, 30], &[60, 100, 120], 50).unwrap();
/// assert_eq!(instance.len(), 3);
/// assert_eq!(instance.capacity(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "InstanceParts", into = "InstanceParts")
)]
pub struct KnapsackInstance {
    items: Vec<Item>,
    capacity: u64,
}

impl KnapsackInstance {
    /// Builds an instance from parallel weight/value sequences.
    ///
    /// # Errors
    ///
    /// - [`KnapsackError::LengthMismatch`] if the sequences differ in length
    /// - [`KnapsackError::NonPositiveWeight`] if any weight is zero
    /// - [`KnapsackError::SumOverflow`] if total weight or value overflows
    pub fn new(weights: &[u64], values: &[u64], capacity: u64) -> Result<Self, KnapsackError> {
        if weights.len() != values.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        let items = weights
            .iter()
            .zip(values)
            .map(|(&w, &v)| Item::new(w, v))
            .collect();
        Self::from_items(items, capacity)
    }

    /// Builds an instance from already-paired items.
    pub fn from_items(items: Vec<Item>, capacity: u64) -> Result<Self, KnapsackError> {
        if let Some(index) = items.iter().position(|item| item.weight == 0) {
            return Err(KnapsackError::NonPositiveWeight { index, weight: 0 });
        }
        items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.weight))
            .ok_or(KnapsackError::SumOverflow("weight"))?;
        items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.value))
            .ok_or(KnapsackError::SumOverflow("value"))?;
        Ok(Self { items, capacity })
    }

    /// Builds an instance from signed input, as received from a front end.
    ///
    /// Lengths are checked first, then capacity, then items in index order
    /// (weight before value).
    pub fn from_signed(
        weights: &[i64],
        values: &[i64],
        capacity: i64,
    ) -> Result<Self, KnapsackError> {
        if weights.len() != values.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        if capacity < 0 {
            return Err(KnapsackError::NegativeCapacity(capacity));
        }
        let mut items = Vec::with_capacity(weights.len());
        for (index, (&weight, &value)) in weights.iter().zip(values).enumerate() {
            if weight <= 0 {
                return Err(KnapsackError::NonPositiveWeight { index, weight });
            }
            if value < 0 {
                return Err(KnapsackError::NegativeValue { index, value });
            }
            items.push(Item::new(weight as u64, value as u64));
        }
        Self::from_items(items, capacity as u64)
    }

    /// The items, in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at `index`.
    pub fn item(&self, index: usize) -> Item {
        self.items[index]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|item| item.weight).sum()
    }

    /// Sum of all item values.
    pub fn total_value(&self) -> u64 {
        self.items.iter().map(|item| item.value).sum()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct InstanceParts {
    weights: Vec<u64>,
    values: Vec<u64>,
    capacity: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<InstanceParts> for KnapsackInstance {
    type Error = KnapsackError;

    fn try_from(parts: InstanceParts) -> Result<Self, Self::Error> {
        KnapsackInstance::new(&parts.weights, &parts.values, parts.capacity)
    }
}

#[cfg(feature = "serde")]
impl From<KnapsackInstance> for InstanceParts {
    fn from(instance: KnapsackInstance) -> Self {
        Self {
            weights: instance.items.iter().map(|item| item.weight).collect(),
            values: instance.items.iter().map(|item| item.value).collect(),
            capacity: instance.capacity,
        }
    }
}

/// A 0/1 selection: one flag per item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZeroOneSelection {
    chosen: Vec<bool>,
}

impl ZeroOneSelection {
    /// A selection over `n` items with nothing chosen.
    pub fn empty(n: usize) -> Self {
        Self {
            chosen: vec![false; n],
        }
    }

    /// A selection over `n` items with the given indices chosen.
    pub fn from_indices(n: usize, indices: &[usize]) -> Self {
        let mut selection = Self::empty(n);
        for &i in indices {
            selection.insert(i);
        }
        selection
    }

    /// A selection over `n <= 64` items from a subset bitmask (bit `i` = item `i`).
    pub fn from_mask(n: usize, mask: u64) -> Self {
        Self {
            chosen: (0..n).map(|i| (mask >> i) & 1 == 1).collect(),
        }
    }

    pub fn insert(&mut self, index: usize) {
        self.chosen[index] = true;
    }

    pub fn contains(&self, index: usize) -> bool {
        self.chosen.get(index).copied().unwrap_or(false)
    }

    /// Chosen item indices, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.chosen
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| c.then_some(i))
            .collect()
    }

    /// Number of chosen items.
    pub fn count(&self) -> usize {
        self.chosen.iter().filter(|&&c| c).count()
    }

    /// True if no item is chosen.
    pub fn is_empty(&self) -> bool {
        !self.chosen.contains(&true)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.chosen
    }

    /// Total weight of the chosen items.
    pub fn weight(&self, instance: &KnapsackInstance) -> u64 {
        self.indices().iter().map(|&i| instance.item(i).weight).sum()
    }

    /// Total value of the chosen items.
    pub fn value(&self, instance: &KnapsackInstance) -> u64 {
        self.indices().iter().map(|&i| instance.item(i).value).sum()
    }

    /// Whether the chosen items fit within the instance capacity.
    pub fn is_feasible(&self, instance: &KnapsackInstance) -> bool {
        self.chosen.len() == instance.len() && self.weight(instance) <= instance.capacity()
    }
}

/// Result of a 0/1 algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZeroOneResult {
    /// Total value of the selection.
    pub value: u64,
    /// Chosen items.
    pub selection: ZeroOneSelection,
    /// Total weight of the selection.
    pub total_weight: u64,
    /// Work performed: items inspected (greedy), subsets examined (brute
    /// force), table cells filled (DP) or states memoized (memo).
    pub evaluations: u64,
}

impl ZeroOneResult {
    pub(crate) fn new(
        instance: &KnapsackInstance,
        selection: ZeroOneSelection,
        evaluations: u64,
    ) -> Self {
        Self {
            value: selection.value(instance),
            total_weight: selection.weight(instance),
            selection,
            evaluations,
        }
    }
}
