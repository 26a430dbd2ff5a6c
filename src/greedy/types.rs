//! Fractional selections and results.

use crate::instance::KnapsackInstance;

/// Items consumed by the fractional sweep, in consumption order.
///
/// Each entry is `(item index, fraction)` with fraction in `(0, 1]`. Only
/// the last entry may have a fraction below 1.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FractionalSelection {
    entries: Vec<(usize, f64)>,
}

impl FractionalSelection {
    pub(crate) fn push(&mut self, index: usize, fraction: f64) {
        debug_assert!(fraction > 0.0 && fraction <= 1.0);
        debug_assert!(
            self.entries.last().map_or(true, |&(_, f)| f >= 1.0),
            "a partial item must be the last entry"
        );
        self.entries.push((index, fraction));
    }

    /// `(index, fraction)` pairs in consumption order.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fraction taken of item `index` (0 if not taken).
    pub fn fraction_of(&self, index: usize) -> f64 {
        self.entries
            .iter()
            .find(|&&(i, _)| i == index)
            .map_or(0.0, |&(_, f)| f)
    }

    /// The partially taken item, if any.
    pub fn partial(&self) -> Option<(usize, f64)> {
        self.entries.last().copied().filter(|&(_, f)| f < 1.0)
    }

    /// Total weight taken, counting fractions.
    pub fn weight(&self, instance: &KnapsackInstance) -> f64 {
        self.entries
            .iter()
            .map(|&(i, f)| instance.item(i).weight as f64 * f)
            .sum()
    }
}

/// Result of the fractional greedy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FractionalResult {
    /// Maximum value of the fractional relaxation.
    pub value: f64,
    /// Consumed items.
    pub selection: FractionalSelection,
}
