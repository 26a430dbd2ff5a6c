//! Error taxonomy.

use thiserror::Error;

/// Errors reported before any algorithm runs.
///
/// Invalid input is always rejected synchronously; once an algorithm has
/// started on a valid instance it runs to completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    #[error("weights and values differ in length: {weights} weights, {values} values")]
    LengthMismatch { weights: usize, values: usize },

    #[error("item {index} has non-positive weight {weight}")]
    NonPositiveWeight { index: usize, weight: i64 },

    #[error("item {index} has negative value {value}")]
    NegativeValue { index: usize, value: i64 },

    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    #[error("total {0} of the instance overflows a 64-bit integer")]
    SumOverflow(&'static str),

    #[error("{items} items exceed the enumeration limit of {limit}")]
    TooManyItems { items: usize, limit: usize },

    #[error("dynamic programming table of {cells} cells exceeds the limit of {limit}")]
    TableTooLarge { cells: u128, limit: u128 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = KnapsackError::LengthMismatch {
            weights: 3,
            values: 2,
        };
        assert_eq!(
            err.to_string(),
            "weights and values differ in length: 3 weights, 2 values"
        );

        let err = KnapsackError::NonPositiveWeight {
            index: 1,
            weight: 0,
        };
        assert_eq!(err.to_string(), "item 1 has non-positive weight 0");

        let err = KnapsackError::TooManyItems {
            items: 25,
            limit: 20,
        };
        assert_eq!(err.to_string(), "25 items exceed the enumeration limit of 20");

        let err = KnapsackError::InvalidConfig("max_weight must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_weight must be positive"
        );
    }
}
