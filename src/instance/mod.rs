//! Knapsack problem instances.
//!
//! An instance is an ordered list of items, each with a positive integer
//! weight and a non-negative integer value, plus a non-negative capacity.
//! Items are identified by their 0-based position in the input.
//!
//! Every algorithm in this crate takes a validated [`KnapsackInstance`];
//! input checking happens once, when the instance is built, and never
//! inside an algorithm.

mod error;
mod generator;
mod types;

pub use error::KnapsackError;
pub use generator::InstanceGenerator;
pub use types::{Item, KnapsackInstance, ZeroOneResult, ZeroOneSelection};
