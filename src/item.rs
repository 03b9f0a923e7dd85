//! # Item
//!
//! An immutable `(weight, value)` pair. Items are created once from caller-supplied data
//! and are only ever read by the solver.

use crate::error::{KnapsackError, Result};

/// A single candidate for the knapsack.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    weight: f64,
    value: f64,
}

impl Item {
    /// Creates a new item.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `weight` is not a positive finite number or `value` is
    /// not a non-negative finite number.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knapsack_ga::item::Item;
    ///
    /// let item = Item::new(2.0, 3.0).unwrap();
    /// assert_eq!(item.weight(), 2.0);
    /// assert!(Item::new(-1.0, 3.0).is_err());
    /// ```
    pub fn new(weight: f64, value: f64) -> Result<Self> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(KnapsackError::invalid(format!(
                "item weight must be a positive finite number, got {}",
                weight
            )));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(KnapsackError::invalid(format!(
                "item value must be a non-negative finite number, got {}",
                value
            )));
        }
        Ok(Self { weight, value })
    }

    /// Builds an item list from `(weight, value)` pairs, failing on the first invalid one.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Vec<Self>> {
        pairs
            .iter()
            .map(|&(weight, value)| Self::new(weight, value))
            .collect()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
