//! # Error Types
//!
//! This module defines the error type for the knapsack solver. Every failure
//! the library can report is a configuration problem detected when an item or
//! an engine is constructed; once an engine exists, running it cannot fail.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use knapsack_ga::error::{KnapsackError, Result};
//! use knapsack_ga::item::Item;
//!
//! fn heavy_item() -> Result<Item> {
//!     Item::new(12.0, 40.0)
//! }
//!
//! match Item::new(0.0, 1.0) {
//!     Ok(_) => unreachable!(),
//!     Err(KnapsackError::InvalidArgument(msg)) => assert!(msg.contains("weight")),
//! }
//! assert!(heavy_item().is_ok());
//! ```

use thiserror::Error;

/// Represents errors that can occur in the knapsack solver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KnapsackError {
    /// An item, capacity or option value lies outside its valid range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl KnapsackError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        KnapsackError::InvalidArgument(msg.into())
    }
}

/// A specialized Result type for knapsack solver operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `KnapsackError`.
pub type Result<T> = std::result::Result<T, KnapsackError>;
