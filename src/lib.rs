pub mod error;
pub mod evolution;
pub mod individual;
pub mod item;
pub mod population;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{KnapsackError, Result};
pub use evolution::{EvolutionResult, GeneticAlgorithmKnapsack, KnapsackOptions};
pub use individual::Individual;
pub use item::Item;
