pub mod builder;
pub mod launcher;
pub mod options;

pub use builder::GeneticAlgorithmKnapsackBuilder;
pub use launcher::{EvolutionResult, GenerationSummary, GeneticAlgorithmKnapsack};
pub use options::{KnapsackOptions, KnapsackOptionsBuilder};
