//! # KnapsackOptions
//!
//! The `KnapsackOptions` struct represents the configuration of a genetic algorithm run:
//! population size, number of generations, operator rates, elitism, repair and the seed
//! of the random stream.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::evolution::options::KnapsackOptions;
//!
//! // Create a new KnapsackOptions instance with custom parameters
//! let custom_options = KnapsackOptions::new(40, 200, 0.9, 0.01, 2, true, 7);
//!
//! // Create a new KnapsackOptions instance with default parameters
//! let default_options = KnapsackOptions::default();
//! assert!(default_options.validate().is_ok());
//! ```
//!
//! ## Fields
//!
//! - `population_size`: The number of individuals in each generation, at least 2.
//! - `generations`: The number of generations to evolve, at least 1.
//! - `crossover_rate`: Probability that two parents are recombined, in `[0, 1]`.
//! - `mutation_rate`: Per-gene bit-flip probability, in `[0, 1]`.
//! - `elitism_count`: Number of best individuals copied unchanged into the next
//!   generation, in `[0, population_size)`.
//! - `use_repair`: Whether overweight chromosomes are repaired before evaluation.
//! - `seed`: Seed of the engine's random number generator.

use crate::error::{KnapsackError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackOptions {
    population_size: usize,
    generations: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    elitism_count: usize,
    use_repair: bool,
    seed: u64,
}

impl KnapsackOptions {
    pub fn new(
        population_size: usize,
        generations: usize,
        crossover_rate: f64,
        mutation_rate: f64,
        elitism_count: usize,
        use_repair: bool,
        seed: u64,
    ) -> Self {
        Self {
            population_size,
            generations,
            crossover_rate,
            mutation_rate,
            elitism_count,
            use_repair,
            seed,
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_generations(&self) -> usize {
        self.generations
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_elitism_count(&self) -> usize {
        self.elitism_count
    }

    pub fn get_use_repair(&self) -> bool {
        self.use_repair
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    /// Checks every option against its valid range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first option that is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(KnapsackError::invalid(format!(
                "population_size must be >= 2, got {}",
                self.population_size
            )));
        }
        if self.generations < 1 {
            return Err(KnapsackError::invalid("generations must be >= 1"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(KnapsackError::invalid(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(KnapsackError::invalid(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.elitism_count >= self.population_size {
            return Err(KnapsackError::invalid(format!(
                "elitism_count must be in [0, {}), got {}",
                self.population_size, self.elitism_count
            )));
        }
        Ok(())
    }

    /// Returns a builder for creating a `KnapsackOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knapsack_ga::evolution::options::KnapsackOptions;
    ///
    /// let options = KnapsackOptions::builder()
    ///     .population_size(80)
    ///     .generations(500)
    ///     .mutation_rate(0.01)
    ///     .seed(1234)
    ///     .build();
    ///
    /// assert_eq!(options.get_population_size(), 80);
    /// assert_eq!(options.get_elitism_count(), 2);
    /// ```
    pub fn builder() -> KnapsackOptionsBuilder {
        KnapsackOptionsBuilder::default()
    }
}

impl Default for KnapsackOptions {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.02,
            elitism_count: 2,
            use_repair: true,
            seed: 42,
        }
    }
}

/// Builder for `KnapsackOptions`.
///
/// Options left unset take their `KnapsackOptions::default()` value.
#[derive(Debug, Clone, Default)]
pub struct KnapsackOptionsBuilder {
    population_size: Option<usize>,
    generations: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    elitism_count: Option<usize>,
    use_repair: Option<bool>,
    seed: Option<u64>,
}

impl KnapsackOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn generations(mut self, value: usize) -> Self {
        self.generations = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn elitism_count(mut self, value: usize) -> Self {
        self.elitism_count = Some(value);
        self
    }

    pub fn use_repair(mut self, value: bool) -> Self {
        self.use_repair = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Builds the `KnapsackOptions` instance. Validation happens when an engine is built.
    pub fn build(self) -> KnapsackOptions {
        let defaults = KnapsackOptions::default();
        KnapsackOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            generations: self.generations.unwrap_or(defaults.generations),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            elitism_count: self.elitism_count.unwrap_or(defaults.elitism_count),
            use_repair: self.use_repair.unwrap_or(defaults.use_repair),
            seed: self.seed.unwrap_or(defaults.seed),
        }
    }
}
