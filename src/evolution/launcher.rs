use tracing::{debug, info};

use super::options::KnapsackOptions;
use crate::{
    error::{KnapsackError, Result},
    individual::Individual,
    item::Item,
    population::{best_of, evaluate_population, init_population},
    rng::RandomNumberGenerator,
    selection::{elites, select_parent_roulette, sort_by_fitness},
};

/// Statistics of one generation. Generation 0 is the initial population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    pub generation: usize,
    /// Best fitness within this generation.
    pub best_fitness: f64,
    pub mean_fitness: f64,
    /// Number of individuals whose total weight fits in the capacity.
    pub feasible_count: usize,
    /// Children bred in this generation; 0 for the initial population.
    pub offspring: usize,
    /// Best fitness seen so far, including this generation.
    pub global_best_fitness: f64,
}

/// The outcome of a run: the best individual found and one summary per generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    pub best: Individual,
    pub history: Vec<GenerationSummary>,
}

/// Genetic algorithm for the 0/1 knapsack problem.
///
/// The engine owns its configuration and its random number generator. All randomness of a
/// run flows through that single generator in a fixed order, so two engines built from
/// the same items, capacity and options produce identical runs.
///
/// # Example
///
/// ```rust
/// use knapsack_ga::evolution::{GeneticAlgorithmKnapsack, KnapsackOptions};
/// use knapsack_ga::item::Item;
///
/// let items = Item::from_pairs(&[(2.0, 3.0), (3.0, 4.0), (4.0, 5.0), (5.0, 6.0)]).unwrap();
/// let options = KnapsackOptions::builder().population_size(20).generations(30).build();
///
/// let mut engine = GeneticAlgorithmKnapsack::new(items, 5.0, options).unwrap();
/// let best = engine.run();
///
/// assert!(best.total_weight() <= 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithmKnapsack {
    items: Vec<Item>,
    capacity: f64,
    options: KnapsackOptions,
    rng: RandomNumberGenerator,
}

impl GeneticAlgorithmKnapsack {
    /// Creates a new engine and seeds its random number generator from `options`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `items` is empty, `capacity` is not a positive finite
    /// number, or any option is out of range (see [`KnapsackOptions::validate`]).
    pub fn new(items: Vec<Item>, capacity: f64, options: KnapsackOptions) -> Result<Self> {
        if items.is_empty() {
            return Err(KnapsackError::invalid("items must not be empty"));
        }
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(KnapsackError::invalid(format!(
                "capacity must be a positive finite number, got {}",
                capacity
            )));
        }
        options.validate()?;

        let rng = RandomNumberGenerator::from_seed(options.get_seed());
        Ok(Self {
            items,
            capacity,
            options,
            rng,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn options(&self) -> &KnapsackOptions {
        &self.options
    }

    /// Runs the configured number of generations and returns the best individual found.
    pub fn run(&mut self) -> Individual {
        self.evolve().best
    }

    /// Runs the configured number of generations and returns the best individual found
    /// together with per-generation statistics.
    ///
    /// The history holds `generations + 1` entries; the first describes the initial
    /// population.
    pub fn evolve(&mut self) -> EvolutionResult {
        let population_size = self.options.get_population_size();
        let generations = self.options.get_generations();
        let elitism_count = self.options.get_elitism_count();
        let use_repair = self.options.get_use_repair();

        info!(
            items = self.items.len(),
            capacity = self.capacity,
            population_size,
            generations,
            crossover_rate = self.options.get_crossover_rate(),
            mutation_rate = self.options.get_mutation_rate(),
            elitism_count,
            use_repair,
            seed = self.options.get_seed(),
            "starting knapsack evolution"
        );

        let mut population = init_population(
            &mut self.rng,
            &self.items,
            self.capacity,
            population_size,
            use_repair,
        );
        evaluate_population(&mut population, &self.items, self.capacity);

        let mut global_best = best_of(&population).clone();
        let mut history = Vec::with_capacity(generations + 1);
        history.push(self.summarize(0, &population, &global_best, 0));

        for generation in 1..=generations {
            sort_by_fitness(&mut population);

            let mut next = Vec::with_capacity(population_size);
            next.extend(elites(&population, elitism_count));

            let mut offspring = 0;
            while next.len() < population_size {
                let child = self.breed(&population);
                next.push(child);
                offspring += 1;
            }

            population = next;
            // Elite copies are the only members without a fitness yet
            for elite in population.iter_mut().take(elitism_count) {
                elite.evaluate(&self.items, self.capacity);
            }

            let generation_best = best_of(&population);
            if generation_best.fitness() > global_best.fitness() {
                debug!(
                    generation,
                    previous = global_best.fitness(),
                    fitness = generation_best.fitness(),
                    "new global best"
                );
                global_best = generation_best.clone();
            }

            let summary = self.summarize(generation, &population, &global_best, offspring);
            debug!(
                generation,
                best = summary.best_fitness,
                mean = summary.mean_fitness,
                feasible = summary.feasible_count,
                global_best = summary.global_best_fitness,
                "generation complete"
            );
            history.push(summary);
        }

        info!(
            fitness = global_best.fitness(),
            weight = global_best.total_weight(),
            selected = ?global_best.selected_indices(),
            "knapsack evolution finished"
        );

        EvolutionResult {
            best: global_best,
            history,
        }
    }

    /// Produces one evaluated child from two roulette-selected parents.
    fn breed(&mut self, population: &[Individual]) -> Individual {
        let parent1 = select_parent_roulette(population, &mut self.rng);
        let parent2 = select_parent_roulette(population, &mut self.rng);

        let mut child =
            parent1.crossover_one_point(&mut self.rng, parent2, self.options.get_crossover_rate());
        child.mutate(&mut self.rng, self.options.get_mutation_rate());
        if self.options.get_use_repair() {
            child.repair(&mut self.rng, &self.items, self.capacity);
        }
        child.evaluate(&self.items, self.capacity);
        child
    }

    fn summarize(
        &self,
        generation: usize,
        population: &[Individual],
        global_best: &Individual,
        offspring: usize,
    ) -> GenerationSummary {
        let total: f64 = population.iter().map(Individual::fitness).sum();
        GenerationSummary {
            generation,
            best_fitness: best_of(population).fitness(),
            mean_fitness: total / population.len() as f64,
            feasible_count: population
                .iter()
                .filter(|individual| individual.total_weight() <= self.capacity)
                .count(),
            offspring,
            global_best_fitness: global_best.fitness(),
        }
    }
}
