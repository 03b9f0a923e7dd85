//! # Population
//!
//! Free functions over a population (a slice of [`Individual`]s): random initialization,
//! batch evaluation and best-of reduction. Parent selection lives in
//! [`crate::selection`].

use crate::individual::Individual;
use crate::item::Item;
use crate::rng::RandomNumberGenerator;

/// Creates `population_size` randomized individuals over `items`.
///
/// When `use_repair` is set each individual is repaired right after it is randomized, so
/// the random stream is consumed as randomize, repair, randomize, repair, ... The returned
/// individuals are not evaluated.
pub fn init_population(
    rng: &mut RandomNumberGenerator,
    items: &[Item],
    capacity: f64,
    population_size: usize,
    use_repair: bool,
) -> Vec<Individual> {
    (0..population_size)
        .map(|_| {
            let mut individual = Individual::new(items.len());
            individual.randomize(rng);
            if use_repair {
                individual.repair(rng, items, capacity);
            }
            individual
        })
        .collect()
}

/// Evaluates every individual in place.
pub fn evaluate_population(population: &mut [Individual], items: &[Item], capacity: f64) {
    for individual in population.iter_mut() {
        individual.evaluate(items, capacity);
    }
}

/// Returns the individual with the highest fitness.
///
/// Ties go to the individual that comes first.
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn best_of(population: &[Individual]) -> &Individual {
    let mut best = &population[0];
    for individual in &population[1..] {
        if individual.fitness() > best.fitness() {
            best = individual;
        }
    }
    best
}
