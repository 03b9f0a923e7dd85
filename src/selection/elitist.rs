use std::cmp::Ordering;

use crate::individual::Individual;

/// Sorts the population by fitness, best first.
///
/// The sort is stable: individuals with equal fitness keep their relative order. NaN
/// fitness values are sorted last.
///
/// # Examples
///
/// ```
/// use knapsack_ga::individual::Individual;
/// use knapsack_ga::item::Item;
/// use knapsack_ga::selection::sort_by_fitness;
///
/// let items = Item::from_pairs(&[(1.0, 2.0), (1.0, 5.0)]).unwrap();
/// let mut population = vec![
///     Individual::from_genes(vec![true, false]),
///     Individual::from_genes(vec![false, true]),
/// ];
/// for individual in population.iter_mut() {
///     individual.evaluate(&items, 1.0);
/// }
///
/// sort_by_fitness(&mut population);
/// assert_eq!(population[0].fitness(), 5.0);
/// ```
pub fn sort_by_fitness(population: &mut [Individual]) {
    population.sort_by(|a, b| {
        let (fa, fb) = (a.fitness(), b.fitness());
        fb.partial_cmp(&fa).unwrap_or_else(|| {
            if fa.is_nan() && !fb.is_nan() {
                Ordering::Greater
            } else if fb.is_nan() && !fa.is_nan() {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
    });
}

/// Copies the genes of the first `count` individuals into fresh, unevaluated individuals.
///
/// The population is expected to be sorted with [`sort_by_fitness`] already. If `count`
/// exceeds the population size, every individual is copied.
pub fn elites(population: &[Individual], count: usize) -> Vec<Individual> {
    population
        .iter()
        .take(count)
        .map(|individual| Individual::from_genes(individual.genes_copy()))
        .collect()
}
