use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Selects a parent through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their fitness. A point `r` is drawn
/// uniformly from `[0, sum)` and the first individual whose running fitness total
/// reaches `r` is returned.
///
/// Two cases never fail:
/// - if the fitness sum is not positive (for example every individual is overweight),
///   a uniformly random individual is returned;
/// - if rounding keeps the running total below `r`, the last individual is returned.
///
/// # Panics
///
/// Panics if `population` is empty.
///
/// # Examples
///
/// ```
/// use knapsack_ga::individual::Individual;
/// use knapsack_ga::item::Item;
/// use knapsack_ga::rng::RandomNumberGenerator;
/// use knapsack_ga::selection::select_parent_roulette;
///
/// let items = Item::from_pairs(&[(1.0, 0.0), (1.0, 5.0)]).unwrap();
/// let mut population = vec![
///     Individual::from_genes(vec![true, false]),
///     Individual::from_genes(vec![false, true]),
/// ];
/// for individual in population.iter_mut() {
///     individual.evaluate(&items, 1.0);
/// }
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let parent = select_parent_roulette(&population, &mut rng);
///
/// // The zero-fitness individual can never win a non-degenerate wheel
/// assert_eq!(parent.fitness(), 5.0);
/// ```
pub fn select_parent_roulette<'a>(
    population: &'a [Individual],
    rng: &mut RandomNumberGenerator,
) -> &'a Individual {
    let sum: f64 = population.iter().map(Individual::fitness).sum();

    if sum <= 0.0 {
        return &population[rng.index(population.len())];
    }

    let r = rng.uniform() * sum;
    let mut accumulated = 0.0;
    for individual in population {
        accumulated += individual.fitness();
        if accumulated >= r {
            return individual;
        }
    }

    // Only reachable through floating-point rounding
    &population[population.len() - 1]
}
