//! # Individual
//!
//! An `Individual` is one candidate solution: a fixed-length chromosome with one boolean
//! gene per item (`true` means the item is packed) and a cached evaluation.
//!
//! The cache is only filled by [`Individual::evaluate`]. Every operator that changes the
//! genes drops it again, so a fitness read after a mutation never reports a stale value;
//! unevaluated individuals report a fitness of `0.0`.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::individual::Individual;
//! use knapsack_ga::item::Item;
//! use knapsack_ga::rng::RandomNumberGenerator;
//!
//! let items = Item::from_pairs(&[(2.0, 3.0), (3.0, 4.0), (4.0, 5.0)]).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let mut individual = Individual::new(items.len());
//! individual.randomize(&mut rng);
//! individual.repair(&mut rng, &items, 5.0);
//! individual.evaluate(&items, 5.0);
//!
//! assert!(individual.total_weight() <= 5.0);
//! ```

use std::fmt;

use tracing::trace;

use crate::item::Item;
use crate::rng::RandomNumberGenerator;

/// The cached result of evaluating a chromosome against an item list and capacity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Total value when feasible, `0.0` when overweight.
    pub fitness: f64,
    pub total_weight: f64,
    pub total_value: f64,
}

/// A candidate item selection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genes: Vec<bool>,
    evaluation: Option<Evaluation>,
}

impl Individual {
    /// Creates an individual of `len` genes with no item selected.
    pub fn new(len: usize) -> Self {
        Self::from_genes(vec![false; len])
    }

    /// Creates an unevaluated individual from an existing chromosome.
    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self {
            genes,
            evaluation: None,
        }
    }

    /// Sets every gene independently to `true` or `false` with probability 0.5.
    pub fn randomize(&mut self, rng: &mut RandomNumberGenerator) {
        for gene in self.genes.iter_mut() {
            *gene = rng.coin_flip();
        }
        self.evaluation = None;
    }

    /// Evaluates the chromosome, caches the result and returns the fitness.
    ///
    /// Fitness is the total value of the selected items when their total weight fits in
    /// `capacity`, and `0.0` otherwise.
    pub fn evaluate(&mut self, items: &[Item], capacity: f64) -> f64 {
        debug_assert_eq!(self.genes.len(), items.len());

        let (total_weight, total_value) = self
            .selected(items)
            .fold((0.0, 0.0), |(weight, value), item| {
                (weight + item.weight(), value + item.value())
            });
        let fitness = if total_weight <= capacity {
            total_value
        } else {
            0.0
        };

        self.evaluation = Some(Evaluation {
            fitness,
            total_weight,
            total_value,
        });
        fitness
    }

    /// Flips each gene independently with probability `mutation_rate`.
    ///
    /// One uniform draw is consumed per gene regardless of the rate. The individual must be
    /// re-evaluated afterwards.
    pub fn mutate(&mut self, rng: &mut RandomNumberGenerator, mutation_rate: f64) {
        for gene in self.genes.iter_mut() {
            if rng.chance(mutation_rate) {
                *gene = !*gene;
            }
        }
        self.evaluation = None;
    }

    /// Produces one unevaluated child by one-point crossover with `other`.
    ///
    /// With probability `crossover_rate` a cut point is drawn uniformly from
    /// `[1, len - 1]` and the child takes `self`'s genes before the cut and `other`'s
    /// genes from the cut onwards. Otherwise, or when the chromosome is too short to be
    /// cut, the child is a copy of `self`.
    pub fn crossover_one_point(
        &self,
        rng: &mut RandomNumberGenerator,
        other: &Individual,
        crossover_rate: f64,
    ) -> Individual {
        let len = self.genes.len();
        if !rng.chance(crossover_rate) || len < 2 {
            return Individual::from_genes(self.genes_copy());
        }

        let cut = rng.range(1, len);
        let mut genes = Vec::with_capacity(len);
        genes.extend_from_slice(&self.genes[..cut]);
        genes.extend_from_slice(&other.genes[cut..]);
        Individual::from_genes(genes)
    }

    /// Removes randomly chosen selected items until the total weight fits in `capacity`.
    ///
    /// Each step picks uniformly among the currently selected genes. A chromosome that
    /// already fits is left untouched and no random numbers are drawn.
    pub fn repair(&mut self, rng: &mut RandomNumberGenerator, items: &[Item], capacity: f64) {
        let mut total_weight = self.weight_of(items);
        while total_weight > capacity {
            let selected = self.selected_indices();
            if selected.is_empty() {
                break;
            }
            let removed = selected[rng.index(selected.len())];
            self.genes[removed] = false;
            self.evaluation = None;
            total_weight = self.weight_of(items);
            trace!(removed, total_weight, capacity, "repair removed item");
        }
    }

    /// Returns an independent copy of the chromosome.
    pub fn genes_copy(&self) -> Vec<bool> {
        self.genes.clone()
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Indices of the packed items, in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter(|&(_, &gene)| gene)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// The cached evaluation, if the genes have not changed since the last `evaluate`.
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    pub fn is_evaluated(&self) -> bool {
        self.evaluation.is_some()
    }

    pub fn fitness(&self) -> f64 {
        self.evaluation.map_or(0.0, |e| e.fitness)
    }

    pub fn total_weight(&self) -> f64 {
        self.evaluation.map_or(0.0, |e| e.total_weight)
    }

    pub fn total_value(&self) -> f64 {
        self.evaluation.map_or(0.0, |e| e.total_value)
    }

    fn selected<'a>(&'a self, items: &'a [Item]) -> impl Iterator<Item = &'a Item> + 'a {
        self.genes
            .iter()
            .zip(items)
            .filter(|&(&gene, _)| gene)
            .map(|(_, item)| item)
    }

    fn weight_of(&self, items: &[Item]) -> f64 {
        self.selected(items).map(Item::weight).sum()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fitness={} weight={} value={} genes=",
            self.fitness(),
            self.total_weight(),
            self.total_value()
        )?;
        for &gene in &self.genes {
            f.write_str(if gene { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        Item::from_pairs(&[(2.0, 3.0), (3.0, 4.0), (4.0, 5.0), (5.0, 6.0)]).unwrap()
    }

    #[test]
    fn test_evaluate_feasible() {
        let items = items();
        let mut individual = Individual::from_genes(vec![true, true, false, false]);

        let fitness = individual.evaluate(&items, 5.0);

        assert_eq!(fitness, 7.0);
        assert_eq!(individual.total_weight(), 5.0);
        assert_eq!(individual.total_value(), 7.0);
        assert_eq!(individual.selected_indices(), vec![0, 1]);
    }

    #[test]
    fn test_evaluate_overweight_is_zero() {
        let items = items();
        let mut individual = Individual::from_genes(vec![true, true, true, false]);

        let fitness = individual.evaluate(&items, 5.0);

        assert_eq!(fitness, 0.0);
        assert_eq!(individual.total_weight(), 9.0);
        assert_eq!(individual.total_value(), 12.0);
    }

    #[test]
    fn test_randomize_is_seeded() {
        let mut rng1 = RandomNumberGenerator::from_seed(9);
        let mut rng2 = RandomNumberGenerator::from_seed(9);
        let mut a = Individual::new(32);
        let mut b = Individual::new(32);

        a.randomize(&mut rng1);
        b.randomize(&mut rng2);

        assert_eq!(a.genes(), b.genes());
        assert!(!a.is_evaluated());
    }

    #[test]
    fn test_mutation_clears_evaluation() {
        let items = items();
        let mut rng = RandomNumberGenerator::from_seed(2);
        let mut individual = Individual::from_genes(vec![true, false, false, false]);
        individual.evaluate(&items, 5.0);

        individual.mutate(&mut rng, 0.0);

        assert_eq!(individual.genes(), &[true, false, false, false]);
        assert!(!individual.is_evaluated());
        assert_eq!(individual.fitness(), 0.0);
    }

    #[test]
    fn test_mutation_rate_one_flips_all() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let mut individual = Individual::from_genes(vec![true, false, true, false]);

        individual.mutate(&mut rng, 1.0);

        assert_eq!(individual.genes(), &[false, true, false, true]);
    }

    #[test]
    fn test_crossover_rate_zero_copies_first_parent() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let a = Individual::from_genes(vec![true; 6]);
        let b = Individual::from_genes(vec![false; 6]);

        for _ in 0..100 {
            let child = a.crossover_one_point(&mut rng, &b, 0.0);
            assert_eq!(child.genes(), a.genes());
            assert!(!child.is_evaluated());
        }
    }

    #[test]
    fn test_crossover_rate_one_always_cuts() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let a = Individual::from_genes(vec![true; 6]);
        let b = Individual::from_genes(vec![false; 6]);

        for _ in 0..200 {
            let child = a.crossover_one_point(&mut rng, &b, 1.0);
            let cut = child.genes().iter().take_while(|&&gene| gene).count();

            // Prefix from the first parent, suffix from the second, both non-empty
            assert!((1..6).contains(&cut));
            assert!(child.genes()[cut..].iter().all(|&gene| !gene));
        }
    }

    #[test]
    fn test_crossover_single_gene_copies() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let a = Individual::from_genes(vec![true]);
        let b = Individual::from_genes(vec![false]);

        let child = a.crossover_one_point(&mut rng, &b, 1.0);

        assert_eq!(child.genes(), &[true]);
    }

    #[test]
    fn test_repair_restores_feasibility() {
        let items = items();
        let mut rng = RandomNumberGenerator::from_seed(8);

        for _ in 0..50 {
            let mut individual = Individual::from_genes(vec![true; 4]);
            individual.repair(&mut rng, &items, 5.0);
            individual.evaluate(&items, 5.0);

            assert!(individual.total_weight() <= 5.0);
            assert_eq!(individual.fitness(), individual.total_value());
        }
    }

    #[test]
    fn test_repair_noop_when_feasible() {
        let items = items();
        let mut rng = RandomNumberGenerator::from_seed(8);
        let mut untouched = rng.clone();
        let mut individual = Individual::from_genes(vec![false, true, false, false]);
        individual.evaluate(&items, 5.0);
        let before = individual.clone();

        individual.repair(&mut rng, &items, 5.0);

        assert_eq!(individual, before);
        // No draws were consumed
        assert_eq!(rng.uniform(), untouched.uniform());
    }

    #[test]
    fn test_repair_only_removes() {
        let items = items();
        let mut rng = RandomNumberGenerator::from_seed(15);
        let mut individual = Individual::from_genes(vec![true, false, true, true]);

        individual.repair(&mut rng, &items, 4.0);

        assert!(!individual.genes()[1]);
        assert!(individual.selected_indices().len() < 3);
    }

    #[test]
    fn test_genes_copy_is_independent() {
        let individual = Individual::from_genes(vec![true, false]);
        let mut copy = individual.genes_copy();
        copy[0] = false;

        assert_eq!(individual.genes(), &[true, false]);
    }

    #[test]
    fn test_display() {
        let items = items();
        let mut individual = Individual::from_genes(vec![true, true, false, false]);
        individual.evaluate(&items, 5.0);

        assert_eq!(
            individual.to_string(),
            "fitness=7 weight=5 value=7 genes=1100"
        );
    }
}
