use crate::{
    error::{KnapsackError, Result},
    item::Item,
};

use super::{GeneticAlgorithmKnapsack, KnapsackOptions};

/// Fluent construction of a [`GeneticAlgorithmKnapsack`].
///
/// Items and capacity are required; options default to `KnapsackOptions::default()`.
///
/// ```rust
/// use knapsack_ga::evolution::{GeneticAlgorithmKnapsackBuilder, KnapsackOptions};
/// use knapsack_ga::item::Item;
///
/// let engine = GeneticAlgorithmKnapsackBuilder::new()
///     .with_items(Item::from_pairs(&[(1.0, 1.0), (2.0, 3.0)]).unwrap())
///     .with_capacity(2.0)
///     .with_options(KnapsackOptions::builder().seed(3).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.items().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneticAlgorithmKnapsackBuilder {
    items: Option<Vec<Item>>,
    capacity: Option<f64>,
    options: Option<KnapsackOptions>,
}

impl GeneticAlgorithmKnapsackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_options(mut self, options: KnapsackOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn build(self) -> Result<GeneticAlgorithmKnapsack> {
        let items = self
            .items
            .ok_or_else(|| KnapsackError::invalid("items not specified"))?;

        let capacity = self
            .capacity
            .ok_or_else(|| KnapsackError::invalid("capacity not specified"))?;

        GeneticAlgorithmKnapsack::new(items, capacity, self.options.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_items_and_capacity() {
        let items = Item::from_pairs(&[(1.0, 1.0)]).unwrap();

        assert!(GeneticAlgorithmKnapsackBuilder::new()
            .with_capacity(1.0)
            .build()
            .is_err());
        assert!(GeneticAlgorithmKnapsackBuilder::new()
            .with_items(items.clone())
            .build()
            .is_err());
        assert!(GeneticAlgorithmKnapsackBuilder::new()
            .with_items(items)
            .with_capacity(1.0)
            .build()
            .is_ok());
    }

    #[test]
    fn test_build_validates_options() {
        let result = GeneticAlgorithmKnapsackBuilder::new()
            .with_items(Item::from_pairs(&[(1.0, 1.0)]).unwrap())
            .with_capacity(1.0)
            .with_options(KnapsackOptions::builder().generations(0).build())
            .build();

        assert!(matches!(result, Err(KnapsackError::InvalidArgument(_))));
    }
}
