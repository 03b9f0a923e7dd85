pub mod elitist;
pub mod roulette;

pub use elitist::{elites, sort_by_fitness};
pub use roulette::select_parent_roulette;
