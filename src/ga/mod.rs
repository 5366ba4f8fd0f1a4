//! Genetic search components.
//!
//! - [`order_crossover`] / [`swap_mutation`] — permutation operators
//! - [`GaConfig`] — search parameters
//! - [`genetic_optimize`] — generational loop with roulette selection
//!   and a 2-opt-polished elite

mod operators;
mod optimizer;

pub use operators::{order_crossover, swap_mutation};
pub use optimizer::{genetic_optimize, GaConfig};
