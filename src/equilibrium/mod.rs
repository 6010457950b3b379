//! Outcome-level solution concepts over the full, unreduced matrix.
mod nash;
mod pareto;

pub use nash::*;
pub use pareto::*;
