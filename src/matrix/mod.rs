//! Payoff table and its text format.
mod matrix;
mod parse;
mod payoff;

pub use matrix::*;
pub use payoff::*;
