//! Iterated play of two agents on a fixed payoff matrix.
//!
//! ## Agents
//!
//! - [`TitForTat`], [`Grudge`], [`AlwaysCooperate`], [`AlwaysDefect`] — classic
//!   two-action strategies reading action 0 as cooperate and 1 as defect
//! - [`Fixed`] — always the same action
//! - [`Uniform`] — uniform over every action on its axis
//! - [`Pick`] — uniform over a list drawn from an analysis result
mod agent;
mod classic;
mod random;
mod roster;
mod round;
mod score;

pub use agent::*;
pub use classic::*;
pub use random::*;
pub use roster::*;
pub use round::*;
pub use score::*;
