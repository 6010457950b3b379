//! Pure-strategy analysis of finite two-player normal-form games.
//!
//! # Module Structure
//!
//! - `matrix` — Payoff cells, the rectangular payoff table, text parsing
//! - `naming` — Positional action labels and outcomes
//! - `dominance` — Strict and weak dominance, iterated elimination
//! - `equilibrium` — Pure Nash equilibria and Pareto optimality
//! - `regret` — Minimax-regret and maximin strategies
//! - `report` — Structured bundle of every analysis, with rendering
//! - `simulate` — Iterated play between strategy agents
mod dominance;
mod equilibrium;
mod error;
mod matrix;
mod naming;
mod regret;
mod report;
mod simulate;

pub use dominance::*;
pub use equilibrium::*;
pub use error::*;
pub use matrix::*;
pub use naming::*;
pub use regret::*;
pub use report::*;
pub use simulate::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Integer payoff received by one player at one cell.
pub type Reward = i32;
/// Zero-based action index along one axis of the matrix.
pub type Index = usize;
/// Wide integer for differences and sums of rewards.
pub type Total = i64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// LABELING
// ============================================================================
/// Size of the label alphabet shared by row and column actions.
/// Rows count up from 'A', columns count down to 'Z'.
pub const ALPHABET: usize = 26;
/// First row label.
pub const FIRST: char = 'A';
/// Last column label.
pub const LAST: char = 'Z';

// ============================================================================
// SIMULATION
// ============================================================================
/// Default number of rounds in an iterated match.
pub const SIMULATION_ROUNDS: usize = 1000;
/// Action index conventionally read as "cooperate" by the classic agents.
pub const COOPERATE: Index = 0;
/// Action index conventionally read as "defect" by the classic agents.
pub const DEFECT: Index = 1;
/// Upper bound (exclusive) on payoffs produced by `Arbitrary`.
pub const ARBITRARY_REWARD: Reward = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given verbosity.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
