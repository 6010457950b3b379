//! Per-player security strategies over the full matrix.
//!
//! Each player is solved independently by scoring every one of its actions
//! against the worst opposing action and keeping all actions tied for the
//! best score.
mod choice;
mod maximin;
mod minimax;

pub use choice::*;
pub use maximin::*;
pub use minimax::*;
