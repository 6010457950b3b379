use crate::*;
use serde::Serialize;

/// Cumulative totals after an iterated match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Score {
    pub rounds: usize,
    pub p1: (String, Total),
    pub p2: (String, Total),
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game Over. End of {} simulations", self.rounds)?;
        writeln!(f, "\tPlayer 1 scored: {} using {}", self.p1.1, self.p1.0)?;
        writeln!(f, "\tPlayer 2 scored: {} using {}", self.p2.1, self.p2.0)
    }
}
