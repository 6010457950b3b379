use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Pair of rewards at one cell: `(row player, column player)`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payoff(pub Reward, pub Reward);

impl Payoff {
    /// Reward received by the row player.
    pub fn row(&self) -> Reward {
        self.0
    }
    /// Reward received by the column player.
    pub fn col(&self) -> Reward {
        self.1
    }
    /// Reward received by the player choosing along `axis`.
    pub fn of(&self, axis: Axis) -> Reward {
        match axis {
            Axis::Row => self.0,
            Axis::Col => self.1,
        }
    }
    /// True when `self` is at least as good for both players as `other`
    /// and strictly better for at least one.
    pub fn improves(&self, other: &Self) -> bool {
        self.0 >= other.0 && self.1 >= other.1 && (self.0 > other.0 || self.1 > other.1)
    }
}

impl From<(Reward, Reward)> for Payoff {
    fn from((row, col): (Reward, Reward)) -> Self {
        Self(row, col)
    }
}

impl std::fmt::Display for Payoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}
