use serde::Deserialize;
use serde::Serialize;

/// One side of the matrix, and the player who chooses along it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Player 1 picks a row.
    Row,
    /// Player 2 picks a column.
    Col,
}

impl Axis {
    pub fn both() -> [Self; 2] {
        [Self::Row, Self::Col]
    }
    pub fn other(&self) -> Self {
        match self {
            Self::Row => Self::Col,
            Self::Col => Self::Row,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row => write!(f, "P1"),
            Self::Col => write!(f, "P2"),
        }
    }
}
