use crate::*;

/// Errors raised while building or analyzing a game.
///
/// Every variant is deterministic: the same input always fails the same way,
/// so nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Ragged rows, empty axes, or unparseable payoff text.
    MalformedMatrix(String),
    /// Index or label outside the bounds of the axis it was decoded against.
    LabelRange(String),
    /// More actions than the label alphabet can name without collision.
    LabelCapacity { rows: Index, cols: Index },
    /// Agent name not recognized by the simulator.
    UnknownAgent(String),
}

impl GameError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedMatrix(detail.into())
    }
    pub(crate) fn range(detail: impl Into<String>) -> Self {
        Self::LabelRange(detail.into())
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedMatrix(s) => write!(f, "malformed matrix: {}", s),
            Self::LabelRange(s) => write!(f, "label out of range: {}", s),
            Self::LabelCapacity { rows, cols } => write!(
                f,
                "label capacity exceeded: {} rows + {} cols > {}",
                rows, cols, ALPHABET
            ),
            Self::UnknownAgent(s) => write!(f, "unknown agent: {}", s),
        }
    }
}

impl std::error::Error for GameError {}
