use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Tied best actions for one player and the score they share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub labels: Vec<Label>,
    pub value: Total,
}

impl Choice {
    /// Keep every action whose score equals the best one.
    /// `better(a, b)` is true when score `a` beats score `b`.
    pub(crate) fn select<F>(
        matrix: &PayoffMatrix,
        axis: Axis,
        scores: &[Total],
        better: F,
    ) -> Result<Self, GameError>
    where
        F: Fn(Total, Total) -> bool,
    {
        let value = scores
            .iter()
            .copied()
            .reduce(|best, x| if better(x, best) { x } else { best })
            .ok_or_else(|| GameError::malformed(format!("no actions on {:?} axis", axis)))?;
        let shape = matrix.shape();
        let labels = scores
            .iter()
            .enumerate()
            .filter(|(_, x)| **x == value)
            .map(|(i, _)| shape.label(axis, i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels, value })
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels = self
            .labels
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}]", labels)
    }
}

/// One [`Choice`] per player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategies {
    pub row: Choice,
    pub col: Choice,
}

impl Strategies {
    pub fn of(&self, axis: Axis) -> &Choice {
        match axis {
            Axis::Row => &self.row,
            Axis::Col => &self.col,
        }
    }
}
