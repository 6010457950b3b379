use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Dense, rectangular table of payoffs.
///
/// Rows are the row player's actions, columns the column player's.
/// Construction validates that there is at least one row, at least one
/// column, and that every row has the same length; after that the table
/// is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Payoff>>", into = "Vec<Vec<Payoff>>")]
pub struct PayoffMatrix {
    cells: Vec<Vec<Payoff>>,
}

impl PayoffMatrix {
    /// Number of row-player actions (R).
    pub fn rows(&self) -> Index {
        self.cells.len()
    }
    /// Number of column-player actions (C).
    pub fn cols(&self) -> Index {
        self.cells[0].len()
    }
    /// Number of actions available to the player choosing along `axis`.
    pub fn actions(&self, axis: Axis) -> Index {
        match axis {
            Axis::Row => self.rows(),
            Axis::Col => self.cols(),
        }
    }
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols())
    }
    /// Payoff pair at row `i`, column `j`.
    pub fn get(&self, i: Index, j: Index) -> Payoff {
        self.cells[i][j]
    }
    /// Reward of the player on `axis` when that player plays `own`
    /// and the opponent plays `other`.
    ///
    /// Lets every per-player procedure be written once and mirrored by
    /// flipping the axis instead of transposing the table.
    pub fn reward(&self, axis: Axis, own: Index, other: Index) -> Reward {
        match axis {
            Axis::Row => self.cells[own][other].row(),
            Axis::Col => self.cells[other][own].col(),
        }
    }
    /// Row-major iteration over every cell with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Index, Index, Payoff)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, p)| (i, j, *p)))
    }
}

impl TryFrom<Vec<Vec<Payoff>>> for PayoffMatrix {
    type Error = GameError;
    fn try_from(cells: Vec<Vec<Payoff>>) -> Result<Self, Self::Error> {
        let width = cells
            .first()
            .map(Vec::len)
            .ok_or_else(|| GameError::malformed("no rows"))?;
        if width == 0 {
            return Err(GameError::malformed("no columns"));
        }
        if let Some(i) = cells.iter().position(|row| row.len() != width) {
            return Err(GameError::malformed(format!(
                "row {} has {} cells, expected {}",
                i,
                cells[i].len(),
                width
            )));
        }
        Ok(Self { cells })
    }
}

impl TryFrom<Vec<Vec<(Reward, Reward)>>> for PayoffMatrix {
    type Error = GameError;
    fn try_from(cells: Vec<Vec<(Reward, Reward)>>) -> Result<Self, Self::Error> {
        Self::try_from(
            cells
                .into_iter()
                .map(|row| row.into_iter().map(Payoff::from).collect::<Vec<_>>())
                .collect::<Vec<_>>(),
        )
    }
}

impl From<PayoffMatrix> for Vec<Vec<Payoff>> {
    fn from(matrix: PayoffMatrix) -> Self {
        matrix.cells
    }
}

impl Arbitrary for PayoffMatrix {
    /// Random game with 1..=5 actions per axis and small signed payoffs.
    fn random() -> Self {
        let rows = rand::random_range(1..=5);
        let cols = rand::random_range(1..=5);
        let cells = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| {
                        Payoff(
                            rand::random_range(-ARBITRARY_REWARD..ARBITRARY_REWARD),
                            rand::random_range(-ARBITRARY_REWARD..ARBITRARY_REWARD),
                        )
                    })
                    .collect()
            })
            .collect();
        Self { cells }
    }
}

impl std::fmt::Display for PayoffMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shape = self.shape();
        write!(f, "   ")?;
        for j in 0..self.cols() {
            match shape.label(Axis::Col, j) {
                Ok(label) => write!(f, " {:>9}", label)?,
                Err(_) => write!(f, " {:>9}", j)?,
            }
        }
        writeln!(f)?;
        for (i, row) in self.cells.iter().enumerate() {
            match shape.label(Axis::Row, i) {
                Ok(label) => write!(f, "{:>3}", label)?,
                Err(_) => write!(f, "{:>3}", i)?,
            }
            for payoff in row {
                write!(f, " {:>9}", payoff.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
