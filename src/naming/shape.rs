use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Action counts on both axes; the context every label is relative to.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub rows: Index,
    pub cols: Index,
}

impl Shape {
    pub fn new(rows: Index, cols: Index) -> Self {
        Self { rows, cols }
    }
    pub fn actions(&self, axis: Axis) -> Index {
        match axis {
            Axis::Row => self.rows,
            Axis::Col => self.cols,
        }
    }
    /// Fails when row and column labels would collide.
    pub fn check(&self) -> Result<(), GameError> {
        if self.rows + self.cols > ALPHABET {
            Err(GameError::LabelCapacity {
                rows: self.rows,
                cols: self.cols,
            })
        } else {
            Ok(())
        }
    }
    pub fn label(&self, axis: Axis, index: Index) -> Result<Label, GameError> {
        self.check()?;
        Label::name(index, axis, self.actions(axis))
    }
    pub fn outcome(&self, i: Index, j: Index) -> Result<Outcome, GameError> {
        Ok(Outcome(
            self.label(Axis::Row, i)?,
            self.label(Axis::Col, j)?,
        ))
    }
    /// All labels on `axis` in index order.
    pub fn labels(&self, axis: Axis) -> Result<Vec<Label>, GameError> {
        (0..self.actions(axis))
            .map(|index| self.label(axis, index))
            .collect()
    }
    /// Exact inverse of [`Shape::label`].
    pub fn decode(&self, label: Label) -> Result<(Axis, Index), GameError> {
        self.check()?;
        let offset = label.offset();
        let first = ALPHABET - self.cols;
        if offset < self.rows {
            Ok((Axis::Row, offset))
        } else if offset >= first {
            Ok((Axis::Col, offset - first))
        } else {
            Err(GameError::range(format!(
                "{} names no action in a {}x{} game",
                label, self.rows, self.cols
            )))
        }
    }
    /// Matrix coordinates of `outcome`.
    pub fn cell(&self, outcome: &Outcome) -> Result<(Index, Index), GameError> {
        Ok((
            self.index(Axis::Row, outcome.row())?,
            self.index(Axis::Col, outcome.col())?,
        ))
    }
    /// Decode a label that must belong to `axis`.
    pub fn index(&self, axis: Axis, label: Label) -> Result<Index, GameError> {
        match self.decode(label)? {
            (found, index) if found == axis => Ok(index),
            _ => Err(GameError::range(format!(
                "{} is not a {:?} label in a {}x{} game",
                label, axis, self.rows, self.cols
            ))),
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_inverts_label() {
        let shape = Shape::new(3, 5);
        for axis in Axis::both() {
            for index in 0..shape.actions(axis) {
                let label = shape.label(axis, index).unwrap();
                assert_eq!(shape.decode(label).unwrap(), (axis, index));
            }
        }
    }

    #[test]
    fn gap_between_axes_is_out_of_range() {
        let shape = Shape::new(2, 2);
        let gap = Label::try_from('M').unwrap();
        assert!(matches!(shape.decode(gap), Err(GameError::LabelRange(_))));
    }

    #[test]
    fn capacity_is_shared_between_axes() {
        assert!(Shape::new(13, 13).check().is_ok());
        assert!(matches!(
            Shape::new(20, 7).check(),
            Err(GameError::LabelCapacity { rows: 20, cols: 7 })
        ));
        assert!(Shape::new(20, 7).label(Axis::Row, 0).is_err());
    }

    #[test]
    fn full_alphabet_is_contiguous() {
        let shape = Shape::new(13, 13);
        assert_eq!(shape.label(Axis::Row, 12).unwrap().to_string(), "M");
        assert_eq!(shape.label(Axis::Col, 0).unwrap().to_string(), "N");
    }

    #[test]
    fn index_rejects_wrong_axis() {
        let shape = Shape::new(2, 2);
        let a = shape.label(Axis::Row, 0).unwrap();
        assert_eq!(shape.index(Axis::Row, a).unwrap(), 0);
        assert!(shape.index(Axis::Col, a).is_err());
    }
}
