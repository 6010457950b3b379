use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Single uppercase letter naming one action.
///
/// Rows count forward from 'A'; columns count backward so that the last
/// column is always 'Z'. With R rows and C columns the two ranges are
/// `A..A+R` and `Z-C+1..=Z`, disjoint whenever `R + C <= 26`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Label(char);

impl Label {
    /// Label for action `index` on `axis`, where the axis has `total` actions.
    pub fn name(index: Index, axis: Axis, total: Index) -> Result<Self, GameError> {
        if total > ALPHABET {
            return Err(GameError::range(format!(
                "{} actions on {:?} axis exceed the alphabet",
                total, axis
            )));
        }
        if index >= total {
            return Err(GameError::range(format!(
                "index {} on {:?} axis of {} actions",
                index, axis, total
            )));
        }
        let offset = match axis {
            Axis::Row => index,
            Axis::Col => ALPHABET - total + index,
        };
        Ok(Self(Self::letter(offset)))
    }

    /// Coarse decode that only knows the current row count.
    ///
    /// A label is a row iff its distance from 'A' is below `rows`. Otherwise
    /// it is a column, reported as its distance from 'Z' (the last column is
    /// 0, the one before it 1, and so on). Callers must pass the row count
    /// that is current at decode time. Use [`Shape::decode`] to recover the
    /// exact column index.
    pub fn index_of(&self, rows: Index) -> Result<(Axis, Index), GameError> {
        if rows > ALPHABET {
            return Err(GameError::range(format!(
                "{} rows exceed the alphabet",
                rows
            )));
        }
        let offset = self.offset();
        if offset < rows {
            Ok((Axis::Row, offset))
        } else {
            Ok((Axis::Col, ALPHABET - 1 - offset))
        }
    }

    /// Distance from 'A'.
    pub fn offset(&self) -> Index {
        (self.0 as u8 - FIRST as u8) as Index
    }

    fn letter(offset: Index) -> char {
        (FIRST as u8 + offset as u8) as char
    }
}

impl TryFrom<char> for Label {
    type Error = GameError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        if (FIRST..=LAST).contains(&c) {
            Ok(Self(c))
        } else {
            Err(GameError::range(format!("{:?} is not an action label", c)))
        }
    }
}

impl From<Label> for char {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
