use crate::*;

/// Live/dead flags per action, parallel to the matrix axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    rows: Vec<bool>,
    cols: Vec<bool>,
}

impl Mask {
    /// Every action live.
    pub fn full(matrix: &PayoffMatrix) -> Self {
        Self {
            rows: vec![true; matrix.rows()],
            cols: vec![true; matrix.cols()],
        }
    }
    /// Every action live except those in `eliminated`, decoded against the
    /// full shape of `matrix`.
    pub fn new(matrix: &PayoffMatrix, eliminated: &Eliminated) -> Result<Self, GameError> {
        let shape = matrix.shape();
        let mut mask = Self::full(matrix);
        for label in eliminated.iter() {
            let (axis, index) = shape.decode(*label)?;
            mask.kill(axis, index);
        }
        Ok(mask)
    }
    pub fn kill(&mut self, axis: Axis, index: Index) {
        self.flags_mut(axis)[index] = false;
    }
    pub fn is_live(&self, axis: Axis, index: Index) -> bool {
        self.flags(axis)[index]
    }
    /// Live indices on `axis`, ascending.
    pub fn live(&self, axis: Axis) -> impl Iterator<Item = Index> + '_ {
        self.flags(axis)
            .iter()
            .enumerate()
            .filter(|(_, live)| **live)
            .map(|(i, _)| i)
    }
    fn flags(&self, axis: Axis) -> &[bool] {
        match axis {
            Axis::Row => &self.rows,
            Axis::Col => &self.cols,
        }
    }
    fn flags_mut(&mut self, axis: Axis) -> &mut [bool] {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Col => &mut self.cols,
        }
    }
}
