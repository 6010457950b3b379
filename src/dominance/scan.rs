//! Single-pass dominance scans over the live actions.
use crate::*;

/// Live labels dominated by some other live action under `relation`.
///
/// Rows come first in index order, then columns in index order. The scan
/// reads `eliminated` as given; actions found dominated in this pass still
/// count as dominators until the caller records them.
pub fn find_dominated(
    matrix: &PayoffMatrix,
    eliminated: &Eliminated,
    relation: Dominance,
) -> Result<Vec<Label>, GameError> {
    scan(matrix, eliminated, |mask, axis, i| {
        mask.live(axis)
            .filter(|j| *j != i)
            .any(|j| relation.dominates(matrix, mask, axis, j, i))
    })
}

/// Live labels that dominate some other live action under `relation`.
pub fn find_dominating(
    matrix: &PayoffMatrix,
    eliminated: &Eliminated,
    relation: Dominance,
) -> Result<Vec<Label>, GameError> {
    scan(matrix, eliminated, |mask, axis, i| {
        mask.live(axis)
            .filter(|j| *j != i)
            .any(|j| relation.dominates(matrix, mask, axis, i, j))
    })
}

pub fn find_strongly_dominated(
    matrix: &PayoffMatrix,
    eliminated: &Eliminated,
) -> Result<Vec<Label>, GameError> {
    find_dominated(matrix, eliminated, Dominance::Strict)
}

/// Tie-inclusive: see [`Dominance::Weak`].
pub fn find_weakly_dominated(
    matrix: &PayoffMatrix,
    eliminated: &Eliminated,
) -> Result<Vec<Label>, GameError> {
    find_dominated(matrix, eliminated, Dominance::Weak)
}

pub fn find_strongly_dominating(
    matrix: &PayoffMatrix,
    eliminated: &Eliminated,
) -> Result<Vec<Label>, GameError> {
    find_dominating(matrix, eliminated, Dominance::Strict)
}

fn scan<F>(matrix: &PayoffMatrix, eliminated: &Eliminated, hit: F) -> Result<Vec<Label>, GameError>
where
    F: Fn(&Mask, Axis, Index) -> bool,
{
    let shape = matrix.shape();
    shape.check()?;
    let ref mask = Mask::new(matrix, eliminated)?;
    let mut found = Vec::new();
    for axis in Axis::both() {
        for i in mask.live(axis) {
            if hit(mask, axis, i) {
                found.push(shape.label(axis, i)?);
            }
        }
    }
    Ok(found)
}
