use crate::*;

/// No other outcome is at least as good for both players and strictly
/// better for one of them.
pub fn is_pareto_optimal(matrix: &PayoffMatrix, outcome: &Outcome) -> Result<bool, GameError> {
    let (i, j) = matrix.shape().cell(outcome)?;
    Ok(unimproved(matrix, i, j))
}

fn unimproved(matrix: &PayoffMatrix, i: Index, j: Index) -> bool {
    let here = matrix.get(i, j);
    !matrix.cells().any(|(_, _, there)| there.improves(&here))
}

/// Every Pareto-optimal outcome in row-major order.
pub fn find_pareto_optimal(matrix: &PayoffMatrix) -> Result<Vec<Outcome>, GameError> {
    let shape = matrix.shape();
    shape.check()?;
    let optimal = matrix
        .cells()
        .filter(|(i, j, _)| unimproved(matrix, *i, *j))
        .map(|(i, j, _)| shape.outcome(i, j))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("{} pareto optimal outcomes in {} game", optimal.len(), shape);
    Ok(optimal)
}
