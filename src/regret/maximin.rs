use crate::*;

/// Guaranteed reward of each action available to the player on `axis`:
/// the least it earns against any opposing action.
pub fn guarantees(matrix: &PayoffMatrix, axis: Axis) -> Vec<Total> {
    let theirs = matrix.actions(axis.other());
    (0..matrix.actions(axis))
        .map(|a| {
            (0..theirs)
                .map(|k| matrix.reward(axis, a, k) as Total)
                .min()
                .unwrap_or_default()
        })
        .collect()
}

/// Maximin actions for both players, ties retained.
pub fn maximin_strategy(matrix: &PayoffMatrix) -> Result<Strategies, GameError> {
    matrix.shape().check()?;
    let solve = |axis| Choice::select(matrix, axis, &guarantees(matrix, axis), |a, b| a > b);
    let strategies = Strategies {
        row: solve(Axis::Row)?,
        col: solve(Axis::Col)?,
    };
    log::debug!(
        "maximin: P1 {} ({}) P2 {} ({})",
        strategies.row,
        strategies.row.value,
        strategies.col,
        strategies.col.value
    );
    Ok(strategies)
}
