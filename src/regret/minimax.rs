use crate::*;

/// Worst-case regret of each action available to the player on `axis`.
///
/// Regret against a fixed opposing action is the gap between the best reward
/// any of the player's actions earns there and the reward this action earns.
/// The gap can exceed the range of a single reward, so it is widened first.
pub fn worst_regrets(matrix: &PayoffMatrix, axis: Axis) -> Vec<Total> {
    let mine = matrix.actions(axis);
    let theirs = matrix.actions(axis.other());
    let best = (0..theirs)
        .map(|k| {
            (0..mine)
                .map(|a| matrix.reward(axis, a, k) as Total)
                .max()
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();
    (0..mine)
        .map(|a| {
            (0..theirs)
                .map(|k| best[k] - matrix.reward(axis, a, k) as Total)
                .max()
                .unwrap_or_default()
        })
        .collect()
}

/// Minimax-regret actions for both players, ties retained.
pub fn minimax_strategy(matrix: &PayoffMatrix) -> Result<Strategies, GameError> {
    matrix.shape().check()?;
    let solve = |axis| Choice::select(matrix, axis, &worst_regrets(matrix, axis), |a, b| a < b);
    let strategies = Strategies {
        row: solve(Axis::Row)?,
        col: solve(Axis::Col)?,
    };
    log::debug!(
        "minimax regret: P1 {} ({}) P2 {} ({})",
        strategies.row,
        strategies.row.value,
        strategies.col,
        strategies.col.value
    );
    Ok(strategies)
}
