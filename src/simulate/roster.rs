use crate::*;

/// The two-player prisoner's dilemma used when no matrix is given.
pub fn dilemma() -> PayoffMatrix {
    PayoffMatrix::try_from(vec![
        vec![(2, 2), (-1, 3)], //
        vec![(3, -1), (0, 0)],
    ])
    .expect("dilemma is rectangular")
}

/// Agent by command-line name, sized for an axis of `actions` actions.
pub fn agent(name: &str, actions: Index) -> Result<Box<dyn Agent>, GameError> {
    match name {
        "tit-for-tat" | "tft" => Ok(Box::new(TitForTat::default())),
        "grudge" => Ok(Box::new(Grudge::default())),
        "cooperate" => Ok(Box::new(AlwaysCooperate)),
        "defect" => Ok(Box::new(AlwaysDefect)),
        "random" => Ok(Box::new(Uniform::new(actions))),
        other => Err(GameError::UnknownAgent(other.to_string())),
    }
}

/// Pairings played against every analyzed matrix: uniform noise, then
/// agents informed by each solution concept.
pub fn lineup(matrix: &PayoffMatrix) -> Result<Vec<(Box<dyn Agent>, Box<dyn Agent>)>, GameError> {
    let shape = matrix.shape();
    let mut pairs: Vec<(Box<dyn Agent>, Box<dyn Agent>)> = vec![(
        Box::new(Uniform::new(shape.rows)),
        Box::new(Uniform::new(shape.cols)),
    )];
    for (p1, p2) in [
        Pick::pareto(matrix)?,
        Pick::nash(matrix)?,
        Pick::minimax(matrix)?,
    ] {
        pairs.push((Box::new(p1), Box::new(p2)));
    }
    Ok(pairs)
}
