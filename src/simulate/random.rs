use crate::*;
use rand::Rng;
use rand::RngCore;
use rand::seq::IndexedRandom;

/// Uniform over every action on its axis.
#[derive(Debug, Clone, Copy)]
pub struct Uniform {
    actions: Index,
}

impl Uniform {
    pub fn new(actions: Index) -> Self {
        Self { actions }
    }
}

impl Agent for Uniform {
    fn act(&mut self, rng: &mut dyn RngCore) -> Index {
        rng.random_range(0..self.actions.max(1))
    }
    fn learn(&mut self, _: Index) {}
    fn name(&self) -> String {
        String::from("Random")
    }
}

/// Uniform over a fixed list of action indices.
///
/// Duplicates are kept, so an action listed twice is drawn twice as often.
/// An empty list falls back to uniform over the whole axis.
#[derive(Debug, Clone)]
pub struct Pick {
    choices: Vec<Index>,
    actions: Index,
    label: String,
}

impl Pick {
    pub fn new(choices: Vec<Index>, actions: Index, label: impl Into<String>) -> Self {
        Self {
            choices,
            actions,
            label: label.into(),
        }
    }

    /// Both players drawing from the Pareto-optimal outcomes.
    pub fn pareto(matrix: &PayoffMatrix) -> Result<(Self, Self), GameError> {
        let outcomes = find_pareto_optimal(matrix)?;
        Self::outcomes(matrix, &outcomes, "Picking Pareto Optimal")
    }

    /// Both players drawing from the pure Nash equilibria.
    pub fn nash(matrix: &PayoffMatrix) -> Result<(Self, Self), GameError> {
        let outcomes = find_nash_equilibria(matrix)?;
        Self::outcomes(matrix, &outcomes, "Picking Nash Equilibria")
    }

    /// Each player drawing from its own minimax-regret actions.
    pub fn minimax(matrix: &PayoffMatrix) -> Result<(Self, Self), GameError> {
        let strategies = minimax_strategy(matrix)?;
        Self::strategies(matrix, &strategies, "Picking Minimax")
    }

    /// Each player drawing from its own maximin actions.
    pub fn maximin(matrix: &PayoffMatrix) -> Result<(Self, Self), GameError> {
        let strategies = maximin_strategy(matrix)?;
        Self::strategies(matrix, &strategies, "Picking Maximin")
    }

    fn outcomes(
        matrix: &PayoffMatrix,
        outcomes: &[Outcome],
        label: &str,
    ) -> Result<(Self, Self), GameError> {
        let shape = matrix.shape();
        let cells = outcomes
            .iter()
            .map(|o| shape.cell(o))
            .collect::<Result<Vec<_>, _>>()?;
        let rows = cells.iter().map(|(i, _)| *i).collect();
        let cols = cells.iter().map(|(_, j)| *j).collect();
        Ok((
            Self::new(rows, shape.rows, label),
            Self::new(cols, shape.cols, label),
        ))
    }

    fn strategies(
        matrix: &PayoffMatrix,
        strategies: &Strategies,
        label: &str,
    ) -> Result<(Self, Self), GameError> {
        let shape = matrix.shape();
        let decode = |axis: Axis| {
            strategies
                .of(axis)
                .labels
                .iter()
                .map(|l| shape.index(axis, *l))
                .collect::<Result<Vec<_>, _>>()
        };
        Ok((
            Self::new(decode(Axis::Row)?, shape.rows, label),
            Self::new(decode(Axis::Col)?, shape.cols, label),
        ))
    }

    pub fn choices(&self) -> &[Index] {
        &self.choices
    }
}

impl Agent for Pick {
    fn act(&mut self, rng: &mut dyn RngCore) -> Index {
        match self.choices.choose(rng) {
            Some(index) => *index,
            None => rng.random_range(0..self.actions.max(1)),
        }
    }
    fn learn(&mut self, _: Index) {}
    fn name(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn frontier() -> PayoffMatrix {
        PayoffMatrix::try_from(vec![
            vec![(4, 3), (4, 3), (-1, -1), (-1, -1)],
            vec![(0, 0), (3, 4), (0, 0), (3, 4)],
        ])
        .unwrap()
    }

    #[test]
    fn pareto_pickers_split_outcomes_by_axis() {
        let (p1, p2) = Pick::pareto(&frontier()).unwrap();
        assert_eq!(p1.choices(), &[0, 0, 1, 1]);
        assert_eq!(p2.choices(), &[0, 1, 1, 3]);
        assert_eq!(p1.name(), "Picking Pareto Optimal");
    }

    #[test]
    fn minimax_pickers_use_exact_column_indices() {
        let dilemma = PayoffMatrix::try_from(vec![
            vec![(2, 2), (-1, 3)], //
            vec![(3, -1), (0, 0)],
        ])
        .unwrap();
        let (p1, p2) = Pick::minimax(&dilemma).unwrap();
        assert_eq!(p1.choices(), &[1]);
        assert_eq!(p2.choices(), &[1]);
    }

    #[test]
    fn empty_pick_falls_back_to_uniform() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut pick = Pick::new(vec![], 3, "nothing");
        for _ in 0..64 {
            assert!(pick.act(rng) < 3);
        }
    }

    #[test]
    fn picks_stay_within_choices() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let mut pick = Pick::new(vec![2, 4], 5, "two");
        for _ in 0..64 {
            assert!([2, 4].contains(&pick.act(rng)));
        }
    }

    #[test]
    fn uniform_covers_the_axis() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut agent = Uniform::new(3);
        let mut seen = [false; 3];
        for _ in 0..256 {
            seen[agent.act(rng)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
