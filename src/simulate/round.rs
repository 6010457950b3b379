use crate::*;
use rand::RngCore;

/// Two agents repeatedly playing one matrix, row player first.
pub struct Match<'a, A, B>
where
    A: Agent,
    B: Agent,
{
    matrix: &'a PayoffMatrix,
    p1: A,
    p2: B,
}

impl<'a, A, B> Match<'a, A, B>
where
    A: Agent,
    B: Agent,
{
    pub fn new(matrix: &'a PayoffMatrix, p1: A, p2: B) -> Self {
        Self { matrix, p1, p2 }
    }

    /// Play `rounds` rounds. Each round both agents act, each observes the
    /// other's action, and each collects its own reward from the cell.
    pub fn play(mut self, rounds: usize, rng: &mut dyn RngCore) -> Result<Score, GameError> {
        let shape = self.matrix.shape();
        let mut totals: (Total, Total) = (0, 0);
        for _ in 0..rounds {
            let i = self.p1.act(rng);
            let j = self.p2.act(rng);
            if i >= shape.rows || j >= shape.cols {
                return Err(GameError::range(format!(
                    "cell ({}, {}) outside {} game",
                    i, j, shape
                )));
            }
            self.p1.learn(j);
            self.p2.learn(i);
            let payoff = self.matrix.get(i, j);
            totals.0 += payoff.row() as Total;
            totals.1 += payoff.col() as Total;
        }
        let score = Score {
            rounds,
            p1: (self.p1.name(), totals.0),
            p2: (self.p2.name(), totals.1),
        };
        log::info!(
            "{} vs {}: {} to {} over {} rounds",
            score.p1.0,
            score.p2.0,
            score.p1.1,
            score.p2.1,
            rounds
        );
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn dilemma() -> PayoffMatrix {
        PayoffMatrix::try_from(vec![
            vec![(2, 2), (-1, 3)], //
            vec![(3, -1), (0, 0)],
        ])
        .unwrap()
    }

    fn totals(score: &Score) -> (Total, Total) {
        (score.p1.1, score.p2.1)
    }

    #[test]
    fn grudge_loses_only_the_first_round() {
        let ref m = dilemma();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let score = Match::new(m, Grudge::default(), AlwaysDefect)
            .play(1000, rng)
            .unwrap();
        assert_eq!(totals(&score), (-1, 3));
    }

    #[test]
    fn cooperator_is_exploited_every_round() {
        let ref m = dilemma();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let score = Match::new(m, AlwaysCooperate, AlwaysDefect)
            .play(1000, rng)
            .unwrap();
        assert_eq!(totals(&score), (-1000, 3000));
    }

    #[test]
    fn mutual_cooperation_is_stable() {
        let ref m = dilemma();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let score = Match::new(m, TitForTat::default(), AlwaysCooperate)
            .play(1000, rng)
            .unwrap();
        assert_eq!(totals(&score), (2000, 2000));
    }

    #[test]
    fn random_play_is_reproducible_from_a_seed() {
        let ref m = dilemma();
        let a = Match::new(m, Uniform::new(2), TitForTat::default())
            .play(100, &mut SmallRng::seed_from_u64(42))
            .unwrap();
        let b = Match::new(m, Uniform::new(2), TitForTat::default())
            .play(100, &mut SmallRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_actions_fail() {
        let ref m = PayoffMatrix::try_from(vec![vec![(1, 1)]]).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let result = Match::new(m, AlwaysDefect, AlwaysCooperate).play(1, rng);
        assert!(matches!(result, Err(GameError::LabelRange(_))));
    }

    #[test]
    fn report_text_matches_scoreboard() {
        let ref m = dilemma();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let score = Match::new(m, TitForTat::default(), AlwaysDefect)
            .play(10, rng)
            .unwrap();
        assert_eq!(
            score.to_string(),
            "Game Over. End of 10 simulations\n\
             \tPlayer 1 scored: -1 using Tit for Tat\n\
             \tPlayer 2 scored: 3 using Always Defect\n"
        );
    }
}
