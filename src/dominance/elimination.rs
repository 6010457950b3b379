use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Iterated elimination of dominated actions, one entry per round.
///
/// Each round scans the original matrix with every previously eliminated
/// label masked out, then removes everything it found at once. The process
/// stops at the first round that finds nothing, so every recorded round is
/// non-empty and no label appears twice. An empty `rounds` means the game
/// had no dominated action at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    relation: Dominance,
    rounds: Vec<Vec<Label>>,
}

impl Elimination {
    pub fn run(matrix: &PayoffMatrix, relation: Dominance) -> Result<Self, GameError> {
        matrix.shape().check()?;
        let mut eliminated = Eliminated::default();
        let mut rounds = Vec::new();
        loop {
            let found = find_dominated(matrix, &eliminated, relation)?;
            if found.is_empty() {
                break;
            }
            log::debug!(
                "{} elimination round {}: {}",
                relation,
                rounds.len() + 1,
                found.iter().map(|l| l.to_string()).collect::<Vec<_>>().join(" ")
            );
            eliminated.extend(found.iter().copied());
            rounds.push(found);
        }
        Ok(Self { relation, rounds })
    }
    pub fn relation(&self) -> Dominance {
        self.relation
    }
    pub fn rounds(&self) -> &[Vec<Label>] {
        &self.rounds
    }
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
    /// Everything removed, in elimination order.
    pub fn eliminated(&self) -> Eliminated {
        Eliminated::from(self.rounds.concat())
    }
    /// Labels on `axis` that survived every round.
    pub fn survivors(&self, matrix: &PayoffMatrix, axis: Axis) -> Result<Vec<Label>, GameError> {
        let ref eliminated = self.eliminated();
        Ok(matrix
            .shape()
            .labels(axis)?
            .into_iter()
            .filter(|label| !eliminated.contains(label))
            .collect())
    }
}

impl std::fmt::Display for Elimination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for round in &self.rounds {
            write!(f, "ELIMINATE")?;
            for label in round {
                write!(f, " {}", label)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(s: &str) -> Vec<Label> {
        s.chars().map(|c| Label::try_from(c).unwrap()).collect()
    }

    /// U/D against L/C/R; solvable by iterated strict dominance to (U, C).
    fn textbook() -> PayoffMatrix {
        PayoffMatrix::try_from(vec![
            vec![(1, 0), (1, 2), (0, 1)], //
            vec![(0, 3), (0, 1), (2, 0)],
        ])
        .unwrap()
    }

    #[test]
    fn textbook_game_unravels_one_action_per_round() {
        let m = textbook();
        let e = Elimination::run(&m, Dominance::Strict).unwrap();
        assert_eq!(e.rounds(), &[labels("Z"), labels("B"), labels("X")]);
        assert_eq!(e.survivors(&m, Axis::Row).unwrap(), labels("A"));
        assert_eq!(e.survivors(&m, Axis::Col).unwrap(), labels("Y"));
    }

    #[test]
    fn dilemma_resolves_in_one_round() {
        let m = PayoffMatrix::try_from(vec![
            vec![(2, 2), (-1, 3)], //
            vec![(3, -1), (0, 0)],
        ])
        .unwrap();
        let e = Elimination::run(&m, Dominance::Strict).unwrap();
        assert_eq!(e.rounds(), &[labels("AY")]);
        assert_eq!(e.to_string(), "ELIMINATE A Y\n");
    }

    #[test]
    fn no_dominance_means_no_rounds() {
        let pennies = PayoffMatrix::try_from(vec![
            vec![(1, -1), (-1, 1)], //
            vec![(-1, 1), (1, -1)],
        ])
        .unwrap();
        let e = Elimination::run(&pennies, Dominance::Weak).unwrap();
        assert!(e.is_empty());
        assert_eq!(e.to_string(), "");
    }

    #[test]
    fn eliminated_set_only_grows() {
        for relation in [Dominance::Strict, Dominance::Weak, Dominance::Proper] {
            for _ in 0..256 {
                let m = PayoffMatrix::random();
                let e = Elimination::run(&m, relation).unwrap();
                let mut seen = Eliminated::default();
                for round in e.rounds() {
                    assert!(!round.is_empty());
                    let before = seen.len();
                    for label in round {
                        assert!(seen.push(*label), "{} eliminated twice", label);
                    }
                    assert!(seen.len() > before);
                }
            }
        }
    }

    #[test]
    fn strict_elimination_keeps_one_action_per_axis() {
        for _ in 0..256 {
            let m = PayoffMatrix::random();
            let e = Elimination::run(&m, Dominance::Strict).unwrap();
            assert!(!e.survivors(&m, Axis::Row).unwrap().is_empty());
            assert!(!e.survivors(&m, Axis::Col).unwrap().is_empty());
        }
    }
}
