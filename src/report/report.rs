use crate::*;
use serde::Serialize;

/// Every analysis of one game.
///
/// Dominance is reported for the strict relation and for the chosen weak
/// relation. Equilibria and security strategies always read the full matrix,
/// not the game left after elimination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub shape: Shape,
    pub strict: Elimination,
    pub weak: Elimination,
    pub nash: Vec<Outcome>,
    pub pareto: Vec<Outcome>,
    pub minimax: Strategies,
    pub maximin: Strategies,
}

impl Report {
    pub fn analyze(matrix: &PayoffMatrix, weak: Dominance) -> Result<Self, GameError> {
        let shape = matrix.shape();
        shape.check()?;
        log::info!("analyzing {} game", shape);
        Ok(Self {
            shape,
            strict: Elimination::run(matrix, Dominance::Strict)?,
            weak: Elimination::run(matrix, weak)?,
            nash: find_nash_equilibria(matrix)?,
            pareto: find_pareto_optimal(matrix)?,
            minimax: minimax_strategy(matrix)?,
            maximin: maximin_strategy(matrix)?,
        })
    }
}

fn outcomes(list: &[Outcome]) -> String {
    if list.is_empty() {
        String::from("none")
    } else {
        list.iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn rounds(f: &mut std::fmt::Formatter<'_>, elimination: &Elimination) -> std::fmt::Result {
    if elimination.is_empty() {
        writeln!(f, "  none")
    } else {
        for line in elimination.to_string().lines() {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Strictly dominated:")?;
        rounds(f, &self.strict)?;
        writeln!(f, "Weakly dominated ({}):", self.weak.relation())?;
        rounds(f, &self.weak)?;
        writeln!(f, "Nash equilibria: {}", outcomes(&self.nash))?;
        writeln!(f, "Pareto optimal:  {}", outcomes(&self.pareto))?;
        writeln!(f, "Minimax regret:  P1 {} regret {} | P2 {} regret {}", self.minimax.row, self.minimax.row.value, self.minimax.col, self.minimax.col.value)?;
        writeln!(f, "Maximin:         P1 {} value {} | P2 {} value {}", self.maximin.row, self.maximin.row.value, self.maximin.col, self.maximin.col.value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dilemma() -> PayoffMatrix {
        PayoffMatrix::try_from(vec![
            vec![(2, 2), (-1, 3)], //
            vec![(3, -1), (0, 0)],
        ])
        .unwrap()
    }

    #[test]
    fn renders_every_section() {
        let report = Report::analyze(&dilemma(), Dominance::Weak).unwrap();
        let expected = "\
Strictly dominated:
  ELIMINATE A Y
Weakly dominated (weak):
  ELIMINATE A Y
Nash equilibria: (B,Z)
Pareto optimal:  (A,Y) (A,Z) (B,Y)
Minimax regret:  P1 [B] regret 0 | P2 [Z] regret 0
Maximin:         P1 [B] value 0 | P2 [Z] value 0
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn empty_sections_say_none() {
        let pennies = PayoffMatrix::try_from(vec![
            vec![(1, -1), (-1, 1)], //
            vec![(-1, 1), (1, -1)],
        ])
        .unwrap();
        let text = Report::analyze(&pennies, Dominance::Proper)
            .unwrap()
            .to_string();
        assert!(text.contains("Strictly dominated:\n  none\n"));
        assert!(text.contains("Weakly dominated (proper):\n  none\n"));
        assert!(text.contains("Nash equilibria: none\n"));
    }

    #[test]
    fn serializes_to_json() {
        let report = Report::analyze(&dilemma(), Dominance::Weak).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["nash"][0], serde_json::json!(["B", "Z"]));
        assert_eq!(json["maximin"]["row"]["value"], serde_json::json!(0));
        assert_eq!(json["strict"]["rounds"][0], serde_json::json!(["A", "Y"]));
    }
}
