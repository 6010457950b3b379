use crate::*;

/// Neither player can gain by deviating alone from `outcome`.
pub fn is_nash_equilibrium(matrix: &PayoffMatrix, outcome: &Outcome) -> Result<bool, GameError> {
    let (i, j) = matrix.shape().cell(outcome)?;
    Ok(stable(matrix, i, j))
}

fn stable(matrix: &PayoffMatrix, i: Index, j: Index) -> bool {
    let here = matrix.get(i, j);
    let row_stays = (0..matrix.rows()).all(|r| matrix.get(r, j).row() <= here.row());
    let col_stays = (0..matrix.cols()).all(|c| matrix.get(i, c).col() <= here.col());
    row_stays && col_stays
}

/// Every pure-strategy Nash equilibrium in row-major order.
pub fn find_nash_equilibria(matrix: &PayoffMatrix) -> Result<Vec<Outcome>, GameError> {
    let shape = matrix.shape();
    shape.check()?;
    let equilibria = matrix
        .cells()
        .filter(|(i, j, _)| stable(matrix, *i, *j))
        .map(|(i, j, _)| shape.outcome(i, j))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("{} pure nash equilibria in {} game", equilibria.len(), shape);
    Ok(equilibria)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(r: char, c: char) -> Outcome {
        Outcome(Label::try_from(r).unwrap(), Label::try_from(c).unwrap())
    }

    #[test]
    fn dilemma_equilibrium_is_mutual_defection() {
        let m = PayoffMatrix::try_from(vec![
            vec![(2, 2), (-1, 3)], //
            vec![(3, -1), (0, 0)],
        ])
        .unwrap();
        assert_eq!(find_nash_equilibria(&m).unwrap(), vec![outcome('B', 'Z')]);
    }

    #[test]
    fn coordination_has_two_equilibria() {
        let m = PayoffMatrix::try_from(vec![
            vec![(2, 1), (0, 0)], //
            vec![(0, 0), (1, 2)],
        ])
        .unwrap();
        assert_eq!(
            find_nash_equilibria(&m).unwrap(),
            vec![outcome('A', 'Y'), outcome('B', 'Z')]
        );
    }

    #[test]
    fn tests_single_outcomes_by_label() {
        let m = PayoffMatrix::try_from(vec![
            vec![(2, 1), (0, 0)], //
            vec![(0, 0), (1, 2)],
        ])
        .unwrap();
        assert!(is_nash_equilibrium(&m, &outcome('A', 'Y')).unwrap());
        assert!(!is_nash_equilibrium(&m, &outcome('A', 'Z')).unwrap());
        assert!(matches!(
            is_nash_equilibrium(&m, &outcome('A', 'X')),
            Err(GameError::LabelRange(_))
        ));
        assert!(matches!(
            is_nash_equilibrium(&m, &outcome('Y', 'Z')),
            Err(GameError::LabelRange(_))
        ));
    }

    #[test]
    fn matching_pennies_has_none() {
        let m = PayoffMatrix::try_from(vec![
            vec![(1, -1), (-1, 1)], //
            vec![(-1, 1), (1, -1)],
        ])
        .unwrap();
        assert!(find_nash_equilibria(&m).unwrap().is_empty());
    }

    #[test]
    fn singleton_is_an_equilibrium() {
        let m = PayoffMatrix::try_from(vec![vec![(-3, 7)]]).unwrap();
        assert_eq!(find_nash_equilibria(&m).unwrap(), vec![outcome('A', 'Z')]);
    }

    #[test]
    fn agrees_with_best_response_tables() {
        for _ in 0..256 {
            let m = PayoffMatrix::random();
            let best_row = (0..m.cols())
                .map(|j| (0..m.rows()).map(|i| m.get(i, j).row()).max().unwrap())
                .collect::<Vec<_>>();
            let best_col = (0..m.rows())
                .map(|i| (0..m.cols()).map(|j| m.get(i, j).col()).max().unwrap())
                .collect::<Vec<_>>();
            let brute = m
                .cells()
                .filter(|(i, j, p)| p.row() == best_row[*j] && p.col() == best_col[*i])
                .map(|(i, j, _)| m.shape().outcome(i, j).unwrap())
                .collect::<Vec<_>>();
            assert_eq!(find_nash_equilibria(&m).unwrap(), brute);
        }
    }
}
