//! Whitespace-delimited text format.
//!
//! ```text
//! R C
//! <R*C row-player payoffs, row-major>
//! <R*C column-player payoffs, row-major>
//! ```
//!
//! Line breaks carry no meaning; only the token order does.
use crate::*;
use std::str::FromStr;

impl FromStr for PayoffMatrix {
    type Err = GameError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ref mut tokens = s.split_whitespace();
        let rows = dimension(tokens, "row count")?;
        let cols = dimension(tokens, "column count")?;
        let count = rows
            .checked_mul(cols)
            .ok_or_else(|| GameError::malformed(format!("{}x{} cells overflow", rows, cols)))?;
        let p1 = rewards(tokens, count, "row player")?;
        let p2 = rewards(tokens, count, "column player")?;
        if let Some(extra) = tokens.next() {
            return Err(GameError::malformed(format!(
                "unexpected trailing token {:?}",
                extra
            )));
        }
        let cells = p1
            .chunks(cols)
            .zip(p2.chunks(cols))
            .map(|(r1, r2)| r1.iter().zip(r2).map(|(a, b)| Payoff(*a, *b)).collect())
            .collect::<Vec<Vec<Payoff>>>();
        Self::try_from(cells)
    }
}

impl PayoffMatrix {
    /// Read and parse a payoff file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GameError::malformed(format!("{}: {}", path.display(), e)))?;
        let matrix = text.parse::<Self>()?;
        log::debug!(
            "parsed {}x{} matrix from {}",
            matrix.rows(),
            matrix.cols(),
            path.display()
        );
        Ok(matrix)
    }
}

fn dimension<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<Index, GameError> {
    let token = tokens
        .next()
        .ok_or_else(|| GameError::malformed(format!("missing {}", what)))?;
    match token.parse::<Index>() {
        Ok(0) => Err(GameError::malformed(format!("{} is zero", what))),
        Ok(n) => Ok(n),
        Err(_) => Err(GameError::malformed(format!("{} {:?} is not a count", what, token))),
    }
}

fn rewards<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    n: usize,
    whose: &str,
) -> Result<Vec<Reward>, GameError> {
    (0..n)
        .map(|k| {
            let token = tokens.next().ok_or_else(|| {
                GameError::malformed(format!("{} payoffs: expected {}, found {}", whose, n, k))
            })?;
            token.parse::<Reward>().map_err(|_| {
                GameError::malformed(format!("{} payoff {:?} is not an integer", whose, token))
            })
        })
        .collect()
}
