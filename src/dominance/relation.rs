use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Which comparison counts as one action dominating another.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dominance {
    /// Strictly better against every live opposing action.
    Strict,
    /// At least as good against every live opposing action.
    /// Identical actions weakly dominate each other.
    #[default]
    Weak,
    /// At least as good everywhere and strictly better somewhere.
    Proper,
}

impl Dominance {
    /// Does `better` dominate `worse` for the player on `axis`, comparing
    /// only against opposing actions that are still live in `mask`?
    ///
    /// With no live opposing action there is nothing to compare against and
    /// the answer is always false.
    pub fn dominates(
        &self,
        matrix: &PayoffMatrix,
        mask: &Mask,
        axis: Axis,
        better: Index,
        worse: Index,
    ) -> bool {
        let mut compared = false;
        let mut gained = false;
        for k in mask.live(axis.other()) {
            let b = matrix.reward(axis, better, k);
            let w = matrix.reward(axis, worse, k);
            compared = true;
            gained |= b > w;
            match self {
                Self::Strict if b <= w => return false,
                Self::Weak | Self::Proper if b < w => return false,
                _ => continue,
            }
        }
        match self {
            Self::Proper => compared && gained,
            _ => compared,
        }
    }
}

impl std::fmt::Display for Dominance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Weak => write!(f, "weak"),
            Self::Proper => write!(f, "proper"),
        }
    }
}

impl std::str::FromStr for Dominance {
    type Err = GameError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "weak" => Ok(Self::Weak),
            "proper" => Ok(Self::Proper),
            _ => Err(GameError::malformed(format!("unknown dominance {:?}", s))),
        }
    }
}
