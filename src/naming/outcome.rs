use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One matrix cell named by its row and column labels.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Outcome(pub Label, pub Label);

impl Outcome {
    pub fn row(&self) -> Label {
        self.0
    }
    pub fn col(&self) -> Label {
        self.1
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}
