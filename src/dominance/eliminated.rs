use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Ordered, duplicate-free record of labels removed from consideration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Label>", into = "Vec<Label>")]
pub struct Eliminated(Vec<Label>);

impl Eliminated {
    pub fn contains(&self, label: &Label) -> bool {
        self.0.contains(label)
    }
    /// Appends `label` unless it is already recorded. Returns whether it was new.
    pub fn push(&mut self, label: Label) -> bool {
        if self.contains(&label) {
            false
        } else {
            self.0.push(label);
            true
        }
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.0.iter()
    }
}

impl From<Vec<Label>> for Eliminated {
    fn from(labels: Vec<Label>) -> Self {
        let mut eliminated = Self::default();
        for label in labels {
            eliminated.push(label);
        }
        eliminated
    }
}

impl From<Eliminated> for Vec<Label> {
    fn from(eliminated: Eliminated) -> Self {
        eliminated.0
    }
}

impl Extend<Label> for Eliminated {
    fn extend<I: IntoIterator<Item = Label>>(&mut self, labels: I) {
        for label in labels {
            self.push(label);
        }
    }
}
