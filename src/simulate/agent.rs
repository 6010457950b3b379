use crate::*;
use rand::RngCore;

/// A strategy that picks one action per round of an iterated match.
pub trait Agent {
    /// Choose this round's action index.
    fn act(&mut self, rng: &mut dyn RngCore) -> Index;
    /// Observe the opponent's action from the round just played.
    fn learn(&mut self, theirs: Index);
    /// Human-readable strategy name.
    fn name(&self) -> String;
}

impl Agent for Box<dyn Agent> {
    fn act(&mut self, rng: &mut dyn RngCore) -> Index {
        (**self).act(rng)
    }
    fn learn(&mut self, theirs: Index) {
        (**self).learn(theirs)
    }
    fn name(&self) -> String {
        (**self).name()
    }
}
