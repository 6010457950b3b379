use crate::*;
use rand::RngCore;

/// Cooperates first, then repeats the opponent's previous action.
#[derive(Debug, Clone, Default)]
pub struct TitForTat {
    last: Option<Index>,
}

impl Agent for TitForTat {
    fn act(&mut self, _: &mut dyn RngCore) -> Index {
        self.last.unwrap_or(COOPERATE)
    }
    fn learn(&mut self, theirs: Index) {
        self.last = Some(theirs);
    }
    fn name(&self) -> String {
        String::from("Tit for Tat")
    }
}

/// Cooperates until the opponent defects once, then defects forever.
#[derive(Debug, Clone, Default)]
pub struct Grudge {
    betrayed: bool,
}

impl Agent for Grudge {
    fn act(&mut self, _: &mut dyn RngCore) -> Index {
        if self.betrayed { DEFECT } else { COOPERATE }
    }
    fn learn(&mut self, theirs: Index) {
        self.betrayed |= theirs == DEFECT;
    }
    fn name(&self) -> String {
        String::from("Grudge")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysCooperate;

impl Agent for AlwaysCooperate {
    fn act(&mut self, _: &mut dyn RngCore) -> Index {
        COOPERATE
    }
    fn learn(&mut self, _: Index) {}
    fn name(&self) -> String {
        String::from("Always Cooperate")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDefect;

impl Agent for AlwaysDefect {
    fn act(&mut self, _: &mut dyn RngCore) -> Index {
        DEFECT
    }
    fn learn(&mut self, _: Index) {}
    fn name(&self) -> String {
        String::from("Always Defect")
    }
}

/// Plays one named action every round.
#[derive(Debug, Clone)]
pub struct Fixed {
    index: Index,
    label: String,
}

impl Fixed {
    pub fn new(index: Index, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }
}

impl Agent for Fixed {
    fn act(&mut self, _: &mut dyn RngCore) -> Index {
        self.index
    }
    fn learn(&mut self, _: Index) {}
    fn name(&self) -> String {
        format!("Always Play {}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn tit_for_tat_mirrors_with_one_round_lag() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = TitForTat::default();
        assert_eq!(agent.act(rng), COOPERATE);
        agent.learn(DEFECT);
        assert_eq!(agent.act(rng), DEFECT);
        agent.learn(COOPERATE);
        assert_eq!(agent.act(rng), COOPERATE);
    }

    #[test]
    fn grudge_never_forgives() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = Grudge::default();
        agent.learn(COOPERATE);
        assert_eq!(agent.act(rng), COOPERATE);
        agent.learn(DEFECT);
        agent.learn(COOPERATE);
        assert_eq!(agent.act(rng), DEFECT);
    }

    #[test]
    fn fixed_names_its_action() {
        let agent = Fixed::new(2, "C");
        assert_eq!(agent.name(), "Always Play C");
    }
}
