use super::evaluator::Evaluator;
use super::kickers::Kickers;
use super::ranking::Arity;
use super::ranking::Ranking;
use crate::Score;
use crate::cards::Hand;

/// A fully-evaluated high hand.
///
/// Combines a [`Ranking`] with [`Kickers`] under one [`Arity`]. The packed
/// score is `digit(ranking) * 13^size + kickers`, so the category always
/// dominates and kickers break ties inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strength {
    arity: Arity,
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn score(&self) -> Score {
        self.arity.digit(self.value) * self.arity.radix() + Score::from(&self.kicks)
    }
}

impl From<(Arity, Hand)> for Strength {
    fn from((arity, hand): (Arity, Hand)) -> Self {
        let eval = Evaluator::from((arity, hand));
        let value = eval.find_ranking();
        let kicks = eval.find_kickers(value);
        Self { arity, value, kicks }
    }
}

impl Ord for Strength {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        debug_assert!(self.arity == other.arity);
        self.score().cmp(&other.score())
    }
}
impl PartialOrd for Strength {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}{:>6}", self.value, self.kicks)
    }
}
