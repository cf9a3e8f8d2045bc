use super::kickers::Kickers;
use super::ranking::Arity;
use super::ranking::Ranking;
use crate::cards::Hand;
use crate::cards::Rank;

/// A lazy evaluator for a high hand of exactly four or five cards.
///
/// Holds the rank-count and suit-count histograms of the hand and searches
/// categories from strongest to weakest, in the order of the hand's [`Arity`].
/// Handing it a hand of the wrong size is a bug in the caller, not bad input.
pub struct Evaluator {
    arity: Arity,
    ranks: [u8; Rank::COUNT],
    suits: [u8; 4],
}

impl From<(Arity, Hand)> for Evaluator {
    fn from((arity, hand): (Arity, Hand)) -> Self {
        assert!(
            hand.size() == arity.size(),
            "{}-card evaluator given {} cards: {}",
            arity.size(),
            hand.size(),
            hand
        );
        Self {
            arity,
            ranks: hand.ranks(),
            suits: hand.suits(),
        }
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        match self.arity {
            Arity::Five => None
                .or_else(|| self.find_straight_flush())
                .or_else(|| self.find_4_oak())
                .or_else(|| self.find_3_oak_2_oak())
                .or_else(|| self.find_flush())
                .or_else(|| self.find_straight())
                .or_else(|| self.find_3_oak())
                .or_else(|| self.find_2_oak_2_oak())
                .or_else(|| self.find_2_oak())
                .unwrap_or(Ranking::HighCard),
            Arity::Four => None
                .or_else(|| self.find_straight_flush())
                .or_else(|| self.find_4_oak())
                .or_else(|| self.find_3_oak())
                .or_else(|| self.find_flush())
                .or_else(|| self.find_straight())
                .or_else(|| self.find_2_oak_2_oak())
                .or_else(|| self.find_2_oak())
                .unwrap_or(Ranking::HighCard),
        }
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking {
            Ranking::Straight | Ranking::StraightFlush => {
                let top = self
                    .find_rank_of_straight()
                    .expect("straight ranking implies a straight");
                // the wheel's ace sits below the deuce, saturating at slot 0
                (0..self.arity.size() as u8)
                    .map(|i| u8::from(top).saturating_sub(i))
                    .map(Rank::from)
                    .collect::<Vec<_>>()
                    .into()
            }
            _ => {
                let mut ranks = Rank::all()
                    .into_iter()
                    .rev()
                    .filter(|r| self.count(r) > 0)
                    .collect::<Vec<_>>();
                ranks.sort_by_key(|r| std::cmp::Reverse(self.count(r)));
                ranks
                    .into_iter()
                    .flat_map(|r| std::iter::repeat_n(r, self.count(&r) as usize))
                    .collect::<Vec<_>>()
                    .into()
            }
        }
    }

    fn find_2_oak(&self) -> Option<Ranking> {
        self.has_n_oak(2).then_some(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.has_n_oak(3).then_some(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.has_n_oak(4).then_some(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        let pairs = self.ranks.iter().filter(|&&n| n == 2).count();
        (pairs >= 2).then_some(Ranking::TwoPair)
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        (self.has_n_oak(3) && self.has_n_oak(2)).then_some(Ranking::FullHouse)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight().map(|_| Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.is_flush().then_some(Ranking::Flush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_rank_of_straight()
            .filter(|_| self.is_flush())
            .map(|_| Ranking::StraightFlush)
    }

    /// Top rank of a run of `size` occupied slots, scanning down from the ace,
    /// else the wheel (ace with the lowest `size - 1` ranks) topped by its highest low card.
    fn find_rank_of_straight(&self) -> Option<Rank> {
        let n = self.arity.size();
        let mut run = 0;
        for slot in (0..Rank::COUNT).rev() {
            match self.ranks[slot] {
                0 => run = 0,
                _ => run += 1,
            }
            if run == n {
                return Some(Rank::from((slot + n - 1) as u8));
            }
        }
        let ace = self.ranks[u8::from(Rank::Ace) as usize] > 0;
        let low = self.ranks[..n - 1].iter().all(|&count| count > 0);
        (ace && low).then(|| Rank::from((n - 2) as u8))
    }
    fn is_flush(&self) -> bool {
        self.suits
            .iter()
            .any(|&count| count as usize == self.arity.size())
    }
    fn has_n_oak(&self, n: u8) -> bool {
        self.ranks.iter().any(|&count| count == n)
    }
    fn count(&self, rank: &Rank) -> u8 {
        self.ranks[u8::from(*rank) as usize]
    }
}
