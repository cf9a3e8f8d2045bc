use crate::Score;

/// A high hand's category, without its kicker cards.
///
/// Categories are not ordered on their own: the 4-card discipline has no
/// full house and puts three-of-a-kind above flush and straight. Ask an
/// [`Arity`] for the digit that orders a category within its discipline.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Ranking {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOAK,
    Straight,
    Flush,
    FullHouse,
    FourOAK,
    StraightFlush,
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPair => write!(f, "TwoPair"),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOAK => write!(f, "FourOfAKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}

/// Number of cards in a high hand, which fixes the scoring discipline.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Arity {
    Four = 4,
    Five = 5,
}

impl Arity {
    pub fn size(&self) -> usize {
        *self as usize
    }
    /// 13^size. every kicker packs strictly below this
    pub fn radix(&self) -> Score {
        (13 as Score).pow(self.size() as u32)
    }
    /// Most significant digit of a score in this discipline.
    pub fn digit(&self, ranking: Ranking) -> Score {
        match self {
            Arity::Five => match ranking {
                Ranking::HighCard => 0,
                Ranking::OnePair => 1,
                Ranking::TwoPair => 2,
                Ranking::ThreeOAK => 3,
                Ranking::Straight => 4,
                Ranking::Flush => 5,
                Ranking::FullHouse => 6,
                Ranking::FourOAK => 7,
                Ranking::StraightFlush => 8,
            },
            Arity::Four => match ranking {
                Ranking::HighCard => 1,
                Ranking::OnePair => 2,
                Ranking::TwoPair => 3,
                Ranking::Straight => 4,
                Ranking::Flush => 5,
                Ranking::ThreeOAK => 6,
                Ranking::FourOAK => 7,
                Ranking::StraightFlush => 8,
                Ranking::FullHouse => unreachable!("four cards cannot make a full house"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_card_digits_ascend() {
        let order = [
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPair,
            Ranking::ThreeOAK,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOAK,
            Ranking::StraightFlush,
        ];
        assert!(order.windows(2).all(|w| Arity::Five.digit(w[0]) < Arity::Five.digit(w[1])));
    }

    #[test]
    fn four_card_trips_over_flush() {
        let order = [
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPair,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::ThreeOAK,
            Ranking::FourOAK,
            Ranking::StraightFlush,
        ];
        assert!(order.windows(2).all(|w| Arity::Four.digit(w[0]) < Arity::Four.digit(w[1])));
    }

    #[test]
    fn radix() {
        assert_eq!(Arity::Four.radix(), 28561);
        assert_eq!(Arity::Five.radix(), 371293);
    }

}
