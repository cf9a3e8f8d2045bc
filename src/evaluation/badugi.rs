use crate::BADUGI_CEILING;
use crate::BADUGI_COUNT_WEIGHT;
use crate::Score;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;

/// The Badugi subset of a hand: at most four cards, pairwise distinct in
/// both rank and suit, chosen greedily from the lowest rank up.
///
/// Selection scans ranks 2 through Ace and, within a rank, suits in
/// canonical order, admitting a card whenever neither its rank nor its suit
/// is taken yet. Cards are kept in selection order, which is ascending rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badugi(Vec<Card>);

impl Badugi {
    pub const SIZE: usize = 4;

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// A full four-card Badugi whose highest card, counting the ace low,
    /// is an eight or better.
    pub fn qualifies(&self) -> bool {
        self.size() == Self::SIZE
            && self
                .0
                .iter()
                .map(|c| c.rank().ace_low())
                .all(|low| low <= Rank::Eight.ace_low())
    }
    /// More cards always beat fewer; among equal counts the lower ranks win.
    /// Inverted under a large ceiling so that greater means stronger.
    pub fn score(&self) -> Score {
        let missing = (Self::SIZE - self.size()) as Score * BADUGI_COUNT_WEIGHT;
        let ranks = self
            .0
            .iter()
            .map(|c| u8::from(c.rank()) as Score)
            .fold(0, |acc, rank| acc * 13 + rank);
        BADUGI_CEILING - (missing * Self::radix() + ranks)
    }
    /// 13^4. packed ranks of any selection sit strictly below this
    fn radix() -> Score {
        (Rank::COUNT as Score).pow(Self::SIZE as u32)
    }
}

impl From<Hand> for Badugi {
    fn from(hand: Hand) -> Self {
        let mut chosen = Vec::with_capacity(Self::SIZE);
        let mut suits = [false; Suit::COUNT];
        for rank in Rank::all() {
            for suit in Suit::all() {
                if chosen.len() == Self::SIZE {
                    return Self(chosen);
                }
                let card = Card::from((rank, suit));
                let s = u8::from(suit) as usize;
                if hand.contains(&card) && !suits[s] {
                    chosen.push(card);
                    suits[s] = true;
                    break;
                }
            }
        }
        Self(chosen)
    }
}

impl std::fmt::Display for Badugi {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}-card {}", self.size(), cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badugi(s: &str) -> Badugi {
        Badugi::from(Hand::try_from(s).unwrap())
    }
    fn score(s: &str) -> Score {
        badugi(s).score()
    }

    #[test]
    fn four_cards_beat_three() {
        assert!(score("As 2d 3h 4c") > score("As 2d 3h 3c"));
    }

    #[test]
    fn lower_top_card_wins() {
        assert!(score("As 2d 3h 4c") > score("As 2d 3h 5c"));
        assert!(score("2s 3d 4h 5c") > score("2s 3d 4h 6c"));
    }

    #[test]
    fn three_cards_beat_two() {
        assert!(score("Ks Qd Jh Jc") > score("2s 3s 4h 5h"));
    }

    #[test]
    fn more_cards_always_win() {
        let one = score("Ks Kd Kh Kc");
        let two = score("2s 4h 4s 2h");
        let three = score("2c 3d 4h 4c");
        let four = score("Ks Qd Jh Tc");
        assert!(four > three);
        assert!(three > two);
        assert!(two > one);
        assert!(three > one);
    }

    #[test]
    fn four_card_packing_unchanged() {
        assert_eq!(score("2s 3d 4h 5c"), BADUGI_CEILING - (169 + 2 * 13 + 3));
    }

    #[test]
    fn selection_is_rank_and_suit_distinct() {
        let b = badugi("2c 2d 3c 5h");
        let expected = Hand::try_from("2c 5h").unwrap();
        assert_eq!(b.size(), 2);
        assert_eq!(b.cards(), Vec::<Card>::from(expected).as_slice());
    }

    #[test]
    fn selection_keeps_ascending_rank_order() {
        let b = badugi("Ks Qd Jh Jc");
        let ranks = b.cards().iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(ranks, vec![Rank::Jack, Rank::Queen, Rank::King]);
        assert_eq!(b.cards()[0], Card::try_from("Jc").unwrap());
    }

    #[test]
    fn monochrome_is_one_card() {
        let b = badugi("9h 4h Kh 7h");
        assert_eq!(b.size(), 1);
        assert_eq!(b.cards()[0], Card::try_from("4h").unwrap());
    }

    #[test]
    fn quads_are_one_card() {
        assert_eq!(badugi("As Ad Ah Ac").size(), 1);
    }

    #[test]
    fn order_independent() {
        assert_eq!(score("4c 3h 2d As"), score("As 2d 3h 4c"));
        assert_eq!(score("4c 3h 2d As"), score("4c 3h 2d As"));
    }

    #[test]
    fn eight_or_better() {
        assert!(badugi("8s 7d 3h 2c").qualifies());
        assert!(badugi("7s 5d 3h 2c").qualifies());
        assert!(badugi("As 2d 3h 4c").qualifies());
        assert!(!badugi("9s 7d 3h 2c").qualifies());
        assert!(!badugi("8s 8d 3h 2c").qualifies());
    }

    #[test]
    fn score_sits_below_ceiling() {
        let s = score("As 2d 3h 4c");
        assert!(s < BADUGI_CEILING);
        assert!(s > 0);
    }
}
