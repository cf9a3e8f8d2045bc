use super::card::Card;
use super::error::ParseError;
use super::rank::Rank;
use super::suit::Suit;

/// Hand represents an unordered set of Cards, stored as a 52-bit bitstring in a u64.
/// Each bit is a unique card, so a Hand can never hold a duplicate, and set algebra
/// (union, disjointness, membership) is a single bitwise operation.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    /// disjoint union. overlapping hands are a caller bug
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0, "hands overlap: {} & {}", lhs, rhs);
        Self(lhs.0 | rhs.0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    /// rank-count histogram, indexed by rank slot
    pub fn ranks(&self) -> [u8; Rank::COUNT] {
        self.into_iter().fold([0; Rank::COUNT], |mut counts, card| {
            counts[u8::from(card.rank()) as usize] += 1;
            counts
        })
    }
    /// suit-count histogram, indexed by suit slot
    pub fn suits(&self) -> [u8; Suit::COUNT] {
        self.into_iter().fold([0; Suit::COUNT], |mut counts, card| {
            counts[u8::from(card.suit()) as usize] += 1;
            counts
        })
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000001011000000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        cards
            .iter()
            .copied()
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

/// str isomorphism
/// whitespace-separated card tokens of any count, duplicates rejected
impl TryFrom<&str> for Hand {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .try_fold(Hand::empty(), |hand, card| {
                let card = card?;
                match hand.contains(&card) {
                    true => Err(ParseError::Duplicate(card)),
                    false => Ok(Hand::add(hand, Hand::from(card))),
                }
            })
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .into_iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", cards)
    }
}
