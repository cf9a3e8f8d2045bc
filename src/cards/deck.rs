use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// An ordered pile of the cards still available to deal.
///
/// Starts as all 52 cards in ascending byte order. Removal is set-based and
/// order-preserving; drawing is a partial Fisher-Yates shuffle over the
/// remaining positions, so the undrawn suffix is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self((0..Card::COUNT).map(Card::from).collect())
    }
    /// A fresh deck minus every card in `removed`.
    pub fn without(removed: Hand) -> Self {
        let mut deck = Self::new();
        deck.remove(removed);
        deck
    }
    /// Filters out every card in `removed`, preserving the order of the rest.
    pub fn remove(&mut self, removed: Hand) {
        self.0.retain(|card| !removed.contains(card));
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Draws `n` distinct cards uniformly without replacement.
    ///
    /// Position `i` is swapped with a uniform position in `i..len` for each
    /// of the `n` draws; the shuffled prefix is returned and the untouched
    /// suffix stays behind as the deck. Asking for more cards than remain
    /// means the caller sized its deal wrong.
    pub fn draw<R>(&mut self, n: usize, rng: &mut R) -> Hand
    where
        R: Rng + ?Sized,
    {
        assert!(
            n <= self.0.len(),
            "cannot draw {} cards from a deck of {}",
            n,
            self.0.len()
        );
        for i in 0..n {
            let j = rng.random_range(i..self.0.len());
            self.0.swap(i, j);
        }
        let rest = self.0.split_off(n);
        let drawn = std::mem::replace(&mut self.0, rest);
        Hand::from(drawn.as_slice())
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        Hand::from(deck.0.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fresh_deck_is_complete() {
        let deck = Deck::new();
        assert_eq!(deck.len(), 52);
        assert_eq!(Hand::from(deck).size(), 52);
    }

    #[test]
    fn removal_preserves_order() {
        let removed = Hand::try_from("2c As Td").unwrap();
        let deck = Deck::without(removed);
        assert_eq!(deck.len(), 49);
        assert!(deck.cards().windows(2).all(|w| w[0] < w[1]));
        assert!(removed.into_iter().all(|c| !deck.contains(&c)));
    }

    #[test]
    fn draw_without_replacement() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::without(Hand::try_from("As Ad Ah Ac").unwrap());
        let a = deck.draw(5, rng);
        let b = deck.draw(5, rng);
        assert_eq!(a.size(), 5);
        assert_eq!(b.size(), 5);
        assert_eq!(deck.len(), 48 - 10);
        let both = Hand::add(a, b);
        assert!(both.into_iter().all(|c| !deck.contains(&c)));
        assert!(both.into_iter().all(|c| c.rank() != crate::cards::Rank::Ace));
    }

    #[test]
    fn draw_everything() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut deck = Deck::new();
        let all = deck.draw(52, rng);
        assert_eq!(all.size(), 52);
        assert!(deck.is_empty());
    }

    #[test]
    fn seeded_draws_repeat() {
        let mut x = Deck::new();
        let mut y = Deck::new();
        let a = x.draw(4, &mut SmallRng::seed_from_u64(99));
        let b = y.draw(4, &mut SmallRng::seed_from_u64(99));
        assert_eq!(a, b);
        assert_eq!(x, y);
    }

    #[test]
    #[should_panic]
    fn overdraw_panics() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut deck = Deck::without(Hand::try_from("As Ad Ah Ac").unwrap());
        deck.draw(49, rng);
    }
}
