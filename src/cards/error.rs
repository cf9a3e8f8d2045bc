use super::card::Card;

/// Failure to read cards from user text.
///
/// Every variant carries enough of the offending input to point at it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid card {0:?}: expected 2 characters")]
    Length(String),
    #[error("invalid rank character {0:?}")]
    Rank(char),
    #[error("invalid suit character {0:?}")]
    Suit(char),
    #[error("need exactly 4 cards, got {0}")]
    Count(usize),
    #[error("duplicate card {0}")]
    Duplicate(Card),
}
