use super::card::Card;
use super::error::ParseError;
use super::hand::Hand;

/// The hero's four private starting cards, in the order they were given.
///
/// Construction guarantees four distinct cards, so every downstream deal can
/// treat [`Hand::from`] of a Pocket as a 4-card removal set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pocket([Card; 4]);

impl From<Pocket> for Hand {
    fn from(pocket: Pocket) -> Self {
        Hand::from(pocket.0.as_slice())
    }
}

/// str isomorphism
/// tokens may be separated by any mix of whitespace and commas: "Ac Kd 2h 3c", "Ac,Kd,2h,3c"
impl TryFrom<&str> for Pocket {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        if tokens.len() != 4 {
            return Err(ParseError::Count(tokens.len()));
        }
        let mut seen = Hand::empty();
        let mut cards = [Card::from(0); 4];
        for (slot, token) in cards.iter_mut().zip(tokens) {
            let card = Card::try_from(token)?;
            if seen.contains(&card) {
                return Err(ParseError::Duplicate(card));
            }
            seen = Hand::add(seen, Hand::from(card));
            *slot = card;
        }
        Ok(Self(cards))
    }
}

impl std::fmt::Display for Pocket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_separated() {
        let pocket = Pocket::try_from("Ac Kd 2h 3c").unwrap();
        assert_eq!(pocket.to_string(), "Ac Kd 2h 3c");
        assert_eq!(Hand::from(pocket).size(), 4);
    }

    #[test]
    fn comma_separated() {
        let a = Pocket::try_from("Ac,Kd,2h,3c").unwrap();
        let b = Pocket::try_from("ac, kd , 2h,3c").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_card() {
        let err = Pocket::try_from("As As Ah Ac").unwrap_err();
        assert_eq!(err, ParseError::Duplicate(Card::try_from("As").unwrap()));
    }

    #[test]
    fn too_few_cards() {
        assert_eq!(Pocket::try_from("As Ad Ah"), Err(ParseError::Count(3)));
        assert_eq!(Pocket::try_from(""), Err(ParseError::Count(0)));
    }

    #[test]
    fn too_many_cards() {
        assert_eq!(Pocket::try_from("As Ad Ah Ac Ks"), Err(ParseError::Count(5)));
    }

    #[test]
    fn bad_token_is_named() {
        let err = Pocket::try_from("As Ad Ah 1c").unwrap_err();
        assert_eq!(err, ParseError::Rank('1'));
        assert!(err.to_string().contains('1'));
    }
}
