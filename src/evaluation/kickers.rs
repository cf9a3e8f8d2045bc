use crate::Score;
use crate::cards::Rank;

/// A high hand's tie-breaking ranks, most significant first.
///
/// Every card of the hand appears exactly once, grouped by multiplicity
/// then by rank (so the pair in `K K A 7 2` leads). Packed as base-13
/// digits, any kicker stays strictly below `13^len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kickers(Vec<Rank>);

impl Kickers {
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
}

impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks)
    }
}

/// base-13 packing, first rank most significant
impl From<&Kickers> for Score {
    fn from(k: &Kickers) -> Self {
        k.0.iter()
            .map(|r| u8::from(*r) as Score)
            .fold(0, |acc, digit| acc * 13 + digit)
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.0.iter() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_is_positional() {
        let hi = Kickers::from(vec![Rank::Three, Rank::Two]);
        let lo = Kickers::from(vec![Rank::Two, Rank::Ace]);
        assert_eq!(Score::from(&hi), 13);
        assert_eq!(Score::from(&lo), 12);
        assert!(Score::from(&hi) > Score::from(&lo));
    }

    #[test]
    fn display() {
        let k = Kickers::from(vec![Rank::King, Rank::King, Rank::Ace, Rank::Seven]);
        assert_eq!(k.to_string(), "KKA7");
    }
}
