use super::badugi::Badugi;
use super::ranking::Arity;
use super::ranking::Ranking;
use super::strength::Strength;
use crate::HIDUGI_BADUGI_NORMALIZER;
use crate::HIDUGI_PLAIN_DIVISOR;
use crate::HIDUGI_QUALIFIER_BONUS;
use crate::HIDUGI_STRONG_HIGH_MULTIPLIER;
use crate::Score;
use crate::cards::Hand;

/// Both halves of a 4-card split-pot hand: the high hand and the Badugi low.
///
/// The halves are kept apart so the split-pot simulation can award each one
/// on its own. [`HiDuGi::score`] folds them into one ranking number, which is
/// a heuristic and only meaningful against another HiDuGi score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiDuGi {
    high: Strength,
    low: Badugi,
}

impl HiDuGi {
    pub fn high(&self) -> &Strength {
        &self.high
    }
    pub fn low(&self) -> &Badugi {
        &self.low
    }
    /// Three of a kind, four of a kind or a straight flush.
    pub fn strong(&self) -> bool {
        matches!(
            self.high.ranking(),
            Ranking::ThreeOAK | Ranking::FourOAK | Ranking::StraightFlush
        )
    }
    pub fn qualifies(&self) -> bool {
        self.low.qualifies()
    }
    pub fn score(&self) -> Score {
        let high = self.high.score();
        let low = self.low.score() / HIDUGI_BADUGI_NORMALIZER;
        if self.qualifies() {
            high + low + HIDUGI_QUALIFIER_BONUS
        } else if self.strong() {
            high * HIDUGI_STRONG_HIGH_MULTIPLIER + low / HIDUGI_PLAIN_DIVISOR
        } else {
            high + low / HIDUGI_PLAIN_DIVISOR
        }
    }
}

impl From<Hand> for HiDuGi {
    fn from(hand: Hand) -> Self {
        Self {
            high: Strength::from((Arity::Four, hand)),
            low: Badugi::from(hand),
        }
    }
}

impl std::fmt::Display for HiDuGi {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} / {}", self.high, self.low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidugi(s: &str) -> HiDuGi {
        HiDuGi::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn qualifier_earns_bonus() {
        for s in ["As 2d 3h 4c", "8s 7d 6h 5c"] {
            let h = hidugi(s);
            assert!(h.qualifies());
            assert!(h.score() >= HIDUGI_QUALIFIER_BONUS);
        }
    }

    #[test]
    fn quads_are_strong_without_bonus() {
        let h = hidugi("As Ad Ah Ac");
        assert!(!h.qualifies());
        assert!(h.strong());
        assert!(h.score() < HIDUGI_QUALIFIER_BONUS);
        assert!(h.score() > h.high().score() * 2);
    }

    #[test]
    fn plain_hand_has_no_bonus() {
        let h = hidugi("Ks Qd 9h 7c");
        assert!(!h.qualifies());
        assert!(!h.strong());
        assert!(h.score() < HIDUGI_QUALIFIER_BONUS);
        assert!(h.score() > h.high().score());
    }

    #[test]
    fn qualifier_outranks_strong_high() {
        assert!(hidugi("8s 7d 3h 2c").score() > hidugi("As Ad Ah Ac").score());
    }

    #[test]
    fn halves_are_independent() {
        let h = hidugi("As 2d 3h 4c");
        assert_eq!(h.high().ranking(), Ranking::Straight);
        assert_eq!(h.low().size(), 4);
    }

    #[test]
    fn deterministic() {
        assert_eq!(hidugi("4c 3h 2d As").score(), hidugi("As 2d 3h 4c").score());
    }
}
