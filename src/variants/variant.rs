use super::deal::Deal;
use crate::NEUTRAL;
use crate::Score;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::evaluation::Arity;
use crate::evaluation::Badugi;
use crate::evaluation::HiDuGi;
use crate::evaluation::Strength;
use crate::simulation::Sampler;

/// How a simulated pot is awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pot {
    /// One score per hand, the better score takes it all.
    Single,
    /// High half and Badugi half are decided separately.
    Split,
}

/// Dealing and scoring rules for one discipline.
///
/// `complete` receives the hero's known cards and a deck that already
/// excludes them, deals whatever is missing, and leaves the deck with the
/// remaining cards. `evaluate` scores a completed hand against the board.
pub struct Rules {
    pub name: &'static str,
    pub pot: Pot,
    pub complete: fn(Hand, &mut Deck, &mut Sampler) -> Deal,
    pub evaluate: fn(Hand, Hand) -> Score,
}

static DRAWMAHA_HI: Rules = Rules {
    name: "Drawmaha-Hi",
    pot: Pot::Single,
    complete: draw_one,
    evaluate: high_five,
};
static BADUGI: Rules = Rules {
    name: "Badugi",
    pot: Pot::Single,
    complete: as_dealt,
    evaluate: badugi,
};
static HIDUGI: Rules = Rules {
    name: "HiDuGi",
    pot: Pot::Split,
    complete: as_dealt,
    evaluate: hidugi,
};
static DRAWMAHA_27: Rules = Rules {
    name: "Drawmaha-2-7",
    pot: Pot::Single,
    complete: as_dealt,
    evaluate: neutral,
};
static PRIME: Rules = Rules {
    name: "Prime",
    pot: Pot::Single,
    complete: as_dealt,
    evaluate: neutral,
};
static OMAHA_DOUBLE_BOARD: Rules = Rules {
    name: "Omaha DoubleBoard",
    pot: Pot::Single,
    complete: as_dealt,
    evaluate: neutral,
};

/// hero draws one card to five, villain gets five fresh
fn draw_one(hero: Hand, deck: &mut Deck, sampler: &mut Sampler) -> Deal {
    let hero = Hand::add(hero, deck.draw(1, sampler));
    let villain = deck.draw(hero.size(), sampler);
    Deal {
        hero,
        villain,
        board: Hand::empty(),
    }
}
/// hero plays as dealt, villain gets as many fresh cards
fn as_dealt(hero: Hand, deck: &mut Deck, sampler: &mut Sampler) -> Deal {
    let villain = deck.draw(hero.size(), sampler);
    Deal {
        hero,
        villain,
        board: Hand::empty(),
    }
}

fn high_five(hand: Hand, _: Hand) -> Score {
    Strength::from((Arity::Five, hand)).score()
}
fn badugi(hand: Hand, _: Hand) -> Score {
    Badugi::from(hand).score()
}
fn hidugi(hand: Hand, _: Hand) -> Score {
    HiDuGi::from(hand).score()
}
fn neutral(_: Hand, _: Hand) -> Score {
    NEUTRAL
}

/// The closed menu of disciplines, in selection order. The split pot comes
/// first so it wins exact ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    HiDuGi,
    DrawmahaHi,
    Badugi,
    Drawmaha27,
    Prime,
    OmahaDoubleBoard,
}

impl Variant {
    pub const fn all() -> [Self; 6] {
        [
            Self::HiDuGi,
            Self::DrawmahaHi,
            Self::Badugi,
            Self::Drawmaha27,
            Self::Prime,
            Self::OmahaDoubleBoard,
        ]
    }
    pub fn rules(&self) -> &'static Rules {
        match self {
            Self::DrawmahaHi => &DRAWMAHA_HI,
            Self::Badugi => &BADUGI,
            Self::HiDuGi => &HIDUGI,
            Self::Drawmaha27 => &DRAWMAHA_27,
            Self::Prime => &PRIME,
            Self::OmahaDoubleBoard => &OMAHA_DOUBLE_BOARD,
        }
    }
    pub fn name(&self) -> &'static str {
        self.rules().name
    }
    pub fn pot(&self) -> Pot {
        self.rules().pot
    }
    /// Scores every hand identically, so its equity is always one half.
    pub fn placeholder(&self) -> bool {
        matches!(
            self,
            Self::Drawmaha27 | Self::Prime | Self::OmahaDoubleBoard
        )
    }
    pub fn complete(&self, hero: Hand, deck: &mut Deck, sampler: &mut Sampler) -> Deal {
        (self.rules().complete)(hero, deck, sampler)
    }
    pub fn evaluate(&self, hand: Hand, board: Hand) -> Score {
        (self.rules().evaluate)(hand, board)
    }
}

/// lookup by display name
impl TryFrom<&str> for Variant {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown variant: {}", s))
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl serde::Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
