use super::error::ParseError;

/// Card rank, deuce low and ace high.
///
/// The discriminant is the rank slot used by every evaluator histogram,
/// so `Two` is slot 0 and `Ace` is slot 12.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const COUNT: usize = 13;

    /// All thirteen ranks, ascending.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }
    /// Position of this rank when the ace plays low (A=0, 2=1, .., K=12).
    pub fn ace_low(&self) -> u8 {
        match self {
            Rank::Ace => 0,
            rank => u8::from(*rank) + 1,
        }
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// char isomorphism, case-insensitive on the way in
impl TryFrom<char> for Rank {
    type Error = ParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(ParseError::Rank(c)),
        }
    }
}
impl From<Rank> for char {
    fn from(r: Rank) -> char {
        match r {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rank = Rank::Five;
        assert!(rank == Rank::from(u8::from(rank)));
    }

    #[test]
    fn bijective_char() {
        for rank in Rank::all() {
            assert_eq!(Rank::try_from(char::from(rank)), Ok(rank));
        }
    }

    #[test]
    fn lowercase_accepted() {
        assert_eq!(Rank::try_from('t'), Ok(Rank::Ten));
        assert_eq!(Rank::try_from('a'), Ok(Rank::Ace));
    }

    #[test]
    fn garbage_rejected() {
        assert_eq!(Rank::try_from('1'), Err(ParseError::Rank('1')));
        assert_eq!(Rank::try_from('X'), Err(ParseError::Rank('X')));
    }

    #[test]
    fn ace_plays_low() {
        assert_eq!(Rank::Ace.ace_low(), 0);
        assert_eq!(Rank::Two.ace_low(), 1);
        assert_eq!(Rank::Eight.ace_low(), 7);
        assert_eq!(Rank::King.ace_low(), 12);
    }
}
