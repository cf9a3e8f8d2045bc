use super::error::ParseError;

/// Card suit: clubs, diamonds, hearts, spades.
///
/// The ordering (C < D < H < S) is arbitrary but fixed. The Badugi
/// selection scan visits suits in exactly this order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    pub const COUNT: usize = 4;

    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char isomorphism. only lowercase letters name a suit
impl TryFrom<char> for Suit {
    type Error = ParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'c' => Ok(Suit::C),
            'd' => Ok(Suit::D),
            'h' => Ok(Suit::H),
            's' => Ok(Suit::S),
            _ => Err(ParseError::Suit(c)),
        }
    }
}
impl From<Suit> for char {
    fn from(s: Suit) -> char {
        match s {
            Suit::C => 'c',
            Suit::D => 'd',
            Suit::H => 'h',
            Suit::S => 's',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::D;
        assert!(suit == Suit::from(u8::from(suit)));
    }

    #[test]
    fn uppercase_rejected() {
        assert_eq!(Suit::try_from('s'), Ok(Suit::S));
        assert_eq!(Suit::try_from('S'), Err(ParseError::Suit('S')));
    }
}
