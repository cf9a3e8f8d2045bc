use crate::cards::Hand;

/// One random completion of a variant's deal.
///
/// `board` holds shared cards; no implemented variant deals any, so it is
/// empty today but still threaded through evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    pub hero: Hand,
    pub villain: Hand,
    pub board: Hand,
}

impl Deal {
    /// Every card dealt, including the hero's known ones.
    pub fn cards(&self) -> Hand {
        Hand::add(Hand::add(self.hero, self.villain), self.board)
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "hero [{}] villain [{}]", self.hero, self.villain)?;
        if self.board.size() > 0 {
            write!(f, " board [{}]", self.board)?;
        }
        Ok(())
    }
}
