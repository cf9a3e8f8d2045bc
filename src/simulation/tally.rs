use crate::Equity;
use std::cmp::Ordering;
use std::ops::Add;

/// What the hero takes from one simulated pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Full,
    Half,
    Nothing,
}

impl Outcome {
    /// Each half of a split pot goes to the hero only on a strictly better
    /// score. A tied half goes to nobody.
    pub fn split(high: bool, low: bool) -> Self {
        match (high, low) {
            (true, true) => Self::Full,
            (true, false) | (false, true) => Self::Half,
            (false, false) => Self::Nothing,
        }
    }
}

/// hero score compared against villain score
impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::Full,
            Ordering::Equal => Self::Half,
            Ordering::Less => Self::Nothing,
        }
    }
}

/// Outcome counts for a batch of simulated pots.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    full: u64,
    half: u64,
    none: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Full => self.full += 1,
            Outcome::Half => self.half += 1,
            Outcome::Nothing => self.none += 1,
        }
    }
    pub fn full(&self) -> u64 {
        self.full
    }
    pub fn half(&self) -> u64 {
        self.half
    }
    pub fn none(&self) -> u64 {
        self.none
    }
    pub fn total(&self) -> u64 {
        self.full + self.half + self.none
    }
    /// (full + half / 2) / total, or zero for an empty tally.
    pub fn equity(&self) -> Equity {
        match self.total() {
            0 => 0.,
            n => (self.full as Equity + self.half as Equity / 2.) / n as Equity,
        }
    }
}

impl Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            full: self.full + rhs.full,
            half: self.half + rhs.half,
            none: self.none + rhs.none,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::add)
    }
}

impl FromIterator<Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut tally, outcome| {
            tally.record(outcome);
            tally
        })
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} full / {} half / {} none",
            self.full, self.half, self.none
        )
    }
}
