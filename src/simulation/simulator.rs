use super::sampler::Sampler;
use super::settings::Settings;
use super::tally::Outcome;
use super::tally::Tally;
use crate::Equity;
use crate::HIDUGI_BONUS_FLOOR;
use crate::HIDUGI_QUADS_BONUS;
use crate::HIDUGI_TRIPS_BONUS;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Pocket;
use crate::evaluation::HiDuGi;
use crate::evaluation::Ranking;
use crate::variants::Deal;
use crate::variants::Pot;
use crate::variants::Variant;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// Monte-Carlo equity of one starting hand against a single random opponent.
///
/// Iterations are split into shards that run on rayon, each drawing from its
/// own [`Sampler`] stream, and the per-shard tallies are summed once at the
/// end. With a fixed seed and worker count every estimate repeats on the
/// same toolchain.
#[derive(Debug, Clone)]
pub struct Simulator {
    hero: Hand,
    hidugi: HiDuGi,
    settings: Settings,
    master: u64,
}

impl From<(Pocket, Settings)> for Simulator {
    fn from((pocket, settings): (Pocket, Settings)) -> Self {
        let hero = Hand::from(pocket);
        Self {
            hero,
            hidugi: HiDuGi::from(hero),
            settings,
            master: settings.seed().unwrap_or_else(rand::random),
        }
    }
}

impl Simulator {
    /// Estimated share of the pot the hero wins under `variant`.
    pub fn equity(&self, variant: Variant) -> Equity {
        let tally = self.tally(variant);
        let equity = match variant.pot() {
            Pot::Single => tally.equity(),
            Pot::Split => self.bonus(tally.equity()),
        };
        log::debug!("{:<20} {:.4} ({})", variant, equity, tally);
        equity
    }

    /// Raw outcome counts across every shard.
    pub fn tally(&self, variant: Variant) -> Tally {
        self.settings
            .shards()
            .into_par_iter()
            .map(|(index, n)| self.shard(variant, index, n))
            .sum()
    }

    fn shard(&self, variant: Variant, index: usize, n: usize) -> Tally {
        let ref mut sampler = Sampler::shard(self.master, variant.name(), index);
        log::trace!("{} shard {} running {} iterations", variant, index, n);
        (0..n).map(|_| self.sample(variant, sampler)).collect()
    }

    /// One fresh deal and its outcome for the hero.
    fn sample(&self, variant: Variant, sampler: &mut Sampler) -> Outcome {
        let ref mut deck = Deck::without(self.hero);
        let deal = variant.complete(self.hero, deck, sampler);
        match variant.pot() {
            Pot::Single => Self::single(variant, &deal),
            Pot::Split => Self::split(&self.hidugi, &deal),
        }
    }

    fn single(variant: Variant, deal: &Deal) -> Outcome {
        let hero = variant.evaluate(deal.hero, deal.board);
        let villain = variant.evaluate(deal.villain, deal.board);
        Outcome::from(hero.cmp(&villain))
    }

    /// Each half goes to the hero only when strictly better.
    fn split(hero: &HiDuGi, deal: &Deal) -> Outcome {
        let villain = HiDuGi::from(deal.villain);
        let high = hero.high().score() > villain.high().score();
        let low = hero.low().score() > villain.low().score();
        Outcome::split(high, low)
    }

    /// A hand that already holds trips or better is worth more than its raw
    /// split-pot share once it is favored, capped at the whole pot.
    fn bonus(&self, equity: Equity) -> Equity {
        if equity < HIDUGI_BONUS_FLOOR || !self.hidugi.strong() {
            return equity;
        }
        let factor = match self.hidugi.high().ranking() {
            Ranking::FourOAK => HIDUGI_QUADS_BONUS,
            _ => HIDUGI_TRIPS_BONUS,
        };
        Equity::min(equity * factor, 1.)
    }
}
