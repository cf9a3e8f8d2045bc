//! Pick the mixed-game variant that gives a 4-card starting hand the most
//! equity against one random opponent, by Monte-Carlo simulation.
//!
//! - [`cards`] — cards, hands, decks and starting-hand parsing
//! - [`evaluation`] — 5-card high, 4-card high, Badugi and HiDuGi scoring
//! - [`variants`] — the closed set of game variants and their dealing rules
//! - [`simulation`] — seeded sampling, the equity engine and the selector
pub mod cards;
pub mod evaluation;
pub mod simulation;
pub mod variants;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Hand strength within one discipline. Greater is strictly stronger.
pub type Score = i64;
/// Share of the pot won on average: win 1, tie or half-pot 0.5, loss 0.
pub type Equity = f64;

// ============================================================================
// SIMULATION
// ============================================================================
/// Iterations per variant when the caller does not choose.
pub const ITERATIONS: usize = 20_000;
/// Score reported by every placeholder variant, for hero and villain alike.
pub const NEUTRAL: Score = 0;

// ============================================================================
// BADUGI SCORING
// ranks = base-13 packing of the chosen ranks, always below 13^4.
// raw = (4 - count) * weight * 13^4 + ranks, so the count term dominates.
// score = ceiling - raw, so fewer missing cards and lower ranks score higher.
// ============================================================================
/// Inversion ceiling, half the largest i64 so the subtraction never wraps.
pub const BADUGI_CEILING: Score = Score::MAX / 2;
/// Penalty per missing card, in units of 13^4.
pub const BADUGI_COUNT_WEIGHT: Score = 100_000;

// ============================================================================
// SPLIT-POT POLICY
// Heuristic weights for ranking HiDuGi hands and for the guaranteed-half bonus.
// These are ranking aids, not derived equities. The split-pot ranking is approximate.
// ============================================================================
/// Added to the combined score of a qualifying 8-or-better Badugi.
pub const HIDUGI_QUALIFIER_BONUS: Score = 10_000_000;
/// Divides the Badugi score down to a range comparable with high scores.
pub const HIDUGI_BADUGI_NORMALIZER: Score = 1_000_000_000_000;
/// Further shrinks the normalized Badugi score for non-qualifying hands.
pub const HIDUGI_PLAIN_DIVISOR: Score = 10;
/// Weight on the high score of trips-or-better hands that do not qualify low.
pub const HIDUGI_STRONG_HIGH_MULTIPLIER: Score = 3;
/// Equity multiplier when the hero holds four of a kind.
pub const HIDUGI_QUADS_BONUS: Equity = 1.10;
/// Equity multiplier when the hero holds trips or a straight flush.
pub const HIDUGI_TRIPS_BONUS: Equity = 1.05;
/// Raw split-pot equity needed before either multiplier applies.
pub const HIDUGI_BONUS_FLOOR: Equity = 0.5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// The library only emits through `log`; binaries decide where it goes.
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
