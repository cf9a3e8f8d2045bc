//! Hand-strength scoring for every card-based discipline.
//!
//! - [`Strength`] — 4-card or 5-card high hand, category then kickers
//! - [`Badugi`] — low hand of distinct ranks and suits, more cards first
//! - [`HiDuGi`] — both halves of the 4-card split pot, plus a combined heuristic
//!
//! Every evaluator is pure and order-independent, and each produces a
//! [`Score`](crate::Score) where greater is stronger. Scores from different
//! disciplines are never compared with each other.
pub mod badugi;
pub use badugi::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hidugi;
pub use hidugi::*;

pub mod kickers;
pub use kickers::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;
