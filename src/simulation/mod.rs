//! Monte-Carlo equity estimation and variant selection.
pub mod sampler;
pub use sampler::*;

pub mod selector;
pub use selector::*;

pub mod settings;
pub use settings::*;

pub mod simulator;
pub use simulator::*;

pub mod tally;
pub use tally::*;
