pub mod deal;
pub use deal::*;

pub mod variant;
pub use variant::*;
