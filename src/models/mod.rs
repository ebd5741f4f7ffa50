pub mod aura;
pub mod error;
pub mod inputs;
pub mod stats;

pub use aura::*;
pub use error::*;
pub use inputs::*;
pub use stats::*;
