pub mod models;
pub mod config;
pub mod providers;
pub mod scoring;
pub mod tui;

pub use models::{Archetype, AuraBreakdown, AuraError, AuraInputs, AuraResult, ProfileStats, Result};
pub use config::Settings;
pub use scoring::{compute_aura, AuraEngine, ProfileAnalyzer};
