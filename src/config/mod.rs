//! Engine policy configuration.
//!
//! Carries the monthly hour baseline and the work-hub → state lookup
//! table, with compiled-in defaults and optional YAML overrides.

mod loader;
mod types;

pub use loader::load_config;
pub use types::EngineConfig;
