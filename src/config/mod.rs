//! Configuration module for the agent customizer.
//!
//! Provides CLI argument parsing, form defaults and the voice catalogue.

#[allow(clippy::module_inception)]
mod config;
mod defaults;
mod voices;

pub use config::AppConfig;
pub use defaults::FormDefaults;
pub use voices::Voice;
