//! Configuration for MovieFight-RS
//!
//! Settings come from a YAML file with `MOVIEFIGHT_*` environment
//! overrides applied on top.

mod settings;

pub use settings::*;

use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::Path;

/// Global settings instance
static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Install global settings loaded from a file, with env overrides
pub fn init_from_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut settings = Settings::from_file(path)?;
    settings.merge_env();
    install(settings)
}

/// Install default global settings, with env overrides
pub fn init_default() -> Result<()> {
    let mut settings = Settings::default();
    settings.merge_env();
    install(settings)
}

fn install(settings: Settings) -> Result<()> {
    SETTINGS
        .set(settings)
        .map_err(|_| anyhow::anyhow!("settings already initialized"))
}

/// Get a reference to the global settings
pub fn get() -> &'static Settings {
    SETTINGS.get().expect("settings not initialized")
}

/// Whether settings have been initialized
pub fn is_initialized() -> bool {
    SETTINGS.get().is_some()
}
