//! CLI command implementations.

pub mod convert;
pub mod summary;

use std::path::Path;

use anyhow::{Context, Result};
use tensoul_core::Config;
use tracing::warn;

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    if !path.exists() {
        warn!("Config file {} not found, using defaults", path.display());
        return Ok(Config::default());
    }
    Config::load(path).with_context(|| format!("Failed to load config {}", path.display()))
}
