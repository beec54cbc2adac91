//! Configuration and name tables.
//!
//! - `Config` - transcoder and export settings loaded from TOML
//! - `NameLookup` / `NameTable` - display names for yaku, rooms and ranks

mod names;

pub use names::*;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::score::TsumoLoss;

/// Log format version written to exported documents.
pub const LOG_VERSION: &str = "2.3";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub export: ExportConfig,
    pub names: NamesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Forces the tsumo-loss policy; otherwise derived from the record's rules.
    pub tsumo_loss: Option<TsumoLoss>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Show one red five in concealed kans of fives.
    pub red_fives: bool,
    pub version: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            red_fives: true,
            version: LOG_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamesConfig {
    /// JSON name table.
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }

    /// Name table configured by `names.path`, or the built-in fallbacks.
    pub fn load_names(&self) -> Result<NameTable> {
        match &self.names.path {
            Some(path) => NameTable::load(path),
            None => Ok(NameTable::default()),
        }
    }
}
