use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Read-only display names used by the exported log.
pub trait NameLookup {
    fn yaku_name(&self, id: u32) -> String;

    /// Room name of a ranked or casual mode.
    fn room_name(&self, mode_id: u32) -> Option<String>;

    /// Rank name of a player level.
    fn level_name(&self, level_id: u32) -> String;
}

/// Name table backed by a JSON file:
/// `{"yaku": {"1": "..."}, "rooms": {...}, "levels": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NameTable {
    yaku: HashMap<u32, String>,
    rooms: HashMap<u32, String>,
    levels: HashMap<u32, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn insert_yaku(&mut self, id: u32, name: impl Into<String>) {
        self.yaku.insert(id, name.into());
    }

    pub fn insert_room(&mut self, mode_id: u32, name: impl Into<String>) {
        self.rooms.insert(mode_id, name.into());
    }

    pub fn insert_level(&mut self, level_id: u32, name: impl Into<String>) {
        self.levels.insert(level_id, name.into());
    }

    pub fn len(&self) -> usize {
        self.yaku.len() + self.rooms.len() + self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NameLookup for NameTable {
    fn yaku_name(&self, id: u32) -> String {
        self.yaku
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("役{}", id))
    }

    fn room_name(&self, mode_id: u32) -> Option<String> {
        self.rooms.get(&mode_id).cloned()
    }

    fn level_name(&self, level_id: u32) -> String {
        self.levels.get(&level_id).cloned().unwrap_or_default()
    }
}
