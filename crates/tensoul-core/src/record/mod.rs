//! Game record documents and the conversion pipeline.
//!
//! A [`GameRecord`] is the decoded upstream record: a header describing the
//! room, players and final standings, plus the raw list of round actions.
//! [`convert_record`] runs the actions through the transcoder and renders
//! the tenhou document.

mod header;

pub use header::{GameHeader, RuleDisplay, format_end_time};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{Config, NameLookup};
use crate::error::Result;
use crate::export::TenhouWriter;
use crate::game::{Kyoku, RoundEvent};
use crate::score::TsumoLoss;
use crate::transcoder::Transcoder;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordHead {
    pub uuid: String,
    /// Unix seconds.
    pub end_time: i64,
    pub config: GameConfig,
    pub accounts: Vec<Account>,
    pub result: GameResult,
}

impl RecordHead {
    pub fn players(&self) -> usize {
        self.result.players.len()
    }

    /// Friendly and tournament three-player rooms may play without tsumo loss.
    pub fn tsumo_loss(&self) -> TsumoLoss {
        let meta = &self.config.meta;
        let custom_room = meta.mode_id == 0 && (meta.room_id != 0 || meta.contest_uid != 0);
        if custom_room && self.players() == 3 && !self.config.mode.detail_rule.have_zimosun {
            TsumoLoss::Abolished
        } else {
            TsumoLoss::Standard
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub meta: GameMeta,
    pub mode: GameMode,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameMeta {
    /// Ranked or casual matchmaking mode; 0 otherwise.
    pub mode_id: u32,
    /// Friendly room number.
    pub room_id: u32,
    pub contest_uid: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameMode {
    /// 1 east-only, 2 east-south.
    pub mode: u32,
    pub detail_rule: DetailRule,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DetailRule {
    /// Number of red fives.
    pub dora_count: u32,
    pub have_zimosun: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Account {
    pub seat: usize,
    pub nickname: String,
    pub level: Level,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Level {
    pub id: u32,
    pub score: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameResult {
    pub players: Vec<PlayerResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerResult {
    pub seat: usize,
    pub part_point_1: i32,
    pub total_point: i32,
}

/// Decoded upstream game record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameRecord {
    pub head: RecordHead,
    /// Round actions in order; each carries its record kind under `name`.
    pub actions: Vec<Value>,
}

impl GameRecord {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Decode the actions the transcoder consumes, skipping other kinds.
    pub fn events(&self) -> Result<Vec<RoundEvent>> {
        let mut events = Vec::with_capacity(self.actions.len());
        for action in &self.actions {
            let name = action.get("name").and_then(Value::as_str).unwrap_or("");
            if !RoundEvent::is_known(name) {
                debug!("Skipping action {:?}", name);
                continue;
            }
            events.push(RoundEvent::deserialize(action)?);
        }
        Ok(events)
    }

    /// Effective tsumo-loss policy: configured override, else the room rules.
    pub fn tsumo_loss(&self, config: &Config) -> TsumoLoss {
        config
            .scoring
            .tsumo_loss
            .unwrap_or_else(|| self.head.tsumo_loss())
    }
}

/// Rounds of one game with the count of skipped anomalies.
#[derive(Debug, Clone)]
pub struct Transcoded {
    pub kyokus: Vec<Kyoku>,
    pub anomalies: u32,
}

/// Run every round action of `record` through the transcoder.
pub fn transcode_record(record: &GameRecord, config: &Config) -> Result<Transcoded> {
    let tsumo_loss = record.tsumo_loss(config);
    let events = record.events()?;

    let mut transcoder = Transcoder::new(tsumo_loss);
    transcoder.feed_all(&events)?;
    let (kyokus, anomalies) = transcoder.finish_with_anomalies();

    info!(
        "Transcoded {} rounds ({} tsumo loss, {} anomalies)",
        kyokus.len(),
        tsumo_loss.as_str(),
        anomalies
    );
    Ok(Transcoded { kyokus, anomalies })
}

/// Tenhou document: header fields plus the `log` array.
#[derive(Debug, Clone, Serialize)]
pub struct TenhouLog {
    #[serde(flatten)]
    pub header: GameHeader,
    pub log: Vec<Value>,
}

/// Convert a whole record into the tenhou JSON document.
pub fn convert_record(
    record: &GameRecord,
    config: &Config,
    names: &dyn NameLookup,
) -> Result<Value> {
    let transcoded = transcode_record(record, config)?;
    let log = render_log(record, &transcoded.kyokus, config, names);
    Ok(serde_json::to_value(log)?)
}

/// Render transcoded rounds under the record's header.
pub fn render_log(
    record: &GameRecord,
    kyokus: &[Kyoku],
    config: &Config,
    names: &dyn NameLookup,
) -> TenhouLog {
    let mut header = GameHeader::from_head(&record.head, names);
    header.ver = config.export.version.clone();

    let writer = TenhouWriter::new(names).red_fives(config.export.red_fives);
    let mut log = Vec::with_capacity(kyokus.len());
    for kyoku in kyokus {
        match writer.kyoku(kyoku) {
            Some(entry) => log.push(entry),
            None => warn!(
                "Round {}-{} has no result, left out of the log",
                kyoku.round.number(),
                kyoku.round.ben
            ),
        }
    }

    TenhouLog { header, log }
}
