//! Decoded round records.
//!
//! Field names follow the upstream records so that decoded JSON dumps
//! deserialize directly. Optional fields default to empty / zero.

use serde::{Deserialize, Deserializer};
use strum::{IntoStaticStr, VariantNames};

use super::Tile;

/// One decoded event of a round.
#[derive(Debug, Clone, PartialEq, Deserialize, IntoStaticStr, VariantNames)]
#[serde(tag = "name")]
pub enum RoundEvent {
    #[serde(rename = "RecordNewRound")]
    #[strum(serialize = "RecordNewRound")]
    NewRound(NewRound),
    #[serde(rename = "RecordDiscardTile")]
    #[strum(serialize = "RecordDiscardTile")]
    DiscardTile(DiscardTile),
    #[serde(rename = "RecordDealTile")]
    #[strum(serialize = "RecordDealTile")]
    DealTile(DealTile),
    #[serde(rename = "RecordChiPengGang")]
    #[strum(serialize = "RecordChiPengGang")]
    ChiPengGang(ChiPengGang),
    #[serde(rename = "RecordAnGangAddGang")]
    #[strum(serialize = "RecordAnGangAddGang")]
    AnGangAddGang(AnGangAddGang),
    #[serde(rename = "RecordBaBei")]
    #[strum(serialize = "RecordBaBei")]
    BaBei(BaBei),
    #[serde(rename = "RecordLiuJu")]
    #[strum(serialize = "RecordLiuJu")]
    LiuJu(LiuJu),
    #[serde(rename = "RecordNoTile")]
    #[strum(serialize = "RecordNoTile")]
    NoTile(NoTile),
    #[serde(rename = "RecordHule")]
    #[strum(serialize = "RecordHule")]
    Hule(Hule),
}

impl RoundEvent {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Whether `name` is a record kind the transcoder consumes.
    pub fn is_known(name: &str) -> bool {
        Self::VARIANTS.contains(&name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewRound {
    pub chang: u32,
    pub ju: u32,
    pub ben: u32,
    pub liqibang: u32,
    pub scores: Vec<i32>,
    /// Single indicator used by older records.
    #[serde(deserialize_with = "empty_as_none")]
    pub dora: Option<Tile>,
    pub doras: Vec<Tile>,
    pub tiles0: Vec<Tile>,
    pub tiles1: Vec<Tile>,
    pub tiles2: Vec<Tile>,
    pub tiles3: Vec<Tile>,
}

impl NewRound {
    pub fn players(&self) -> usize {
        self.scores.len()
    }

    pub fn tiles(&self, seat: usize) -> &[Tile] {
        match seat {
            0 => &self.tiles0,
            1 => &self.tiles1,
            2 => &self.tiles2,
            3 => &self.tiles3,
            _ => &[],
        }
    }

    /// Indicators at round start, preferring the legacy single field.
    pub fn initial_doras(&self) -> Vec<Tile> {
        match self.dora {
            Some(dora) => vec![dora],
            None => self.doras.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiscardTile {
    pub seat: usize,
    pub tile: Tile,
    #[serde(default)]
    pub moqie: bool,
    #[serde(default)]
    pub is_liqi: bool,
    #[serde(default)]
    pub is_wliqi: bool,
    #[serde(default)]
    pub doras: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DealTile {
    pub seat: usize,
    pub tile: Tile,
    #[serde(default)]
    pub doras: Vec<Tile>,
}

/// Chi (0), pon (1) or open kan (2) off the last discard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChiPengGang {
    pub seat: usize,
    #[serde(rename = "type")]
    pub kind: u32,
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub froms: Vec<usize>,
}

/// Added kan (2) or concealed kan (3).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnGangAddGang {
    pub seat: usize,
    #[serde(rename = "type")]
    pub kind: u32,
    #[serde(rename = "tiles")]
    pub tile: Tile,
    #[serde(default)]
    pub doras: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BaBei {
    pub seat: usize,
    #[serde(default)]
    pub moqie: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LiuJu {
    #[serde(rename = "type")]
    pub kind: u32,
    pub seat: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NoTile {
    pub liujumanguan: bool,
    pub scores: Vec<NoTileScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NoTileScore {
    pub seat: usize,
    pub delta_scores: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Hule {
    pub hules: Vec<HuleInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Fan {
    pub id: u32,
    pub val: u32,
}

/// One declarant of a win.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HuleInfo {
    pub seat: usize,
    pub zimo: bool,
    pub qinjia: bool,
    pub yiman: bool,
    /// Han.
    pub count: u32,
    pub fu: u32,
    pub fans: Vec<Fan>,
    pub li_doras: Vec<Tile>,
    pub point_rong: i32,
    pub point_zimo_qin: i32,
    pub point_zimo_xian: i32,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<Tile>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Tile(Tile),
        Other(serde_json::Value),
    }

    match Option::<Field>::deserialize(deserializer)? {
        Some(Field::Tile(tile)) => Ok(Some(tile)),
        Some(Field::Other(serde_json::Value::String(s))) if s.is_empty() => Ok(None),
        Some(Field::Other(serde_json::Value::Null)) | None => Ok(None),
        Some(Field::Other(other)) => Err(serde::de::Error::custom(format!(
            "invalid dora indicator: {other}"
        ))),
    }
}
