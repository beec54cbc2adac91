use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::warn;

use crate::config::{LOG_VERSION, NameLookup};

use super::RecordHead;

const SANMA: &str = "三";
const FRIENDLY: &str = "友人戦";
const TOURNAMENT: &str = "大会戦";
const TONPUU: &str = "東";
const HANCHAN: &str = "南";

const MODE_TONPUU: u32 = 1;
const MODE_HANCHAN: u32 = 2;

/// Placeholder name for seats without an account.
const DEFAULT_NAME: &str = "AI";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleDisplay {
    pub disp: String,
    pub aka53: u32,
    pub aka52: u32,
    pub aka51: u32,
}

/// Header fields of a tenhou log document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameHeader {
    pub ver: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub ratingc: String,
    pub rule: RuleDisplay,
    pub lobby: u32,
    pub dan: Vec<String>,
    pub rate: Vec<i32>,
    pub sx: Vec<String>,
    pub name: Vec<String>,
    /// `[points, final score / 1000]` per seat.
    pub sc: Vec<Value>,
    pub title: [String; 2],
}

impl GameHeader {
    pub fn from_head(head: &RecordHead, names: &dyn NameLookup) -> Self {
        let players = head.players();
        let meta = &head.config.meta;
        let detail = &head.config.mode.detail_rule;

        let mut disp = String::new();
        let mut lobby = String::new();
        let mut red_fives = players.saturating_sub(1) as u32;

        if players == 3 {
            disp.push_str(SANMA);
        }
        if meta.mode_id != 0 {
            match names.room_name(meta.mode_id) {
                Some(room) => disp.push_str(&room),
                None => warn!("No room name for mode {}", meta.mode_id),
            }
        } else if meta.room_id != 0 {
            lobby = format!(": {}", meta.room_id);
            disp.push_str(FRIENDLY);
            red_fives = detail.dora_count;
        } else if meta.contest_uid != 0 {
            lobby = format!(": {}", meta.contest_uid);
            disp.push_str(TOURNAMENT);
            red_fives = detail.dora_count;
        }

        match head.config.mode.mode {
            MODE_TONPUU => disp.push_str(TONPUU),
            MODE_HANCHAN => disp.push_str(HANCHAN),
            _ => {}
        }

        let rule = if meta.mode_id == 0 && detail.dora_count == 0 {
            RuleDisplay {
                disp: disp.clone(),
                aka53: 0,
                aka52: 0,
                aka51: 0,
            }
        } else {
            RuleDisplay {
                disp: disp.clone(),
                aka53: 1,
                aka52: if red_fives == 4 { 2 } else { 1 },
                aka51: if players == 4 { 1 } else { 0 },
            }
        };

        let mut dan = vec![String::new(); players];
        let mut rate = vec![0; players];
        let mut name = vec![DEFAULT_NAME.to_string(); players];
        for account in &head.accounts {
            if account.seat >= players {
                warn!("Account seat {} out of range", account.seat);
                continue;
            }
            dan[account.seat] = names.level_name(account.level.id);
            rate[account.seat] = account.level.score;
            name[account.seat] = account.nickname.clone();
        }

        let mut sc = vec![json!(0); players * 2];
        for player in &head.result.players {
            if player.seat >= players {
                continue;
            }
            sc[2 * player.seat] = json!(player.part_point_1);
            sc[2 * player.seat + 1] = json!(f64::from(player.total_point) / 1000.0);
        }

        Self {
            ver: LOG_VERSION.to_string(),
            reference: head.uuid.clone(),
            ratingc: format!("PF{}", players),
            rule,
            lobby: 0,
            dan,
            rate,
            sx: vec!["C".to_string(); players],
            name,
            sc,
            title: [disp + &lobby, format_end_time(head.end_time)],
        }
    }
}

/// Local `%Y-%m-%d %H:%M:%S`, empty for out-of-range timestamps.
pub fn format_end_time(end_time: i64) -> String {
    DateTime::from_timestamp(end_time, 0)
        .map(|t| {
            t.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_default()
}
