//! Tenhou-6 log layout.
//!
//! One round renders as
//! `[[round, honba, sticks], scores, doras, uras, hand0, draws0, discards0, ...,
//! hand3, draws3, discards3, result]`.

use serde_json::{Value, json};

use crate::config::NameLookup;
use crate::game::{ActionSymbol, AgariPoint, Draw, Kyoku, RoundResult, SingleAgari, Suit, Tile};

/// Discard code of a tile discarded right after drawing it.
pub const TSUMOGIRI: u8 = 60;

/// Rendering of the north tile set aside.
pub const NORTH_SYMBOL: &str = "f44";

pub const AGARI: &str = "和了";
pub const RYUKYOKU: &str = "流局";
pub const NAGASHI_MANGAN: &str = "流し満貫";

/// Renders rounds into the tenhou JSON layout.
pub struct TenhouWriter<'a> {
    names: &'a dyn NameLookup,
    red_fives: bool,
}

impl<'a> TenhouWriter<'a> {
    pub fn new(names: &'a dyn NameLookup) -> Self {
        Self {
            names,
            red_fives: true,
        }
    }

    pub fn red_fives(mut self, red_fives: bool) -> Self {
        self.red_fives = red_fives;
        self
    }

    /// Render one sealed round; `None` when the round has no result.
    pub fn kyoku(&self, kyoku: &Kyoku) -> Option<Value> {
        let result = kyoku.result.as_ref()?;

        let round = &kyoku.round;
        let mut entry = vec![
            json!([round.number(), round.ben, round.riichi_sticks]),
            json!(kyoku.initial_scores),
            tile_codes(&kyoku.doras),
            tile_codes(kyoku.uras()),
        ];

        for seat in 0..4 {
            let draws = kyoku.draws[seat].iter().map(|d| self.draw(d));
            let discards = kyoku.discards[seat].iter().map(|s| self.discard(s));
            entry.push(tile_codes(&kyoku.hands[seat]));
            entry.push(Value::Array(draws.collect()));
            entry.push(Value::Array(discards.collect()));
        }

        entry.push(self.result(result));
        Some(Value::Array(entry))
    }

    fn draw(&self, draw: &Draw) -> Value {
        match draw {
            Draw::Tile(tile) => json!(tile.code()),
            Draw::Call(symbol) => self.call(symbol),
        }
    }

    /// Call symbols as they appear in the draw list.
    fn call(&self, symbol: &ActionSymbol) -> Value {
        match symbol {
            ActionSymbol::Chi { tiles } => {
                let [a, b, called] = tiles.map(|t| t.code());
                json!(format!("c{}{}{}", called, a, b))
            }
            ActionSymbol::Pon { tiles, feeder } => json!(marked(
                &tiles[..2],
                *feeder as usize,
                format!("p{}", tiles[2].code())
            )),
            ActionSymbol::Daiminkan { tiles, feeder } => {
                // Called from the right, the marker goes after all three tiles.
                let at = if *feeder == 2 { 3 } else { *feeder as usize };
                json!(marked(&tiles[..3], at, format!("m{}", tiles[3].code())))
            }
            // The pon as originally called; the upgrade shows in the discards.
            ActionSymbol::Kakan { pon, feeder, .. } => json!(marked(
                &pon[..2],
                *feeder as usize,
                format!("p{}", pon[2].code())
            )),
            other => self.discard(other),
        }
    }

    fn discard(&self, symbol: &ActionSymbol) -> Value {
        match symbol {
            ActionSymbol::Discard {
                tile,
                tsumogiri,
                riichi,
            } => {
                let code = if *tsumogiri { TSUMOGIRI } else { tile.code() };
                if *riichi {
                    json!(format!("r{}", code))
                } else {
                    json!(code)
                }
            }
            ActionSymbol::Ankan { tile } => {
                let plain = tile.deaka().code();
                let first = if self.red_fives && has_red_five(tile) {
                    Tile::red_five(tile.suit()).code()
                } else {
                    plain
                };
                json!(format!("{}{}{}a{}", first, plain, plain, plain))
            }
            ActionSymbol::Kakan { pon, added, feeder } => json!(marked(
                &pon[..2],
                *feeder as usize,
                format!("k{}{}", added.code(), pon[2].code())
            )),
            ActionSymbol::Zero => json!(0),
            ActionSymbol::North => json!(NORTH_SYMBOL),
            call => self.call(call),
        }
    }

    fn result(&self, result: &RoundResult) -> Value {
        match result {
            RoundResult::Agari { agari, .. } => {
                let mut entry = vec![json!(AGARI)];
                for single in agari {
                    entry.push(json!(pad_delta(&single.delta)));
                    entry.push(self.agari_detail(single));
                }
                Value::Array(entry)
            }
            RoundResult::Ryukyoku {
                delta,
                nagashi_mangan,
            } => {
                let label = if *nagashi_mangan {
                    NAGASHI_MANGAN
                } else {
                    RYUKYOKU
                };
                json!([label, delta])
            }
            RoundResult::Special { reason } => json!([reason.label()]),
        }
    }

    /// `[seat, from, pao, points, yaku...]`
    fn agari_detail(&self, agari: &SingleAgari) -> Value {
        let mut detail = vec![
            json!(agari.seat),
            json!(agari.from_seat),
            json!(agari.pao_seat),
            json!(point_string(agari)),
        ];

        for yaku in &agari.yaku {
            let name = self.names.yaku_name(yaku.id);
            if agari.yakuman {
                detail.push(json!(format!("{}(役満)", name)));
            } else if yaku.value > 0 {
                detail.push(json!(format!("{}({}飜)", name, yaku.value)));
            }
        }

        Value::Array(detail)
    }
}

fn tile_codes(tiles: &[Tile]) -> Value {
    Value::Array(tiles.iter().map(|t| json!(t.code())).collect())
}

fn has_red_five(tile: &Tile) -> bool {
    tile.suit() != Suit::Honor && tile.rank() == 5
}

/// Join tile codes with `marker` inserted at position `at`.
fn marked(tiles: &[Tile], at: usize, marker: String) -> String {
    let mut parts: Vec<String> = tiles.iter().map(|t| t.code().to_string()).collect();
    parts.insert(at.min(parts.len()), marker);
    parts.concat()
}

fn pad_delta(delta: &[i32]) -> [i32; 4] {
    let mut padded = [0; 4];
    for (slot, d) in padded.iter_mut().zip(delta) {
        *slot = *d;
    }
    padded
}

/// Limit hand name, if the hand reaches one.
pub fn limit_name(han: u32, fu: u32, yakuman: bool) -> Option<&'static str> {
    if yakuman {
        return Some("役満");
    }
    match han {
        13.. => Some("数え役満"),
        11..=12 => Some("三倍満"),
        8..=10 => Some("倍満"),
        6..=7 => Some("跳満"),
        5 => Some("満貫"),
        4 if fu >= 40 => Some("満貫"),
        3 if fu >= 70 => Some("満貫"),
        _ => None,
    }
}

/// e.g. `"30符1飜1000点"`, `"満貫2000-4000点"`, `"役満16000点∀"`.
pub fn point_string(agari: &SingleAgari) -> String {
    let value = match limit_name(agari.han, agari.fu, agari.yakuman) {
        Some(name) => name.to_string(),
        None => format!("{}符{}飜", agari.fu, agari.han),
    };

    let points = match agari.point {
        AgariPoint::Ron { points, .. } => format!("{}点", points),
        AgariPoint::DealerTsumo { each } => format!("{}点∀", each),
        AgariPoint::Tsumo { non_dealer, dealer } => format!("{}-{}点", non_dealer, dealer),
    };

    value + &points
}
