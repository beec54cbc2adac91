use serde::Serialize;

use super::Tile;

/// Seat of the caller's feeder relative to the caller.
pub const FEEDER_KAMICHA: u8 = 0;
pub const FEEDER_TOIMEN: u8 = 1;
pub const FEEDER_SHIMOCHA: u8 = 2;

/// Relative feeder index of `feeder` as seen from `caller`.
///
/// 0 = left (kamicha), 1 = across (toimen), 2 = right (shimocha).
pub fn relative_seat(caller: usize, feeder: usize) -> u8 {
    ((caller + 3 + 4 - feeder % 4) % 4) as u8
}

/// What a seat put down on its turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionSymbol {
    Discard {
        tile: Tile,
        tsumogiri: bool,
        riichi: bool,
    },
    /// Called tile last, as delivered upstream.
    Chi { tiles: [Tile; 3] },
    /// Called tile last.
    Pon { tiles: [Tile; 3], feeder: u8 },
    /// Called tile last.
    Daiminkan { tiles: [Tile; 4], feeder: u8 },
    Ankan { tile: Tile },
    /// Added kan upgraded from `pon`, keeping the pon's feeder.
    Kakan {
        pon: [Tile; 3],
        added: Tile,
        feeder: u8,
    },
    /// Placeholder discard after an open kan.
    Zero,
    /// North tile set aside (three-player only).
    North,
}

/// One entry of a seat's draw list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Draw {
    Tile(Tile),
    Call(ActionSymbol),
}
