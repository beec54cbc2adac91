use serde::Serialize;
use strum::IntoStaticStr;

use super::{RoundIdentity, Tile};

/// Upstream yaku id for big four winds.
pub const DAISUUSHI: u32 = 50;
/// Upstream yaku id for big three dragons.
pub const DAISANGEN: u32 = 37;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Yaku {
    pub id: u32,
    pub value: u32,
}

/// Points shown for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgariPoint {
    Ron { points: i32, dealer: bool },
    /// Non-dealer tsumo: what each non-dealer and the dealer pay.
    Tsumo { non_dealer: i32, dealer: i32 },
    /// Dealer tsumo: what each other seat pays.
    DealerTsumo { each: i32 },
}

/// Settlement of one declarant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleAgari {
    pub seat: usize,
    /// Seat that supplied the winning tile; the winner itself on tsumo.
    pub from_seat: usize,
    /// Liable seat, or the winner when no liability applies.
    pub pao_seat: usize,
    pub han: u32,
    pub fu: u32,
    pub yaku: Vec<Yaku>,
    pub dealer: bool,
    pub tsumo: bool,
    pub yakuman: bool,
    pub point: AgariPoint,
    pub delta: Vec<i32>,
}

impl SingleAgari {
    pub fn has_liability(&self) -> bool {
        self.pao_seat != self.seat
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
pub enum SpecialRyukyoku {
    /// Nine different terminals and honors.
    #[strum(serialize = "九種九牌")]
    KyushuKyuhai,
    /// Same wind discarded by all four seats on the first go-around.
    #[strum(serialize = "四風連打")]
    SuufonRenda,
    #[strum(serialize = "四家立直")]
    SuuchaRiichi,
    #[strum(serialize = "四槓散了")]
    SuuKaikan,
}

impl SpecialRyukyoku {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundResult {
    Agari {
        agari: Vec<SingleAgari>,
        uras: Vec<Tile>,
        round: RoundIdentity,
    },
    Ryukyoku {
        delta: [i32; 4],
        nagashi_mangan: bool,
    },
    Special { reason: SpecialRyukyoku },
}

impl RoundResult {
    /// Net point change per seat (4 seats, unused seat 0).
    pub fn total_delta(&self) -> [i32; 4] {
        let mut total = [0; 4];
        match self {
            Self::Agari { agari, .. } => {
                for single in agari {
                    for (sum, d) in total.iter_mut().zip(&single.delta) {
                        *sum += d;
                    }
                }
            }
            Self::Ryukyoku { delta, .. } => total = *delta,
            Self::Special { .. } => {}
        }
        total
    }
}
