use tracing::debug;

use crate::error::{Error, Result};
use crate::game::{AgariPoint, DAISANGEN, DAISUUSHI, HuleInfo, SingleAgari, Yaku};

use super::{HONBA, RIICHI_STICK, TsumoLoss, yakuman};

/// Seats liable for a yakuman, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Liability {
    /// Feeder of the fourth wind meld.
    pub wind: Option<usize>,
    /// Feeder of the fourth dragon meld.
    pub dragon: Option<usize>,
}

impl Liability {
    /// Liable seat and the yakuman multiple it answers for.
    pub fn resolve(&self, hule: &HuleInfo) -> Option<(usize, i32)> {
        if !hule.yiman {
            return None;
        }

        let mut liable = None;
        let mut multiple = 0;
        for fan in &hule.fans {
            let seat = match fan.id {
                DAISUUSHI => self.wind,
                DAISANGEN => self.dragon,
                _ => None,
            };
            if let Some(seat) = seat.filter(|&seat| seat != hule.seat) {
                liable = Some(seat);
                multiple += fan.val as i32;
            }
        }

        liable.map(|seat| (seat, multiple))
    }
}

/// Round state the settlement of a win depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementContext {
    pub players: usize,
    pub dealer: usize,
    /// Seat of the last discard (or kan declaration).
    pub discarder: Option<usize>,
    pub honba: u32,
    /// Sticks on the table: carried over plus declared this round.
    pub riichi_sticks: u32,
    /// Set once a ron has claimed sticks and honba.
    pub pot_taken: bool,
    pub liability: Liability,
    pub tsumo_loss: TsumoLoss,
}

impl SettlementContext {
    /// Riichi money and honba unit still claimable.
    fn pot(&self) -> (i32, i32) {
        if self.pot_taken {
            (0, 0)
        } else {
            (
                RIICHI_STICK * self.riichi_sticks as i32,
                HONBA * self.honba as i32,
            )
        }
    }

    fn check_seat(&self, seat: usize) -> Result<usize> {
        if seat < self.players {
            Ok(seat)
        } else {
            Err(Error::SeatOutOfRange {
                seat,
                players: self.players,
            })
        }
    }
}

/// Settle a single declarant.
pub fn settle(hule: &HuleInfo, ctx: &SettlementContext) -> Result<SingleAgari> {
    let winner = ctx.check_seat(hule.seat)?;
    let players = ctx.players;
    let n = players as i32;
    let (riichi, honba) = ctx.pot();

    let mut delta;
    let point;
    let from_seat;

    if hule.zimo {
        from_seat = winner;
        let xian = hule.point_zimo_xian;
        let half = ctx.tsumo_loss.half_share(xian);

        delta = vec![-honba - xian - half; players];
        if winner == ctx.dealer {
            delta[winner] = riichi + (n - 1) * (honba + xian + half);
            point = AgariPoint::DealerTsumo { each: xian + half };
        } else {
            let qin = hule.point_zimo_qin;
            let dealer = ctx.check_seat(ctx.dealer)?;
            delta[winner] = riichi + honba + qin + (n - 2) * (honba + xian) + (n - 1) * half;
            delta[dealer] = -honba - qin - half;
            point = AgariPoint::Tsumo {
                non_dealer: xian,
                dealer: qin,
            };
        }
    } else {
        let discarder = ctx
            .discarder
            .ok_or(Error::MissingDiscarder(winner))
            .and_then(|seat| ctx.check_seat(seat))?;
        from_seat = discarder;

        delta = vec![0; players];
        delta[winner] = riichi + (n - 1) * honba + hule.point_rong;
        delta[discarder] = -(n - 1) * honba - hule.point_rong;
        point = AgariPoint::Ron {
            points: hule.point_rong,
            dealer: hule.qinjia,
        };
    }

    let liable = ctx.liability.resolve(hule);
    if let Some((liable, multiple)) = liable {
        let liable = ctx.check_seat(liable)?;
        debug!(
            "Seat {} liable for {}x yakuman of seat {}",
            liable, multiple, winner
        );
        if hule.zimo {
            settle_liable_tsumo(&mut delta, hule, ctx, liable, multiple, honba);
        } else {
            let ron = if hule.qinjia {
                yakuman::DEALER_RON
            } else {
                yakuman::NON_DEALER_RON
            };
            let amount = (n - 1) * honba + multiple * ron / 2;
            delta[liable] -= amount;
            delta[from_seat] += amount;
        }
    }

    Ok(SingleAgari {
        seat: winner,
        from_seat,
        pao_seat: liable.map_or(winner, |(seat, _)| seat),
        han: hule.count,
        fu: hule.fu,
        yaku: hule
            .fans
            .iter()
            .map(|fan| Yaku {
                id: fan.id,
                value: fan.val,
            })
            .collect(),
        dealer: hule.qinjia,
        tsumo: hule.zimo,
        yakuman: hule.yiman,
        point,
        delta,
    })
}

/// Refund every other payer its share of the liable yakuman and charge the
/// liable seat the same amount.
fn settle_liable_tsumo(
    delta: &mut [i32],
    hule: &HuleInfo,
    ctx: &SettlementContext,
    liable: usize,
    multiple: i32,
    honba: i32,
) {
    let (each, from_dealer) = if hule.qinjia {
        (yakuman::DEALER_TSUMO_EACH, yakuman::DEALER_TSUMO_EACH)
    } else {
        (yakuman::TSUMO_FROM_NON_DEALER, yakuman::TSUMO_FROM_DEALER)
    };
    let half = ctx.tsumo_loss.half_share(multiple * each);

    for seat in 0..ctx.players {
        if seat == hule.seat || seat == liable {
            continue;
        }
        let unit = if seat == ctx.dealer {
            from_dealer
        } else {
            each
        };
        let refund = honba + multiple * unit + half;
        delta[seat] += refund;
        delta[liable] -= refund;
    }

    // Three-player dealer tsumo: the absent fourth seat's share is collected
    // from the liable seat as well.
    if ctx.players == 3 && hule.qinjia && ctx.tsumo_loss == TsumoLoss::Standard {
        let absent = multiple * yakuman::DEALER_TSUMO_EACH;
        delta[liable] -= absent;
        delta[hule.seat] += absent;
    }
}

/// Settle simultaneous declarants in event order.
///
/// Only the first ron claims sticks and honba.
pub fn settle_all(
    hules: &[HuleInfo],
    context: &SettlementContext,
) -> Result<(Vec<SingleAgari>, bool)> {
    let mut ctx = *context;
    let mut agari = Vec::with_capacity(hules.len());
    for hule in hules {
        agari.push(settle(hule, &ctx)?);
        if !hule.zimo {
            ctx.pot_taken = true;
        }
    }
    Ok((agari, ctx.pot_taken))
}
