//! Per-event handlers of the round state machine.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::game::{
    ActionSymbol, AnGangAddGang, BaBei, ChiPengGang, DealTile, DiscardTile, Draw, Hule, Kyoku,
    LiuJu, NewRound, NoTile, RoundIdentity, RoundResult, SpecialRyukyoku, Tile,
};
use crate::score::{SettlementContext, settle_all};

use super::{InFlight, RoundContext, RoundState, Transcoder};

const CALL_CHI: u32 = 0;
const CALL_PON: u32 = 1;
const CALL_DAIMINKAN: u32 = 2;

const KAN_ADDED: u32 = 2;
const KAN_CONCEALED: u32 = 3;

const ABORT_KYUSHU: u32 = 1;
const ABORT_SUUFON: u32 = 2;

/// Riichi declarations or kans that abort the round.
const ABORT_COUNT: u32 = 4;

fn meld_tiles<const N: usize>(record: &'static str, tiles: &[Tile]) -> Result<[Tile; N]> {
    tiles.try_into().map_err(|_| Error::MalformedMeld {
        record,
        expected: N,
        actual: tiles.len(),
    })
}

impl Transcoder {
    pub(super) fn handle_new_round(&mut self, record: &NewRound) -> Result<()> {
        // Well-formed streams never start a round over an unfinished one.
        self.seal_unfinished();

        let players = record.players();
        if !(3..=4).contains(&players) {
            return Err(Error::InvalidPlayerCount(players));
        }
        let dealer = record.ju as usize;
        if dealer >= players {
            return Err(Error::SeatOutOfRange {
                seat: dealer,
                players,
            });
        }

        let round = RoundIdentity {
            chang: record.chang,
            ju: record.ju,
            ben: record.ben,
            riichi_sticks: record.liqibang,
        };
        let mut kyoku = Kyoku::new(round, players, &record.scores, record.initial_doras());
        for (seat, hand) in kyoku.hands.iter_mut().enumerate() {
            *hand = record.tiles(seat).to_vec();
        }

        // The dealer starts with 14 tiles; the last one is recorded as a draw.
        let moved_tile = kyoku.hands[dealer].pop();
        if let Some(tile) = moved_tile {
            kyoku.draws[dealer].push(Draw::Tile(tile));
        }

        debug!(
            "Round {}-{} started (dealer {}, {} players)",
            round.number(),
            round.ben,
            dealer,
            players
        );

        self.state = RoundState::InRound(Box::new(InFlight {
            kyoku,
            ctx: RoundContext::new(dealer, moved_tile),
        }));
        Ok(())
    }

    pub(super) fn handle_discard_tile(&mut self, record: &DiscardTile) -> Result<()> {
        let flight = self.in_round("RecordDiscardTile")?;
        let seat = flight.check_seat(record.seat)?;
        let InFlight { kyoku, ctx } = flight;

        // The client marks the dealer's opening discard as from hand.
        let tsumogiri = if seat == ctx.dealer && kyoku.discards[seat].is_empty() {
            ctx.moved_tile == Some(record.tile)
        } else {
            record.moqie
        };

        let riichi = record.is_liqi || record.is_wliqi;
        if riichi {
            ctx.pending_riichi = true;
        }

        kyoku.discards[seat].push(ActionSymbol::Discard {
            tile: record.tile,
            tsumogiri,
            riichi,
        });
        ctx.last_discarder = Some(seat);
        kyoku.grow_doras(&record.doras);
        Ok(())
    }

    pub(super) fn handle_deal_tile(&mut self, record: &DealTile) -> Result<()> {
        let flight = self.in_round("RecordDealTile")?;
        let seat = flight.check_seat(record.seat)?;
        let InFlight { kyoku, ctx } = flight;

        ctx.commit_riichi();
        kyoku.grow_doras(&record.doras);
        kyoku.draws[seat].push(Draw::Tile(record.tile));
        Ok(())
    }

    pub(super) fn handle_chi_peng_gang(&mut self, record: &ChiPengGang) -> Result<()> {
        const NAME: &str = "RecordChiPengGang";

        let flight = self.in_round(NAME)?;
        let seat = flight.check_seat(record.seat)?;
        let InFlight { kyoku, ctx } = flight;

        ctx.commit_riichi();

        match record.kind {
            CALL_CHI => {
                let tiles = meld_tiles::<3>(NAME, &record.tiles)?;
                kyoku.draws[seat].push(Draw::Call(ActionSymbol::Chi { tiles }));
            }
            CALL_PON => {
                let tiles = meld_tiles::<3>(NAME, &record.tiles)?;
                let feeder = ctx.feeder_of(seat);
                ctx.liability.count(tiles[0], seat, ctx.last_discarder);
                kyoku.draws[seat].push(Draw::Call(ActionSymbol::Pon { tiles, feeder }));
            }
            CALL_DAIMINKAN => {
                let tiles = meld_tiles::<4>(NAME, &record.tiles)?;
                let feeder = ctx.feeder_of(seat);
                ctx.liability.count(tiles[0], seat, ctx.last_discarder);
                kyoku.draws[seat].push(Draw::Call(ActionSymbol::Daiminkan { tiles, feeder }));
                kyoku.discards[seat].push(ActionSymbol::Zero);
                ctx.kans += 1;
            }
            kind => {
                return Err(Error::InvalidCallType { record: NAME, kind });
            }
        }
        Ok(())
    }

    pub(super) fn handle_an_gang_add_gang(&mut self, record: &AnGangAddGang) -> Result<()> {
        const NAME: &str = "RecordAnGangAddGang";

        let flight = self.in_round(NAME)?;
        let seat = flight.check_seat(record.seat)?;
        let InFlight { kyoku, ctx } = flight;
        let tile = record.tile;

        // A kan may be robbed: the declarer stands in for the discarder.
        ctx.last_discarder = Some(seat);
        kyoku.grow_doras(&record.doras);

        match record.kind {
            KAN_CONCEALED => {
                ctx.liability.count(tile, seat, None);
                kyoku.discards[seat].push(ActionSymbol::Ankan { tile: tile.deaka() });
                ctx.kans += 1;
            }
            KAN_ADDED => {
                let found = kyoku.draws[seat]
                    .iter()
                    .enumerate()
                    .find_map(|(i, draw)| match draw {
                        Draw::Call(ActionSymbol::Pon { tiles, feeder })
                            if tiles[2].same_kind(&tile) =>
                        {
                            Some((i, *tiles, *feeder))
                        }
                        _ => None,
                    });

                let Some((index, pon, feeder)) = found else {
                    warn!(
                        "Added kan of {} by seat {} has no matching pon in round {}-{}, skipped",
                        tile,
                        seat,
                        kyoku.round.number(),
                        kyoku.round.ben
                    );
                    self.anomalies += 1;
                    return Ok(());
                };

                let kakan = ActionSymbol::Kakan {
                    pon,
                    added: tile,
                    feeder,
                };
                kyoku.draws[seat][index] = Draw::Call(kakan.clone());
                kyoku.discards[seat].push(kakan);
                ctx.kans += 1;
            }
            kind => {
                return Err(Error::InvalidCallType { record: NAME, kind });
            }
        }
        Ok(())
    }

    pub(super) fn handle_ba_bei(&mut self, record: &BaBei) -> Result<()> {
        let flight = self.in_round("RecordBaBei")?;
        let seat = flight.check_seat(record.seat)?;
        flight.kyoku.discards[seat].push(ActionSymbol::North);
        Ok(())
    }

    pub(super) fn handle_liu_ju(&mut self, record: &LiuJu) -> Result<()> {
        let ctx = &mut self.in_round("RecordLiuJu")?.ctx;
        ctx.commit_riichi();

        let reason = match record.kind {
            ABORT_KYUSHU => SpecialRyukyoku::KyushuKyuhai,
            ABORT_SUUFON => SpecialRyukyoku::SuufonRenda,
            _ if ctx.riichi == ABORT_COUNT => SpecialRyukyoku::SuuchaRiichi,
            _ if ctx.kans == ABORT_COUNT => SpecialRyukyoku::SuuKaikan,
            kind => {
                return Err(Error::UnknownAbort {
                    kind,
                    riichi: ctx.riichi,
                    kan: ctx.kans,
                });
            }
        };

        self.seal(RoundResult::Special { reason });
        Ok(())
    }

    pub(super) fn handle_no_tile(&mut self, record: &NoTile) -> Result<()> {
        self.in_round("RecordNoTile")?;

        // Absent when every seat is tenpai or every seat is noten. Several
        // groups only appear with more than one nagashi mangan.
        let mut delta = [0; 4];
        for score in &record.scores {
            for (sum, d) in delta.iter_mut().zip(&score.delta_scores) {
                *sum += d;
            }
        }

        self.seal(RoundResult::Ryukyoku {
            delta,
            nagashi_mangan: record.liujumanguan,
        });
        Ok(())
    }

    pub(super) fn handle_hule(&mut self, record: &Hule) -> Result<()> {
        let tsumo_loss = self.tsumo_loss;
        let flight = self.in_round("RecordHule")?;
        let InFlight { kyoku, ctx } = flight;

        // Longest ura list: a riichi and a dama hand may win together.
        let mut uras: &[Tile] = &[];
        for hule in &record.hules {
            if hule.li_doras.len() > uras.len() {
                uras = &hule.li_doras;
            }
        }
        let uras = uras.to_vec();

        let settlement = SettlementContext {
            players: kyoku.players,
            dealer: ctx.dealer,
            discarder: ctx.last_discarder,
            honba: kyoku.round.ben,
            riichi_sticks: kyoku.round.riichi_sticks + ctx.riichi,
            pot_taken: ctx.pot_taken,
            liability: ctx.liability.liability(),
            tsumo_loss,
        };
        let (agari, pot_taken) = settle_all(&record.hules, &settlement)?;
        ctx.pot_taken = pot_taken;

        let round = kyoku.round;
        self.seal(RoundResult::Agari { agari, uras, round });
        Ok(())
    }
}
