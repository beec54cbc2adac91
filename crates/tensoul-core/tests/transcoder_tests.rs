//! Integration tests for tensoul-core
//!
//! These tests feed decoded event streams through the transcoder and check
//! the sealed rounds it produces.

use serde_json::{Value, json};
use tensoul_core::game::FEEDER_TOIMEN;
use tensoul_core::{
    ActionSymbol, AgariPoint, Draw, Error, Kyoku, RoundEvent, RoundResult, SpecialRyukyoku, Tile,
    Transcoder, TsumoLoss, transcode,
};

fn event(value: Value) -> RoundEvent {
    serde_json::from_value(value).unwrap()
}

fn tile(code: u8) -> Tile {
    Tile::parse(code).unwrap()
}

fn new_round(ju: u32, ben: u32, liqibang: u32) -> RoundEvent {
    event(json!({
        "name": "RecordNewRound",
        "chang": 0, "ju": ju, "ben": ben, "liqibang": liqibang,
        "scores": [25000, 25000, 25000, 25000],
        "doras": ["1m"],
        "tiles0": ["1m", "2m", "3m", "4m", "5m", "6m", "7m", "8m", "9m", "1p", "2p", "3p", "4p", "5z"],
        "tiles1": ["1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", "1p", "2p", "3p", "4p"],
        "tiles2": ["1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", "1p", "2p", "3p", "4p"],
        "tiles3": ["1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", "1p", "2p", "3p", "4p"]
    }))
}

fn discard(seat: usize, tile: &str) -> RoundEvent {
    event(json!({"name": "RecordDiscardTile", "seat": seat, "tile": tile, "moqie": false}))
}

fn riichi(seat: usize, tile: &str) -> RoundEvent {
    event(json!({"name": "RecordDiscardTile", "seat": seat, "tile": tile, "is_liqi": true}))
}

fn deal(seat: usize, tile: &str) -> RoundEvent {
    event(json!({"name": "RecordDealTile", "seat": seat, "tile": tile}))
}

fn pon(seat: usize, tile: &str) -> RoundEvent {
    event(json!({"name": "RecordChiPengGang", "seat": seat, "type": 1, "tiles": [tile, tile, tile]}))
}

fn kan(seat: usize, kind: u32, tile: &str) -> RoundEvent {
    event(json!({"name": "RecordAnGangAddGang", "seat": seat, "type": kind, "tiles": tile}))
}

fn abort(kind: u32) -> RoundEvent {
    event(json!({"name": "RecordLiuJu", "type": kind}))
}

fn pon_of(seat: usize, tiles: [&str; 3]) -> RoundEvent {
    event(json!({"name": "RecordChiPengGang", "seat": seat, "type": 1, "tiles": tiles}))
}

/// Seat 2 pons `tiles` off seat 0, then draws `added` on its next turn.
fn pon_then_draw(tiles: [&str; 3], added: &str) -> Vec<RoundEvent> {
    vec![
        new_round(0, 0, 0),
        discard(0, tiles[2]),
        pon_of(2, tiles),
        discard(2, "1s"),
        deal(3, "2s"),
        discard(3, "2s"),
        deal(0, "3s"),
        discard(0, "3s"),
        deal(1, "4s"),
        discard(1, "4s"),
        deal(2, added),
    ]
}

fn three_player_round() -> RoundEvent {
    event(json!({
        "name": "RecordNewRound",
        "chang": 0, "ju": 0, "ben": 0, "liqibang": 0,
        "scores": [35000, 35000, 35000],
        "tiles0": ["1m", "9m", "1p", "9p", "1s", "9s", "5z", "6z", "7z", "2p", "3p", "4p", "5p", "6p"],
        "tiles1": ["1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", "1p", "2p", "3p", "4p"],
        "tiles2": ["1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", "1p", "2p", "3p", "4p"]
    }))
}

fn run(events: &[RoundEvent]) -> Vec<Kyoku> {
    transcode(events, TsumoLoss::Standard).unwrap()
}

/// Dealer start and discard handling
mod round_start_tests {
    use super::*;

    #[test]
    fn test_dealer_moved_tile_becomes_first_draw() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();

        let flight = transcoder.current().unwrap();
        assert_eq!(flight.kyoku.hands[0].len(), 13);
        assert_eq!(flight.kyoku.draws[0], vec![Draw::Tile(tile(45))]);
        assert_eq!(flight.kyoku.hands[1].len(), 13);
        assert!(flight.kyoku.draws[1].is_empty());
    }

    #[test]
    fn test_dealer_first_discard_of_moved_tile_is_tsumogiri() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();
        transcoder.feed(&discard(0, "5z")).unwrap();

        let discards = &transcoder.current().unwrap().kyoku.discards[0];
        assert_eq!(
            discards[0],
            ActionSymbol::Discard {
                tile: tile(45),
                tsumogiri: true,
                riichi: false,
            }
        );
    }

    #[test]
    fn test_dealer_first_discard_ignores_moqie_flag() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();
        transcoder
            .feed(&event(json!({
                "name": "RecordDiscardTile", "seat": 0, "tile": "1m", "moqie": true
            })))
            .unwrap();

        let discards = &transcoder.current().unwrap().kyoku.discards[0];
        assert!(matches!(
            discards[0],
            ActionSymbol::Discard { tsumogiri: false, .. }
        ));
    }

    #[test]
    fn test_new_dora_indicator_grows_list() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();
        transcoder
            .feed(&event(json!({
                "name": "RecordDealTile", "seat": 1, "tile": "3s", "doras": ["1m", "7p"]
            })))
            .unwrap();

        let doras = &transcoder.current().unwrap().kyoku.doras;
        assert_eq!(doras, &vec![tile(11), tile(27)]);
    }
}

/// Calls and kans
mod call_tests {
    use super::*;

    #[test]
    fn test_pon_records_feeder() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();
        transcoder.feed(&discard(0, "5z")).unwrap();
        transcoder.feed(&pon(2, "5z")).unwrap();

        let draws = &transcoder.current().unwrap().kyoku.draws[2];
        assert_eq!(
            draws.last(),
            Some(&Draw::Call(ActionSymbol::Pon {
                tiles: [tile(45); 3],
                feeder: FEEDER_TOIMEN,
            }))
        );
    }

    #[test]
    fn test_daiminkan_adds_zero_placeholder() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();
        transcoder.feed(&discard(0, "5z")).unwrap();
        transcoder.feed(&deal(1, "1z")).unwrap();
        transcoder.feed(&discard(1, "1z")).unwrap();
        transcoder
            .feed(&event(json!({
                "name": "RecordChiPengGang", "seat": 0, "type": 2,
                "tiles": ["1z", "1z", "1z", "1z"]
            })))
            .unwrap();

        let kyoku = &transcoder.current().unwrap().kyoku;
        assert_eq!(
            kyoku.draws[0].last(),
            Some(&Draw::Call(ActionSymbol::Daiminkan {
                tiles: [tile(41); 4],
                feeder: 2,
            }))
        );
        assert_eq!(kyoku.discards[0].last(), Some(&ActionSymbol::Zero));
    }

    #[test]
    fn test_kakan_replaces_pon() {
        let mut transcoder = Transcoder::default();
        let mut events = pon_then_draw(["5z"; 3], "5z");
        events.push(kan(2, 2, "5z"));
        transcoder.feed_all(&events).unwrap();

        let kyoku = &transcoder.current().unwrap().kyoku;
        let kakan = ActionSymbol::Kakan {
            pon: [tile(45); 3],
            added: tile(45),
            feeder: FEEDER_TOIMEN,
        };
        assert_eq!(kyoku.draws[2][0], Draw::Call(kakan.clone()));
        assert_eq!(kyoku.discards[2].last(), Some(&kakan));
        assert_eq!(transcoder.anomalies(), 0);
    }

    #[test]
    fn test_kakan_without_pon_is_skipped() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();
        transcoder.feed(&kan(1, 2, "7z")).unwrap();

        let kyoku = &transcoder.current().unwrap().kyoku;
        assert!(kyoku.discards[1].is_empty());
        assert_eq!(transcoder.anomalies(), 1);
    }

    #[test]
    fn test_kakan_matches_red_five_in_pon() {
        let mut transcoder = Transcoder::default();
        let mut events = pon_then_draw(["5p", "5p", "0p"], "5p");
        events.push(kan(2, 2, "5p"));
        transcoder.feed_all(&events).unwrap();

        let kyoku = &transcoder.current().unwrap().kyoku;
        let kakan = ActionSymbol::Kakan {
            pon: [tile(25), tile(25), tile(52)],
            added: tile(25),
            feeder: FEEDER_TOIMEN,
        };
        assert_eq!(kyoku.draws[2][0], Draw::Call(kakan.clone()));
        assert_eq!(kyoku.discards[2].last(), Some(&kakan));
        assert_eq!(transcoder.anomalies(), 0);
    }

    #[test]
    fn test_kakan_adds_red_five_to_plain_pon() {
        let mut transcoder = Transcoder::default();
        let mut events = pon_then_draw(["5s"; 3], "0s");
        events.push(kan(2, 2, "0s"));
        transcoder.feed_all(&events).unwrap();

        let kyoku = &transcoder.current().unwrap().kyoku;
        assert_eq!(
            kyoku.discards[2].last(),
            Some(&ActionSymbol::Kakan {
                pon: [tile(35); 3],
                added: tile(53),
                feeder: FEEDER_TOIMEN,
            })
        );
        assert_eq!(transcoder.anomalies(), 0);
    }

    #[test]
    fn test_kakan_without_pon_keeps_new_doras() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();
        transcoder
            .feed(&event(json!({
                "name": "RecordAnGangAddGang", "seat": 1, "type": 2, "tiles": "7z",
                "doras": ["1m", "4p"]
            })))
            .unwrap();

        let kyoku = &transcoder.current().unwrap().kyoku;
        assert_eq!(kyoku.doras, vec![tile(11), tile(24)]);
        assert_eq!(transcoder.anomalies(), 1);
    }

    #[test]
    fn test_ankan_goes_to_discards() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();
        transcoder.feed(&kan(0, 3, "0p")).unwrap();

        let kyoku = &transcoder.current().unwrap().kyoku;
        assert_eq!(
            kyoku.discards[0],
            vec![ActionSymbol::Ankan { tile: tile(25) }]
        );
    }

    #[test]
    fn test_north_set_aside() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();
        transcoder
            .feed(&event(json!({"name": "RecordBaBei", "seat": 1})))
            .unwrap();

        let kyoku = &transcoder.current().unwrap().kyoku;
        assert_eq!(kyoku.discards[1], vec![ActionSymbol::North]);
    }

    #[test]
    fn test_invalid_call_type() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();
        let err = transcoder
            .feed(&event(json!({
                "name": "RecordChiPengGang", "seat": 1, "type": 7, "tiles": ["1m", "1m", "1m"]
            })))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCallType { kind: 7, .. }));
    }

    #[test]
    fn test_malformed_chi() {
        let mut transcoder = Transcoder::default();
        transcoder.feed(&new_round(0, 0, 0)).unwrap();
        let err = transcoder
            .feed(&event(json!({
                "name": "RecordChiPengGang", "seat": 1, "type": 0, "tiles": ["1m", "2m"]
            })))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedMeld {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }
}

/// Draws and abortive draws
mod ryukyoku_tests {
    use super::*;

    #[test]
    fn test_four_riichi_abort() {
        let events = vec![
            new_round(0, 0, 0),
            riichi(0, "5z"),
            deal(1, "1z"),
            riichi(1, "1z"),
            deal(2, "2z"),
            riichi(2, "2z"),
            deal(3, "3z"),
            riichi(3, "3z"),
            abort(4),
        ];
        let kyokus = run(&events);
        assert_eq!(
            kyokus[0].result,
            Some(RoundResult::Special {
                reason: SpecialRyukyoku::SuuchaRiichi
            })
        );
    }

    #[test]
    fn test_four_kan_abort() {
        let events = vec![
            new_round(0, 0, 0),
            kan(0, 3, "1z"),
            kan(1, 3, "2z"),
            kan(2, 3, "3z"),
            kan(3, 3, "4z"),
            abort(4),
        ];
        let kyokus = run(&events);
        assert_eq!(
            kyokus[0].result,
            Some(RoundResult::Special {
                reason: SpecialRyukyoku::SuuKaikan
            })
        );
    }

    #[test]
    fn test_explicit_abort_kinds() {
        let kyokus = run(&[new_round(0, 0, 0), abort(1), new_round(1, 0, 0), abort(2)]);
        assert_eq!(kyokus.len(), 2);
        assert_eq!(
            kyokus[0].result,
            Some(RoundResult::Special {
                reason: SpecialRyukyoku::KyushuKyuhai
            })
        );
        assert_eq!(
            kyokus[1].result,
            Some(RoundResult::Special {
                reason: SpecialRyukyoku::SuufonRenda
            })
        );
    }

    #[test]
    fn test_unknown_abort() {
        let err = transcode(&[new_round(0, 0, 0), abort(3)], TsumoLoss::Standard).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownAbort {
                kind: 3,
                riichi: 0,
                kan: 0
            }
        ));
    }

    #[test]
    fn test_exhaustive_draw_sums_groups() {
        let no_tile = event(json!({
            "name": "RecordNoTile",
            "liujumanguan": true,
            "scores": [
                {"seat": 0, "delta_scores": [12000, -4000, -4000, -4000]},
                {"seat": 2, "delta_scores": [-4000, -2000, 8000, -2000]}
            ]
        }));
        let kyokus = run(&[new_round(0, 0, 0), no_tile]);
        assert_eq!(
            kyokus[0].result,
            Some(RoundResult::Ryukyoku {
                delta: [8000, -6000, 4000, -6000],
                nagashi_mangan: true,
            })
        );
    }

    #[test]
    fn test_exhaustive_draw_without_scores() {
        let no_tile = event(json!({"name": "RecordNoTile", "liujumanguan": false}));
        let kyokus = run(&[new_round(0, 0, 0), no_tile]);
        assert_eq!(
            kyokus[0].result,
            Some(RoundResult::Ryukyoku {
                delta: [0; 4],
                nagashi_mangan: false,
            })
        );
    }
}

/// Wins and settlement
mod agari_tests {
    use super::*;

    #[test]
    fn test_double_ron_pays_pot_once() {
        let hule = event(json!({
            "name": "RecordHule",
            "hules": [
                {"seat": 1, "count": 4, "fu": 30, "point_rong": 8000, "li_doras": ["2m"]},
                {"seat": 2, "count": 3, "fu": 30, "point_rong": 3900}
            ]
        }));
        let kyokus = run(&[new_round(0, 1, 1), discard(0, "5z"), hule]);

        let Some(RoundResult::Agari { agari, uras, .. }) = &kyokus[0].result else {
            panic!("Expected agari");
        };
        assert_eq!(uras, &vec![tile(12)]);
        assert_eq!(agari[0].delta, vec![-8300, 9300, 0, 0]);
        assert_eq!(agari[1].delta, vec![-3900, 0, 3900, 0]);
        assert_eq!(agari[0].from_seat, 0);
        assert_eq!(
            kyokus[0].result.as_ref().unwrap().total_delta(),
            [-12200, 9300, 3900, 0]
        );
    }

    #[test]
    fn test_riichi_stick_committed_before_win() {
        let hule = event(json!({
            "name": "RecordHule",
            "hules": [{"seat": 2, "count": 1, "fu": 30, "point_rong": 1000}]
        }));
        let events = vec![
            new_round(0, 0, 0),
            riichi(0, "5z"),
            deal(1, "1z"),
            discard(1, "1z"),
            hule,
        ];
        let kyokus = run(&events);
        let Some(RoundResult::Agari { agari, .. }) = &kyokus[0].result else {
            panic!("Expected agari");
        };
        assert_eq!(agari[0].delta, vec![0, -1000, 2000, 0]);
    }

    #[test]
    fn test_ron_after_riichi_discard_skips_stick() {
        let hule = event(json!({
            "name": "RecordHule",
            "hules": [{"seat": 2, "count": 1, "fu": 30, "point_rong": 1000}]
        }));
        let kyokus = run(&[new_round(0, 0, 0), riichi(0, "5z"), hule]);
        let Some(RoundResult::Agari { agari, .. }) = &kyokus[0].result else {
            panic!("Expected agari");
        };
        assert_eq!(agari[0].delta, vec![-1000, 0, 1000, 0]);
    }

    #[test]
    fn test_three_dragon_pons_assign_no_liability() {
        let hule = event(json!({
            "name": "RecordHule",
            "hules": [{
                "seat": 1, "zimo": true, "yiman": true, "count": 13,
                "fans": [{"id": 37, "val": 1}],
                "point_zimo_qin": 16000, "point_zimo_xian": 8000
            }]
        }));
        let events = vec![
            new_round(0, 0, 0),
            discard(0, "5z"),
            pon(1, "5z"),
            discard(1, "1m"),
            deal(2, "6z"),
            discard(2, "6z"),
            pon(1, "6z"),
            discard(1, "2m"),
            deal(2, "3m"),
            discard(2, "3m"),
            deal(3, "7z"),
            discard(3, "7z"),
            pon(1, "7z"),
            discard(1, "4m"),
            deal(2, "9s"),
            discard(2, "9s"),
            deal(3, "9s"),
            discard(3, "9s"),
            deal(0, "9m"),
            discard(0, "9m"),
            deal(1, "1p"),
            hule,
        ];
        let kyokus = run(&events);
        let Some(RoundResult::Agari { agari, .. }) = &kyokus[0].result else {
            panic!("Expected agari");
        };
        assert_eq!(agari[0].pao_seat, 1);
        assert!(!agari[0].has_liability());
        assert_eq!(agari[0].delta, vec![-16000, 32000, -8000, -8000]);
        assert_eq!(
            agari[0].point,
            AgariPoint::Tsumo {
                non_dealer: 8000,
                dealer: 16000
            }
        );
    }

    #[test]
    fn test_wind_liability_after_four_pons() {
        let mut events = vec![new_round(0, 0, 0)];
        for wind in ["1z", "2z", "3z", "4z"] {
            events.push(discard(3, wind));
            events.push(pon(1, wind));
            events.push(discard(1, "9m"));
        }
        events.push(deal(1, "1p"));
        events.push(event(json!({
            "name": "RecordHule",
            "hules": [{
                "seat": 1, "zimo": true, "yiman": true, "count": 26,
                "fans": [{"id": 50, "val": 2}],
                "point_zimo_qin": 32000, "point_zimo_xian": 16000
            }]
        })));

        let kyokus = run(&events);
        let Some(RoundResult::Agari { agari, .. }) = &kyokus[0].result else {
            panic!("Expected agari");
        };
        assert_eq!(agari[0].pao_seat, 3);
        assert_eq!(agari[0].delta, vec![0, 64000, 0, -64000]);
        assert_eq!(agari[0].delta.iter().sum::<i32>(), 0);
    }

    #[test]
    fn test_robbing_a_kan_pays_from_declarer() {
        let mut events = pon_then_draw(["5z"; 3], "5z");
        events.push(kan(2, 2, "5z"));
        events.push(event(json!({
            "name": "RecordHule",
            "hules": [{"seat": 3, "count": 2, "fu": 30, "point_rong": 2000}]
        })));

        let kyokus = run(&events);
        let Some(RoundResult::Agari { agari, .. }) = &kyokus[0].result else {
            panic!("Expected agari");
        };
        assert_eq!(agari[0].from_seat, 2);
        assert_eq!(agari[0].delta, vec![0, 0, -2000, 2000]);
    }

    #[test]
    fn test_wind_liability_on_ron_with_honba() {
        let mut events = vec![new_round(0, 2, 0)];
        for wind in ["1z", "2z", "3z", "4z"] {
            events.push(discard(3, wind));
            events.push(pon(1, wind));
            events.push(discard(1, "9m"));
        }
        events.push(deal(0, "8m"));
        events.push(discard(0, "8m"));
        events.push(event(json!({
            "name": "RecordHule",
            "hules": [{
                "seat": 1, "yiman": true, "count": 26,
                "fans": [{"id": 50, "val": 2}],
                "point_rong": 64000
            }]
        })));

        let kyokus = run(&events);
        let Some(RoundResult::Agari { agari, .. }) = &kyokus[0].result else {
            panic!("Expected agari");
        };
        assert_eq!(agari[0].from_seat, 0);
        assert_eq!(agari[0].pao_seat, 3);
        // discarder gets back the full honba and half the yakuman from seat 3
        assert_eq!(agari[0].delta, vec![-32000, 64600, 0, -32600]);
        assert_eq!(agari[0].delta.iter().sum::<i32>(), 0);
    }

    #[test]
    fn test_three_player_liable_dealer_tsumo_without_tsumo_loss() {
        let mut events = vec![three_player_round()];
        for wind in ["1z", "2z", "3z", "4z"] {
            events.push(discard(2, wind));
            events.push(pon(0, wind));
            events.push(discard(0, "9m"));
        }
        events.push(deal(0, "1p"));
        events.push(event(json!({
            "name": "RecordHule",
            "hules": [{
                "seat": 0, "zimo": true, "qinjia": true, "yiman": true, "count": 13,
                "fans": [{"id": 50, "val": 1}],
                "point_zimo_xian": 16000
            }]
        })));

        let kyokus = transcode(&events, TsumoLoss::Abolished).unwrap();
        let Some(RoundResult::Agari { agari, .. }) = &kyokus[0].result else {
            panic!("Expected agari");
        };
        assert_eq!(agari[0].pao_seat, 2);
        assert_eq!(agari[0].delta, vec![48000, 0, -48000]);
        assert_eq!(agari[0].delta.iter().sum::<i32>(), 0);
        assert_eq!(agari[0].point, AgariPoint::DealerTsumo { each: 24000 });
    }

    #[test]
    fn test_ron_without_discard() {
        let hule = event(json!({
            "name": "RecordHule",
            "hules": [{"seat": 2, "count": 1, "fu": 30, "point_rong": 1000}]
        }));
        let err = transcode(&[new_round(0, 0, 0), hule], TsumoLoss::Standard).unwrap_err();
        assert!(matches!(err, Error::MissingDiscarder(2)));
    }
}

/// Stream-level behavior
mod stream_tests {
    use super::*;

    #[test]
    fn test_event_before_round() {
        let err = Transcoder::default().feed(&deal(0, "1m")).unwrap_err();
        assert!(matches!(err, Error::NoRoundInProgress("RecordDealTile")));
    }

    #[test]
    fn test_unfinished_round_is_kept() {
        let events = [
            new_round(0, 0, 0),
            discard(0, "5z"),
            new_round(1, 0, 0),
            abort(1),
        ];
        let mut transcoder = Transcoder::default();
        transcoder.feed_all(&events).unwrap();
        assert_eq!(transcoder.anomalies(), 1);

        let kyokus = transcoder.finish();
        assert_eq!(kyokus.len(), 2);
        assert!(!kyokus[0].is_sealed());
        assert!(kyokus[1].is_sealed());
    }

    #[test]
    fn test_rounds_in_arrival_order() {
        let kyokus = run(&[
            new_round(0, 0, 0),
            abort(1),
            new_round(0, 1, 0),
            abort(1),
            new_round(1, 0, 0),
            abort(1),
        ]);
        let numbers: Vec<(u32, u32)> = kyokus
            .iter()
            .map(|k| (k.round.number(), k.round.ben))
            .collect();
        assert_eq!(numbers, vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_seat_out_of_range() {
        let three = event(json!({
            "name": "RecordNewRound",
            "scores": [35000, 35000, 35000],
            "tiles0": ["1m"]
        }));
        let mut transcoder = Transcoder::default();
        transcoder.feed(&three).unwrap();
        let err = transcoder.feed(&deal(3, "1m")).unwrap_err();
        assert!(matches!(err, Error::SeatOutOfRange { seat: 3, players: 3 }));
    }
}
