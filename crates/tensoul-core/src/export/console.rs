//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::config::NameLookup;
use crate::game::{Kyoku, RoundIdentity, RoundResult};

use super::tenhou::{AGARI, NAGASHI_MANGAN, RYUKYOKU, point_string};

const WINDS: [&str; 4] = ["東", "南", "西", "北"];

/// Round label such as `東2局 1本場`.
pub fn round_label(round: &RoundIdentity) -> String {
    format!(
        "{}{}局 {}本場",
        WINDS[(round.chang % 4) as usize],
        round.ju + 1,
        round.ben
    )
}

/// Format one round for console display.
///
/// Unfinished rounds are shown with a `-` result.
pub fn format_kyoku_console(kyoku: &Kyoku, names: &dyn NameLookup) -> String {
    let mut output = String::new();
    let border = "━".repeat(40);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {} (riichi sticks {})",
        round_label(&kyoku.round).bold(),
        kyoku.round.riichi_sticks
    );
    let _ = writeln!(output, "{}", border_dim);

    match &kyoku.result {
        Some(RoundResult::Agari { agari, .. }) => {
            for single in agari {
                let from = if single.tsumo {
                    "tsumo".to_string()
                } else {
                    format!("ron from seat {}", single.from_seat)
                };
                let _ = writeln!(
                    output,
                    "  RESULT : {} seat {} {} {}",
                    AGARI.green(),
                    single.seat,
                    from,
                    point_string(single)
                );
                let yaku: Vec<String> = single
                    .yaku
                    .iter()
                    .map(|y| names.yaku_name(y.id))
                    .collect();
                let _ = writeln!(output, "  YAKU   : {}", yaku.join(" "));
                if single.has_liability() {
                    let _ = writeln!(output, "  PAO    : seat {}", single.pao_seat.red());
                }
            }
        }
        Some(RoundResult::Ryukyoku { nagashi_mangan, .. }) => {
            let label = if *nagashi_mangan {
                NAGASHI_MANGAN
            } else {
                RYUKYOKU
            };
            let _ = writeln!(output, "  RESULT : {}", label.cyan());
        }
        Some(RoundResult::Special { reason }) => {
            let _ = writeln!(output, "  RESULT : {}", reason.label().yellow());
        }
        None => {
            let _ = writeln!(output, "  RESULT : -");
        }
    }

    let delta = kyoku
        .result
        .as_ref()
        .map(|r| r.total_delta())
        .unwrap_or_default();
    let _ = writeln!(
        output,
        "  DELTA  : {}",
        format_delta(&delta[..kyoku.players.min(4)])
    );
    let _ = write!(output, "{}", border_dim);

    output
}

/// Signed deltas joined with `/`, gains green and losses red.
fn format_delta(delta: &[i32]) -> String {
    delta
        .iter()
        .map(|d| match d.signum() {
            1 => format!("+{}", d).green().to_string(),
            -1 => d.red().to_string(),
            _ => d.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Format a one-line summary of a whole game.
pub fn format_game_summary(kyokus: &[Kyoku], anomalies: u32) -> String {
    let sealed = kyokus.iter().filter(|k| k.is_sealed()).count();
    let wins = kyokus
        .iter()
        .filter(|k| matches!(k.result, Some(RoundResult::Agari { .. })))
        .count();
    format!(
        "{} rounds ({} wins, {} draws), {} anomalies",
        kyokus.len(),
        wins,
        sealed - wins,
        anomalies
    )
}
