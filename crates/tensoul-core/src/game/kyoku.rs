use serde::Serialize;

use super::{ActionSymbol, Draw, RoundResult, Tile};

/// Position of a round within the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RoundIdentity {
    /// Prevailing wind, 0-indexed (0 = east).
    pub chang: u32,
    /// Dealer seat / round within the wind.
    pub ju: u32,
    /// Honba (repeat counter).
    pub ben: u32,
    /// Riichi sticks left on the table at round start.
    pub riichi_sticks: u32,
}

impl RoundIdentity {
    /// Global round number (0 = East 1, 4 = South 1, ...).
    pub fn number(&self) -> u32 {
        4 * self.chang + self.ju
    }
}

/// One round of the match.
///
/// Seat-indexed lists always hold four entries; the unused seat of a
/// three-player game stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kyoku {
    pub round: RoundIdentity,
    pub players: usize,
    pub initial_scores: [i32; 4],
    pub doras: Vec<Tile>,
    pub hands: [Vec<Tile>; 4],
    pub draws: [Vec<Draw>; 4],
    pub discards: [Vec<ActionSymbol>; 4],
    pub result: Option<RoundResult>,
}

impl Kyoku {
    pub fn new(round: RoundIdentity, players: usize, scores: &[i32], doras: Vec<Tile>) -> Self {
        let mut initial_scores = [0; 4];
        for (slot, score) in initial_scores.iter_mut().zip(scores) {
            *slot = *score;
        }

        Self {
            round,
            players,
            initial_scores,
            doras,
            hands: Default::default(),
            draws: Default::default(),
            discards: Default::default(),
            result: None,
        }
    }

    pub fn is_sealed(&self) -> bool {
        self.result.is_some()
    }

    /// Uras shown by the result; empty unless the round ended in a win.
    pub fn uras(&self) -> &[Tile] {
        match &self.result {
            Some(RoundResult::Agari { uras, .. }) => uras,
            _ => &[],
        }
    }

    /// Replace the dora list when `doras` reveals more indicators.
    pub fn grow_doras(&mut self, doras: &[Tile]) {
        if doras.len() > self.doras.len() {
            self.doras = doras.to_vec();
        }
    }
}
