use crate::game::{Tile, relative_seat};
use crate::score::Liability;

/// Honor melds of one kind that make the last feeder liable.
const WIND_SET: u32 = 4;
const DRAGON_SET: u32 = 4;

/// Per-seat honor meld counters used to attribute liability.
#[derive(Debug, Clone, Default)]
pub struct LiabilityTracker {
    winds: [u32; 4],
    dragons: [u32; 4],
    liability: Liability,
}

impl LiabilityTracker {
    /// Count a triplet or quad of `tile` for `owner`.
    ///
    /// `feeder` is `None` for concealed quads: they count towards the set
    /// but never make anyone liable.
    pub fn count(&mut self, tile: Tile, owner: usize, feeder: Option<usize>) {
        if tile.is_wind() {
            self.winds[owner] += 1;
            if self.winds[owner] == WIND_SET {
                self.liability.wind = feeder;
            }
        } else if tile.is_dragon() {
            self.dragons[owner] += 1;
            if self.dragons[owner] == DRAGON_SET {
                self.liability.dragon = feeder;
            }
        }
    }

    pub fn winds(&self, seat: usize) -> u32 {
        self.winds[seat]
    }

    pub fn dragons(&self, seat: usize) -> u32 {
        self.dragons[seat]
    }

    pub fn liability(&self) -> Liability {
        self.liability
    }
}

/// Mutable state of the round in flight that is not part of the record.
#[derive(Debug, Clone)]
pub struct RoundContext {
    pub dealer: usize,
    /// Tile moved from the dealer's starting hand into their first draw.
    pub moved_tile: Option<Tile>,
    pub last_discarder: Option<usize>,
    /// Riichi declarations that survived until the next draw or call.
    pub riichi: u32,
    pub pending_riichi: bool,
    pub kans: u32,
    /// Sticks and honba already paid to a ron.
    pub pot_taken: bool,
    pub liability: LiabilityTracker,
}

impl RoundContext {
    pub fn new(dealer: usize, moved_tile: Option<Tile>) -> Self {
        Self {
            dealer,
            moved_tile,
            last_discarder: None,
            riichi: 0,
            pending_riichi: false,
            kans: 0,
            pot_taken: false,
            liability: LiabilityTracker::default(),
        }
    }

    /// A riichi counts once play continues past the declaring discard.
    pub fn commit_riichi(&mut self) {
        if self.pending_riichi {
            self.pending_riichi = false;
            self.riichi += 1;
        }
    }

    /// Feeder index of the last discarder relative to `caller`.
    pub fn feeder_of(&self, caller: usize) -> u8 {
        self.last_discarder
            .map_or(0, |feeder| relative_seat(caller, feeder))
    }
}
