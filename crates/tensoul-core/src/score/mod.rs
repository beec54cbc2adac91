//! Point settlement for wins.
//!
//! All amounts are integers in points. Honba and riichi sticks are paid out
//! once per round; liability (pao) moves yakuman payments onto the seat that
//! fed the decisive meld.

mod calculator;
mod policy;

pub use calculator::*;
pub use policy::*;

/// Yakuman payment units, per yakuman multiple.
pub mod yakuman {
    /// Dealer tsumo: paid by each other seat.
    pub const DEALER_TSUMO_EACH: i32 = 16000;
    /// Dealer ron.
    pub const DEALER_RON: i32 = 48000;
    /// Non-dealer tsumo: paid by the dealer.
    pub const TSUMO_FROM_DEALER: i32 = 16000;
    /// Non-dealer tsumo: paid by each non-dealer.
    pub const TSUMO_FROM_NON_DEALER: i32 = 8000;
    /// Non-dealer ron.
    pub const NON_DEALER_RON: i32 = 32000;
}

/// Riichi stick value.
pub const RIICHI_STICK: i32 = 1000;

/// Honba value per payer.
pub const HONBA: i32 = 100;
