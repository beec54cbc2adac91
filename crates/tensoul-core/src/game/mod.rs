//! Round data model.
//!
//! - `Tile` - tile codec
//! - `ActionSymbol` / `Draw` - per-seat draw and discard entries
//! - `Kyoku` - one round and its `RoundResult`
//! - `RoundEvent` - decoded input records

mod event;
mod kyoku;
mod result;
mod symbol;
mod tile;

pub use event::*;
pub use kyoku::*;
pub use result::*;
pub use symbol::*;
pub use tile::*;
