pub mod config;
pub mod error;
pub mod export;
pub mod game;
pub mod record;
pub mod score;
pub mod transcoder;

pub use config::{Config, NameLookup, NameTable};
pub use error::{Error, Result};
pub use export::{TenhouWriter, format_game_summary, format_kyoku_console};
pub use game::{
    ActionSymbol, AgariPoint, Draw, Kyoku, RoundEvent, RoundIdentity, RoundResult, SingleAgari,
    SpecialRyukyoku, Suit, Tile,
};
pub use record::{GameRecord, Transcoded, convert_record, transcode_record};
pub use score::{SettlementContext, TsumoLoss, settle, settle_all};
pub use transcoder::{Transcoder, transcode};
