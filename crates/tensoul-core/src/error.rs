use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid tile code: {0}")]
    InvalidTile(u8),

    #[error("Invalid tile notation: {0:?}")]
    InvalidTileNotation(String),

    #[error("Invalid {record} type: {kind}")]
    InvalidCallType { record: &'static str, kind: u32 },

    #[error("Malformed {record}: expected {expected} tiles, got {actual}")]
    MalformedMeld {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Cannot infer abortive draw (type {kind}, riichi {riichi}, kan {kan})")]
    UnknownAbort { kind: u32, riichi: u32, kan: u32 },

    #[error("Ron by seat {0} without a preceding discard")]
    MissingDiscarder(usize),

    #[error("{0} received while no round is in progress")]
    NoRoundInProgress(&'static str),

    #[error("Unsupported player count: {0}")]
    InvalidPlayerCount(usize),

    #[error("Seat {seat} out of range for {players} players")]
    SeatOutOfRange { seat: usize, players: usize },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
