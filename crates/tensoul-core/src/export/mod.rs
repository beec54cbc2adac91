//! Export formats for transcoded rounds.
//!
//! - `tenhou` - tenhou-6 JSON log entries
//! - `console` - colored per-round summaries

pub mod console;
pub mod tenhou;

pub use console::{format_game_summary, format_kyoku_console, round_label};
pub use tenhou::{TenhouWriter, limit_name, point_string};
