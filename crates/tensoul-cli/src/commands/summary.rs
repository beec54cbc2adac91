//! Summary command: per-round console overview.

use std::path::Path;

use anyhow::{Context, Result};
use tensoul_core::export::{format_game_summary, format_kyoku_console};
use tensoul_core::{Config, GameRecord, transcode_record};

pub fn run(config: &Config, input: &Path) -> Result<()> {
    let names = config.load_names()?;
    let record = GameRecord::load(input)
        .with_context(|| format!("Failed to read record {}", input.display()))?;

    let transcoded = transcode_record(&record, config)?;
    for kyoku in &transcoded.kyokus {
        println!("{}", format_kyoku_console(kyoku, &names));
    }
    println!(
        "{}",
        format_game_summary(&transcoded.kyokus, transcoded.anomalies)
    );

    Ok(())
}
