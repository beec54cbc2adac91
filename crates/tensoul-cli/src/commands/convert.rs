//! Convert command: game record to tenhou log.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tensoul_core::{Config, GameRecord, NameTable, TsumoLoss, convert_record};

pub fn run(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    tsumo_loss_off: bool,
    names: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let mut config = config.clone();
    if tsumo_loss_off {
        config.scoring.tsumo_loss = Some(TsumoLoss::Abolished);
    }

    let names = match names {
        Some(path) => NameTable::load(path)
            .with_context(|| format!("Failed to load name table {}", path.display()))?,
        None => config.load_names()?,
    };

    let record = GameRecord::load(input)
        .with_context(|| format!("Failed to read record {}", input.display()))?;
    let document = convert_record(&record, &config, &names)?;

    let content = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    if let Some(output_path) = output {
        fs::write(output_path, &content)?;
        eprintln!("Exported to: {}", output_path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}
