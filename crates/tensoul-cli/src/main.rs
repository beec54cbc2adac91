mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG unset: warnings only
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tensoul_cli=warn,tensoul_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(args.config.as_deref())?;

    match args.command {
        Command::Convert {
            input,
            output,
            tsumo_loss_off,
            names,
            pretty,
        } => commands::convert::run(
            &config,
            &input,
            output.as_deref(),
            tsumo_loss_off,
            names.as_deref(),
            pretty,
        ),
        Command::Summary { input } => commands::summary::run(&config, &input),
    }
}
