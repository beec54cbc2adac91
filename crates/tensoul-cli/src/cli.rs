//! CLI argument definitions for tensoul.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tensoul")]
#[command(about = "Mahjong Soul record to tenhou log converter", version)]
pub struct Args {
    /// Config file (TOML)
    #[arg(long, value_name = "FILE", global = true, env = "TENSOUL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a game record into a tenhou log
    Convert {
        /// Game record JSON
        input: PathBuf,
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Settle tsumo wins without tsumo loss
        #[arg(long)]
        tsumo_loss_off: bool,
        /// Name table JSON (overrides the config)
        #[arg(long, value_name = "FILE")]
        names: Option<PathBuf>,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print a per-round summary of a game record
    Summary {
        /// Game record JSON
        input: PathBuf,
    },
}
