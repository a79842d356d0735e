//! CLI argument definitions for thrp.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Largest replay file accepted, in bytes.
pub const MAX_REPLAY_SIZE: u64 = 1_000_000;

#[derive(Parser)]
#[command(name = "thrp")]
#[command(about = "Touhou replay decoder", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a single replay file
    Decode {
        /// Replay file (.rpy)
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Reject files larger than this many bytes
        #[arg(long, default_value_t = MAX_REPLAY_SIZE, env = "THRP_MAX_SIZE")]
        max_size: u64,
    },
    /// Decode every .rpy file in a directory, skipping failures
    Scan {
        /// Directory to scan
        dir: PathBuf,
        /// Reject files larger than this many bytes
        #[arg(long, default_value_t = MAX_REPLAY_SIZE, env = "THRP_MAX_SIZE")]
        max_size: u64,
    },
}
