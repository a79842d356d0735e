//! Decode command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::console::format_replay_console;
use super::read_replay;

/// Run the decode command
pub fn run(path: &Path, json: bool, max_size: u64) -> Result<()> {
    let bytes = read_replay(path, max_size)?;
    let record = thrp_core::decode(&bytes)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    info!("Decoded {} ({} replay)", path.display(), record.game());

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", format_replay_console(&record));
    }
    Ok(())
}
