//! Scan command implementation.
//!
//! Decodes every `.rpy` file in a directory. Failures are logged and
//! skipped so one bad file does not stop the batch.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::console::format_replay_summary;
use super::read_replay;

const REPLAY_EXTENSION: &str = "rpy";

/// Tally of a scan run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub decoded: usize,
    pub failed: usize,
}

/// Run the scan command
pub fn run(dir: &Path, max_size: u64) -> Result<()> {
    let files = replay_files(dir)?;
    info!("Scanning {} replay files in {}", files.len(), dir.display());

    let mut summary = ScanSummary::default();
    for path in &files {
        let result = read_replay(path, max_size).and_then(|bytes| {
            thrp_core::decode(&bytes)
                .with_context(|| format!("Failed to decode {}", path.display()))
        });
        match result {
            Ok(record) => {
                summary.decoded += 1;
                println!("{}: {}", path.display(), format_replay_summary(&record));
            }
            Err(e) => {
                summary.failed += 1;
                warn!("Skipping {}: {:#}", path.display(), e);
            }
        }
    }

    println!(
        "Decoded {} of {} replays ({} failed)",
        summary.decoded,
        files.len(),
        summary.failed
    );
    Ok(())
}

/// Lists `.rpy` files directly inside `dir`, sorted by path.
fn replay_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_replay = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(REPLAY_EXTENSION));
        if is_replay && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
