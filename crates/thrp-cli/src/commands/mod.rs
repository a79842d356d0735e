//! CLI command implementations.

pub mod console;
pub mod decode;
pub mod scan;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Reads a replay file, refusing anything over `max_size` bytes.
pub fn read_replay(path: &Path, max_size: u64) -> Result<Vec<u8>> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to stat {}", path.display()))?;
    if metadata.len() > max_size {
        bail!(
            "{} is {} bytes, over the {} byte limit",
            path.display(),
            metadata.len(),
            max_size
        );
    }
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}
