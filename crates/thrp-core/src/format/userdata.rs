//! USER section reader.
//!
//! ```text
//! Offset   Field              Size
//! ──────────────────────────────────
//! 0x00     "USER"             4
//! 0x04     Section length     4       includes this 12-byte header
//! 0x08     (unknown)          4
//! 0x0C     Shift-JIS text, CR LF separated lines
//! ```
//!
//! Modern games open with a description line followed by `Key Value`
//! lines; th08 writes `Key\tValue` lines.

use tracing::debug;

use crate::bytes::{ByteBuffer, decode_shift_jis};
use crate::error::DecodeResult;

const MAGIC: &[u8] = b"USER";
const HEADER_LEN: usize = 12;

/// Keys containing a space, matched before splitting on the first space.
const MULTI_WORD_KEYS: &[&str] = &["Slow Rate"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UserSection {
    lines: Vec<String>,
}

impl UserSection {
    /// Parses the section starting at `offset` in `data`.
    ///
    /// A length field running past the end of the file is clamped.
    pub(crate) fn parse(data: &[u8], offset: usize) -> DecodeResult<Self> {
        let mut buf = ByteBuffer::at(data, offset)?;
        buf.expect_bytes(MAGIC)?;
        let declared = buf.read_u32()? as usize;
        buf.skip(4)?;

        let text_len = declared.saturating_sub(HEADER_LEN).min(buf.remaining());
        if text_len + HEADER_LEN != declared {
            debug!("USER section declares {declared} bytes, {text_len} text bytes available");
        }
        let text = decode_shift_jis(buf.read_bytes(text_len)?);
        Ok(Self::from_text(&text))
    }

    fn from_text(text: &str) -> Self {
        let lines = text
            .split("\r\n")
            .map(|line| line.trim_end_matches('\0').to_string())
            .filter(|line| !line.is_empty())
            .collect();
        Self { lines }
    }

    /// First line of the section.
    pub(crate) fn description(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Value of the first line whose whole key equals `key`, trimmed.
    pub(crate) fn value(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| {
            let (line_key, value) = split_entry(line)?;
            (line_key == key).then(|| value.trim())
        })
    }
}

/// Splits a `Key\tValue` or `Key Value` line.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    if let Some(entry) = line.split_once('\t') {
        return Some(entry);
    }
    for &key in MULTI_WORD_KEYS {
        if let Some(value) = line.strip_prefix(key).and_then(|rest| rest.strip_prefix(' ')) {
            return Some((key, value));
        }
    }
    line.split_once(' ')
}
