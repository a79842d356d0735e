//! Byte cursor utilities for parsing replay structures.
//!
//! `ByteBuffer` is a position-tracking little-endian reader over a decoded
//! replay buffer. Every read is bounds-checked and reports the failing
//! offset, so truncated files surface as a single `DecodeError` rather than
//! a panic.

use encoding_rs::SHIFT_JIS;
use tracing::debug;

use crate::error::{DecodeError, DecodeResult};

/// Text encodings used by fixed-width string fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextEncoding {
    Ascii,
    ShiftJis,
}

/// A position-tracking byte reader for parsing binary data structures.
///
/// # Example
///
/// ```ignore
/// let data = [0x78, 0x56, 0x34, 0x12];
/// let mut buf = ByteBuffer::new(&data);
/// assert_eq!(buf.read_u32()?, 0x12345678);
/// assert_eq!(buf.remaining(), 0);
/// ```
pub(crate) struct ByteBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteBuffer<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a buffer positioned at `pos`.
    pub(crate) fn at(data: &'a [u8], pos: usize) -> DecodeResult<Self> {
        let mut buf = Self::new(data);
        buf.set_position(pos)?;
        Ok(buf)
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Sets the current read position.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is beyond the buffer length.
    pub(crate) fn set_position(&mut self, pos: usize) -> DecodeResult<()> {
        if pos > self.data.len() {
            return Err(DecodeError::OutOfBounds {
                offset: pos,
                len: 0,
                size: self.data.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }

    pub(crate) fn skip(&mut self, count: usize) -> DecodeResult<()> {
        let target = self
            .pos
            .checked_add(count)
            .ok_or(DecodeError::OutOfBounds {
                offset: self.pos,
                len: count,
                size: self.data.len(),
            })?;
        self.set_position(target)
    }

    /// Returns a slice of bytes at the specified offset without advancing position.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is out of bounds.
    pub(crate) fn slice_at(&self, offset: usize, len: usize) -> DecodeResult<&'a [u8]> {
        let out_of_bounds = DecodeError::OutOfBounds {
            offset,
            len,
            size: self.data.len(),
        };
        let end = offset.checked_add(len).ok_or(out_of_bounds.clone())?;
        if end > self.data.len() {
            return Err(out_of_bounds);
        }
        Ok(&self.data[offset..end])
    }

    /// Reads the specified number of bytes and advances the position.
    pub(crate) fn read_bytes(&mut self, count: usize) -> DecodeResult<&'a [u8]> {
        let bytes = self.slice_at(self.pos, count)?;
        self.pos += count;
        Ok(bytes)
    }

    pub(crate) fn read_u32(&mut self) -> DecodeResult<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub(crate) fn read_u8_at(&self, offset: usize) -> DecodeResult<u8> {
        Ok(self.slice_at(offset, 1)?[0])
    }

    pub(crate) fn read_u16_at(&self, offset: usize) -> DecodeResult<u16> {
        let bytes = self.slice_at(offset, 2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub(crate) fn read_u32_at(&self, offset: usize) -> DecodeResult<u32> {
        let bytes = self.slice_at(offset, 4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub(crate) fn read_u64_at(&self, offset: usize) -> DecodeResult<u64> {
        let bytes = self.slice_at(offset, 8)?;
        Ok(u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    pub(crate) fn read_f32_at(&self, offset: usize) -> DecodeResult<f32> {
        Ok(f32::from_bits(self.read_u32_at(offset)?))
    }

    /// Reads a fixed-width text field at `offset`, stopping at the first null byte.
    pub(crate) fn read_text_at(
        &self,
        offset: usize,
        len: usize,
        encoding: TextEncoding,
        field: &'static str,
    ) -> DecodeResult<String> {
        decode_text(self.slice_at(offset, len)?, encoding, field)
    }

    /// Consumes `expected` or fails with a signature mismatch.
    pub(crate) fn expect_bytes(&mut self, expected: &'static [u8]) -> DecodeResult<()> {
        let offset = self.pos;
        if self.read_bytes(expected.len())? != expected {
            return Err(DecodeError::Signature { offset, expected });
        }
        Ok(())
    }
}

/// Decodes a text field, truncating at the first null byte.
///
/// ASCII fields reject non-ASCII bytes; Shift-JIS fields decode lossily.
pub(crate) fn decode_text(
    bytes: &[u8],
    encoding: TextEncoding,
    field: &'static str,
) -> DecodeResult<String> {
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let bytes = &bytes[..len];

    match encoding {
        TextEncoding::Ascii => {
            if !bytes.is_ascii() {
                return Err(DecodeError::Text(field));
            }
            Ok(bytes.iter().map(|&b| b as char).collect())
        }
        TextEncoding::ShiftJis => Ok(decode_shift_jis(bytes)),
    }
}

/// Decodes Shift-JIS bytes to `String`.
pub(crate) fn decode_shift_jis(bytes: &[u8]) -> String {
    let (decoded, _, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        debug!(
            "Shift-JIS decoding had errors for bytes: {:?}",
            &bytes[..bytes.len().min(20)]
        );
    }
    decoded.into_owned()
}
