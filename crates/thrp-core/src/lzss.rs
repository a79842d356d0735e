//! LZSS decompressor for replay bodies.
//!
//! The bitstream is read most-significant bit first. A `1` flag is followed
//! by an 8-bit literal; a `0` flag by a 13-bit dictionary index and a 4-bit
//! length (minus 3). Dictionary writes interleave with reads byte by byte, so
//! a reference may overlap the bytes it is producing.

use tracing::debug;

/// Size of the sliding dictionary.
pub const DICTIONARY_SIZE: usize = 0x2000;

const DICTIONARY_MASK: usize = DICTIONARY_SIZE - 1;
const INDEX_BITS: u32 = 13;
const LENGTH_BITS: u32 = 4;
const MIN_MATCH: usize = 3;

/// Largest output one input byte can expand to (an 18-byte match costs 18 bits).
const MAX_EXPANSION: usize = 8;

/// MSB-first bit cursor refilling one byte at a time.
struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
    current: u8,
    mask: u8,
}

impl<'a> BitReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            current: 0,
            mask: 0,
        }
    }

    fn read_bit(&mut self) -> Option<bool> {
        if self.mask == 0 {
            self.current = *self.data.get(self.pos)?;
            self.pos += 1;
            self.mask = 0x80;
        }
        let bit = self.current & self.mask != 0;
        self.mask >>= 1;
        Some(bit)
    }

    fn read_bits(&mut self, count: u32) -> Option<usize> {
        let mut value = 0usize;
        for _ in 0..count {
            value = (value << 1) | usize::from(self.read_bit()?);
        }
        Some(value)
    }
}

/// Sliding dictionary. The write head starts at slot 1.
struct Window {
    bytes: [u8; DICTIONARY_SIZE],
    head: usize,
}

impl Window {
    fn new() -> Self {
        Self {
            bytes: [0; DICTIONARY_SIZE],
            head: 1,
        }
    }

    fn get(&self, slot: usize) -> u8 {
        self.bytes[slot & DICTIONARY_MASK]
    }

    fn push(&mut self, byte: u8) {
        self.bytes[self.head] = byte;
        self.head = (self.head + 1) & DICTIONARY_MASK;
    }
}

/// Decompresses `data` into at most `output_len` bytes.
///
/// Never fails: running out of input mid-token, or reaching the zero-index
/// end marker, returns whatever has been produced so far. Callers decide
/// whether a short result is usable.
pub fn decompress(data: &[u8], output_len: usize) -> Vec<u8> {
    let capacity = output_len.min(data.len().saturating_mul(MAX_EXPANSION));
    let mut output = Vec::with_capacity(capacity);
    let mut window = Window::new();
    let mut bits = BitReader::new(data);

    while output.len() < output_len {
        let Some(is_literal) = bits.read_bit() else {
            break;
        };

        if is_literal {
            let Some(byte) = bits.read_bits(8) else {
                break;
            };
            output.push(byte as u8);
            window.push(byte as u8);
            continue;
        }

        let Some(index) = bits.read_bits(INDEX_BITS) else {
            break;
        };
        if index == 0 {
            break;
        }
        let Some(length) = bits.read_bits(LENGTH_BITS) else {
            break;
        };

        for k in 0..length + MIN_MATCH {
            if output.len() >= output_len {
                break;
            }
            let byte = window.get(index + k);
            output.push(byte);
            window.push(byte);
        }
    }

    if output.len() < output_len {
        debug!(
            "LZSS stream ended early: {} of {} bytes from {} input bytes",
            output.len(),
            output_len,
            data.len()
        );
    }
    output
}
