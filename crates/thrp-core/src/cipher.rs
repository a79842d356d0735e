//! Symmetric de-obfuscation transforms used by replay files.
//!
//! Older games use a rolling-subtract stream cipher keyed by one header byte.
//! Newer games shuffle fixed-size blocks and XOR them with a rolling base;
//! they apply the shuffle twice with different parameters.

/// Parameters for one block-shuffle pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCipher {
    pub block_size: usize,
    pub base: u8,
    pub add: u8,
}

impl BlockCipher {
    pub const fn new(block_size: usize, base: u8, add: u8) -> Self {
        Self {
            block_size,
            base,
            add,
        }
    }

    /// Runs this pass over `data` in place.
    pub fn apply(&self, data: &mut [u8]) {
        block_shuffle_xor(data, self.block_size, self.base, self.add);
    }
}

/// Reverses the rolling-subtract cipher in place.
///
/// `plain[i] = cipher[i] - key (mod 256)` with `key` advancing by 7 after
/// every byte.
pub fn rolling_subtract(data: &mut [u8], key: u8) {
    let mut key = key;
    for byte in data.iter_mut() {
        *byte = byte.wrapping_sub(key);
        key = key.wrapping_add(7);
    }
}

/// Applies the rolling cipher in the forward direction, the inverse of
/// [`rolling_subtract`].
pub fn rolling_add(data: &mut [u8], key: u8) {
    let mut key = key;
    for byte in data.iter_mut() {
        *byte = byte.wrapping_add(key);
        key = key.wrapping_add(7);
    }
}

/// Number of leading bytes a block-shuffle pass touches.
///
/// A tail shorter than a quarter block is dropped, then one more byte when
/// the buffer length is odd.
fn shuffled_len(length: usize, block_size: usize) -> usize {
    let mut left = length;
    if left % block_size < block_size / 4 {
        left -= left % block_size;
    }
    left.saturating_sub(length & 1)
}

/// Reverses one block-shuffle XOR pass in place.
///
/// Each block's first half (rounded up) is written to every other byte
/// walking back from the block's last byte; the second half fills the
/// remaining positions walking back from the second-to-last byte. A short
/// tail under a quarter block, and the final byte of an odd-length buffer,
/// are left untouched.
pub fn block_shuffle_xor(data: &mut [u8], block_size: usize, base: u8, add: u8) {
    shuffle(data, block_size, base, add, Direction::Decrypt);
}

/// Applies one block-shuffle XOR pass in the forward direction, the inverse
/// of [`block_shuffle_xor`].
pub fn block_shuffle_encrypt(data: &mut [u8], block_size: usize, base: u8, add: u8) {
    shuffle(data, block_size, base, add, Direction::Encrypt);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn shuffle(data: &mut [u8], block_size: usize, base: u8, add: u8, direction: Direction) {
    if block_size == 0 {
        return;
    }

    let source = data.to_vec();
    let mut left = shuffled_len(data.len(), block_size);
    let mut base = base;
    let mut block_size = block_size;
    let mut p = 0usize;

    while left > 0 {
        if left < block_size {
            block_size = left;
        }
        let block_end = p + block_size;

        // Sequential index `p` pairs with the walking index `q`.
        let mut q = block_end - 1;
        for _ in 0..block_size.div_ceil(2) {
            swap_byte(data, &source, p, q, base, direction);
            base = base.wrapping_add(add);
            p += 1;
            q = q.wrapping_sub(2);
        }

        let mut q = block_end.wrapping_sub(2);
        for _ in 0..block_size / 2 {
            swap_byte(data, &source, p, q, base, direction);
            base = base.wrapping_add(add);
            p += 1;
            q = q.wrapping_sub(2);
        }

        left -= block_size;
    }
}

fn swap_byte(data: &mut [u8], source: &[u8], p: usize, q: usize, base: u8, direction: Direction) {
    match direction {
        Direction::Decrypt => data[q] = source[p] ^ base,
        Direction::Encrypt => data[p] = source[q] ^ base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_subtract_known_bytes() {
        // key 0x10: 0x10, 0x17, 0x1E
        let mut data = [0x10, 0x18, 0x20];
        rolling_subtract(&mut data, 0x10);
        assert_eq!(data, [0x00, 0x01, 0x02]);
    }

    #[test]
    fn test_rolling_subtract_wraps_key_and_value() {
        let mut data = [0x00, 0x00];
        rolling_subtract(&mut data, 0xFE);
        // 0 - 0xFE = 0x02; key becomes 0x05, 0 - 0x05 = 0xFB
        assert_eq!(data, [0x02, 0xFB]);
    }

    #[test]
    fn test_block_shuffle_single_block_order() {
        // One 8-byte block, base 0, add 0: source bytes land at 7,5,3,1 then 6,4,2,0.
        let mut data = [0u8, 1, 2, 3, 4, 5, 6, 7];
        block_shuffle_xor(&mut data, 8, 0, 0);
        assert_eq!(data, [7, 3, 6, 2, 5, 1, 4, 0]);
    }

    #[test]
    fn test_block_shuffle_rolling_base() {
        let mut data = [0u8; 4];
        block_shuffle_xor(&mut data, 4, 0x10, 0x01);
        // bases 0x10, 0x11 to positions 3, 1; 0x12, 0x13 to positions 2, 0
        assert_eq!(data, [0x13, 0x11, 0x12, 0x10]);
    }

    #[test]
    fn test_block_shuffle_leaves_odd_trailing_byte() {
        let mut data = [0u8, 1, 2, 3, 4];
        block_shuffle_xor(&mut data, 4, 0, 0);
        assert_eq!(data, [3, 1, 2, 0, 4]);
    }

    #[test]
    fn test_block_shuffle_trims_small_remainder() {
        // 16 + 2 bytes with block 16: remainder 2 < 4, so the tail is untouched.
        let mut data: Vec<u8> = (0..18).collect();
        block_shuffle_xor(&mut data, 16, 0, 0);
        assert_eq!(&data[16..], &[16, 17]);
        assert_eq!(data[15], 0);
    }

    #[test]
    fn test_block_shuffle_short_final_block() {
        // 8 + 6 bytes with block 8: remainder 6 >= 2, processed as a short block.
        let mut data: Vec<u8> = (0..14).collect();
        block_shuffle_xor(&mut data, 8, 0, 0);
        assert_eq!(&data[8..], &[13, 10, 12, 9, 11, 8]);
    }

    #[test]
    fn test_block_shuffle_inverts_encoder() {
        let plain: Vec<u8> = (0..1000u32).map(|i| (i * 31 % 251) as u8).collect();
        let mut data = plain.clone();
        block_shuffle_encrypt(&mut data, 0x80, 0x3D, 0x7A);
        block_shuffle_encrypt(&mut data, 0x400, 0xAA, 0xE1);

        BlockCipher::new(0x400, 0xAA, 0xE1).apply(&mut data);
        BlockCipher::new(0x80, 0x3D, 0x7A).apply(&mut data);
        assert_eq!(data, plain);
    }

    #[test]
    fn test_rolling_add_inverts_subtract() {
        let plain: Vec<u8> = (0..=255).collect();
        let mut data = plain.clone();
        rolling_add(&mut data, 0xC1);
        rolling_subtract(&mut data, 0xC1);
        assert_eq!(data, plain);
    }

    #[test]
    fn test_block_shuffle_single_odd_byte_is_untouched() {
        for block_size in [0x40, 0x80, 0x100, 0x400, 0x800] {
            let mut data = [0x5A];
            block_shuffle_xor(&mut data, block_size, 0xAA, 0xE1);
            assert_eq!(data, [0x5A]);
        }
    }

    #[test]
    fn test_block_shuffle_short_buffers_do_not_panic() {
        for block_size in [4, 0x100, 0x400] {
            for len in 0..16u8 {
                let plain: Vec<u8> = (0..len).collect();
                let mut data = plain.clone();
                block_shuffle_encrypt(&mut data, block_size, 0x5C, 0xE1);
                block_shuffle_xor(&mut data, block_size, 0x5C, 0xE1);
                assert_eq!(data, plain, "block {block_size}, length {len}");
            }
        }
    }
}
